// Library side of the terminal app: everything that does not touch the screen.
pub mod animation;
pub mod calendar;
pub mod chart;
pub mod config;
pub mod content;
pub mod domain;
pub mod geometry;
pub mod logging;
pub mod navigation;
pub mod page;
pub mod report;

pub use domain::{AppleDay, StatAxis, StatRank, StatSet};
