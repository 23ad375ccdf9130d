pub mod calendar;
pub mod help;
pub mod page;
