// Interactive state for the terminal page and the key/mouse handling on top of it.

pub mod input;
pub mod state;

pub use input::{handle_key, handle_mouse};
pub use state::App;
