pub mod popup;
pub mod radar;
