//! Various shared helpers the panel uses.
pub mod delayed_save;
pub mod observers;
pub mod screen_layout;
