pub mod checks;
mod settings;
pub mod utils;

pub use settings::{panel_groups, TomlSettings, DEFAULT_PANEL_GROUP};
