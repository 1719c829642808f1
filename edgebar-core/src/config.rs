//! Persisted panel settings and the store contract.
mod panel_config;

pub use panel_config::{Alignment, Edge, Orientation, PanelConfig, ParseEdgeError};

use crate::errors::Result;
use std::time::Duration;

pub const PANEL_DEFAULT_SIZE: i32 = 32;
pub const PANEL_MINIMUM_SIZE: i32 = 16;
pub const PANEL_DEFAULT_ICON_SIZE: i32 = 22;
pub const PANEL_DEFAULT_LINE_COUNT: i32 = 1;
/// Thickness of the strip left on screen while autohidden.
pub const AUTOHIDE_SIZE: i32 = 1;
/// Quiet period before a batch of setting changes is written.
pub const SETTINGS_SAVE_DELAY: Duration = Duration::from_millis(3000);

/// A grouped key/value store, one group per panel and one per plugin.
///
/// Groups are kept in memory; `sync` writes them out.
pub trait Settings {
    /// Read a panel group. Missing or malformed values fall back to defaults.
    fn load_panel(&self, group: &str) -> PanelConfig;

    fn save_panel(&mut self, group: &str, config: &PanelConfig) -> Result<()>;

    /// The `type` key of a plugin group.
    fn plugin_type(&self, group: &str) -> Option<String>;

    fn set_plugin_type(&mut self, group: &str, type_id: &str);

    fn groups(&self) -> Vec<String>;

    fn has_group(&self, group: &str) -> bool {
        self.groups().iter().any(|g| g == group)
    }

    fn remove_group(&mut self, group: &str);

    /// Persist everything.
    fn sync(&mut self) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[allow(clippy::module_name_repetitions)]
    #[derive(Default, Debug)]
    pub struct TestSettings {
        pub panels: BTreeMap<String, PanelConfig>,
        pub plugin_types: BTreeMap<String, String>,
        pub syncs: usize,
    }

    impl TestSettings {
        pub fn with_plugins(types: &[&str]) -> Self {
            let mut settings = Self::default();
            let mut config = PanelConfig::default();
            for type_id in types {
                settings.plugin_types.insert((*type_id).to_owned(), (*type_id).to_owned());
                config.plugins.push((*type_id).to_owned());
            }
            settings.panels.insert("panel1".to_owned(), config);
            settings
        }
    }

    impl Settings for TestSettings {
        fn load_panel(&self, group: &str) -> PanelConfig {
            self.panels.get(group).cloned().unwrap_or_default()
        }

        fn save_panel(&mut self, group: &str, config: &PanelConfig) -> Result<()> {
            self.panels.insert(group.to_owned(), config.clone());
            Ok(())
        }

        fn plugin_type(&self, group: &str) -> Option<String> {
            self.plugin_types.get(group).cloned()
        }

        fn set_plugin_type(&mut self, group: &str, type_id: &str) {
            self.plugin_types.insert(group.to_owned(), type_id.to_owned());
        }

        fn groups(&self) -> Vec<String> {
            self.panels
                .keys()
                .chain(self.plugin_types.keys())
                .cloned()
                .collect()
        }

        fn remove_group(&mut self, group: &str) {
            self.panels.remove(group);
            self.plugin_types.remove(group);
        }

        fn sync(&mut self) -> Result<()> {
            self.syncs += 1;
            Ok(())
        }
    }

    #[test]
    fn test_settings_report_every_group() {
        let settings = TestSettings::with_plugins(&["mainmenu", "taskbar"]);
        assert!(settings.has_group("panel1"));
        assert!(settings.has_group("taskbar"));
        assert!(!settings.has_group("clock"));
        assert_eq!(settings.plugin_type("mainmenu").as_deref(), Some("mainmenu"));
    }
}
