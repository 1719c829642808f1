//! The settings store: one TOML file, one table per panel or plugin group.
use edgebar_core::plugins::{MAIN_MENU, TASKBAR};
use edgebar_core::{PanelConfig, Result, Settings};
use std::fs;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use xdg::BaseDirectories;

pub const DEFAULT_PANEL_GROUP: &str = "panel1";

const PLUGIN_TYPE_KEY: &str = "type";

#[derive(Debug, Clone, PartialEq)]
pub struct TomlSettings {
    path: PathBuf,
    table: Table,
}

impl TomlSettings {
    /// `$XDG_CONFIG_HOME/edgebar/panel.toml`, with its directory created.
    ///
    /// # Errors
    ///
    /// Errors if the config directory can't be determined or created.
    pub fn default_path() -> Result<PathBuf> {
        let path = BaseDirectories::with_prefix("edgebar")?;
        Ok(path.place_config_file("panel.toml")?)
    }

    /// Reads the file at `path`. A missing file is created holding a single
    /// bottom panel with a menu and a task list.
    ///
    /// # Errors
    ///
    /// Errors if the file can't be read or written, or isn't valid TOML.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            tracing::debug!("Settings file not found. Writing defaults to {:?}", path);
            let mut settings = Self {
                path,
                table: Self::default_table()?,
            };
            settings.sync()?;
            return Ok(settings);
        }

        tracing::debug!("Settings file '{}' found.", path.to_string_lossy());
        let contents = fs::read_to_string(&path)?;
        Self::parse(path, &contents)
    }

    /// # Errors
    ///
    /// Errors if `contents` isn't valid TOML.
    pub fn parse(path: impl Into<PathBuf>, contents: &str) -> Result<Self> {
        Ok(Self {
            path: path.into(),
            table: contents.parse::<Table>()?,
        })
    }

    /// # Errors
    ///
    /// Only fails if the default panel can't be serialized.
    pub fn default_table() -> Result<Table> {
        let panel = PanelConfig {
            plugins: vec![MAIN_MENU.to_owned(), TASKBAR.to_owned()],
            ..PanelConfig::default()
        };
        let mut table = Table::new();
        table.insert(
            DEFAULT_PANEL_GROUP.to_owned(),
            Value::Table(Table::try_from(panel)?),
        );
        for plugin in [MAIN_MENU, TASKBAR] {
            let mut group = Table::new();
            group.insert(PLUGIN_TYPE_KEY.to_owned(), Value::String(plugin.to_owned()));
            table.insert(plugin.to_owned(), Value::Table(group));
        }
        Ok(table)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn table(&self) -> &Table {
        &self.table
    }

    pub fn panel_groups(&self) -> Vec<String> {
        panel_groups(&self.table)
    }

    fn group_mut(&mut self, group: &str) -> Option<&mut Table> {
        if !self.table.get(group).is_some_and(Value::is_table) {
            if self.table.contains_key(group) {
                tracing::warn!("Settings group {} is not a table, replacing it", group);
            }
            self.table.insert(group.to_owned(), Value::Table(Table::new()));
        }
        self.table.get_mut(group).and_then(Value::as_table_mut)
    }
}

/// Tables that are panels: no plugin type and not listed in any `plugins`
/// array. A listed group missing its type is a broken plugin, not a panel.
pub fn panel_groups(table: &Table) -> Vec<String> {
    let listed: Vec<&str> = table
        .values()
        .filter_map(|value| value.get("plugins")?.as_array())
        .flatten()
        .filter_map(Value::as_str)
        .collect();
    table
        .iter()
        .filter(|(key, value)| {
            value
                .as_table()
                .is_some_and(|t| !t.contains_key(PLUGIN_TYPE_KEY))
                && !listed.contains(&key.as_str())
        })
        .map(|(key, _)| key.clone())
        .collect()
}

/// Deserialize a panel group, dropping only the keys that don't parse.
fn lenient_panel(group: &str, table: &Table) -> PanelConfig {
    if let Ok(config) = table.clone().try_into::<PanelConfig>() {
        return config;
    }
    let mut valid = Table::new();
    for (key, value) in table {
        let mut single = Table::new();
        single.insert(key.clone(), value.clone());
        match single.try_into::<PanelConfig>() {
            Ok(_) => {
                valid.insert(key.clone(), value.clone());
            }
            Err(err) => tracing::warn!("Ignoring {}.{}: {}", group, key, err),
        }
    }
    valid.try_into().unwrap_or_default()
}

impl Settings for TomlSettings {
    fn load_panel(&self, group: &str) -> PanelConfig {
        match self.table.get(group).and_then(Value::as_table) {
            Some(table) => lenient_panel(group, table),
            None => {
                tracing::info!("No settings for panel {}, using defaults", group);
                PanelConfig::default()
            }
        }
    }

    fn save_panel(&mut self, group: &str, config: &PanelConfig) -> Result<()> {
        let values = Table::try_from(config)?;
        // Keys we don't know about are kept.
        if let Some(table) = self.group_mut(group) {
            table.extend(values);
        }
        Ok(())
    }

    fn plugin_type(&self, group: &str) -> Option<String> {
        self.table
            .get(group)?
            .get(PLUGIN_TYPE_KEY)?
            .as_str()
            .map(str::to_owned)
    }

    fn set_plugin_type(&mut self, group: &str, type_id: &str) {
        if let Some(table) = self.group_mut(group) {
            table.insert(PLUGIN_TYPE_KEY.to_owned(), Value::String(type_id.to_owned()));
        }
    }

    fn groups(&self) -> Vec<String> {
        self.table
            .iter()
            .filter(|(_, value)| value.is_table())
            .map(|(key, _)| key.clone())
            .collect()
    }

    fn remove_group(&mut self, group: &str) {
        self.table.remove(group);
    }

    fn sync(&mut self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = toml::to_string_pretty(&self.table)?;
        fs::write(&self.path, contents)?;
        tracing::debug!("Settings written to {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgebar_core::Edge;

    const SAMPLE: &str = r#"
[panel1]
desktop = 1
position = "Top"
panelSize = 40
autohideTb = true
plugins = ["mainmenu"]
theme = "dark"

[mainmenu]
type = "mainmenu"
"#;

    fn sample() -> TomlSettings {
        TomlSettings::parse("/nonexistent/panel.toml", SAMPLE).expect("sample parses")
    }

    #[test]
    fn panel_group_is_read_with_defaults_for_missing_keys() {
        let config = sample().load_panel("panel1");
        assert_eq!(config.screen, 1);
        assert_eq!(config.position, Edge::Top);
        assert_eq!(config.panel_size, 40);
        assert!(config.autohide);
        assert_eq!(config.icon_size, 22);
        assert_eq!(config.plugins, vec!["mainmenu".to_owned()]);
    }

    #[test]
    fn malformed_values_fall_back_one_key_at_a_time() {
        let settings = TomlSettings::parse(
            "/nonexistent/panel.toml",
            "[panel1]\npanelSize = \"huge\"\nposition = \"sideways\"\niconSize = 30\n",
        )
        .expect("valid toml");
        let config = settings.load_panel("panel1");
        assert_eq!(config.panel_size, 32);
        assert_eq!(config.position, Edge::Bottom);
        assert_eq!(config.icon_size, 30);
    }

    #[test]
    fn missing_panel_uses_defaults() {
        assert_eq!(sample().load_panel("panel9"), PanelConfig::default());
    }

    #[test]
    fn plugin_groups_carry_their_type() {
        let mut settings = sample();
        assert_eq!(settings.plugin_type("mainmenu").as_deref(), Some("mainmenu"));
        assert_eq!(settings.plugin_type("panel1"), None);
        settings.set_plugin_type("taskbar2", "taskbar");
        assert!(settings.has_group("taskbar2"));
        assert_eq!(settings.panel_groups(), vec!["panel1".to_owned()]);
    }

    #[test]
    fn listed_groups_without_a_type_are_not_panels() {
        let settings = TomlSettings::parse(
            "/nonexistent/panel.toml",
            "[panel1]\nplugins = [\"clock\"]\n\n[clock]\nformat = \"%H:%M\"\n\n[panel2]\n",
        )
        .expect("valid toml");
        assert_eq!(
            settings.panel_groups(),
            vec!["panel1".to_owned(), "panel2".to_owned()]
        );
    }

    #[test]
    fn saving_keeps_unknown_keys() {
        let mut settings = sample();
        let mut config = settings.load_panel("panel1");
        config.panel_size = 48;
        settings.save_panel("panel1", &config).expect("serializes");

        let group = settings.table().get("panel1").and_then(Value::as_table);
        assert_eq!(group.and_then(|g| g.get("theme")).and_then(Value::as_str), Some("dark"));
        assert_eq!(settings.load_panel("panel1").panel_size, 48);
    }

    #[test]
    fn settings_survive_a_trip_through_the_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("panel.toml");
        let mut settings = TomlSettings::parse(&path, SAMPLE).expect("sample parses");
        settings.remove_group("mainmenu");
        settings.sync().expect("written");

        let reloaded = TomlSettings::load(&path).expect("read back");
        assert_eq!(reloaded.load_panel("panel1"), settings.load_panel("panel1"));
        assert!(!reloaded.has_group("mainmenu"));
    }

    #[test]
    fn missing_file_is_created_with_a_default_panel() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("panel.toml");
        let settings = TomlSettings::load(&path).expect("defaults written");
        assert!(path.exists());

        let config = settings.load_panel(DEFAULT_PANEL_GROUP);
        assert_eq!(config.plugins, vec![MAIN_MENU.to_owned(), TASKBAR.to_owned()]);
        assert_eq!(settings.plugin_type(TASKBAR).as_deref(), Some(TASKBAR));
    }
}
