use super::{MainMenu, Plugin, TaskBar, MAIN_MENU, TASKBAR};
use crate::models::Handle;
use std::collections::BTreeMap;

/// What a factory gets to build a plugin instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginStartInfo {
    pub type_id: String,
    pub settings_group: String,
}

pub type PluginFactory<H> = fn(&PluginStartInfo) -> Box<dyn Plugin<H>>;

/// Maps plugin type ids to factories.
pub struct PluginRegistry<H: Handle> {
    factories: BTreeMap<String, PluginFactory<H>>,
}

impl<H: Handle> Default for PluginRegistry<H> {
    fn default() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }
}

impl<H: Handle> PluginRegistry<H> {
    /// A registry knowing the plugins shipped with the panel.
    pub fn with_builtins() -> Self {
        let mut registry = Self::default();
        registry.register(MAIN_MENU, |info| Box::new(MainMenu::new(info)));
        registry.register(TASKBAR, |info| Box::new(TaskBar::<H>::new(info)));
        registry
    }

    pub fn register(&mut self, type_id: &str, factory: PluginFactory<H>) {
        if self.factories.insert(type_id.to_owned(), factory).is_some() {
            tracing::debug!("Replaced plugin factory for {}", type_id);
        }
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.factories.contains_key(type_id)
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn create(&self, info: &PluginStartInfo) -> Option<Box<dyn Plugin<H>>> {
        self.factories.get(&info.type_id).map(|factory| factory(info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MockHandle;

    #[test]
    fn builtins_are_registered() {
        let registry = PluginRegistry::<MockHandle>::with_builtins();
        assert_eq!(registry.types().collect::<Vec<_>>(), vec!["mainmenu", "taskbar"]);
    }

    #[test]
    fn unknown_types_create_nothing() {
        let registry = PluginRegistry::<MockHandle>::with_builtins();
        let info = PluginStartInfo {
            type_id: "clock".to_owned(),
            settings_group: "clock".to_owned(),
        };
        assert!(registry.create(&info).is_none());
    }

    #[test]
    fn created_plugin_reports_its_type() {
        let registry = PluginRegistry::<MockHandle>::with_builtins();
        let info = PluginStartInfo {
            type_id: TASKBAR.to_owned(),
            settings_group: "taskbar2".to_owned(),
        };
        let plugin = registry.create(&info).map(|p| p.type_id().to_owned());
        assert_eq!(plugin.as_deref(), Some(TASKBAR));
    }
}
