use super::{PanelInfo, PanelRequest, Plugin, PluginContext, PluginRegistry, PluginStartInfo};
use crate::config::{Orientation, Settings};
use crate::errors::{EdgebarError, Result};
use crate::models::{Handle, TaskWindowTracker, WindowHandle, Xyhw, XyhwBuilder};

/// A request together with the settings group of the plugin that made it.
pub type TaggedRequest<H> = (String, PanelRequest<H>);

pub struct PluginEntry<H: Handle> {
    pub type_id: String,
    pub settings_group: String,
    plugin: Box<dyn Plugin<H>>,
    /// Panel coordinates.
    pub slot: Xyhw,
    pub holds_lock: bool,
    pub popup: Option<WindowHandle<H>>,
}

impl<H: Handle> std::fmt::Debug for PluginEntry<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginEntry")
            .field("type_id", &self.type_id)
            .field("settings_group", &self.settings_group)
            .field("slot", &self.slot)
            .field("holds_lock", &self.holds_lock)
            .field("popup", &self.popup)
            .finish_non_exhaustive()
    }
}

impl<H: Handle> PluginEntry<H> {
    fn call<F>(&mut self, f: F) -> Vec<TaggedRequest<H>>
    where
        F: FnOnce(&mut dyn Plugin<H>, &mut PluginContext<H>),
    {
        let mut ctx = PluginContext::default();
        f(self.plugin.as_mut(), &mut ctx);
        ctx.into_requests()
            .into_iter()
            .map(|request| (self.settings_group.clone(), request))
            .collect()
    }
}

/// Owns the loaded plugins in display order.
pub struct PluginHost<H: Handle> {
    registry: PluginRegistry<H>,
    entries: Vec<PluginEntry<H>>,
}

impl<H: Handle> PluginHost<H> {
    pub fn new(registry: PluginRegistry<H>) -> Self {
        Self {
            registry,
            entries: vec![],
        }
    }

    pub const fn registry(&self) -> &PluginRegistry<H> {
        &self.registry
    }

    /// Load every group of a panel's plugin list. Broken entries are logged
    /// and skipped.
    pub fn load_all(&mut self, groups: &[String], settings: &impl Settings) {
        for group in groups {
            if let Err(err) = self.load(group, settings) {
                tracing::warn!("Skipping plugin {}: {}", group, err);
            }
        }
        tracing::info!("Loaded {} of {} plugins", self.entries.len(), groups.len());
    }

    pub fn load(&mut self, group: &str, settings: &impl Settings) -> Result<()> {
        if self.get(group).is_some() {
            tracing::warn!("Plugin {} is listed twice", group);
            return Ok(());
        }
        let type_id = settings
            .plugin_type(group)
            .ok_or_else(|| EdgebarError::MissingSection(group.to_owned()))?;
        let info = PluginStartInfo {
            type_id,
            settings_group: group.to_owned(),
        };
        let plugin = self
            .registry
            .create(&info)
            .ok_or_else(|| EdgebarError::UnknownPlugin(info.type_id.clone()))?;
        self.entries.push(PluginEntry {
            type_id: info.type_id,
            settings_group: info.settings_group,
            plugin,
            slot: Xyhw::default(),
            holds_lock: false,
            popup: None,
        });
        Ok(())
    }

    /// Create a new instance of `type_id` in a fresh settings group and
    /// append it. Returns the group.
    pub fn add_plugin(&mut self, type_id: &str, settings: &mut impl Settings) -> Result<String> {
        if !self.registry.contains(type_id) {
            return Err(EdgebarError::UnknownPlugin(type_id.to_owned()));
        }
        let group = self.free_group_name(type_id, &*settings);
        settings.set_plugin_type(&group, type_id);
        self.load(&group, &*settings)?;
        Ok(group)
    }

    /// First unused `{type}{n}` with `n >= 2`.
    fn free_group_name(&self, type_id: &str, settings: &impl Settings) -> String {
        let mut n = 2;
        loop {
            let group = format!("{type_id}{n}");
            if !settings.has_group(&group) && self.get(&group).is_none() {
                return group;
            }
            n += 1;
        }
    }

    pub fn remove(&mut self, group: &str) -> Option<PluginEntry<H>> {
        let index = self.index_of(group)?;
        Some(self.entries.remove(index))
    }

    /// Move a plugin to `index`, clamped to the end.
    pub fn move_to(&mut self, group: &str, index: usize) -> bool {
        let Some(from) = self.index_of(group) else {
            return false;
        };
        let entry = self.entries.remove(from);
        let to = index.min(self.entries.len());
        self.entries.insert(to, entry);
        from != to
    }

    pub fn get(&self, group: &str) -> Option<&PluginEntry<H>> {
        self.entries.iter().find(|e| e.settings_group == group)
    }

    fn get_mut(&mut self, group: &str) -> Option<&mut PluginEntry<H>> {
        self.entries.iter_mut().find(|e| e.settings_group == group)
    }

    fn index_of(&self, group: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.settings_group == group)
    }

    pub fn settings_groups(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.settings_group.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PluginEntry<H>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Space all plugins need along the long axis.
    pub fn minimum_length(&self, thickness: i32) -> i32 {
        self.entries
            .iter()
            .map(|e| e.plugin.minimum_length(thickness))
            .sum()
    }

    /// Pack the slots along the long axis and tell every plugin.
    pub fn realign(&mut self, panel: &PanelInfo) {
        let thickness = panel.thickness();
        let needed = self.minimum_length(thickness);
        let stretchable = self.entries.iter().filter(|e| e.plugin.is_stretchable()).count() as i32;
        let spare = (panel.length() - needed).max(0);

        let mut offset = 0;
        let mut stretch_index = 0;
        for entry in &mut self.entries {
            let mut length = entry.plugin.minimum_length(thickness);
            if entry.plugin.is_stretchable() {
                length += spare / stretchable;
                if stretch_index < spare % stretchable {
                    length += 1;
                }
                stretch_index += 1;
            }
            let slot = match panel.orientation() {
                Orientation::Horizontal => XyhwBuilder {
                    x: offset,
                    y: 0,
                    w: length,
                    h: thickness,
                },
                Orientation::Vertical => XyhwBuilder {
                    x: 0,
                    y: offset,
                    w: thickness,
                    h: length,
                },
            };
            entry.slot = slot.into();
            entry.plugin.realign(panel, entry.slot);
            offset += length;
        }
    }

    /// Route a click in panel coordinates to the plugin under it.
    pub fn click(&mut self, panel: &PanelInfo, x: i32, y: i32) -> Vec<TaggedRequest<H>> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.slot.contains_point(x, y)) else {
            return vec![];
        };
        let slot = entry.slot;
        entry.call(|plugin, ctx| plugin.on_click(panel, slot, x - slot.x(), y - slot.y(), ctx))
    }

    pub fn tasks_changed(&mut self, tasks: &TaskWindowTracker<H>) {
        for entry in &mut self.entries {
            entry.plugin.on_tasks_changed(tasks);
        }
    }

    pub fn popup_opened(&mut self, owner: &str, handle: WindowHandle<H>) -> bool {
        match self.get_mut(owner) {
            Some(entry) => {
                entry.popup = Some(handle);
                true
            }
            None => false,
        }
    }

    pub fn popup_of(&self, owner: &str) -> Option<WindowHandle<H>> {
        self.get(owner).and_then(|e| e.popup)
    }

    /// A popup went away. Lets its owner react.
    pub fn popup_closed(&mut self, handle: WindowHandle<H>) -> Vec<TaggedRequest<H>> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.popup == Some(handle)) else {
            return vec![];
        };
        entry.popup = None;
        entry.call(|plugin, ctx| plugin.on_popup_closed(ctx))
    }

    /// The owner asked to close a popup that never materialized.
    pub fn popup_lost(&mut self, owner: &str) -> Vec<TaggedRequest<H>> {
        match self.get_mut(owner) {
            Some(entry) => entry.call(|plugin, ctx| plugin.on_popup_closed(ctx)),
            None => vec![],
        }
    }

    /// Record whether `group` holds an autohide lock. Returns whether that
    /// changed.
    pub fn set_lock(&mut self, group: &str, held: bool) -> bool {
        match self.get_mut(group) {
            Some(entry) if entry.holds_lock != held => {
                entry.holds_lock = held;
                true
            }
            _ => false,
        }
    }

    pub fn any_lock(&self) -> bool {
        self.entries.iter().any(|e| e.holds_lock)
    }
}
