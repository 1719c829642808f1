use crate::config::{PanelConfig, Settings, SETTINGS_SAVE_DELAY};
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::geometry::{self, PanelGeometry};
use crate::models::{AutohideMachine, Desktop, Handle, Screen, TaskWindowTracker};
use crate::plugins::{PanelInfo, PluginHost, PluginRegistry};
use crate::utils::delayed_save::DelayedSave;
use crate::utils::observers::Observers;
use crate::utils::screen_layout::{can_place_on, find_available_screen, root_area};
use std::collections::VecDeque;
use tokio::time::Instant;

/// Maintains current panel state.
pub struct Panel<H: Handle, S, SERVER> {
    pub config: PanelConfig,
    /// Settings group the panel is stored under.
    pub config_group: String,
    pub settings: S,
    pub display_server: SERVER,
    pub autohide: AutohideMachine<H>,
    pub tracker: TaskWindowTracker<H>,
    pub plugins: PluginHost<H>,
    pub screens: Vec<Screen>,
    pub geometry: Option<PanelGeometry>,
    /// Fired after every recomputation of the geometry.
    pub realigned: Observers<PanelGeometry>,
    pub actions: VecDeque<DisplayAction<H>>,

    pub(crate) delayed_save: DelayedSave,
    pub(crate) visible: bool,
    pub(crate) exit_requested: bool,
}

impl<H, S, SERVER> Panel<H, S, SERVER>
where
    H: Handle,
    S: Settings,
    SERVER: DisplayServer<H>,
{
    /// Load the panel group and connect to the display.
    ///
    /// # Errors
    /// Fails when the display server can't be reached.
    pub fn new(settings: S, config_group: &str, registry: PluginRegistry<H>) -> Result<Self> {
        let config = settings.load_panel(config_group);
        let display_server = SERVER::new(&config)?;
        let screens = display_server.screens();
        let autohide = AutohideMachine::new(display_server.panel_handle(), config.autohide);

        let mut plugins = PluginHost::new(registry);
        plugins.load_all(&config.plugins, &settings);

        Ok(Self {
            config,
            config_group: config_group.to_owned(),
            settings,
            display_server,
            autohide,
            tracker: TaskWindowTracker::default(),
            plugins,
            screens,
            geometry: None,
            realigned: Observers::default(),
            actions: VecDeque::new(),
            delayed_save: DelayedSave::new(SETTINGS_SAVE_DELAY),
            visible: false,
            exit_requested: false,
        })
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Ask the event loop to stop after the current iteration.
    pub fn quit(&mut self) {
        self.exit_requested = true;
    }

    /// Map the panel on all desktops and lay it out for the first time.
    pub fn show(&mut self) {
        if self.screens.is_empty() {
            self.screens = self.display_server.screens();
        }
        self.ensure_placeable();

        let panel = self.display_server.panel_handle();
        self.actions.push_back(DisplayAction::MoveToDesktop(panel, Desktop::All));
        self.actions.push_back(DisplayAction::ShowPanel);
        self.visible = true;

        self.refresh_task_list();
        self.realign();
    }

    pub fn hide(&mut self) {
        if self.visible {
            self.visible = false;
            self.actions.push_back(DisplayAction::HidePanel);
        }
    }

    /// Recompute geometry and strut and push them to the display server.
    /// Does nothing while the panel is not mapped.
    pub fn realign(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        let Some(screen) = self
            .screens
            .get(self.config.screen)
            .map(|s| s.bbox)
            .or_else(|| self.display_server.screen_geometry(self.config.screen))
        else {
            tracing::warn!("Screen {} is not connected, not placing panel", self.config.screen);
            return false;
        };

        let thickness = geometry::shown_thickness(&self.config);
        let min_length = self.plugins.minimum_length(thickness);
        let geometry = geometry::recompute(&self.config, &screen, &self.autohide, min_length);

        let panel = self.display_server.panel_handle();
        let root = root_area(&self.screens).unwrap_or(screen);
        let strut = geometry.strut.relative_to_root(&screen, &root);
        self.actions.push_back(DisplayAction::ConfigurePanel(geometry.rect));
        self.actions.push_back(DisplayAction::SetStrut(panel, strut));
        self.geometry = Some(geometry);

        let info = self.panel_info(screen, &geometry);
        self.plugins.realign(&info);
        self.realigned.notify(&geometry);
        true
    }

    /// What plugins get to see of the panel.
    pub fn current_panel_info(&self) -> Option<PanelInfo> {
        let geometry = self.geometry?;
        let screen = self.screens.get(self.config.screen)?.bbox;
        Some(self.panel_info(screen, &geometry))
    }

    fn panel_info(&self, screen: crate::models::BBox, geometry: &PanelGeometry) -> PanelInfo {
        PanelInfo::new(
            self.config.position,
            geometry.rect,
            screen,
            self.config.icon_size,
            self.config.line_count,
        )
    }

    /// Move to another screen when the configured pair became invalid.
    pub(crate) fn ensure_placeable(&mut self) -> bool {
        let edge = self.config.position;
        if can_place_on(&self.screens, self.config.screen, edge) {
            return false;
        }
        let screen = find_available_screen(&self.screens, self.config.screen, edge);
        tracing::info!(
            "Panel can't sit on the {} edge of screen {}, moving to screen {}",
            edge,
            self.config.screen,
            screen
        );
        self.set_position(screen, edge)
    }

    /// Diff the tracker against the client list and watch new windows.
    pub fn refresh_task_list(&mut self) {
        let client_list = self.display_server.client_list();
        let server = &self.display_server;
        let diff = self.tracker.sync(&client_list, |handle| server.client_info(handle));
        for handle in diff.added {
            self.actions.push_back(DisplayAction::WatchWindow(handle));
        }
        self.tracker
            .active_window_changed(self.display_server.active_window());
        self.plugins.tasks_changed(&self.tracker);
    }

    /// Write settings now, or restart the quiet period when `later`.
    pub fn save_settings(&mut self, later: bool) {
        self.delayed_save.cancel();
        if later {
            self.delayed_save.schedule(Instant::now());
            return;
        }
        self.config.plugins = self.plugins.settings_groups();
        let result = self
            .settings
            .save_panel(&self.config_group, &self.config)
            .and_then(|()| self.settings.sync());
        if let Err(err) = result {
            tracing::error!("Failed to save panel settings: {}", err);
        }
    }

    /// Delete the panel and all its plugin groups from the settings, then
    /// stop.
    pub fn remove_panel(&mut self) {
        self.delayed_save.cancel();
        for group in self.plugins.settings_groups() {
            self.settings.remove_group(&group);
        }
        self.settings.remove_group(&self.config_group);
        if let Err(err) = self.settings.sync() {
            tracing::error!("Failed to save settings after removing panel: {}", err);
        }
        self.hide();
        self.quit();
    }

    /// Run queued actions, collecting the events they answer with.
    pub(crate) fn execute_actions(&mut self, event_buffer: &mut Vec<crate::DisplayEvent<H>>) {
        while let Some(act) = self.actions.pop_front() {
            if let Some(event) = self.display_server.execute_action(act) {
                event_buffer.push(event);
            }
        }
    }
}
