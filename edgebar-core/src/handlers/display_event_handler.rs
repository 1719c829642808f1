use crate::config::Settings;
use crate::display_servers::DisplayServer;
use crate::models::{AutohideEvent, Handle};
use crate::{DisplayEvent, Panel};

/// Only the primary button reaches plugins.
const PRIMARY_BUTTON: u32 = 1;

impl<H: Handle, S: Settings, SERVER: DisplayServer<H>> Panel<H, S, SERVER> {
    /// Process a single event and apply its changes to the panel.
    /// Returns true if the panel needs to be realigned.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) -> bool {
        match event {
            DisplayEvent::PointerEnter(handle) => self.autohide.handle(AutohideEvent::Enter(handle)),
            DisplayEvent::PointerLeave(handle) => self.autohide.handle(AutohideEvent::Leave(handle)),
            DisplayEvent::ChildMapped(handle) => self.autohide.handle(AutohideEvent::Map(handle)),
            DisplayEvent::ChildUnmapped(handle) => {
                let changed = self.autohide.handle(AutohideEvent::Unmap(handle));
                let requests = self.plugins.popup_closed(handle);
                self.apply_plugin_requests(requests) || changed
            }
            DisplayEvent::PopupOpened { owner, handle } => {
                if !self.plugins.popup_opened(&owner, handle) {
                    tracing::warn!("Popup opened for unknown plugin {}", owner);
                }
                false
            }
            DisplayEvent::ClientListChanged => {
                self.refresh_task_list();
                false
            }
            DisplayEvent::ActiveWindowChanged(active) => {
                if self.tracker.active_window_changed(active) {
                    self.plugins.tasks_changed(&self.tracker);
                }
                false
            }
            DisplayEvent::WindowChange(change) => {
                if self.tracker.window_changed(change) {
                    self.plugins.tasks_changed(&self.tracker);
                }
                false
            }
            DisplayEvent::ScreensChanged(screens) => self.screens_changed_handler(screens),
            DisplayEvent::PanelClick { x, y, button } => {
                if button != PRIMARY_BUTTON {
                    return false;
                }
                let Some(info) = self.current_panel_info() else {
                    return false;
                };
                let requests = self.plugins.click(&info, x, y);
                self.apply_plugin_requests(requests)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::tests::TestSettings;
    use crate::config::AUTOHIDE_SIZE;
    use crate::models::{ClientInfo, WindowChange, WindowHandle};
    use crate::panel::tests::{shown_panel, TestPanel};
    use crate::plugins::TASKBAR;
    use crate::{DisplayAction, DisplayEvent};

    fn autohiding_panel() -> TestPanel {
        let mut settings = TestSettings::with_plugins(&["mainmenu", TASKBAR]);
        if let Some(config) = settings.panels.get_mut("panel1") {
            config.autohide = true;
        }
        let mut panel = TestPanel::new_test(settings);
        panel.display_server.panel = WindowHandle(1);
        panel.autohide = crate::models::AutohideMachine::new(WindowHandle(1), true);
        panel.show();
        panel
    }

    fn thickness(panel: &TestPanel) -> Option<i32> {
        panel.geometry.map(|g| g.rect.h())
    }

    #[test]
    fn crossing_events_toggle_autohide() {
        let mut panel = autohiding_panel();
        assert_eq!(thickness(&panel), Some(AUTOHIDE_SIZE));

        assert!(panel.display_event_handler(DisplayEvent::PointerEnter(WindowHandle(1))));
        panel.realign();
        assert_eq!(thickness(&panel), Some(32));

        assert!(panel.display_event_handler(DisplayEvent::PointerLeave(WindowHandle(1))));
        panel.realign();
        assert_eq!(thickness(&panel), Some(AUTOHIDE_SIZE));
    }

    #[test]
    fn client_list_changes_refresh_the_tracker() {
        let mut panel = shown_panel();
        panel.actions.clear();
        panel.display_server.clients = vec![ClientInfo::new(WindowHandle(42))];
        assert!(!panel.display_event_handler(DisplayEvent::ClientListChanged));
        assert_eq!(panel.tracker.handles(), vec![WindowHandle(42)]);
        assert!(panel
            .actions
            .contains(&DisplayAction::WatchWindow(WindowHandle(42))));
    }

    #[test]
    fn active_window_and_title_updates_reach_the_tracker() {
        let mut panel = shown_panel();
        panel.display_server.clients = vec![
            ClientInfo::new(WindowHandle(42)),
            ClientInfo::new(WindowHandle(43)),
        ];
        panel.display_event_handler(DisplayEvent::ClientListChanged);

        panel.display_event_handler(DisplayEvent::ActiveWindowChanged(Some(WindowHandle(43))));
        let checked = panel.tracker.get(WindowHandle(43)).map(|w| w.button.checked);
        assert_eq!(checked, Some(true));

        let mut change = WindowChange::new(WindowHandle(42));
        change.name = Some(Some("editor".to_owned()));
        panel.display_event_handler(DisplayEvent::WindowChange(change));
        let title = panel.tracker.get(WindowHandle(42)).and_then(|w| w.button.title.clone());
        assert_eq!(title.as_deref(), Some("editor"));
    }

    #[test]
    fn taskbar_click_activates_a_window() {
        let mut panel = shown_panel();
        panel.display_server.clients = vec![ClientInfo::new(WindowHandle(42))];
        panel.display_event_handler(DisplayEvent::ClientListChanged);
        panel.realign();
        panel.actions.clear();

        // The menu takes the first 32 pixels, the task button follows.
        panel.display_event_handler(DisplayEvent::PanelClick { x: 40, y: 5, button: 1 });
        assert_eq!(
            panel.actions.back(),
            Some(&DisplayAction::ActivateWindow(WindowHandle(42)))
        );
    }

    #[test]
    fn secondary_buttons_are_ignored() {
        let mut panel = shown_panel();
        panel.actions.clear();
        panel.display_event_handler(DisplayEvent::PanelClick { x: 5, y: 5, button: 3 });
        assert!(panel.actions.is_empty());
    }
}
