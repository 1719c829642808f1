use crate::config::Settings;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::errors::{EdgebarError, Result};
use crate::models::Handle;
use crate::plugins::{PanelRequest, TaggedRequest};
use crate::Panel;

impl<H: Handle, S: Settings, SERVER: DisplayServer<H>> Panel<H, S, SERVER> {
    /// Apply what plugins asked for during a callback. Returns true if the
    /// panel needs to be realigned.
    pub fn apply_plugin_requests(&mut self, requests: Vec<TaggedRequest<H>>) -> bool {
        let mut needs_realign = false;
        for (group, request) in requests {
            match request {
                PanelRequest::LockAutohide => {
                    self.plugins.set_lock(&group, true);
                    needs_realign = self.sync_autohide_lock() || needs_realign;
                }
                PanelRequest::UnlockAutohide => {
                    self.plugins.set_lock(&group, false);
                    needs_realign = self.sync_autohide_lock() || needs_realign;
                }
                PanelRequest::OpenPopup(rect) => {
                    self.actions
                        .push_back(DisplayAction::OpenPopup { owner: group, rect });
                }
                PanelRequest::ClosePopup => match self.plugins.popup_of(&group) {
                    Some(handle) => self.actions.push_back(DisplayAction::ClosePopup(handle)),
                    None => {
                        let follow_up = self.plugins.popup_lost(&group);
                        needs_realign = self.apply_plugin_requests(follow_up) || needs_realign;
                    }
                },
                PanelRequest::ActivateWindow(handle) => {
                    self.actions.push_back(DisplayAction::ActivateWindow(handle));
                }
            }
        }
        needs_realign
    }

    /// The machine is locked exactly while some plugin holds a lock.
    fn sync_autohide_lock(&mut self) -> bool {
        let wanted = self.plugins.any_lock();
        if wanted == self.autohide.is_locked() {
            return false;
        }
        if wanted {
            self.autohide.lock();
        } else {
            self.autohide.unlock();
        }
        true
    }

    /// Add a new instance of `type_id` at the end of the panel.
    pub fn add_plugin(&mut self, type_id: &str) -> Result<String> {
        let group = self.plugins.add_plugin(type_id, &mut self.settings)?;
        tracing::info!("Added plugin {} as {}", type_id, group);
        self.plugins.tasks_changed(&self.tracker);
        self.save_settings(true);
        self.realign();
        Ok(group)
    }

    /// Unload a plugin and purge its settings group. Any lock it held is
    /// released and its popup closed.
    pub fn remove_plugin(&mut self, group: &str) -> Result<()> {
        let entry = self
            .plugins
            .remove(group)
            .ok_or_else(|| EdgebarError::MissingSection(group.to_owned()))?;
        if let Some(popup) = entry.popup {
            self.actions.push_back(DisplayAction::ClosePopup(popup));
        }
        if entry.holds_lock {
            self.sync_autohide_lock();
        }
        self.settings.remove_group(group);
        self.save_settings(false);
        self.realign();
        Ok(())
    }

    pub fn move_plugin(&mut self, group: &str, index: usize) -> bool {
        if !self.plugins.move_to(group, index) {
            return false;
        }
        self.save_settings(false);
        self.realign();
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::config::AUTOHIDE_SIZE;
    use crate::models::{AutohideMachine, WindowHandle};
    use crate::panel::tests::{shown_panel, TestPanel};
    use crate::plugins::{MAIN_MENU, TASKBAR};
    use crate::{DisplayAction, DisplayEvent, DisplayServer};

    fn autohiding(mut panel: TestPanel) -> TestPanel {
        panel.config.autohide = true;
        panel.autohide = AutohideMachine::new(panel.display_server.panel_handle(), true);
        panel.realign();
        panel
    }

    fn open_menu(panel: &mut TestPanel) {
        panel.display_event_handler(DisplayEvent::PointerEnter(WindowHandle(0)));
        panel.realign();
        panel.display_server.next_popup = 500;
        panel.display_event_handler(DisplayEvent::PanelClick { x: 5, y: 5, button: 1 });
        let mut replies = vec![];
        panel.execute_actions(&mut replies);
        for reply in replies {
            panel.display_event_handler(reply);
        }
    }

    #[test]
    fn menu_popup_holds_the_panel_open() {
        let mut panel = autohiding(shown_panel());
        open_menu(&mut panel);
        assert!(panel.autohide.is_locked());
        assert_eq!(panel.plugins.popup_of(MAIN_MENU), Some(WindowHandle(500)));

        panel.display_event_handler(DisplayEvent::PointerLeave(WindowHandle(0)));
        panel.realign();
        assert_eq!(panel.geometry.map(|g| g.rect.h()), Some(32));

        // The popup goes away, the lock with it.
        assert!(panel.display_event_handler(DisplayEvent::ChildUnmapped(WindowHandle(500))));
        assert!(!panel.autohide.is_locked());
        panel.realign();
        assert_eq!(panel.geometry.map(|g| g.rect.h()), Some(AUTOHIDE_SIZE));
    }

    #[test]
    fn removing_a_locking_plugin_releases_the_lock() {
        let mut panel = autohiding(shown_panel());
        open_menu(&mut panel);
        assert!(panel.autohide.is_locked());

        assert!(panel.remove_plugin(MAIN_MENU).is_ok());
        assert!(!panel.autohide.is_locked());
        assert!(panel
            .actions
            .contains(&DisplayAction::ClosePopup(WindowHandle(500))));
        assert!(!panel.settings.plugin_types.contains_key(MAIN_MENU));
        let saved = panel.settings.panels.get("panel1").map(|c| c.plugins.clone());
        assert_eq!(saved, Some(vec![TASKBAR.to_owned()]));
    }

    #[test]
    fn removing_an_unknown_plugin_fails() {
        let mut panel = shown_panel();
        assert!(panel.remove_plugin("clock").is_err());
    }

    #[test]
    fn added_plugins_get_a_fresh_group_and_a_later_save() {
        let mut panel = shown_panel();
        let group = panel.add_plugin(TASKBAR);
        assert_eq!(group.ok().as_deref(), Some("taskbar2"));
        assert!(panel.delayed_save.is_pending());
        assert_eq!(panel.plugins.len(), 3);
    }

    #[test]
    fn moving_a_plugin_saves_immediately() {
        let mut panel = shown_panel();
        assert!(panel.move_plugin(TASKBAR, 0));
        let saved = panel.settings.panels.get("panel1").map(|c| c.plugins.clone());
        assert_eq!(saved, Some(vec![TASKBAR.to_owned(), MAIN_MENU.to_owned()]));
    }
}
