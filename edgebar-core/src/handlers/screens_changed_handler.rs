use crate::config::Settings;
use crate::display_servers::DisplayServer;
use crate::models::{Handle, Screen};
use crate::Panel;

impl<H: Handle, S: Settings, SERVER: DisplayServer<H>> Panel<H, S, SERVER> {
    /// Replace the topology snapshot. When the configured screen/edge pair
    /// no longer works the panel moves, and the move is saved.
    ///
    /// Returns `true` if the panel needs to be realigned.
    pub fn screens_changed_handler(&mut self, screens: Vec<Screen>) -> bool {
        tracing::debug!("Screen topology changed: {} screen(s)", screens.len());
        self.screens = screens;
        self.ensure_placeable();
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Edge;
    use crate::models::{BBox, Screen};
    use crate::panel::tests::shown_panel;
    use crate::DisplayEvent;

    fn screen(x: i32, y: i32) -> Screen {
        Screen::new(BBox::new(x, y, 1920, 1080), format!("{x}"))
    }

    #[test]
    fn panel_follows_an_unplugged_monitor() {
        let mut panel = shown_panel();
        panel.display_event_handler(DisplayEvent::ScreensChanged(vec![screen(0, 0), screen(1920, 0)]));
        assert!(panel.set_position(1, Edge::Bottom));

        assert!(panel.display_event_handler(DisplayEvent::ScreensChanged(vec![screen(0, 0)])));
        assert_eq!(panel.config.screen, 0);
        assert_eq!(panel.geometry.map(|g| g.rect.x()), Some(0));
    }

    #[test]
    fn blocked_edge_moves_to_a_free_screen() {
        let mut panel = shown_panel();
        // Stacked monitors: the lower edge of the top monitor is shared.
        panel.display_event_handler(DisplayEvent::ScreensChanged(vec![screen(0, 0), screen(0, 1080)]));
        assert_eq!(panel.config.screen, 1);
        assert!(panel.delayed_save.is_pending());
    }

    #[test]
    fn valid_placement_is_kept() {
        let mut panel = shown_panel();
        panel.display_event_handler(DisplayEvent::ScreensChanged(vec![screen(0, 0), screen(1920, 0)]));
        assert_eq!(panel.config.screen, 0);
        assert!(!panel.delayed_save.is_pending());
    }
}
