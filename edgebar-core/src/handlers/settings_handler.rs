use crate::config::{Alignment, Edge, Settings};
use crate::display_servers::DisplayServer;
use crate::models::Handle;
use crate::Panel;

impl<H: Handle, S: Settings, SERVER: DisplayServer<H>> Panel<H, S, SERVER> {
    /// Every effective change restarts the save timer and realigns.
    /// Returns false when the value was already set.
    fn change<F>(&mut self, apply: F) -> bool
    where
        F: FnOnce(&mut Self) -> bool,
    {
        if !apply(self) {
            return false;
        }
        self.save_settings(true);
        self.realign();
        true
    }

    pub fn set_panel_size(&mut self, value: i32) -> bool {
        self.change(|panel| replace(&mut panel.config.panel_size, value))
    }

    pub fn set_icon_size(&mut self, value: i32) -> bool {
        self.change(|panel| replace(&mut panel.config.icon_size, value))
    }

    pub fn set_line_count(&mut self, value: i32) -> bool {
        self.change(|panel| replace(&mut panel.config.line_count, value))
    }

    /// `length` is a percentage when `in_percents`, pixels otherwise.
    pub fn set_length(&mut self, length: i32, in_percents: bool) -> bool {
        self.change(|panel| {
            let width = replace(&mut panel.config.width, length);
            let percent = replace(&mut panel.config.width_percent, in_percents);
            width || percent
        })
    }

    pub fn set_position(&mut self, screen: usize, edge: Edge) -> bool {
        self.change(|panel| {
            let screen = replace(&mut panel.config.screen, screen);
            let edge = replace(&mut panel.config.position, edge);
            screen || edge
        })
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> bool {
        self.change(|panel| replace(&mut panel.config.alignment, alignment))
    }

    pub fn set_autohide(&mut self, enabled: bool) -> bool {
        self.change(|panel| {
            panel.autohide.set_enabled(enabled);
            replace(&mut panel.config.autohide, enabled)
        })
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use crate::config::{Alignment, Edge, AUTOHIDE_SIZE};
    use crate::panel::tests::{last_strut, shown_panel};

    #[test]
    fn unchanged_values_do_not_schedule_a_save() {
        let mut panel = shown_panel();
        assert!(!panel.set_panel_size(32));
        assert!(!panel.set_position(0, Edge::Bottom));
        assert!(!panel.delayed_save.is_pending());
    }

    #[test]
    fn changes_realign_and_schedule_a_save() {
        let mut panel = shown_panel();
        assert!(panel.set_panel_size(48));
        assert!(panel.delayed_save.is_pending());
        assert_eq!(panel.geometry.map(|g| g.rect.h()), Some(48));
        assert_eq!(last_strut(&panel).map(|s| s.bottom), Some(48));
        // Nothing is written until the quiet period ends.
        assert_eq!(panel.settings.syncs, 0);
    }

    #[test]
    fn length_and_alignment_move_the_panel() {
        let mut panel = shown_panel();
        assert!(panel.set_length(500, false));
        assert_eq!(panel.geometry.map(|g| g.rect.x()), Some(710));
        assert!(panel.set_alignment(Alignment::Right));
        assert_eq!(panel.geometry.map(|g| g.rect.right()), Some(1919));
    }

    #[test]
    fn moving_to_another_edge() {
        let mut panel = shown_panel();
        assert!(panel.set_position(0, Edge::Left));
        let strut = last_strut(&panel);
        assert_eq!(strut.map(|s| (s.left, s.bottom)), Some((32, 0)));
        assert_eq!(strut.map(|s| s.left_end_y), Some(1079));
    }

    #[test]
    fn enabling_autohide_collapses_the_panel() {
        let mut panel = shown_panel();
        assert!(panel.set_autohide(true));
        assert_eq!(panel.geometry.map(|g| g.rect.h()), Some(AUTOHIDE_SIZE));
        assert_eq!(last_strut(&panel).map(|s| s.bottom), Some(AUTOHIDE_SIZE));
        assert!(panel.set_autohide(false));
        assert_eq!(panel.geometry.map(|g| g.rect.h()), Some(32));
    }
}
