use super::{PanelInfo, Plugin, PluginContext, PluginStartInfo};
use crate::config::Orientation;
use crate::models::{Handle, TaskWindowTracker, WindowHandle, Xyhw};

pub const TASKBAR: &str = "taskbar";
/// Buttons never grow past this along the long axis.
pub const TASK_BUTTON_MAX_LENGTH: i32 = 200;

/// One button per tracked window. Clicking a button activates its window.
#[derive(Debug)]
pub struct TaskBar<H: Handle> {
    settings_group: String,
    buttons: Vec<WindowHandle<H>>,
    orientation: Orientation,
    slot: Xyhw,
}

impl<H: Handle> TaskBar<H> {
    pub fn new(info: &PluginStartInfo) -> Self {
        Self {
            settings_group: info.settings_group.clone(),
            buttons: vec![],
            orientation: Orientation::Horizontal,
            slot: Xyhw::default(),
        }
    }

    pub fn buttons(&self) -> &[WindowHandle<H>] {
        &self.buttons
    }

    fn button_length(&self) -> i32 {
        let long = match self.orientation {
            Orientation::Horizontal => self.slot.w(),
            Orientation::Vertical => self.slot.h(),
        };
        let count = self.buttons.len().max(1) as i32;
        (long / count).clamp(1, TASK_BUTTON_MAX_LENGTH)
    }

    /// Window under `offset` along the long axis of the slot.
    pub fn button_at(&self, offset: i32) -> Option<WindowHandle<H>> {
        if offset < 0 {
            return None;
        }
        let index = (offset / self.button_length()) as usize;
        self.buttons.get(index).copied()
    }
}

impl<H: Handle> Plugin<H> for TaskBar<H> {
    fn type_id(&self) -> &str {
        TASKBAR
    }

    fn is_stretchable(&self) -> bool {
        true
    }

    fn realign(&mut self, panel: &PanelInfo, slot: Xyhw) {
        self.orientation = panel.orientation();
        self.slot = slot;
    }

    fn on_click(&mut self, panel: &PanelInfo, _slot: Xyhw, x: i32, y: i32, ctx: &mut PluginContext<H>) {
        let offset = match panel.orientation() {
            Orientation::Horizontal => x,
            Orientation::Vertical => y,
        };
        match self.button_at(offset) {
            Some(handle) => ctx.activate_window(handle),
            None => tracing::trace!("{}: click on empty space", self.settings_group),
        }
    }

    fn on_tasks_changed(&mut self, tasks: &TaskWindowTracker<H>) {
        self.buttons = tasks.handles();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Edge;
    use crate::models::{BBox, ClientInfo, MockHandle, XyhwBuilder};
    use crate::plugins::PanelRequest;

    fn taskbar_with(ids: &[i32], slot_width: i32) -> (TaskBar<MockHandle>, PanelInfo, Xyhw) {
        let mut taskbar = TaskBar::new(&PluginStartInfo {
            type_id: TASKBAR.to_owned(),
            settings_group: TASKBAR.to_owned(),
        });
        let mut tracker = TaskWindowTracker::default();
        let list: Vec<_> = ids.iter().copied().map(WindowHandle).collect();
        tracker.sync(&list, |h| Some(ClientInfo::new(h)));
        taskbar.on_tasks_changed(&tracker);

        let rect = XyhwBuilder {
            x: 0,
            y: 1048,
            w: 1920,
            h: 32,
        };
        let panel = PanelInfo::new(Edge::Bottom, rect.into(), BBox::new(0, 0, 1920, 1080), 22, 1);
        let slot: Xyhw = XyhwBuilder {
            x: 32,
            y: 0,
            w: slot_width,
            h: 32,
        }
        .into();
        taskbar.realign(&panel, slot);
        (taskbar, panel, slot)
    }

    #[test]
    fn buttons_follow_the_tracker() {
        let (taskbar, _, _) = taskbar_with(&[4, 5, 6], 600);
        assert_eq!(taskbar.buttons(), &[WindowHandle(4), WindowHandle(5), WindowHandle(6)]);
    }

    #[test]
    fn click_activates_the_window_under_the_pointer() {
        let (mut taskbar, panel, slot) = taskbar_with(&[4, 5, 6], 600);
        let mut ctx = PluginContext::default();
        taskbar.on_click(&panel, slot, 250, 10, &mut ctx);
        assert_eq!(ctx.into_requests(), vec![PanelRequest::ActivateWindow(WindowHandle(5))]);
    }

    #[test]
    fn buttons_are_capped_so_trailing_space_is_empty() {
        let (taskbar, _, _) = taskbar_with(&[4], 1800);
        assert_eq!(taskbar.button_at(150), Some(WindowHandle(4)));
        assert_eq!(taskbar.button_at(250), None);
    }
}
