//! Widgets hosted on the panel and the requests they can make of it.
mod host;
mod main_menu;
mod registry;
mod taskbar;

pub use host::{PluginEntry, PluginHost, TaggedRequest};
pub use main_menu::{MainMenu, MAIN_MENU, MENU_POPUP_SIZE};
pub use registry::{PluginFactory, PluginRegistry, PluginStartInfo};
pub use taskbar::{TaskBar, TASKBAR, TASK_BUTTON_MAX_LENGTH};

use crate::config::{Edge, Orientation};
use crate::models::{BBox, Handle, TaskWindowTracker, WindowHandle, Xyhw, XyhwBuilder};

/// A widget living in one slot of the panel.
pub trait Plugin<H: Handle> {
    fn type_id(&self) -> &str;

    /// Space needed along the panel's long axis.
    fn minimum_length(&self, thickness: i32) -> i32 {
        thickness
    }

    /// Stretchable plugins share whatever the others leave over.
    fn is_stretchable(&self) -> bool {
        false
    }

    /// The panel moved or the slot changed. `slot` is in panel coordinates.
    fn realign(&mut self, _panel: &PanelInfo, _slot: Xyhw) {}

    /// Primary button press, `x`/`y` relative to the slot.
    fn on_click(
        &mut self,
        panel: &PanelInfo,
        slot: Xyhw,
        x: i32,
        y: i32,
        ctx: &mut PluginContext<H>,
    );

    fn on_tasks_changed(&mut self, _tasks: &TaskWindowTracker<H>) {}

    /// A popup this plugin opened went away.
    fn on_popup_closed(&mut self, _ctx: &mut PluginContext<H>) {}
}

/// Things a plugin asks the panel to do once its callback returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRequest<H: Handle> {
    LockAutohide,
    UnlockAutohide,
    OpenPopup(Xyhw),
    ClosePopup,
    ActivateWindow(WindowHandle<H>),
}

#[derive(Debug)]
pub struct PluginContext<H: Handle> {
    requests: Vec<PanelRequest<H>>,
}

impl<H: Handle> Default for PluginContext<H> {
    fn default() -> Self {
        Self { requests: vec![] }
    }
}

impl<H: Handle> PluginContext<H> {
    pub fn lock_autohide(&mut self) {
        self.requests.push(PanelRequest::LockAutohide);
    }

    pub fn unlock_autohide(&mut self) {
        self.requests.push(PanelRequest::UnlockAutohide);
    }

    /// `rect` is in root coordinates, usually from `PanelInfo::popup_placement`.
    pub fn open_popup(&mut self, rect: Xyhw) {
        self.requests.push(PanelRequest::OpenPopup(rect));
    }

    pub fn close_popup(&mut self) {
        self.requests.push(PanelRequest::ClosePopup);
    }

    pub fn activate_window(&mut self, handle: WindowHandle<H>) {
        self.requests.push(PanelRequest::ActivateWindow(handle));
    }

    pub fn into_requests(self) -> Vec<PanelRequest<H>> {
        self.requests
    }
}

/// Read-only view of the panel handed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelInfo {
    edge: Edge,
    rect: Xyhw,
    screen: BBox,
    icon_size: i32,
    line_count: i32,
}

impl PanelInfo {
    pub const fn new(edge: Edge, rect: Xyhw, screen: BBox, icon_size: i32, line_count: i32) -> Self {
        Self {
            edge,
            rect,
            screen,
            icon_size,
            line_count,
        }
    }

    pub const fn edge(&self) -> Edge {
        self.edge
    }

    pub const fn orientation(&self) -> Orientation {
        self.edge.orientation()
    }

    /// Panel rectangle in root coordinates.
    pub const fn global_rect(&self) -> Xyhw {
        self.rect
    }

    pub const fn screen(&self) -> BBox {
        self.screen
    }

    pub const fn icon_size(&self) -> i32 {
        self.icon_size
    }

    pub const fn line_count(&self) -> i32 {
        self.line_count
    }

    pub const fn thickness(&self) -> i32 {
        match self.orientation() {
            Orientation::Horizontal => self.rect.h(),
            Orientation::Vertical => self.rect.w(),
        }
    }

    pub const fn length(&self) -> i32 {
        match self.orientation() {
            Orientation::Horizontal => self.rect.w(),
            Orientation::Vertical => self.rect.h(),
        }
    }

    /// Translate a rectangle in panel coordinates to root coordinates.
    pub fn to_global(&self, local: Xyhw) -> Xyhw {
        XyhwBuilder {
            x: self.rect.x() + local.x(),
            y: self.rect.y() + local.y(),
            w: local.w(),
            h: local.h(),
        }
        .into()
    }

    /// Place a `width` x `height` popup next to `anchor`, on the side facing
    /// away from the panel edge, and keep it on the panel's screen.
    pub fn popup_placement(&self, anchor: Xyhw, width: i32, height: i32) -> Xyhw {
        let rect = &self.rect;
        let (x, y) = match self.edge {
            Edge::Top => (anchor.x(), rect.y() + rect.h()),
            Edge::Bottom => (anchor.x(), rect.y() - height),
            Edge::Left => (rect.x() + rect.w(), anchor.y()),
            Edge::Right => (rect.x() - width, anchor.y()),
        };
        let screen = &self.screen;
        let x = x.min(screen.right() - width + 1).max(screen.left());
        let y = y.min(screen.bottom() - height + 1).max(screen.top());
        XyhwBuilder {
            x,
            y,
            w: width,
            h: height,
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bottom_panel() -> PanelInfo {
        let rect = XyhwBuilder {
            x: 0,
            y: 1048,
            w: 1920,
            h: 32,
        };
        PanelInfo::new(Edge::Bottom, rect.into(), BBox::new(0, 0, 1920, 1080), 22, 1)
    }

    fn anchor(x: i32, y: i32) -> Xyhw {
        XyhwBuilder { x, y, w: 32, h: 32 }.into()
    }

    #[test]
    fn popup_opens_above_a_bottom_panel() {
        let popup = bottom_panel().popup_placement(anchor(100, 1048), 280, 420);
        assert_eq!(popup.x(), 100);
        assert_eq!(popup.y(), 1048 - 420);
    }

    #[test]
    fn popup_is_clamped_to_the_screen() {
        let popup = bottom_panel().popup_placement(anchor(1880, 1048), 280, 420);
        assert_eq!(popup.right(), 1919);
    }

    #[test]
    fn popup_opens_beside_a_right_panel() {
        let rect = XyhwBuilder {
            x: 1920 + 1280 - 32,
            y: 0,
            w: 32,
            h: 1024,
        };
        let panel = PanelInfo::new(Edge::Right, rect.into(), BBox::new(1920, 0, 1280, 1024), 22, 1);
        let popup = panel.popup_placement(anchor(3168, 1000), 280, 420);
        assert_eq!(popup.right(), 3167);
        assert_eq!(popup.bottom(), 1023);
    }

    #[test]
    fn local_slots_translate_to_root_coordinates() {
        let slot = anchor(64, 0);
        let global = bottom_panel().to_global(slot);
        assert_eq!((global.x(), global.y()), (64, 1048));
    }

    #[test]
    fn context_keeps_request_order() {
        let mut ctx = PluginContext::<i32>::default();
        ctx.lock_autohide();
        ctx.close_popup();
        assert_eq!(
            ctx.into_requests(),
            vec![PanelRequest::LockAutohide, PanelRequest::ClosePopup]
        );
    }
}
