use super::{PanelInfo, Plugin, PluginContext, PluginStartInfo};
use crate::models::{Handle, Xyhw};

pub const MAIN_MENU: &str = "mainmenu";
/// Width and height of the menu popup.
pub const MENU_POPUP_SIZE: (i32, i32) = (280, 420);

/// A single button opening the application menu popup. Autohide stays
/// locked while the menu is open.
#[derive(Debug)]
pub struct MainMenu {
    settings_group: String,
    open: bool,
}

impl MainMenu {
    pub fn new(info: &PluginStartInfo) -> Self {
        Self {
            settings_group: info.settings_group.clone(),
            open: false,
        }
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }
}

impl<H: Handle> Plugin<H> for MainMenu {
    fn type_id(&self) -> &str {
        MAIN_MENU
    }

    fn on_click(&mut self, panel: &PanelInfo, slot: Xyhw, _x: i32, _y: i32, ctx: &mut PluginContext<H>) {
        if self.open {
            ctx.close_popup();
            return;
        }
        let (width, height) = MENU_POPUP_SIZE;
        let rect = panel.popup_placement(panel.to_global(slot), width, height);
        tracing::debug!("{}: opening menu at {:?}", self.settings_group, rect);
        ctx.lock_autohide();
        ctx.open_popup(rect);
        self.open = true;
    }

    fn on_popup_closed(&mut self, ctx: &mut PluginContext<H>) {
        self.open = false;
        ctx.unlock_autohide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Edge;
    use crate::models::{BBox, MockHandle, XyhwBuilder};
    use crate::plugins::PanelRequest;

    fn menu() -> MainMenu {
        MainMenu::new(&PluginStartInfo {
            type_id: MAIN_MENU.to_owned(),
            settings_group: MAIN_MENU.to_owned(),
        })
    }

    fn panel() -> PanelInfo {
        let rect = XyhwBuilder {
            x: 0,
            y: 0,
            w: 1920,
            h: 32,
        };
        PanelInfo::new(Edge::Top, rect.into(), BBox::new(0, 0, 1920, 1080), 22, 1)
    }

    #[test]
    fn first_click_locks_and_opens_below_a_top_panel() {
        let mut menu = menu();
        let mut ctx = PluginContext::<MockHandle>::default();
        let slot = XyhwBuilder { x: 0, y: 0, w: 32, h: 32 }.into();
        menu.on_click(&panel(), slot, 5, 5, &mut ctx);

        let requests = ctx.into_requests();
        assert_eq!(requests[0], PanelRequest::LockAutohide);
        let PanelRequest::OpenPopup(rect) = requests[1] else {
            panic!("expected a popup, got {requests:?}");
        };
        assert_eq!(rect.y(), 32);
        assert!(menu.is_open());
    }

    #[test]
    fn second_click_closes_and_closing_unlocks() {
        let mut menu = menu();
        let slot = XyhwBuilder { x: 0, y: 0, w: 32, h: 32 }.into();
        let mut ctx = PluginContext::<MockHandle>::default();
        menu.on_click(&panel(), slot, 5, 5, &mut ctx);

        let mut ctx = PluginContext::<MockHandle>::default();
        menu.on_click(&panel(), slot, 5, 5, &mut ctx);
        assert_eq!(ctx.into_requests(), vec![PanelRequest::ClosePopup]);

        let mut ctx = PluginContext::<MockHandle>::default();
        Plugin::<MockHandle>::on_popup_closed(&mut menu, &mut ctx);
        assert_eq!(ctx.into_requests(), vec![PanelRequest::UnlockAutohide]);
        assert!(!menu.is_open());
    }
}
