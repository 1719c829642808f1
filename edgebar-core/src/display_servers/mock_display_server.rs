use super::DisplayEvent;
use super::DisplayServer;
use crate::config::PanelConfig;
use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::models::{BBox, ClientInfo, Handle, Screen, WindowHandle};

/// Records every action and answers queries from its public fields.
#[derive(Clone, Debug)]
pub struct MockDisplayServer<H: Handle> {
    pub panel: WindowHandle<H>,
    pub screens: Vec<Screen>,
    pub clients: Vec<ClientInfo<H>>,
    pub active: Option<WindowHandle<H>>,
    pub actions: Vec<DisplayAction<H>>,
    pub events: Vec<DisplayEvent<H>>,
    /// Handle given to the next popup.
    pub next_popup: H,
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn new(_: &PanelConfig) -> Result<Self> {
        Ok(Self {
            panel: WindowHandle(H::default()),
            screens: vec![Screen::new(BBox::new(0, 0, 1920, 1080), "mock-0".to_owned())],
            clients: vec![],
            active: None,
            actions: vec![],
            events: vec![],
            next_popup: H::default(),
        })
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>> {
        std::mem::take(&mut self.events)
    }

    fn execute_action(&mut self, act: DisplayAction<H>) -> Option<DisplayEvent<H>> {
        let reply = match &act {
            DisplayAction::OpenPopup { owner, .. } => Some(DisplayEvent::PopupOpened {
                owner: owner.clone(),
                handle: WindowHandle(self.next_popup),
            }),
            _ => None,
        };
        self.actions.push(act);
        reply
    }

    fn panel_handle(&self) -> WindowHandle<H> {
        self.panel
    }

    fn screens(&self) -> Vec<Screen> {
        self.screens.clone()
    }

    fn client_list(&self) -> Vec<WindowHandle<H>> {
        self.clients.iter().map(|c| c.handle).collect()
    }

    fn active_window(&self) -> Option<WindowHandle<H>> {
        self.active
    }

    fn client_info(&self, handle: WindowHandle<H>) -> Option<ClientInfo<H>> {
        self.clients.iter().find(|c| c.handle == handle).cloned()
    }

    fn wait_readable(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()>>> {
        Box::pin(futures::future::pending())
    }

    fn flush(&self) {}
}
