#[cfg(test)]
mod mock_display_server;

use crate::config::PanelConfig;
use crate::display_action::DisplayAction;
use crate::models::{BBox, ClientInfo, Handle, Screen, WindowHandle};
use crate::errors::Result;
use crate::DisplayEvent;

use futures::prelude::*;
use std::pin::Pin;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// The window manager bridge. Every call is a synchronous round trip and
/// failures are logged by the implementation, never retried.
pub trait DisplayServer<H: Handle> {
    /// Connect and create the (unmapped) panel window.
    ///
    /// # Errors
    /// Fails when the display can't be opened.
    fn new(config: &PanelConfig) -> Result<Self>
    where
        Self: Sized;

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>>;

    fn execute_action(&mut self, _act: DisplayAction<H>) -> Option<DisplayEvent<H>> {
        None
    }

    fn panel_handle(&self) -> WindowHandle<H>;

    fn screens(&self) -> Vec<Screen>;

    fn screen_geometry(&self, index: usize) -> Option<BBox> {
        self.screens().get(index).map(|s| s.bbox)
    }

    /// `_NET_CLIENT_LIST` in stacking order.
    fn client_list(&self) -> Vec<WindowHandle<H>>;

    fn active_window(&self) -> Option<WindowHandle<H>>;

    /// `None` when the window vanished before it could be queried.
    fn client_info(&self, handle: WindowHandle<H>) -> Option<ClientInfo<H>>;

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;

    fn flush(&self);
}
