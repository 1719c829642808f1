use crate::models::{Desktop, Handle, Strut, WindowHandle, Xyhw};

/// Settings group of the plugin a popup belongs to.
pub type PopupOwner = String;

/// These are requests from the panel.
/// The display server should act on these actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction<H: Handle> {
    /// Reserve screen space. Written as `_NET_WM_STRUT_PARTIAL` and the
    /// legacy `_NET_WM_STRUT`.
    SetStrut(WindowHandle<H>, Strut),

    /// Pin a window to a virtual desktop.
    MoveToDesktop(WindowHandle<H>, Desktop),

    /// Move and resize the panel window.
    ConfigurePanel(Xyhw),

    /// Map the panel window.
    ShowPanel,

    /// Unmap the panel window.
    HidePanel,

    /// Ask for property notifications on a client the taskbar tracks.
    WatchWindow(WindowHandle<H>),

    /// Create and map a popup for a plugin. Answered with
    /// `DisplayEvent::PopupOpened`.
    OpenPopup { owner: PopupOwner, rect: Xyhw },

    /// Destroy a popup created by `OpenPopup`.
    ClosePopup(WindowHandle<H>),

    /// Ask the window manager to activate a client.
    ActivateWindow(WindowHandle<H>),
}
