use crate::display_action::PopupOwner;
use crate::models::{Handle, Screen, WindowChange, WindowHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent<H: Handle> {
    /// The pointer entered the panel or one of its popups.
    PointerEnter(WindowHandle<H>),
    PointerLeave(WindowHandle<H>),
    /// A popup owned by the panel got mapped.
    ChildMapped(WindowHandle<H>),
    ChildUnmapped(WindowHandle<H>),
    /// A popup requested through `DisplayAction::OpenPopup` now exists.
    PopupOpened {
        owner: PopupOwner,
        handle: WindowHandle<H>,
    },
    /// `_NET_CLIENT_LIST` changed on the root window.
    ClientListChanged,
    ActiveWindowChanged(Option<WindowHandle<H>>),
    WindowChange(WindowChange<H>),
    /// The monitor layout changed. Carries the new topology.
    ScreensChanged(Vec<Screen>),
    /// Button press on the panel, in panel coordinates.
    PanelClick { x: i32, y: i32, button: u32 },
}
