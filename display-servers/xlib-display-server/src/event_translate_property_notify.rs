use crate::XlibWindowHandle;

use super::{DisplayEvent, XWrap};
use edgebar_core::models::{WindowChange, WindowHandle};

use x11_dl::xlib;

pub fn from_event(
    xw: &XWrap,
    event: xlib::XPropertyEvent,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    if event.window == xw.get_default_root() {
        return from_root_event(xw, &event);
    }
    if event.state == xlib::PropertyDelete || !xw.watched.contains(&event.window) {
        return None;
    }

    tracing::trace!("PropertyNotify: {} : {:?}", xw.atoms.get_name(event.atom), &event);

    let handle = WindowHandle(XlibWindowHandle(event.window));
    let mut change = WindowChange::new(handle);
    match event.atom {
        xlib::XA_WM_NAME => change.name = Some(xw.get_window_name(event.window)),
        xlib::XA_WM_HINTS => {
            let hints = xw.get_wmhints(event.window)?;
            change.urgent = Some(hints.flags & xlib::XUrgencyHint != 0);
        }
        atom if atom == xw.atoms.NetWMName => {
            change.name = Some(xw.get_window_name(event.window));
        }
        atom if atom == xw.atoms.NetWMState => {
            change.states = Some(xw.get_window_states(event.window));
        }
        _ => return None,
    }
    Some(DisplayEvent::WindowChange(change))
}

fn from_root_event(
    xw: &XWrap,
    event: &xlib::XPropertyEvent,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    match event.atom {
        atom if atom == xw.atoms.NetClientList => Some(DisplayEvent::ClientListChanged),
        atom if atom == xw.atoms.NetActiveWindow => {
            let active = xw
                .get_active_window()
                .map(|w| WindowHandle(XlibWindowHandle(w)));
            Some(DisplayEvent::ActiveWindowChanged(active))
        }
        _ => None,
    }
}
