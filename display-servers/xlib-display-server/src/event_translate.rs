use crate::XlibWindowHandle;

use super::{event_translate_property_notify, DisplayEvent, XWrap};
use edgebar_core::models::WindowHandle;
use x11_dl::xlib;

pub struct XEvent<'a>(pub &'a mut XWrap, pub xlib::XEvent);

impl<'a> From<XEvent<'a>> for Option<DisplayEvent<XlibWindowHandle>> {
    fn from(x_event: XEvent) -> Self {
        let raw_event = x_event.1;

        match raw_event.get_type() {
            // Pointer crossed the panel or a popup.
            xlib::EnterNotify => from_crossing(&x_event, true),
            xlib::LeaveNotify => from_crossing(&x_event, false),
            // A popup got mapped or unmapped.
            xlib::MapNotify => from_map_notify(&x_event),
            xlib::UnmapNotify => from_unmap_notify(&x_event),
            // Window is destroyed.
            xlib::DestroyNotify => from_destroy_notify(x_event),
            // Mouse button pressed.
            xlib::ButtonPress => from_button_press(&x_event),
            // The root window changed size.
            xlib::ConfigureNotify => from_configure_notify(&x_event),
            // Window property notify.
            xlib::PropertyNotify => from_property_notify(&x_event),
            _other => None,
        }
    }
}

fn from_crossing(x_event: &XEvent, enter: bool) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XCrossingEvent::from(x_event.1);
    // Grabs and moves into our own subwindows don't count.
    if event.mode != xlib::NotifyNormal
        || event.detail == xlib::NotifyInferior
        || !x_event.0.is_own_window(event.window)
    {
        return None;
    }

    let h = WindowHandle(XlibWindowHandle(event.window));
    if enter {
        Some(DisplayEvent::PointerEnter(h))
    } else {
        Some(DisplayEvent::PointerLeave(h))
    }
}

fn from_map_notify(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XMapEvent::from(x_event.1);
    if !x_event.0.is_popup(event.window) {
        return None;
    }
    let h = WindowHandle(XlibWindowHandle(event.window));
    Some(DisplayEvent::ChildMapped(h))
}

fn from_unmap_notify(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XUnmapEvent::from(x_event.1);
    if !x_event.0.is_popup(event.window) {
        return None;
    }
    let h = WindowHandle(XlibWindowHandle(event.window));
    Some(DisplayEvent::ChildUnmapped(h))
}

fn from_destroy_notify(x_event: XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let xw = x_event.0;
    let event = xlib::XDestroyWindowEvent::from(x_event.1);
    if let Some(owner) = xw.forget_popup(event.window) {
        tracing::debug!("Popup of {} destroyed", owner);
    } else {
        // The client list update that follows removes the task button.
        xw.unwatch_window(event.window);
    }
    None
}

fn from_button_press(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XButtonPressedEvent::from(x_event.1);
    if event.window != x_event.0.panel {
        return None;
    }
    Some(DisplayEvent::PanelClick {
        x: event.x,
        y: event.y,
        button: event.button,
    })
}

fn from_configure_notify(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let xw = &x_event.0;
    let event = xlib::XConfigureEvent::from(x_event.1);
    if event.window != xw.get_default_root() {
        return None;
    }
    let screens = xw.get_screens();
    tracing::debug!("Root window reconfigured, {} screen(s) now", screens.len());
    Some(DisplayEvent::ScreensChanged(screens))
}

fn from_property_notify(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XPropertyEvent::from(x_event.1);
    event_translate_property_notify::from_event(&*x_event.0, event)
}
