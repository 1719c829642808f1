// allow casting types
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod event_translate;
mod event_translate_property_notify;
mod xatom;
mod xwrap;

pub use xwrap::{XWrap, XlibError};

use edgebar_core::geometry;
use edgebar_core::models::{ClientInfo, Desktop, Handle, Screen, Strut, WindowHandle, Xyhw};
use edgebar_core::{DisplayAction, DisplayEvent, DisplayServer, EdgebarError, PanelConfig, PopupOwner};
use event_translate::XEvent;
use futures::prelude::*;
use std::pin::Pin;

use x11_dl::xlib;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XlibWindowHandle(pub xlib::Window);
impl Handle for XlibWindowHandle {}

pub struct XlibDisplayServer {
    xw: XWrap,
}

impl DisplayServer<XlibWindowHandle> for XlibDisplayServer {
    fn new(config: &PanelConfig) -> edgebar_core::Result<Self> {
        let mut wrap =
            XWrap::new().map_err(|err| EdgebarError::DisplayServer(err.to_string()))?;

        wrap.init_panel(geometry::shown_thickness(config)); // unmapped until shown
        tracing::debug!("Created panel window {}", wrap.panel);

        Ok(Self { xw: wrap })
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<XlibWindowHandle>> {
        let mut events = vec![];

        let events_in_queue = self.xw.queue_len();
        for _ in 0..events_in_queue {
            let xlib_event = self.xw.get_next_event();
            let event = XEvent(&mut self.xw, xlib_event).into();
            if let Some(e) = event {
                tracing::trace!("DisplayEvent: {:?}", e);
                events.push(e);
            }
        }

        events
    }

    fn execute_action(
        &mut self,
        act: DisplayAction<XlibWindowHandle>,
    ) -> Option<DisplayEvent<XlibWindowHandle>> {
        tracing::trace!("DisplayAction: {:?}", act);
        let xw = &mut self.xw;
        let event: Option<DisplayEvent<XlibWindowHandle>> = match act {
            DisplayAction::SetStrut(h, strut) => from_set_strut(xw, h, &strut),
            DisplayAction::MoveToDesktop(h, desktop) => from_move_to_desktop(xw, h, desktop),
            DisplayAction::ConfigurePanel(rect) => from_configure_panel(xw, &rect),
            DisplayAction::ShowPanel => from_show_panel(xw),
            DisplayAction::HidePanel => from_hide_panel(xw),
            DisplayAction::WatchWindow(h) => from_watch_window(xw, h),
            DisplayAction::OpenPopup { owner, rect } => from_open_popup(xw, owner, &rect),
            DisplayAction::ClosePopup(h) => from_close_popup(xw, h),
            DisplayAction::ActivateWindow(h) => from_activate_window(xw, h),
        };
        if event.is_some() {
            tracing::trace!("DisplayEvent: {:?}", event);
        }
        event
    }

    fn panel_handle(&self) -> WindowHandle<XlibWindowHandle> {
        WindowHandle(XlibWindowHandle(self.xw.panel))
    }

    fn screens(&self) -> Vec<Screen> {
        self.xw.get_screens()
    }

    fn client_list(&self) -> Vec<WindowHandle<XlibWindowHandle>> {
        self.xw
            .get_client_list()
            .into_iter()
            .map(|w| WindowHandle(XlibWindowHandle(w)))
            .collect()
    }

    fn active_window(&self) -> Option<WindowHandle<XlibWindowHandle>> {
        self.xw
            .get_active_window()
            .map(|w| WindowHandle(XlibWindowHandle(w)))
    }

    fn client_info(
        &self,
        handle: WindowHandle<XlibWindowHandle>,
    ) -> Option<ClientInfo<XlibWindowHandle>> {
        let WindowHandle(XlibWindowHandle(window)) = handle;
        self.xw.get_client_info(window)
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>> {
        let task_notify = self.xw.task_notify.clone();
        Box::pin(async move {
            task_notify.notified().await;
        })
    }

    fn flush(&self) {
        self.xw.flush();
    }
}

// Display actions.
fn from_set_strut(
    xw: &mut XWrap,
    handle: WindowHandle<XlibWindowHandle>,
    strut: &Strut,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    xw.set_strut(window, strut);
    None
}

fn from_move_to_desktop(
    xw: &mut XWrap,
    handle: WindowHandle<XlibWindowHandle>,
    desktop: Desktop,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    xw.set_window_desktop(window, desktop);
    None
}

fn from_configure_panel(xw: &mut XWrap, rect: &Xyhw) -> Option<DisplayEvent<XlibWindowHandle>> {
    xw.move_resize_window(xw.panel, rect);
    None
}

fn from_show_panel(xw: &mut XWrap) -> Option<DisplayEvent<XlibWindowHandle>> {
    xw.map_window(xw.panel);
    None
}

fn from_hide_panel(xw: &mut XWrap) -> Option<DisplayEvent<XlibWindowHandle>> {
    xw.unmap_window(xw.panel);
    None
}

fn from_watch_window(
    xw: &mut XWrap,
    handle: WindowHandle<XlibWindowHandle>,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    xw.watch_window(window);
    None
}

fn from_open_popup(
    xw: &mut XWrap,
    owner: PopupOwner,
    rect: &Xyhw,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    let window = xw.create_popup(owner.clone(), rect.w(), rect.h());
    xw.move_resize_window(window, rect);
    xw.map_window(window);
    Some(DisplayEvent::PopupOpened {
        owner,
        handle: WindowHandle(XlibWindowHandle(window)),
    })
}

fn from_close_popup(
    xw: &mut XWrap,
    handle: WindowHandle<XlibWindowHandle>,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    xw.destroy_popup(window);
    None
}

fn from_activate_window(
    xw: &mut XWrap,
    handle: WindowHandle<XlibWindowHandle>,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    xw.activate_window(window);
    None
}
