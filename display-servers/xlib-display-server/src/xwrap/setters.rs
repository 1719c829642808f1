//! `XWrap` setters.
use super::CLIENT_EVENT_MASK;
use crate::XWrap;
use edgebar_core::models::{Desktop, Strut, Xyhw};
use std::os::raw::c_long;
use x11_dl::xlib;

impl XWrap {
    // Public functions.

    /// Replaces a window property.
    // `XChangeProperty`: https://tronche.com/gui/x/xlib/window-information/XChangeProperty.html
    pub fn replace_property_long(
        &self,
        window: xlib::Window,
        property: xlib::Atom,
        r#type: xlib::Atom,
        data: &[c_long],
    ) {
        unsafe {
            (self.xlib.XChangeProperty)(
                self.display,
                window,
                property,
                r#type,
                32,
                xlib::PropModeReplace,
                data.as_ptr().cast::<u8>(),
                data.len() as i32,
            );
        }
    }

    /// Reserves screen space for `window`. Window managers that predate
    /// `_NET_WM_STRUT_PARTIAL` only read the first four values.
    pub fn set_strut(&self, window: xlib::Window, strut: &Strut) {
        let partial: Vec<c_long> = strut.as_array().iter().map(|&v| c_long::from(v)).collect();
        self.replace_property_long(
            window,
            self.atoms.NetWMStrutPartial,
            xlib::XA_CARDINAL,
            &partial,
        );
        let legacy: Vec<c_long> = strut.legacy().iter().map(|&v| c_long::from(v)).collect();
        self.replace_property_long(window, self.atoms.NetWMStrut, xlib::XA_CARDINAL, &legacy);
    }

    /// Sets what desktop a window is on, both as the property (for window
    /// managers that read it at map time) and as a request to the running
    /// window manager.
    // We allow the lossless cast here so that 32 bit systems may work.
    #[allow(clippy::cast_lossless)]
    pub fn set_window_desktop(&self, window: xlib::Window, desktop: Desktop) {
        let data = [desktop.as_cardinal() as c_long];
        self.replace_property_long(window, self.atoms.NetWMDesktop, xlib::XA_CARDINAL, &data);
        // Source indication 2: a pager or taskbar.
        self.send_root_message(window, self.atoms.NetWMDesktop, &[data[0], 2]);
    }

    /// Sets the `_NET_WM_WINDOW_TYPE` of a window.
    pub fn set_window_type(&self, window: xlib::Window, r#type: xlib::Atom) {
        self.replace_property_long(
            window,
            self.atoms.NetWMWindowType,
            xlib::XA_ATOM,
            &[r#type as c_long],
        );
    }

    /// Sets `_NET_WM_NAME` and the legacy `WM_NAME`.
    // `XStoreName`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XStoreName.html
    pub fn set_window_name(&self, window: xlib::Window, name: &str) {
        let cname = Self::c_string(name);
        unsafe {
            (self.xlib.XChangeProperty)(
                self.display,
                window,
                self.atoms.NetWMName,
                self.atoms.UTF8String,
                8,
                xlib::PropModeReplace,
                cname.as_ptr().cast::<u8>(),
                name.len() as i32,
            );
            (self.xlib.XStoreName)(self.display, window, cname.as_ptr());
        }
    }

    /// Sets `WM_CLASS`.
    // `XSetClassHint`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XSetClassHint.html
    pub fn set_window_class(&self, window: xlib::Window, name: &str, class: &str) {
        let res_name = Self::c_string(name);
        let res_class = Self::c_string(class);
        let mut hint = xlib::XClassHint {
            res_name: res_name.as_ptr().cast_mut(),
            res_class: res_class.as_ptr().cast_mut(),
        };
        unsafe { (self.xlib.XSetClassHint)(self.display, window, &mut hint) };
    }

    /// Moves and resizes a window.
    // `XMoveResizeWindow`: https://tronche.com/gui/x/xlib/window/XMoveResizeWindow.html
    pub fn move_resize_window(&self, window: xlib::Window, rect: &Xyhw) {
        unsafe {
            (self.xlib.XMoveResizeWindow)(
                self.display,
                window,
                rect.x(),
                rect.y(),
                rect.w().max(1) as u32,
                rect.h().max(1) as u32,
            );
        }
    }

    /// Maps a window and raises it above its siblings.
    // `XMapRaised`: https://tronche.com/gui/x/xlib/window/XMapRaised.html
    pub fn map_window(&self, window: xlib::Window) {
        unsafe { (self.xlib.XMapRaised)(self.display, window) };
    }

    // `XUnmapWindow`: https://tronche.com/gui/x/xlib/window/XUnmapWindow.html
    pub fn unmap_window(&self, window: xlib::Window) {
        unsafe { (self.xlib.XUnmapWindow)(self.display, window) };
    }

    /// Destroys a popup. The `DestroyNotify` that follows drops it from
    /// the popup list.
    // `XDestroyWindow`: https://tronche.com/gui/x/xlib/window/XDestroyWindow.html
    pub fn destroy_popup(&self, window: xlib::Window) {
        if !self.is_popup(window) {
            tracing::debug!("Not destroying unknown popup {}", window);
            return;
        }
        unsafe {
            (self.xlib.XUnmapWindow)(self.display, window);
            (self.xlib.XDestroyWindow)(self.display, window);
        }
    }

    /// Asks for property notifications on a client.
    pub fn watch_window(&mut self, window: xlib::Window) {
        if self.watched.contains(&window) {
            return;
        }
        self.subscribe_to_event(window, CLIENT_EVENT_MASK);
        self.watched.push(window);
    }

    /// Forgets a client that was destroyed.
    pub fn unwatch_window(&mut self, window: xlib::Window) {
        self.watched.retain(|w| *w != window);
    }

    /// Asks the window manager to activate a client.
    pub fn activate_window(&self, window: xlib::Window) {
        // Source indication 2: a pager or taskbar.
        self.send_root_message(
            window,
            self.atoms.NetActiveWindow,
            &[2, xlib::CurrentTime as c_long, 0],
        );
    }
}
