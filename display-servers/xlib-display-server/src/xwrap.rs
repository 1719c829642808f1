//! A wrapper around calls to xlib and X related functions.
// We allow this _ because if we don't we'll receive an error that it isn't read on _task_guard.
#![allow(clippy::used_underscore_binding)]
use super::xatom::XAtom;
use edgebar_core::PopupOwner;
use std::ffi::CString;
use std::os::raw::{c_int, c_long, c_uint};
use std::ptr;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{oneshot, Notify};
use tokio::time::Duration;

use x11_dl::xlib;

mod getters;
mod setters;

const MAX_PROPERTY_VALUE_LEN: c_long = 4096;

const PANEL_NAME: &str = "edgebar";
const PANEL_CLASS: &str = "Edgebar";

pub const ROOT_EVENT_MASK: c_long = xlib::PropertyChangeMask | xlib::StructureNotifyMask;

pub const PANEL_EVENT_MASK: c_long = xlib::EnterWindowMask
    | xlib::LeaveWindowMask
    | xlib::ButtonPressMask
    | xlib::StructureNotifyMask;

pub const POPUP_EVENT_MASK: c_long =
    xlib::EnterWindowMask | xlib::LeaveWindowMask | xlib::StructureNotifyMask;

/// Clients only need to tell us about their title, state and hints.
pub const CLIENT_EVENT_MASK: c_long = xlib::PropertyChangeMask | xlib::StructureNotifyMask;

const X_CONFIGUREWINDOW: u8 = 12;
const X_CHANGEPROPERTY: u8 = 18;
const X_SENDEVENT: u8 = 25;

// This is allowed for now as const extern fns
// are not yet stable (1.56.0, 16 Sept 2021)
// see issue #64926 <https://github.com/rust-lang/rust/issues/64926> for more information.
#[allow(clippy::missing_const_for_fn)]
pub extern "C" fn on_error_from_xlib(_: *mut xlib::Display, er: *mut xlib::XErrorEvent) -> c_int {
    let err = unsafe { *er };
    let ec = err.error_code;
    let rc = err.request_code;

    // Clients vanish between listing and querying them all the time.
    if ec == xlib::BadWindow
        || (rc == X_CONFIGUREWINDOW && ec == xlib::BadMatch)
        || (rc == X_CHANGEPROPERTY && ec == xlib::BadAtom)
        || (rc == X_SENDEVENT && ec == xlib::BadValue)
    {
        return 0;
    }
    tracing::warn!(
        "X protocol error {} on request {} for resource {}",
        ec,
        rc,
        err.resourceid
    );
    0
}

#[derive(Debug, Clone, Error)]
pub enum XlibError {
    #[error("couldn't load xlib: {0}")]
    XlibMissing(String),
    #[error("couldn't open the X display")]
    NoDisplay,
    #[error("couldn't watch the X connection: {0}")]
    Poll(String),
    #[error("xlib returned a failed status")]
    FailedStatus,
}

/// Contains Xserver information and the windows the panel owns.
pub struct XWrap {
    xlib: xlib::Xlib,
    display: *mut xlib::Display,
    root: xlib::Window,
    pub atoms: XAtom,
    pub panel: xlib::Window,
    /// Popups created on behalf of plugins, keyed by the owning plugin's
    /// settings group.
    pub popups: Vec<(PopupOwner, xlib::Window)>,
    /// Clients we asked for property notifications.
    pub watched: Vec<xlib::Window>,
    _task_guard: oneshot::Receiver<()>,
    pub task_notify: Arc<Notify>,
}

impl XWrap {
    /// Connect to the X server and start watching its socket.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Errors if xlib can't be loaded, the display can't be opened or the
    /// connection can't be polled.
    // `XOpenDisplay`: https://tronche.com/gui/x/xlib/display/opening.html
    // `XConnectionNumber`: https://tronche.com/gui/x/xlib/display/display-macros.html#ConnectionNumber
    // `XDefaultRootWindow`: https://tronche.com/gui/x/xlib/display/display-macros.html#DefaultRootWindow
    // `XSetErrorHandler`: https://tronche.com/gui/x/xlib/event-handling/protocol-errors/XSetErrorHandler.html
    pub fn new() -> Result<Self, XlibError> {
        const SERVER: mio::Token = mio::Token(0);
        let xlib = xlib::Xlib::open().map_err(|err| XlibError::XlibMissing(err.to_string()))?;
        let display = unsafe { (xlib.XOpenDisplay)(ptr::null()) };
        if display.is_null() {
            return Err(XlibError::NoDisplay);
        }

        let fd = unsafe { (xlib.XConnectionNumber)(display) };

        let (guard, _task_guard) = oneshot::channel();
        let notify = Arc::new(Notify::new());
        let task_notify = notify.clone();

        let poll_error = |err: std::io::Error| XlibError::Poll(err.to_string());
        let mut poll = mio::Poll::new().map_err(poll_error)?;
        let mut events = mio::Events::with_capacity(1);
        poll.registry()
            .register(
                &mut mio::unix::SourceFd(&fd),
                SERVER,
                mio::Interest::READABLE,
            )
            .map_err(poll_error)?;
        let timeout = Duration::from_millis(100);
        tokio::task::spawn_blocking(move || loop {
            if guard.is_closed() {
                return;
            }

            if let Err(err) = poll.poll(&mut events, Some(timeout)) {
                tracing::warn!("Xlib socket poll failed with {:?}", err);
                continue;
            }

            events
                .iter()
                .filter(|event| SERVER == event.token())
                .for_each(|_| notify.notify_one());
        });

        let atoms = XAtom::new(&xlib, display);
        let root = unsafe { (xlib.XDefaultRootWindow)(display) };

        let xw = Self {
            xlib,
            display,
            root,
            atoms,
            panel: 0,
            popups: vec![],
            watched: vec![],
            _task_guard,
            task_notify,
        };

        unsafe { (xw.xlib.XSetErrorHandler)(Some(on_error_from_xlib)) };
        xw.subscribe_to_event(root, ROOT_EVENT_MASK);
        xw.sync();
        Ok(xw)
    }

    /// Create the panel window, typed as a dock, without mapping it.
    // `XCreateSimpleWindow`: https://tronche.com/gui/x/xlib/window/XCreateWindow.html
    pub fn init_panel(&mut self, thickness: i32) {
        let size = thickness.max(1) as c_uint;
        self.panel = self.create_window(size, size, false);
        self.subscribe_to_event(self.panel, PANEL_EVENT_MASK);
        self.set_window_type(self.panel, self.atoms.NetWMWindowTypeDock);
        self.set_window_name(self.panel, PANEL_NAME);
        self.set_window_class(self.panel, PANEL_NAME, PANEL_CLASS);
        self.sync();
    }

    /// Create a popup window, unmapped. Popups bypass the window manager so
    /// they appear exactly where the plugin placed them.
    pub fn create_popup(&mut self, owner: PopupOwner, width: i32, height: i32) -> xlib::Window {
        let window = self.create_window(width.max(1) as c_uint, height.max(1) as c_uint, true);
        self.subscribe_to_event(window, POPUP_EVENT_MASK);
        self.set_window_type(window, self.atoms.NetWMWindowTypePopupMenu);
        self.set_window_class(window, PANEL_NAME, PANEL_CLASS);
        self.popups.push((owner, window));
        window
    }

    fn create_window(&self, width: c_uint, height: c_uint, override_redirect: bool) -> xlib::Window {
        unsafe {
            let screen = (self.xlib.XDefaultScreen)(self.display);
            let background = (self.xlib.XBlackPixel)(self.display, screen);
            let window = (self.xlib.XCreateSimpleWindow)(
                self.display,
                self.root,
                0,
                0,
                width,
                height,
                0,
                background,
                background,
            );
            if override_redirect {
                let mut attrs: xlib::XSetWindowAttributes = std::mem::zeroed();
                attrs.override_redirect = xlib::True;
                (self.xlib.XChangeWindowAttributes)(
                    self.display,
                    window,
                    xlib::CWOverrideRedirect,
                    &mut attrs,
                );
            }
            window
        }
    }

    /// Forget a popup that went away, returning its owner.
    pub fn forget_popup(&mut self, window: xlib::Window) -> Option<PopupOwner> {
        let index = self.popups.iter().position(|(_, w)| *w == window)?;
        Some(self.popups.remove(index).0)
    }

    pub fn is_popup(&self, window: xlib::Window) -> bool {
        self.popups.iter().any(|(_, w)| *w == window)
    }

    /// Whether crossing and map events on `window` concern the panel.
    pub fn is_own_window(&self, window: xlib::Window) -> bool {
        window == self.panel || self.is_popup(window)
    }

    /// Send a xevent for a window to X.
    // `XSendEvent`: https://tronche.com/gui/x/xlib/event-handling/XSendEvent.html
    pub fn send_xevent(
        &self,
        window: xlib::Window,
        propogate: i32,
        mask: c_long,
        event: &mut xlib::XEvent,
    ) {
        unsafe { (self.xlib.XSendEvent)(self.display, window, propogate, mask, event) };
        self.sync();
    }

    /// Send an EWMH client message about `window` to the root window.
    pub fn send_root_message(&self, window: xlib::Window, message_type: xlib::Atom, data: &[c_long]) {
        let mut msg: xlib::XClientMessageEvent = unsafe { std::mem::zeroed() };
        msg.type_ = xlib::ClientMessage;
        msg.window = window;
        msg.message_type = message_type;
        msg.format = 32;
        for (i, value) in data.iter().take(5).enumerate() {
            msg.data.set_long(i, *value);
        }
        let mut ev: xlib::XEvent = msg.into();
        self.send_xevent(
            self.root,
            xlib::False,
            xlib::SubstructureRedirectMask | xlib::SubstructureNotifyMask,
            &mut ev,
        );
    }

    /// Subscribe to an event of a window.
    // `XSelectInput`: https://tronche.com/gui/x/xlib/event-handling/XSelectInput.html
    pub fn subscribe_to_event(&self, window: xlib::Window, mask: c_long) {
        unsafe { (self.xlib.XSelectInput)(self.display, window, mask) };
    }

    /// Flush and sync the xserver.
    // `XSync`: https://tronche.com/gui/x/xlib/event-handling/XSync.html
    pub fn sync(&self) {
        unsafe { (self.xlib.XSync)(self.display, xlib::False) };
    }

    /// Flush the xserver.
    // `XFlush`: https://tronche.com/gui/x/xlib/event-handling/XFlush.html
    pub fn flush(&self) {
        unsafe { (self.xlib.XFlush)(self.display) };
    }

    /// Returns how many events are waiting.
    // `XPending`: https://tronche.com/gui/x/xlib/event-handling/XPending.html
    #[must_use]
    pub fn queue_len(&self) -> i32 {
        unsafe { (self.xlib.XPending)(self.display) }
    }

    fn c_string(value: &str) -> CString {
        CString::new(value).unwrap_or_default()
    }
}

impl Drop for XWrap {
    // `XCloseDisplay`: https://tronche.com/gui/x/xlib/display/closing.html
    fn drop(&mut self) {
        unsafe {
            for (_, popup) in &self.popups {
                (self.xlib.XDestroyWindow)(self.display, *popup);
            }
            if self.panel != 0 {
                (self.xlib.XDestroyWindow)(self.display, self.panel);
            }
            (self.xlib.XCloseDisplay)(self.display);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_describe_what_failed() {
        assert_eq!(XlibError::NoDisplay.to_string(), "couldn't open the X display");
        assert_eq!(
            XlibError::Poll("bad fd".to_owned()).to_string(),
            "couldn't watch the X connection: bad fd"
        );
        let source: &dyn std::error::Error = &XlibError::FailedStatus;
        assert!(source.source().is_none());
    }
}
