//! `XWrap` getters.
use super::{XlibError, MAX_PROPERTY_VALUE_LEN};
use crate::{XWrap, XlibWindowHandle};
use edgebar_core::models::{BBox, ClientInfo, Screen, WindowHandle, WindowState, WindowType};
use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_uchar, c_ulong};
use std::slice;
use x11_dl::xinerama::XineramaScreenInfo;
use x11_dl::xlib::{self, XWindowAttributes};
use x11_dl::xrandr::XRRCrtcInfo;

impl XWrap {
    // Public functions.

    /// Returns the default root.
    #[must_use]
    pub const fn get_default_root(&self) -> xlib::Window {
        self.root
    }

    /// Returns the next `Xevent` of the xserver.
    // `XNextEvent`: https://tronche.com/gui/x/xlib/event-handling/manipulating-event-queue/XNextEvent.html
    #[must_use]
    pub fn get_next_event(&self) -> xlib::XEvent {
        unsafe {
            let mut event: xlib::XEvent = std::mem::zeroed();
            (self.xlib.XNextEvent)(self.display, &mut event);
            event
        }
    }

    /// Returns all the screens of the display.
    ///
    /// Uses randr when available, otherwise Xinerama, otherwise the root
    /// window. Only randr knows the output names.
    #[must_use]
    pub fn get_screens(&self) -> Vec<Screen> {
        if let Some(screens) = self.get_randr_screens().filter(|s| !s.is_empty()) {
            return screens;
        }
        if let Some(screens) = self.get_xinerama_screens().filter(|s| !s.is_empty()) {
            return screens;
        }
        match self.get_window_attrs(self.root) {
            Ok(attrs) => vec![XWindowAttributesIntoScreen(&attrs).into()],
            Err(err) => {
                tracing::error!("No screen was detected: {}", err);
                vec![]
            }
        }
    }

    /// Returns `_NET_CLIENT_LIST` of the root window.
    #[must_use]
    pub fn get_client_list(&self) -> Vec<xlib::Window> {
        self.get_property_longs(self.root, self.atoms.NetClientList, xlib::XA_WINDOW)
            .unwrap_or_default()
    }

    /// Returns `_NET_ACTIVE_WINDOW` of the root window.
    #[must_use]
    pub fn get_active_window(&self) -> Option<xlib::Window> {
        self.get_property_longs(self.root, self.atoms.NetActiveWindow, xlib::XA_WINDOW)?
            .first()
            .copied()
            .filter(|&w| w != 0)
    }

    /// Collects what the task list needs to know about a client.
    #[must_use]
    pub fn get_client_info(&self, window: xlib::Window) -> Option<ClientInfo<XlibWindowHandle>> {
        // A client that vanished has no attributes.
        self.get_window_attrs(window).ok()?;
        let urgent = self
            .get_wmhints(window)
            .is_some_and(|hints| hints.flags & xlib::XUrgencyHint != 0);
        Some(ClientInfo {
            name: self.get_window_name(window),
            r#type: self.get_window_type(window),
            states: self.get_window_states(window),
            transient: self
                .get_transient_for(window)
                .map(|w| WindowHandle(XlibWindowHandle(w))),
            urgent,
            ..ClientInfo::new(WindowHandle(XlibWindowHandle(window)))
        })
    }

    /// Returns the transient parent of a window.
    // `XGetTransientForHint`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetTransientForHint.html
    #[must_use]
    pub fn get_transient_for(&self, window: xlib::Window) -> Option<xlib::Window> {
        unsafe {
            let mut transient: xlib::Window = std::mem::zeroed();
            let status: c_int =
                (self.xlib.XGetTransientForHint)(self.display, window, &mut transient);
            if status > 0 && transient != 0 {
                Some(transient)
            } else {
                None
            }
        }
    }

    /// Returns the attributes of a window.
    /// # Errors
    ///
    /// Will error if window status is 0 (no attributes).
    // `XGetWindowAttributes`: https://tronche.com/gui/x/xlib/window-information/XGetWindowAttributes.html
    pub fn get_window_attrs(
        &self,
        window: xlib::Window,
    ) -> Result<xlib::XWindowAttributes, XlibError> {
        let mut attrs: xlib::XWindowAttributes = unsafe { std::mem::zeroed() };
        let status = unsafe { (self.xlib.XGetWindowAttributes)(self.display, window, &mut attrs) };
        if status == 0 {
            return Err(XlibError::FailedStatus);
        }
        Ok(attrs)
    }

    /// Returns a windows name, preferring `_NET_WM_NAME`.
    #[must_use]
    pub fn get_window_name(&self, window: xlib::Window) -> Option<String> {
        if let Some(bytes) = self.get_property_bytes(window, self.atoms.NetWMName, self.atoms.UTF8String) {
            return Some(String::from_utf8_lossy(&bytes).into_owned());
        }
        self.get_text_prop(window, xlib::XA_WM_NAME).ok()
    }

    /// Returns the states of a window.
    #[must_use]
    pub fn get_window_states(&self, window: xlib::Window) -> Vec<WindowState> {
        self.get_property_longs(window, self.atoms.NetWMState, xlib::XA_ATOM)
            .unwrap_or_default()
            .iter()
            .filter_map(|a| match a {
                x if x == &self.atoms.NetWMStateModal => Some(WindowState::Modal),
                x if x == &self.atoms.NetWMStateSticky => Some(WindowState::Sticky),
                x if x == &self.atoms.NetWMStateMaximizedVert => Some(WindowState::MaximizedVert),
                x if x == &self.atoms.NetWMStateMaximizedHorz => Some(WindowState::MaximizedHorz),
                x if x == &self.atoms.NetWMStateShaded => Some(WindowState::Shaded),
                x if x == &self.atoms.NetWMStateSkipTaskbar => Some(WindowState::SkipTaskbar),
                x if x == &self.atoms.NetWMStateSkipPager => Some(WindowState::SkipPager),
                x if x == &self.atoms.NetWMStateHidden => Some(WindowState::Hidden),
                x if x == &self.atoms.NetWMStateFullscreen => Some(WindowState::Fullscreen),
                x if x == &self.atoms.NetWMStateAbove => Some(WindowState::Above),
                x if x == &self.atoms.NetWMStateBelow => Some(WindowState::Below),
                x if x == &self.atoms.NetWMStateDemandsAttention => {
                    Some(WindowState::DemandsAttention)
                }
                _ => None,
            })
            .collect()
    }

    /// Returns the type of a window.
    #[must_use]
    pub fn get_window_type(&self, window: xlib::Window) -> WindowType {
        let atom = self
            .get_property_longs(window, self.atoms.NetWMWindowType, xlib::XA_ATOM)
            .and_then(|atoms| atoms.first().copied());
        match atom {
            x if x == Some(self.atoms.NetWMWindowTypeDesktop) => WindowType::Desktop,
            x if x == Some(self.atoms.NetWMWindowTypeDock) => WindowType::Dock,
            x if x == Some(self.atoms.NetWMWindowTypeToolbar) => WindowType::Toolbar,
            x if x == Some(self.atoms.NetWMWindowTypeMenu)
                || x == Some(self.atoms.NetWMWindowTypePopupMenu) =>
            {
                WindowType::Menu
            }
            x if x == Some(self.atoms.NetWMWindowTypeUtility) => WindowType::Utility,
            x if x == Some(self.atoms.NetWMWindowTypeSplash) => WindowType::Splash,
            x if x == Some(self.atoms.NetWMWindowTypeDialog) => WindowType::Dialog,
            x if x == Some(self.atoms.NetWMWindowTypeNotification) => WindowType::Notification,
            _ => WindowType::Normal,
        }
    }

    /// Returns the `WM_HINTS` of a window.
    // `XGetWMHints`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetWMHints.html
    #[must_use]
    pub fn get_wmhints(&self, window: xlib::Window) -> Option<xlib::XWMHints> {
        unsafe {
            let hints_ptr: *mut xlib::XWMHints = (self.xlib.XGetWMHints)(self.display, window);
            if hints_ptr.is_null() {
                return None;
            }
            let hints: xlib::XWMHints = *hints_ptr;
            (self.xlib.XFree)(hints_ptr.cast());
            Some(hints)
        }
    }

    // Internal functions.

    fn get_randr_screens(&self) -> Option<Vec<Screen>> {
        use x11_dl::xrandr::Xrandr;
        let xrandr = Xrandr::open().ok()?;
        unsafe {
            let screen_resources = (xrandr.XRRGetScreenResources)(self.display, self.root);
            if screen_resources.is_null() {
                return None;
            }
            let outputs = slice::from_raw_parts(
                (*screen_resources).outputs,
                (*screen_resources).noutput as usize,
            );

            let mut screens = vec![];
            for output in outputs {
                let output_info = (xrandr.XRRGetOutputInfo)(self.display, screen_resources, *output);
                if output_info.is_null() {
                    continue;
                }
                if (*output_info).crtc != 0 {
                    let crtc_info = (xrandr.XRRGetCrtcInfo)(
                        self.display,
                        screen_resources,
                        (*output_info).crtc,
                    );
                    if !crtc_info.is_null() {
                        let mut screen: Screen = XRRCrtcInfoIntoScreen(&*crtc_info).into();
                        screen.output = CStr::from_ptr((*output_info).name)
                            .to_string_lossy()
                            .into_owned();
                        screens.push(screen);
                        (xrandr.XRRFreeCrtcInfo)(crtc_info);
                    }
                }
                (xrandr.XRRFreeOutputInfo)(output_info);
            }
            (xrandr.XRRFreeScreenResources)(screen_resources);
            Some(screens)
        }
    }

    fn get_xinerama_screens(&self) -> Option<Vec<Screen>> {
        use x11_dl::xinerama::Xlib;
        let xinerama = Xlib::open().ok()?;
        if unsafe { (xinerama.XineramaIsActive)(self.display) } <= 0 {
            return None;
        }
        let mut screen_count = 0;
        let info_array_raw =
            unsafe { (xinerama.XineramaQueryScreens)(self.display, &mut screen_count) };
        if info_array_raw.is_null() {
            return None;
        }
        let xinerama_infos: &[XineramaScreenInfo] =
            unsafe { slice::from_raw_parts(info_array_raw, screen_count as usize) };
        let screens = xinerama_infos
            .iter()
            .map(|i| XineramaScreenInfoIntoScreen(i).into())
            .collect();
        unsafe { (self.xlib.XFree)(info_array_raw.cast()) };
        Some(screens)
    }

    /// Reads a 32 bit property and copies it out of the xlib buffer.
    // `XGetWindowProperty`: https://tronche.com/gui/x/xlib/window-information/XGetWindowProperty.html
    pub(crate) fn get_property_longs(
        &self,
        window: xlib::Window,
        property: xlib::Atom,
        r#type: xlib::Atom,
    ) -> Option<Vec<c_ulong>> {
        let (prop_return, nitems_return, format) = self.get_property(window, property, r#type)?;
        let values = if format == 32 {
            #[allow(clippy::cast_ptr_alignment)]
            let ptr = prop_return.cast::<c_ulong>();
            unsafe { slice::from_raw_parts(ptr, nitems_return as usize) }.to_vec()
        } else {
            vec![]
        };
        unsafe { (self.xlib.XFree)(prop_return.cast()) };
        Some(values)
    }

    /// Reads an 8 bit property and copies it out of the xlib buffer.
    fn get_property_bytes(
        &self,
        window: xlib::Window,
        property: xlib::Atom,
        r#type: xlib::Atom,
    ) -> Option<Vec<u8>> {
        let (prop_return, nitems_return, format) = self.get_property(window, property, r#type)?;
        let bytes = if format == 8 && nitems_return > 0 {
            unsafe { slice::from_raw_parts(prop_return, nitems_return as usize) }.to_vec()
        } else {
            vec![]
        };
        unsafe { (self.xlib.XFree)(prop_return.cast()) };
        Some(bytes).filter(|b| !b.is_empty())
    }

    /// The returned buffer must be released with `XFree`.
    fn get_property(
        &self,
        window: xlib::Window,
        property: xlib::Atom,
        r#type: xlib::Atom,
    ) -> Option<(*mut c_uchar, c_ulong, c_int)> {
        let mut format_return: i32 = 0;
        let mut nitems_return: c_ulong = 0;
        let mut type_return: xlib::Atom = 0;
        let mut bytes_after_return: c_ulong = 0;
        let mut prop_return: *mut c_uchar = unsafe { std::mem::zeroed() };
        unsafe {
            let status = (self.xlib.XGetWindowProperty)(
                self.display,
                window,
                property,
                0,
                MAX_PROPERTY_VALUE_LEN / 4,
                xlib::False,
                r#type,
                &mut type_return,
                &mut format_return,
                &mut nitems_return,
                &mut bytes_after_return,
                &mut prop_return,
            );
            if status == i32::from(xlib::Success) && !prop_return.is_null() {
                return Some((prop_return, nitems_return, format_return));
            }
        };
        None
    }

    /// Returns a text property for a window.
    /// # Errors
    ///
    /// Errors if window status = 0.
    // `XGetTextProperty`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetTextProperty.html
    fn get_text_prop(&self, window: xlib::Window, atom: xlib::Atom) -> Result<String, XlibError> {
        unsafe {
            let mut text_prop: xlib::XTextProperty = std::mem::zeroed();
            let status: c_int =
                (self.xlib.XGetTextProperty)(self.display, window, &mut text_prop, atom);
            if status == 0 || text_prop.value.is_null() {
                return Err(XlibError::FailedStatus);
            }
            let s = CStr::from_ptr(text_prop.value.cast::<c_char>())
                .to_string_lossy()
                .into_owned();
            (self.xlib.XFree)(text_prop.value.cast());
            Ok(s)
        }
    }
}

struct XRRCrtcInfoIntoScreen<'a>(&'a XRRCrtcInfo);

impl From<XRRCrtcInfoIntoScreen<'_>> for Screen {
    fn from(info: XRRCrtcInfoIntoScreen<'_>) -> Self {
        let info = info.0;
        Screen::new(
            BBox::new(info.x, info.y, info.width as i32, info.height as i32),
            String::new(),
        )
    }
}

struct XineramaScreenInfoIntoScreen<'a>(&'a XineramaScreenInfo);

impl From<XineramaScreenInfoIntoScreen<'_>> for Screen {
    fn from(info: XineramaScreenInfoIntoScreen<'_>) -> Self {
        let info = info.0;
        Screen::new(
            BBox::new(
                info.x_org.into(),
                info.y_org.into(),
                info.width.into(),
                info.height.into(),
            ),
            String::new(),
        )
    }
}

struct XWindowAttributesIntoScreen<'a>(&'a XWindowAttributes);

impl From<XWindowAttributesIntoScreen<'_>> for Screen {
    fn from(attrs: XWindowAttributesIntoScreen<'_>) -> Self {
        let attrs = attrs.0;
        Screen::new(
            BBox::new(attrs.x, attrs.y, attrs.width, attrs.height),
            String::new(),
        )
    }
}
