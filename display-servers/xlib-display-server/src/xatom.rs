use std::ffi::CString;
use x11_dl::xlib;

// Specifications can be found here:
// https://specifications.freedesktop.org/wm-spec/1.3/ar01s03.html

#[derive(Clone, Debug)]
#[allow(non_snake_case)]
pub struct XAtom {
    pub WMClass: xlib::Atom,
    pub NetActiveWindow: xlib::Atom,
    pub NetClientList: xlib::Atom,
    pub NetWMName: xlib::Atom,
    pub NetWMDesktop: xlib::Atom,
    pub NetWMStrutPartial: xlib::Atom, //net version - Reserve Screen Space
    pub NetWMStrut: xlib::Atom,        //old version

    pub NetWMState: xlib::Atom,
    pub NetWMStateModal: xlib::Atom,
    pub NetWMStateSticky: xlib::Atom,
    pub NetWMStateMaximizedVert: xlib::Atom,
    pub NetWMStateMaximizedHorz: xlib::Atom,
    pub NetWMStateShaded: xlib::Atom,
    pub NetWMStateSkipTaskbar: xlib::Atom,
    pub NetWMStateSkipPager: xlib::Atom,
    pub NetWMStateHidden: xlib::Atom,
    pub NetWMStateFullscreen: xlib::Atom,
    pub NetWMStateAbove: xlib::Atom,
    pub NetWMStateBelow: xlib::Atom,
    pub NetWMStateDemandsAttention: xlib::Atom,

    pub NetWMWindowType: xlib::Atom,
    pub NetWMWindowTypeDesktop: xlib::Atom,
    pub NetWMWindowTypeDock: xlib::Atom,
    pub NetWMWindowTypeToolbar: xlib::Atom,
    pub NetWMWindowTypeMenu: xlib::Atom,
    pub NetWMWindowTypeUtility: xlib::Atom,
    pub NetWMWindowTypeSplash: xlib::Atom,
    pub NetWMWindowTypeDialog: xlib::Atom,
    pub NetWMWindowTypeNotification: xlib::Atom,
    pub NetWMWindowTypePopupMenu: xlib::Atom,

    pub UTF8String: xlib::Atom,
}

impl XAtom {
    pub fn get_name(&self, atom: xlib::Atom) -> &str {
        match atom {
            a if a == self.WMClass => "WM_CLASS",
            a if a == self.NetActiveWindow => "_NET_ACTIVE_WINDOW",
            a if a == self.NetClientList => "_NET_CLIENT_LIST",
            a if a == self.NetWMName => "_NET_WM_NAME",
            a if a == self.NetWMDesktop => "_NET_WM_DESKTOP",
            a if a == self.NetWMStrutPartial => "_NET_WM_STRUT_PARTIAL",
            a if a == self.NetWMStrut => "_NET_WM_STRUT",
            a if a == self.NetWMState => "_NET_WM_STATE",
            a if a == self.NetWMWindowType => "_NET_WM_WINDOW_TYPE",
            a if a == self.UTF8String => "UTF8_STRING",
            xlib::XA_WM_NAME => "WM_NAME",
            xlib::XA_WM_HINTS => "WM_HINTS",
            xlib::XA_WM_TRANSIENT_FOR => "WM_TRANSIENT_FOR",
            _ => "(UNKNOWN)",
        }
    }

    pub fn new(xlib: &xlib::Xlib, dpy: *mut xlib::Display) -> Self {
        Self {
            WMClass: from(xlib, dpy, "WM_CLASS"),
            NetActiveWindow: from(xlib, dpy, "_NET_ACTIVE_WINDOW"),
            NetClientList: from(xlib, dpy, "_NET_CLIENT_LIST"),
            NetWMName: from(xlib, dpy, "_NET_WM_NAME"),
            NetWMDesktop: from(xlib, dpy, "_NET_WM_DESKTOP"),
            NetWMStrutPartial: from(xlib, dpy, "_NET_WM_STRUT_PARTIAL"),
            NetWMStrut: from(xlib, dpy, "_NET_WM_STRUT"),

            NetWMState: from(xlib, dpy, "_NET_WM_STATE"),
            NetWMStateModal: from(xlib, dpy, "_NET_WM_STATE_MODAL"),
            NetWMStateSticky: from(xlib, dpy, "_NET_WM_STATE_STICKY"),
            NetWMStateMaximizedVert: from(xlib, dpy, "_NET_WM_STATE_MAXIMIZED_VERT"),
            NetWMStateMaximizedHorz: from(xlib, dpy, "_NET_WM_STATE_MAXIMIZED_HORZ"),
            NetWMStateShaded: from(xlib, dpy, "_NET_WM_STATE_SHADED"),
            NetWMStateSkipTaskbar: from(xlib, dpy, "_NET_WM_STATE_SKIP_TASKBAR"),
            NetWMStateSkipPager: from(xlib, dpy, "_NET_WM_STATE_SKIP_PAGER"),
            NetWMStateHidden: from(xlib, dpy, "_NET_WM_STATE_HIDDEN"),
            NetWMStateFullscreen: from(xlib, dpy, "_NET_WM_STATE_FULLSCREEN"),
            NetWMStateAbove: from(xlib, dpy, "_NET_WM_STATE_ABOVE"),
            NetWMStateBelow: from(xlib, dpy, "_NET_WM_STATE_BELOW"),
            NetWMStateDemandsAttention: from(xlib, dpy, "_NET_WM_STATE_DEMANDS_ATTENTION"),

            NetWMWindowType: from(xlib, dpy, "_NET_WM_WINDOW_TYPE"),
            NetWMWindowTypeDesktop: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_DESKTOP"),
            NetWMWindowTypeDock: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_DOCK"),
            NetWMWindowTypeToolbar: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_TOOLBAR"),
            NetWMWindowTypeMenu: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_MENU"),
            NetWMWindowTypeUtility: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_UTILITY"),
            NetWMWindowTypeSplash: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_SPLASH"),
            NetWMWindowTypeDialog: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_DIALOG"),
            NetWMWindowTypeNotification: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_NOTIFICATION"),
            NetWMWindowTypePopupMenu: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_POPUP_MENU"),

            UTF8String: from(xlib, dpy, "UTF8_STRING"),
        }
    }
}

// `XInternAtom`: https://tronche.com/gui/x/xlib/window-information/XInternAtom.html
fn from(xlib: &xlib::Xlib, dpy: *mut xlib::Display, s: &str) -> xlib::Atom {
    let name = CString::new(s).unwrap_or_default();
    unsafe { (xlib.XInternAtom)(dpy, name.as_ptr(), xlib::False) }
}
