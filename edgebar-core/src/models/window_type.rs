/// `_NET_WM_WINDOW_TYPE`, with `PopupMenu` folded into `Menu`. Windows
/// without the property are `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowType {
    Desktop,
    Dock,
    Toolbar,
    Menu,
    Utility,
    Splash,
    Dialog,
    Notification,
    #[default]
    Normal,
}
