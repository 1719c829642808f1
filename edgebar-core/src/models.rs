//! Objects (screens, rectangles, windows) the panel reasons about.
mod autohide;
mod client_info;
mod screen;
mod strut;
mod task_tracker;
mod window;
mod window_change;
mod window_state;
mod window_type;
mod xyhw;

pub use autohide::{AutohideEvent, AutohideMachine, AutohideState, Visibility};
pub use client_info::ClientInfo;
pub use screen::{BBox, Screen};
pub use strut::Strut;
pub use task_tracker::{TaskButton, TaskWindowTracker, TrackedWindow, TrackerDiff};
pub use window::Handle;
pub(crate) use window::MockHandle;
pub use window::WindowHandle;
pub use window_change::WindowChange;
pub use window_state::WindowState;
pub use window_type::WindowType;
pub use xyhw::{Xyhw, XyhwBuilder};

/// Virtual desktop a window is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Desktop {
    Index(u32),
    /// Visible on every desktop, written as `0xFFFFFFFF`.
    All,
}

impl Desktop {
    pub const ALL_DESKTOPS: u32 = 0xFFFF_FFFF;

    pub const fn as_cardinal(self) -> u32 {
        match self {
            Self::Index(index) => index,
            Self::All => Self::ALL_DESKTOPS,
        }
    }
}
