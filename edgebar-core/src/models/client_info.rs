use super::{Handle, WindowHandle, WindowState, WindowType};

/// What the bridge knows about a client when it first shows up in the
/// client list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo<H: Handle> {
    pub handle: WindowHandle<H>,
    pub name: Option<String>,
    pub r#type: WindowType,
    pub states: Vec<WindowState>,
    pub transient: Option<WindowHandle<H>>,
    pub urgent: bool,
}

impl<H: Handle> ClientInfo<H> {
    #[must_use]
    pub fn new(handle: WindowHandle<H>) -> Self {
        Self {
            handle,
            name: None,
            r#type: WindowType::Normal,
            states: vec![],
            transient: None,
            urgent: false,
        }
    }

    /// Whether the window deserves a task button.
    pub fn is_acceptable(&self) -> bool {
        if self.states.contains(&WindowState::SkipTaskbar) {
            return false;
        }
        match self.r#type {
            WindowType::Normal => true,
            WindowType::Dialog => self.transient.is_none(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MockHandle;

    fn info(r#type: WindowType) -> ClientInfo<MockHandle> {
        ClientInfo {
            r#type,
            ..ClientInfo::new(WindowHandle(1))
        }
    }

    #[test]
    fn normal_windows_are_accepted() {
        assert!(info(WindowType::Normal).is_acceptable());
    }

    #[test]
    fn docks_and_desktops_are_rejected() {
        assert!(!info(WindowType::Dock).is_acceptable());
        assert!(!info(WindowType::Desktop).is_acceptable());
        assert!(!info(WindowType::Splash).is_acceptable());
        assert!(!info(WindowType::Utility).is_acceptable());
    }

    #[test]
    fn transient_dialogs_are_rejected() {
        let mut dialog = info(WindowType::Dialog);
        assert!(dialog.is_acceptable());
        dialog.transient = Some(WindowHandle(7));
        assert!(!dialog.is_acceptable());
    }

    #[test]
    fn skip_taskbar_wins_over_type() {
        let mut window = info(WindowType::Normal);
        window.states.push(WindowState::SkipTaskbar);
        assert!(!window.is_acceptable());
    }
}
