use super::Handle;
use super::TaskButton;
use super::WindowHandle;
use super::WindowState;

type MaybeName = Option<String>;

/// Partial update of one client, built from a single property notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowChange<H: Handle> {
    pub handle: WindowHandle<H>,
    pub name: Option<MaybeName>,
    pub urgent: Option<bool>,
    pub states: Option<Vec<WindowState>>,
}

impl<H: Handle> WindowChange<H> {
    #[must_use]
    pub const fn new(h: WindowHandle<H>) -> Self {
        Self {
            handle: h,
            name: None,
            urgent: None,
            states: None,
        }
    }

    /// Whether the change asks for the window to leave the task list.
    pub fn skips_taskbar(&self) -> bool {
        self.states
            .as_ref()
            .is_some_and(|states| states.contains(&WindowState::SkipTaskbar))
    }

    pub fn update(self, button: &mut TaskButton) -> bool {
        let mut changed = false;
        if let Some(name) = self.name {
            changed = changed || button.title != name;
            button.title = name;
        }
        let attention = self
            .states
            .as_ref()
            .map(|states| states.contains(&WindowState::DemandsAttention));
        if let Some(urgent) = self.urgent.or(attention) {
            changed = changed || button.urgent != urgent;
            button.urgent = urgent;
        }
        changed
    }
}
