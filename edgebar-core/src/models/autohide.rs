//! Decides whether an autohiding panel is collapsed to its sentinel strip.
#![allow(clippy::module_name_repetitions)]
use super::{Handle, WindowHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

/// The three flags the geometry depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutohideState {
    /// Autohide is switched on in the panel settings.
    pub enabled: bool,
    /// The pointer is away, the panel wants to hide.
    pub active: bool,
    /// Something (an open menu, a drag) needs the panel to stay up.
    pub locked: bool,
}

impl AutohideState {
    pub const fn is_hidden(&self) -> bool {
        self.enabled && self.active && !self.locked
    }

    pub const fn visibility(&self) -> Visibility {
        if self.is_hidden() {
            Visibility::Hidden
        } else {
            Visibility::Shown
        }
    }
}

/// Raw inputs, already filtered by the display server (no grab or inferior
/// crossings).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutohideEvent<H: Handle> {
    Enter(WindowHandle<H>),
    Leave(WindowHandle<H>),
    Map(WindowHandle<H>),
    Unmap(WindowHandle<H>),
}

#[derive(Debug)]
pub struct AutohideMachine<H: Handle> {
    panel: WindowHandle<H>,
    state: AutohideState,
    leave_workaround: bool,
    popups: Vec<WindowHandle<H>>,
}

impl<H: Handle> AutohideMachine<H> {
    pub fn new(panel: WindowHandle<H>, enabled: bool) -> Self {
        Self {
            panel,
            state: AutohideState {
                enabled,
                active: enabled,
                locked: false,
            },
            leave_workaround: false,
            popups: vec![],
        }
    }

    pub const fn state(&self) -> &AutohideState {
        &self.state
    }

    pub const fn is_hidden(&self) -> bool {
        self.state.is_hidden()
    }

    pub const fn is_locked(&self) -> bool {
        self.state.locked
    }

    pub fn has_popups(&self) -> bool {
        !self.popups.is_empty()
    }

    /// Follow the settings flag. Switching autohide on hides right away.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        self.transition(|machine| {
            if machine.state.enabled != enabled {
                machine.state.enabled = enabled;
                machine.state.active = enabled;
            }
        })
    }

    pub fn lock(&mut self) -> bool {
        self.transition(|machine| machine.state.locked = true)
    }

    /// Release the lock and go back to wanting to hide.
    pub fn unlock(&mut self) -> bool {
        self.transition(|machine| {
            machine.state.locked = false;
            machine.state.active = true;
        })
    }

    /// Feed one crossing or map notification. Returns whether the effective
    /// visibility changed.
    pub fn handle(&mut self, event: AutohideEvent<H>) -> bool {
        self.transition(|machine| match event {
            AutohideEvent::Enter(handle) => machine.on_enter(handle),
            AutohideEvent::Leave(handle) => machine.on_leave(handle),
            AutohideEvent::Map(handle) => machine.on_map(handle),
            AutohideEvent::Unmap(handle) => machine.on_unmap(handle),
        })
    }

    fn transition<F: FnOnce(&mut Self)>(&mut self, f: F) -> bool {
        let before = self.state.visibility();
        f(self);
        let after = self.state.visibility();
        if before != after {
            tracing::trace!("Autohide {:?} -> {:?}", before, after);
        }
        before != after
    }

    fn owns(&self, handle: WindowHandle<H>) -> bool {
        handle == self.panel || self.popups.contains(&handle)
    }

    fn on_enter(&mut self, handle: WindowHandle<H>) {
        if self.state.locked || !self.owns(handle) {
            return;
        }
        self.state.active = false;
    }

    fn on_leave(&mut self, handle: WindowHandle<H>) {
        if !self.owns(handle) {
            return;
        }
        if self.leave_workaround {
            self.leave_workaround = false;
            return;
        }
        if self.state.locked || !self.popups.is_empty() {
            return;
        }
        self.state.active = true;
    }

    fn on_map(&mut self, handle: WindowHandle<H>) {
        if handle == self.panel || self.popups.contains(&handle) {
            return;
        }
        self.popups.push(handle);
        self.leave_workaround = true;
    }

    fn on_unmap(&mut self, handle: WindowHandle<H>) {
        let before = self.popups.len();
        self.popups.retain(|h| *h != handle);
        if before == self.popups.len() {
            return;
        }
        self.leave_workaround = false;
        if self.popups.is_empty() && !self.state.locked {
            self.state.active = true;
        }
    }
}
