//! The taskbar's view of `_NET_CLIENT_LIST`.
use super::{ClientInfo, Handle, WindowChange, WindowHandle};

/// Per window button state owned by the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskButton {
    pub id: u64,
    pub title: Option<String>,
    pub checked: bool,
    pub urgent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedWindow<H: Handle> {
    pub handle: WindowHandle<H>,
    pub button: TaskButton,
}

/// Result of one refresh against the client list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerDiff<H: Handle> {
    pub removed: Vec<WindowHandle<H>>,
    pub added: Vec<WindowHandle<H>>,
}

impl<H: Handle> Default for TrackerDiff<H> {
    fn default() -> Self {
        Self {
            removed: vec![],
            added: vec![],
        }
    }
}

impl<H: Handle> TrackerDiff<H> {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

#[derive(Debug)]
pub struct TaskWindowTracker<H: Handle> {
    windows: Vec<TrackedWindow<H>>,
    next_button_id: u64,
}

impl<H: Handle> Default for TaskWindowTracker<H> {
    fn default() -> Self {
        Self {
            windows: vec![],
            next_button_id: 1,
        }
    }
}

impl<H: Handle> TaskWindowTracker<H> {
    /// Diff the tracked set against a fresh client list.
    ///
    /// Entries that left the list are dropped, untracked handles are queried
    /// through `info` and tracked when acceptable, and entries present on
    /// both sides are left alone so their buttons survive. A handle rejected
    /// once is asked again on the next sync, as its type or states may have
    /// changed since.
    pub fn sync<F>(&mut self, client_list: &[WindowHandle<H>], mut info: F) -> TrackerDiff<H>
    where
        F: FnMut(WindowHandle<H>) -> Option<ClientInfo<H>>,
    {
        let mut diff = TrackerDiff::default();

        self.windows.retain(|w| {
            let keep = client_list.contains(&w.handle);
            if !keep {
                diff.removed.push(w.handle);
            }
            keep
        });
        for handle in client_list {
            if self.get(*handle).is_some() {
                continue;
            }
            match info(*handle) {
                Some(client) if client.is_acceptable() => {
                    let button = self.new_button(&client);
                    self.windows.push(TrackedWindow {
                        handle: *handle,
                        button,
                    });
                    diff.added.push(*handle);
                }
                Some(_) => {}
                // Gone before we could ask; the next refresh will drop it.
                None => {}
            }
        }

        if !diff.is_empty() {
            tracing::debug!(
                "Task list: {} added, {} removed, {} tracked",
                diff.added.len(),
                diff.removed.len(),
                self.windows.len()
            );
        }
        diff
    }

    /// Check the button of `active` and uncheck every other one. Returns
    /// whether any button changed.
    pub fn active_window_changed(&mut self, active: Option<WindowHandle<H>>) -> bool {
        let mut changed = false;
        for window in &mut self.windows {
            let checked = Some(window.handle) == active;
            changed = changed || window.button.checked != checked;
            window.button.checked = checked;
        }
        changed
    }

    /// Apply a property change to the one matching entry.
    pub fn window_changed(&mut self, change: WindowChange<H>) -> bool {
        if change.skips_taskbar() {
            let before = self.windows.len();
            self.windows.retain(|w| w.handle != change.handle);
            return self.windows.len() != before;
        }
        match self.windows.iter_mut().find(|w| w.handle == change.handle) {
            Some(window) => change.update(&mut window.button),
            None => false,
        }
    }

    pub fn get(&self, handle: WindowHandle<H>) -> Option<&TrackedWindow<H>> {
        self.windows.iter().find(|w| w.handle == handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedWindow<H>> {
        self.windows.iter()
    }

    pub fn handles(&self) -> Vec<WindowHandle<H>> {
        self.windows.iter().map(|w| w.handle).collect()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn new_button(&mut self, client: &ClientInfo<H>) -> TaskButton {
        let id = self.next_button_id;
        self.next_button_id += 1;
        TaskButton {
            id,
            title: client.name.clone(),
            checked: false,
            urgent: client.urgent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MockHandle, WindowState, WindowType};

    fn normal(handle: WindowHandle<MockHandle>) -> Option<ClientInfo<MockHandle>> {
        Some(ClientInfo {
            name: Some(format!("window {}", handle.0)),
            ..ClientInfo::new(handle)
        })
    }

    fn handles(ids: &[i32]) -> Vec<WindowHandle<MockHandle>> {
        ids.iter().copied().map(WindowHandle).collect()
    }

    #[test]
    fn sync_only_touches_the_difference() {
        let mut tracker = TaskWindowTracker::default();
        tracker.sync(&handles(&[1, 2, 3]), normal);
        let b_id = tracker.get(WindowHandle(2)).map(|w| w.button.id);
        let c_id = tracker.get(WindowHandle(3)).map(|w| w.button.id);

        let mut queried = vec![];
        let diff = tracker.sync(&handles(&[2, 3, 4]), |h| {
            queried.push(h);
            normal(h)
        });

        assert_eq!(diff.removed, handles(&[1]));
        assert_eq!(diff.added, handles(&[4]));
        assert_eq!(queried, handles(&[4]));
        assert_eq!(tracker.get(WindowHandle(2)).map(|w| w.button.id), b_id);
        assert_eq!(tracker.get(WindowHandle(3)).map(|w| w.button.id), c_id);
        assert_eq!(tracker.handles(), handles(&[2, 3, 4]));
    }

    #[test]
    fn rejected_windows_are_asked_again_on_the_next_sync() {
        let mut tracker = TaskWindowTracker::default();
        let skipped = |h: WindowHandle<MockHandle>| {
            Some(ClientInfo {
                states: vec![WindowState::SkipTaskbar],
                ..ClientInfo::new(h)
            })
        };
        let diff = tracker.sync(&handles(&[7]), skipped);
        assert!(diff.added.is_empty());

        // The client dropped `_NET_WM_STATE_SKIP_TASKBAR` in the meantime.
        let diff = tracker.sync(&handles(&[7, 8]), normal);
        assert_eq!(diff.added, handles(&[7, 8]));
        assert_eq!(tracker.handles(), handles(&[7, 8]));
    }

    #[test]
    fn windows_typed_after_listing_get_a_button() {
        let mut tracker = TaskWindowTracker::default();
        let utility = |h: WindowHandle<MockHandle>| {
            Some(ClientInfo {
                r#type: WindowType::Utility,
                ..ClientInfo::new(h)
            })
        };
        tracker.sync(&handles(&[3]), utility);
        assert!(tracker.is_empty());
        tracker.sync(&handles(&[3]), normal);
        assert_eq!(tracker.handles(), handles(&[3]));
    }

    #[test]
    fn vanished_windows_are_skipped() {
        let mut tracker: TaskWindowTracker<MockHandle> = TaskWindowTracker::default();
        let diff = tracker.sync(&handles(&[5]), |_| None);
        assert!(diff.is_empty());
        assert!(tracker.is_empty());
    }

    #[test]
    fn only_the_active_window_is_checked() {
        let mut tracker = TaskWindowTracker::default();
        tracker.sync(&handles(&[1, 2, 3]), normal);

        assert!(tracker.active_window_changed(Some(WindowHandle(2))));
        let checked: Vec<bool> = tracker.iter().map(|w| w.button.checked).collect();
        assert_eq!(checked, vec![false, true, false]);

        assert!(tracker.active_window_changed(Some(WindowHandle(42))));
        assert!(tracker.iter().all(|w| !w.button.checked));
        assert!(!tracker.active_window_changed(None));
    }

    #[test]
    fn window_change_updates_one_button() {
        let mut tracker = TaskWindowTracker::default();
        tracker.sync(&handles(&[1, 2]), normal);

        let mut change = WindowChange::new(WindowHandle(2));
        change.name = Some(Some("renamed".to_owned()));
        change.urgent = Some(true);
        assert!(tracker.window_changed(change));

        let renamed = tracker.get(WindowHandle(2)).map(|w| w.button.clone());
        assert_eq!(renamed.as_ref().and_then(|b| b.title.as_deref()), Some("renamed"));
        assert_eq!(renamed.map(|b| b.urgent), Some(true));
        let untouched = tracker.get(WindowHandle(1)).and_then(|w| w.button.title.clone());
        assert_eq!(untouched.as_deref(), Some("window 1"));
    }

    #[test]
    fn gaining_skip_taskbar_drops_the_entry() {
        let mut tracker = TaskWindowTracker::default();
        tracker.sync(&handles(&[1, 2]), normal);

        let mut change = WindowChange::new(WindowHandle(1));
        change.states = Some(vec![WindowState::SkipTaskbar]);
        assert!(tracker.window_changed(change));
        assert_eq!(tracker.handles(), handles(&[2]));

        // Still listed and still skipping the taskbar: stays out.
        let skipped = |h: WindowHandle<MockHandle>| {
            Some(ClientInfo {
                states: vec![WindowState::SkipTaskbar],
                ..ClientInfo::new(h)
            })
        };
        let diff = tracker.sync(&handles(&[1, 2]), skipped);
        assert!(diff.is_empty());
        assert_eq!(tracker.handles(), handles(&[2]));
    }
}
