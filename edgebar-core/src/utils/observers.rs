//! Synchronous subscriber lists.

/// Callbacks run in subscription order on the event thread.
pub struct Observers<E> {
    subscribers: Vec<Box<dyn FnMut(&E)>>,
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self {
            subscribers: vec![],
        }
    }
}

impl<E> std::fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<E> Observers<E> {
    pub fn subscribe<F>(&mut self, f: F)
    where
        F: FnMut(&E) + 'static,
    {
        self.subscribers.push(Box::new(f));
    }

    pub fn notify(&mut self, event: &E) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn subscribers_see_every_event_in_order() {
        let seen = Rc::new(RefCell::new(vec![]));
        let mut observers = Observers::default();
        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            observers.subscribe(move |value: &i32| seen.borrow_mut().push(format!("{tag}{value}")));
        }
        observers.notify(&1);
        observers.notify(&2);
        assert_eq!(*seen.borrow(), vec!["a1", "b1", "a2", "b2"]);
    }
}
