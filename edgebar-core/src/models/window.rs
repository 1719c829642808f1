//! Window handles shared by every display server.
#![allow(clippy::module_name_repetitions)]

use std::fmt::Debug;
use std::hash::Hash;

/// A trait which backend specific window handles need to implement
pub trait Handle: Debug + Clone + Copy + PartialEq + Eq + Hash + Default + Send + 'static {}

/// A Backend-agnostic handle to a window used to identify it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle<H>(pub H)
where
    H: Handle;

/// Handle for testing purposes
pub type MockHandle = i32;
impl Handle for MockHandle {}
