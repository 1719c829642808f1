//! Panel placement, autohide and window tracking for edgebar.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
// Remember, the goal of edgebar is to do one thing and to do that one thing
// well: Sit on a screen edge and stay out of the way.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. However, work to ensure that each use of one of these is correct
// would be very much appreciated.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
pub mod geometry;
mod handlers;
pub mod models;
mod panel;
pub mod plugins;
pub mod utils;

pub use config::{Alignment, Edge, Orientation, PanelConfig, Settings};
pub use display_action::{DisplayAction, PopupOwner};
pub use display_event::DisplayEvent;
pub use display_servers::DisplayServer;
pub use errors::{EdgebarError, Result};
pub use geometry::PanelGeometry;
pub use models::Desktop;
pub use panel::Panel;
