//! Session & intake core.
//!
//! [`PortalController`] owns every piece of mutable session state and is the
//! only thing the renderer talks to. Each concern keeps its state in a small
//! MVI triple (`state` / `intent` / `reducer`); the controller validates
//! input, resolves side effects (clock, classifier, timer) and dispatches.

pub mod controller;
pub mod error;
pub mod form;
pub mod intake;
pub mod language;
pub mod session;

pub use controller::PortalController;
pub use error::{ValidationError, MIN_PASSWORD_LEN};
pub use language::Language;
