//! Terminal front-end: event loop, key handling and rendering on top of
//! [`PortalController`](crate::portal::PortalController).

pub mod app;
pub mod dashboard;
pub mod events;
pub mod footer;
pub mod header;
pub mod i18n;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
