//! Nirakshak: a terminal front-end for a citizen grievance portal.
//!
//! Citizens sign in or register, type a complaint and get a priority label
//! back. Everything lives in memory for the length of the session.

pub mod config;
pub mod logging;
pub mod portal;
pub mod shutdown;
pub mod ui;
