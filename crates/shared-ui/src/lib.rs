//! Presentational components for the Devayu portal.
//!
//! Components here know nothing about routes or the session; the app wraps
//! them with router links and feeds them state.

pub mod components;

pub use components::*;
