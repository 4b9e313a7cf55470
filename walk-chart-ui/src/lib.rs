//! Shared Dioxus components and Leaflet bridge for the walking-survey app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet site map via `js_sys::eval()`
//!   and `document::eval`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `timer`: a cancellable deferred action used by the tooltip
//! - `config`: map and page constants
//! - `components`: RSX components (map, scatter plot, detail text, etc.)

pub mod components;
pub mod config;
pub mod js_bridge;
pub mod state;
pub mod timer;
