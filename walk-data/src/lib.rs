//! Chart-side processing for walking-survey observations.
//!
//! Everything here is pure and independent of the UI toolkit:
//! - `scale` / `color` / `ticks`: mapping domain values onto the plot surface
//! - `plot`: plot configuration and mark/axis layout
//! - `summary`: derived statistics and prose for a selected site
//! - `selection` / `hover`: the UI state machines driven by map and mark events

pub mod color;
pub mod hover;
pub mod plot;
pub mod scale;
pub mod selection;
pub mod summary;
pub mod ticks;
