//! Workspace umbrella crate: re-exports `globetrotter-core` so the demos
//! under `demos/` can be run from the repository root.

pub use globetrotter_core::*;
