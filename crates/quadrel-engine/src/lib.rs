//! Quadrel engine crate.
//!
//! Platform + GPU runtime pieces for the viewer binary: device bring-up,
//! window runtime, shader/geometry rendering, resource loading, logging.

pub mod assets;
pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod window;
