//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single window, and wires them to the
//! GPU layer. The loop blocks on the next event; each delivered event wakes
//! exactly one redraw.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
