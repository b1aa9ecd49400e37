//! Engine-facing contracts.
//!
//! Defines the stable interface between the runtime (platform loop) and the
//! application: one-time setup after the device exists, event inspection,
//! and per-frame drawing.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
