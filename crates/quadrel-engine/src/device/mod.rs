//! GPU device + surface management.
//!
//! Responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue against a window
//! - negotiating and configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering
//!
//! Every negotiation failure propagates as an error; there is no degraded
//! mode and no partial bring-up.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
