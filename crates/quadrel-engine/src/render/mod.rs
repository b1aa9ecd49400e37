//! GPU rendering subsystem.
//!
//! The panel renderer owns its GPU resources (one linked pipeline, one
//! vertex buffer, one index buffer); geometry is fixed at compile time and
//! uploaded exactly once, before the first frame.

mod ctx;
mod geometry;
mod panel;

pub use ctx::{RenderCtx, RenderTarget};
pub use geometry::{PANEL_INDICES, PANEL_VERTICES, PanelVertex};
pub use panel::{PanelRenderer, PanelShaders};
