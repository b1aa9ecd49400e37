use anyhow::{Context, Result};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use quadrel_engine::assets::ShaderRoot;
use quadrel_engine::core::{App, AppControl, FrameCtx};
use quadrel_engine::device::GpuInit;
use quadrel_engine::logging::{LoggingConfig, init_logging};
use quadrel_engine::render::{PanelRenderer, PanelShaders, RenderCtx};
use quadrel_engine::window::{Runtime, RuntimeConfig};

/// Shader sources live under the working directory at this fixed subpath.
const SHADER_DIR: &str = "assets/shaders";
const VERTEX_STAGE: &str = "panel_vs.wgsl";
const FRAGMENT_STAGE: &str = "panel_fs.wgsl";

/// Fixed per-frame background color.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    a: 1.0,
};

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(err) = run() {
        log::error!("fatal: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let root = ShaderRoot::from_cwd(SHADER_DIR)
        .context("failed to resolve the shader resource root")?;
    log::info!("loading stage sources from {}", root.path().display());

    let shaders = PanelShaders {
        vertex: root.load_source(VERTEX_STAGE)?,
        fragment: root.load_source(FRAGMENT_STAGE)?,
    };

    let config = RuntimeConfig {
        title: "quadrel".to_string(),
        initial_size: winit::dpi::LogicalSize::new(512.0, 512.0),
    };

    // Wireframe rasterization is a hard requirement of this viewer.
    let gpu_init = GpuInit {
        required_features: wgpu::Features::POLYGON_MODE_LINE,
        ..GpuInit::default()
    };

    Runtime::run(config, gpu_init, Viewer::new(shaders))
}

/// The viewer app: links the panel pipeline once, then redraws it on every
/// delivered event until close or escape.
struct Viewer {
    shaders: PanelShaders,
    renderer: Option<PanelRenderer>,
}

impl Viewer {
    fn new(shaders: PanelShaders) -> Self {
        Self {
            shaders,
            renderer: None,
        }
    }
}

impl App for Viewer {
    fn on_ready(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        self.renderer = Some(PanelRenderer::new(ctx, &self.shaders)?);
        Ok(())
    }

    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        if is_escape_press(event) {
            AppControl::Exit
        } else {
            AppControl::Continue
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(renderer) = self.renderer.as_ref() else {
            return AppControl::Continue;
        };

        ctx.render(CLEAR_COLOR, |_rctx, target| renderer.render(target))
    }
}

fn is_escape_press(event: &WindowEvent) -> bool {
    let WindowEvent::KeyboardInput { event, .. } = event else {
        return false;
    };

    event.state == ElementState::Pressed
        && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
}
