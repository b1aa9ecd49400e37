use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::render::RenderCtx;

/// Window/runtime configuration, resolved once in `main`.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "quadrel".to_string(),
            initial_size: LogicalSize::new(512.0, 512.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs the blocking event loop until quit, escape, or a fatal error.
    ///
    /// Bring-up failures (event loop, window, GPU, app setup) and loop
    /// errors all surface here as the returned `Result`; the caller decides
    /// the exit code.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to start the windowing subsystem")?;
        let mut state = RuntimeState::new(config, gpu_init, app);

        let loop_result = event_loop
            .run_app(&mut state)
            .context("event loop terminated with error");

        // A recorded fatal error takes precedence over the loop status.
        if let Some(err) = state.fatal.take() {
            return Err(err);
        }
        loop_result?;

        // `state` drops before `event_loop`: GPU context, then window, then
        // the windowing subsystem.
        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct RuntimeState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    exit_requested: bool,
    fatal: Option<anyhow::Error>,
}

impl<A> RuntimeState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            exit_requested: false,
            fatal: None,
        }
    }

    /// Creates the window, negotiates the GPU context, and runs the app's
    /// one-time setup. Called before any frame is rendered.
    fn bring_up(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(false);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        center_window(&window, event_loop);

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("failed to initialize GPU context")?;

        // One-time setup: shader link + geometry upload. A failure here must
        // keep the render loop from ever running.
        let app = &mut self.app;
        entry.with_gpu(|gpu| {
            let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format());
            app.on_ready(&ctx)
        })?;

        self.entry = Some(entry);
        Ok(())
    }
}

impl<A> ApplicationHandler for RuntimeState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(err) = self.bring_up(event_loop) {
            self.fatal = Some(err);
            event_loop.exit();
            return;
        }

        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Suspend until the next event; redraws are requested per event.
        // Termination is decided after the final frame renders, so a pending
        // close/escape still gets its one last redraw.
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        match &event {
            // Quit request: the frame in flight is still drawn once more.
            WindowEvent::CloseRequested => {
                self.exit_requested = true;
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => {
                let app = &mut self.app;
                let mut control = AppControl::Continue;

                entry.with_mut(|fields| {
                    let mut ctx = FrameCtx {
                        window: WindowCtx {
                            id: window_id,
                            window: fields.window,
                        },
                        gpu: fields.gpu,
                    };
                    control = app.on_frame(&mut ctx);
                });

                if control == AppControl::Exit {
                    self.exit_requested = true;
                }
                if self.exit_requested {
                    event_loop.exit();
                }
            }

            // Everything else goes to the app (escape lives there), and each
            // delivered event wakes exactly one redraw.
            _ => {
                if self.app.on_window_event(&event) == AppControl::Exit {
                    self.exit_requested = true;
                }
                entry.with_window(|w| w.request_redraw());
            }
        }
    }
}

/// Best-effort centered placement on the primary monitor.
///
/// Platforms that report no primary monitor keep default placement.
fn center_window(window: &Window, event_loop: &ActiveEventLoop) {
    let Some(monitor) = event_loop.primary_monitor() else {
        return;
    };

    let monitor_pos = monitor.position();
    let monitor_size = monitor.size();
    let outer = window.outer_size();

    let x = monitor_pos.x + (monitor_size.width.saturating_sub(outer.width) / 2) as i32;
    let y = monitor_pos.y + (monitor_size.height.saturating_sub(outer.height) / 2) as i32;

    window.set_outer_position(PhysicalPosition::new(x, y));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_a_fixed_square_window() {
        let config = RuntimeConfig::default();
        assert_eq!(config.initial_size, LogicalSize::new(512.0, 512.0));
        assert_eq!(config.title, "quadrel");
    }
}
