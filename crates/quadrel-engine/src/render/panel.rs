use anyhow::Result;
use wgpu::util::DeviceExt;

use super::geometry::{PANEL_INDICES, PANEL_VERTICES, PanelVertex};
use super::{RenderCtx, RenderTarget};

/// Source text for the two pipeline stages, as loaded from disk.
pub struct PanelShaders {
    pub vertex: String,
    pub fragment: String,
}

/// Wireframe panel renderer: one linked pipeline plus the fixed geometry.
pub struct PanelRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buf: wgpu::Buffer,
    index_buf: wgpu::Buffer,
    index_count: u32,
}

impl PanelRenderer {
    /// Builds the render pipeline from the two stage sources and uploads the
    /// panel geometry.
    ///
    /// Stage compile results are not inspected individually; the validation
    /// scope popped after pipeline creation is the single link-status check.
    /// A failed link returns an error carrying the driver diagnostic, and the
    /// caller must not enter the render loop.
    pub fn new(ctx: &RenderCtx<'_>, shaders: &PanelShaders) -> Result<Self> {
        let error_scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let vertex_module = ctx
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("panel vertex stage"),
                source: wgpu::ShaderSource::Wgsl(shaders.vertex.as_str().into()),
            });

        let fragment_module = ctx
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("panel fragment stage"),
                source: wgpu::ShaderSource::Wgsl(shaders.fragment.as_str().into()),
            });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("panel pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("panel pipeline"),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &vertex_module,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[PanelVertex::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &fragment_module,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Line,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });

        if let Some(err) = pollster::block_on(error_scope.pop()) {
            anyhow::bail!("shader program failed to link: {err}");
        }

        // The stage modules are link inputs only; once the pipeline exists
        // they are released and the pipeline is the sole program object.
        drop(vertex_module);
        drop(fragment_module);

        let vertex_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("panel vertex buffer"),
                contents: bytemuck::cast_slice(&PANEL_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let index_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("panel index buffer"),
                contents: bytemuck::cast_slice(&PANEL_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            });

        Ok(Self {
            pipeline,
            vertex_buf,
            index_buf,
            index_count: PANEL_INDICES.len() as u32,
        })
    }

    /// Binds the panel's pipeline and buffers and issues the single indexed
    /// draw covering every declared triangle index.
    pub fn render(&self, target: &mut RenderTarget<'_>) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("panel pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        rpass.set_index_buffer(self.index_buf.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
