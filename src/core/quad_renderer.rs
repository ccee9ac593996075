use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;
use wgpu::{BindGroup, Buffer, Device, RenderPipeline, Surface, SurfaceConfiguration};

use crate::math::Color;

use super::draw_list::{DrawList, Vertex, Viewport};
use super::gpu_context::GpuContext;

/// Vertices the buffer is first sized for: one 1024-wide frame of quads
const INITIAL_VERTEX_CAPACITY: usize = 16 * 16 * 6;

/// Viewport in surface coordinates (origin top-left), ready for `set_viewport`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceViewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Applied after the projection so clipped viewports keep a 1:1 pixel scale
    pub correction: Mat4,
}

/// Fit a bottom-left anchored viewport inside a surface.
///
/// The part of the viewport that falls outside the surface is cut off rather
/// than squeezed in. Returns `None` when nothing of it is visible.
pub fn fit_viewport(
    viewport: Viewport,
    surface_width: u32,
    surface_height: u32,
) -> Option<SurfaceViewport> {
    let width = viewport.width.min(surface_width.saturating_sub(viewport.x));
    let height = viewport.height.min(surface_height.saturating_sub(viewport.y));
    if width == 0 || height == 0 {
        return None;
    }

    let sx = viewport.width as f32 / width as f32;
    let sy = viewport.height as f32 / height as f32;
    let correction = Mat4::from_translation(Vec3::new(-1.0, -1.0, 0.0))
        * Mat4::from_scale(Vec3::new(sx, sy, 1.0))
        * Mat4::from_translation(Vec3::new(1.0, 1.0, 0.0));

    Some(SurfaceViewport {
        x: viewport.x as f32,
        y: (surface_height - viewport.y - height) as f32,
        width: width as f32,
        height: height as f32,
        correction,
    })
}

/// Uploads a recorded `DrawList` and presents it on the window surface
pub struct QuadRenderer {
    surface: Surface<'static>,
    surface_config: SurfaceConfiguration,
    pipeline: RenderPipeline,
    projection_buffer: Buffer,
    bind_group: BindGroup,
    vertex_buffer: Buffer,
    vertex_capacity: usize,
}

impl QuadRenderer {
    /// Configure `surface` for vsync'd presentation and build the quad pipeline
    pub fn new(gpu: &GpuContext, surface: Surface<'static>, width: u32, height: u32) -> Self {
        let surface_config = Self::create_surface_config(gpu, &surface, width, height);
        surface.configure(gpu.device(), &surface_config);

        let projection_buffer = gpu.device().create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Projection Buffer"),
            contents: bytemuck::cast_slice(&Mat4::IDENTITY.to_cols_array()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let (pipeline, bind_group) =
            Self::create_pipeline(gpu.device(), &projection_buffer, surface_config.format);

        let vertex_buffer = Self::create_vertex_buffer(gpu.device(), INITIAL_VERTEX_CAPACITY);

        Self {
            surface,
            surface_config,
            pipeline,
            projection_buffer,
            bind_group,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
        }
    }

    /// Reconfigure the surface after the window changed size
    pub fn resize(&mut self, gpu: &GpuContext, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(gpu.device(), &self.surface_config);
        log::debug!("surface reconfigured to {}x{}", width, height);
    }

    /// Reconfigure with the current size, after the surface was lost
    pub fn reconfigure(&mut self, gpu: &GpuContext) {
        self.surface.configure(gpu.device(), &self.surface_config);
    }

    /// Get current surface dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }

    /// Draw the list into the next surface texture.
    ///
    /// Call `present` on the returned texture once the window is ready.
    pub fn draw(
        &mut self,
        gpu: &GpuContext,
        list: &DrawList,
    ) -> std::result::Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        let vertices = list.vertices();
        self.upload_vertices(gpu, vertices);

        let (width, height) = self.dimensions();
        let viewport = list
            .viewport_rect()
            .unwrap_or(Viewport { x: 0, y: 0, width, height });
        let fitted = fit_viewport(viewport, width, height);

        if let Some(fitted) = &fitted {
            let projection = fitted.correction * list.projection();
            gpu.queue().write_buffer(
                &self.projection_buffer,
                0,
                bytemuck::cast_slice(&projection.to_cols_array()),
            );
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Quad Encoder"),
            });

        {
            let clear = list.clear_color().unwrap_or(Color::BLACK);
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Quad Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear.to_wgpu(0.0)),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let (Some(fitted), false) = (fitted, vertices.is_empty()) {
                render_pass.set_viewport(fitted.x, fitted.y, fitted.width, fitted.height, 0.0, 1.0);
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_bind_group(0, &self.bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.draw(0..vertices.len() as u32, 0..1);
            }
        }

        gpu.queue().submit(std::iter::once(encoder.finish()));
        Ok(output)
    }

    fn upload_vertices(&mut self, gpu: &GpuContext, vertices: &[Vertex]) {
        if vertices.len() > self.vertex_capacity {
            self.vertex_capacity = vertices.len().next_power_of_two();
            self.vertex_buffer = Self::create_vertex_buffer(gpu.device(), self.vertex_capacity);
            log::debug!("vertex buffer grown to {} vertices", self.vertex_capacity);
        }
        if !vertices.is_empty() {
            gpu.queue()
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(vertices));
        }
    }

    fn create_surface_config(
        gpu: &GpuContext,
        surface: &Surface,
        width: u32,
        height: u32,
    ) -> SurfaceConfiguration {
        let surface_caps = surface.get_capabilities(gpu.adapter());

        // Linear target so flat colors land on screen unconverted
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let alpha_mode = if surface_caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::Opaque)
        {
            wgpu::CompositeAlphaMode::Opaque
        } else {
            surface_caps.alpha_modes[0]
        };

        SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            // Swap interval 1
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    fn create_vertex_buffer(device: &Device, capacity: usize) -> Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Quad Vertex Buffer"),
            size: (capacity * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn create_pipeline(
        device: &Device,
        projection_buffer: &Buffer,
        surface_format: wgpu::TextureFormat,
    ) -> (RenderPipeline, BindGroup) {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Quad Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../quad.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Projection Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<[f32; 16]>() as u64),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Projection Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: projection_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Quad Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Quad Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // Jittered quads may wind either way
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        (pipeline, bind_group)
    }
}
