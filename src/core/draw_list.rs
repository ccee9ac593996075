use glam::{Mat4, Vec2, Vec3};

use crate::math::Color;
use crate::traits::ImmediateRenderer;

/// Vertex layout shared with the quad shader
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Viewport rectangle in pixels, origin bottom-left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// CPU-side recording of one frame's immediate-mode calls
///
/// Model transforms are applied while recording, so the vertices end up in
/// viewport coordinates and only the projection is left to the GPU.
#[derive(Debug, Clone)]
pub struct DrawList {
    clear: Option<Color>,
    viewport: Option<Viewport>,
    projection: Mat4,
    model: Mat4,
    stack: Vec<Mat4>,
    color: Color,
    vertices: Vec<Vertex>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            clear: None,
            viewport: None,
            projection: Mat4::IDENTITY,
            model: Mat4::IDENTITY,
            stack: Vec::new(),
            color: Color::default(),
            vertices: Vec::new(),
        }
    }

    /// Forget the previous frame, keeping allocations
    pub fn reset(&mut self) {
        self.clear = None;
        self.viewport = None;
        self.projection = Mat4::IDENTITY;
        self.model = Mat4::IDENTITY;
        self.stack.clear();
        self.color = Color::default();
        self.vertices.clear();
    }

    pub fn clear_color(&self) -> Option<Color> {
        self.clear
    }

    pub fn viewport_rect(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of quads recorded so far
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 6
    }

    /// Depth of the saved-transform stack
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    fn emit(&mut self, corner: Vec2) {
        let position = self.model.transform_point3(corner.extend(0.0));
        self.vertices.push(Vertex {
            position: [position.x, position.y],
            color: self.color.to_array(),
        });
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl ImmediateRenderer for DrawList {
    fn clear(&mut self, color: Color) {
        self.clear = Some(color);
        self.vertices.clear();
    }

    fn viewport(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.viewport = Some(Viewport { x, y, width, height });
    }

    fn set_projection(&mut self, projection: Mat4) {
        self.projection = projection;
    }

    fn push_matrix(&mut self) {
        self.stack.push(self.model);
    }

    fn pop_matrix(&mut self) {
        match self.stack.pop() {
            Some(model) => self.model = model,
            None => log::warn!("pop_matrix on empty transform stack ignored"),
        }
    }

    fn translate(&mut self, offset: Vec3) {
        self.model *= Mat4::from_translation(offset);
    }

    fn color(&mut self, color: Color) {
        self.color = color;
    }

    fn quad(&mut self, corners: [Vec2; 4]) {
        let [a, b, c, d] = corners;
        for corner in [a, b, c, a, c, d] {
            self.emit(corner);
        }
    }
}
