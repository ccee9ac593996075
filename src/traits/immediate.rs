use glam::{Mat4, Vec2, Vec3};

use crate::math::Color;

/// Immediate-mode 2D drawing target
///
/// Mirrors the fixed-function calls a frame is built from: state is set,
/// then primitives pick up whatever transform and color are current when
/// they are issued.
pub trait ImmediateRenderer {
    /// Clear the frame to a color
    fn clear(&mut self, color: Color);

    /// Pixel rectangle the projection maps onto, origin bottom-left
    fn viewport(&mut self, x: u32, y: u32, width: u32, height: u32);

    /// Replace the projection matrix
    fn set_projection(&mut self, projection: Mat4);

    /// Save the current model transform
    fn push_matrix(&mut self);

    /// Restore the most recently saved model transform
    fn pop_matrix(&mut self);

    /// Post-multiply the model transform by a translation
    fn translate(&mut self, offset: Vec3);

    /// Set the flat color for subsequent primitives
    fn color(&mut self, color: Color);

    /// Draw a filled quad from four corners in winding order
    fn quad(&mut self, corners: [Vec2; 4]);
}
