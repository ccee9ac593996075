// config.rs - Fixed viewport configuration

/// Window title
pub const WINDOW_TITLE: &str = "Cake!";

/// Default window width in pixels
pub const WINDOW_WIDTH: u32 = 1024;

/// Default window height in pixels
pub const WINDOW_HEIGHT: u32 = 768;

/// Distance between neighbouring grid cells, on both axes
pub const GRID_STEP: f32 = 64.0;

/// Viewport dimensions, fixed at startup and shared by the bootstrapper and the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl ViewportConfig {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Upper bounds of the quad grid as (x, y).
    ///
    /// Both axes are bounded by the width. Rows past `height` land outside
    /// the projection and are clipped.
    pub fn grid_bounds(&self) -> (f32, f32) {
        (self.width as f32, self.width as f32)
    }

    /// Number of grid cells along each axis
    pub fn cells_per_axis(&self) -> u32 {
        (self.width as f32 / GRID_STEP).ceil() as u32
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}
