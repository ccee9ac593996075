use glam::Vec2;

use crate::config::{ViewportConfig, GRID_STEP};
use crate::math::{unit_wave, Color};

use super::clock::FrameClock;

/// Phase offsets of the background color channels, in radians
const BACKGROUND_PHASES: [f64; 3] = [0.0, 2.0, 4.0];

/// Amplitude of the circular jitter around each grid point
const JITTER_RADIUS: f64 = 20.0;

/// Smallest quad edge; edges oscillate between this and twice this
const MIN_EDGE: f64 = 30.0;

/// Color slowly cycling through the three phase-shifted sine waves
pub fn background_color(clock: FrameClock) -> Color {
    let t = clock.ticks as f64 / 100.0;
    let [r, g, b] = BACKGROUND_PHASES.map(|phase| unit_wave(t + phase));
    Color::new(r, g, b)
}

/// One animated quad of the grid, valid for a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Grid point
    pub x: f32,
    pub y: f32,
    /// Animation phase key
    pub z: i64,
    pub color: Color,
    /// Jitter offset
    pub i: f32,
    pub j: f32,
    /// Quad size
    pub w: f32,
    pub h: f32,
}

impl Cell {
    /// Derive the cell at grid point (x, y)
    pub fn at(x: f32, y: f32, clock: FrameClock, width: u32) -> Self {
        let z = (x * width as f32 + y) as i64;
        let phase = (clock.ticks + z) as f64;

        let color = Color::new(
            unit_wave(phase / 100.0),
            unit_wave(z as f64 / 100.0),
            unit_wave(clock.ticks as f64 / 100.0),
        );

        let i = ((phase / 50.0).sin() * JITTER_RADIUS) as f32;
        let j = ((phase / 50.0).cos() * JITTER_RADIUS) as f32;

        let w = (MIN_EDGE + MIN_EDGE * ((phase / 100.0).cos() + 1.0) / 2.0) as f32;
        let h = (MIN_EDGE + MIN_EDGE * ((phase / 100.0).sin() + 1.0) / 2.0) as f32;

        Self { x, y, z, color, i, j, w, h }
    }

    /// Translation applied before the quad is drawn
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x - self.w / 2.0, self.y - self.h / 2.0)
    }

    /// Quad corners relative to `origin`, in drawing order
    pub fn corners(&self) -> [Vec2; 4] {
        let (i, j, w, h) = (self.i, self.j, self.w, self.h);
        [
            Vec2::new(i, j),
            Vec2::new(i, h + j),
            Vec2::new(w + i, h + j),
            Vec2::new(w + i, j),
        ]
    }
}

/// Iterates the grid column by column, yielding one `Cell` per grid point
#[derive(Debug, Clone)]
pub struct Grid {
    clock: FrameClock,
    width: u32,
    bounds: (f32, f32),
    x: f32,
    y: f32,
}

impl Grid {
    pub fn new(config: &ViewportConfig, clock: FrameClock) -> Self {
        Self {
            clock,
            width: config.width,
            bounds: config.grid_bounds(),
            x: 0.0,
            y: 0.0,
        }
    }
}

impl Iterator for Grid {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.y >= self.bounds.1 {
            self.y = 0.0;
            self.x += GRID_STEP;
        }
        if self.x >= self.bounds.0 {
            return None;
        }

        let cell = Cell::at(self.x, self.y, self.clock, self.width);
        self.y += GRID_STEP;
        Some(cell)
    }
}
