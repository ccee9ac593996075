/// Map a sine sample from [-1, 1] to [0, 1]
#[inline]
pub fn unit_wave(phase: f64) -> f32 {
    ((phase.sin() + 1.0) / 2.0) as f32
}

/// Flat RGB color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Clear value for a render pass, with the given alpha
    pub fn to_wgpu(self, alpha: f64) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: alpha,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_unit_wave_extremes() {
        assert!((unit_wave(FRAC_PI_2) - 1.0).abs() < 1e-6);
        assert!(unit_wave(-FRAC_PI_2).abs() < 1e-6);
        assert!((unit_wave(0.0) - 0.5).abs() < 1e-6);
        assert!((unit_wave(PI) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_unit_wave_stays_in_range() {
        for step in -2000..2000 {
            let v = unit_wave(step as f64 * 0.37);
            assert!((0.0..=1.0).contains(&v), "{} out of range", v);
        }
    }

    #[test]
    fn test_color_to_wgpu() {
        let c = Color::new(0.25, 0.5, 1.0).to_wgpu(0.0);
        assert_eq!(c.r, 0.25);
        assert_eq!(c.g, 0.5);
        assert_eq!(c.b, 1.0);
        assert_eq!(c.a, 0.0);
    }
}
