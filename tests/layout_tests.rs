use cake::core::{background_color, Cell, FrameClock, Grid};
use cake::ViewportConfig;

const EPSILON: f32 = 1e-5;

fn ticks_samples() -> impl Iterator<Item = i64> {
    (-50..50)
        .map(|k| k * 7_919)
        .chain([0, 1, 157, 16_000_000_000, i32::MAX as i64])
}

// ============================================================================
// Color range
// ============================================================================

#[test]
fn test_background_channels_in_unit_range() {
    for ticks in ticks_samples() {
        let c = background_color(FrameClock::from_ticks(ticks));
        for channel in [c.r, c.g, c.b] {
            assert!((0.0..=1.0).contains(&channel), "channel {} at t={}", channel, ticks);
        }
    }
}

#[test]
fn test_cell_channels_in_unit_range() {
    let config = ViewportConfig::new(1024, 768);
    for ticks in ticks_samples() {
        for cell in Grid::new(&config, FrameClock::from_ticks(ticks)) {
            let c = cell.color;
            for channel in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&channel), "channel {} in {:?}", channel, cell);
            }
        }
    }
}

// ============================================================================
// Grid shape
// ============================================================================

#[test]
fn test_cell_count_is_square_of_width_steps() {
    for (width, height) in [(128, 768), (1024, 768), (100, 10), (65, 1000), (64, 64), (1, 1)] {
        let config = ViewportConfig::new(width, height);
        let per_axis = (width as f64 / 64.0).ceil() as usize;
        let count = Grid::new(&config, FrameClock::from_ticks(42)).count();
        assert_eq!(count, per_axis * per_axis, "width {}", width);
    }
}

#[test]
fn test_default_viewport_has_256_cells() {
    let config = ViewportConfig::default();
    assert_eq!(Grid::new(&config, FrameClock::from_ticks(0)).count(), 256);
}

#[test]
fn test_rows_extend_past_height() {
    // Vertical extent follows the width, not the height
    let config = ViewportConfig::new(1024, 768);
    let max_y = Grid::new(&config, FrameClock::from_ticks(0))
        .map(|c| c.y)
        .fold(0.0f32, f32::max);
    assert_eq!(max_y, 960.0);
}

#[test]
fn test_z_depends_only_on_position() {
    let config = ViewportConfig::new(256, 256);
    let a: Vec<_> = Grid::new(&config, FrameClock::from_ticks(0)).map(|c| c.z).collect();
    let b: Vec<_> = Grid::new(&config, FrameClock::from_ticks(99_999)).map(|c| c.z).collect();
    assert_eq!(a, b);

    for cell in Grid::new(&config, FrameClock::from_ticks(3)) {
        assert_eq!(cell.z, (cell.x * 256.0 + cell.y) as i64);
    }
}

// ============================================================================
// Size and jitter bounds
// ============================================================================

#[test]
fn test_quad_size_within_bounds() {
    let config = ViewportConfig::new(1024, 768);
    for ticks in ticks_samples() {
        for cell in Grid::new(&config, FrameClock::from_ticks(ticks)) {
            assert!((30.0..=60.0).contains(&cell.w), "w {} in {:?}", cell.w, cell);
            assert!((30.0..=60.0).contains(&cell.h), "h {} in {:?}", cell.h, cell);
        }
    }
}

#[test]
fn test_jitter_on_circle_of_radius_twenty() {
    let config = ViewportConfig::new(512, 512);
    for cell in Grid::new(&config, FrameClock::from_ticks(1_234)) {
        let radius = (cell.i * cell.i + cell.j * cell.j).sqrt();
        assert!((radius - 20.0).abs() < 1e-3, "radius {}", radius);
    }
}

// ============================================================================
// Known values
// ============================================================================

#[test]
fn test_first_cell_at_time_zero() {
    let cell = Cell::at(0.0, 0.0, FrameClock::from_ticks(0), 128);

    assert_eq!(cell.z, 0);
    assert!(cell.i.abs() < EPSILON);
    assert!((cell.j - 20.0).abs() < EPSILON);
    assert!((cell.w - 60.0).abs() < EPSILON);
    // 30 + 30 * (sin(0) + 1) / 2
    assert!((cell.h - 45.0).abs() < EPSILON);

    assert!((cell.color.r - 0.5).abs() < EPSILON);
    assert!((cell.color.g - 0.5).abs() < EPSILON);
    assert!((cell.color.b - 0.5).abs() < EPSILON);
}

#[test]
fn test_second_column_key_and_derivations() {
    let config = ViewportConfig::new(128, 768);
    let cell = Grid::new(&config, FrameClock::from_ticks(0))
        .find(|c| c.x == 64.0 && c.y == 0.0)
        .expect("cell (64, 0)");

    assert_eq!(cell.z, 8192);

    let z = 8192.0f64;
    let wave = |p: f64| ((p.sin() + 1.0) / 2.0) as f32;
    assert!((cell.color.r - wave(z / 100.0)).abs() < EPSILON);
    assert!((cell.color.g - wave(z / 100.0)).abs() < EPSILON);
    assert!((cell.color.b - 0.5).abs() < EPSILON);
    assert!((cell.i - (20.0 * (z / 50.0).sin()) as f32).abs() < EPSILON);
    assert!((cell.j - (20.0 * (z / 50.0).cos()) as f32).abs() < EPSILON);
    assert!((cell.w - (30.0 + 30.0 * ((z / 100.0).cos() + 1.0) / 2.0) as f32).abs() < EPSILON);
    assert!((cell.h - (30.0 + 30.0 * ((z / 100.0).sin() + 1.0) / 2.0) as f32).abs() < EPSILON);
}

#[test]
fn test_same_inputs_same_cells() {
    let config = ViewportConfig::new(1024, 768);
    let clock = FrameClock::from_ticks(170_000_000_000);
    let a: Vec<Cell> = Grid::new(&config, clock).collect();
    let b: Vec<Cell> = Grid::new(&config, clock).collect();
    assert_eq!(a, b);
}
