use crate::config::ViewportConfig;
use crate::math::orthographic;
use crate::traits::ImmediateRenderer;

use super::clock::{FrameClock, TimeSource};
use super::layout::{background_color, Grid};

/// Draw one frame of the animated grid into `target`
///
/// Only the time sample varies between calls; the same clock reading and
/// config always produce the same calls.
pub fn render_frame(
    target: &mut dyn ImmediateRenderer,
    config: &ViewportConfig,
    time: &dyn TimeSource,
) {
    draw_frame(target, config, FrameClock::sample(time));
}

/// Draw one frame for an already sampled clock
pub fn draw_frame(
    target: &mut dyn ImmediateRenderer,
    config: &ViewportConfig,
    clock: FrameClock,
) {
    target.clear(background_color(clock));

    target.viewport(0, 0, config.width, config.height);
    target.set_projection(orthographic(config.width as f32, config.height as f32));

    for cell in Grid::new(config, clock) {
        target.push_matrix();
        target.translate(cell.origin().extend(0.0));
        target.color(cell.color);
        target.quad(cell.corners());
        target.pop_matrix();
    }
}
