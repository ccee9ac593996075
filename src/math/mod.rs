mod color;
mod projection;

pub use color::{unit_wave, Color};
pub use projection::orthographic;
