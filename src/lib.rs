pub mod app;
pub mod config;
pub mod core;
pub mod math;
pub mod traits;

pub use app::run;
pub use config::ViewportConfig;
