use std::fmt;
use std::panic;
use std::sync::Arc;

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::monitor::MonitorHandle;
use winit::window::Window;

use crate::config::{ViewportConfig, WINDOW_TITLE};

use super::gpu_context::GpuContext;
use super::quad_renderer::QuadRenderer;

/// Fatal startup failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// The windowing or GPU subsystem could not be brought up
    SubsystemInit(String),
    /// No window, or no presentable surface for it, could be created
    WindowCreation(String),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::SubsystemInit(desc) => write!(f, "Unable to initialize subsystem: {}", desc),
            BootstrapError::WindowCreation(desc) => write!(f, "Failed to create the window: {}", desc),
        }
    }
}

impl std::error::Error for BootstrapError {}

/// Process-wide hook that reports panics through the logger
#[derive(Debug)]
pub struct ErrorHook {
    _private: (),
}

impl ErrorHook {
    pub fn install() -> Self {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            log::error!("{}", info);
            previous(info);
        }));
        Self { _private: () }
    }

    /// Restore the default panic hook
    pub fn release(self) {
        drop(panic::take_hook());
    }
}

/// Top-left position that centers a window of `window` size on a display
///
/// Negative when the window is larger than the display.
pub fn centered_position(
    display_origin: (i32, i32),
    display_size: (u32, u32),
    window_size: (u32, u32),
) -> (i32, i32) {
    let x = (display_size.0 as i64 - window_size.0 as i64) / 2;
    let y = (display_size.1 as i64 - window_size.1 as i64) / 2;
    (display_origin.0 + x as i32, display_origin.1 + y as i32)
}

/// The window together with the GPU state presenting into it
///
/// Exactly one exists while the loop runs; `shutdown` consumes it.
pub struct WindowHandle {
    renderer: QuadRenderer,
    window: Arc<Window>,
    gpu: GpuContext,
    error_hook: ErrorHook,
}

impl WindowHandle {
    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn gpu(&self) -> &GpuContext {
        &self.gpu
    }

    pub fn renderer(&self) -> &QuadRenderer {
        &self.renderer
    }

    /// Renderer and GPU context together, for drawing
    pub fn renderer_mut(&mut self) -> (&mut QuadRenderer, &GpuContext) {
        (&mut self.renderer, &self.gpu)
    }
}

/// Create the window, center it, bring up the GPU with vsync and show it
pub fn initialize(
    event_loop: &ActiveEventLoop,
    config: &ViewportConfig,
) -> Result<WindowHandle, BootstrapError> {
    let error_hook = ErrorHook::install();

    // Hidden until configured, to avoid flicker
    let attributes = Window::default_attributes()
        .with_title(WINDOW_TITLE)
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(true)
        .with_visible(false);

    let window = match event_loop.create_window(attributes) {
        Ok(window) => Arc::new(window),
        Err(e) => {
            error_hook.release();
            return Err(BootstrapError::WindowCreation(e.to_string()));
        }
    };
    log::info!("created window {:?} ({}x{})", WINDOW_TITLE, config.width, config.height);

    center_window(event_loop, &window);

    let (renderer, gpu) = match create_renderer(&window) {
        Ok(parts) => parts,
        Err(e) => {
            drop(window);
            error_hook.release();
            return Err(e);
        }
    };

    window.set_visible(true);

    Ok(WindowHandle {
        renderer,
        window,
        gpu,
        error_hook,
    })
}

/// Release everything `initialize` acquired: surface, window, GPU, error hook
pub fn shutdown(handle: WindowHandle) {
    let WindowHandle {
        renderer,
        window,
        gpu,
        error_hook,
    } = handle;

    drop(renderer);
    drop(window);
    drop(gpu);
    error_hook.release();

    log::info!("shut down");
}

fn primary_display(event_loop: &ActiveEventLoop) -> Option<MonitorHandle> {
    event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
}

fn center_window(event_loop: &ActiveEventLoop, window: &Window) {
    let Some(monitor) = primary_display(event_loop) else {
        log::warn!("no display reported, leaving window placement to the system");
        return;
    };

    // Actual size may differ from the requested one
    let window_size = window.outer_size();
    let display_size = monitor.size();
    let display_origin = monitor.position();

    let (x, y) = centered_position(
        (display_origin.x, display_origin.y),
        (display_size.width, display_size.height),
        (window_size.width, window_size.height),
    );
    window.set_outer_position(PhysicalPosition::new(x, y));
}

fn create_renderer(window: &Arc<Window>) -> Result<(QuadRenderer, GpuContext), BootstrapError> {
    let instance = GpuContext::create_instance();
    let surface = instance
        .create_surface(window.clone())
        .map_err(|e| BootstrapError::WindowCreation(e.to_string()))?;

    let gpu = pollster::block_on(GpuContext::new_with_surface(instance, &surface))
        .map_err(BootstrapError::SubsystemInit)?;

    let size = window.inner_size();
    let renderer = QuadRenderer::new(&gpu, surface, size.width, size.height);
    Ok((renderer, gpu))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_on_primary_display() {
        assert_eq!(centered_position((0, 0), (1920, 1080), (1024, 768)), (448, 156));
    }

    #[test]
    fn test_centered_respects_display_origin() {
        assert_eq!(centered_position((1920, 0), (1920, 1080), (1024, 768)), (2368, 156));
    }

    #[test]
    fn test_centered_truncates_odd_remainder() {
        assert_eq!(centered_position((0, 0), (101, 101), (100, 100)), (0, 0));
    }

    #[test]
    fn test_window_larger_than_display() {
        assert_eq!(centered_position((0, 0), (800, 600), (1024, 768)), (-112, -84));
    }

    #[test]
    fn test_error_messages() {
        let e = BootstrapError::SubsystemInit("no adapter".into());
        assert_eq!(e.to_string(), "Unable to initialize subsystem: no adapter");

        let e = BootstrapError::WindowCreation("no display".into());
        assert_eq!(e.to_string(), "Failed to create the window: no display");
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<BootstrapError>();
    }
}
