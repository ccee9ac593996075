use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::WindowId,
};

use crate::config::ViewportConfig;
use crate::core::bootstrap::{self, BootstrapError, WindowHandle};
use crate::core::clock::{Clock, FpsCounter, SystemClock, TimeSource};
use crate::core::draw_list::DrawList;
use crate::core::frame::render_frame;
use crate::core::input_adapter;
use crate::core::lifecycle::{Lifecycle, LoopState};

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Event-loop driver: bootstraps on resume, draws while running, tears down on close
pub struct App {
    config: ViewportConfig,
    time: Box<dyn TimeSource>,
    lifecycle: Lifecycle,
    draw_list: DrawList,
    handle: Option<WindowHandle>,
    error: Option<BootstrapError>,
    clock: Clock,
    fps: FpsCounter,
}

impl App {
    pub fn new(config: ViewportConfig) -> Self {
        Self::with_time_source(config, Box::new(SystemClock))
    }

    pub fn with_time_source(config: ViewportConfig, time: Box<dyn TimeSource>) -> Self {
        Self {
            config,
            time,
            lifecycle: Lifecycle::new(),
            draw_list: DrawList::new(),
            handle: None,
            error: None,
            clock: Clock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
        }
    }

    /// Fatal error that stopped the loop, if any
    pub fn take_error(&mut self) -> Option<BootstrapError> {
        self.error.take()
    }

    /// Tear down once the lifecycle has moved to closing
    fn close(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(handle) = self.handle.take() {
            bootstrap::shutdown(handle);
        }
        event_loop.exit();
    }

    fn redraw(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };

        let delta = self.clock.tick();
        if let Some(fps) = self.fps.record(delta) {
            log::debug!("FPS: {:.1}", fps);
        }

        let (config, time, draw_list) = (&self.config, self.time.as_ref(), &mut self.draw_list);
        self.lifecycle.frame(|| {
            draw_list.reset();
            render_frame(draw_list, config, time);
        });
        if !self.lifecycle.is_running() {
            return;
        }

        let (renderer, gpu) = handle.renderer_mut();
        match renderer.draw(gpu, &self.draw_list) {
            Ok(output) => {
                handle.window().pre_present_notify();
                output.present();
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost, reconfiguring");
                let (renderer, gpu) = handle.renderer_mut();
                renderer.reconfigure(gpu);
            }
            Err(e) => log::warn!("skipped frame: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.handle.is_some() || !self.lifecycle.is_running() {
            return;
        }

        match bootstrap::initialize(event_loop, &self.config) {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => {
                log::error!("{}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(input) = input_adapter::translate(&event) {
            self.lifecycle.push(input);
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(handle) = self.handle.as_mut() {
                    let (renderer, gpu) = handle.renderer_mut();
                    renderer.resize(gpu, size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                if !self.lifecycle.is_running() {
                    self.close(event_loop);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.lifecycle.poll() == LoopState::Closing {
            self.close(event_loop);
            return;
        }
        if let Some(handle) = &self.handle {
            handle.window().request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(handle) = self.handle.take() {
            bootstrap::shutdown(handle);
        }
    }
}

/// Run the demo until the window is closed
pub fn run(config: ViewportConfig) -> Result<(), BootstrapError> {
    let event_loop = EventLoop::new().map_err(|e| BootstrapError::SubsystemInit(e.to_string()))?;

    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .map_err(|e| BootstrapError::SubsystemInit(e.to_string()))?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
