use std::collections::VecDeque;

/// Keys the loop distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Other,
}

/// Key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

/// Input record queued by the window and drained once per iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window system asked to close
    CloseRequested,
    Key { key: Key, action: KeyAction },
}

/// Key that closes the window when released
pub const EXIT_KEY: Key = Key::Escape;

/// FIFO of pending input events
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take every pending event in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }
}

/// Render loop state. `Closing` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closing,
}

/// Owns the close flag and decides, once per iteration, whether to draw
#[derive(Debug, Clone)]
pub struct Lifecycle {
    state: LoopState,
    queue: EventQueue,
    exit_key: Key,
    frames: u64,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::with_exit_key(EXIT_KEY)
    }

    pub fn with_exit_key(exit_key: Key) -> Self {
        Self {
            state: LoopState::Running,
            queue: EventQueue::new(),
            exit_key,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Queue an event. Ignored once closing.
    pub fn push(&mut self, event: InputEvent) {
        if self.is_running() {
            self.queue.push(event);
        }
    }

    /// Drain the queue and apply any close request
    pub fn poll(&mut self) -> LoopState {
        let exit_key = self.exit_key;
        let close = self.queue.drain().fold(false, |close, event| {
            close
                || match event {
                    InputEvent::CloseRequested => true,
                    InputEvent::Key { key, action } => key == exit_key && action == KeyAction::Release,
                }
        });

        if close && self.state == LoopState::Running {
            log::info!("close requested after {} frames", self.frames);
            self.state = LoopState::Closing;
        }
        self.state
    }

    /// Run one iteration: poll, then draw only while still running
    pub fn frame<F: FnOnce()>(&mut self, draw: F) -> LoopState {
        if self.poll() == LoopState::Running {
            draw();
            self.frames += 1;
        }
        self.state
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
