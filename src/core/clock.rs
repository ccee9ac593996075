use std::cell::Cell;
use std::time::Instant;

/// Milliseconds per animation tick
pub const MILLIS_PER_TICK: i64 = 10;

/// Source of wall-clock time in milliseconds since the Unix epoch
pub trait TimeSource {
    fn now_millis(&self) -> i64;
}

/// Reads the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Clock frozen at a given instant, settable between frames
#[derive(Debug, Clone, Default)]
pub struct FixedClock {
    millis: Cell<i64>,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self { millis: Cell::new(millis) }
    }

    pub fn set(&self, millis: i64) {
        self.millis.set(millis);
    }

    pub fn advance(&self, millis: i64) {
        self.millis.set(self.millis.get() + millis);
    }
}

impl TimeSource for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.get()
    }
}

/// Coarse time sample taken once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameClock {
    pub ticks: i64,
}

impl FrameClock {
    pub const fn from_ticks(ticks: i64) -> Self {
        Self { ticks }
    }

    /// Sample the source and divide into ticks
    pub fn sample(source: &dyn TimeSource) -> Self {
        Self::from_ticks(source.now_millis() / MILLIS_PER_TICK)
    }
}

/// Minimal delta clock
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Averages frame rate over a fixed reporting interval
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: f32,
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Record one frame. Returns the new average once per interval.
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed >= self.interval {
            self.fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
