// Frame pacing
//
// One tick per frame at a fixed 60 Hz: drain input, step the scene once,
// draw, then wait for the next deadline. A frame that runs late resyncs
// the schedule instead of queueing up a burst of catch-up ticks.

use std::time::{Duration, Instant};

/// Target tick rate (60 ticks per second)
pub const TICK_RATE: u64 = 60;
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE);

/// How far behind schedule we tolerate before resyncing
const MAX_LAG: Duration = Duration::from_millis(100);

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Frame pacing state
pub struct FramePacer {
    /// When the next tick is due
    next_tick: Instant,

    /// Time of last tick
    last_tick_time: Instant,

    /// Time when the pacer started
    start_time: Instant,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Ticks run so far
    tick_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl FramePacer {
    /// Create a new pacer with the first tick due immediately
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self {
            next_tick: now,
            last_tick_time: now,
            start_time: now,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            tick_count: 0,
            current_fps: 0.0,
        }
    }

    /// When the event loop should wake up next
    pub fn deadline(&self) -> Instant {
        self.next_tick
    }

    /// Whether a tick is due at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    /// Start a tick if one is due; returns false when it is too early
    pub fn begin_tick(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }

        let frame_time = now.duration_since(self.last_tick_time);
        self.last_tick_time = now;
        self.tick_count += 1;

        // Store frame time for FPS calculation
        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.tick_count % 10 == 0 {
            self.update_fps();
        }

        self.next_tick += TICK_DURATION;
        if now.duration_since(self.next_tick) > MAX_LAG {
            // Stalled (window drag, breakpoint, sleep): start a fresh schedule
            self.next_tick = now + TICK_DURATION;
        }

        true
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total number of ticks run
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        // Calculate average frame time
        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        // Convert to FPS
        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new()
    }
}
