//! Frame timing and the fixed simulation tick.
//!
//! Rendering runs at whatever rate the display refreshes; the simulation
//! advances in whole ticks of fixed length. [`Time`] measures frames and
//! [`FixedStep`] converts the measured wall time into a number of ticks.
//!
//! # Example
//!
//! ```ignore
//! let mut time = Time::new();
//! let mut step = FixedStep::new(60.0, 5);
//!
//! // Once per rendered frame:
//! let delta = time.update();
//! for _ in 0..step.ticks_for(delta) {
//!     sim.advance(1.0);
//! }
//! ```

use std::time::{Duration, Instant};

/// Frame timing: elapsed time, delta, frame count and FPS.
#[derive(Debug)]
pub struct Time {
    /// When the last frame occurred.
    last_frame: Instant,
    /// Total unpaused time in seconds.
    elapsed_secs: f32,
    /// Time since last frame in seconds, after scaling.
    delta_secs: f32,
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
    paused: bool,
    /// Time scale multiplier (1.0 = normal speed).
    time_scale: f32,
}

impl Time {
    /// Create a new time tracker starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
            paused: false,
            time_scale: 1.0,
        }
    }

    /// Update timing values. Call once per frame.
    ///
    /// Returns the scaled delta in seconds (0 while paused).
    pub fn update(&mut self) -> f32 {
        self.advance_to(Instant::now())
    }

    fn advance_to(&mut self, now: Instant) -> f32 {
        let raw_delta = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        let fps_elapsed = now.saturating_duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        self.delta_secs = if self.paused {
            0.0
        } else {
            raw_delta * self.time_scale
        };
        self.elapsed_secs += self.delta_secs;
        self.delta_secs
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames since start, paused or not.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// While paused, `delta()` is 0 and `elapsed()` stops increasing.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Set time scale multiplier. Negative values clamp to 0.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts frame deltas into a whole number of fixed-length ticks.
///
/// Leftover time carries over to the next frame. After a long stall, at most
/// `max_ticks` run and the backlog is dropped so the simulation doesn't try
/// to catch up all at once.
#[derive(Clone, Debug)]
pub struct FixedStep {
    tick_secs: f32,
    max_ticks: u32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(tick_rate: f32, max_ticks: u32) -> Self {
        Self {
            tick_secs: 1.0 / tick_rate.max(f32::EPSILON),
            max_ticks,
            accumulator: 0.0,
        }
    }

    /// Length of one tick in seconds.
    pub fn tick_secs(&self) -> f32 {
        self.tick_secs
    }

    /// Number of ticks to run for a frame that took `delta` seconds.
    pub fn ticks_for(&mut self, delta: f32) -> u32 {
        self.accumulator += delta.max(0.0);
        let available = (self.accumulator / self.tick_secs).floor();

        if available >= self.max_ticks as f32 {
            self.accumulator = 0.0;
            return self.max_ticks;
        }

        let ticks = available as u32;
        self.accumulator -= ticks as f32 * self.tick_secs;
        ticks
    }

    /// Drop any accumulated time.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
