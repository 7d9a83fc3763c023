//! Frame loops
//!
//! A frame loop decides *when* frames happen and how much time each one
//! covers. The director only starts, stops, and polls it:
//!
//! - `ManualLoop` - deterministic fixed-delta frames, one per poll
//! - `IntervalLoop` - real-time frames paced to a target FPS

use std::thread;
use std::time::{Duration, Instant};

/// Default frame time for fixed-step loops (60fps)
pub const DEFAULT_FRAME_MILLIS: f64 = 1000.0 / 60.0;

/// A single frame produced by a frame loop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Monotonically increasing frame index, starting at 0
    pub count: u64,
    /// Milliseconds covered by this frame
    pub delta_millis: f64,
}

/// Source of frames for a director
///
/// Frame counts never go backwards and are not reset by `stop`/`start`.
pub trait FrameLoop {
    /// Begin producing frames
    fn start(&mut self);

    /// Stop producing frames
    fn stop(&mut self);

    /// Whether the loop is currently producing frames
    fn is_running(&self) -> bool;

    /// Produce the next frame, waiting for it if the loop is paced.
    ///
    /// Returns `None` only when the loop is not running.
    fn poll_frame(&mut self) -> Option<Frame>;
}

/// Fixed-step frame loop, producing one frame per poll while running
#[derive(Debug)]
pub struct ManualLoop {
    running: bool,
    next_frame: u64,
    delta_millis: f64,
}

impl ManualLoop {
    pub fn new(delta_millis: f64) -> Self {
        Self {
            running: false,
            next_frame: 0,
            delta_millis: delta_millis.max(0.0),
        }
    }

    /// Fixed step matching a frame rate; a rate of zero yields zero-length frames
    pub fn at_fps(fps: f64) -> Self {
        if fps > 0.0 {
            Self::new(1000.0 / fps)
        } else {
            Self::new(0.0)
        }
    }

    pub fn delta_millis(&self) -> f64 {
        self.delta_millis
    }

    pub fn set_delta_millis(&mut self, delta_millis: f64) {
        self.delta_millis = delta_millis.max(0.0);
    }

    /// Number of frames produced so far
    pub fn frame_count(&self) -> u64 {
        self.next_frame
    }
}

impl Default for ManualLoop {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_MILLIS)
    }
}

impl FrameLoop for ManualLoop {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn poll_frame(&mut self) -> Option<Frame> {
        if !self.running {
            return None;
        }
        let count = self.next_frame;
        self.next_frame += 1;
        Some(Frame {
            count,
            delta_millis: self.delta_millis,
        })
    }
}

/// Real-time frame loop paced with `thread::sleep`
///
/// Deltas are measured wall-clock time between frames. The first frame after
/// each `start` has a zero delta, so time spent stopped is never reported.
#[derive(Debug)]
pub struct IntervalLoop {
    running: bool,
    next_frame: u64,
    /// Zero means uncapped
    frame_duration: Duration,
    last_frame: Option<Instant>,
}

impl IntervalLoop {
    /// Create a loop targeting `target_fps` (0 = uncapped)
    pub fn new(target_fps: u32) -> Self {
        Self {
            running: false,
            next_frame: 0,
            frame_duration: Self::duration_for(target_fps),
            last_frame: None,
        }
    }

    pub fn set_target_fps(&mut self, target_fps: u32) {
        self.frame_duration = Self::duration_for(target_fps);
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    fn duration_for(target_fps: u32) -> Duration {
        if target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_micros(1_000_000 / target_fps as u64)
        }
    }
}

impl Default for IntervalLoop {
    fn default() -> Self {
        Self::new(60)
    }
}

impl FrameLoop for IntervalLoop {
    fn start(&mut self) {
        self.running = true;
        self.last_frame = None;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn poll_frame(&mut self) -> Option<Frame> {
        if !self.running {
            return None;
        }

        // Sleep for remaining frame time
        if let Some(last) = self.last_frame {
            let due = last + self.frame_duration;
            let now = Instant::now();
            if now < due {
                thread::sleep(due - now);
            }
        }

        let now = Instant::now();
        let delta_millis = self
            .last_frame
            .map(|last| (now - last).as_secs_f64() * 1000.0)
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        let count = self.next_frame;
        self.next_frame += 1;
        Some(Frame {
            count,
            delta_millis,
        })
    }
}
