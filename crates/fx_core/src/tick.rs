//! Per-frame timing value

/// Immutable timing information for a single frame.
///
/// A fresh `Tick` is built once per frame by the director and handed by
/// reference to every updatable, renderable, and tick observer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tick {
    /// Frame index reported by the frame loop
    pub frames: u64,
    /// Milliseconds since the previous frame
    pub delta_millis: f64,
    /// Accumulated milliseconds, including this frame's delta
    pub total_millis: f64,
}

impl Tick {
    /// Build the tick for a frame given the time accumulated before it
    pub fn new(frames: u64, delta_millis: f64, elapsed_before: f64) -> Self {
        Self {
            frames,
            delta_millis,
            total_millis: elapsed_before + delta_millis,
        }
    }

    /// Delta time in seconds, for physics-style integration
    pub fn delta_secs(&self) -> f32 {
        (self.delta_millis / 1000.0) as f32
    }

    /// Total time in seconds
    pub fn total_secs(&self) -> f32 {
        (self.total_millis / 1000.0) as f32
    }
}
