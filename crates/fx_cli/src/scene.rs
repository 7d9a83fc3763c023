//! Demo scene
//!
//! A burst of fading particles, an oscillating bar, and a couple of
//! bookkeeping objects. Every object has a finite life unless the bar is
//! configured to run forever, so a director running this scene pauses on
//! its own once the burst is over.

use crate::config::SceneConfig;
use fx_core::{Color, Point, Rect, Size, Surface, Tick};
use fx_director::{Flow, FxObject, Renderable, Updatable};

/// Angle between consecutive particles, spreads the burst evenly
const GOLDEN_ANGLE: f32 = 2.399_963;

const BAR_WIDTH: f32 = 24.0;
const STRIP_HEIGHT: f32 = 8.0;

/// A square drifting away from the burst origin and fading out
pub struct Particle {
    origin: Point,
    velocity: Point,
    size: f32,
    color: Color,
    age_ms: f64,
    lifetime_ms: f64,
}

impl Particle {
    pub fn new(origin: Point, velocity: Point, size: f32, color: Color, lifetime_ms: f64) -> Self {
        Self {
            origin,
            velocity,
            size,
            color,
            age_ms: 0.0,
            lifetime_ms,
        }
    }

    pub fn position(&self) -> Point {
        let t = (self.age_ms / 1000.0) as f32;
        Point::new(
            self.origin.x + self.velocity.x * t,
            self.origin.y + self.velocity.y * t,
        )
    }

    fn remaining(&self) -> f32 {
        if self.lifetime_ms <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age_ms / self.lifetime_ms).clamp(0.0, 1.0) as f32
    }
}

impl Updatable for Particle {
    fn update(&mut self, tick: &Tick) -> Flow {
        self.age_ms += tick.delta_millis;
        if self.age_ms >= self.lifetime_ms {
            Flow::Terminate
        } else {
            Flow::Continue
        }
    }
}

impl Renderable for Particle {
    fn render(&mut self, surface: &mut dyn Surface, _tick: &Tick) {
        let Point { x, y } = self.position();
        let half = self.size / 2.0;
        surface.set_fill_color(self.color.with_alpha(self.color.a * self.remaining()));
        surface.fill_rect(Rect::new(x - half, y - half, self.size, self.size));
    }
}

/// A vertical bar sweeping back and forth across the canvas
pub struct Oscillator {
    canvas: Size,
    period_ms: f64,
    /// Zero means forever
    cycles: u32,
    elapsed_ms: f64,
    color: Color,
}

impl Oscillator {
    pub fn new(canvas: Size, period_ms: f64, cycles: u32, color: Color) -> Self {
        Self {
            canvas,
            period_ms: period_ms.max(1.0),
            cycles,
            elapsed_ms: 0.0,
            color,
        }
    }

    /// Left edge of the bar, a triangle wave over one period
    pub fn offset(&self) -> f32 {
        let phase = (self.elapsed_ms % self.period_ms) / self.period_ms;
        let sweep = if phase < 0.5 { phase * 2.0 } else { 2.0 - phase * 2.0 };
        (sweep as f32) * (self.canvas.width - BAR_WIDTH).max(0.0)
    }
}

impl Updatable for Oscillator {
    fn update(&mut self, tick: &Tick) -> Flow {
        self.elapsed_ms += tick.delta_millis;
        if self.cycles > 0 && self.elapsed_ms >= self.cycles as f64 * self.period_ms {
            Flow::Terminate
        } else {
            Flow::Continue
        }
    }
}

impl Renderable for Oscillator {
    fn render(&mut self, surface: &mut dyn Surface, _tick: &Tick) {
        surface.set_fill_color(self.color);
        surface.fill_rect(Rect::new(self.offset(), 0.0, BAR_WIDTH, self.canvas.height));
    }
}

/// Render-only strip along the bottom edge showing elapsed scene time
///
/// It has no update step, so it retires itself by reporting termination
/// once the scene is over.
pub struct ProgressStrip {
    canvas: Size,
    until_ms: Option<f64>,
    last_total_ms: f64,
}

impl ProgressStrip {
    pub fn new(canvas: Size, until_ms: Option<f64>) -> Self {
        Self {
            canvas,
            until_ms,
            last_total_ms: 0.0,
        }
    }
}

impl Renderable for ProgressStrip {
    fn render(&mut self, surface: &mut dyn Surface, tick: &Tick) {
        self.last_total_ms = tick.total_millis;

        let progress = match self.until_ms {
            Some(until) if until > 0.0 => (tick.total_millis / until).min(1.0) as f32,
            _ => ((tick.total_millis % 1000.0) / 1000.0) as f32,
        };
        surface.set_fill_color(Color::WHITE.with_alpha(0.6));
        surface.fill_rect(Rect::new(
            0.0,
            self.canvas.height - STRIP_HEIGHT,
            self.canvas.width * progress,
            STRIP_HEIGHT,
        ));
    }

    fn is_terminated(&self) -> bool {
        self.until_ms.is_some_and(|until| self.last_total_ms >= until)
    }
}

/// Update-only object that logs scene time once per simulated second
pub struct Heartbeat {
    until_ms: Option<f64>,
    next_beat_ms: f64,
}

impl Heartbeat {
    pub fn new(until_ms: Option<f64>) -> Self {
        Self {
            until_ms,
            next_beat_ms: 1000.0,
        }
    }
}

impl Updatable for Heartbeat {
    fn update(&mut self, tick: &Tick) -> Flow {
        while tick.total_millis >= self.next_beat_ms {
            tracing::debug!(
                "Scene: {:.0}ms elapsed at frame {}",
                tick.total_millis,
                tick.frames
            );
            self.next_beat_ms += 1000.0;
        }

        match self.until_ms {
            Some(until) if tick.total_millis >= until => Flow::Terminate,
            _ => Flow::Continue,
        }
    }
}

/// How long the scene runs, `None` if something in it never retires
pub fn scene_duration(config: &SceneConfig) -> Option<f64> {
    // Lifetimes repeat every 8 indices
    let particles = (0..config.particles.min(8))
        .map(|index| particle_lifetime(config, index))
        .fold(0.0, f64::max);

    let bar = match config.bar_cycles {
        0 => return None,
        cycles => cycles as f64 * config.bar_period_ms.max(1.0),
    };

    Some(particles.max(bar))
}

fn particle_lifetime(config: &SceneConfig, index: u32) -> f64 {
    // Stagger lifetimes so the burst thins out instead of vanishing at once
    config.particle_lifetime_ms * (1.0 + (index % 8) as f64 / 8.0)
}

/// Build the demo scene for a canvas
pub fn build_scene(config: &SceneConfig, canvas: Size) -> Vec<FxObject> {
    let center = Point::new(canvas.width / 2.0, canvas.height / 2.0);
    let until = scene_duration(config);

    let mut objects = Vec::with_capacity(config.particles as usize + 3);

    objects.push(FxObject::animated(Oscillator::new(
        canvas,
        config.bar_period_ms,
        config.bar_cycles,
        config.bar_color,
    )));

    for i in 0..config.particles {
        let angle = i as f32 * GOLDEN_ANGLE;
        let speed = 60.0 + (i % 7) as f32 * 25.0;
        let velocity = Point::new(angle.cos() * speed, angle.sin() * speed);
        objects.push(FxObject::animated(Particle::new(
            center,
            velocity,
            config.particle_size,
            config.particle_color,
            particle_lifetime(config, i),
        )));
    }

    if config.progress_strip {
        objects.push(FxObject::renderable(ProgressStrip::new(canvas, until)));
    }
    objects.push(FxObject::updatable(Heartbeat::new(until)));

    objects
}
