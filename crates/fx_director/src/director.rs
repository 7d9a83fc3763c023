//! The animation director
//!
//! A `Director` owns the objects of one rendering surface and runs the
//! per-frame cycle:
//!
//! 1. build a [`Tick`] for the frame
//! 2. update every live updatable, in insertion order
//! 3. clear the canvas (if configured) and render every live renderable,
//!    in insertion order (later objects paint on top)
//! 4. fold the frame's delta into the elapsed time
//! 5. every `frames_before_pruning` frames, drop terminated objects and
//!    pause if nothing is left
//! 6. hand the same tick to tick observers
//!
//! Frames come from a [`FrameLoop`]; [`Director::pump`] polls it once and
//! [`Director::run`] keeps polling until the loop stops.
//!
//! ```rust
//! use fx_core::{RecordingSurface, Tick};
//! use fx_director::{Director, Flow, FxObject, PlaybackState};
//!
//! let surface = RecordingSurface::shared();
//! let mut director = Director::new(surface.clone());
//!
//! director.add_object(FxObject::from_update_fn(|tick: &Tick| {
//!     if tick.frames < 3 { Flow::Continue } else { Flow::Terminate }
//! }));
//!
//! director.start();
//! director.on_frame(3, 16.0);
//! director.prune();
//!
//! assert_eq!(director.state(), PlaybackState::Paused);
//! ```

use crate::config::DirectorConfig;
use crate::error::Result;
use crate::frame_loop::{FrameLoop, ManualLoop};
use crate::object::{Flow, FxObject};
use fx_core::{SharedSurface, Tick};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to an object registered with a director
    pub struct ObjectId;
    /// Handle to a registered tick observer
    pub struct TickCallbackId;
}

/// Observer invoked once per frame with that frame's tick
pub type TickCallback = Box<dyn FnMut(&Tick)>;

/// Observable playback state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// Never started, or explicitly stopped
    Stopped,
    /// The frame loop is running
    Playing,
    /// Stopped by `pause()`, either by the caller or because nothing was left to animate
    Paused,
}

struct Entry {
    object: FxObject,
    terminated: bool,
}

impl Entry {
    /// Latch the object's own termination report into the sticky flag
    fn check_terminated(&mut self) -> bool {
        if !self.terminated && self.object.reports_terminated() {
            self.terminated = true;
        }
        self.terminated
    }

    fn has_role(&self) -> bool {
        self.object.updates() || self.object.renders()
    }
}

pub struct Director {
    surface: SharedSurface,
    frame_loop: Box<dyn FrameLoop>,
    config: DirectorConfig,
    objects: SlotMap<ObjectId, Entry>,
    updatables: Vec<ObjectId>,
    renderables: Vec<ObjectId>,
    tick_callbacks: SlotMap<TickCallbackId, TickCallback>,
    elapsed_millis: f64,
    is_playing: bool,
    is_paused: bool,
}

impl Director {
    /// Create a director with the default configuration and a 60fps [`ManualLoop`]
    pub fn new(surface: SharedSurface) -> Self {
        Self {
            surface,
            frame_loop: Box::new(ManualLoop::default()),
            config: DirectorConfig::default(),
            objects: SlotMap::with_key(),
            updatables: Vec::new(),
            renderables: Vec::new(),
            tick_callbacks: SlotMap::with_key(),
            elapsed_millis: 0.0,
            is_playing: false,
            is_paused: false,
        }
    }

    /// Create a director with a validated configuration
    pub fn with_config(surface: SharedSurface, config: DirectorConfig) -> Result<Self> {
        config.validate()?;
        let mut director = Self::new(surface);
        director.config = config;
        Ok(director)
    }

    /// Replace the frame loop
    ///
    /// The new loop is started if the director is currently playing.
    pub fn with_frame_loop(mut self, frame_loop: Box<dyn FrameLoop>) -> Self {
        self.frame_loop.stop();
        self.frame_loop = frame_loop;
        if self.is_playing {
            self.frame_loop.start();
        }
        self
    }

    pub fn config(&self) -> &DirectorConfig {
        &self.config
    }

    /// Replace the configuration; takes effect from the next frame
    pub fn set_config(&mut self, config: DirectorConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn surface(&self) -> &SharedSurface {
        &self.surface
    }

    // =========================================================================
    // Objects
    // =========================================================================

    /// Register an object
    ///
    /// The object joins the update and/or render phase according to its
    /// variant. Inert objects are accepted but never called. Adding anything
    /// to a paused director resumes it.
    pub fn add_object(&mut self, object: FxObject) -> ObjectId {
        let updates = object.updates();
        let renders = object.renders();
        let id = self.objects.insert(Entry {
            object,
            terminated: false,
        });

        if updates {
            self.updatables.push(id);
        }
        if renders {
            self.renderables.push(id);
        }
        tracing::trace!(
            "Director: added object {:?} (updates={}, renders={})",
            id,
            updates,
            renders
        );

        self.resume_if_paused();
        id
    }

    /// Register objects in order
    pub fn add_objects(&mut self, objects: impl IntoIterator<Item = FxObject>) -> Vec<ObjectId> {
        objects
            .into_iter()
            .map(|object| self.add_object(object))
            .collect()
    }

    /// Resume playback because new work arrived
    fn resume_if_paused(&mut self) {
        if self.is_paused {
            tracing::debug!("Director: object added while paused, resuming");
            self.resume();
        }
    }

    /// Whether an object is still registered
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Termination flag of a registered object, `None` once pruned
    pub fn is_terminated(&self, id: ObjectId) -> Option<bool> {
        self.objects
            .get(id)
            .map(|entry| entry.terminated || entry.object.reports_terminated())
    }

    /// Number of registered objects, including terminated ones awaiting a prune
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn updatable_count(&self) -> usize {
        self.updatables.len()
    }

    pub fn renderable_count(&self) -> usize {
        self.renderables.len()
    }

    // =========================================================================
    // Frames
    // =========================================================================

    /// Run one frame
    ///
    /// Called by [`pump`](Self::pump) for every frame the loop produces; can
    /// also be called directly to drive frames by hand. Negative and NaN
    /// deltas count as zero so elapsed time never runs backwards.
    pub fn on_frame(&mut self, frame_count: u64, delta_millis: f64) {
        let delta_millis = delta_millis.max(0.0);
        let tick = Tick::new(frame_count, delta_millis, self.elapsed_millis);

        self.update_all(&tick);
        self.render_all(&tick);
        self.elapsed_millis += delta_millis;

        if frame_count % self.config.frames_before_pruning == 0 {
            self.prune();
        }

        for callback in self.tick_callbacks.values_mut() {
            callback(&tick);
        }
    }

    fn update_all(&mut self, tick: &Tick) {
        for &id in &self.updatables {
            let Some(entry) = self.objects.get_mut(id) else {
                continue;
            };
            if entry.check_terminated() {
                continue;
            }
            if entry.object.update(tick) == Flow::Terminate {
                entry.terminated = true;
            }
            entry.check_terminated();
        }
    }

    fn render_all(&mut self, tick: &Tick) {
        let mut surface = self.surface.borrow_mut();

        if self.config.clear_canvas {
            surface.clear(self.config.background_color, self.config.canvas_size);
        }

        for &id in &self.renderables {
            let Some(entry) = self.objects.get_mut(id) else {
                continue;
            };
            if entry.check_terminated() {
                continue;
            }
            entry.object.render(&mut *surface, tick);
        }
    }

    /// Remove every terminated object, keeping the order of the rest
    ///
    /// Runs automatically on prune frames. Pauses the director when both the
    /// update and render sets end up empty. Returns the number of terminated
    /// objects removed.
    pub fn prune(&mut self) -> usize {
        let objects = &mut self.objects;

        let mut removed = 0;
        for entry in objects.values_mut() {
            if entry.check_terminated() {
                removed += 1;
            }
        }

        self.updatables
            .retain(|&id| objects.get(id).is_some_and(|entry| !entry.terminated));
        self.renderables
            .retain(|&id| objects.get(id).is_some_and(|entry| !entry.terminated));
        objects.retain(|_, entry| !entry.terminated && entry.has_role());

        if removed > 0 {
            tracing::debug!(
                "Director: pruned {} terminated objects ({} updatable, {} renderable left)",
                removed,
                self.updatables.len(),
                self.renderables.len()
            );
        }

        if self.updatables.is_empty() && self.renderables.is_empty() {
            self.pause();
        }

        removed
    }

    /// Poll the frame loop once and run the frame it produces
    ///
    /// Returns `false` when the loop produced no frame (it is not running).
    pub fn pump(&mut self) -> bool {
        match self.frame_loop.poll_frame() {
            Some(frame) => {
                self.on_frame(frame.count, frame.delta_millis);
                true
            }
            None => false,
        }
    }

    /// Pump frames until the loop stops or `max_frames` have run
    ///
    /// Returns the number of frames run. With a paced loop this blocks for
    /// the duration of those frames.
    pub fn run(&mut self, max_frames: Option<u64>) -> u64 {
        let mut frames = 0;
        while self.frame_loop.is_running() && max_frames.map_or(true, |max| frames < max) {
            if !self.pump() {
                break;
            }
            frames += 1;
        }
        frames
    }

    /// Milliseconds accumulated over every frame run so far
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed_millis
    }

    // =========================================================================
    // Playback
    // =========================================================================

    /// Start the frame loop
    ///
    /// Starting a paused director also clears the paused flag, so playing
    /// and paused are never both set.
    pub fn start(&mut self) {
        tracing::info!("Starting animation loop...");
        self.frame_loop.start();
        self.is_playing = true;
        self.is_paused = false;
    }

    pub fn stop(&mut self) {
        self.frame_loop.stop();
        self.is_playing = false;
        tracing::info!("Stopped.");
    }

    pub fn toggle(&mut self) {
        if self.is_playing {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Stop and remember that playback should resume; no-op unless playing
    pub fn pause(&mut self) {
        if self.is_playing {
            tracing::info!("Pausing...");
            self.stop();
            self.is_paused = true;
        }
    }

    /// Restart a paused director; no-op unless paused
    pub fn resume(&mut self) {
        if self.is_paused {
            tracing::info!("Resumed.");
            self.start();
            self.is_paused = false;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn state(&self) -> PlaybackState {
        if self.is_playing {
            PlaybackState::Playing
        } else if self.is_paused {
            PlaybackState::Paused
        } else {
            PlaybackState::Stopped
        }
    }

    // =========================================================================
    // Tick observers
    // =========================================================================

    /// Register an observer called once per frame, after pruning
    pub fn on_tick<F>(&mut self, callback: F) -> TickCallbackId
    where
        F: FnMut(&Tick) + 'static,
    {
        self.tick_callbacks.insert(Box::new(callback))
    }

    /// Unregister a tick observer; returns whether it was registered
    pub fn remove_tick_callback(&mut self, id: TickCallbackId) -> bool {
        self.tick_callbacks.remove(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Renderable, Updatable};
    use fx_core::{Color, Rect, RecordingSurface, Surface, SurfaceCommand};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    /// Records every call, terminating on the given frame
    struct Probe {
        name: &'static str,
        log: Log,
        terminate_on: Option<u64>,
    }

    impl Probe {
        fn new(name: &'static str, log: &Log) -> Self {
            Self {
                name,
                log: log.clone(),
                terminate_on: None,
            }
        }

        fn terminating_on(mut self, frame: u64) -> Self {
            self.terminate_on = Some(frame);
            self
        }
    }

    impl Updatable for Probe {
        fn update(&mut self, tick: &Tick) -> Flow {
            self.log
                .borrow_mut()
                .push(format!("update {} {}", self.name, tick.frames));
            if self.terminate_on == Some(tick.frames) {
                Flow::Terminate
            } else {
                Flow::Continue
            }
        }
    }

    impl Renderable for Probe {
        fn render(&mut self, surface: &mut dyn Surface, tick: &Tick) {
            self.log
                .borrow_mut()
                .push(format!("render {} {}", self.name, tick.frames));
            surface.fill_rect(Rect::new(1.0, 1.0, 1.0, 1.0));
        }
    }

    fn director_with(config: DirectorConfig) -> (Director, Rc<RefCell<RecordingSurface>>) {
        let surface = RecordingSurface::shared();
        let director = Director::with_config(surface.clone(), config).unwrap();
        (director, surface)
    }

    fn log() -> Log {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn entries(log: &Log) -> Vec<String> {
        log.borrow().clone()
    }

    #[test]
    fn test_new_director_is_stopped_and_empty() {
        let director = Director::new(RecordingSurface::shared());
        assert_eq!(director.state(), PlaybackState::Stopped);
        assert!(!director.is_playing());
        assert!(!director.is_paused());
        assert_eq!(director.elapsed_millis(), 0.0);
        assert_eq!(director.object_count(), 0);
        assert_eq!(director.config(), &DirectorConfig::default());
    }

    #[test]
    fn test_with_config_validates() {
        let config = DirectorConfig::default().with_frames_before_pruning(0);
        assert!(Director::with_config(RecordingSurface::shared(), config).is_err());
    }

    #[test]
    fn test_objects_sorted_by_capability_in_insertion_order() {
        let log = log();
        let (mut director, _) = director_with(DirectorConfig::default().with_clear_canvas(false));

        director.add_objects([
            FxObject::animated(Probe::new("a", &log)),
            FxObject::updatable(Probe::new("b", &log)),
            FxObject::renderable(Probe::new("c", &log)),
            FxObject::inert(),
            FxObject::animated(Probe::new("d", &log)),
        ]);

        assert_eq!(director.object_count(), 5);
        assert_eq!(director.updatable_count(), 3);
        assert_eq!(director.renderable_count(), 3);

        director.on_frame(1, 16.0);
        assert_eq!(
            entries(&log),
            vec![
                "update a 1",
                "update b 1",
                "update d 1",
                "render a 1",
                "render c 1",
                "render d 1",
            ]
        );
    }

    #[test]
    fn test_roles_never_cross() {
        let log = log();
        let (mut director, _) = director_with(DirectorConfig::default());

        director.add_object(FxObject::renderable(Probe::new("paint", &log)));
        director.add_object(FxObject::updatable(Probe::new("think", &log)));
        director.on_frame(1, 16.0);

        let calls = entries(&log);
        assert!(!calls.iter().any(|c| c.starts_with("update paint")));
        assert!(!calls.iter().any(|c| c.starts_with("render think")));
        assert_eq!(calls.len(), 2);
    }

    #[test]
    fn test_tick_total_excludes_later_frames() {
        let (mut director, _) = director_with(DirectorConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        director.add_object(FxObject::from_update_fn(move |tick| {
            sink.borrow_mut().push(*tick);
            Flow::Continue
        }));

        director.on_frame(1, 16.0);
        director.on_frame(2, 10.0);

        let ticks = seen.borrow();
        assert_eq!(ticks[0], Tick::new(1, 16.0, 0.0));
        assert_eq!(ticks[0].total_millis, 16.0);
        assert_eq!(ticks[1].total_millis, 26.0);
        assert_eq!(director.elapsed_millis(), 26.0);
    }

    #[test]
    fn test_invalid_delta_never_rewinds_elapsed_time() {
        let (mut director, _) = director_with(DirectorConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        director.on_tick(move |tick| sink.borrow_mut().push(*tick));

        director.on_frame(1, 16.0);
        director.on_frame(2, -10.0);
        assert_eq!(director.elapsed_millis(), 16.0);

        director.on_frame(3, f64::NAN);
        assert_eq!(director.elapsed_millis(), 16.0);

        director.on_frame(4, 4.0);
        assert_eq!(director.elapsed_millis(), 20.0);

        let ticks = seen.borrow();
        assert_eq!(ticks[1].delta_millis, 0.0);
        assert_eq!(ticks[2].delta_millis, 0.0);
        assert_eq!(ticks[2].total_millis, 16.0);
    }

    #[test]
    fn test_termination_is_sticky_until_prune() {
        let log = log();
        let (mut director, _) =
            director_with(DirectorConfig::default().with_frames_before_pruning(4));

        let id = director.add_object(FxObject::animated(Probe::new("p", &log).terminating_on(1)));
        director.add_object(FxObject::updatable(Probe::new("keep", &log)));
        director.start();

        director.on_frame(1, 16.0);
        assert_eq!(director.is_terminated(id), Some(true));

        log.borrow_mut().clear();
        director.on_frame(2, 16.0);
        director.on_frame(3, 16.0);
        assert_eq!(entries(&log), vec!["update keep 2", "update keep 3"]);
        assert!(director.contains(id));

        director.on_frame(4, 16.0);
        assert!(!director.contains(id));
        assert_eq!(director.is_terminated(id), None);
        assert_eq!(director.updatable_count(), 1);
        assert_eq!(director.renderable_count(), 0);
        assert!(director.is_playing());
    }

    #[test]
    fn test_self_reported_termination_is_adopted() {
        struct Ghost {
            gone: Rc<RefCell<bool>>,
            renders: Rc<RefCell<u32>>,
        }

        impl Renderable for Ghost {
            fn render(&mut self, _surface: &mut dyn Surface, _tick: &Tick) {
                *self.renders.borrow_mut() += 1;
            }

            fn is_terminated(&self) -> bool {
                *self.gone.borrow()
            }
        }

        let gone = Rc::new(RefCell::new(false));
        let renders = Rc::new(RefCell::new(0));
        let (mut director, _) = director_with(DirectorConfig::default());
        let id = director.add_object(FxObject::renderable(Ghost {
            gone: gone.clone(),
            renders: renders.clone(),
        }));

        director.on_frame(1, 16.0);
        *gone.borrow_mut() = true;
        director.on_frame(2, 16.0);
        assert_eq!(*renders.borrow(), 1);

        // The flag stays latched even if the object changes its mind
        *gone.borrow_mut() = false;
        director.on_frame(3, 16.0);
        assert_eq!(*renders.borrow(), 1);
        assert_eq!(director.is_terminated(id), Some(true));
    }

    #[test]
    fn test_first_frame_termination_pauses_immediately() {
        let log = log();
        let (mut director, _) =
            director_with(DirectorConfig::default().with_frames_before_pruning(2));

        director.add_object(FxObject::animated(Probe::new("once", &log).terminating_on(0)));
        director.start();

        director.on_frame(0, 16.0);
        assert_eq!(director.object_count(), 0);
        assert_eq!(director.state(), PlaybackState::Paused);
        assert!(!director.is_playing());
        assert!(director.is_paused());

        director.on_frame(1, 16.0);
        assert_eq!(entries(&log), vec!["update once 0"]);
    }

    #[test]
    fn test_adding_object_resumes_paused_director() {
        let log = log();
        let (mut director, _) =
            director_with(DirectorConfig::default().with_frames_before_pruning(1));
        director.start();
        director.on_frame(0, 16.0);
        assert_eq!(director.state(), PlaybackState::Paused);

        director.add_object(FxObject::updatable(Probe::new("late", &log)));
        assert_eq!(director.state(), PlaybackState::Playing);
        assert!(!director.is_paused());
    }

    #[test]
    fn test_inert_object_resumes_then_pauses_again() {
        let (mut director, _) =
            director_with(DirectorConfig::default().with_frames_before_pruning(1));
        director.start();
        director.prune();
        assert!(director.is_paused());

        let id = director.add_object(FxObject::inert());
        assert!(director.is_playing());
        assert_eq!(director.is_terminated(id), Some(false));

        director.on_frame(5, 16.0);
        assert!(director.is_paused());
        assert!(!director.contains(id));
    }

    #[test]
    fn test_pause_and_resume_are_noops_when_inapplicable() {
        let (mut director, _) = director_with(DirectorConfig::default());

        director.pause();
        assert_eq!(director.state(), PlaybackState::Stopped);
        assert!(!director.is_paused());

        director.resume();
        assert_eq!(director.state(), PlaybackState::Stopped);

        director.start();
        director.resume();
        assert!(director.is_playing());
        assert!(!director.is_paused());
    }

    #[test]
    fn test_start_after_auto_pause_plays() {
        let (mut director, _) = director_with(DirectorConfig::default());
        director.start();
        director.prune();
        assert_eq!(director.state(), PlaybackState::Paused);

        director.start();
        assert_eq!(director.state(), PlaybackState::Playing);
        assert!(!director.is_paused());

        director.prune();
        director.resume();
        assert!(director.is_playing());
        assert!(!director.is_paused());
    }

    #[test]
    fn test_toggle() {
        let (mut director, _) = director_with(DirectorConfig::default());
        director.toggle();
        assert!(director.is_playing());
        director.toggle();
        assert_eq!(director.state(), PlaybackState::Stopped);
    }

    #[test]
    fn test_empty_add_objects_changes_nothing() {
        let (mut director, _) = director_with(DirectorConfig::default());
        director.start();
        director.pause();

        let ids = director.add_objects(Vec::new());
        assert!(ids.is_empty());
        assert_eq!(director.object_count(), 0);
        assert_eq!(director.state(), PlaybackState::Paused);
    }

    #[test]
    fn test_clear_precedes_member_renders() {
        let log = log();
        let (mut director, surface) = director_with(
            DirectorConfig::default()
                .with_canvas_size(800.0, 600.0)
                .with_background_color(Color::BLUE),
        );
        director.add_objects([
            FxObject::renderable(Probe::new("a", &log)),
            FxObject::renderable(Probe::new("b", &log)),
        ]);

        director.on_frame(1, 16.0);
        director.on_frame(2, 16.0);

        let commands = surface.borrow().commands().to_vec();
        let frame = [
            SurfaceCommand::SetFillColor(Color::BLUE),
            SurfaceCommand::FillRect(Rect::new(0.0, 0.0, 800.0, 600.0)),
            SurfaceCommand::FillRect(Rect::new(1.0, 1.0, 1.0, 1.0)),
            SurfaceCommand::FillRect(Rect::new(1.0, 1.0, 1.0, 1.0)),
        ];
        assert_eq!(commands, [frame, frame].concat());
    }

    #[test]
    fn test_no_clear_when_disabled() {
        let (mut director, surface) = director_with(DirectorConfig::default().with_clear_canvas(false));
        director.on_frame(1, 16.0);
        assert!(surface.borrow().commands().is_empty());
    }

    #[test]
    fn test_tick_observers_see_frame_tick() {
        let (mut director, _) = director_with(DirectorConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let id = director.on_tick(move |tick| sink.borrow_mut().push(*tick));

        director.on_frame(1, 16.0);
        director.on_frame(2, 16.0);
        assert_eq!(
            *seen.borrow(),
            vec![Tick::new(1, 16.0, 0.0), Tick::new(2, 16.0, 16.0)]
        );

        assert!(director.remove_tick_callback(id));
        assert!(!director.remove_tick_callback(id));
        director.on_frame(3, 16.0);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_tick_observers_run_after_prune() {
        let (mut director, _) =
            director_with(DirectorConfig::default().with_frames_before_pruning(1));
        director.start();

        let states = Rc::new(RefCell::new(Vec::new()));
        let sink = states.clone();
        director.on_tick(move |tick| sink.borrow_mut().push(tick.frames));

        director.on_frame(0, 16.0);
        assert_eq!(*states.borrow(), vec![0]);
        assert!(director.is_paused());
    }

    #[test]
    fn test_run_stops_when_director_pauses() {
        let log = log();
        let (director, _) = director_with(DirectorConfig::default().with_frames_before_pruning(5));
        let mut director = director.with_frame_loop(Box::new(ManualLoop::new(10.0)));

        director.add_object(FxObject::updatable(Probe::new("p", &log).terminating_on(7)));
        director.start();

        let frames = director.run(None);
        // Terminates on frame 7, pruned on frame 10
        assert_eq!(frames, 11);
        assert_eq!(director.state(), PlaybackState::Paused);
        assert_eq!(director.elapsed_millis(), 110.0);
        assert!(!director.pump());
    }

    #[test]
    fn test_run_respects_frame_limit() {
        let log = log();
        let (mut director, _) = director_with(DirectorConfig::default());
        director.add_object(FxObject::updatable(Probe::new("p", &log)));

        assert_eq!(director.run(Some(5)), 0);

        director.start();
        assert_eq!(director.run(Some(5)), 5);
        assert!(director.is_playing());
        assert_eq!(entries(&log).last().map(String::as_str), Some("update p 4"));
    }

    #[test]
    fn test_frame_loop_swapped_while_playing_is_started() {
        let (mut director, _) = director_with(DirectorConfig::default());
        director.start();
        let mut director = director.with_frame_loop(Box::new(ManualLoop::new(5.0)));

        assert!(director.pump());
        assert_eq!(director.elapsed_millis(), 5.0);
    }

    #[test]
    fn test_set_config_applies_next_frame() {
        let (mut director, surface) = director_with(DirectorConfig::default());
        assert!(director
            .set_config(DirectorConfig::default().with_frames_before_pruning(0))
            .is_err());

        director
            .set_config(DirectorConfig::default().with_canvas_size(2.0, 3.0))
            .unwrap();
        director.on_frame(1, 16.0);

        assert_eq!(
            surface.borrow().filled_rects(),
            vec![(Color::BLACK, Rect::new(0.0, 0.0, 2.0, 3.0))]
        );
    }
}
