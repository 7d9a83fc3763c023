//! FX Director
//!
//! Frame-driven orchestration for canvas-style animation: a [`Director`]
//! updates its objects, renders them onto a shared surface, prunes the ones
//! that finished, and pauses itself when nothing is left.
//!
//! # Features
//!
//! - **Capability-tagged objects**: [`FxObject`] marks each member as
//!   updatable, renderable, both, or inert at registration
//! - **Explicit termination**: updates return [`Flow::Continue`] or [`Flow::Terminate`]
//! - **Periodic pruning**: terminated objects are dropped every
//!   `frames_before_pruning` frames
//! - **Auto pause/resume**: an empty director pauses; adding work resumes it
//! - **Pluggable frame loops**: [`ManualLoop`] for deterministic stepping,
//!   [`IntervalLoop`] for real-time pacing
//! - **Tick observers**: per-frame callbacks via [`Director::on_tick`]

pub mod config;
pub mod director;
pub mod error;
pub mod frame_loop;
pub mod object;

pub use config::DirectorConfig;
pub use director::{Director, ObjectId, PlaybackState, TickCallback, TickCallbackId};
pub use error::{DirectorError, Result};
pub use frame_loop::{Frame, FrameLoop, IntervalLoop, ManualLoop, DEFAULT_FRAME_MILLIS};
pub use object::{Animated, Flow, FxObject, RenderFn, Renderable, UpdateFn, Updatable};
