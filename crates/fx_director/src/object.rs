//! Director members
//!
//! Objects take part in a frame through two capabilities:
//!
//! - [`Updatable`] advances its own state and reports whether to keep going
//! - [`Renderable`] paints itself onto the surface
//!
//! Which capabilities an object has is fixed when it is wrapped in an
//! [`FxObject`] and handed to the director.

use fx_core::{Surface, Tick};
use std::fmt;

/// Result of an update step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Flow {
    /// Keep updating and rendering this object
    #[default]
    Continue,
    /// Mark the object terminated; it is skipped from now on and pruned later
    Terminate,
}

impl Flow {
    pub fn is_terminate(self) -> bool {
        self == Flow::Terminate
    }
}

/// An object that advances its own state once per frame
pub trait Updatable {
    fn update(&mut self, tick: &Tick) -> Flow;

    /// Self-reported termination. Once the director observes `true`, the
    /// object stays terminated.
    fn is_terminated(&self) -> bool {
        false
    }
}

/// An object that paints itself once per frame
pub trait Renderable {
    /// Draw onto `surface`. The director already holds the shared surface
    /// borrow here, so borrowing the `SharedSurface` handle again panics.
    fn render(&mut self, surface: &mut dyn Surface, tick: &Tick);

    /// Self-reported termination, see [`Updatable::is_terminated`]
    fn is_terminated(&self) -> bool {
        false
    }
}

/// An object with both capabilities
pub trait Animated: Updatable + Renderable {}

impl<T: Updatable + Renderable> Animated for T {}

/// Updatable backed by a closure
pub struct UpdateFn<F>(pub F);

impl<F> Updatable for UpdateFn<F>
where
    F: FnMut(&Tick) -> Flow,
{
    fn update(&mut self, tick: &Tick) -> Flow {
        (self.0)(tick)
    }
}

/// Renderable backed by a closure
pub struct RenderFn<F>(pub F);

impl<F> Renderable for RenderFn<F>
where
    F: FnMut(&mut dyn Surface, &Tick),
{
    fn render(&mut self, surface: &mut dyn Surface, tick: &Tick) {
        (self.0)(surface, tick)
    }
}

/// An object registered with a director, tagged by capability
pub enum FxObject {
    /// Updated every frame, never rendered
    Updatable(Box<dyn Updatable>),
    /// Rendered every frame, never updated
    Renderable(Box<dyn Renderable>),
    /// Both updated and rendered
    Animated(Box<dyn Animated>),
    /// Accepted but takes no part in frames
    Inert,
}

impl FxObject {
    pub fn updatable(object: impl Updatable + 'static) -> Self {
        FxObject::Updatable(Box::new(object))
    }

    pub fn renderable(object: impl Renderable + 'static) -> Self {
        FxObject::Renderable(Box::new(object))
    }

    pub fn animated(object: impl Updatable + Renderable + 'static) -> Self {
        FxObject::Animated(Box::new(object))
    }

    pub fn inert() -> Self {
        FxObject::Inert
    }

    /// Wrap an update closure
    pub fn from_update_fn<F>(f: F) -> Self
    where
        F: FnMut(&Tick) -> Flow + 'static,
    {
        Self::updatable(UpdateFn(f))
    }

    /// Wrap a render closure
    pub fn from_render_fn<F>(f: F) -> Self
    where
        F: FnMut(&mut dyn Surface, &Tick) + 'static,
    {
        Self::renderable(RenderFn(f))
    }

    /// Whether this object takes part in the update phase
    pub fn updates(&self) -> bool {
        matches!(self, FxObject::Updatable(_) | FxObject::Animated(_))
    }

    /// Whether this object takes part in the render phase
    pub fn renders(&self) -> bool {
        matches!(self, FxObject::Renderable(_) | FxObject::Animated(_))
    }

    pub(crate) fn update(&mut self, tick: &Tick) -> Flow {
        match self {
            FxObject::Updatable(object) => object.update(tick),
            FxObject::Animated(object) => object.update(tick),
            FxObject::Renderable(_) | FxObject::Inert => Flow::Continue,
        }
    }

    pub(crate) fn render(&mut self, surface: &mut dyn Surface, tick: &Tick) {
        match self {
            FxObject::Renderable(object) => object.render(surface, tick),
            FxObject::Animated(object) => object.render(surface, tick),
            FxObject::Updatable(_) | FxObject::Inert => {}
        }
    }

    pub(crate) fn reports_terminated(&self) -> bool {
        match self {
            FxObject::Updatable(object) => object.is_terminated(),
            FxObject::Renderable(object) => object.is_terminated(),
            FxObject::Animated(object) => {
                Updatable::is_terminated(object.as_ref())
                    || Renderable::is_terminated(object.as_ref())
            }
            FxObject::Inert => false,
        }
    }
}

impl fmt::Debug for FxObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            FxObject::Updatable(_) => "Updatable",
            FxObject::Renderable(_) => "Renderable",
            FxObject::Animated(_) => "Animated",
            FxObject::Inert => "Inert",
        };
        f.debug_tuple("FxObject").field(&kind).finish()
    }
}
