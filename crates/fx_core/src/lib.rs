//! FX Core
//!
//! Foundational types shared by the FX animation loop:
//!
//! - **Tick**: the immutable per-frame timing value handed to every object
//! - **Color / Geometry**: plain value types for the drawing surface
//! - **Surface**: the minimal 2D drawing capability the director paints through
//! - **RecordingSurface**: records draw commands for inspection and tests
//! - **PixelSurface**: a software RGBA framebuffer with PNG export
//!
//! # Example
//!
//! ```rust
//! use fx_core::{Color, RecordingSurface, Rect, Surface, SurfaceCommand};
//!
//! let mut surface = RecordingSurface::new();
//! surface.set_fill_color(Color::BLACK);
//! surface.fill_rect(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! assert_eq!(surface.commands().len(), 2);
//! assert!(matches!(surface.commands()[1], SurfaceCommand::FillRect(_)));
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod pixels;
pub mod surface;
pub mod tick;

pub use color::Color;
pub use error::{ColorParseError, SurfaceError};
pub use geometry::{Point, Rect, Size};
pub use pixels::{PixelSurface, MAX_BUFFER_BYTES};
pub use surface::{RecordingSurface, SharedSurface, Surface, SurfaceCommand};
pub use tick::Tick;
