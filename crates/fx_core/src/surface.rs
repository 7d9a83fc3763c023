//! Drawing surfaces
//!
//! The director only needs a canvas-style fill: choose a fill color, then
//! fill rectangles with it. Renderables receive the same `&mut dyn Surface`
//! and can use anything the trait offers.

use crate::color::Color;
use crate::geometry::{Rect, Size};
use std::cell::RefCell;
use std::rc::Rc;

/// Minimal 2D drawing capability
pub trait Surface {
    /// Set the color used by subsequent fills
    fn set_fill_color(&mut self, color: Color);

    /// Current fill color
    fn fill_color(&self) -> Color;

    /// Fill a rectangle with the current fill color
    fn fill_rect(&mut self, rect: Rect);

    /// Fill the `(0, 0)`–`size` region with `color`
    ///
    /// Leaves the fill color set to `color`, like the two underlying calls would.
    fn clear(&mut self, color: Color, size: Size) {
        self.set_fill_color(color);
        self.fill_rect(size.to_rect());
    }
}

/// A surface shared between the director and the code that created it
///
/// The director borrows it mutably only while rendering a frame.
pub type SharedSurface = Rc<RefCell<dyn Surface>>;

/// A single recorded surface operation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceCommand {
    SetFillColor(Color),
    FillRect(Rect),
}

/// A surface that records commands for later inspection
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    fill_color: Color,
}

impl RecordingSurface {
    /// Create a new recording surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording surface already wrapped for sharing
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear all recorded commands
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Number of `FillRect` commands recorded
    pub fn fill_rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, SurfaceCommand::FillRect(_)))
            .count()
    }

    /// Recorded rectangles paired with the fill color active when each was drawn
    pub fn filled_rects(&self) -> Vec<(Color, Rect)> {
        let mut color = Color::default();
        let mut out = Vec::new();
        for command in &self.commands {
            match *command {
                SurfaceCommand::SetFillColor(c) => color = c,
                SurfaceCommand::FillRect(rect) => out.push((color, rect)),
            }
        }
        out
    }
}

impl Surface for RecordingSurface {
    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(SurfaceCommand::SetFillColor(color));
        self.fill_color = color;
    }

    fn fill_color(&self) -> Color {
        self.fill_color
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(SurfaceCommand::FillRect(rect));
    }
}
