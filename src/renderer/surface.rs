//! 2D drawing surface abstraction
//!
//! Mirrors the subset of the canvas 2D context the sprite shapes need:
//! fills, simple path construction and save/restore of the affine transform.

use glam::Vec2;

use crate::color::Paint;
use crate::sim::SurfaceSize;

/// Something sprites can be drawn onto
pub trait DrawSurface {
    /// Current pixel dimensions, or `None` if the surface is not usable
    /// (detached, zero-sized).
    fn size(&self) -> Option<SurfaceSize>;

    /// Clear the whole surface to transparent
    fn clear(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, factor: f32);

    /// Global alpha applied to every following fill
    fn set_alpha(&mut self, alpha: f32);
    fn set_fill(&mut self, paint: &Paint);

    fn begin_path(&mut self);
    fn move_to(&mut self, point: Vec2);
    fn bezier_to(&mut self, control1: Vec2, control2: Vec2, end: Vec2);
    /// Full circle sub-path
    fn circle(&mut self, center: Vec2, radius: f32);
    /// Fill the current path
    fn fill(&mut self);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    Scale(f32),
    SetAlpha(f32),
    SetFill(Paint),
    BeginPath,
    MoveTo(Vec2),
    BezierTo(Vec2, Vec2, Vec2),
    Circle { center: Vec2, radius: f32 },
    Fill,
    FillRect { origin: Vec2, size: Vec2 },
}

/// Headless surface that records every call. Used by tests and the native
/// binary.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Option<SurfaceSize>,
    /// Calls since the most recent `clear`
    pub commands: Vec<DrawCommand>,
    /// Number of `clear` calls, i.e. frames drawn
    pub frames: u64,
}

impl RecordingSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size: Some(size),
            commands: Vec::new(),
            frames: 0,
        }
    }

    /// A surface that is not attached yet
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, size: SurfaceSize) {
        self.size = Some(size);
    }

    pub fn detach(&mut self) {
        self.size = None;
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(*c)).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Option<SurfaceSize> {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, radians: f32) {
        self.commands.push(DrawCommand::Rotate(radians));
    }

    fn scale(&mut self, factor: f32) {
        self.commands.push(DrawCommand::Scale(factor));
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::SetAlpha(alpha));
    }

    fn set_fill(&mut self, paint: &Paint) {
        self.commands.push(DrawCommand::SetFill(*paint));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, point: Vec2) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn bezier_to(&mut self, control1: Vec2, control2: Vec2, end: Vec2) {
        self.commands.push(DrawCommand::BezierTo(control1, control2, end));
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::FillRect { origin, size });
    }
}
