//! Rendering surface abstraction.

use crate::widget::HandleGeometry;

/// Something that can position the handle.
///
/// Implementations draw with whatever API they like; the selector only asks
/// them to place the handle at the given geometry. Calls must be idempotent:
/// the same geometry twice leaves the same picture.
pub trait HandleSurface {
    /// Move the handle to `geometry`.
    fn set_handle_geometry(&mut self, geometry: &HandleGeometry);
}

impl<S: HandleSurface + ?Sized> HandleSurface for &mut S {
    fn set_handle_geometry(&mut self, geometry: &HandleGeometry) {
        (**self).set_handle_geometry(geometry);
    }
}

impl<S: HandleSurface + ?Sized> HandleSurface for Box<S> {
    fn set_handle_geometry(&mut self, geometry: &HandleGeometry) {
        (**self).set_handle_geometry(geometry);
    }
}

/// Surface that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl HandleSurface for NullSurface {
    fn set_handle_geometry(&mut self, _geometry: &HandleGeometry) {}
}

/// Surface that keeps every geometry it was given, oldest first.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    frames: Vec<HandleGeometry>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded geometries.
    pub fn frames(&self) -> &[HandleGeometry] {
        &self.frames
    }

    /// The most recent geometry.
    pub fn latest(&self) -> Option<&HandleGeometry> {
        self.frames.last()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl HandleSurface for RecordingSurface {
    fn set_handle_geometry(&mut self, geometry: &HandleGeometry) {
        self.frames.push(*geometry);
    }
}
