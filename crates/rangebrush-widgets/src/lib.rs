//! egui integration for the RangeBrush range selector.
//!
//! - **RetainedHandle**: a surface that keeps the latest handle geometry
//!   between frames
//! - **RangeBrush**: an egui widget that turns drag responses into selector
//!   pointer events and paints the retained handle

pub mod brush;

pub use brush::{BrushStyle, RangeBrush, RetainedHandle};

/// Standard colors used by the brush.
pub mod theme {
    use egui::Color32;

    /// Track background
    pub const TRACK: Color32 = Color32::from_rgb(241, 245, 249);
    /// Axis line and tick color
    pub const AXIS: Color32 = Color32::from_rgb(120, 120, 120);
    /// Selected span (translucent blue)
    pub const EXTENT: Color32 = Color32::from_rgba_premultiplied(15, 33, 62, 64);
    /// Grip color (blue)
    pub const HANDLE: Color32 = Color32::from_rgb(0, 0, 255);
    /// Grip label color
    pub const LABEL: Color32 = Color32::WHITE;
}
