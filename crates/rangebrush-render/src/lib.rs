//! RangeBrush Render Library
//!
//! Rendering surfaces for the range selector. The default implementation
//! produces standalone SVG documents and needs no GPU or window.

mod renderer;
mod svg;

pub use renderer::{RenderContext, RenderError, RenderResult, DEFAULT_TICK_COUNT};
pub use svg::{SvgStyle, SvgSurface};
