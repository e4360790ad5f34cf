//! RangeBrush Core Library
//!
//! Platform-agnostic state and logic for an interactive range-selection
//! (brush) widget: a draggable handle over a bounded numeric axis.

pub mod config;
pub mod input;
pub mod label;
pub mod scale;
pub mod selection;
pub mod surface;
pub mod widget;

pub use config::{ConfigError, ConfigResult, SelectorConfig};
pub use input::{EventScript, Orientation, PointerEvent};
pub use label::LabelFormat;
pub use scale::{Domain, LinearScale, PixelRange};
pub use selection::Selection;
pub use surface::{HandleSurface, NullSurface, RecordingSurface};
pub use widget::{
    DragMode, HandleGeometry, Pennant, RangeSelector, SelectorOptions, DEFAULT_EXTENT_HEIGHT,
    DEFAULT_HIT_MARGIN,
};
