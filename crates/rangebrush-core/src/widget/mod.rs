//! The range-selection widget.
//!
//! - [`DragMode`]: which part of the selection a drag manipulates
//! - [`HandleGeometry`]: the rendered extent and grip, plus hit-testing
//! - [`RangeSelector`]: owns the selection and reacts to pointer events
//!
//! The selector never draws by itself. It hands geometry to a
//! [`HandleSurface`](crate::HandleSurface) after every change.

mod handles;
mod selector;
mod state;

pub use handles::{HandleGeometry, Pennant, DEFAULT_EXTENT_HEIGHT, DEFAULT_HIT_MARGIN};
pub use selector::{RangeSelector, SelectorOptions};
pub use state::DragMode;
