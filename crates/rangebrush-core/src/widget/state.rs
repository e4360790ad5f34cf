//! Drag state definitions.

use serde::{Deserialize, Serialize};

/// Which part of the selection is being manipulated by the current drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    /// No drag in progress (initial and terminal state of every drag cycle).
    #[default]
    None,
    /// Translating the whole selection.
    Move,
    /// Dragging the low edge.
    ResizeLeft,
    /// Dragging the high edge.
    ResizeRight,
}

impl DragMode {
    /// Check if a drag is in progress.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Check if the drag changes the selection width.
    pub fn is_resize(self) -> bool {
        matches!(self, Self::ResizeLeft | Self::ResizeRight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert_eq!(DragMode::default(), DragMode::None);
        assert!(!DragMode::default().is_active());
    }

    #[test]
    fn test_predicates() {
        assert!(DragMode::Move.is_active());
        assert!(!DragMode::Move.is_resize());
        assert!(DragMode::ResizeLeft.is_resize());
        assert!(DragMode::ResizeRight.is_active());
    }
}
