//! Pointer events delivered to the selector.

use crate::config::{ConfigError, ConfigResult};
use crate::surface::HandleSurface;
use crate::widget::RangeSelector;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Pointer event along the selector axis.
///
/// Positions are pixel coordinates on the axis, in the same space as the
/// selector's pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { position: f64 },
    Move { position: f64 },
    Up,
    /// The platform took the pointer away mid-drag.
    Cancel,
}

impl PointerEvent {
    /// Pixel position carried by the event, if any.
    pub fn position(&self) -> Option<f64> {
        match self {
            Self::Down { position } | Self::Move { position } => Some(*position),
            Self::Up | Self::Cancel => None,
        }
    }

    /// Pointer-down at a 2-D screen point.
    pub fn down_at(point: Point, orientation: Orientation) -> Self {
        Self::Down {
            position: orientation.project(point),
        }
    }

    /// Pointer-move to a 2-D screen point.
    pub fn move_to(point: Point, orientation: Orientation) -> Self {
        Self::Move {
            position: orientation.project(point),
        }
    }
}

/// Direction of the selector axis on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Project a screen point onto the axis.
    pub fn project(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }
}

/// An ordered list of pointer events, e.g. a recorded drag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventScript {
    events: Vec<PointerEvent>,
}

impl EventScript {
    pub fn new(events: Vec<PointerEvent>) -> Self {
        Self { events }
    }

    /// Parse a script from a JSON array of events.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a script file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[PointerEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Feed every event to `selector`, in order.
    pub fn replay<S: HandleSurface>(&self, selector: &mut RangeSelector<S>) {
        log::debug!("Replaying {} pointer events", self.events.len());
        for event in &self.events {
            selector.handle_event(*event);
        }
    }
}

impl From<Vec<PointerEvent>> for EventScript {
    fn from(events: Vec<PointerEvent>) -> Self {
        Self::new(events)
    }
}
