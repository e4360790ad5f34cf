//! Handle geometry and hit-testing.

use super::state::DragMode;
use kurbo::{BezPath, Point, Rect, Size};

/// Default half-width of the resize hit-zone around each edge, in pixels.
pub const DEFAULT_HIT_MARGIN: f64 = 12.0;
/// Default height of the extent rectangle, in pixels.
pub const DEFAULT_EXTENT_HEIGHT: f64 = 300.0;

/// Pennant-shaped grip drawn above the low edge of the selection.
///
/// A wide body with a small tip pointing down at the edge. The outline is
/// not convex, so it is also exposed as two convex parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pennant {
    /// Point of the tip, sitting on the selection edge.
    pub anchor: Point,
    /// Rectangular body above the tip.
    pub body: Rect,
    /// Tip triangle: left base corner, apex, right base corner.
    pub tip: [Point; 3],
}

impl Pennant {
    /// Half-width of the body.
    pub const HALF_WIDTH: f64 = 80.0;
    /// Height of the body.
    pub const BODY_HEIGHT: f64 = 30.0;
    /// Half-width of the tip base.
    pub const TIP_HALF_WIDTH: f64 = 10.0;
    /// Height of the tip.
    pub const TIP_HEIGHT: f64 = 10.0;

    /// Create a pennant with its tip at `anchor`.
    pub fn at(anchor: Point) -> Self {
        let base_y = anchor.y - Self::TIP_HEIGHT;
        Self {
            anchor,
            body: Rect::new(
                anchor.x - Self::HALF_WIDTH,
                base_y - Self::BODY_HEIGHT,
                anchor.x + Self::HALF_WIDTH,
                base_y,
            ),
            tip: [
                Point::new(anchor.x - Self::TIP_HALF_WIDTH, base_y),
                anchor,
                Point::new(anchor.x + Self::TIP_HALF_WIDTH, base_y),
            ],
        }
    }

    /// Closed outline of the whole pennant.
    pub fn to_path(&self) -> BezPath {
        let [tip_left, apex, tip_right] = self.tip;
        let mut path = BezPath::new();
        path.move_to(apex);
        path.line_to(tip_left);
        path.line_to((self.body.x0, self.body.y1));
        path.line_to((self.body.x0, self.body.y0));
        path.line_to((self.body.x1, self.body.y0));
        path.line_to((self.body.x1, self.body.y1));
        path.line_to(tip_right);
        path.close_path();
        path
    }

    /// Where the label text is centred.
    pub fn label_anchor(&self) -> Point {
        self.body.center()
    }

    /// Bounding box of the pennant.
    pub fn bounds(&self) -> Rect {
        self.body.union_pt(self.anchor)
    }
}

/// Rendered state of the handle for one selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleGeometry {
    /// Pixel span of the selection, from the axis line down to the extent height.
    pub extent: Rect,
    /// Grip anchored on the low edge.
    pub grip: Pennant,
}

impl HandleGeometry {
    /// Build the geometry for a selection spanning `low_px..=high_px`.
    pub fn new(low_px: f64, high_px: f64, height: f64) -> Self {
        Self {
            extent: Rect::new(low_px, 0.0, high_px, height),
            grip: Pennant::at(Point::new(low_px, 0.0)),
        }
    }

    /// Pixel position of the low edge.
    pub fn position(&self) -> f64 {
        self.extent.x0
    }

    /// Size of the extent rectangle.
    pub fn size(&self) -> Size {
        self.extent.size()
    }

    /// Bounding box of everything drawn for the handle.
    pub fn bounds(&self) -> Rect {
        self.extent.union(self.grip.bounds())
    }

    /// Decide which drag a pointer-down at `pointer` starts.
    ///
    /// Each edge owns a resize zone of `margin` pixels on both sides. When
    /// the zones overlap the nearer edge wins; a tie on a collapsed
    /// selection is broken by which side of the edge the pointer is on.
    pub fn hit_test(&self, pointer: f64, margin: f64) -> DragMode {
        let low = self.extent.x0;
        let high = self.extent.x1;
        let to_low = (pointer - low).abs();
        let to_high = (pointer - high).abs();

        match (to_low <= margin, to_high <= margin) {
            (true, true) => {
                if to_low < to_high {
                    DragMode::ResizeLeft
                } else if to_high < to_low {
                    DragMode::ResizeRight
                } else if pointer < low {
                    DragMode::ResizeLeft
                } else {
                    DragMode::ResizeRight
                }
            }
            (true, false) => DragMode::ResizeLeft,
            (false, true) => DragMode::ResizeRight,
            (false, false) if pointer > low && pointer < high => DragMode::Move,
            (false, false) => DragMode::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Shape};

    #[test]
    fn test_pennant_outline() {
        let pennant = Pennant::at(Point::new(100.0, 0.0));
        let points: Vec<Point> = pennant
            .to_path()
            .elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect();

        let expected = [
            (0.0, 0.0),
            (-10.0, -10.0),
            (-80.0, -10.0),
            (-80.0, -40.0),
            (80.0, -40.0),
            (80.0, -10.0),
            (10.0, -10.0),
        ];
        assert_eq!(points.len(), expected.len());
        for (point, (dx, dy)) in points.iter().zip(expected) {
            assert!((point.x - (100.0 + dx)).abs() < f64::EPSILON);
            assert!((point.y - dy).abs() < f64::EPSILON);
        }
        assert!(matches!(
            pennant.to_path().elements().last(),
            Some(PathEl::ClosePath)
        ));
    }

    #[test]
    fn test_pennant_bounds() {
        let pennant = Pennant::at(Point::new(0.0, 0.0));
        assert_eq!(pennant.bounds(), Rect::new(-80.0, -40.0, 80.0, 0.0));
        assert_eq!(pennant.to_path().bounding_box(), pennant.bounds());
        assert_eq!(pennant.label_anchor(), Point::new(0.0, -25.0));
    }

    #[test]
    fn test_geometry_position_and_size() {
        let geometry = HandleGeometry::new(50.0, 200.0, 300.0);
        assert_eq!(geometry.position(), 50.0);
        assert_eq!(geometry.size(), Size::new(150.0, 300.0));
        assert_eq!(geometry.bounds(), Rect::new(-30.0, -40.0, 200.0, 300.0));
    }

    #[test]
    fn test_hit_test_edges_and_body() {
        let geometry = HandleGeometry::new(0.0, 500.0, 300.0);
        assert_eq!(geometry.hit_test(10.0, 12.0), DragMode::ResizeLeft);
        assert_eq!(geometry.hit_test(-5.0, 12.0), DragMode::ResizeLeft);
        assert_eq!(geometry.hit_test(495.0, 12.0), DragMode::ResizeRight);
        assert_eq!(geometry.hit_test(250.0, 12.0), DragMode::Move);
    }

    #[test]
    fn test_hit_test_outside() {
        let geometry = HandleGeometry::new(100.0, 200.0, 300.0);
        assert_eq!(geometry.hit_test(50.0, 12.0), DragMode::None);
        assert_eq!(geometry.hit_test(260.0, 12.0), DragMode::None);
    }

    #[test]
    fn test_hit_test_overlapping_zones_prefers_nearer_edge() {
        let geometry = HandleGeometry::new(100.0, 110.0, 300.0);
        assert_eq!(geometry.hit_test(103.0, 12.0), DragMode::ResizeLeft);
        assert_eq!(geometry.hit_test(108.0, 12.0), DragMode::ResizeRight);
    }

    #[test]
    fn test_hit_test_collapsed_selection() {
        let geometry = HandleGeometry::new(500.0, 500.0, 300.0);
        assert_eq!(geometry.hit_test(495.0, 12.0), DragMode::ResizeLeft);
        assert_eq!(geometry.hit_test(500.0, 12.0), DragMode::ResizeRight);
    }

    #[test]
    fn test_hit_test_zero_margin() {
        let geometry = HandleGeometry::new(100.0, 200.0, 300.0);
        assert_eq!(geometry.hit_test(100.0, 0.0), DragMode::ResizeLeft);
        assert_eq!(geometry.hit_test(101.0, 0.0), DragMode::Move);
    }
}
