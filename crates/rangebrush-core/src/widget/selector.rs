//! The range selector: selection state driven by pointer drags.

use super::handles::{HandleGeometry, DEFAULT_EXTENT_HEIGHT, DEFAULT_HIT_MARGIN};
use super::state::DragMode;
use crate::config::{ConfigError, ConfigResult, SelectorConfig};
use crate::input::PointerEvent;
use crate::scale::{Domain, LinearScale, PixelRange};
use crate::selection::Selection;
use crate::surface::HandleSurface;
use log::{debug, trace, warn};

/// Interaction and layout options of a selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorOptions {
    hit_margin: f64,
    extent_height: f64,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            hit_margin: DEFAULT_HIT_MARGIN,
            extent_height: DEFAULT_EXTENT_HEIGHT,
        }
    }
}

impl SelectorOptions {
    /// Create validated options.
    pub fn new(hit_margin: f64, extent_height: f64) -> ConfigResult<Self> {
        if !hit_margin.is_finite() || hit_margin < 0.0 {
            return Err(ConfigError::InvalidMargin(hit_margin));
        }
        if !extent_height.is_finite() || extent_height <= 0.0 {
            return Err(ConfigError::InvalidHeight(extent_height));
        }
        Ok(Self {
            hit_margin,
            extent_height,
        })
    }

    pub fn hit_margin(&self) -> f64 {
        self.hit_margin
    }

    pub fn extent_height(&self) -> f64 {
        self.extent_height
    }
}

/// Where a drag started.
#[derive(Debug, Clone, Copy)]
struct DragOrigin {
    /// Domain value under the pointer at pointer-down.
    value: f64,
    /// Selection at pointer-down.
    selection: Selection,
}

/// Interactive range selector.
///
/// Owns the selection and the current drag mode. Every mutation clamps the
/// selection into the domain, pushes new geometry to the surface and calls
/// the change callback once. Interaction never fails: malformed pointer
/// coordinates are clamped into the pixel range.
pub struct RangeSelector<S: HandleSurface> {
    scale: LinearScale,
    options: SelectorOptions,
    selection: Selection,
    drag: DragMode,
    origin: Option<DragOrigin>,
    geometry: HandleGeometry,
    surface: S,
    on_change: Box<dyn FnMut(Selection)>,
}

impl<S: HandleSurface> RangeSelector<S> {
    /// Create a selector with default options and render its initial handle.
    pub fn new<F>(
        domain: Domain,
        pixel_range: PixelRange,
        initial: Selection,
        surface: S,
        on_change: F,
    ) -> Self
    where
        F: FnMut(Selection) + 'static,
    {
        Self::with_options(
            LinearScale::new(domain, pixel_range),
            initial,
            SelectorOptions::default(),
            surface,
            on_change,
        )
    }

    /// Create a selector from a validated scale and options.
    pub fn with_options<F>(
        scale: LinearScale,
        initial: Selection,
        options: SelectorOptions,
        mut surface: S,
        on_change: F,
    ) -> Self
    where
        F: FnMut(Selection) + 'static,
    {
        let selection = initial.clamped_to(scale.domain());
        if selection != initial {
            debug!("Initial selection {:?} clamped to {:?}", initial, selection);
        }
        let geometry = Self::layout(&scale, &options, selection);
        surface.set_handle_geometry(&geometry);

        Self {
            scale,
            options,
            selection,
            drag: DragMode::None,
            origin: None,
            geometry,
            surface,
            on_change: Box::new(on_change),
        }
    }

    /// Create a selector from a configuration, validating it first.
    pub fn from_config<F>(config: &SelectorConfig, surface: S, on_change: F) -> ConfigResult<Self>
    where
        F: FnMut(Selection) + 'static,
    {
        let scale = config.scale()?;
        let options = config.options()?;
        Ok(Self::with_options(
            scale,
            config.initial_selection(),
            options,
            surface,
            on_change,
        ))
    }

    /// Current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Current drag mode.
    pub fn drag_mode(&self) -> DragMode {
        self.drag
    }

    pub fn scale(&self) -> LinearScale {
        self.scale
    }

    pub fn options(&self) -> SelectorOptions {
        self.options
    }

    /// Geometry last pushed to the surface.
    pub fn geometry(&self) -> &HandleGeometry {
        &self.geometry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Start a drag. Picks the drag mode from the handle's hit regions.
    ///
    /// Ignored while another drag is in progress.
    pub fn on_pointer_down(&mut self, pixel: f64) {
        if self.drag.is_active() {
            debug!("Ignoring pointer-down at {pixel} during {:?} drag", self.drag);
            return;
        }

        let pixel = self.sanitize(pixel);
        self.drag = self.edge_with_room(self.geometry.hit_test(pixel, self.options.hit_margin));
        self.origin = self.drag.is_active().then(|| DragOrigin {
            value: self.scale.to_domain(pixel),
            selection: self.selection,
        });
        debug!("Pointer down at {pixel}: {:?}", self.drag);
    }

    /// Continue a drag. No-op when no drag is in progress.
    pub fn on_pointer_move(&mut self, pixel: f64) {
        let Some(origin) = self.origin else {
            return;
        };

        let pixel = self.sanitize(pixel);
        let value = self.scale.to_domain(pixel);
        let domain = self.scale.domain();
        let current = self.selection;

        let next = match self.drag {
            DragMode::None => return,
            DragMode::ResizeLeft => {
                Selection::new(value.clamp(domain.min(), current.high), current.high)
            }
            DragMode::ResizeRight => {
                Selection::new(current.low, value.clamp(current.low, domain.max()))
            }
            DragMode::Move => origin
                .selection
                .translated_within(value - origin.value, domain),
        };

        trace!("Pointer move to {pixel} ({:?}): {:?}", self.drag, next);
        self.apply(next);
    }

    /// End the current drag.
    pub fn on_pointer_up(&mut self) {
        if self.drag.is_active() {
            debug!("Pointer up, ending {:?} drag", self.drag);
        }
        self.end_drag();
    }

    /// Abandon the current drag (pointer capture lost, window blurred, ...).
    pub fn on_pointer_cancel(&mut self) {
        if self.drag.is_active() {
            debug!("Pointer cancelled during {:?} drag", self.drag);
        }
        self.end_drag();
    }

    /// Dispatch a pointer event to the matching entry point.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.on_pointer_down(position),
            PointerEvent::Move { position } => self.on_pointer_move(position),
            PointerEvent::Up => self.on_pointer_up(),
            PointerEvent::Cancel => self.on_pointer_cancel(),
        }
    }

    /// Replace the selection programmatically. The value is ordered and
    /// clamped into the domain; the change callback fires once.
    ///
    /// A drag in progress is ended, so later moves cannot undo the change.
    pub fn set_selection(&mut self, selection: Selection) {
        let next = selection.clamped_to(self.scale.domain());
        if self.drag.is_active() {
            debug!("Selection set during {:?} drag, ending it", self.drag);
            self.end_drag();
        }
        debug!("Selection set to {:?}", next);
        self.apply(next);
    }

    /// A collapsed selection pinned to a domain end can only grow away from
    /// it: swap the resize edge that is blocked for the one that can move.
    fn edge_with_room(&self, mode: DragMode) -> DragMode {
        if !self.selection.is_collapsed() {
            return mode;
        }
        let domain = self.scale.domain();
        match mode {
            DragMode::ResizeRight if self.selection.high >= domain.max() => DragMode::ResizeLeft,
            DragMode::ResizeLeft if self.selection.low <= domain.min() => DragMode::ResizeRight,
            other => other,
        }
    }

    fn end_drag(&mut self) {
        self.drag = DragMode::None;
        self.origin = None;
    }

    fn sanitize(&self, pixel: f64) -> f64 {
        let (sanitized, changed) = self.scale.sanitize_pixel(pixel);
        if changed && !pixel.is_finite() {
            warn!("Malformed pointer coordinate {pixel}, using {sanitized}");
        } else if changed {
            trace!("Pointer coordinate {pixel} clamped to {sanitized}");
        }
        sanitized
    }

    fn apply(&mut self, next: Selection) {
        self.selection = next;
        self.geometry = Self::layout(&self.scale, &self.options, next);
        self.surface.set_handle_geometry(&self.geometry);
        (self.on_change)(next);
    }

    fn layout(scale: &LinearScale, options: &SelectorOptions, selection: Selection) -> HandleGeometry {
        HandleGeometry::new(
            scale.to_pixel(selection.low),
            scale.to_pixel(selection.high),
            options.extent_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Changes = Rc<RefCell<Vec<Selection>>>;

    fn demo_selector(initial: Selection) -> (RangeSelector<RecordingSurface>, Changes) {
        let changes: Changes = Rc::default();
        let sink = Rc::clone(&changes);
        let selector = RangeSelector::new(
            Domain::new(0.0, 50.0).unwrap(),
            PixelRange::new(0.0, 500.0).unwrap(),
            initial,
            RecordingSurface::new(),
            move |selection| sink.borrow_mut().push(selection),
        );
        (selector, changes)
    }

    fn assert_invariants(selector: &RangeSelector<RecordingSurface>) {
        let selection = selector.selection();
        let domain = selector.scale().domain();
        assert!(selection.low <= selection.high, "{selection:?} is inverted");
        assert!(selection.low >= domain.min(), "{selection:?} below domain");
        assert!(selection.high <= domain.max(), "{selection:?} above domain");
    }

    #[test]
    fn test_construction_renders_initial_geometry() {
        let (selector, changes) = demo_selector(Selection::new(5.0, 20.0));
        let frames = selector.surface().frames();
        assert_eq!(frames.len(), 1);
        assert!((frames[0].position() - 50.0).abs() < 1e-10);
        assert!((frames[0].size().width - 150.0).abs() < 1e-10);
        assert!(changes.borrow().is_empty());
        assert_eq!(selector.drag_mode(), DragMode::None);
    }

    #[test]
    fn test_construction_clamps_initial_selection() {
        let (selector, _) = demo_selector(Selection::new(500.0, 50.0));
        assert_eq!(selector.selection(), Selection::new(50.0, 50.0));
    }

    #[test]
    fn test_from_config_rejects_invalid_domain() {
        let config = SelectorConfig {
            domain: [50.0, 0.0],
            ..Default::default()
        };
        let result = RangeSelector::from_config(&config, RecordingSurface::new(), |_| {});
        assert!(matches!(result, Err(ConfigError::InvalidDomain { .. })));
    }

    #[test]
    fn test_from_config_rejects_invalid_pixel_range() {
        let config = SelectorConfig {
            pixel_range: [0.0, 0.0],
            ..Default::default()
        };
        let result = RangeSelector::from_config(&config, RecordingSurface::new(), |_| {});
        assert!(matches!(result, Err(ConfigError::InvalidPixelRange { .. })));
    }

    #[test]
    fn test_resize_left_scenario() {
        let (mut selector, changes) = demo_selector(Selection::new(0.0, 50.0));

        selector.on_pointer_down(10.0);
        assert_eq!(selector.drag_mode(), DragMode::ResizeLeft);

        selector.on_pointer_move(50.0);
        let selection = selector.selection();
        assert!((selection.low - 5.0).abs() < 1e-10);
        assert!((selection.high - 50.0).abs() < f64::EPSILON);

        let changes = changes.borrow();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0], selection);
    }

    #[test]
    fn test_move_clamps_at_boundary_scenario() {
        let (mut selector, changes) = demo_selector(Selection::new(0.0, 50.0));

        selector.on_pointer_down(250.0);
        assert_eq!(selector.drag_mode(), DragMode::Move);

        selector.on_pointer_move(300.0);
        assert_eq!(selector.selection(), Selection::new(0.0, 50.0));
        assert_eq!(changes.borrow().len(), 1);
    }

    #[test]
    fn test_resize_left_past_high_collapses() {
        let (mut selector, _) = demo_selector(Selection::new(0.0, 50.0));

        selector.on_pointer_down(10.0);
        selector.on_pointer_move(600.0);
        assert_eq!(selector.selection(), Selection::new(50.0, 50.0));
        assert_invariants(&selector);
    }

    #[test]
    fn test_resize_right_past_low_collapses() {
        let (mut selector, _) = demo_selector(Selection::new(10.0, 30.0));

        selector.on_pointer_down(305.0);
        assert_eq!(selector.drag_mode(), DragMode::ResizeRight);
        selector.on_pointer_move(20.0);
        assert_eq!(selector.selection(), Selection::new(10.0, 10.0));
    }

    #[test]
    fn test_move_preserves_width() {
        let (mut selector, _) = demo_selector(Selection::new(10.0, 20.0));

        selector.on_pointer_down(150.0);
        assert_eq!(selector.drag_mode(), DragMode::Move);
        for pixel in [160.0, 200.0, 180.0, 90.0, 130.0] {
            selector.on_pointer_move(pixel);
            assert!((selector.selection().width() - 10.0).abs() < 1e-9);
            assert_invariants(&selector);
        }
        // Offsets are measured from the pointer-down position.
        assert!((selector.selection().low - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_move_holds_width_at_boundary() {
        let (mut selector, _) = demo_selector(Selection::new(30.0, 40.0));

        selector.on_pointer_down(350.0);
        selector.on_pointer_move(480.0);
        assert_eq!(selector.selection(), Selection::new(40.0, 50.0));
        selector.on_pointer_move(-1000.0);
        assert_eq!(selector.selection(), Selection::new(0.0, 10.0));
    }

    #[test]
    fn test_move_recovers_after_overshoot() {
        let (mut selector, _) = demo_selector(Selection::new(30.0, 40.0));

        selector.on_pointer_down(350.0);
        selector.on_pointer_move(500.0);
        selector.on_pointer_move(340.0);
        let selection = selector.selection();
        assert!((selection.low - 29.0).abs() < 1e-9);
        assert!((selection.high - 39.0).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_down_outside_is_noop_drag() {
        let (mut selector, changes) = demo_selector(Selection::new(10.0, 20.0));

        selector.on_pointer_down(400.0);
        assert_eq!(selector.drag_mode(), DragMode::None);
        selector.on_pointer_move(450.0);
        assert_eq!(selector.selection(), Selection::new(10.0, 20.0));
        assert!(changes.borrow().is_empty());
        assert_eq!(selector.surface().frames().len(), 1);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let (mut selector, changes) = demo_selector(Selection::new(10.0, 20.0));
        selector.on_pointer_move(150.0);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_pointer_up_resets_drag() {
        let (mut selector, changes) = demo_selector(Selection::new(0.0, 50.0));

        selector.on_pointer_down(10.0);
        selector.on_pointer_up();
        assert_eq!(selector.drag_mode(), DragMode::None);
        selector.on_pointer_move(100.0);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_pointer_cancel_resets_drag() {
        let (mut selector, _) = demo_selector(Selection::new(0.0, 50.0));

        selector.on_pointer_down(250.0);
        selector.on_pointer_cancel();
        assert_eq!(selector.drag_mode(), DragMode::None);
    }

    #[test]
    fn test_second_pointer_down_is_ignored() {
        let (mut selector, _) = demo_selector(Selection::new(0.0, 50.0));

        selector.on_pointer_down(10.0);
        selector.on_pointer_down(250.0);
        assert_eq!(selector.drag_mode(), DragMode::ResizeLeft);
    }

    #[test]
    fn test_change_callback_once_per_move() {
        let (mut selector, changes) = demo_selector(Selection::new(0.0, 50.0));

        selector.on_pointer_down(490.0);
        for pixel in [480.0, 470.0, 460.0] {
            selector.on_pointer_move(pixel);
        }
        assert_eq!(changes.borrow().len(), 3);
        // One initial render plus one per move.
        assert_eq!(selector.surface().frames().len(), 4);
    }

    #[test]
    fn test_geometry_tracks_selection() {
        let (mut selector, _) = demo_selector(Selection::new(0.0, 50.0));

        selector.on_pointer_down(5.0);
        selector.on_pointer_move(120.0);
        let latest = selector.surface().latest().unwrap();
        assert!((latest.position() - 120.0).abs() < 1e-9);
        assert_eq!(latest, selector.geometry());
    }

    #[test]
    fn test_malformed_pixels_are_clamped() {
        let (mut selector, _) = demo_selector(Selection::new(10.0, 40.0));

        selector.on_pointer_down(100.0);
        assert_eq!(selector.drag_mode(), DragMode::ResizeLeft);
        selector.on_pointer_move(f64::NAN);
        assert_eq!(selector.selection(), Selection::new(0.0, 40.0));
        selector.on_pointer_move(f64::INFINITY);
        assert_eq!(selector.selection(), Selection::new(40.0, 40.0));
        assert_invariants(&selector);
    }

    #[test]
    fn test_handle_event_dispatch() {
        let (mut selector, changes) = demo_selector(Selection::new(0.0, 50.0));

        selector.handle_event(PointerEvent::Down { position: 10.0 });
        selector.handle_event(PointerEvent::Move { position: 50.0 });
        selector.handle_event(PointerEvent::Up);
        assert_eq!(selector.drag_mode(), DragMode::None);
        assert_eq!(changes.borrow().len(), 1);

        selector.handle_event(PointerEvent::Down { position: 300.0 });
        assert_eq!(selector.drag_mode(), DragMode::Move);
        selector.handle_event(PointerEvent::Cancel);
        assert_eq!(selector.drag_mode(), DragMode::None);
    }

    #[test]
    fn test_set_selection_clamps_and_notifies() {
        let (mut selector, changes) = demo_selector(Selection::new(0.0, 50.0));

        selector.set_selection(Selection::new(70.0, 25.0));
        assert_eq!(selector.selection(), Selection::new(25.0, 50.0));
        assert_eq!(changes.borrow().as_slice(), &[Selection::new(25.0, 50.0)]);
    }

    #[test]
    fn test_collapsed_at_domain_max_drags_left() {
        for press in [500.0, 505.0, 540.0, 495.0] {
            let (mut selector, changes) = demo_selector(Selection::new(500.0, 50.0));
            selector.on_pointer_down(press);
            assert_eq!(selector.drag_mode(), DragMode::ResizeLeft, "press at {press}");

            selector.on_pointer_move(200.0);
            assert_eq!(selector.selection(), Selection::new(20.0, 50.0));
            assert_eq!(changes.borrow().len(), 1);
        }
    }

    #[test]
    fn test_collapsed_at_domain_min_drags_right() {
        let (mut selector, _) = demo_selector(Selection::new(0.0, 0.0));
        selector.on_pointer_down(-30.0);
        assert_eq!(selector.drag_mode(), DragMode::ResizeRight);

        selector.on_pointer_move(100.0);
        assert_eq!(selector.selection(), Selection::new(0.0, 10.0));
    }

    #[test]
    fn test_set_selection_ends_active_drag() {
        let (mut selector, changes) = demo_selector(Selection::new(10.0, 20.0));
        selector.on_pointer_down(150.0);
        assert_eq!(selector.drag_mode(), DragMode::Move);

        selector.set_selection(Selection::new(30.0, 40.0));
        assert_eq!(selector.drag_mode(), DragMode::None);

        selector.on_pointer_move(200.0);
        selector.on_pointer_up();
        assert_eq!(selector.selection(), Selection::new(30.0, 40.0));
        assert_eq!(changes.borrow().as_slice(), &[Selection::new(30.0, 40.0)]);
    }

    #[test]
    fn test_instances_are_independent() {
        let (mut first, _) = demo_selector(Selection::new(0.0, 50.0));
        let (second, _) = demo_selector(Selection::new(0.0, 50.0));

        first.on_pointer_down(10.0);
        first.on_pointer_move(200.0);
        assert_eq!(second.selection(), Selection::new(0.0, 50.0));
        assert_eq!(second.drag_mode(), DragMode::None);
    }

    #[test]
    fn test_random_drag_sequences_keep_invariants() {
        let (mut selector, _) = demo_selector(Selection::new(12.0, 31.0));

        // Deterministic pseudo-random walk over and beyond the pixel range.
        let mut seed: u32 = 0x9E37_79B9;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed as f64 / u32::MAX as f64 * 700.0 - 100.0
        };

        for _ in 0..200 {
            selector.on_pointer_down(next());
            let mode = selector.drag_mode();
            let width = selector.selection().width();
            for _ in 0..10 {
                selector.on_pointer_move(next());
                assert_invariants(&selector);
                if mode == DragMode::Move {
                    assert!((selector.selection().width() - width).abs() < 1e-9);
                }
            }
            selector.on_pointer_up();
        }
    }
}
