//! The range brush widget: a selector painted and driven by egui.

use egui::{
    pos2, vec2, Align2, Color32, CornerRadius, CursorIcon, FontId, Pos2, Rect, Response, Sense,
    Shape, Stroke, Ui, Widget,
};
use rangebrush_core::{
    DragMode, HandleGeometry, HandleSurface, LabelFormat, Orientation, Pennant, PointerEvent,
    RangeSelector,
};

use crate::theme;

/// Space above the axis line reserved for the grip.
const GRIP_SPACE: f64 = Pennant::BODY_HEIGHT + Pennant::TIP_HEIGHT;
/// Space below the extent for tick marks and labels.
const AXIS_SPACE: f64 = 24.0;
/// Length of a tick mark.
const TICK_SIZE: f32 = 5.0;

/// Surface that keeps the most recent handle geometry until the next paint.
#[derive(Debug, Clone, Default)]
pub struct RetainedHandle {
    geometry: Option<HandleGeometry>,
}

impl RetainedHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Geometry to paint, if the selector has rendered at least once.
    pub fn geometry(&self) -> Option<&HandleGeometry> {
        self.geometry.as_ref()
    }
}

impl HandleSurface for RetainedHandle {
    fn set_handle_geometry(&mut self, geometry: &HandleGeometry) {
        self.geometry = Some(*geometry);
    }
}

/// Style configuration for the brush.
#[derive(Clone)]
pub struct BrushStyle {
    pub track: Color32,
    pub axis: Color32,
    pub extent: Color32,
    pub handle: Color32,
    pub label: Color32,
    /// Approximate number of axis ticks (0 hides them)
    pub tick_count: usize,
    pub font_size: f32,
}

impl Default for BrushStyle {
    fn default() -> Self {
        Self {
            track: theme::TRACK,
            axis: theme::AXIS,
            extent: theme::EXTENT,
            handle: theme::HANDLE,
            label: theme::LABEL,
            tick_count: 10,
            font_size: 12.0,
        }
    }
}

/// A horizontal range brush bound to a [`RangeSelector`].
///
/// The selector's pixel range is laid out left to right inside the
/// allocated rect, with room on both sides for the grip overhang.
pub struct RangeBrush<'a> {
    selector: &'a mut RangeSelector<RetainedHandle>,
    label: Option<&'a LabelFormat>,
    style: BrushStyle,
}

impl<'a> RangeBrush<'a> {
    /// Create a new brush for `selector`.
    pub fn new(selector: &'a mut RangeSelector<RetainedHandle>) -> Self {
        Self {
            selector,
            label: None,
            style: BrushStyle::default(),
        }
    }

    /// Show the low edge in the grip using `format`.
    pub fn label(mut self, format: &'a LabelFormat) -> Self {
        self.label = Some(format);
        self
    }

    /// Set the brush style.
    pub fn style(mut self, style: BrushStyle) -> Self {
        self.style = style;
        self
    }

    /// Show the brush. The response is marked changed when the selection moved.
    pub fn show(mut self, ui: &mut Ui) -> Response {
        let range = self.selector.scale().range();
        let extent_height = self.selector.options().extent_height();
        let size = vec2(
            (range.span() + 2.0 * Pennant::HALF_WIDTH) as f32,
            (GRIP_SPACE + extent_height + AXIS_SPACE) as f32,
        );
        let (rect, mut response) = ui.allocate_exact_size(size, Sense::drag());
        let origin = axis_origin(rect, range.min());

        let before = self.selector.selection();
        self.dispatch(ui, &response, origin);
        if self.selector.selection() != before {
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, origin);
        }

        let cursor = if self.selector.drag_mode().is_active() {
            CursorIcon::Grabbing
        } else {
            response
                .hover_pos()
                .map(|pos| {
                    let local = to_local(origin, pos);
                    self.selector
                        .geometry()
                        .hit_test(local.x, self.selector.options().hit_margin())
                })
                .map_or(CursorIcon::Default, cursor_for)
        };
        response.on_hover_cursor(cursor)
    }

    /// Translate this frame's drag state into selector pointer events.
    fn dispatch(&mut self, ui: &Ui, response: &Response, origin: Pos2) {
        if response.drag_started() {
            // Drags start after the pointer travelled a little; use the press
            // position so the hit test sees where the user actually clicked.
            let press = ui
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            if let Some(pos) = press {
                self.selector.handle_event(PointerEvent::down_at(
                    to_local(origin, pos),
                    Orientation::Horizontal,
                ));
            }
        }

        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.selector.handle_event(PointerEvent::move_to(
                    to_local(origin, pos),
                    Orientation::Horizontal,
                ));
            }
        }

        if response.drag_stopped() {
            self.selector.handle_event(PointerEvent::Up);
        } else if !response.dragged() && self.selector.drag_mode().is_active() {
            log::debug!("Brush lost its drag without a release, cancelling");
            self.selector.handle_event(PointerEvent::Cancel);
        }
    }

    fn paint(&self, ui: &Ui, rect: Rect, origin: Pos2) {
        let painter = ui.painter_at(rect);
        let style = &self.style;
        let scale = self.selector.scale();
        let range = scale.range();
        let geometry = self
            .selector
            .surface()
            .geometry()
            .unwrap_or_else(|| self.selector.geometry());

        let axis_y = geometry.extent.y1;
        let track = kurbo::Rect::new(range.min(), geometry.extent.y0, range.max(), axis_y);
        painter.rect_filled(to_screen_rect(origin, track), CornerRadius::ZERO, style.track);
        painter.rect_filled(
            to_screen_rect(origin, geometry.extent),
            CornerRadius::ZERO,
            style.extent,
        );

        // Axis
        let axis_stroke = Stroke::new(1.0, style.axis);
        painter.line_segment(
            [
                to_screen(origin, kurbo::Point::new(range.min(), axis_y)),
                to_screen(origin, kurbo::Point::new(range.max(), axis_y)),
            ],
            axis_stroke,
        );
        for tick in scale.ticks(style.tick_count) {
            let top = to_screen(origin, kurbo::Point::new(scale.to_pixel(tick), axis_y));
            let bottom = top + vec2(0.0, TICK_SIZE);
            painter.line_segment([top, bottom], axis_stroke);
            painter.text(
                bottom,
                Align2::CENTER_TOP,
                format!("{tick}"),
                FontId::proportional(style.font_size - 2.0),
                style.axis,
            );
        }

        // Grip outline is concave: fill body and tip as two convex parts.
        let grip = &geometry.grip;
        painter.rect_filled(
            to_screen_rect(origin, grip.body),
            CornerRadius::ZERO,
            style.handle,
        );
        painter.add(Shape::convex_polygon(
            grip.tip.iter().map(|p| to_screen(origin, *p)).collect(),
            style.handle,
            Stroke::NONE,
        ));

        if let Some(format) = self.label {
            painter.text(
                to_screen(origin, grip.label_anchor()),
                Align2::CENTER_CENTER,
                format.format(self.selector.selection().low),
                FontId::proportional(style.font_size),
                style.label,
            );
        }
    }
}

impl Widget for RangeBrush<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui)
    }
}

/// Screen position of selector pixel `(range_min, 0)` inside `rect`.
fn axis_origin(rect: Rect, range_min: f64) -> Pos2 {
    rect.min + vec2(
        (Pennant::HALF_WIDTH - range_min) as f32,
        GRIP_SPACE as f32,
    )
}

fn to_screen(origin: Pos2, point: kurbo::Point) -> Pos2 {
    pos2(origin.x + point.x as f32, origin.y + point.y as f32)
}

fn to_screen_rect(origin: Pos2, rect: kurbo::Rect) -> Rect {
    Rect::from_min_max(
        to_screen(origin, kurbo::Point::new(rect.x0, rect.y0)),
        to_screen(origin, kurbo::Point::new(rect.x1, rect.y1)),
    )
}

fn to_local(origin: Pos2, pos: Pos2) -> kurbo::Point {
    kurbo::Point::new(f64::from(pos.x - origin.x), f64::from(pos.y - origin.y))
}

/// Hover cursor for the drag a press would start.
fn cursor_for(mode: DragMode) -> CursorIcon {
    match mode {
        DragMode::ResizeLeft | DragMode::ResizeRight => CursorIcon::ResizeHorizontal,
        DragMode::Move => CursorIcon::Grab,
        DragMode::None => CursorIcon::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangebrush_core::{Domain, PixelRange, Selection};

    fn demo_selector() -> RangeSelector<RetainedHandle> {
        RangeSelector::new(
            Domain::new(0.0, 50.0).unwrap(),
            PixelRange::new(0.0, 500.0).unwrap(),
            Selection::new(0.0, 50.0),
            RetainedHandle::new(),
            |_| {},
        )
    }

    #[test]
    fn test_retained_handle_holds_latest_geometry() {
        let mut selector = demo_selector();
        assert_eq!(selector.surface().geometry(), Some(selector.geometry()));

        selector.set_selection(Selection::new(10.0, 20.0));
        let retained = selector.surface().geometry().unwrap();
        assert!((retained.position() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_local_screen_roundtrip() {
        let rect = Rect::from_min_size(pos2(10.0, 20.0), vec2(660.0, 364.0));
        let origin = axis_origin(rect, 0.0);
        assert_eq!(origin, pos2(90.0, 60.0));

        let local = to_local(origin, pos2(140.0, 60.0));
        assert!((local.x - 50.0).abs() < 1e-6);
        assert_eq!(to_screen(origin, local), pos2(140.0, 60.0));
    }

    #[test]
    fn test_cursor_for_modes() {
        assert_eq!(cursor_for(DragMode::ResizeLeft), CursorIcon::ResizeHorizontal);
        assert_eq!(cursor_for(DragMode::Move), CursorIcon::Grab);
        assert_eq!(cursor_for(DragMode::None), CursorIcon::Default);
    }

    #[test]
    fn test_brush_allocates_axis_and_grip_space() {
        let ctx = egui::Context::default();
        let mut selector = demo_selector();
        let mut allocated = None;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = RangeBrush::new(&mut selector).show(ui);
                allocated = Some(response.rect.size());
                assert!(!response.changed());
            });
        });

        assert_eq!(allocated, Some(vec2(660.0, 364.0)));
        assert_eq!(selector.drag_mode(), DragMode::None);
    }
}
