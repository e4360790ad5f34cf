//! SVG rendering surface.

use crate::renderer::{RenderContext, RenderError, RenderResult};
use kurbo::Rect;
use peniko::Color;
use rangebrush_core::{HandleGeometry, HandleSurface};
use std::fmt::Write;

/// Height reserved under the extent for tick marks and tick labels.
const AXIS_HEIGHT: f64 = 24.0;
/// Length of a tick mark.
const TICK_SIZE: f64 = 6.0;

/// Colors and sizes used by [`SvgSurface`].
#[derive(Debug, Clone, Copy)]
pub struct SvgStyle {
    /// Background of the whole pixel range.
    pub track: Color,
    /// Selected span.
    pub extent: Color,
    /// Grip fill.
    pub handle_fill: Color,
    /// Grip outline.
    pub handle_stroke: Color,
    /// Axis line and ticks.
    pub axis: Color,
    /// Label text inside the grip.
    pub label: Color,
    /// Font size for labels, in pixels.
    pub font_size: f64,
    /// Empty space around the drawing.
    pub padding: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            track: Color::from_rgba8(241, 245, 249, 255),
            extent: Color::from_rgba8(59, 130, 246, 64),
            handle_fill: Color::from_rgba8(0, 0, 255, 255),
            handle_stroke: Color::from_rgba8(0, 0, 255, 255),
            axis: Color::from_rgba8(60, 60, 60, 255),
            label: Color::from_rgba8(255, 255, 255, 255),
            font_size: 12.0,
            padding: 8.0,
        }
    }
}

/// Headless surface that remembers the latest handle geometry and renders
/// the selector as an SVG document on demand.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    style: SvgStyle,
    geometry: Option<HandleGeometry>,
    updates: usize,
}

impl HandleSurface for SvgSurface {
    fn set_handle_geometry(&mut self, geometry: &HandleGeometry) {
        self.geometry = Some(*geometry);
        self.updates += 1;
    }
}

impl SvgSurface {
    /// Create a surface with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style.
    pub fn with_style(mut self, style: SvgStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &SvgStyle {
        &self.style
    }

    /// Latest geometry set by the selector.
    pub fn geometry(&self) -> Option<&HandleGeometry> {
        self.geometry.as_ref()
    }

    /// How many times the geometry was set.
    pub fn updates(&self) -> usize {
        self.updates
    }

    /// Render the current state as a standalone SVG document.
    pub fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
        let geometry = self.geometry.as_ref().ok_or(RenderError::NoGeometry)?;
        let style = &self.style;
        let range = ctx.scale.range();
        let axis_y = geometry.extent.y1;

        let track = Rect::new(range.min(), geometry.extent.y0, range.max(), axis_y);
        let axis_area = Rect::new(range.min(), axis_y, range.max(), axis_y + AXIS_HEIGHT);
        let bounds = geometry
            .bounds()
            .union(track)
            .union(axis_area)
            .inflate(style.padding, style.padding);

        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            bounds.width(),
            bounds.height(),
            bounds.x0,
            bounds.y0,
            bounds.width(),
            bounds.height(),
        )?;

        let (fill, opacity) = paint(style.track);
        writeln!(
            svg,
            r#"  <rect class="track" x="{}" y="{}" width="{}" height="{}" fill="{fill}" fill-opacity="{opacity}"/>"#,
            track.x0,
            track.y0,
            track.width(),
            track.height(),
        )?;

        self.write_axis(&mut svg, ctx, axis_y)?;
        self.write_brush(&mut svg, geometry, ctx.label.as_deref())?;

        svg.push_str("</svg>\n");
        log::trace!("Rendered SVG ({} bytes)", svg.len());
        Ok(svg)
    }

    fn write_axis(&self, svg: &mut String, ctx: &RenderContext, axis_y: f64) -> RenderResult<()> {
        let style = &self.style;
        let range = ctx.scale.range();
        let (stroke, opacity) = paint(style.axis);

        writeln!(
            svg,
            r#"  <g class="axis" stroke="{stroke}" stroke-opacity="{opacity}" font-size="{}">"#,
            style.font_size,
        )?;
        writeln!(
            svg,
            r#"    <line class="domain" x1="{}" y1="{axis_y}" x2="{}" y2="{axis_y}"/>"#,
            range.min(),
            range.max(),
        )?;
        for tick in ctx.scale.ticks(ctx.tick_count) {
            let x = ctx.scale.to_pixel(tick);
            writeln!(
                svg,
                r#"    <g class="tick"><line x1="{x}" y1="{axis_y}" x2="{x}" y2="{}"/><text x="{x}" y="{}" text-anchor="middle" stroke="none" fill="{stroke}">{}</text></g>"#,
                axis_y + TICK_SIZE,
                axis_y + TICK_SIZE + style.font_size,
                format_tick(tick),
            )?;
        }
        svg.push_str("  </g>\n");
        Ok(())
    }

    fn write_brush(
        &self,
        svg: &mut String,
        geometry: &HandleGeometry,
        label: Option<&str>,
    ) -> RenderResult<()> {
        let style = &self.style;
        let (extent_fill, extent_opacity) = paint(style.extent);
        let (handle_fill, handle_opacity) = paint(style.handle_fill);
        let (handle_stroke, _) = paint(style.handle_stroke);

        svg.push_str("  <g class=\"brush\">\n");
        writeln!(
            svg,
            r#"    <rect class="extent" x="{}" y="{}" width="{}" height="{}" fill="{extent_fill}" fill-opacity="{extent_opacity}"/>"#,
            geometry.extent.x0,
            geometry.extent.y0,
            geometry.extent.width(),
            geometry.extent.height(),
        )?;
        writeln!(
            svg,
            r#"    <path class="handle" d="{}" fill="{handle_fill}" fill-opacity="{handle_opacity}" stroke="{handle_stroke}" stroke-width="1"/>"#,
            geometry.grip.to_path().to_svg(),
        )?;
        if let Some(label) = label {
            let anchor = geometry.grip.label_anchor();
            let (text_fill, _) = paint(style.label);
            writeln!(
                svg,
                r#"    <text class="label" x="{}" y="{}" text-anchor="middle" dominant-baseline="central" font-size="{}" fill="{text_fill}">{}</text>"#,
                anchor.x,
                anchor.y,
                style.font_size,
                escape(label),
            )?;
        }
        svg.push_str("  </g>\n");
        Ok(())
    }
}

/// Split a color into an SVG hex color and an opacity.
fn paint(color: Color) -> (String, f64) {
    let rgba = color.to_rgba8();
    (
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b),
        f64::from(rgba.a) / 255.0,
    )
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
