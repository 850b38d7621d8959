use tracing::trace;

use crate::core::{ChartGeometry, Entity, format_axis_value, palette_color};
use crate::error::ChartResult;
use crate::host::EditorHost;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::ChartEditor;
use super::render_style::{RenderStyle, validate_render_style};

impl<R: Renderer, H: EditorHost> ChartEditor<R, H> {
    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.render_style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        validate_render_style(style)?;
        self.render_style = style;
        Ok(())
    }

    /// Materializes the current state into backend-agnostic primitives.
    ///
    /// Hidden entities are skipped; the dragged point is drawn enlarged with a
    /// border, and full-screen mode adds a legend in the right margin.
    pub fn render_frame(&self) -> ChartResult<RenderFrame> {
        let geometry = self.geometry()?;
        let style = self.render_style;
        let plot = geometry.plot_area();
        let mut frame = RenderFrame::new(self.viewport()).with_rect(RectPrimitive::new(
            plot.left,
            plot.top,
            plot.width,
            plot.height,
            style.plot_background_color,
        ));

        for tick in geometry.grid_ticks() {
            let y = geometry.y_for_value(tick);
            frame = frame
                .with_line(LinePrimitive::new(
                    plot.left,
                    y,
                    plot.right(),
                    y,
                    style.grid_line_width_px,
                    style.grid_line_color,
                ))
                .with_text(TextPrimitive::new(
                    format_axis_value(tick),
                    plot.left - style.axis_label_padding_px,
                    y,
                    style.axis_label_font_size_px,
                    style.axis_label_color,
                    TextHAlign::Right,
                ));
        }

        for (index, name) in self.state.features.iter().enumerate() {
            let x = geometry.x_for_index(index);
            frame = frame.with_line(LinePrimitive::new(
                x,
                plot.top,
                x,
                plot.bottom(),
                style.grid_line_width_px,
                style.feature_line_color,
            ));
            if !name.is_empty() {
                frame = frame.with_text(TextPrimitive::new(
                    name.clone(),
                    x,
                    plot.bottom() + style.feature_label_offset_px,
                    style.feature_label_font_size_px,
                    style.feature_label_color,
                    TextHAlign::Center,
                ));
            }
        }

        for (ordinal, entity) in self.state.entities.values().enumerate() {
            if entity.visible {
                frame = self.push_entity_series(frame, &geometry, entity, ordinal);
            }
        }

        if self.layout.is_full_screen() {
            frame = self.push_legend(frame, plot.right());
        }

        trace!(
            lines = frame.lines.len(),
            circles = frame.circles.len(),
            texts = frame.texts.len(),
            "built render frame"
        );
        Ok(frame)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.render_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders into a context owned by the host toolkit's draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    fn push_entity_series(
        &self,
        mut frame: RenderFrame,
        geometry: &ChartGeometry,
        entity: &Entity,
        ordinal: usize,
    ) -> RenderFrame {
        let style = self.render_style;
        let color = entity_color(entity, ordinal);
        let points: Vec<(f64, f64)> = entity
            .values
            .iter()
            .enumerate()
            .map(|(index, value)| (geometry.x_for_index(index), geometry.y_for_value(*value)))
            .collect();

        for pair in points.windows(2) {
            let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
            frame = frame.with_line(LinePrimitive::new(
                x1,
                y1,
                x2,
                y2,
                style.series_line_width_px,
                color,
            ));
        }

        let active_index = self
            .drag
            .target()
            .filter(|target| target.entity_id == entity.id)
            .map(|target| target.feature_index);
        let radius = self.config.point_radius_px;
        for (index, (x, y)) in points.into_iter().enumerate() {
            let circle = if active_index == Some(index) {
                CirclePrimitive::new(x, y, radius * style.active_point_radius_scale, color)
                    .with_border(
                        style.active_point_border_color,
                        style.active_point_border_width_px,
                    )
            } else {
                CirclePrimitive::new(x, y, radius, color)
            };
            frame = frame.with_circle(circle);
        }
        frame
    }

    /// One row per entity; hidden entities are listed dimmed.
    fn push_legend(&self, mut frame: RenderFrame, plot_right: f64) -> RenderFrame {
        let style = self.render_style;
        let margins = self.margins();
        let swatch_x = plot_right + style.legend_inset_px;
        let label_x = swatch_x + style.legend_swatch_size_px + 6.0;

        for (ordinal, entity) in self.state.entities.values().enumerate() {
            let row_center = margins.top + style.legend_row_height_px * (ordinal as f64 + 0.5);
            let alpha = if entity.visible { 1.0 } else { 0.35 };
            frame = frame.with_rect(RectPrimitive::new(
                swatch_x,
                row_center - style.legend_swatch_size_px / 2.0,
                style.legend_swatch_size_px,
                style.legend_swatch_size_px,
                entity_color(entity, ordinal).with_alpha(alpha),
            ));
            if !entity.name.is_empty() {
                frame = frame.with_text(TextPrimitive::new(
                    entity.name.clone(),
                    label_x,
                    row_center,
                    style.legend_font_size_px,
                    style.legend_label_color.with_alpha(alpha),
                    TextHAlign::Left,
                ));
            }
        }
        frame
    }
}

fn entity_color(entity: &Entity, ordinal: usize) -> Color {
    Color::from_hex(&entity.color)
        .or_else(|_| Color::from_hex(palette_color(ordinal as u64)))
        .unwrap_or(Color::rgb(0.0, 0.0, 0.0))
}
