use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual tokens used when materializing a `RenderFrame`.
///
/// Entity colors come from the data itself; everything else is styled here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub plot_background_color: Color,
    pub grid_line_color: Color,
    pub grid_line_width_px: f64,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    /// Gap between the plot's left edge and right-aligned tick labels.
    pub axis_label_padding_px: f64,
    pub feature_line_color: Color,
    pub feature_label_color: Color,
    pub feature_label_font_size_px: f64,
    /// Offset of feature labels below the plot bottom.
    pub feature_label_offset_px: f64,
    pub series_line_width_px: f64,
    pub active_point_radius_scale: f64,
    pub active_point_border_color: Color,
    pub active_point_border_width_px: f64,
    pub legend_label_color: Color,
    pub legend_font_size_px: f64,
    pub legend_swatch_size_px: f64,
    pub legend_row_height_px: f64,
    /// Horizontal gap between the plot's right edge and the legend column.
    pub legend_inset_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            plot_background_color: Color::rgb(0.98, 0.98, 0.99),
            grid_line_color: Color::rgb(0.89, 0.92, 0.95),
            grid_line_width_px: 1.0,
            axis_label_color: Color::rgb(0.10, 0.12, 0.16),
            axis_label_font_size_px: 12.0,
            axis_label_padding_px: 8.0,
            feature_line_color: Color::rgb(0.82, 0.84, 0.88),
            feature_label_color: Color::rgb(0.10, 0.12, 0.16),
            feature_label_font_size_px: 12.0,
            feature_label_offset_px: 20.0,
            series_line_width_px: 2.0,
            active_point_radius_scale: 1.4,
            active_point_border_color: Color::rgb(1.0, 1.0, 1.0),
            active_point_border_width_px: 2.0,
            legend_label_color: Color::rgb(0.10, 0.12, 0.16),
            legend_font_size_px: 12.0,
            legend_swatch_size_px: 10.0,
            legend_row_height_px: 20.0,
            legend_inset_px: 16.0,
        }
    }
}

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<()> {
    for color in [
        style.plot_background_color,
        style.grid_line_color,
        style.axis_label_color,
        style.feature_line_color,
        style.feature_label_color,
        style.active_point_border_color,
        style.legend_label_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("grid_line_width_px", style.grid_line_width_px),
        ("axis_label_font_size_px", style.axis_label_font_size_px),
        ("feature_label_font_size_px", style.feature_label_font_size_px),
        ("series_line_width_px", style.series_line_width_px),
        ("active_point_radius_scale", style.active_point_radius_scale),
        ("active_point_border_width_px", style.active_point_border_width_px),
        ("legend_font_size_px", style.legend_font_size_px),
        ("legend_swatch_size_px", style.legend_swatch_size_px),
        ("legend_row_height_px", style.legend_row_height_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("axis_label_padding_px", style.axis_label_padding_px),
        ("feature_label_offset_px", style.feature_label_offset_px),
        ("legend_inset_px", style.legend_inset_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and >= 0"
            )));
        }
    }
    Ok(())
}
