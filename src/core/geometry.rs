use smallvec::SmallVec;
use tracing::warn;

use crate::core::model::YStep;
use crate::core::primitives::round_to_cents;
use crate::core::types::{ChartMargins, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};

/// Tick count produced when no explicit step is configured.
pub const AUTO_TICK_COUNT: usize = 6;
/// Upper bound on enumerated ticks for a fixed step.
pub const MAX_STEP_TICKS: usize = 500;

pub type GridTicks = SmallVec<[f64; 8]>;

/// Pure data-space <-> pixel-space mapping for one chart layout.
///
/// Instances are immutable; the editor rebuilds one whenever the viewport,
/// margins, feature count, range or step changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    plot: PlotArea,
    feature_count: usize,
    min_y: f64,
    max_y: f64,
    y_step: YStep,
}

impl ChartGeometry {
    pub fn new(
        viewport: Viewport,
        margins: ChartMargins,
        feature_count: usize,
        min_y: f64,
        max_y: f64,
        y_step: YStep,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !margins.is_valid() {
            return Err(ChartError::InvalidData(
                "margins must be finite and >= 0".to_owned(),
            ));
        }
        if !min_y.is_finite() || !max_y.is_finite() || min_y > max_y {
            return Err(ChartError::InvalidData(
                "y range must be finite with min <= max".to_owned(),
            ));
        }
        if !y_step.is_valid() {
            return Err(ChartError::InvalidData(
                "y step must be finite and > 0".to_owned(),
            ));
        }

        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "margins leave no plot area (width={width}, height={height})"
            )));
        }

        Ok(Self {
            plot: PlotArea {
                left: margins.left,
                top: margins.top,
                width,
                height,
            },
            feature_count,
            min_y,
            max_y,
            y_step,
        })
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        (self.min_y, self.max_y)
    }

    /// Span used as the scale denominator; a zero span is treated as 1.
    #[must_use]
    pub fn y_denominator(&self) -> f64 {
        let span = self.max_y - self.min_y;
        if span > 0.0 { span } else { 1.0 }
    }

    /// Horizontal position of feature `index`.
    ///
    /// A single feature sits at the horizontal center; otherwise features are
    /// spread over the full plot width, both ends inclusive.
    #[must_use]
    pub fn x_for_index(&self, index: usize) -> f64 {
        if self.feature_count <= 1 {
            return self.plot.center_x();
        }
        let step = self.plot.width / (self.feature_count - 1) as f64;
        self.plot.left + index as f64 * step
    }

    /// Pixel Y for a value; larger values are higher on screen.
    #[must_use]
    pub fn y_for_value(&self, value: f64) -> f64 {
        let normalized = (value - self.min_y) / self.y_denominator();
        self.plot.bottom() - normalized * self.plot.height
    }

    /// Value under a pixel Y; the pixel is clamped to the plot area first.
    #[must_use]
    pub fn value_for_y(&self, pixel_y: f64) -> f64 {
        let clamped = pixel_y.clamp(self.plot.top, self.plot.bottom());
        let normalized = (self.plot.bottom() - clamped) / self.plot.height;
        self.min_y + normalized * self.y_denominator()
    }

    /// Horizontal grid values, ascending.
    #[must_use]
    pub fn grid_ticks(&self) -> GridTicks {
        match self.y_step {
            YStep::Fixed(step) => {
                step_ticks(self.min_y, self.max_y, step).unwrap_or_else(|| {
                    warn!(
                        step,
                        min_y = self.min_y,
                        max_y = self.max_y,
                        "y step too dense, falling back to automatic ticks"
                    );
                    auto_ticks(self.min_y, self.max_y)
                })
            }
            YStep::Auto => auto_ticks(self.min_y, self.max_y),
        }
    }
}

fn auto_ticks(min_y: f64, max_y: f64) -> GridTicks {
    let intervals = (AUTO_TICK_COUNT - 1) as f64;
    let span = max_y - min_y;
    (0..AUTO_TICK_COUNT)
        .map(|i| min_y + span * i as f64 / intervals)
        .collect()
}

/// Multiples of `step` inside `[min_y, max_y]` plus both boundaries.
///
/// Returns `None` when the step would produce more than `MAX_STEP_TICKS`.
fn step_ticks(min_y: f64, max_y: f64, step: f64) -> Option<GridTicks> {
    let first = (min_y / step - 1e-9).ceil();
    let last = (max_y / step + 1e-9).floor();
    let count = last - first + 1.0;
    if !count.is_finite() || count > MAX_STEP_TICKS as f64 {
        return None;
    }

    let mut ticks = GridTicks::new();
    ticks.push(min_y);
    let mut k = first;
    while k <= last {
        let value = round_to_cents(k * step);
        if value >= min_y && value <= max_y {
            ticks.push(value);
        }
        k += 1.0;
    }
    ticks.push(max_y);

    ticks.sort_by(f64::total_cmp);
    ticks.dedup_by(|a, b| (*a - *b).abs() <= 1e-9);
    Some(ticks)
}

#[cfg(test)]
mod tests {
    use super::step_ticks;

    #[test]
    fn step_ticks_force_boundaries_for_offset_ranges() {
        let ticks = step_ticks(1.0, 9.0, 4.0).expect("ticks");
        assert_eq!(ticks.as_slice(), &[1.0, 4.0, 8.0, 9.0]);
    }

    #[test]
    fn step_ticks_handle_negative_ranges() {
        let ticks = step_ticks(-5.0, 5.0, 2.5).expect("ticks");
        assert_eq!(ticks.as_slice(), &[-5.0, -2.5, 0.0, 2.5, 5.0]);
    }

    #[test]
    fn step_ticks_round_float_noise() {
        let ticks = step_ticks(0.0, 1.0, 0.1).expect("ticks");
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[3], 0.3);
    }

    #[test]
    fn step_ticks_reject_excessive_density() {
        assert!(step_ticks(0.0, 10.0, 0.001).is_none());
    }
}
