use bevy::math::Vec2;
use geostrophic::Comparison;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    Log10,
}

/// Value range shown along one plot axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub scale: AxisScale,
}

/// Errors below this are not distinguishable from round-off
const SMALLEST_ERROR_FLOOR: f64 = 1e-16;

impl Axis {
    pub fn linear(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            scale: AxisScale::Linear,
        }
    }

    pub fn log10(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            scale: AxisScale::Log10,
        }
    }

    /// Linear axis around `values` with 5% padding on both sides
    pub fn fit_linear(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 1.0));

        let span = max - min;
        let pad = if span > 0.0 {
            span * 0.05
        } else {
            // All values equal: open up a window around them
            (max.abs() * 0.1).max(1.0)
        };
        Self::linear(min - pad, max + pad)
    }

    /// Log axis for absolute errors
    ///
    /// The floor sits one decade below the leading decade of the smallest error
    /// and the ceiling is 1, or the next decade above the largest error if that exceeds 1.
    pub fn error_log(min_positive: Option<f64>, max_error: f64) -> Self {
        let floor = log_floor(min_positive.unwrap_or(SMALLEST_ERROR_FLOOR));
        let ceiling = if max_error > 1.0 && max_error.is_finite() {
            10f64.powi(max_error.log10().ceil() as i32)
        } else {
            1.0
        };
        Self::log10(floor, ceiling)
    }

    /// Position of `value` along the axis, 0 at `min` and 1 at `max`
    ///
    /// `None` for values a log axis cannot show.
    pub fn fraction(&self, value: f64) -> Option<f64> {
        match self.scale {
            AxisScale::Linear => {
                let span = self.max - self.min;
                if span == 0.0 {
                    return None;
                }
                Some((value - self.min) / span)
            }
            AxisScale::Log10 => {
                if value <= 0.0 || self.min <= 0.0 || self.max <= self.min {
                    return None;
                }
                let lo = self.min.log10();
                Some((value.log10() - lo) / (self.max.log10() - lo))
            }
        }
    }

    pub fn ticks(&self) -> Vec<f64> {
        match self.scale {
            AxisScale::Linear => linear_ticks(self.min, self.max, 5),
            AxisScale::Log10 => decade_ticks(self.min, self.max),
        }
    }

    pub fn tick_label(&self, value: f64) -> String {
        match self.scale {
            AxisScale::Linear => format_linear_tick(value),
            AxisScale::Log10 => format!("1e{}", value.log10().round() as i32),
        }
    }
}

/// `10^(trunc(log10(min_error)) - 1)`
pub fn log_floor(min_error: f64) -> f64 {
    10f64.powi(min_error.log10().trunc() as i32 - 1)
}

/// Round step size of 1, 2 or 5 times a power of ten giving about `target` intervals
pub fn nice_step(span: f64, target: usize) -> f64 {
    if span <= 0.0 || !span.is_finite() || target == 0 {
        return 1.0;
    }
    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn linear_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let step = nice_step(max - min, target);
    let mut ticks = Vec::new();
    let mut k = (min / step).ceil();
    while k * step <= max + step * 1e-9 {
        // Snap away the -0.0 and 1e-17 style artifacts of k * step
        let t = k * step;
        ticks.push(if t.abs() < step * 1e-9 { 0.0 } else { t });
        k += 1.0;
    }
    ticks
}

fn decade_ticks(min: f64, max: f64) -> Vec<f64> {
    if min <= 0.0 || max <= min {
        return Vec::new();
    }
    // Exact decades can come out of log10 a hair off the integer
    let first = (min.log10() - 1e-9).ceil() as i32;
    let last = (max.log10() + 1e-9).floor() as i32;
    let count = (last - first + 1).max(0) as usize;
    // Keep roughly eight labels on very wide ranges
    let stride = count.div_ceil(8).max(1);
    (first..=last)
        .step_by(stride)
        .map(|exp| 10f64.powi(exp))
        .collect()
}

fn format_linear_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e4 || magnitude < 1e-2 {
        format!("{:e}", value)
    } else {
        let rounded = (value * 1000.0).round() / 1000.0;
        format!("{}", rounded)
    }
}

/// Everything needed to draw one scatter panel
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    pub title: String,
    pub x_label: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub points: Vec<(f64, f64)>,
}

/// Computed geostrophic wind versus altitude
pub fn wind_plot(comparison: &Comparison) -> ScatterPlot {
    let points: Vec<(f64, f64)> = comparison
        .points
        .iter()
        .map(|p| (p.altitude, p.computed))
        .collect();
    ScatterPlot {
        title: "Geostrophic wind speed (m s⁻¹)".to_string(),
        x_label: "Altitude (m)".to_string(),
        x_axis: Axis::fit_linear(points.iter().map(|p| p.0)),
        y_axis: Axis::fit_linear(points.iter().map(|p| p.1)),
        points,
    }
}

/// Absolute error versus altitude on a log scale
pub fn error_plot(comparison: &Comparison) -> ScatterPlot {
    let points: Vec<(f64, f64)> = comparison
        .points
        .iter()
        .map(|p| (p.altitude, p.abs_error))
        .collect();
    ScatterPlot {
        title: "Absolute error magnitude".to_string(),
        x_label: "Altitude (m)".to_string(),
        x_axis: Axis::fit_linear(points.iter().map(|p| p.0)),
        y_axis: Axis::error_log(comparison.min_positive_error(), comparison.max_abs_error()),
        points,
    }
}

pub fn suptitle(intervals: usize) -> String {
    format!(
        "Numerical evaluation of geostrophic wind speed ({} intervals)",
        intervals
    )
}

/// Screen rectangle the data is mapped into, y growing downwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub min: Vec2,
    pub max: Vec2,
}

impl PlotArea {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Screen position of axis fractions `(fx, fy)`, with `fy = 0` at the bottom edge
    pub fn to_screen(&self, fx: f64, fy: f64) -> Vec2 {
        let x = self.min.x + (self.max.x - self.min.x) * fx as f32;
        let y = self.max.y - (self.max.y - self.min.y) * fy as f32;
        Vec2::new(x, y)
    }
}

pub fn is_visible(fraction: f64) -> bool {
    (-1e-9..=1.0 + 1e-9).contains(&fraction)
}
