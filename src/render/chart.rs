//! Bar charts rendered as inline SVG
//!
//! Two charts are drawn: the class probability pair with a fixed
//! green/red mapping, and the ranked importances colored on a continuous
//! Turbo scale keyed to the signed value. Drawing goes through plotters
//! into an in-memory SVG string that the page embeds as is.

use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use plotters_svg::SVGBackend;
use thiserror::Error;

use crate::prediction::{ClassProbabilities, Diagnosis, FeatureImportance};

const WIDTH: u32 = 720;
const HEIGHT: u32 = 380;
/// More bars than this and the category labels are drawn vertically
const HORIZONTAL_LABEL_MAX: usize = 4;
/// Room above the tallest bar for its value text
const HEADROOM: f64 = 1.12;

#[derive(Debug, Error)]
#[error("chart rendering failed: {0}")]
pub struct ChartError(pub String);

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError(err.to_string())
    }
}

/// One bar
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: RGBColor,
    /// Text drawn at the bar tip
    pub text: String,
}

/// Vertical bar chart with a zero baseline
#[derive(Debug, Clone, Default)]
pub struct BarChart {
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn new(y_label: &str) -> Self {
        Self {
            y_label: y_label.to_string(),
            bars: Vec::new(),
        }
    }

    pub fn push(&mut self, bar: Bar) {
        self.bars.push(bar);
    }

    /// Value range including zero, padded for the tip labels
    fn y_range(&self) -> (f64, f64) {
        let (lo, hi) = self.bars.iter().fold((0.0f64, 0.0f64), |(lo, hi), b| {
            (lo.min(b.value), hi.max(b.value))
        });
        if (hi - lo).abs() < f64::EPSILON {
            (lo, lo + 1.0)
        } else {
            (lo * HEADROOM, hi * HEADROOM)
        }
    }

    pub fn to_svg(&self) -> Result<String, ChartError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();

            let (lo, hi) = self.y_range();
            let slots = self.bars.len().max(1) as u32;
            let vertical = self.bars.len() > HORIZONTAL_LABEL_MAX;

            let labels: Vec<&str> = self.bars.iter().map(|b| b.label.as_str()).collect();
            let format_label = |v: &SegmentValue<u32>| match v {
                SegmentValue::CenterOf(i) => labels.get(*i as usize).copied().unwrap_or_default().to_string(),
                _ => String::new(),
            };
            let format_value = |v: &f64| format!("{:.2}", v);

            let x_label_style = ("sans-serif", 12).into_font().color(&WHITE);
            let x_label_style = if vertical {
                x_label_style.transform(FontTransform::Rotate90)
            } else {
                x_label_style
            };

            let mut chart = ChartBuilder::on(&root)
                .margin(12)
                .x_label_area_size(if vertical { 140 } else { 36 })
                .y_label_area_size(64)
                .build_cartesian_2d((0u32..slots).into_segmented(), lo..hi)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .label_style(("sans-serif", 12).into_font().color(&WHITE))
                .x_labels(self.bars.len())
                .x_label_formatter(&format_label)
                .x_label_style(x_label_style)
                .y_labels(5)
                .y_label_formatter(&format_value)
                .y_desc(self.y_label.as_str())
                .axis_desc_style(("sans-serif", 13).into_font().color(&WHITE))
                .axis_style(WHITE.mix(0.6))
                .bold_line_style(WHITE.mix(0.1))
                .light_line_style(TRANSPARENT)
                .draw()?;

            chart.draw_series(self.bars.iter().enumerate().map(|(i, bar)| {
                let (top, bottom) = if bar.value >= 0.0 { (bar.value, 0.0) } else { (0.0, bar.value) };
                let mut rect = Rectangle::new(
                    [
                        (SegmentValue::Exact(i as u32), top),
                        (SegmentValue::Exact(i as u32 + 1), bottom),
                    ],
                    bar.color.filled(),
                );
                rect.set_margin(0, 0, 8, 8);
                rect
            }))?;

            chart.draw_series(self.bars.iter().enumerate().map(|(i, bar)| {
                let anchor = if bar.value >= 0.0 { VPos::Bottom } else { VPos::Top };
                let style = ("sans-serif", 12)
                    .into_font()
                    .color(&WHITE)
                    .pos(Pos::new(HPos::Center, anchor));
                Text::new(bar.text.clone(), (SegmentValue::CenterOf(i as u32), bar.value), style)
            }))?;

            root.present()?;
        }
        Ok(svg)
    }
}

/// Benign/Malignant probabilities in percent
pub fn probability_chart(probabilities: &ClassProbabilities) -> BarChart {
    let mut chart = BarChart::new("Probability");
    for diagnosis in [Diagnosis::Benign, Diagnosis::Malignant] {
        let percent = probabilities.get(diagnosis) * 100.0;
        chart.push(Bar {
            label: diagnosis.as_str().to_string(),
            value: percent,
            color: diagnosis_color(diagnosis),
            text: format!("{:.2}", percent),
        });
    }
    chart
}

fn diagnosis_color(diagnosis: Diagnosis) -> RGBColor {
    match diagnosis {
        Diagnosis::Benign => GREEN,
        Diagnosis::Malignant => RED,
    }
}

/// Ranked importances, `None` when there is nothing to show
pub fn importance_chart(importances: &[FeatureImportance]) -> Option<BarChart> {
    if importances.is_empty() {
        return None;
    }

    let lo = importances.iter().map(|i| i.importance).fold(f64::INFINITY, f64::min);
    let hi = importances.iter().map(|i| i.importance).fold(f64::NEG_INFINITY, f64::max);

    let mut chart = BarChart::new("Importance");
    for item in importances {
        let t = if hi > lo { (item.importance - lo) / (hi - lo) } else { 0.5 };
        chart.push(Bar {
            label: item.feature.clone(),
            value: item.importance,
            color: turbo(t),
            text: format!("{:.4}", item.importance),
        });
    }
    Some(chart)
}

// ============================================================================
// TURBO COLOR SCALE
// ============================================================================

/// Turbo colormap, polynomial fit. `t` is clamped to [0, 1].
pub fn turbo(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let r = 0.13572138 + t * (4.61539260 + t * (-42.66032258 + t * (132.13108234 + t * (-152.94239396 + t * 59.28637943))));
    let g = 0.09140261 + t * (2.19418839 + t * (4.84296658 + t * (-14.18503333 + t * (4.27729857 + t * 2.82956604))));
    let b = 0.10667330 + t * (12.64194608 + t * (-60.58204836 + t * (110.36276771 + t * (-89.90310912 + t * 27.34824973))));
    let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    RGBColor(to_byte(r), to_byte(g), to_byte(b))
}
