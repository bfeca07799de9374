//! SVG rendering of a sensitivity curve.
//!
//! Draws the call and put value lines against underlying price, with a dashed
//! vertical line at the strike and a dotted one at the current spot.

use std::path::Path;

use anyhow::{anyhow, Result};
use plotters::prelude::*;

use crate::valuation::types::SensitivityCurve;

/// Colours and canvas size for [`render_svg`].
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub size: (u32, u32),
    pub background: RGBColor,
    pub plot_area: RGBColor,
    pub text: RGBColor,
    pub grid: RGBColor,
    pub legend_background: RGBColor,
    pub call: RGBColor,
    pub put: RGBColor,
    pub strike_line: RGBColor,
    pub spot_line: RGBColor,
}

impl ChartStyle {
    /// Dark theme: coral call line, teal put line on charcoal.
    pub fn dark() -> Self {
        Self {
            size: (700, 500),
            background: RGBColor(0x1E, 0x1E, 0x1E),
            plot_area: RGBColor(0x2B, 0x2B, 0x2B),
            text: WHITE,
            grid: RGBColor(0x55, 0x55, 0x55),
            legend_background: RGBColor(0x33, 0x33, 0x33),
            call: RGBColor(0xFF, 0x6B, 0x6B),
            put: RGBColor(0x4E, 0xCD, 0xC4),
            strike_line: RGBColor(0x88, 0x88, 0x88),
            spot_line: RGBColor(0xBB, 0xBB, 0xBB),
        }
    }

    pub fn light() -> Self {
        Self {
            background: WHITE,
            plot_area: WHITE,
            text: BLACK,
            grid: RGBColor(0xCC, 0xCC, 0xCC),
            legend_background: WHITE,
            ..Self::dark()
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::dark()
    }
}

/// Vertical line at `x` split into `dash`-long pieces separated by `gap`.
fn vertical_dashes(x: f64, y0: f64, y1: f64, dash: f64, gap: f64) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut y = y0;
    while y < y1 {
        segments.push(vec![(x, y), (x, (y + dash).min(y1))]);
        y += dash + gap;
    }
    segments
}

/// Render `curve` to an SVG file at `path`.
pub fn render_svg(curve: &SensitivityCurve, path: &Path, style: &ChartStyle) -> Result<()> {
    let (lower, upper) = curve
        .bounds()
        .ok_or_else(|| anyhow!("cannot plot an empty sensitivity curve"))?;
    if lower >= upper {
        return Err(anyhow!(
            "cannot plot a curve with a single underlying price ({})",
            lower
        ));
    }
    // Strike and spot lines stay visible even outside the sampled window
    let x_min = lower.min(curve.strike).min(curve.spot);
    let x_max = upper.max(curve.strike).max(curve.spot);

    let y_peak = curve
        .call_values
        .iter()
        .chain(&curve.put_values)
        .fold(0.0_f64, |acc, &v| acc.max(v));
    let y_max = if y_peak > 0.0 { y_peak * 1.05 } else { 1.0 };

    let root = SVGBackend::new(path, style.size).into_drawing_area();
    root.fill(&style.background).map_err(|e| anyhow!("failed to render chart: {e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .caption(
            "Option Pricing",
            ("sans-serif", 24).into_font().color(&style.text),
        )
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| anyhow!("failed to render chart: {e}"))?;

    chart
        .plotting_area()
        .fill(&style.plot_area)
        .map_err(|e| anyhow!("failed to render chart: {e}"))?;

    chart
        .configure_mesh()
        .x_desc("Price")
        .y_desc("Value")
        .axis_style(style.text.stroke_width(1))
        .label_style(("sans-serif", 13).into_font().color(&style.text))
        .axis_desc_style(("sans-serif", 15).into_font().color(&style.text))
        .bold_line_style(style.grid.mix(0.5).stroke_width(1))
        .light_line_style(style.grid.mix(0.2).stroke_width(1))
        .draw()
        .map_err(|e| anyhow!("failed to render chart: {e}"))?;

    let call_color = style.call;
    let call_points: Vec<(f64, f64)> = curve
        .underlying_samples
        .iter()
        .copied()
        .zip(curve.call_values.iter().copied())
        .collect();
    chart
        .draw_series(vec![PathElement::new(call_points, call_color.stroke_width(2))])
        .map_err(|e| anyhow!("failed to render chart: {e}"))?
        .label("Call Price")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], call_color.stroke_width(2))
        });

    let put_color = style.put;
    let put_points: Vec<(f64, f64)> = curve
        .underlying_samples
        .iter()
        .copied()
        .zip(curve.put_values.iter().copied())
        .collect();
    chart
        .draw_series(vec![PathElement::new(put_points, put_color.stroke_width(2))])
        .map_err(|e| anyhow!("failed to render chart: {e}"))?
        .label("Put Price")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], put_color.stroke_width(2))
        });

    let dash = y_max / 40.0;
    let references = [
        (
            curve.strike,
            style.strike_line,
            dash,
            dash * 0.6,
            format!("Strike={:?}", curve.strike),
        ),
        (
            curve.spot,
            style.spot_line,
            dash * 0.25,
            dash * 0.5,
            format!("Price={:?}", curve.spot),
        ),
    ];
    for (x, color, len, gap, label) in references {
        chart
            .draw_series(
                vertical_dashes(x, 0.0, y_max, len, gap)
                    .into_iter()
                    .map(move |points| PathElement::new(points, color.mix(0.6).stroke_width(1))),
            )
            .map_err(|e| anyhow!("failed to render chart: {e}"))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.mix(0.6).stroke_width(1))
            });
    }

    chart
        .configure_series_labels()
        .background_style(style.legend_background.filled())
        .border_style(style.text.stroke_width(1))
        .label_font(("sans-serif", 13).into_font().color(&style.text))
        .draw()
        .map_err(|e| anyhow!("failed to render chart: {e}"))?;

    root.present().map_err(|e| anyhow!("failed to render chart: {e}"))?;
    tracing::debug!(path = %path.display(), samples = curve.len(), "chart written");
    Ok(())
}
