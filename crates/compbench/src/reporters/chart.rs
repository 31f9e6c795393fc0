// Dweve compbench - Compression Level Benchmark Harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Ratio-per-level line charts.
//!
//! Charts are described declaratively by [`ChartSpec`] and turned into image
//! bytes by a [`ChartRenderer`]. [`SvgChartRenderer`] draws a plain SVG line
//! chart with one line per algorithm.

use crate::core::measurement::FileResult;
use crate::error::{BenchError, Result};

/// One line of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Legend label (algorithm name).
    pub name: String,
    /// `(level, ratio)` points in ascending level order.
    pub points: Vec<(u32, f64)>,
}

/// Declarative description of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Artifact id, used in error messages.
    pub id: String,
    /// Heading drawn above the plot.
    pub title: String,
    /// Horizontal axis caption.
    pub x_label: String,
    /// Vertical axis caption.
    pub y_label: String,
    /// One line per algorithm, drawn in palette order.
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    /// Ratio-by-level chart for one artifact.
    pub fn from_file_result(file: &FileResult) -> Self {
        Self {
            id: file.id.clone(),
            title: format!("{} compression ratio by level", file.name),
            x_label: "Level".to_string(),
            y_label: "Ratio (compressed / original)".to_string(),
            series: file
                .algorithms
                .iter()
                .map(|a| ChartSeries {
                    name: a.algorithm.clone(),
                    points: a.ratio_points(),
                })
                .collect(),
        }
    }

    fn render_error(&self, message: impl Into<String>) -> BenchError {
        BenchError::Render {
            artifact: self.id.clone(),
            message: message.into(),
        }
    }
}

/// Turns a chart description into image bytes.
pub trait ChartRenderer {
    /// File extension of the produced image, without the dot.
    fn extension(&self) -> &str;

    /// Renders the chart.
    fn render(&self, spec: &ChartSpec) -> Result<Vec<u8>>;
}

const PALETTE: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
];

/// SVG line chart renderer.
#[derive(Debug, Clone, Copy)]
pub struct SvgChartRenderer {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl Default for SvgChartRenderer {
    fn default() -> Self {
        Self {
            width: 800,
            height: 480,
        }
    }
}

/// Plot area margins: left, right, top, bottom.
const MARGIN: (f64, f64, f64, f64) = (70.0, 130.0, 50.0, 60.0);

impl SvgChartRenderer {
    fn validate(&self, spec: &ChartSpec) -> Result<()> {
        if self.width <= (MARGIN.0 + MARGIN.1) as u32 || self.height <= (MARGIN.2 + MARGIN.3) as u32
        {
            return Err(spec.render_error(format!(
                "canvas {}x{} is too small",
                self.width, self.height
            )));
        }
        if spec.series.is_empty() {
            return Err(spec.render_error("chart has no series"));
        }
        for series in &spec.series {
            if series.points.is_empty() {
                return Err(spec.render_error(format!("series '{}' has no points", series.name)));
            }
            if series.points.iter().any(|(_, y)| !y.is_finite() || *y < 0.0) {
                return Err(spec.render_error(format!(
                    "series '{}' has a non-finite or negative value",
                    series.name
                )));
            }
        }
        Ok(())
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn extension(&self) -> &str {
        "svg"
    }

    fn render(&self, spec: &ChartSpec) -> Result<Vec<u8>> {
        self.validate(spec)?;

        let points = spec.series.iter().flat_map(|s| s.points.iter());
        let (x_min, x_max) = points
            .clone()
            .fold((u32::MAX, u32::MIN), |(lo, hi), (x, _)| (lo.min(*x), hi.max(*x)));
        let y_peak = points.fold(0.0f64, |hi, (_, y)| hi.max(*y));
        // Round the y axis up to the next tenth so the top gridline is labelled.
        let y_max = ((y_peak * 10.0).ceil() / 10.0).max(0.1);
        let x_span = (x_max - x_min).max(1) as f64;

        let (left, right, top, bottom) = MARGIN;
        let plot_w = self.width as f64 - left - right;
        let plot_h = self.height as f64 - top - bottom;
        let sx = |x: u32| left + (x - x_min) as f64 / x_span * plot_w;
        let sy = |y: f64| top + plot_h - y / y_max * plot_h;

        let mut lines = Vec::new();
        lines.push(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="12">"#,
            w = self.width,
            h = self.height
        ));
        lines.push(r#"<rect width="100%" height="100%" fill="white"/>"#.to_string());
        lines.push(format!(
            r#"<text x="{}" y="28" text-anchor="middle" font-size="16">{}</text>"#,
            self.width as f64 / 2.0,
            escape(&spec.title)
        ));

        // Horizontal gridlines every tenth of the y range.
        for i in 0..=10 {
            let value = y_max * i as f64 / 10.0;
            let y = sy(value);
            lines.push(format!(
                r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#e0e0e0"/>"##,
                left,
                y,
                left + plot_w,
                y
            ));
            lines.push(format!(
                r#"<text x="{:.1}" y="{:.1}" text-anchor="end">{:.2}</text>"#,
                left - 8.0,
                y + 4.0,
                value
            ));
        }

        for level in x_min..=x_max {
            let x = sx(level);
            lines.push(format!(
                r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
                x,
                top + plot_h + 18.0,
                level
            ));
        }

        lines.push(format!(
            r##"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="#333"/>"##,
            left, top, plot_w, plot_h
        ));
        lines.push(format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            left + plot_w / 2.0,
            self.height as f64 - 15.0,
            escape(&spec.x_label)
        ));
        lines.push(format!(
            r#"<text x="18" y="{:.1}" text-anchor="middle" transform="rotate(-90 18 {:.1})">{}</text>"#,
            top + plot_h / 2.0,
            top + plot_h / 2.0,
            escape(&spec.y_label)
        ));

        for (i, series) in spec.series.iter().enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            let path: Vec<String> = series
                .points
                .iter()
                .map(|(x, y)| format!("{:.1},{:.1}", sx(*x), sy(*y)))
                .collect();
            lines.push(format!(
                r#"<polyline fill="none" stroke="{}" stroke-width="2" points="{}"/>"#,
                color,
                path.join(" ")
            ));
            for (x, y) in &series.points {
                lines.push(format!(
                    r#"<circle cx="{:.1}" cy="{:.1}" r="3" fill="{}"/>"#,
                    sx(*x),
                    sy(*y),
                    color
                ));
            }

            let legend_y = top + 10.0 + i as f64 * 20.0;
            let legend_x = left + plot_w + 15.0;
            lines.push(format!(
                r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="2"/>"#,
                legend_x,
                legend_y,
                legend_x + 20.0,
                legend_y,
                color
            ));
            lines.push(format!(
                r#"<text x="{:.1}" y="{:.1}">{}</text>"#,
                legend_x + 26.0,
                legend_y + 4.0,
                escape(&series.name)
            ));
        }

        lines.push("</svg>\n".to_string());
        Ok(lines.join("\n").into_bytes())
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::measurement::{AlgorithmResult, Measurement};
    use std::path::PathBuf;

    fn spec() -> ChartSpec {
        ChartSpec {
            id: "a".to_string(),
            title: "A <&> B".to_string(),
            x_label: "Level".to_string(),
            y_label: "Ratio".to_string(),
            series: vec![
                ChartSeries {
                    name: "gzip".to_string(),
                    points: vec![(1, 0.5), (2, 0.4), (3, 0.35)],
                },
                ChartSeries {
                    name: "zstd".to_string(),
                    points: vec![(1, 0.45), (2, 0.3)],
                },
            ],
        }
    }

    #[test]
    fn test_from_file_result() {
        let file = FileResult {
            id: "lodash".to_string(),
            name: "lodash.min.js".to_string(),
            path: PathBuf::from("/lodash.min.js"),
            original_size: 1000,
            chart: None,
            algorithms: vec![AlgorithmResult::new(
                "gzip",
                vec![Measurement {
                    level: 1,
                    time_ms: 0.1,
                    size: 500,
                    ratio: 0.5,
                }],
            )],
        };
        let spec = ChartSpec::from_file_result(&file);
        assert_eq!(spec.id, "lodash");
        assert!(spec.title.contains("lodash.min.js"));
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].points, vec![(1, 0.5)]);
    }

    #[test]
    fn test_render_svg() {
        let bytes = SvgChartRenderer::default().render(&spec()).unwrap();
        let svg = String::from_utf8(bytes).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert!(svg.contains("A &lt;&amp;&gt; B"));
        assert!(svg.contains(">gzip</text>"));
        assert!(svg.contains(">zstd</text>"));
    }

    #[test]
    fn test_render_one_element_per_line() {
        let bytes = SvgChartRenderer::default().render(&spec()).unwrap();
        let svg = String::from_utf8(bytes).unwrap();
        assert!(svg.ends_with("</svg>\n"));
        for line in svg.lines() {
            assert!(line.starts_with('<') && line.ends_with('>'), "bad line: {}", line);
        }
        assert_eq!(svg.lines().filter(|l| l.starts_with("<circle")).count(), 5);
    }

    #[test]
    fn test_render_rejects_empty_series() {
        let mut empty = spec();
        empty.series.clear();
        match SvgChartRenderer::default().render(&empty) {
            Err(BenchError::Render { artifact, .. }) => assert_eq!(artifact, "a"),
            other => panic!("Expected Render error, got {:?}", other),
        }

        let mut no_points = spec();
        no_points.series[1].points.clear();
        assert!(SvgChartRenderer::default().render(&no_points).is_err());
    }

    #[test]
    fn test_render_rejects_nan() {
        let mut bad = spec();
        bad.series[0].points[1].1 = f64::NAN;
        assert!(SvgChartRenderer::default().render(&bad).is_err());
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = SvgChartRenderer::default();
        assert_eq!(renderer.render(&spec()).unwrap(), renderer.render(&spec()).unwrap());
    }
}
