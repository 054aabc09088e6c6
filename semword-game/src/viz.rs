//! Mapping from projected points to a Plotly `scatter3d` figure.
//!
//! The figure is plain serializable data; drawing it is left to the charting
//! library on the web side.
use crate::model::clamp_similarity;
use crate::stats::format_percent;
use crate::wire::VisualizationPoint;
use serde::Serialize;

pub const TARGET_COLOR: Rgb = Rgb(255, 0, 0);
pub const UNKNOWN_COLOR: Rgb = Rgb(128, 128, 128);
pub const COLD_COLOR: Rgb = Rgb(0, 0, 255);
pub const HOT_COLOR: Rgb = Rgb(255, 0, 0);

pub const TARGET_MARKER_SIZE: f64 = 15.0;
pub const BASE_MARKER_SIZE: f64 = 8.0;
pub const MARKER_SIZE_BONUS: f64 = 7.0;

pub const TARGET_HOVER_LABEL: &str = "Mot cible";
pub const RESET_VIEW_HINT: &str = "Double-cliquez pour réinitialiser la vue";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Linear blue-to-red gradient; the target always gets its own color.
#[must_use]
pub fn point_color(similarity: Option<f64>, is_target: bool) -> Rgb {
    if is_target {
        return TARGET_COLOR;
    }
    let Some(sim) = similarity else {
        return UNKNOWN_COLOR;
    };
    let sim = clamp_similarity(sim);
    Rgb(
        lerp_channel(COLD_COLOR.0, HOT_COLOR.0, sim),
        lerp_channel(COLD_COLOR.1, HOT_COLOR.1, sim),
        lerp_channel(COLD_COLOR.2, HOT_COLOR.2, sim),
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);
    (from + (to - from) * t).floor().clamp(0.0, 255.0) as u8
}

#[must_use]
pub fn marker_size(similarity: Option<f64>, is_target: bool) -> f64 {
    if is_target {
        return TARGET_MARKER_SIZE;
    }
    let sim = similarity.map_or(0.0, clamp_similarity);
    BASE_MARKER_SIZE + sim * MARKER_SIZE_BONUS
}

#[must_use]
pub fn hover_text(point: &VisualizationPoint) -> String {
    if point.is_target {
        return TARGET_HOVER_LABEL.to_string();
    }
    match point.similarity {
        Some(sim) if sim > 0.0 => format!("{} ({})", point.word, format_percent(sim)),
        _ => point.word.clone(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverLabel {
    pub bgcolor: &'static str,
    pub bordercolor: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLine {
    pub width: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub size: Vec<f64>,
    pub color: Vec<Rgb>,
    pub opacity: f64,
    pub line: MarkerLine,
    pub symbol: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub text: Vec<String>,
    pub textposition: &'static str,
    pub textfont: Font,
    pub hovertext: Vec<String>,
    pub hoverinfo: &'static str,
    pub hoverlabel: HoverLabel,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub showticklabels: bool,
    pub showgrid: bool,
    pub zeroline: bool,
    pub showline: bool,
    pub gridcolor: Rgb,
    pub gridwidth: u32,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            showticklabels: false,
            showgrid: true,
            zeroline: true,
            showline: false,
            gridcolor: Rgb(240, 240, 240),
            gridwidth: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Camera {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
    pub camera: Camera,
    pub aspectmode: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: &'static str,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub font: Font,
    pub showarrow: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    pub margin: Margin,
    pub scene: Scene,
    pub showlegend: bool,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
    pub responsive: bool,
    pub display_mode_bar: bool,
    pub mode_bar_buttons_to_remove: Vec<&'static str>,
    pub displaylogo: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            responsive: true,
            display_mode_bar: true,
            mode_bar_buttons_to_remove: vec![
                "toImage",
                "sendDataToCloud",
                "select2d",
                "lasso2d",
                "zoomIn2d",
                "zoomOut2d",
                "autoScale2d",
                "hoverClosestCartesian",
                "hoverCompareCartesian",
            ],
            displaylogo: false,
        }
    }
}

/// Everything `Plotly.newPlot` needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

impl Figure {
    /// Pin the plot to the container's current size.
    #[must_use]
    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.layout.width = Some(width);
        self.layout.height = Some(height);
        self
    }
}

#[must_use]
pub fn build_trace(points: &[VisualizationPoint]) -> Trace {
    Trace {
        kind: "scatter3d",
        mode: "markers+text",
        x: points.iter().map(|p| p.coordinates[0]).collect(),
        y: points.iter().map(|p| p.coordinates[1]).collect(),
        z: points.iter().map(|p| p.coordinates[2]).collect(),
        // The target's label would give the answer away.
        text: points
            .iter()
            .map(|p| if p.is_target { String::new() } else { p.word.clone() })
            .collect(),
        textposition: "top center",
        textfont: Font {
            size: 12,
            color: Some(Rgb(60, 60, 60).to_string()),
        },
        hovertext: points.iter().map(hover_text).collect(),
        hoverinfo: "text",
        hoverlabel: HoverLabel {
            bgcolor: "rgba(255, 255, 255, 0.9)",
            bordercolor: "rgba(0, 0, 0, 0.1)",
            font: Font {
                size: 14,
                color: None,
            },
        },
        marker: Marker {
            size: points
                .iter()
                .map(|p| marker_size(p.similarity, p.is_target))
                .collect(),
            color: points
                .iter()
                .map(|p| point_color(p.similarity, p.is_target))
                .collect(),
            opacity: 0.85,
            line: MarkerLine {
                width: 1.0,
                color: Rgb(255, 255, 255),
            },
            symbol: points
                .iter()
                .map(|p| if p.is_target { "diamond" } else { "circle" })
                .collect(),
        },
    }
}

#[must_use]
pub fn build_layout() -> Layout {
    let eye = 1.75;
    Layout {
        width: None,
        height: None,
        margin: Margin {
            l: 0,
            r: 0,
            b: 0,
            t: 0,
        },
        scene: Scene {
            xaxis: Axis::default(),
            yaxis: Axis::default(),
            zaxis: Axis::default(),
            camera: Camera {
                eye: Vec3 {
                    x: eye,
                    y: eye,
                    z: eye,
                },
                center: Vec3 {
                    x: 0.0,
                    y: 0.0,
                    z: 0.0,
                },
                up: Vec3 {
                    x: 0.0,
                    y: 0.0,
                    z: 1.0,
                },
            },
            aspectmode: "cube",
        },
        showlegend: false,
        paper_bgcolor: "rgba(0,0,0,0)",
        plot_bgcolor: "rgba(0,0,0,0)",
        annotations: vec![Annotation {
            text: RESET_VIEW_HINT,
            xref: "paper",
            yref: "paper",
            x: 0.0,
            y: 1.0,
            xanchor: "left",
            yanchor: "top",
            font: Font {
                size: 12,
                color: Some(Rgb(150, 150, 150).to_string()),
            },
            showarrow: false,
        }],
    }
}

#[must_use]
pub fn build_figure(points: &[VisualizationPoint]) -> Figure {
    Figure {
        data: vec![build_trace(points)],
        layout: build_layout(),
        config: PlotConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(word: &str, is_target: bool, similarity: Option<f64>) -> VisualizationPoint {
        VisualizationPoint {
            word: word.to_string(),
            coordinates: [1.0, 2.0, 3.0],
            is_target,
            similarity,
        }
    }

    #[test]
    fn target_color_ignores_similarity() {
        for sim in [None, Some(0.0), Some(0.5), Some(1.0)] {
            assert_eq!(point_color(sim, true), TARGET_COLOR);
        }
    }

    #[test]
    fn gradient_endpoints_and_clamping() {
        assert_eq!(point_color(Some(0.0), false), COLD_COLOR);
        assert_eq!(point_color(Some(1.0), false), HOT_COLOR);
        assert_eq!(point_color(Some(-3.0), false), COLD_COLOR);
        assert_eq!(point_color(Some(7.0), false), HOT_COLOR);
        assert_eq!(point_color(Some(0.5), false), Rgb(127, 0, 127));
        assert_eq!(point_color(None, false), UNKNOWN_COLOR);
    }

    #[test]
    fn marker_sizes_scale_with_similarity() {
        assert!((marker_size(Some(0.2), true) - 15.0).abs() < f64::EPSILON);
        assert!((marker_size(None, false) - 8.0).abs() < f64::EPSILON);
        assert!((marker_size(Some(1.0), false) - 15.0).abs() < f64::EPSILON);
        assert!((marker_size(Some(0.5), false) - 11.5).abs() < f64::EPSILON);
    }

    #[test]
    fn trace_hides_target_label() {
        let points = vec![
            point("secret", true, None),
            point("chat", false, Some(0.42)),
            point("zero", false, Some(0.0)),
        ];
        let trace = build_trace(&points);
        assert_eq!(trace.text, vec!["", "chat", "zero"]);
        assert_eq!(trace.hovertext, vec!["Mot cible", "chat (42.0%)", "zero"]);
        assert_eq!(trace.marker.symbol, vec!["diamond", "circle", "circle"]);
        assert_eq!(trace.x, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn figure_serializes_plotly_keys() {
        let figure = build_figure(&[point("chat", false, Some(1.0))]).sized(640.0, 480.0);
        let json = serde_json::to_value(&figure).unwrap();
        assert_eq!(json["data"][0]["type"], "scatter3d");
        assert_eq!(json["data"][0]["marker"]["color"][0], "rgb(255, 0, 0)");
        assert_eq!(json["layout"]["width"], 640.0);
        assert_eq!(json["layout"]["scene"]["aspectmode"], "cube");
        assert_eq!(json["config"]["displayModeBar"], true);
        assert_eq!(json["config"]["modeBarButtonsToRemove"][0], "toImage");
        assert!(json["data"][0]["hoverlabel"]["font"].get("color").is_none());
    }
}
