use serde::Serialize;

/// A complete figure: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Surface(SurfaceTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    pub line: LineStyle,
    pub opacity: f64,
    pub showlegend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

/// `z` is indexed `[y][x]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceTrace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
    pub colorscale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub xaxis: AxisLayout,
    pub yaxis: AxisLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<Scene>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLayout {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

impl AxisLayout {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            range: None,
        }
    }
}

/// 3D axes for surface plots
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub xaxis: AxisLayout,
    pub yaxis: AxisLayout,
    pub zaxis: AxisLayout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_type_tag() {
        let trace = Trace::Scatter(ScatterTrace {
            name: "Infected".to_string(),
            x: vec![0.0, 1.0],
            y: vec![2.0, 3.0],
            mode: "lines",
            line: LineStyle {
                color: "#d62728".to_string(),
                width: 2.0,
            },
            opacity: 1.0,
            showlegend: true,
        });

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["type"], "scatter");
        assert_eq!(value["mode"], "lines");
        assert_eq!(value["line"]["color"], "#d62728");
    }

    #[test]
    fn test_axis_range_omitted_when_unset() {
        let value = serde_json::to_value(AxisLayout::titled("Time (days)")).unwrap();
        assert_eq!(value, serde_json::json!({ "title": "Time (days)" }));
    }
}
