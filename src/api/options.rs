use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ChartError, ChartResult};

/// Renderer chart options produced by a conversion.
///
/// Key spelling follows the ECharts option model (`xAxis`, `subtext`,
/// `areaStyle`, `roseType`, ...). Optional parts are omitted when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub title: TitleOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisOptions>,
    #[serde(default)]
    pub series: Vec<SeriesOptions>,
}

impl ChartOptions {
    /// Flattens the typed options into a generic key-value document.
    pub fn to_json_map(&self) -> ChartResult<Map<String, Value>> {
        match serde_json::to_value(self).map_err(|e| ChartError::Serialize(e.to_string()))? {
            Value::Object(map) => Ok(map),
            other => Err(ChartError::Serialize(format!(
                "expected an options object, got {other}"
            ))),
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ChartError::Serialize(e.to_string()))
    }

    #[must_use]
    pub fn series_named(&self, name: &str) -> Option<&SeriesOptions> {
        self.series.iter().find(|series| series.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleOptions {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Category,
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisOptions {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AxisKind,
    /// Category labels; always present on category axes, even when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
}

impl AxisOptions {
    #[must_use]
    pub fn category(name: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: AxisKind::Category,
            data: Some(categories),
        }
    }

    #[must_use]
    pub fn value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AxisKind::Value,
            data: None,
        }
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        self.data.as_deref().unwrap_or_default()
    }
}

/// Renderer series type. Area charts render as filled `line` series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Line,
    Bar,
    Scatter,
    Pie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerSymbol {
    Circle,
    Rect,
    RoundRect,
    Triangle,
    Diamond,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoseType {
    Radius,
    Area,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelOptions {
    pub show: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaStyle {
    pub opacity: f64,
}

/// One plotted value. Slice names and marker hints are only set by the
/// strategies that need them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<MarkerSymbol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_rotate: Option<f64>,
}

impl SeriesPoint {
    #[must_use]
    pub fn value(value: f64) -> Self {
        Self {
            name: None,
            value,
            symbol: None,
            symbol_size: None,
            symbol_rotate: None,
        }
    }

    #[must_use]
    pub fn named(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::value(value)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOptions {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub data: Vec<SeriesPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rose_type: Option<RoseType>,
}

impl SeriesOptions {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: SeriesKind, data: Vec<SeriesPoint>) -> Self {
        Self {
            name: name.into(),
            kind,
            data,
            label: None,
            area_style: None,
            rose_type: None,
        }
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.data.iter().map(|point| point.value).collect()
    }
}
