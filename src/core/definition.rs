use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{ChartType, LocalizedText};

/// Licensing metadata attached to definitions and data.
///
/// A bare JSON string decodes as the license `code`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct License {
    pub code: String,
    pub text: String,
    pub url: String,
}

impl License {
    #[must_use]
    pub fn from_code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }
}

impl<'de> Deserialize<'de> for License {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LicenseVisitor)
    }
}

struct LicenseVisitor;

impl<'de> Visitor<'de> for LicenseVisitor {
    type Value = License;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a license code string or a {code, text, url} map")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<License, E> {
        Ok(License::from_code(value))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<License, A::Error> {
        let mut license = License::default();
        while let Some(key) = access.next_key::<String>()? {
            let slot = match key.as_str() {
                "code" => &mut license.code,
                "text" => &mut license.text,
                "url" => &mut license.url,
                _ => {
                    access.next_value::<IgnoredAny>()?;
                    continue;
                }
            };
            *slot = access.next_value::<Option<String>>()?.unwrap_or_default();
        }
        Ok(license)
    }

    fn visit_unit<E: de::Error>(self) -> Result<License, E> {
        Ok(License::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<License, E> {
        Ok(License::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Axis {
    pub title: LocalizedText,
    pub angle: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub show_symbols: bool,
    pub source: String,
}

impl Axis {
    #[must_use]
    pub fn titled(title: LocalizedText) -> Self {
        Self {
            title,
            ..Self::default()
        }
    }
}

/// Display intent of a chart, independent of its values.
///
/// Only `type` is required when decoding; everything else defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDefinition {
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub license: License,
    #[serde(default)]
    pub source: String,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub x_axis: Axis,
    #[serde(default)]
    pub y_axis: Axis,
    #[serde(default)]
    pub interpolate: String,
}

impl ChartDefinition {
    #[must_use]
    pub fn new(chart_type: ChartType, title: LocalizedText) -> Self {
        Self {
            version: 1,
            license: License::default(),
            source: String::new(),
            chart_type,
            title,
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            interpolate: String::new(),
        }
    }

    #[must_use]
    pub fn with_axes(mut self, x_axis: Axis, y_axis: Axis) -> Self {
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self
    }
}
