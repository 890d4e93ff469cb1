use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{ChartData, ChartDefinition, ChartType, FALLBACK_LOCALE};
use crate::error::{ChartError, ChartResult};

use super::adapter::ChartAdapter;
use super::options::ChartOptions;

/// Input document: a definition, its data, and the display locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub definition: ChartDefinition,
    pub data: ChartData,
}

impl ChartRequest {
    #[must_use]
    pub fn new(definition: ChartDefinition, data: ChartData) -> Self {
        Self {
            locale: None,
            definition,
            data,
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Requested locale; missing or empty means English.
    #[must_use]
    pub fn effective_locale(&self) -> &str {
        match self.locale.as_deref() {
            Some(locale) if !locale.is_empty() => locale,
            _ => FALLBACK_LOCALE,
        }
    }

    #[must_use]
    pub fn adapter(&self) -> ChartAdapter<'_> {
        ChartAdapter::new(&self.definition, &self.data)
    }

    #[must_use]
    pub fn convert_options(&self) -> ChartOptions {
        self.adapter().convert_options(self.effective_locale())
    }

    pub fn convert(&self) -> ChartResult<Map<String, Value>> {
        self.adapter().convert(self.effective_locale())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ChartError::Serialize(e.to_string()))
    }

    /// Decodes a request document.
    ///
    /// A well-formed document naming an unknown `definition.type` reports
    /// [`ChartError::UnsupportedChartType`]; every other failure is
    /// [`ChartError::Decode`].
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let document: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::Decode(format!("failed to parse request json: {e}")))?;
        Self::from_json_value(document)
    }

    pub fn from_json_value(document: Value) -> ChartResult<Self> {
        if let Some(tag) = document.pointer("/definition/type").and_then(Value::as_str) {
            ChartType::from_str(tag)?;
        }
        serde_json::from_value(document)
            .map_err(|e| ChartError::Decode(format!("failed to decode request: {e}")))
    }
}

/// Decodes a request document and converts it in one step.
pub fn convert_json_str(input: &str) -> ChartResult<Map<String, Value>> {
    ChartRequest::from_json_str(input)?.convert()
}
