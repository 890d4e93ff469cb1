use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{ChartData, ChartDefinition, ChartType};
use crate::error::ChartResult;

use super::category_series::{CategoryStyle, convert_category_chart};
use super::options::ChartOptions;
use super::pie_series::convert_pie_chart;

/// Conversion strategy selected once per chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStrategy {
    Category(CategoryStyle),
    Pie,
}

impl ConversionStrategy {
    #[must_use]
    pub const fn for_chart_type(chart_type: ChartType) -> Self {
        match chart_type {
            ChartType::Line => Self::Category(CategoryStyle::Line),
            ChartType::Bar => Self::Category(CategoryStyle::Bar),
            ChartType::Area => Self::Category(CategoryStyle::Area),
            ChartType::Scatter => Self::Category(CategoryStyle::Scatter),
            ChartType::Pie => Self::Pie,
        }
    }

    #[must_use]
    pub fn apply(
        self,
        definition: &ChartDefinition,
        data: &ChartData,
        locale: &str,
    ) -> ChartOptions {
        match self {
            Self::Category(style) => convert_category_chart(style, definition, data, locale),
            Self::Pie => convert_pie_chart(definition, data, locale),
        }
    }
}

/// Borrowing adapter over one definition/data pair.
///
/// Conversions are pure: the same inputs and locale always produce the same
/// options, and nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct ChartAdapter<'a> {
    definition: &'a ChartDefinition,
    data: &'a ChartData,
}

impl<'a> ChartAdapter<'a> {
    #[must_use]
    pub fn new(definition: &'a ChartDefinition, data: &'a ChartData) -> Self {
        Self { definition, data }
    }

    #[must_use]
    pub fn definition(&self) -> &'a ChartDefinition {
        self.definition
    }

    #[must_use]
    pub fn data(&self) -> &'a ChartData {
        self.data
    }

    /// Typed conversion for `locale`.
    #[must_use]
    pub fn convert_options(&self, locale: &str) -> ChartOptions {
        let chart_type = self.definition.chart_type;
        debug!(
            %chart_type,
            locale,
            rows = self.data.row_count(),
            fields = self.data.schema.fields.len(),
            "convert chart"
        );
        ConversionStrategy::for_chart_type(chart_type).apply(self.definition, self.data, locale)
    }

    /// Converts and flattens the options into a generic key-value document.
    pub fn convert(&self, locale: &str) -> ChartResult<Map<String, Value>> {
        self.convert_options(locale).to_json_map()
    }
}

/// Converts `definition` and `data` for `locale` into a generic options document.
pub fn convert(
    definition: &ChartDefinition,
    data: &ChartData,
    locale: &str,
) -> ChartResult<Map<String, Value>> {
    ChartAdapter::new(definition, data).convert(locale)
}
