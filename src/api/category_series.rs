use tracing::trace;

use crate::core::{Cell, ChartData, ChartDefinition, Field, Row};

use super::options::{
    AreaStyle, AxisOptions, ChartOptions, LabelOptions, MarkerSymbol, SeriesKind, SeriesOptions,
    SeriesPoint, TitleOptions,
};

pub const AREA_FILL_OPACITY: f64 = 0.2;
pub const SCATTER_SYMBOL: MarkerSymbol = MarkerSymbol::RoundRect;
pub const SCATTER_SYMBOL_SIZE: u32 = 20;
pub const SCATTER_SYMBOL_ROTATE_DEG: f64 = 10.0;

/// Chart flavours sharing the category-axis algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStyle {
    Line,
    Bar,
    Area,
    Scatter,
}

impl CategoryStyle {
    #[must_use]
    pub const fn series_kind(self) -> SeriesKind {
        match self {
            Self::Line | Self::Area => SeriesKind::Line,
            Self::Bar => SeriesKind::Bar,
            Self::Scatter => SeriesKind::Scatter,
        }
    }

    /// Bar and area charts carry the data description as subtitle.
    #[must_use]
    pub const fn shows_subtitle(self) -> bool {
        matches!(self, Self::Bar | Self::Area)
    }

    fn point(self, value: f64) -> SeriesPoint {
        match self {
            Self::Scatter => SeriesPoint {
                symbol: Some(SCATTER_SYMBOL),
                symbol_size: Some(SCATTER_SYMBOL_SIZE),
                symbol_rotate: Some(SCATTER_SYMBOL_ROTATE_DEG),
                ..SeriesPoint::value(value)
            },
            Self::Line | Self::Bar | Self::Area => SeriesPoint::value(value),
        }
    }

    fn decorate(self, mut series: SeriesOptions) -> SeriesOptions {
        if self == Self::Area {
            series.label = Some(LabelOptions { show: true });
            series.area_style = Some(AreaStyle {
                opacity: AREA_FILL_OPACITY,
            });
        }
        series
    }
}

/// Category labels from column 0, one per row.
///
/// Empty rows still contribute an (empty) category so the axis length always
/// matches the row count.
#[must_use]
pub fn build_categories(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .map(|row| row.first().map_or_else(String::new, Cell::category_label))
        .collect()
}

/// Numeric values of column `field_index`, skipping rows that cannot supply one.
#[must_use]
pub fn collect_numeric_column(rows: &[Row], field_index: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(rows.len());
    for (row_index, row) in rows.iter().enumerate() {
        if row.len() < 2 {
            trace!(row_index, field_index, "skip short row");
            continue;
        }
        match row.get(field_index).and_then(Cell::as_number) {
            Some(value) => values.push(value),
            None => trace!(row_index, field_index, "skip non-numeric cell"),
        }
    }
    values
}

/// Converts a definition/data pair with the shared category-axis algorithm.
pub fn convert_category_chart(
    style: CategoryStyle,
    definition: &ChartDefinition,
    data: &ChartData,
    locale: &str,
) -> ChartOptions {
    let title = TitleOptions {
        text: definition.title.resolve(locale).to_owned(),
        subtext: style
            .shows_subtitle()
            .then(|| data.description.resolve(locale).to_owned()),
    };

    let series = data
        .schema
        .value_fields()
        .map(|(field_index, field)| build_series(style, field, field_index, &data.data, locale))
        .collect();

    ChartOptions {
        title,
        x_axis: Some(AxisOptions::category(
            definition.x_axis.title.resolve(locale),
            build_categories(&data.data),
        )),
        y_axis: Some(AxisOptions::value(definition.y_axis.title.resolve(locale))),
        series,
    }
}

fn build_series(
    style: CategoryStyle,
    field: &Field,
    field_index: usize,
    rows: &[Row],
    locale: &str,
) -> SeriesOptions {
    let points = collect_numeric_column(rows, field_index)
        .into_iter()
        .map(|value| style.point(value))
        .collect();
    style.decorate(SeriesOptions::new(
        field.title.resolve(locale),
        style.series_kind(),
        points,
    ))
}
