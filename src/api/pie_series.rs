use tracing::trace;

use crate::core::{ChartData, ChartDefinition};

use super::options::{ChartOptions, RoseType, SeriesKind, SeriesOptions, SeriesPoint, TitleOptions};

pub const PIE_SERIES_NAME: &str = "Data";

/// Converts to a single radius-rose pie series.
///
/// Only the first two columns are read: column 0 names the slice and
/// column 1 sizes it. Axis settings are ignored.
pub fn convert_pie_chart(
    definition: &ChartDefinition,
    data: &ChartData,
    locale: &str,
) -> ChartOptions {
    let mut slices = Vec::with_capacity(data.data.len());
    for (row_index, row) in data.data.iter().enumerate() {
        let [name, value, ..] = row.as_slice() else {
            trace!(row_index, "skip short pie row");
            continue;
        };
        match value.as_number() {
            Some(value) => slices.push(SeriesPoint::named(name.category_label(), value)),
            None => trace!(row_index, "skip non-numeric pie value"),
        }
    }

    let mut series = SeriesOptions::new(PIE_SERIES_NAME, SeriesKind::Pie, slices);
    series.rose_type = Some(RoseType::Radius);

    ChartOptions {
        title: TitleOptions {
            text: definition.title.resolve(locale).to_owned(),
            subtext: Some(data.description.resolve(locale).to_owned()),
        },
        x_axis: None,
        y_axis: None,
        series: vec![series],
    }
}
