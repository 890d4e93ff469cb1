use chart_adapter::api::{ChartAdapter, PIE_SERIES_NAME, RoseType, SeriesKind, SeriesPoint};
use chart_adapter::core::{
    Axis, Cell, ChartData, ChartDefinition, ChartType, Field, FieldDataType, LocalizedText,
    Schema,
};
use serde_json::json;

fn pie_definition() -> ChartDefinition {
    ChartDefinition::new(ChartType::Pie, LocalizedText::english("T")).with_axes(
        Axis::titled(LocalizedText::english("ignored x")),
        Axis::titled(LocalizedText::english("ignored y")),
    )
}

fn three_column_data(rows: Vec<Vec<Cell>>) -> ChartData {
    ChartData::new(
        Schema::new(vec![
            Field::new("date", FieldDataType::String),
            Field::new("a", FieldDataType::Number),
            Field::new("b", FieldDataType::Number),
        ]),
        rows,
    )
    .with_description(LocalizedText::english("Shares"))
}

#[test]
fn pie_chart_uses_first_two_columns_only() {
    let data = three_column_data(vec![
        vec![Cell::from("d1"), Cell::from(1), Cell::from(2)],
        vec![Cell::from("d2"), Cell::from(3), Cell::Null],
    ]);

    let options = ChartAdapter::new(&pie_definition(), &data).convert_options("en");

    assert_eq!(options.title.text, "T");
    assert_eq!(options.title.subtext.as_deref(), Some("Shares"));
    assert!(options.x_axis.is_none());
    assert!(options.y_axis.is_none());
    assert_eq!(options.series.len(), 1);

    let series = &options.series[0];
    assert_eq!(series.name, PIE_SERIES_NAME);
    assert_eq!(series.kind, SeriesKind::Pie);
    assert_eq!(series.rose_type, Some(RoseType::Radius));
    assert_eq!(
        series.data,
        vec![SeriesPoint::named("d1", 1.0), SeriesPoint::named("d2", 3.0)]
    );
}

#[test]
fn pie_chart_skips_short_and_non_numeric_rows() {
    let data = three_column_data(vec![
        vec![Cell::from("north"), Cell::from(4)],
        vec![Cell::from("south")],
        vec![],
        vec![Cell::from("east"), Cell::from("12")],
        vec![Cell::from("west"), Cell::Null, Cell::from(9)],
        vec![Cell::Number(2024.0), Cell::Number(0.5)],
    ]);

    let options = ChartAdapter::new(&pie_definition(), &data).convert_options("en");
    assert_eq!(
        options.series[0].data,
        vec![SeriesPoint::named("north", 4.0), SeriesPoint::named("2024", 0.5)]
    );
}

#[test]
fn pie_chart_document_shape() {
    let data = three_column_data(vec![vec![Cell::from("d1"), Cell::from(1), Cell::from(2)]]);
    let document = ChartAdapter::new(&pie_definition(), &data)
        .convert("fr")
        .expect("convert");

    assert!(!document.contains_key("xAxis"));
    assert!(!document.contains_key("yAxis"));
    assert_eq!(document["title"], json!({ "text": "T", "subtext": "Shares" }));
    assert_eq!(
        document["series"],
        json!([{
            "name": "Data",
            "type": "pie",
            "data": [{ "name": "d1", "value": 1.0 }],
            "roseType": "radius"
        }])
    );
}

#[test]
fn pie_chart_without_rows_still_has_one_empty_series() {
    let data = three_column_data(Vec::new());
    let options = ChartAdapter::new(&pie_definition(), &data).convert_options("en");
    assert_eq!(options.series.len(), 1);
    assert!(options.series[0].data.is_empty());
}
