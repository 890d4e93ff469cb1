use chart_adapter::api::{ChartRequest, convert_batch, convert_json_str};
use chart_adapter::core::{Cell, ChartData, ChartDefinition, ChartType, LocalizedText};
use chart_adapter::error::ChartError;
use serde_json::json;

const MIDDLE_EARTH: &str = include_str!("fixtures/middle_earth_line.json");

fn minimal_request(chart_type: &str) -> String {
    json!({
        "locale": "en",
        "definition": { "type": chart_type, "title": { "en": "T" } },
        "data": {
            "schema": { "fields": [
                { "name": "date", "type": "string" },
                { "name": "a", "type": "number", "title": { "en": "a" } },
                { "name": "b", "type": "number", "title": { "en": "b" } }
            ] },
            "data": [["d1", 1, 2], ["d2", 3, null]]
        }
    })
    .to_string()
}

#[test]
fn fixture_request_converts_with_french_locale() {
    let request = ChartRequest::from_json_str(MIDDLE_EARTH).expect("fixture decodes");
    assert_eq!(request.effective_locale(), "fr");
    assert_eq!(request.definition.chart_type, ChartType::Line);
    assert_eq!(request.definition.license.code, "CC0-1.0");
    assert_eq!(request.definition.y_axis.title, LocalizedText::english("support%"));

    let options = request.convert_options();
    assert_eq!(options.title.text, "Exemple de graphique linéaire");
    assert_eq!(options.x_axis.as_ref().expect("x axis").name, "Date");
    assert_eq!(options.y_axis.as_ref().expect("y axis").name, "support%");
    assert_eq!(options.x_axis.as_ref().expect("x axis").categories().len(), 5);

    let names: Vec<_> = options.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Elfes", "Ents", "Orcs"]);
    assert_eq!(
        options.series_named("Elfes").expect("a2").values(),
        vec![35.0, 36.0, 35.0, 30.0]
    );
    assert_eq!(
        options.series_named("Ents").expect("a3").values(),
        vec![37.0, 33.0, 37.0, 36.0]
    );
    assert_eq!(
        options.series_named("Orcs").expect("a4").values(),
        vec![8.0, 8.0, 6.0, 7.0]
    );
}

#[test]
fn every_supported_type_converts_minimal_request() {
    for chart_type in ChartType::ALL {
        let document =
            convert_json_str(&minimal_request(chart_type.as_str())).expect("supported type");
        assert_eq!(document["title"]["text"], json!("T"), "{chart_type}");
    }
}

#[test]
fn unsupported_type_is_reported_by_name() {
    let err = convert_json_str(&minimal_request("donut")).expect_err("donut is unsupported");
    assert_eq!(err, ChartError::UnsupportedChartType("donut".to_owned()));
    assert_eq!(err.to_string(), "unsupported chart type: donut");
}

#[test]
fn malformed_documents_are_decode_errors() {
    assert!(matches!(
        ChartRequest::from_json_str("{ not json"),
        Err(ChartError::Decode(_))
    ));
    assert!(matches!(
        ChartRequest::from_json_str(r#"{ "definition": { "type": "line" } }"#),
        Err(ChartError::Decode(_))
    ));

    let bad_field = minimal_request("bar").replace(r#""type":"string""#, r#""type":"date""#);
    assert!(matches!(
        ChartRequest::from_json_str(&bad_field),
        Err(ChartError::Decode(message)) if message.contains("date")
    ));
}

#[test]
fn missing_or_empty_locale_defaults_to_english() {
    let definition = ChartDefinition::new(
        ChartType::Line,
        LocalizedText::english("Hello").with("es", "Hola"),
    );
    let request = ChartRequest::new(definition, ChartData::default());
    assert_eq!(request.effective_locale(), "en");
    assert_eq!(request.clone().with_locale("").effective_locale(), "en");

    let spanish = request.clone().with_locale("es");
    assert_eq!(spanish.convert_options().title.text, "Hola");
    assert_eq!(request.convert_options().title.text, "Hello");

    let decoded = ChartRequest::from_json_str(
        r#"{ "definition": { "type": "line", "title": "Hello" }, "data": {} }"#,
    )
    .expect("decode");
    assert_eq!(decoded.locale, None);
    assert_eq!(decoded.convert_options().title.text, "Hello");
}

#[test]
fn request_roundtrips_through_pretty_json() {
    let request = ChartRequest::from_json_str(MIDDLE_EARTH).expect("fixture decodes");
    let json = request.to_json_pretty().expect("encode");
    let restored = ChartRequest::from_json_str(&json).expect("decode");
    assert_eq!(restored, request);
}

#[test]
fn batch_conversion_keeps_input_order() {
    let mut requests: Vec<ChartRequest> = ["line", "pie", "scatter"]
        .into_iter()
        .map(|tag| ChartRequest::from_json_str(&minimal_request(tag)).expect("request"))
        .collect();
    requests[1].data.data.push(vec![Cell::from("d3"), Cell::from(5)]);

    let results = convert_batch(&requests);
    assert_eq!(results.len(), 3);

    let line = results[0].as_ref().expect("line");
    assert_eq!(line["series"][0]["type"], json!("line"));
    let pie = results[1].as_ref().expect("pie");
    assert_eq!(pie["series"][0]["data"].as_array().map(Vec::len), Some(3));
    let scatter = results[2].as_ref().expect("scatter");
    assert_eq!(scatter["series"][0]["type"], json!("scatter"));
}
