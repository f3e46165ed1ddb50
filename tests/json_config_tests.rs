use chart_aria::core::{ChartModel, RawValue};
use chart_aria::render::NullSurface;
use chart_aria::{AriaConfig, AriaEngine, LocaleRegistry, LocaleResource};

const CHART_JSON: &str = r#"{
    "title": {"text": "Traffic"},
    "locale": "en",
    "series": [
        {
            "type": "pie",
            "name": "Sources",
            "useColorPaletteOnData": true,
            "data": {
                "items": [
                    {"name": "Search", "value": 1048},
                    {"name": "Direct", "value": 735},
                    {"name": "Email", "value": 580}
                ],
                "itemStyles": {"1": {"decal": {"symbol": "circle"}}}
            }
        }
    ]
}"#;

const ARIA_JSON: &str = r#"{
    "show": true,
    "label": {
        "data": {"maxCount": 2, "withName": "{name}: {value}"}
    }
}"#;

#[test]
fn chart_and_config_load_from_json() {
    let mut chart = ChartModel::from_json_str(CHART_JSON).expect("chart");
    let config = AriaConfig::from_json_str(ARIA_JSON).expect("config");
    let mut engine = AriaEngine::new(NullSurface::default(), config).expect("engine");

    let outcome = engine.apply(&mut chart).expect("apply");

    assert_eq!(
        outcome.label_text(),
        Some(
            "This is a chart about \"Traffic\" with type Pie chart named Sources.\
             The first 2 items are: Search: 1048, Direct: 735. "
        )
    );
    assert_eq!(outcome.decals.item_decals, 3);

    let data = &chart.series(0).expect("series").data;
    assert_eq!(data.raw_value(0), Some(&RawValue::Number(1048.0)));
    let direct = data.item_decal_visual(1).expect("decal");
    assert_eq!(direct.get("symbol"), Some(&serde_json::json!("circle")));
}

#[test]
fn custom_locale_documents_can_be_registered() {
    let locale = LocaleResource::from_json_str(
        "pirate",
        r#"{
            "aria": {
                "general": {"withTitle": "Arr, {title}", "withoutTitle": "Arr"},
                "series": {
                    "single": {"prefix": "", "withName": " {seriesName}", "withoutName": " a {seriesType}"},
                    "multiple": {
                        "prefix": " {seriesCount} of 'em",
                        "withName": " {seriesName}",
                        "withoutName": " a {seriesType}",
                        "separator": {"middle": ";", "end": "!"}
                    }
                },
                "data": {
                    "allData": ": ",
                    "partialData": " first {displayCnt}: ",
                    "withName": "{name} {value}",
                    "withoutName": "{value}",
                    "separator": {"middle": " ", "end": ""}
                }
            },
            "series": {"typeNames": {"bar": "plank"}}
        }"#,
    )
    .expect("locale");
    let mut locales = LocaleRegistry::with_builtins().expect("builtins");
    locales.register(locale);

    let mut chart = ChartModel::from_json_str(
        r#"{"locale": "PIRATE", "series": [
            {"type": "bar", "data": {"items": [{"value": 1}, {"value": 2}]}},
            {"type": "bar", "name": "gold", "data": {"items": [{"value": 3}]}}
        ]}"#,
    )
    .expect("chart");
    let mut engine = AriaEngine::new(NullSurface::default(), AriaConfig::enabled())
        .expect("engine")
        .with_locales(locales);

    let outcome = engine.apply(&mut chart).expect("apply");

    assert_eq!(
        outcome.label_text(),
        Some("Arr 2 of 'em a plank: 1 2; gold: 3!")
    );
}

#[test]
fn malformed_documents_are_reported() {
    assert!(ChartModel::from_json_str("{\"series\": 3}").is_err());
    assert!(AriaConfig::from_json_str("3").is_err());
    assert!(LocaleResource::from_json_str("xx", "{}").is_err());
}
