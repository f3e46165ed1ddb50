use chart_aria::aria::{
    AriaConfig, DecalConfig, DecalPalette, DefaultDecalPalette, PaletteScope, assign_decals,
    builtin_decals,
};
use chart_aria::core::{ChartModel, DataItem, DecalStyle, SeriesData, SeriesModel, VisualStyle};
use serde_json::json;

fn marker(id: u32) -> DecalStyle {
    DecalStyle::new().with("id", id).with("symbol", "rect")
}

fn palette() -> DefaultDecalPalette {
    DefaultDecalPalette::new(vec![marker(0), marker(1), marker(2)])
}

#[test]
fn series_level_decals_merge_style_override_over_palette() {
    let styled = SeriesData::new(vec![DataItem::new(1.0)]).with_style(
        VisualStyle::default().with_decal(DecalStyle::new().with("symbol", "circle")),
    );
    let mut chart = ChartModel::new()
        .with_series(SeriesModel::new("bar", styled).with_name("a"))
        .with_series(
            SeriesModel::new("bar", SeriesData::new(vec![DataItem::new(2.0)])).with_name("b"),
        );
    let mut palette = palette();

    let assignment =
        assign_decals(&mut chart, &AriaConfig::enabled(), &mut palette).expect("assign");

    assert_eq!(assignment.series_decals, 2);
    assert_eq!(assignment.item_decals, 0);
    let first = chart.series(0).and_then(|s| s.data.decal_visual()).expect("decal");
    assert_eq!(first.get("symbol"), Some(&json!("circle")));
    assert_eq!(first.get("id"), Some(&json!(0)));
    let second = chart.series(1).and_then(|s| s.data.decal_visual()).expect("decal");
    assert_eq!(second, &marker(1));
}

#[test]
fn per_item_mode_decorates_every_item() {
    let data = SeriesData::new(vec![
        DataItem::named("x", 1.0),
        DataItem::new(2.0),
        DataItem::named("z", 3.0),
    ])
    .with_item_style(
        1,
        VisualStyle::default().with_decal(DecalStyle::new().with("rotation", 1.0)),
    );
    let mut chart = ChartModel::new()
        .with_series(SeriesModel::new("pie", data).with_color_palette_on_data(true));
    let mut palette = palette();

    let assignment =
        assign_decals(&mut chart, &AriaConfig::enabled(), &mut palette).expect("assign");

    let data = &chart.series(0).expect("series").data;
    assert_eq!(assignment.item_decals, 3);
    assert!(data.decal_visual().is_none());
    assert_eq!(data.item_decal_visual(0), Some(&marker(0)));
    let second = data.item_decal_visual(1).expect("item decal");
    assert_eq!(second.get("rotation"), Some(&json!(1.0)));
    assert_eq!(second.get("id"), Some(&json!(1)));
    assert_eq!(data.item_decal_visual(2), Some(&marker(2)));
}

#[test]
fn per_item_mode_inherits_series_style_decal() {
    let data = SeriesData::new(vec![DataItem::new(1.0), DataItem::new(2.0)])
        .with_style(VisualStyle::default().with_decal(DecalStyle::new().with("symbol", "pin")));
    let mut chart = ChartModel::new()
        .with_series(SeriesModel::new("funnel", data).with_color_palette_on_data(true));
    let mut palette = palette();

    assign_decals(&mut chart, &AriaConfig::enabled(), &mut palette).expect("assign");

    let data = &chart.series(0).expect("series").data;
    for index in 0..2 {
        let decal = data.item_decal_visual(index).expect("item decal");
        assert_eq!(decal.get("symbol"), Some(&json!("pin")));
    }
}

#[test]
fn each_series_scope_starts_from_first_palette_entry() {
    fn pie(names: &[&str]) -> SeriesModel {
        let items = names.iter().map(|name| DataItem::named(*name, 1.0)).collect();
        SeriesModel::new("pie", SeriesData::new(items)).with_color_palette_on_data(true)
    }

    let mut chart = ChartModel::new()
        .with_series(pie(&["a", "b"]))
        .with_series(pie(&["c", "d"]));
    let mut palette = palette();

    assign_decals(&mut chart, &AriaConfig::enabled(), &mut palette).expect("assign");

    let first = &chart.series(0).expect("s0").data;
    let second = &chart.series(1).expect("s1").data;
    assert_eq!(first.item_decal_visual(0), second.item_decal_visual(0));
    assert_eq!(first.item_decal_visual(1), second.item_decal_visual(1));
}

#[test]
fn filtered_series_still_receive_decals() {
    let mut chart = ChartModel::new().with_series(
        SeriesModel::new("bar", SeriesData::new(vec![DataItem::new(1.0)])).with_filtered(true),
    );
    let mut palette = palette();

    let assignment =
        assign_decals(&mut chart, &AriaConfig::enabled(), &mut palette).expect("assign");

    assert_eq!(assignment.series_visited, 1);
    assert!(chart.series(0).and_then(|s| s.data.decal_visual()).is_some());
}

#[test]
fn switches_skip_assignment() {
    for config in [
        AriaConfig::default(),
        AriaConfig::enabled().with_decal(DecalConfig::hidden()),
    ] {
        let mut chart = ChartModel::new()
            .with_series(SeriesModel::new("bar", SeriesData::new(vec![DataItem::new(1.0)])));
        let mut palette = palette();

        let assignment = assign_decals(&mut chart, &config, &mut palette).expect("assign");

        assert!(assignment.skipped);
        assert!(chart.series(0).and_then(|s| s.data.decal_visual()).is_none());
    }
}

#[test]
fn assignment_is_idempotent_with_shared_or_fresh_palette() {
    let build = || {
        ChartModel::new()
            .with_series(
                SeriesModel::new("bar", SeriesData::new(vec![DataItem::new(1.0)])).with_name("a"),
            )
            .with_series(
                SeriesModel::new(
                    "pie",
                    SeriesData::new(vec![DataItem::named("x", 1.0), DataItem::new(2.0)]),
                )
                .with_color_palette_on_data(true),
            )
    };
    let snapshot = |chart: &ChartModel| {
        let series_level: Vec<Option<DecalStyle>> = chart
            .each_raw_series()
            .map(|s| s.data.decal_visual().cloned())
            .collect();
        let item_level: Vec<Option<DecalStyle>> = chart
            .each_raw_series()
            .flat_map(|s| (0..s.data.count()).map(move |i| s.data.item_decal_visual(i).cloned()))
            .collect();
        (series_level, item_level)
    };

    let config = AriaConfig::enabled();
    let mut chart = build();
    let mut shared = DefaultDecalPalette::default();
    assign_decals(&mut chart, &config, &mut shared).expect("first");
    let first = snapshot(&chart);
    assign_decals(&mut chart, &config, &mut shared).expect("second");
    assert_eq!(snapshot(&chart), first);

    let mut fresh = DefaultDecalPalette::default();
    assign_decals(&mut chart, &config, &mut fresh).expect("fresh");
    assert_eq!(snapshot(&chart), first);
}

#[test]
fn builtin_palette_entries_are_distinct() {
    let decals = builtin_decals();
    assert_eq!(decals.len(), 6);
    for (i, a) in decals.iter().enumerate() {
        for b in &decals[i + 1..] {
            assert_ne!(a, b);
        }
    }
    let mut palette = DefaultDecalPalette::default();
    assert_eq!(palette.decal_for(PaletteScope::Chart, "s", 1), decals[0]);
}

#[test]
fn config_palette_replaces_builtin_palette() {
    let config = AriaConfig::from_json_str(
        r#"{"show": true, "decal": {"decals": [{"symbol": "star", "symbolSize": 0.5}]}}"#,
    )
    .expect("config");
    let mut palette = DefaultDecalPalette::from_config(&config);

    let decal = palette.decal_for(PaletteScope::Chart, "any", 4);
    assert_eq!(decal.get("symbol"), Some(&json!("star")));
    assert_eq!(decal.len(), 2);
}

#[test]
fn unnamed_series_receive_distinct_decals() {
    let mut chart = ChartModel::new()
        .with_series(SeriesModel::new("bar", SeriesData::new(vec![DataItem::new(1.0)])))
        .with_series(SeriesModel::new("bar", SeriesData::new(vec![DataItem::new(2.0)])));
    let mut palette = DefaultDecalPalette::default();

    assign_decals(&mut chart, &AriaConfig::enabled(), &mut palette).expect("assign");

    let first = chart.series(0).and_then(|s| s.data.decal_visual()).expect("s0");
    let second = chart.series(1).and_then(|s| s.data.decal_visual()).expect("s1");
    assert_eq!(first, &builtin_decals()[0]);
    assert_eq!(second, &builtin_decals()[1]);
}

#[test]
fn shared_palette_does_not_carry_slots_across_passes() {
    let named = |a: &str, b: &str| {
        ChartModel::new()
            .with_series(
                SeriesModel::new("bar", SeriesData::new(vec![DataItem::new(1.0)])).with_name(a),
            )
            .with_series(
                SeriesModel::new("bar", SeriesData::new(vec![DataItem::new(2.0)])).with_name(b),
            )
    };
    let config = AriaConfig::enabled();
    let mut shared = palette();
    assign_decals(&mut named("A", "B"), &config, &mut shared).expect("first");

    let mut chart = named("C", "D");
    assign_decals(&mut chart, &config, &mut shared).expect("second");

    assert_eq!(chart.series(0).and_then(|s| s.data.decal_visual()), Some(&marker(0)));
    assert_eq!(chart.series(1).and_then(|s| s.data.decal_visual()), Some(&marker(1)));
}

#[test]
fn item_decals_track_series_style_between_passes() {
    let data = SeriesData::new(vec![DataItem::new(1.0), DataItem::new(2.0)])
        .with_style(VisualStyle::default().with_decal(DecalStyle::new().with("symbol", "pin")));
    let mut chart = ChartModel::new()
        .with_series(SeriesModel::new("pie", data).with_color_palette_on_data(true));
    let config = AriaConfig::enabled();
    let mut palette = palette();

    assign_decals(&mut chart, &config, &mut palette).expect("first");
    chart.series_mut(0).expect("series").data.set_style(
        VisualStyle::default().with_decal(DecalStyle::new().with("symbol", "star")),
    );
    assign_decals(&mut chart, &config, &mut palette).expect("second");

    let data = &chart.series(0).expect("series").data;
    assert_eq!(
        data.item_decal_visual(0).and_then(|decal| decal.get("symbol")),
        Some(&json!("star"))
    );
    assert!(data.item_style(0).is_none());
}

#[test]
fn switching_to_series_mode_drops_item_decals() {
    let items = vec![DataItem::named("x", 1.0), DataItem::named("y", 2.0)];
    let mut chart = ChartModel::new().with_series(
        SeriesModel::new("pie", SeriesData::new(items)).with_color_palette_on_data(true),
    );
    let config = AriaConfig::enabled();
    let mut palette = palette();
    assign_decals(&mut chart, &config, &mut palette).expect("per item");

    for series in chart.each_raw_series_mut() {
        series.use_color_palette_on_data = false;
    }
    assign_decals(&mut chart, &config, &mut palette).expect("series level");

    let data = &chart.series(0).expect("series").data;
    assert!(data.item_decal_visual(0).is_none());
    assert!(data.decal_visual().is_some());
}
