use indexmap::IndexMap;
use rangefield::RangeField;
use serde_json::json;

fn overrides(entries: &[(&str, f64)]) -> IndexMap<String, f64> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

#[test]
fn test_scalar_start_is_normalized() {
    let field = RangeField::new("weight", None, 10.0, 0.0, 100.0, IndexMap::new(), None);
    assert_eq!(field.start(), [10.0]);
}

#[test]
fn test_sequence_start_is_kept() {
    let field = RangeField::new(
        "weight",
        None,
        vec![10.0, 20.0],
        0.0,
        100.0,
        IndexMap::new(),
        None,
    );
    assert_eq!(field.start(), [10.0, 20.0]);
}

#[test]
fn test_set_start_normalizes_like_construction() {
    let mut field = RangeField::with_name("weight");
    field.set_start(42.0);
    assert_eq!(field.start(), [42.0]);

    field.set_start(vec![1.0, 2.0, 3.0]);
    assert_eq!(field.start(), [1.0, 2.0, 3.0]);
}

#[test]
fn test_defaults() {
    let field = RangeField::with_name("weight");
    assert_eq!(field.start(), [0.0]);
    assert_eq!(field.min(), 0.0);
    assert_eq!(field.max(), 100.0);
    assert!(field.override_range().is_empty());
    assert!(!field.is_snap());
    assert_eq!(field.step(), None);
    assert!(field.is_show_pips());
    assert_eq!(field.density(), 4);
    assert_eq!(field.unit(), "");
    assert_eq!(field.decimal_places(), 2);
    assert_eq!(field.title(), None);
    assert_eq!(field.value(), None);
    assert!(field.data().is_none());
}

#[test]
fn test_fluent_setters_chain() {
    let mut field = RangeField::with_name("weight");
    field.set_min(1.0).set_max(9.0).set_step(2.0);

    assert_eq!(field.min(), 1.0);
    assert_eq!(field.max(), 9.0);
    assert_eq!(field.step(), Some(2.0));
}

#[test]
fn test_set_format_sets_both_fields() {
    let mut by_format = RangeField::with_name("weight");
    by_format.set_format("kg", 1);

    let mut separately = RangeField::with_name("weight");
    separately.set_unit("kg").set_decimal_places(1);

    assert_eq!(by_format.unit(), separately.unit());
    assert_eq!(by_format.decimal_places(), separately.decimal_places());
    assert_eq!(by_format.build(), separately.build());
}

#[test]
fn test_build_is_deterministic() {
    let mut field = RangeField::with_name("weight");
    field.set_snap(true).set_step(5.0);

    let first = field.build();
    let second = field.build();
    assert_eq!(first, second);
}

#[test]
fn test_build_reflects_mutations() {
    let mut field = RangeField::with_name("weight");
    let before = field.build();
    field.set_max(200.0);
    let after = field.build();

    assert_eq!(before.range["max"], 100.0);
    assert_eq!(after.range["max"], 200.0);
    assert_eq!(field.data(), Some(&after));
}

#[test]
fn test_pips_absent_when_disabled() {
    let mut field = RangeField::with_name("weight");
    field.set_show_pips(false);

    let config = field.build();
    assert!(config.pips.is_none());

    let value = serde_json::to_value(&config).unwrap();
    assert!(value.get("pips").is_none());
}

#[test]
fn test_pips_present_when_enabled() {
    let mut field = RangeField::with_name("weight");
    field.set_show_pips(true).set_density(7);

    let config = field.build();
    let pips = config.pips.expect("pips should be present");
    assert_eq!(pips.mode, "steps");
    assert!(pips.stepped);
    assert_eq!(pips.density, 7);
}

#[test]
fn test_step_key_absent_when_unset() {
    let mut field = RangeField::with_name("weight");
    let value = serde_json::to_value(field.build()).unwrap();
    assert!(value.get("step").is_none());

    field.set_step(2.5);
    let value = serde_json::to_value(field.build()).unwrap();
    assert_eq!(value["step"], json!(2.5));
}

#[test]
fn test_default_range_without_overrides() {
    let mut field = RangeField::with_name("weight");
    field.set_min(5.0).set_max(50.0);

    let config = field.build();
    let keys: Vec<&str> = config.range.keys().map(String::as_str).collect();
    assert_eq!(keys, ["min", "max"]);
    assert_eq!(config.range["min"], 5.0);
    assert_eq!(config.range["max"], 50.0);
}

#[test]
fn test_overrides_extend_default_range() {
    let field_overrides = overrides(&[("10%", 20.0), ("90%", 80.0)]);
    let mut field = RangeField::new("weight", None, 0.0, 0.0, 100.0, field_overrides, None);

    let config = field.build();
    assert_eq!(
        serde_json::to_value(&config.range).unwrap(),
        json!({"min": 0.0, "max": 100.0, "10%": 20.0, "90%": 80.0})
    );
}

#[test]
fn test_overrides_win_on_collision() {
    let mut field = RangeField::with_name("weight");
    field.set_override_range(overrides(&[("min", 15.0), ("75%", 60.0)]));

    let config = field.build();
    assert_eq!(config.range["min"], 15.0);
    assert_eq!(config.range["max"], 100.0);
    assert_eq!(config.range["75%"], 60.0);
}

#[test]
fn test_override_insertion_order_is_preserved() {
    let mut field = RangeField::with_name("weight");
    field.set_override_range(overrides(&[("90%", 80.0), ("10%", 20.0)]));

    let config = field.build();
    let keys: Vec<&str> = config.range.keys().map(String::as_str).collect();
    assert_eq!(keys, ["min", "max", "90%", "10%"]);
}

#[test]
fn test_inverted_bounds_are_accepted() {
    let mut field = RangeField::new("weight", None, 0.0, 100.0, 0.0, IndexMap::new(), None);
    let config = field.build();
    assert_eq!(config.range["min"], 100.0);
    assert_eq!(config.range["max"], 0.0);
}

#[test]
fn test_end_to_end_price_example() {
    let mut field = RangeField::new("price", None, 10.0, 0.0, 100.0, IndexMap::new(), None);
    field.set_show_pips(true).set_density(5).set_format("kg", 1);

    let value = serde_json::to_value(field.build()).unwrap();
    assert_eq!(
        value,
        json!({
            "start": [10.0],
            "snap": false,
            "animate": true,
            "animationDuration": 300,
            "range": {"min": 0.0, "max": 100.0},
            "unit": "kg",
            "decimalPlaces": 1,
            "pips": {"mode": "steps", "stepped": true, "density": 5}
        })
    );
}
