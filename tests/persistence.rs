use egui::Color32;
use energy_card::color_scheme::{CardPalette, ColorScheme};
use energy_card::config::EnergyCardConfig;
use energy_card::persistence::*;

fn custom_palette() -> CardPalette {
    let mut p = ColorScheme::Violet.palette();
    p.battery_bar = Color32::from_rgb(1, 2, 3);
    p.marker = Color32::from_rgba_premultiplied(10, 20, 30, 40);
    p
}

#[test]
fn json_round_trip_preserves_the_config() {
    let mut cfg = EnergyCardConfig::default();
    cfg.duration_secs = 7.5;
    cfg.caption = Some("demo".to_string());
    cfg.features.legend = false;

    let json = config_to_json(&CardConfigSerde::from(&cfg)).unwrap();
    let back = config_from_json(&json).unwrap().into_config();

    assert_eq!(back.width, cfg.width);
    assert_eq!(back.height, cfg.height);
    assert_eq!(back.duration_secs, 7.5);
    assert_eq!(back.caption.as_deref(), Some("demo"));
    assert!(!back.features.legend);
    assert_eq!(back.color_scheme, ColorScheme::Violet);
}

#[test]
fn yaml_round_trip_preserves_a_custom_palette() {
    let mut cfg = EnergyCardConfig::default();
    cfg.color_scheme = ColorScheme::Custom(custom_palette());

    let yaml = config_to_yaml(&CardConfigSerde::from(&cfg)).unwrap();
    let back = config_from_yaml(&yaml).unwrap().into_config();

    match back.color_scheme {
        ColorScheme::Custom(p) => {
            assert_eq!(p.battery_bar, Color32::from_rgb(1, 2, 3));
            assert_eq!(p.marker, Color32::from_rgba_premultiplied(10, 20, 30, 40));
        }
        other => panic!("expected custom scheme, got {other:?}"),
    }
}

#[test]
fn save_and_load_json_file() {
    let mut cfg = EnergyCardConfig::default();
    cfg.title = "saved".to_string();
    let path = std::env::temp_dir().join("energy_card_test_cfg.json");

    save_config_to_path(&cfg, &path).unwrap();
    let back = load_config_from_path(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(back.title, "saved");
    // Window options are runtime-only and never persisted.
    assert!(back.native_options.is_none());
}

#[test]
fn yaml_extension_selects_yaml_format() {
    let cfg = EnergyCardConfig::default();
    let path = std::env::temp_dir().join("energy_card_test_cfg.yaml");

    save_config_to_path(&cfg, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(!text.trim_start().starts_with('{'));
    assert!(text.contains("duration_secs"));
}

#[test]
fn load_reports_missing_files_as_errors() {
    let path = std::env::temp_dir().join("energy_card_does_not_exist.json");
    assert!(load_config_from_path(&path).is_err());
}
