//! Config persistence: save and load the card configuration to/from JSON
//! or YAML files.
//!
//! This module provides serializable mirror types for config fields that
//! cannot directly derive serde traits (e.g., egui's Color32). Runtime-only
//! fields (native window options) are intentionally not persisted.

use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::color_scheme::{CardPalette, ColorScheme};
use crate::config::{EnergyCardConfig, FeatureFlags};

fn pack(c: Color32) -> [u8; 4] {
    c.to_array()
}

fn unpack(c: [u8; 4]) -> Color32 {
    Color32::from_rgba_premultiplied(c[0], c[1], c[2], c[3])
}

// ---------- Serializable mirror types ----------

/// Serializable version of CardPalette (colors as RGBA byte arrays).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardPaletteSerde {
    pub frame_fill: [u8; 4],
    pub card_fill: [u8; 4],
    pub baseline: [u8; 4],
    pub base_area: [u8; 4],
    pub charge_area: [u8; 4],
    pub discharge_area: [u8; 4],
    pub grid: [u8; 4],
    pub hour_grid: [u8; 4],
    pub text: [u8; 4],
    pub marker: [u8; 4],
    pub battery_bar: [u8; 4],
    pub battery_outline: [u8; 4],
}

impl From<&CardPalette> for CardPaletteSerde {
    fn from(p: &CardPalette) -> Self {
        Self {
            frame_fill: pack(p.frame_fill),
            card_fill: pack(p.card_fill),
            baseline: pack(p.baseline),
            base_area: pack(p.base_area),
            charge_area: pack(p.charge_area),
            discharge_area: pack(p.discharge_area),
            grid: pack(p.grid),
            hour_grid: pack(p.hour_grid),
            text: pack(p.text),
            marker: pack(p.marker),
            battery_bar: pack(p.battery_bar),
            battery_outline: pack(p.battery_outline),
        }
    }
}

impl CardPaletteSerde {
    /// Convert back to a CardPalette.
    pub fn into_palette(self) -> CardPalette {
        CardPalette {
            frame_fill: unpack(self.frame_fill),
            card_fill: unpack(self.card_fill),
            baseline: unpack(self.baseline),
            base_area: unpack(self.base_area),
            charge_area: unpack(self.charge_area),
            discharge_area: unpack(self.discharge_area),
            grid: unpack(self.grid),
            hour_grid: unpack(self.hour_grid),
            text: unpack(self.text),
            marker: unpack(self.marker),
            battery_bar: unpack(self.battery_bar),
            battery_outline: unpack(self.battery_outline),
        }
    }
}

/// Serializable version of ColorScheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ColorSchemeSerde {
    Violet,
    Dark,
    Light,
    Custom(CardPaletteSerde),
}

impl From<&ColorScheme> for ColorSchemeSerde {
    fn from(s: &ColorScheme) -> Self {
        match s {
            ColorScheme::Violet => ColorSchemeSerde::Violet,
            ColorScheme::Dark => ColorSchemeSerde::Dark,
            ColorScheme::Light => ColorSchemeSerde::Light,
            ColorScheme::Custom(p) => ColorSchemeSerde::Custom(CardPaletteSerde::from(p)),
        }
    }
}

impl ColorSchemeSerde {
    /// Convert back to a ColorScheme.
    pub fn into_scheme(self) -> ColorScheme {
        match self {
            ColorSchemeSerde::Violet => ColorScheme::Violet,
            ColorSchemeSerde::Dark => ColorScheme::Dark,
            ColorSchemeSerde::Light => ColorScheme::Light,
            ColorSchemeSerde::Custom(p) => ColorScheme::Custom(p.into_palette()),
        }
    }
}

/// Full persistable card configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfigSerde {
    pub width: f32,
    pub height: f32,
    pub duration_secs: f64,
    pub caption: Option<String>,
    pub features: FeatureFlags,
    pub color_scheme: ColorSchemeSerde,
    pub logo_svg_path: Option<PathBuf>,
    pub title: String,
}

impl From<&EnergyCardConfig> for CardConfigSerde {
    fn from(cfg: &EnergyCardConfig) -> Self {
        Self {
            width: cfg.width,
            height: cfg.height,
            duration_secs: cfg.duration_secs,
            caption: cfg.caption.clone(),
            features: cfg.features.clone(),
            color_scheme: ColorSchemeSerde::from(&cfg.color_scheme),
            logo_svg_path: cfg.logo_svg_path.clone(),
            title: cfg.title.clone(),
        }
    }
}

impl CardConfigSerde {
    /// Convert back to an EnergyCardConfig. Native window options are not
    /// persisted and come back as `None`.
    pub fn into_config(self) -> EnergyCardConfig {
        EnergyCardConfig {
            width: self.width,
            height: self.height,
            duration_secs: self.duration_secs,
            caption: self.caption,
            features: self.features,
            color_scheme: self.color_scheme.into_scheme(),
            logo_svg_path: self.logo_svg_path,
            title: self.title,
            native_options: None,
        }
    }
}

// ---------- Public API ----------

/// Serialize the card configuration as pretty JSON.
pub fn config_to_json(cfg: &CardConfigSerde) -> Result<String, String> {
    serde_json::to_string_pretty(cfg).map_err(|e| e.to_string())
}

/// Deserialize a card configuration from JSON.
pub fn config_from_json(json: &str) -> Result<CardConfigSerde, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

/// Serialize the card configuration as YAML.
pub fn config_to_yaml(cfg: &CardConfigSerde) -> Result<String, String> {
    serde_yaml::to_string(cfg).map_err(|e| e.to_string())
}

/// Deserialize a card configuration from YAML.
pub fn config_from_yaml(yaml: &str) -> Result<CardConfigSerde, String> {
    serde_yaml::from_str(yaml).map_err(|e| e.to_string())
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Save the configuration to a file; the format is chosen by extension
/// (`.yaml`/`.yml` for YAML, anything else JSON).
pub fn save_config_to_path(cfg: &EnergyCardConfig, path: &Path) -> Result<(), String> {
    let mirror = CardConfigSerde::from(cfg);
    let txt = if is_yaml(path) {
        config_to_yaml(&mirror)?
    } else {
        config_to_json(&mirror)?
    };
    std::fs::write(path, txt).map_err(|e| e.to_string())
}

/// Load a configuration from a file saved by [`save_config_to_path`].
pub fn load_config_from_path(path: &Path) -> Result<EnergyCardConfig, String> {
    let txt = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let mirror = if is_yaml(path) {
        config_from_yaml(&txt)?
    } else {
        config_from_json(&txt)?
    };
    Ok(mirror.into_config())
}
