//! Configuration types for the energy card.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color_scheme::ColorScheme;

/// Toggle individual card elements on or off.
///
/// All features default to `true` (enabled). Disable features to embed a
/// minimal card inside an existing dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Horizontal grid lines.
    pub grid: bool,
    /// Vertical hour-tick lines and their labels.
    pub hour_ticks: bool,
    /// Charge/discharge legend swatches.
    pub legend: bool,
    /// The travelling "now" marker.
    pub marker: bool,
    /// Battery state-of-charge icon in the card's top-right corner.
    pub battery_icon: bool,
    /// Caption text below the chart.
    pub caption: bool,
    /// Snapshot (save as PNG) button in the window top bar.
    pub snapshot_button: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            grid: true,
            hour_ticks: true,
            legend: true,
            marker: true,
            battery_icon: true,
            caption: true,
            snapshot_button: true,
        }
    }
}

/// Top-level configuration for the energy card.
#[derive(Clone)]
pub struct EnergyCardConfig {
    // ── Canvas ───────────────────────────────────────────────────────────────
    /// Card width in pixels.
    pub width: f32,
    /// Card height in pixels.
    pub height: f32,
    /// Seconds per animation cycle.
    pub duration_secs: f64,
    /// Caption rendered below the chart. `None` suppresses it even when
    /// the caption feature is enabled.
    pub caption: Option<String>,

    // ── Appearance ───────────────────────────────────────────────────────────
    /// Toggle individual card elements on/off.
    pub features: FeatureFlags,
    /// Color scheme / visual theme.
    pub color_scheme: ColorScheme,
    /// Optional brand logo (SVG) rendered in the card's top-left corner.
    /// A missing or unparsable file silently leaves the corner empty.
    pub logo_svg_path: Option<PathBuf>,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title for the standalone runner.
    pub title: String,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for EnergyCardConfig {
    fn default() -> Self {
        Self {
            width: 860.0,
            height: 460.0,
            duration_secs: 5.0,
            caption: Some(
                "24h profile with battery charge (top) and discharge (bottom).".to_string(),
            ),
            features: FeatureFlags::default(),
            color_scheme: ColorScheme::default(),
            logo_svg_path: None,
            title: "Energy Card".to_string(),
            native_options: None,
        }
    }
}
