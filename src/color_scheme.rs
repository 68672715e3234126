//! Color scheme definitions for the energy card.
//!
//! This module contains the ColorScheme enum, the resolved CardPalette,
//! and helpers to apply a matching egui theme to a context.

use eframe::egui::{Color32, Context, Visuals};

/// Resolved set of colors used by the card and battery icon painters.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPalette {
    /// Outer frame card behind the main card.
    pub frame_fill: Color32,
    /// Main card background.
    pub card_fill: Color32,
    /// Baseline curve stroke.
    pub baseline: Color32,
    /// Fill of the baseline area down to the scale minimum.
    pub base_area: Color32,
    /// Fill of the charge band (above the baseline).
    pub charge_area: Color32,
    /// Fill of the discharge band (below the baseline).
    pub discharge_area: Color32,
    /// Horizontal grid lines.
    pub grid: Color32,
    /// Vertical hour-tick lines.
    pub hour_grid: Color32,
    /// Hour-tick and legend text.
    pub text: Color32,
    /// The travelling "now" marker.
    pub marker: Color32,
    /// Battery icon bar fill.
    pub battery_bar: Color32,
    /// Battery icon body and bar outlines.
    pub battery_outline: Color32,
}

/// Visual theme for the card, including user-defined palettes.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorScheme {
    /// Violet card in a translucent white frame (the classic look).
    Violet,
    /// Near-black card for dark dashboards.
    Dark,
    /// Light card with dark curves.
    Light,
    /// User-defined palette.
    Custom(CardPalette),
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Violet
    }
}

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Violet, ColorScheme::Dark, ColorScheme::Light]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Violet => "Violet",
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
            ColorScheme::Custom(_) => "Custom",
        }
    }

    /// Resolve the scheme to concrete painter colors.
    pub fn palette(&self) -> CardPalette {
        match self {
            ColorScheme::Violet => CardPalette {
                frame_fill: Color32::from_rgba_unmultiplied(255, 255, 255, 153),
                card_fill: Color32::from_rgba_unmultiplied(112, 70, 240, 242),
                baseline: Color32::WHITE,
                base_area: Color32::from_rgba_unmultiplied(255, 255, 255, 46),
                charge_area: Color32::from_rgba_unmultiplied(255, 255, 255, 89),
                discharge_area: Color32::from_rgba_unmultiplied(0, 0, 0, 71),
                grid: Color32::from_rgba_unmultiplied(255, 255, 255, 41),
                hour_grid: Color32::from_rgba_unmultiplied(255, 255, 255, 31),
                text: Color32::from_rgba_unmultiplied(255, 255, 255, 230),
                marker: Color32::from_rgba_unmultiplied(255, 255, 255, 230),
                battery_bar: Color32::from_rgb(167, 139, 250),
                battery_outline: Color32::from_rgba_unmultiplied(255, 255, 255, 242),
            },
            ColorScheme::Dark => CardPalette {
                frame_fill: Color32::from_rgb(16, 18, 22),
                card_fill: Color32::from_rgb(28, 32, 40),
                baseline: Color32::from_rgb(130, 200, 255),
                base_area: Color32::from_rgba_unmultiplied(130, 200, 255, 40),
                charge_area: Color32::from_rgba_unmultiplied(130, 255, 170, 80),
                discharge_area: Color32::from_rgba_unmultiplied(255, 120, 120, 70),
                grid: Color32::from_rgba_unmultiplied(255, 255, 255, 30),
                hour_grid: Color32::from_rgba_unmultiplied(255, 255, 255, 22),
                text: Color32::from_rgba_unmultiplied(255, 255, 255, 210),
                marker: Color32::from_rgba_unmultiplied(255, 255, 255, 210),
                battery_bar: Color32::from_rgb(130, 255, 170),
                battery_outline: Color32::from_rgba_unmultiplied(255, 255, 255, 230),
            },
            ColorScheme::Light => CardPalette {
                frame_fill: Color32::from_rgb(255, 255, 255),
                card_fill: Color32::from_rgb(238, 240, 250),
                baseline: Color32::from_rgb(88, 60, 200),
                base_area: Color32::from_rgba_unmultiplied(88, 60, 200, 36),
                charge_area: Color32::from_rgba_unmultiplied(60, 160, 90, 80),
                discharge_area: Color32::from_rgba_unmultiplied(40, 40, 60, 60),
                grid: Color32::from_rgba_unmultiplied(0, 0, 0, 26),
                hour_grid: Color32::from_rgba_unmultiplied(0, 0, 0, 18),
                text: Color32::from_rgba_unmultiplied(20, 20, 40, 220),
                marker: Color32::from_rgba_unmultiplied(20, 20, 40, 200),
                battery_bar: Color32::from_rgb(139, 110, 240),
                battery_outline: Color32::from_rgb(60, 60, 90),
            },
            ColorScheme::Custom(palette) => palette.clone(),
        }
    }

    /// Apply matching window visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        match self {
            ColorScheme::Light => ctx.set_visuals(Visuals::light()),
            _ => ctx.set_visuals(Visuals::dark()),
        }
    }
}
