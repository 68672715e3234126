//! The animated energy card widget.
//!
//! Static chart geometry is built once per target rectangle; every frame
//! only the reveal clip rectangle and the marker position change, driven
//! by the shared [`CycleClock`]. The widget requests a repaint each frame
//! and loops until it is dropped.

use std::time::Duration;

use egui::{
    Align2, Color32, CornerRadius, FontId, Pos2, Rect, Response, Sense, Shape, Stroke, StrokeKind,
    TextureHandle, Ui, Vec2,
};

use crate::anim::CycleClock;
use crate::battery_icon::BatteryIcon;
use crate::color_scheme::CardPalette;
use crate::config::{EnergyCardConfig, FeatureFlags};
use crate::geometry::CardGeometry;
use crate::profile::{day_profile, DayProfile};

/// Margin between the outer frame card and the chart canvas.
const FRAME_MARGIN: f32 = 20.0;
/// Inset of the main card inside the outer frame.
const CARD_INSET: f32 = 8.0;
/// Extra height reserved for the caption strip.
const CAPTION_H: f32 = 26.0;
/// Hours labelled along the bottom edge.
const HOUR_TICKS: [f64; 7] = [0.0, 4.0, 8.0, 12.0, 16.0, 20.0, 24.0];

/// Animated 24-hour energy-profile card.
///
/// One instance owns its own geometry cache and cycle clock; multiple
/// cards on one screen animate independently.
pub struct EnergyCard {
    canvas_size: Vec2,
    caption: Option<String>,
    features: FeatureFlags,
    palette: CardPalette,
    clock: CycleClock,
    battery: BatteryIcon,
    logo: Option<TextureHandle>,
    profile: &'static DayProfile,
    geometry: Option<CardGeometry>,
}

impl EnergyCard {
    pub fn new(cfg: &EnergyCardConfig) -> Self {
        Self {
            canvas_size: Vec2::new(cfg.width, cfg.height),
            caption: cfg.caption.clone(),
            features: cfg.features.clone(),
            palette: cfg.color_scheme.palette(),
            clock: CycleClock::new(cfg.duration_secs),
            battery: BatteryIcon::new(),
            logo: None,
            profile: day_profile(),
            geometry: None,
        }
    }

    /// The shared animation clock (also drives the battery icon).
    pub fn clock(&self) -> &CycleClock {
        &self.clock
    }

    /// Attach a pre-loaded logo texture, drawn in the card's top-left
    /// corner.
    pub fn set_logo(&mut self, texture: TextureHandle) {
        self.logo = Some(texture);
    }

    /// Total footprint of the widget including frame and caption strip.
    pub fn desired_size(&self) -> Vec2 {
        let caption_h = if self.features.caption && self.caption.is_some() {
            CAPTION_H
        } else {
            0.0
        };
        self.canvas_size + Vec2::splat(2.0 * FRAME_MARGIN) + Vec2::new(0.0, caption_h)
    }

    /// Render the card and advance the animation.
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.desired_size(), Sense::hover());
        if !ui.is_rect_visible(rect) {
            return response;
        }

        let frame_rect = Rect::from_min_size(
            rect.min,
            self.canvas_size + Vec2::splat(2.0 * FRAME_MARGIN),
        );
        let card_rect = frame_rect.shrink(CARD_INSET);
        let canvas = Rect::from_min_size(rect.min + Vec2::splat(FRAME_MARGIN), self.canvas_size);

        if self.geometry.as_ref().map(|g| g.frame.rect) != Some(canvas) {
            self.geometry = Some(CardGeometry::build(self.profile, canvas));
        }
        let Some(geo) = self.geometry.as_ref() else {
            return response;
        };
        let inner = geo.frame.inner();
        let phase = self.clock.phase() as f32;

        let painter = ui.painter();
        painter.rect_filled(frame_rect, CornerRadius::same(20), self.palette.frame_fill);
        painter.rect_filled(card_rect, CornerRadius::same(14), self.palette.card_fill);

        if self.features.grid {
            for i in 0..5 {
                let y = inner.top() + (i + 1) as f32 * inner.height() / 6.0;
                painter.line_segment(
                    [Pos2::new(inner.left(), y), Pos2::new(inner.right(), y)],
                    Stroke::new(1.0, self.palette.grid),
                );
            }
        }
        if self.features.hour_ticks {
            for hour in HOUR_TICKS {
                let x = inner.left() + (hour / 24.0) as f32 * inner.width();
                painter.line_segment(
                    [Pos2::new(x, inner.top()), Pos2::new(x, inner.bottom())],
                    Stroke::new(1.0, self.palette.hour_grid),
                );
                painter.text(
                    Pos2::new(x, canvas.bottom() - 2.0),
                    Align2::CENTER_BOTTOM,
                    format!("{hour:.0}h"),
                    FontId::proportional(12.0),
                    self.palette.text,
                );
            }
        }
        if self.features.legend {
            self.paint_legend(painter, canvas);
        }

        // Reveal mask: everything below is pre-built geometry, exposed
        // left-to-right by the growing clip rectangle.
        let reveal_w = phase * inner.width();
        let reveal = Rect::from_min_size(inner.min, Vec2::new(reveal_w, inner.height()));
        let masked = painter.with_clip_rect(reveal.intersect(painter.clip_rect()));
        masked.add(geo.discharge_area.mesh(self.palette.discharge_area));
        masked.add(geo.base_area.mesh(self.palette.base_area));
        masked.add(geo.charge_area.mesh(self.palette.charge_area));
        masked.add(Shape::line(
            geo.base_line.points.clone(),
            Stroke::new(3.0, self.palette.baseline),
        ));

        if self.features.marker {
            let x = inner.left() + reveal_w;
            painter.line_segment(
                [Pos2::new(x, inner.top()), Pos2::new(x, inner.bottom())],
                Stroke::new(2.0, self.palette.marker),
            );
        }

        if self.features.battery_icon {
            let origin = Pos2::new(
                card_rect.right() - BatteryIcon::SIZE.x - 10.0,
                card_rect.top() + 10.0,
            );
            self.battery
                .paint(painter, origin, phase as f64, &self.palette);
        }

        if let Some(logo) = &self.logo {
            let logo_h = 20.0;
            let aspect = logo.aspect_ratio();
            let logo_rect = Rect::from_min_size(
                Pos2::new(card_rect.left() + 24.0, card_rect.top() + 16.0),
                Vec2::new(logo_h * aspect, logo_h),
            );
            painter.image(
                logo.id(),
                logo_rect,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        if self.features.caption {
            if let Some(caption) = &self.caption {
                painter.text(
                    Pos2::new(rect.center().x, rect.bottom() - 6.0),
                    Align2::CENTER_BOTTOM,
                    caption,
                    FontId::proportional(13.0),
                    ui.visuals().text_color(),
                );
            }
        }

        // Keep the loop running at display rate.
        ui.ctx().request_repaint_after(Duration::from_millis(16));
        response
    }

    fn paint_legend(&self, painter: &egui::Painter, canvas: Rect) {
        let swatch = |painter: &egui::Painter, origin: Pos2, fill: Color32, label: &str| {
            let r = Rect::from_min_size(origin, Vec2::new(30.0, 20.0));
            painter.rect_filled(r, CornerRadius::same(3), fill);
            painter.rect_stroke(
                r,
                CornerRadius::same(3),
                Stroke::new(2.0, self.palette.baseline),
                StrokeKind::Inside,
            );
            painter.text(
                Pos2::new(r.right() + 6.0, r.bottom() - 3.0),
                Align2::LEFT_BOTTOM,
                label,
                FontId::proportional(15.0),
                self.palette.text,
            );
        };
        let base = Pos2::new(canvas.left() + crate::geometry::PAD, canvas.top() + 38.0);
        swatch(painter, base, self.palette.charge_area, "Charge ↑");
        swatch(
            painter,
            base + Vec2::new(120.0, 0.0),
            self.palette.discharge_area,
            "Discharge ↓",
        );
    }
}
