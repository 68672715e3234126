//! Battery state-of-charge icon, animated on the shared cycle clock.
//!
//! The fill level follows a coarse six-stop keyframe schedule that
//! approximates the card's charge/discharge windows: empty until hour 8,
//! full by hour 15, holding until hour 18, empty again by hour 22. The
//! fill is drawn as six discrete bars revealed by a clip rectangle whose
//! extent interpolates between the keyframes.

use egui::{CornerRadius, Painter, Pos2, Rect, Response, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::anim::KeyframeTrack;
use crate::color_scheme::CardPalette;

/// Body width in pixels.
const BODY_W: f32 = 56.0;
/// Body height in pixels.
const BODY_H: f32 = 108.0;
/// Inner padding between body outline and bars.
const PAD: f32 = 4.0;
/// Terminal cap height; the body starts below it.
const CAP_H: f32 = 8.0;
const BODY_TOP: f32 = 6.0;
const BAR_COUNT: usize = 6;
const BAR_GAP: f32 = 3.0;

/// Vertical battery indicator with a keyframe-driven fill level.
#[derive(Debug, Clone)]
pub struct BatteryIcon {
    schedule: KeyframeTrack,
}

impl Default for BatteryIcon {
    fn default() -> Self {
        Self::new()
    }
}

impl BatteryIcon {
    /// Total footprint of the painted icon.
    pub const SIZE: Vec2 = Vec2::new(BODY_W + 14.0, BODY_H + 18.0);

    pub fn new() -> Self {
        Self {
            schedule: KeyframeTrack::soc_schedule(),
        }
    }

    /// Fill level in [0, 1] for a cycle phase in [0, 1].
    pub fn level(&self, phase: f64) -> f64 {
        self.schedule.sample(phase)
    }

    /// Paint the icon with its top-left corner at `origin`.
    pub fn paint(&self, painter: &Painter, origin: Pos2, phase: f64, palette: &CardPalette) {
        let level = self.level(phase) as f32;
        let inner_w = BODY_W - 2.0 * PAD;
        let inner_h = BODY_H - 2.0 * PAD;

        // Terminal cap and body outline.
        let cap = Rect::from_min_size(
            origin + Vec2::new((BODY_W - 14.0) / 2.0, 0.0),
            Vec2::new(14.0, CAP_H),
        );
        painter.rect_filled(cap, CornerRadius::same(2), palette.battery_outline);
        let body = Rect::from_min_size(origin + Vec2::new(0.0, BODY_TOP), Vec2::new(BODY_W, BODY_H));
        painter.rect_stroke(
            body,
            CornerRadius::same(5),
            Stroke::new(3.0, palette.battery_outline),
            StrokeKind::Inside,
        );

        let bar_h = (inner_h - BAR_GAP * (BAR_COUNT as f32 - 1.0)) / BAR_COUNT as f32;
        let bar_rect = |i: usize| {
            let y = origin.y + BODY_TOP + PAD + inner_h
                - (i as f32 + 1.0) * bar_h
                - i as f32 * BAR_GAP;
            Rect::from_min_size(Pos2::new(origin.x + PAD, y), Vec2::new(inner_w, bar_h))
        };

        // Filled bars, clipped to the current level from the bottom up.
        let fill_top = origin.y + BODY_TOP + PAD + inner_h * (1.0 - level);
        let clip = Rect::from_min_size(
            Pos2::new(origin.x + PAD, fill_top),
            Vec2::new(inner_w, inner_h * level),
        );
        let clipped = painter.with_clip_rect(clip.intersect(painter.clip_rect()));
        for i in 0..BAR_COUNT {
            clipped.rect_filled(bar_rect(i), CornerRadius::same(2), palette.battery_bar);
        }

        // Bar outlines stay visible regardless of fill.
        for i in 0..BAR_COUNT {
            painter.rect_stroke(
                bar_rect(i),
                CornerRadius::same(2),
                Stroke::new(2.0, palette.battery_outline),
                StrokeKind::Inside,
            );
        }
    }

    /// Standalone widget variant: allocates the icon's footprint and
    /// paints into it.
    pub fn show(&self, ui: &mut Ui, phase: f64, palette: &CardPalette) -> Response {
        let (rect, response) = ui.allocate_exact_size(Self::SIZE, Sense::hover());
        if ui.is_rect_visible(rect) {
            self.paint(ui.painter(), rect.min, phase, palette);
        }
        response
    }
}
