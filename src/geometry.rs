//! Scale and path construction: maps sampled curves into pixel-space
//! geometry for the card painter.
//!
//! All geometry is computed once per target rectangle and cached by the
//! widget; the animation only moves a clip rectangle over it.

use egui::epaint::{Mesh, Vertex, WHITE_UV};
use egui::{Color32, Pos2, Rect};

use crate::profile::DayProfile;

/// Padding between the card edge and the drawable chart area, in pixels.
pub const PAD: f32 = 40.0;

/// Vertical value scale shared by all curves of one card.
///
/// Derived from the combined range of baseline ± battery with headroom so
/// no curve ever touches the chart edge: 10% above the maximum, 5% below
/// the minimum, floored at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
}

impl Scale {
    /// Compute the scale from a profile's combined curves.
    pub fn from_profile(profile: &DayProfile) -> Self {
        let top = profile.charge_top();
        let bottom = profile.discharge_bottom();
        let max_val = top.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_val = bottom.iter().copied().fold(f64::INFINITY, f64::min);
        Self {
            min: (min_val * 1.05).min(0.0),
            max: max_val * 1.1,
        }
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Normalize a value into [0, 1] relative to this scale.
    pub fn norm(&self, v: f64) -> f64 {
        (v - self.min) / self.range()
    }
}

/// The card's target rectangle plus the fixed chart padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub rect: Rect,
    pub pad: f32,
}

impl ChartFrame {
    pub fn new(rect: Rect) -> Self {
        Self { rect, pad: PAD }
    }

    /// The inner drawable area (rect shrunk by the padding).
    pub fn inner(&self) -> Rect {
        self.rect.shrink(self.pad)
    }

    /// Horizontal pixel position of sample `i` out of `n` samples.
    pub fn x(&self, i: usize, n: usize) -> f32 {
        let inner = self.inner();
        inner.left() + inner.width() * (i as f32 / (n - 1) as f32)
    }

    /// Vertical pixel position of value `v`, inverted for screen
    /// coordinates (larger values are higher up).
    pub fn y(&self, v: f64, scale: &Scale) -> f32 {
        let inner = self.inner();
        inner.bottom() - scale.norm(v) as f32 * inner.height()
    }
}

/// Open polyline through one curve.
#[derive(Debug, Clone)]
pub struct LinePath {
    pub points: Vec<Pos2>,
}

impl LinePath {
    pub fn through(values: &[f64], frame: &ChartFrame, scale: &Scale) -> Self {
        let n = values.len();
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Pos2::new(frame.x(i, n), frame.y(v, scale)))
            .collect();
        Self { points }
    }
}

/// Closed area between two curves sampled on the same grid.
///
/// The outline traces the top boundary left-to-right and the bottom
/// boundary right-to-left, which closes into a simple polygon regardless
/// of which boundary is actually on top at any sample.
#[derive(Debug, Clone)]
pub struct AreaPath {
    top: Vec<Pos2>,
    bottom: Vec<Pos2>,
}

impl AreaPath {
    pub fn between(top: &[f64], bottom: &[f64], frame: &ChartFrame, scale: &Scale) -> Self {
        debug_assert_eq!(top.len(), bottom.len());
        let n = top.len();
        let map = |values: &[f64]| -> Vec<Pos2> {
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| Pos2::new(frame.x(i, n), frame.y(v, scale)))
                .collect()
        };
        Self {
            top: map(top),
            bottom: map(bottom),
        }
    }

    /// Closed outline: top boundary left-to-right, then bottom boundary
    /// right-to-left. `2 * samples` points before closing.
    pub fn outline(&self) -> Vec<Pos2> {
        let mut pts = self.top.clone();
        pts.extend(self.bottom.iter().rev().copied());
        pts
    }

    /// Fill mesh for the area: two triangles per sample slice.
    ///
    /// epaint only fills convex polygons, and the outline is concave in
    /// general; the per-slice quads are convex by construction, so the
    /// area tessellates into `2 * (samples - 1)` triangles.
    pub fn mesh(&self, color: Color32) -> Mesh {
        let mut mesh = Mesh::default();
        let n = self.top.len();
        mesh.vertices.reserve(2 * n);
        for i in 0..n {
            mesh.vertices.push(Vertex {
                pos: self.top[i],
                uv: WHITE_UV,
                color,
            });
            mesh.vertices.push(Vertex {
                pos: self.bottom[i],
                uv: WHITE_UV,
                color,
            });
        }
        mesh.indices.reserve(6 * (n - 1));
        for i in 0..n - 1 {
            let t0 = 2 * i as u32;
            let b0 = t0 + 1;
            let t1 = t0 + 2;
            let b1 = t0 + 3;
            mesh.indices.extend_from_slice(&[t0, b0, t1, b0, b1, t1]);
        }
        mesh
    }
}

/// All static geometry of one card, derived from a profile and a target
/// rectangle.
#[derive(Debug, Clone)]
pub struct CardGeometry {
    pub frame: ChartFrame,
    pub scale: Scale,
    /// Baseline stroke.
    pub base_line: LinePath,
    /// Baseline area down to the scale minimum.
    pub base_area: AreaPath,
    /// Charge band between baseline and baseline + charging delta.
    pub charge_area: AreaPath,
    /// Discharge band between baseline and baseline + discharging delta.
    pub discharge_area: AreaPath,
}

impl CardGeometry {
    pub fn build(profile: &DayProfile, rect: Rect) -> Self {
        let frame = ChartFrame::new(rect);
        let scale = Scale::from_profile(profile);
        let floor = vec![scale.min; profile.samples()];
        let charge_top = profile.charge_top();
        let discharge_bottom = profile.discharge_bottom();
        Self {
            frame,
            scale,
            base_line: LinePath::through(&profile.baseline, &frame, &scale),
            base_area: AreaPath::between(&profile.baseline, &floor, &frame, &scale),
            charge_area: AreaPath::between(&charge_top, &profile.baseline, &frame, &scale),
            discharge_area: AreaPath::between(&profile.baseline, &discharge_bottom, &frame, &scale),
        }
    }
}
