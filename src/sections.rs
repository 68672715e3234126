//! Scroll-position tracking for page navigation highlighting.
//!
//! Sections report their on-screen rects each frame; the tracker picks
//! the one most visible inside the viewport and reports transitions
//! through an optional callback. Used by page shells that embed the card
//! in a longer scrolling layout, not by the card itself.

use egui::Rect;

/// Tracks which of several stacked sections is currently "active" based
/// on visible-region membership.
pub struct SectionTracker {
    active: Option<usize>,
    best: Option<(usize, f32)>,
    on_change: Option<Box<dyn FnMut(usize)>>,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTracker {
    pub fn new() -> Self {
        Self {
            active: None,
            best: None,
            on_change: None,
        }
    }

    /// Create a tracker that invokes `f` with the new section index on
    /// every transition.
    pub fn with_callback(f: impl FnMut(usize) + 'static) -> Self {
        Self {
            active: None,
            best: None,
            on_change: Some(Box::new(f)),
        }
    }

    /// Report one section's rect for the current frame. Call once per
    /// section, then [`commit`](Self::commit) to resolve the winner.
    pub fn observe(&mut self, index: usize, section: Rect, viewport: Rect) {
        let overlap = visible_overlap(section, viewport);
        if overlap > 0.0 && self.best.map_or(true, |(_, b)| overlap > b) {
            self.best = Some((index, overlap));
        }
    }

    /// Resolve this frame's observations into the active section, firing
    /// the callback if it changed. Returns the active section, if any.
    pub fn commit(&mut self) -> Option<usize> {
        if let Some((idx, _)) = self.best.take() {
            if self.active != Some(idx) {
                self.active = Some(idx);
                if let Some(cb) = &mut self.on_change {
                    cb(idx);
                }
            }
        }
        self.active
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }
}

/// Vertically visible extent of `section` inside `viewport`, in pixels.
pub fn visible_overlap(section: Rect, viewport: Rect) -> f32 {
    (section.bottom().min(viewport.bottom()) - section.top().max(viewport.top())).max(0.0)
}
