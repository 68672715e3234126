use std::cell::RefCell;
use std::rc::Rc;

use egui::{Pos2, Rect, Vec2};
use energy_card::sections::{visible_overlap, SectionTracker};

fn rect(top: f32, height: f32) -> Rect {
    Rect::from_min_size(Pos2::new(0.0, top), Vec2::new(400.0, height))
}

#[test]
fn overlap_is_the_visible_height() {
    let viewport = rect(0.0, 600.0);
    assert_eq!(visible_overlap(rect(100.0, 200.0), viewport), 200.0);
    assert_eq!(visible_overlap(rect(500.0, 300.0), viewport), 100.0);
    assert_eq!(visible_overlap(rect(-150.0, 200.0), viewport), 50.0);
    assert_eq!(visible_overlap(rect(700.0, 200.0), viewport), 0.0);
}

#[test]
fn most_visible_section_wins() {
    let viewport = rect(0.0, 600.0);
    let mut tracker = SectionTracker::new();
    tracker.observe(0, rect(-400.0, 500.0), viewport); // 100 px visible
    tracker.observe(1, rect(100.0, 450.0), viewport); // 450 px visible
    tracker.observe(2, rect(550.0, 500.0), viewport); // 50 px visible
    assert_eq!(tracker.commit(), Some(1));
    assert_eq!(tracker.active(), Some(1));
}

#[test]
fn fully_hidden_sections_are_ignored() {
    let viewport = rect(0.0, 600.0);
    let mut tracker = SectionTracker::new();
    tracker.observe(0, rect(1000.0, 300.0), viewport);
    assert_eq!(tracker.commit(), None);
}

#[test]
fn active_section_sticks_between_frames() {
    let viewport = rect(0.0, 600.0);
    let mut tracker = SectionTracker::new();
    tracker.observe(0, rect(0.0, 600.0), viewport);
    assert_eq!(tracker.commit(), Some(0));
    // A frame with no observations keeps the last active section.
    assert_eq!(tracker.commit(), Some(0));
}

#[test]
fn callback_fires_only_on_transitions() {
    let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut tracker = SectionTracker::with_callback(move |idx| sink.borrow_mut().push(idx));

    let viewport = rect(0.0, 600.0);
    tracker.observe(0, rect(0.0, 600.0), viewport);
    tracker.commit();
    tracker.observe(0, rect(0.0, 600.0), viewport);
    tracker.commit();
    tracker.observe(1, rect(0.0, 600.0), viewport);
    tracker.observe(0, rect(500.0, 600.0), viewport);
    tracker.commit();

    assert_eq!(*seen.borrow(), vec![0, 1]);
}
