use energy_card::anim::{CycleClock, KeyframeTrack};
use energy_card::battery_icon::BatteryIcon;

const EPS: f64 = 1e-9;

#[test]
fn phase_is_linear_and_wraps() {
    assert_eq!(CycleClock::phase_at(0.0, 5.0), 0.0);
    assert!((CycleClock::phase_at(2.5, 5.0) - 0.5).abs() < EPS);
    // After one full cycle the phase is back where it started.
    assert!((CycleClock::phase_at(5.0, 5.0) - CycleClock::phase_at(0.0, 5.0)).abs() < EPS);
    assert!((CycleClock::phase_at(7.5, 5.0) - 0.5).abs() < EPS);
    assert!((CycleClock::phase_at(12.5, 5.0) - 0.5).abs() < EPS);
}

#[test]
fn reveal_width_at_half_cycle_is_half_the_inner_width() {
    let inner_w = 780.0;
    let phase = CycleClock::phase_at(2.5, 5.0);
    assert!((phase * inner_w - 390.0).abs() < 1e-6);
    let phase = CycleClock::phase_at(5.0, 5.0);
    assert_eq!(phase * inner_w, 0.0);
}

#[test]
fn clock_phase_stays_normalized() {
    let clock = CycleClock::new(5.0);
    let p = clock.phase();
    assert!((0.0..1.0).contains(&p));
}

#[test]
fn non_positive_periods_are_clamped() {
    assert_eq!(CycleClock::new(0.0).period_secs(), 1e-3);
    assert_eq!(CycleClock::new(-3.0).period_secs(), 1e-3);
    assert_eq!(CycleClock::new(5.0).period_secs(), 5.0);
}

#[test]
fn soc_schedule_follows_the_charge_windows() {
    let track = KeyframeTrack::soc_schedule();
    assert_eq!(track.sample(0.0), 0.0);
    // Empty until hour 8.
    assert_eq!(track.sample(4.0 / 24.0), 0.0);
    assert_eq!(track.sample(8.0 / 24.0), 0.0);
    // Full from hour 15 through hour 18.
    assert!((track.sample(15.0 / 24.0) - 1.0).abs() < EPS);
    assert!((track.sample(16.5 / 24.0) - 1.0).abs() < EPS);
    assert!((track.sample(18.0 / 24.0) - 1.0).abs() < EPS);
    // Empty again from hour 22 to the end of the cycle.
    assert!(track.sample(22.0 / 24.0).abs() < EPS);
    assert_eq!(track.sample(1.0), 0.0);
}

#[test]
fn soc_schedule_interpolates_linearly_between_stops() {
    let track = KeyframeTrack::soc_schedule();
    // Halfway through the 8h -> 15h ramp.
    assert!((track.sample(11.5 / 24.0) - 0.5).abs() < EPS);
    // Halfway through the 18h -> 22h drain.
    assert!((track.sample(20.0 / 24.0) - 0.5).abs() < EPS);
}

#[test]
fn soc_schedule_rises_monotonically_while_charging() {
    let track = KeyframeTrack::soc_schedule();
    let mut last = -1.0;
    for step in 0..=20 {
        let t = (8.0 + 7.0 * step as f64 / 20.0) / 24.0;
        let v = track.sample(t);
        assert!(v >= last);
        last = v;
    }
}

#[test]
fn sample_clamps_out_of_range_phases() {
    let track = KeyframeTrack::soc_schedule();
    assert_eq!(track.sample(-0.5), 0.0);
    assert_eq!(track.sample(1.5), 0.0);
}

#[test]
fn battery_icon_level_matches_the_schedule() {
    let icon = BatteryIcon::new();
    assert_eq!(icon.level(0.0), 0.0);
    assert!((icon.level(15.0 / 24.0) - 1.0).abs() < EPS);
    assert!((icon.level(17.0 / 24.0) - 1.0).abs() < EPS);
    assert!(icon.level(23.0 / 24.0).abs() < EPS);
}
