//! 24-hour profile synthesis: baseline load and battery action curves.
//!
//! The card plays back one stylized day of energy data. Both curves are
//! deterministic functions of the sample index, sampled at 15-minute
//! resolution (96 slots, 97 samples including both endpoints). The baseline
//! is the always-present consumption; the battery curve is the storage
//! system's contribution on top of it (positive while charging, negative
//! while discharging).

use once_cell::sync::Lazy;

/// Number of 15-minute slots in one day. Sample count is `SLOTS + 1`.
pub const SLOTS: usize = 96;

/// Start/end of the charging window, in hours.
pub const CHARGE_WINDOW: (f64, f64) = (8.0, 15.0);
/// Start/end of the discharging window, in hours.
pub const DISCHARGE_WINDOW: (f64, f64) = (18.0, 22.0);

/// One synthesized day: baseline consumption plus battery action, both
/// sampled on the same fixed grid.
#[derive(Debug, Clone)]
pub struct DayProfile {
    /// Baseline consumption per sample, always non-negative.
    pub baseline: Vec<f64>,
    /// Battery contribution per sample: positive = charging, negative =
    /// discharging, zero outside both windows.
    pub battery: Vec<f64>,
}

impl DayProfile {
    /// Synthesize the fixed day profile.
    pub fn synthesize() -> Self {
        let mut baseline = Vec::with_capacity(SLOTS + 1);
        let mut battery = Vec::with_capacity(SLOTS + 1);
        for i in 0..=SLOTS {
            let t = i as f64 / SLOTS as f64;
            baseline.push(baseline_at(t));
            battery.push(battery_at(24.0 * t));
        }
        Self { baseline, battery }
    }

    /// Number of samples per curve (`SLOTS + 1`).
    pub fn samples(&self) -> usize {
        self.baseline.len()
    }

    /// Upper boundary of the charge band: baseline plus the charging part
    /// of the battery curve.
    pub fn charge_top(&self) -> Vec<f64> {
        self.baseline
            .iter()
            .zip(&self.battery)
            .map(|(b, d)| b + d.max(0.0))
            .collect()
    }

    /// Lower boundary of the discharge band: baseline plus the discharging
    /// part of the battery curve.
    pub fn discharge_bottom(&self) -> Vec<f64> {
        self.baseline
            .iter()
            .zip(&self.battery)
            .map(|(b, d)| b + d.min(0.0))
            .collect()
    }
}

/// Baseline consumption at normalized time `t` in [0, 1].
///
/// Sum of a small night oscillation, a midday bump and an evening ramp.
pub fn baseline_at(t: f64) -> f64 {
    use std::f64::consts::PI;
    let night = 0.22 + 0.06 * ((t + 0.1) * PI * 2.0).cos();
    let noon_bump = 0.55 * (-((t - 0.52) / 0.16).powi(2)).exp();
    let evening = 0.18 + 0.28 * ((t - 0.62) * PI).sin().max(0.0);
    night + noon_bump + evening
}

/// Battery contribution at the given hour of day in [0, 24].
///
/// A positive half-sine across the charging window, a negative half-sine
/// across the discharging window, zero elsewhere (including the exact
/// window boundaries, where both half-sines evaluate to zero).
pub fn battery_at(hour: f64) -> f64 {
    use std::f64::consts::PI;
    let (c0, c1) = CHARGE_WINDOW;
    let (d0, d1) = DISCHARGE_WINDOW;
    if hour >= c0 && hour <= c1 {
        0.25 * (PI * (hour - c0) / (c1 - c0)).sin()
    } else if hour >= d0 && hour <= d1 {
        -0.35 * (PI * (hour - d0) / (d1 - d0)).sin()
    } else {
        0.0
    }
}

static PROFILE: Lazy<DayProfile> = Lazy::new(DayProfile::synthesize);

/// The shared, lazily synthesized day profile.
///
/// The curves are pure functions of the sample index, so every card shows
/// the same data; synthesizing once per process avoids redoing the work
/// per widget (and per frame).
pub fn day_profile() -> &'static DayProfile {
    &PROFILE
}
