//! Example: Default energy card window
//!
//! What it demonstrates
//! - Launching the animated card with `run_energy_card` and a default
//!   `EnergyCardConfig`.
//!
//! How to run
//! ```bash
//! cargo run --example card
//! ```
//! You should see the 24-hour profile playing on a 5 second loop with the
//! battery icon filling and draining in phase.

use energy_card::{run_energy_card, EnergyCardConfig};

fn main() -> eframe::Result<()> {
    env_logger::init();
    run_energy_card(EnergyCardConfig::default())
}
