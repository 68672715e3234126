//! Example: Save and reload the card configuration
//!
//! What it demonstrates
//! - Persisting an `EnergyCardConfig` to YAML with `save_config_to_path`
//!   and reading it back with `load_config_from_path`.
//!
//! How to run
//! ```bash
//! cargo run --example config_file
//! ```
//! The config round-trips through a file in the system temp directory and
//! the card opens with the reloaded settings (dark scheme, 8 s cycle).

use energy_card::persistence::{load_config_from_path, save_config_to_path};
use energy_card::{run_energy_card, ColorScheme, EnergyCardConfig};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let mut cfg = EnergyCardConfig::default();
    cfg.duration_secs = 8.0;
    cfg.color_scheme = ColorScheme::Dark;
    cfg.title = "Energy Card (reloaded)".to_string();

    let path = std::env::temp_dir().join("energy_card.yaml");
    if let Err(e) = save_config_to_path(&cfg, &path) {
        log::error!("could not save config: {e}");
    }

    let cfg = load_config_from_path(&path).unwrap_or_else(|e| {
        log::warn!("could not reload config ({e}), using defaults");
        EnergyCardConfig::default()
    });
    run_energy_card(cfg)
}
