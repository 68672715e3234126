//! Example: Two independent cards in one window
//!
//! What it demonstrates
//! - Embedding `EnergyCard` directly inside an existing eframe app.
//! - Concurrent instances are fully independent: each owns its own clock
//!   and geometry, so different cycle durations drift apart freely.
//!
//! How to run
//! ```bash
//! cargo run --example two_cards
//! ```

use eframe::egui;
use energy_card::{ColorScheme, EnergyCard, EnergyCardConfig};

struct TwoCardsApp {
    fast: EnergyCard,
    slow: EnergyCard,
}

impl TwoCardsApp {
    fn new() -> Self {
        let mut fast_cfg = EnergyCardConfig::default();
        fast_cfg.width = 560.0;
        fast_cfg.height = 300.0;
        fast_cfg.duration_secs = 3.0;
        fast_cfg.caption = Some("3 second cycle".to_string());

        let mut slow_cfg = fast_cfg.clone();
        slow_cfg.duration_secs = 9.0;
        slow_cfg.color_scheme = ColorScheme::Dark;
        slow_cfg.caption = Some("9 second cycle".to_string());

        Self {
            fast: EnergyCard::new(&fast_cfg),
            slow: EnergyCard::new(&slow_cfg),
        }
    }
}

impl eframe::App for TwoCardsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    self.fast.show(ui);
                    ui.add_space(12.0);
                    self.slow.show(ui);
                });
            });
        });
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let mut opts = eframe::NativeOptions::default();
    opts.viewport = egui::ViewportBuilder::default().with_inner_size([680.0, 820.0]);
    eframe::run_native(
        "Two Energy Cards",
        opts,
        Box::new(|_cc| Ok(Box::new(TwoCardsApp::new()))),
    )
}
