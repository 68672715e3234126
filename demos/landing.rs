//! Example: Landing page shell around the card
//!
//! What it demonstrates
//! - Embedding the card as the hero of a longer scrolling page.
//! - `SectionTracker`: the top navigation highlights whichever section is
//!   most visible, and clicking a nav entry scrolls to it.
//! - A simple lead-capture form (logged locally, nothing is sent).
//!
//! How to run
//! ```bash
//! cargo run --example landing
//! ```

use eframe::egui;
use energy_card::{EnergyCard, EnergyCardConfig, SectionTracker};

const SECTIONS: [&str; 5] = ["Home", "How it works", "Solutions", "Team", "Contact"];

struct LandingApp {
    card: EnergyCard,
    tracker: SectionTracker,
    scroll_to: Option<usize>,
    name: String,
    email: String,
    message: String,
    sent: bool,
}

impl LandingApp {
    fn new() -> Self {
        let mut cfg = EnergyCardConfig::default();
        cfg.width = 720.0;
        cfg.height = 380.0;
        Self {
            card: EnergyCard::new(&cfg),
            tracker: SectionTracker::with_callback(|idx| {
                log::debug!("active section -> {}", SECTIONS[idx]);
            }),
            scroll_to: None,
            name: String::new(),
            email: String::new(),
            message: String::new(),
            sent: false,
        }
    }

    fn section(
        &mut self,
        ui: &mut egui::Ui,
        index: usize,
        viewport: egui::Rect,
        add_contents: impl FnOnce(&mut Self, &mut egui::Ui),
    ) {
        let resp = ui
            .scope(|ui| {
                ui.heading(SECTIONS[index]);
                ui.add_space(8.0);
                add_contents(&mut *self, ui);
                ui.add_space(48.0);
            })
            .response;
        self.tracker.observe(index, resp.rect, viewport);
        if self.scroll_to == Some(index) {
            resp.scroll_to_me(Some(egui::Align::Min));
            self.scroll_to = None;
        }
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚡ Battex").strong());
                ui.separator();
                for (i, name) in SECTIONS.iter().enumerate() {
                    let active = self.tracker.active() == Some(i);
                    if ui.selectable_label(active, *name).clicked() {
                        self.scroll_to = Some(i);
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let viewport = ui.clip_rect();

                self.section(ui, 0, viewport, |app, ui| {
                    ui.label("Store the sun. Power the evening.");
                    ui.add_space(12.0);
                    ui.vertical_centered(|ui| {
                        app.card.show(ui);
                    });
                });

                self.section(ui, 1, viewport, |_, ui| {
                    for (step, text) in [
                        ("1. Charge", "Midday solar surplus fills the battery."),
                        ("2. Hold", "Energy waits until the evening peak."),
                        ("3. Discharge", "The battery covers the peak instead of the grid."),
                    ] {
                        ui.group(|ui| {
                            ui.label(egui::RichText::new(step).strong());
                            ui.label(text);
                        });
                    }
                });

                self.section(ui, 2, viewport, |_, ui| {
                    ui.horizontal_wrapped(|ui| {
                        for (name, blurb) in [
                            ("Residential", "Compact wall units for homes."),
                            ("Commercial", "Rack systems for offices and retail."),
                            ("Industrial", "Container-scale storage for plants."),
                        ] {
                            ui.group(|ui| {
                                ui.set_width(200.0);
                                ui.label(egui::RichText::new(name).strong());
                                ui.label(blurb);
                            });
                        }
                    });
                });

                self.section(ui, 3, viewport, |_, ui| {
                    for (who, role) in [
                        ("A. Serrano", "CEO"),
                        ("M. Oduya", "CTO"),
                        ("L. Petrov", "Head of Deployments"),
                    ] {
                        ui.label(format!("{who} — {role}"));
                    }
                });

                self.section(ui, 4, viewport, |app, ui| {
                    ui.label("Tell us about your project:");
                    ui.add(egui::TextEdit::singleline(&mut app.name).hint_text("Name"));
                    ui.add(egui::TextEdit::singleline(&mut app.email).hint_text("Email"));
                    ui.add(egui::TextEdit::multiline(&mut app.message).hint_text("Message"));
                    if ui.button("Request a quote").clicked() {
                        log::info!("lead captured: {} <{}>", app.name, app.email);
                        app.sent = true;
                    }
                    if app.sent {
                        ui.label("Thanks! We'll be in touch.");
                    }
                });
            });
        });

        self.tracker.commit();
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let mut opts = eframe::NativeOptions::default();
    opts.viewport = egui::ViewportBuilder::default().with_inner_size([860.0, 720.0]);
    eframe::run_native(
        "Battex",
        opts,
        Box::new(|_cc| Ok(Box::new(LandingApp::new()))),
    )
}
