//! Standalone runner: hosts the energy card in a native eframe window.
//!
//! [`run_energy_card`] is the primary public API for launching the card as
//! its own application. It applies the configured color scheme, installs
//! the Phosphor icon font for the toolbar, loads the optional logo SVG,
//! and enters the eframe event loop until the window is closed.

use std::path::Path;
use std::sync::Arc;

use eframe::egui;
use egui::ViewportCommand;
use image::{Rgba, RgbaImage};

use crate::card::EnergyCard;
use crate::config::EnergyCardConfig;

/// Egui app wrapping one [`EnergyCard`] plus window chrome (snapshot
/// button, logo).
pub struct CardApp {
    cfg: EnergyCardConfig,
    card: EnergyCard,
    logo_loaded: bool,
    request_snapshot: bool,
}

impl CardApp {
    pub fn new(cfg: EnergyCardConfig) -> Self {
        let card = EnergyCard::new(&cfg);
        Self {
            cfg,
            card,
            logo_loaded: false,
            request_snapshot: false,
        }
    }
}

impl eframe::App for CardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Upload the logo texture on the first frame; a bad asset just
        // leaves the corner empty.
        if !self.logo_loaded {
            self.logo_loaded = true;
            if let Some(path) = &self.cfg.logo_svg_path {
                match render_svg_rgba(path) {
                    Some((rgba, w, h)) => {
                        let img = egui::ColorImage::from_rgba_unmultiplied(
                            [w as usize, h as usize],
                            &rgba,
                        );
                        let tex = ctx.load_texture("card-logo", img, egui::TextureOptions::LINEAR);
                        self.card.set_logo(tex);
                    }
                    None => log::warn!("failed to load logo SVG from {}", path.display()),
                }
            }
        }

        if self.cfg.features.snapshot_button {
            egui::TopBottomPanel::top("card_controls").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let label = format!("{} Snapshot", egui_phosphor::regular::CAMERA);
                    if ui
                        .button(label)
                        .on_hover_text("Save the window as PNG")
                        .clicked()
                    {
                        self.request_snapshot = true;
                    }
                });
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let free = ui.available_size() - self.card.desired_size();
            ui.vertical_centered(|ui| {
                ui.add_space((free.y * 0.5).max(0.0));
                self.card.show(ui);
            });
        });

        // Perform deferred window screenshot (after UI drawn).
        if self.request_snapshot {
            self.request_snapshot = false;
            ctx.send_viewport_cmd(ViewportCommand::Screenshot(Default::default()));
        }

        if let Some(image_arc) = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| {
                if let egui::Event::Screenshot { image, .. } = e {
                    Some(image.clone())
                } else {
                    None
                }
            })
        }) {
            save_screenshot(&image_arc);
        }
    }
}

/// Prompt for a path and write the captured frame as PNG.
fn save_screenshot(image: &Arc<egui::ColorImage>) {
    let default_name = format!(
        "energy_card_{}.png",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(&default_name)
        .save_file()
    else {
        return;
    };
    let egui::ColorImage { size: [w, h], pixels, .. } = &**image;
    let mut out = RgbaImage::new(*w as u32, *h as u32);
    for y in 0..*h {
        for x in 0..*w {
            let p = pixels[y * *w + x];
            out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
        }
    }
    match out.save(&path) {
        Ok(()) => log::info!("saved snapshot to {}", path.display()),
        Err(e) => log::error!("failed to save snapshot: {e}"),
    }
}

/// Launch the energy card in a native window.
///
/// This is the main entry point for standalone use. It:
///
/// 1. Constructs a [`CardApp`] from the configuration.
/// 2. Sets the window icon from the configured logo SVG if available.
/// 3. Opens a native window and enters the eframe event loop.
///
/// The call blocks until the window is closed.
pub fn run_energy_card(mut cfg: EnergyCardConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.icon.is_none() {
        if let Some(icon) = cfg.logo_svg_path.as_deref().and_then(load_icon_from_svg) {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }
    if opts.viewport.inner_size.is_none() {
        let size = egui::vec2(cfg.width + 80.0, cfg.height + 150.0);
        opts.viewport = opts.viewport.clone().with_inner_size(size);
    }

    let scheme = cfg.color_scheme.clone();
    let app = CardApp::new(cfg);
    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            scheme.apply(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}

/// Attempt to load an SVG file as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_icon_from_svg(path: &Path) -> Option<egui::IconData> {
    let (rgba, width, height) = render_svg_rgba(path)?;
    Some(egui::IconData {
        rgba,
        width,
        height,
    })
}

/// Parse and render an SVG to RGBA using usvg + resvg.
fn render_svg_rgba(path: &Path) -> Option<(Vec<u8>, u32, u32)> {
    let data = std::fs::read(path).ok()?;
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    Some((pixmap.take(), size.width(), size.height()))
}
