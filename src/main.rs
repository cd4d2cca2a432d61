//! Brussels OpenData Map.
//!
//! Desktop-Viewer für den Stadtplan von Brüssel mit egui + eframe:
//! statische Marker plus Open-Data-Overlay mit Pulsier-Animation.

use std::sync::mpsc;
use std::time::Duration;

use brussels_opendata_map::app::{
    self, static_annotations, AppController, AppIntent, AppState, DEFAULT_VIEWPORT,
};
use brussels_opendata_map::render::{self, TextureStore};
use brussels_opendata_map::shared::ViewerOptions;
use brussels_opendata_map::ui;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Brussels OpenData Map v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(DEFAULT_VIEWPORT)
                .with_title("Brussels OpenData Map"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Brussels OpenData Map",
            options,
            Box::new(|cc| Ok(Box::new(MapApp::new(cc)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct MapApp {
    state: AppState,
    controller: AppController,
    textures: TextureStore,
    input: ui::InputState,
    worker_rx: mpsc::Receiver<AppIntent>,
}

impl MapApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let viewer_options = ViewerOptions::load_from_file(&ViewerOptions::config_path());
        let state = AppState::new(viewer_options);

        // Statische Marker und Flächen eintragen
        static_annotations::install(&state.annotations);

        // Netzwerk-Worker: Basiskarte, Icons, Overlay-Daten
        let worker_rx = app::spawn_network_worker(
            cc.egui_ctx.clone(),
            state.annotations.clone(),
            state.view.map_view,
            [DEFAULT_VIEWPORT[0] as u32, DEFAULT_VIEWPORT[1] as u32],
            state.options.overlay_autoload,
        );

        Self {
            state,
            controller: AppController::new(),
            textures: TextureStore::new(),
            input: ui::InputState::new(),
            worker_rx,
        }
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events: Vec<AppIntent> = self.worker_rx.try_iter().collect();
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.sync_texture_uploads(ctx);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl MapApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.options,
                ));

                let painter = ui.painter_at(rect);
                match self.state.annotations.lock() {
                    Ok(layer) => {
                        let paint_ctx = render::PaintContext {
                            camera: &self.state.view.camera,
                            view: &self.state.view.map_view,
                            layer: &layer,
                            textures: &self.textures,
                            basemap: self.state.view.basemap.as_ref(),
                            basemap_visible: self.state.options.basemap_visible,
                            basemap_opacity: self.state.options.basemap_opacity,
                            time: ui.input(|i| i.time),
                            animation_enabled: self.state.options.animation_enabled,
                        };
                        render::paint_map(&painter, rect, &paint_ctx);
                    }
                    Err(_) => {
                        log::error!("Annotations-Lock fehlgeschlagen (Mutex vergiftet)");
                    }
                }

                events.extend(ui::render_popups(ui.ctx(), rect, &self.state));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Lädt frisch eingetroffene CPU-Bilder als Texturen hoch.
    fn sync_texture_uploads(&mut self, ctx: &egui::Context) {
        if self.state.view.basemap_dirty {
            self.state.view.basemap_dirty = false;
            if let Some(basemap) = &self.state.view.basemap {
                self.textures.upload_basemap(ctx, &basemap.image);
            }
        }

        for (url, image) in self.state.pending_icons.drain(..) {
            self.textures.upload_icon(ctx, &url, &image);
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        let animating = self.state.options.animation_enabled
            && self
                .state
                .annotations
                .lock()
                .map(|layer| layer.fading_style_installed() && layer.circle_count() > 0)
                .unwrap_or(false);

        if animating {
            ctx.request_repaint_after(Duration::from_millis(33));
        } else if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
