//! Top-Menü (File, View).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Camera").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }
                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }
                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                ui.separator();

                let mut basemap_visible = state.options.basemap_visible;
                if ui
                    .checkbox(&mut basemap_visible, "Basiskarte anzeigen")
                    .changed()
                {
                    events.push(AppIntent::BasemapVisibilityToggled);
                }

                let mut animation = state.options.animation_enabled;
                if ui.checkbox(&mut animation, "Pulsier-Animation").changed() {
                    events.push(AppIntent::AnimationToggled);
                }
            });
        });
    });

    events
}
