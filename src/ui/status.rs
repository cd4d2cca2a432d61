//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, OverlayStatus};
use crate::shared::options::TILE_ATTRIBUTION;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Ok(layer) = state.annotations.lock() {
                ui.label(format!(
                    "Marker: {} | Kreise: {} | Flächen: {}",
                    layer.marker_count(),
                    layer.circle_count(),
                    layer.rectangle_count()
                ));
            } else {
                ui.label("Annotationen nicht lesbar");
            }

            ui.separator();

            let center = state.view.map_view.latlon_of(state.view.camera.position);
            ui.label(format!(
                "Zoom: {:.2}x | Zentrum: ({:.6}, {:.6})",
                state.view.camera.zoom, center.lat, center.lon
            ));

            ui.separator();

            let overlay_label = match &state.overlay {
                OverlayStatus::Disabled => "Overlay: deaktiviert".to_string(),
                OverlayStatus::Loading => "Overlay: lädt …".to_string(),
                OverlayStatus::Loaded(summary) => {
                    format!("Overlay: {} Marker", summary.rendered)
                }
                OverlayStatus::Failed(_) => "Overlay: Fehler".to_string(),
            };
            ui.label(overlay_label);

            ui.separator();

            ui.label(TILE_ATTRIBUTION);
        });
    });
}
