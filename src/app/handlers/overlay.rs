//! Handler für Overlay-Ergebnisse, Icon-Bilder und Popups.

use glam::Vec2;
use image::RgbaImage;

use crate::app::events::PopupTarget;
use crate::app::state::OverlayStatus;
use crate::app::AppState;
use crate::overlay::OverlaySummary;
use crate::render::picking;

/// Übernimmt das Ergebnis eines abgeschlossenen Overlay-Ladevorgangs.
pub fn apply_overlay_summary(state: &mut AppState, summary: OverlaySummary) {
    log::info!(
        "Overlay abgeschlossen: {} Marker, {} übersprungen",
        summary.rendered,
        summary.skipped
    );
    state.overlay = OverlayStatus::Loaded(summary);
}

/// Übernimmt einen fehlgeschlagenen Overlay-Ladevorgang.
///
/// Genau eine Fehlermeldung im Log; die Karte bleibt mit ihren
/// statischen Markern nutzbar, es gibt keinen erneuten Versuch.
pub fn apply_overlay_failure(state: &mut AppState, message: String) {
    log::error!("Fehler beim Laden der Overlay-Daten: {}", message);
    state.overlay = OverlayStatus::Failed(message);
}

/// Speichert ein geladenes Icon-Bild für den Textur-Upload zwischen.
pub fn store_icon_image(state: &mut AppState, url: String, image: RgbaImage) {
    log::debug!(
        "Icon geladen: {} ({}x{})",
        url,
        image.width(),
        image.height()
    );
    state.pending_icons.push((url, image));
}

/// Protokolliert einen fehlgeschlagenen Icon-Abruf.
///
/// Betroffene Marker werden mit dem Vektor-Ersatz-Pin gezeichnet.
pub fn report_icon_failure(url: &str, reason: &str) {
    log::warn!("Icon {} nicht ladbar: {}", url, reason);
}

/// Schaltet das Popup der Annotation unter der Klick-Position um.
///
/// Marker liegen über Flächen: zuerst Marker-Treffer prüfen, dann
/// Rechtecke. Klicks ins Leere sind No-Ops.
pub fn toggle_popup_at(state: &mut AppState, screen_pos: Vec2) {
    let viewport = Vec2::new(state.view.viewport_size[0], state.view.viewport_size[1]);
    let Ok(mut layer) = state.annotations.lock() else {
        log::error!("Annotations-Lock fehlgeschlagen (Mutex vergiftet)");
        return;
    };

    if let Some(id) =
        picking::pick_marker(&layer, &state.view.camera, &state.view.map_view, viewport, screen_pos)
    {
        layer.toggle_popup(id);
        return;
    }

    if let Some(index) = picking::pick_rectangle(
        &layer,
        &state.view.camera,
        &state.view.map_view,
        viewport,
        screen_pos,
    ) {
        layer.toggle_rectangle_popup(index);
    }
}

/// Schließt ein Popup gezielt (Schließen-Knopf im Popup).
pub fn close_popup(state: &mut AppState, target: PopupTarget) {
    let Ok(mut layer) = state.annotations.lock() else {
        log::error!("Annotations-Lock fehlgeschlagen (Mutex vergiftet)");
        return;
    };
    match target {
        PopupTarget::Marker(id) => layer.toggle_popup(id),
        PopupTarget::Rectangle(index) => layer.toggle_rectangle_popup(index),
    }
}
