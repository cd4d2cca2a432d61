//! Handler für Kamera, Viewport und Basiskarte.

use glam::Vec2;

use crate::app::AppState;
use crate::core::basemap::BasemapImage;
use crate::shared::ViewerOptions;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Default::default();
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        1.0 / state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Verschiebt die Kamera um ein Weltkoordinaten-Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt mit optionalem Fokuspunkt im Weltkoordinatensystem.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter der
/// Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<Vec2>) {
    let camera = &mut state.view.camera;
    let Some(focus) = focus_world else {
        camera.zoom_by_clamped(
            factor,
            state.options.camera_zoom_min,
            state.options.camera_zoom_max,
        );
        return;
    };

    let old_zoom = camera.zoom;
    camera.zoom_by_clamped(
        factor,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
    let applied = camera.zoom / old_zoom;
    if applied != 1.0 {
        camera.position = focus + (camera.position - focus) / applied;
    }
}

/// Übernimmt das geladene Basiskarten-Mosaik.
pub fn set_basemap(state: &mut AppState, basemap: BasemapImage) {
    log::info!(
        "Basiskarte übernommen: {}x{} px",
        basemap.image.width(),
        basemap.image.height()
    );
    state.view.basemap = Some(basemap);
    state.view.basemap_dirty = true;
}

/// Protokolliert einen fehlgeschlagenen Basiskarten-Abruf.
///
/// Die Karte bleibt ohne Hintergrundbild nutzbar.
pub fn report_basemap_failure(reason: &str) {
    log::warn!("Basiskarte konnte nicht geladen werden: {}", reason);
}

/// Schaltet die Sichtbarkeit der Basiskarte um und persistiert die Option.
pub fn toggle_basemap(state: &mut AppState) {
    state.options.basemap_visible = !state.options.basemap_visible;
    save_options(&state.options);
}

/// Schaltet die Pulsier-Animation um und persistiert die Option.
pub fn toggle_animation(state: &mut AppState) {
    state.options.animation_enabled = !state.options.animation_enabled;
    save_options(&state.options);
}

fn save_options(options: &ViewerOptions) {
    if let Err(e) = options.save_to_file(&ViewerOptions::config_path()) {
        log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
    }
}
