//! Application State — zentrale Datenhaltung.

use image::RgbaImage;

use crate::core::basemap::BasemapImage;
use crate::core::{shared_layer, Camera2D, MapView, SharedAnnotations};
use crate::overlay::OverlaySummary;
use crate::shared::options::{MAP_CENTER, MAP_ZOOM};
use crate::shared::ViewerOptions;

/// Standard-Fenstergröße des Viewers in Pixeln.
pub const DEFAULT_VIEWPORT: [f32; 2] = [1280.0, 720.0];

/// Zustand des Overlay-Ladevorgangs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayStatus {
    /// Automatisches Laden ist per Option deaktiviert
    Disabled,
    /// Ladevorgang läuft (genau einer pro Anwendungsstart)
    Loading,
    /// Ladevorgang abgeschlossen
    Loaded(OverlaySummary),
    /// Ladevorgang fehlgeschlagen; Karte bleibt mit statischen Markern nutzbar
    Failed(String),
}

/// Ansichts-Zustand: Kamera, Viewport und Basiskarte.
pub struct ViewState {
    /// Kamera über der Kartenansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixeln
    pub viewport_size: [f32; 2],
    /// Feste Kartenansicht (Zentrum + Basiszoom)
    pub map_view: MapView,
    /// Geladenes Basiskarten-Mosaik
    pub basemap: Option<BasemapImage>,
    /// Basiskarte muss als Textur hochgeladen werden
    pub basemap_dirty: bool,
}

impl ViewState {
    /// Erstellt den Standard-Ansichtszustand (Brüssel-Zentralstation, Zoom 14).
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: DEFAULT_VIEWPORT,
            map_view: MapView::new(MAP_CENTER, MAP_ZOOM),
            basemap: None,
            basemap_dirty: false,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Zentraler Anwendungszustand.
pub struct AppState {
    /// Ansichts-Zustand
    pub view: ViewState,
    /// Status des Overlay-Ladevorgangs
    pub overlay: OverlayStatus,
    /// Mit dem Worker geteilte Annotations-Ebene
    pub annotations: SharedAnnotations,
    /// Geladene Icon-Bilder, die auf Textur-Upload warten
    pub pending_icons: Vec<(String, RgbaImage)>,
    /// Laufzeit-Optionen
    pub options: ViewerOptions,
    /// Anwendung beim nächsten Frame beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Anwendungszustand mit den übergebenen Optionen.
    pub fn new(options: ViewerOptions) -> Self {
        let overlay = if options.overlay_autoload {
            OverlayStatus::Loading
        } else {
            OverlayStatus::Disabled
        };
        Self {
            view: ViewState::new(),
            overlay,
            annotations: shared_layer(),
            pending_icons: Vec::new(),
            options,
            should_exit: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_status_folgt_autoload_option() {
        let mut options = ViewerOptions::default();
        options.overlay_autoload = false;
        let state = AppState::new(options);
        assert_eq!(state.overlay, OverlayStatus::Disabled);

        let state = AppState::new(ViewerOptions::default());
        assert_eq!(state.overlay, OverlayStatus::Loading);
    }

    #[test]
    fn test_ansicht_startet_auf_zentralstation() {
        let view = ViewState::new();
        assert_eq!(view.map_view.center, MAP_CENTER);
        assert_eq!(view.map_view.zoom, MAP_ZOOM);
        assert_eq!(view.camera.position, glam::Vec2::ZERO);
    }
}
