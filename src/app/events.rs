//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use glam::Vec2;
use image::RgbaImage;

use crate::core::basemap::BasemapImage;
use crate::core::MarkerId;
use crate::overlay::OverlaySummary;

/// Ziel eines offenen Popups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopupTarget {
    /// Popup eines Markers
    Marker(MarkerId),
    /// Popup einer Rechteck-Fläche (Index in Einfüge-Reihenfolge)
    Rectangle(usize),
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI, Worker und System ohne direkte
/// Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<Vec2>,
    },
    /// Klick in den Karten-Viewport (Bildschirm-Koordinaten)
    MapClicked { screen_pos: Vec2 },
    /// Popup explizit geschlossen (Schließen-Knopf)
    PopupCloseRequested { target: PopupTarget },
    /// Sichtbarkeit der Basiskarte umschalten
    BasemapVisibilityToggled,
    /// Pulsier-Animation ein-/ausschalten
    AnimationToggled,

    /// Basiskarten-Mosaik wurde geladen (Worker)
    BasemapLoaded { basemap: BasemapImage },
    /// Basiskarten-Abruf ist fehlgeschlagen (Worker)
    BasemapLoadFailed { reason: String },
    /// Ein Icon-Bild wurde geladen (Worker)
    IconLoaded { url: String, image: RgbaImage },
    /// Ein Icon-Abruf ist fehlgeschlagen (Worker)
    IconLoadFailed { url: String, reason: String },
    /// Overlay-Ladevorgang erfolgreich abgeschlossen (Worker)
    OverlayLoadCompleted { summary: OverlaySummary },
    /// Overlay-Ladevorgang fehlgeschlagen (Worker)
    OverlayLoadFailed { message: String },
}

/// Mutierende Commands auf dem AppState.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung beenden
    Exit,
    /// Kamera zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben
    PanCamera { delta: Vec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f32,
        focus_world: Option<Vec2>,
    },
    /// Popup unter einer Bildschirm-Position umschalten
    TogglePopupAt { screen_pos: Vec2 },
    /// Popup schließen
    ClosePopup { target: PopupTarget },
    /// Basiskarten-Sichtbarkeit umschalten
    ToggleBasemap,
    /// Animation umschalten
    ToggleAnimation,
    /// Geladene Basiskarte übernehmen
    SetBasemap { basemap: BasemapImage },
    /// Basiskarten-Fehler protokollieren
    ReportBasemapFailure { reason: String },
    /// Geladenes Icon-Bild zwischenspeichern
    StoreIconImage { url: String, image: RgbaImage },
    /// Icon-Fehler protokollieren
    ReportIconFailure { url: String, reason: String },
    /// Overlay-Ergebnis übernehmen
    ApplyOverlaySummary { summary: OverlaySummary },
    /// Overlay-Fehler übernehmen und protokollieren
    ApplyOverlayFailure { message: String },
}
