//! Zentrale Konfiguration für den Brüssel-Kartenviewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte sind feste Literale der Karte (Zentrum, Endpunkte,
//! Farben) und bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::geo::LatLon;

// ── Kartenansicht ───────────────────────────────────────────────────

/// Kartenzentrum: Brüssel-Zentralstation (WGS84).
pub const MAP_CENTER: LatLon = LatLon::new(50.845748, 4.356524);
/// Fester Basis-Zoomlevel der Kartenansicht (Slippy-Map-Konvention).
pub const MAP_ZOOM: u8 = 14;

/// Kachel-URL-Template des Basiskarten-Layers.
pub const TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
/// Attributions-Text des Basiskarten-Layers.
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

// ── Open-Data-Endpunkt ──────────────────────────────────────────────

/// Host des Open-Data-Portals der Stadt Brüssel.
pub const DATASET_HOST: &str = "bruxellesdata.opendatasoft.com";
/// Name des Datensatzes (öffentliche Urinale).
pub const DATASET_NAME: &str = "urinoirs-publics-vbx";
/// Maximale Anzahl abgefragter Datensätze.
pub const DATASET_ROWS: u32 = 20;

/// Popup-Text für Datensätze ohne `nom`-Feld.
pub const DEFAULT_OVERLAY_LABEL: &str = "Public Urinal";

// ── Statische Orte ──────────────────────────────────────────────────

/// Position der Brüssel-Zentralstation.
pub const STATION_POS: LatLon = LatLon::new(50.845748, 4.356524);
/// Popup-Text des Stations-Markers.
pub const STATION_LABEL: &str = "Brussels Central Station";

/// Position des Erasmus-Campus Kaai.
pub const CAMPUS_POS: LatLon = LatLon::new(50.841779, 4.322871);
/// Popup-Text des Campus-Markers.
pub const CAMPUS_LABEL: &str = "Erasmus Hogeschool Brussel Campus Kaai";

/// Südwest-Ecke des Campus-Rechtecks.
pub const CAMPUS_RECT_MIN: LatLon = LatLon::new(50.8405, 4.3215);
/// Nordost-Ecke des Campus-Rechtecks.
pub const CAMPUS_RECT_MAX: LatLon = LatLon::new(50.843, 4.3255);
/// Popup-Text des Campus-Rechtecks.
pub const CAMPUS_RECT_LABEL: &str = "Erasmus Campus Area";

// ── Highlight-Kreise ────────────────────────────────────────────────

/// Radius aller Highlight-Kreise in Metern.
pub const HIGHLIGHT_RADIUS_M: f64 = 150.0;
/// Linienstärke der Highlight-Kreise in Pixeln.
pub const HIGHLIGHT_STROKE_WEIGHT: f32 = 3.0;

/// Randfarbe des Stations-Kreises (RGBA: Violett).
pub const STATION_CIRCLE_COLOR: [f32; 4] = [0.5, 0.0, 0.5, 1.0];
/// Füllfarbe des Stations-Kreises (Violett, 50 % Deckung).
pub const STATION_CIRCLE_FILL: [f32; 4] = [0.5, 0.0, 0.5, 0.5];

/// Randfarbe der Overlay-Kreise (RGBA: Blau).
pub const OVERLAY_CIRCLE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Füllfarbe der Overlay-Kreise (#3388ff, 50 % Deckung).
pub const OVERLAY_CIRCLE_FILL: [f32; 4] = [0.2, 0.53, 1.0, 0.5];

/// Randfarbe des Campus-Rechtecks (RGBA: Rot).
pub const CAMPUS_RECT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Linienstärke des Campus-Rechtecks in Pixeln.
pub const CAMPUS_RECT_WEIGHT: f32 = 2.0;
/// Füllfarbe des Campus-Rechtecks (#f03, 30 % Deckung).
pub const CAMPUS_RECT_FILL: [f32; 4] = [1.0, 0.0, 0.2, 0.3];

// ── Fading-Animation ────────────────────────────────────────────────

/// Stil-Kennung der Pulsier-Animation für Highlight-Kreise.
pub const FADING_STYLE_ID: &str = "fading-style";
/// Periodendauer der Pulsier-Animation in Sekunden.
pub const FADING_PERIOD_SECS: f32 = 2.0;
/// Minimale Deckung der Animation.
pub const FADING_MIN_OPACITY: f32 = 0.4;
/// Maximale Deckung der Animation.
pub const FADING_MAX_OPACITY: f32 = 1.0;

// ── Marker-Icons ────────────────────────────────────────────────────

/// Icon-URL des violetten Stations-Markers.
pub const ICON_URL_VIOLET: &str =
    "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-violet.png";
/// Icon-URL des roten Campus-Markers.
pub const ICON_URL_RED: &str =
    "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-red.png";
/// Icon-URL des blauen Standard-Markers (Overlay-Marker).
pub const ICON_URL_DEFAULT: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/images/marker-icon.png";
/// Schatten-URL aller Marker-Icons.
pub const ICON_SHADOW_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/images/marker-shadow.png";

/// Icon-Größe in Pixeln (Breite, Höhe).
pub const ICON_SIZE: [u32; 2] = [25, 41];
/// Anker-Offset des Icons (Spitze) in Pixeln.
pub const ICON_ANCHOR: [i32; 2] = [12, 41];
/// Popup-Anker relativ zum Icon-Anker in Pixeln.
pub const ICON_POPUP_ANCHOR: [i32; 2] = [1, -34];
/// Schatten-Größe in Pixeln.
pub const ICON_SHADOW_SIZE: [u32; 2] = [41, 41];

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor (≈ drei Zoomlevel unter der Basis).
pub const CAMERA_ZOOM_MIN: f32 = 0.125;
/// Maximaler Zoom-Faktor (≈ drei Zoomlevel über der Basis).
pub const CAMERA_ZOOM_MAX: f32 = 8.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `brussels_opendata_map.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerOptions {
    // ── Basiskarte ──────────────────────────────────────────────
    /// Basiskarte anzeigen
    pub basemap_visible: bool,
    /// Deckung der Basiskarte (0.0 = transparent, 1.0 = opak)
    pub basemap_opacity: f32,

    // ── Overlay ─────────────────────────────────────────────────
    /// Overlay-Daten beim Start automatisch laden
    pub overlay_autoload: bool,
    /// Pulsier-Animation der Highlight-Kreise abspielen
    #[serde(default = "default_animation_enabled")]
    pub animation_enabled: bool,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            basemap_visible: true,
            basemap_opacity: 1.0,
            overlay_autoload: true,
            animation_enabled: true,
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

/// Serde-Default für `animation_enabled` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_animation_enabled() -> bool {
    true
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("brussels_opendata_map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("brussels_opendata_map.toml")
    }

    /// Baut die vollständige URL des Datensatz-Endpunkts.
    pub fn dataset_url() -> String {
        format!(
            "https://{}/api/records/1.0/search/?dataset={}&q=&rows={}",
            DATASET_HOST, DATASET_NAME, DATASET_ROWS
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_url_enthaelt_alle_parameter() {
        let url = ViewerOptions::dataset_url();
        assert!(url.starts_with("https://bruxellesdata.opendatasoft.com/"));
        assert!(url.contains("dataset=urinoirs-publics-vbx"));
        assert!(url.contains("rows=20"));
    }

    #[test]
    fn test_optionen_toml_roundtrip() {
        let mut opts = ViewerOptions::default();
        opts.basemap_opacity = 0.7;
        opts.animation_enabled = false;

        let toml_str = toml::to_string_pretty(&opts).expect("Serialisierung");
        let parsed: ViewerOptions = toml::from_str(&toml_str).expect("Deserialisierung");
        assert_eq!(parsed, opts);
    }
}
