//! Annotations-Ebene der Karte: Marker, Highlight-Kreise, Flächen, Stile.
//!
//! Die Ebene ist die gemeinsame Datenstruktur zwischen Overlay-Loader
//! (Schreiber, Worker-Thread) und Renderer (Leser, UI-Thread) und wird
//! deshalb hinter `Arc<Mutex<…>>` geteilt.

use std::sync::{Arc, Mutex};

use crate::core::geo::LatLon;
use crate::shared::options::{
    FADING_MAX_OPACITY, FADING_MIN_OPACITY, FADING_PERIOD_SECS, FADING_STYLE_ID, ICON_ANCHOR,
    ICON_POPUP_ANCHOR, ICON_SHADOW_SIZE, ICON_SHADOW_URL, ICON_SIZE, ICON_URL_DEFAULT,
    ICON_URL_RED, ICON_URL_VIOLET,
};

/// Eindeutige Kennung eines Markers innerhalb einer Ebene.
pub type MarkerId = u64;

/// Piktogramm-Beschreibung eines Markers (URL, Größe, Anker-Offsets).
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    /// Bild-URL des Icons
    pub url: String,
    /// Bild-URL des Schattens
    pub shadow_url: Option<String>,
    /// Icon-Größe in Pixeln (Breite, Höhe)
    pub size: [u32; 2],
    /// Anker-Offset: dieser Icon-Pixel liegt auf der Koordinate
    pub anchor: [i32; 2],
    /// Popup-Anker relativ zum Icon-Anker
    pub popup_anchor: [i32; 2],
    /// Schatten-Größe in Pixeln
    pub shadow_size: Option<[u32; 2]>,
    /// Ersatzfarbe, falls das Icon-Bild (noch) nicht geladen ist
    pub fallback_color: [f32; 4],
}

impl Icon {
    /// Violettes Marker-Icon (Station).
    pub fn violet() -> Self {
        Self::colored(ICON_URL_VIOLET, [0.5, 0.0, 0.5, 1.0])
    }

    /// Rotes Marker-Icon (Campus).
    pub fn red() -> Self {
        Self::colored(ICON_URL_RED, [0.85, 0.1, 0.1, 1.0])
    }

    /// Blaues Standard-Icon (Overlay-Marker).
    pub fn default_marker() -> Self {
        Self::colored(ICON_URL_DEFAULT, [0.2, 0.53, 1.0, 1.0])
    }

    fn colored(url: &str, fallback_color: [f32; 4]) -> Self {
        Self {
            url: url.to_string(),
            shadow_url: Some(ICON_SHADOW_URL.to_string()),
            size: ICON_SIZE,
            anchor: ICON_ANCHOR,
            popup_anchor: ICON_POPUP_ANCHOR,
            shadow_size: Some(ICON_SHADOW_SIZE),
            fallback_color,
        }
    }
}

/// Punkt-Marker mit Popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Eindeutige Kennung
    pub id: MarkerId,
    /// Verankerte Koordinate
    pub pos: LatLon,
    /// Piktogramm
    pub icon: Icon,
    /// Popup-Text
    pub popup_text: String,
    /// Ob das Popup gerade geöffnet ist
    pub popup_open: bool,
}

/// Highlight-Kreis mit festem Meter-Radius um eine Koordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightCircle {
    /// Mittelpunkt
    pub pos: LatLon,
    /// Radius in Metern
    pub radius_m: f64,
    /// Randfarbe (RGBA)
    pub color: [f32; 4],
    /// Füllfarbe (RGBA, Alpha = Fülldeckung)
    pub fill_color: [f32; 4],
    /// Stil-Klasse für Animationen (z.B. Pulsieren)
    pub style_class: Option<String>,
}

/// Rechteckige Fläche zwischen zwei Koordinaten-Ecken.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaRectangle {
    /// Südwest-Ecke
    pub min: LatLon,
    /// Nordost-Ecke
    pub max: LatLon,
    /// Randfarbe (RGBA)
    pub color: [f32; 4],
    /// Linienstärke in Pixeln
    pub weight: f32,
    /// Füllfarbe (RGBA, Alpha = Fülldeckung)
    pub fill_color: [f32; 4],
    /// Popup-Text (optional)
    pub popup_text: Option<String>,
    /// Ob das Popup gerade geöffnet ist
    pub popup_open: bool,
}

/// Registrierte Animations-Definition (Deckungs-Pulsieren).
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationStyle {
    /// Feste Stil-Kennung
    pub id: String,
    /// Periodendauer in Sekunden
    pub period_secs: f32,
    /// Minimale Deckung
    pub min_opacity: f32,
    /// Maximale Deckung
    pub max_opacity: f32,
}

impl AnimationStyle {
    /// Pulsier-Animation der Highlight-Kreise (0.4 → 1.0 → 0.4, 2 s, endlos).
    pub fn fading() -> Self {
        Self {
            id: FADING_STYLE_ID.to_string(),
            period_secs: FADING_PERIOD_SECS,
            min_opacity: FADING_MIN_OPACITY,
            max_opacity: FADING_MAX_OPACITY,
        }
    }
}

/// Container aller Annotationen einer Kartenansicht.
#[derive(Debug, Default)]
pub struct AnnotationLayer {
    markers: Vec<Marker>,
    circles: Vec<HighlightCircle>,
    rectangles: Vec<AreaRectangle>,
    styles: Vec<AnimationStyle>,
    fading_style_installed: bool,
    next_marker_id: MarkerId,
}

impl AnnotationLayer {
    /// Erstellt eine leere Annotations-Ebene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Marker hinzu und gibt seine Kennung zurück.
    pub fn add_marker(&mut self, pos: LatLon, icon: Icon, popup_text: &str) -> MarkerId {
        let id = self.next_marker_id;
        self.next_marker_id += 1;
        self.markers.push(Marker {
            id,
            pos,
            icon,
            popup_text: popup_text.to_string(),
            popup_open: false,
        });
        id
    }

    /// Fügt einen Highlight-Kreis hinzu.
    pub fn add_circle(&mut self, circle: HighlightCircle) {
        self.circles.push(circle);
    }

    /// Fügt eine Rechteck-Fläche hinzu.
    pub fn add_rectangle(&mut self, rectangle: AreaRectangle) {
        self.rectangles.push(rectangle);
    }

    /// Öffnet das Popup eines Markers.
    pub fn open_popup(&mut self, id: MarkerId) {
        if let Some(marker) = self.markers.iter_mut().find(|m| m.id == id) {
            marker.popup_open = true;
        }
    }

    /// Schaltet das Popup eines Markers um.
    pub fn toggle_popup(&mut self, id: MarkerId) {
        if let Some(marker) = self.markers.iter_mut().find(|m| m.id == id) {
            marker.popup_open = !marker.popup_open;
        }
    }

    /// Schaltet das Popup der Rechteck-Fläche mit Index `index` um.
    pub fn toggle_rectangle_popup(&mut self, index: usize) {
        if let Some(rect) = self.rectangles.get_mut(index) {
            if rect.popup_text.is_some() {
                rect.popup_open = !rect.popup_open;
            }
        }
    }

    /// Ob die Pulsier-Animation bereits registriert wurde.
    pub fn fading_style_installed(&self) -> bool {
        self.fading_style_installed
    }

    /// Registriert die Pulsier-Animation und setzt das Einmal-Flag.
    ///
    /// Aufrufer prüfen das Flag vorher über `fading_style_installed()`;
    /// ein Doppelaufruf registriert keinen zweiten Stil.
    pub fn install_fading_style(&mut self, style: AnimationStyle) {
        if self.fading_style_installed {
            return;
        }
        self.fading_style_installed = true;
        self.styles.push(style);
    }

    /// Sucht eine registrierte Animations-Definition per Kennung.
    pub fn style(&self, id: &str) -> Option<&AnimationStyle> {
        self.styles.iter().find(|s| s.id == id)
    }

    /// Alle Marker in Einfüge-Reihenfolge.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Alle Highlight-Kreise in Einfüge-Reihenfolge.
    pub fn circles(&self) -> &[HighlightCircle] {
        &self.circles
    }

    /// Alle Rechteck-Flächen in Einfüge-Reihenfolge.
    pub fn rectangles(&self) -> &[AreaRectangle] {
        &self.rectangles
    }

    /// Alle registrierten Stile.
    pub fn styles(&self) -> &[AnimationStyle] {
        &self.styles
    }

    /// Anzahl der Marker.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Anzahl der Highlight-Kreise.
    pub fn circle_count(&self) -> usize {
        self.circles.len()
    }

    /// Anzahl der Rechteck-Flächen.
    pub fn rectangle_count(&self) -> usize {
        self.rectangles.len()
    }
}

/// Zwischen UI-Thread und Worker geteilte Annotations-Ebene.
pub type SharedAnnotations = Arc<Mutex<AnnotationLayer>>;

/// Erstellt eine leere, teilbare Annotations-Ebene.
pub fn shared_layer() -> SharedAnnotations {
    Arc::new(Mutex::new(AnnotationLayer::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_ids_sind_fortlaufend() {
        let mut layer = AnnotationLayer::new();
        let a = layer.add_marker(LatLon::new(50.0, 4.0), Icon::default_marker(), "A");
        let b = layer.add_marker(LatLon::new(51.0, 5.0), Icon::default_marker(), "B");
        assert_ne!(a, b);
        assert_eq!(layer.marker_count(), 2);
    }

    #[test]
    fn test_toggle_popup() {
        let mut layer = AnnotationLayer::new();
        let id = layer.add_marker(LatLon::new(50.0, 4.0), Icon::violet(), "Station");
        assert!(!layer.markers()[0].popup_open);

        layer.toggle_popup(id);
        assert!(layer.markers()[0].popup_open);

        layer.toggle_popup(id);
        assert!(!layer.markers()[0].popup_open);
    }

    #[test]
    fn test_install_fading_style_nur_einmal() {
        let mut layer = AnnotationLayer::new();
        layer.install_fading_style(AnimationStyle::fading());
        layer.install_fading_style(AnimationStyle::fading());
        assert_eq!(layer.styles().len(), 1);
        assert!(layer.fading_style_installed());
    }

    #[test]
    fn test_rechteck_popup_nur_mit_text() {
        let mut layer = AnnotationLayer::new();
        layer.add_rectangle(AreaRectangle {
            min: LatLon::new(50.0, 4.0),
            max: LatLon::new(50.1, 4.1),
            color: [1.0, 0.0, 0.0, 1.0],
            weight: 2.0,
            fill_color: [1.0, 0.0, 0.2, 0.3],
            popup_text: None,
            popup_open: false,
        });
        layer.toggle_rectangle_popup(0);
        assert!(!layer.rectangles()[0].popup_open);
    }
}
