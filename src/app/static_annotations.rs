//! Statische Annotationen: Zentralstation und Erasmus-Campus.
//!
//! Reine Konfiguration: feste Koordinaten, Icons und Popup-Texte aus
//! `shared::options`, einmalig beim Start eingetragen.

use crate::core::annotations::{AreaRectangle, HighlightCircle, Icon};
use crate::core::SharedAnnotations;
use crate::shared::options::{
    CAMPUS_LABEL, CAMPUS_POS, CAMPUS_RECT_COLOR, CAMPUS_RECT_FILL, CAMPUS_RECT_LABEL,
    CAMPUS_RECT_MAX, CAMPUS_RECT_MIN, CAMPUS_RECT_WEIGHT, FADING_STYLE_ID, HIGHLIGHT_RADIUS_M,
    STATION_CIRCLE_COLOR, STATION_CIRCLE_FILL, STATION_LABEL, STATION_POS,
};

/// Trägt die statischen Marker und Flächen in die Annotations-Ebene ein.
pub fn install(annotations: &SharedAnnotations) {
    let Ok(mut layer) = annotations.lock() else {
        log::error!("Annotations-Lock fehlgeschlagen (Mutex vergiftet)");
        return;
    };

    // Violetter Marker plus Highlight-Kreis für die Zentralstation;
    // das Popup startet geöffnet.
    let station = layer.add_marker(STATION_POS, Icon::violet(), STATION_LABEL);
    layer.open_popup(station);
    layer.add_circle(HighlightCircle {
        pos: STATION_POS,
        radius_m: HIGHLIGHT_RADIUS_M,
        color: STATION_CIRCLE_COLOR,
        fill_color: STATION_CIRCLE_FILL,
        style_class: Some(FADING_STYLE_ID.to_string()),
    });
    log::info!("Station: [{}, {}]", STATION_POS.lat, STATION_POS.lon);

    // Roter Marker und Flächen-Rechteck für den Erasmus-Campus
    layer.add_marker(CAMPUS_POS, Icon::red(), CAMPUS_LABEL);
    layer.add_rectangle(AreaRectangle {
        min: CAMPUS_RECT_MIN,
        max: CAMPUS_RECT_MAX,
        color: CAMPUS_RECT_COLOR,
        weight: CAMPUS_RECT_WEIGHT,
        fill_color: CAMPUS_RECT_FILL,
        popup_text: Some(CAMPUS_RECT_LABEL.to_string()),
        popup_open: false,
    });
    log::info!("Campus: [{}, {}]", CAMPUS_POS.lat, CAMPUS_POS.lon);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shared_layer;

    #[test]
    fn test_install_erzeugt_feste_annotationen() {
        let annotations = shared_layer();
        install(&annotations);

        let layer = annotations.lock().expect("Lock");
        assert_eq!(layer.marker_count(), 2);
        assert_eq!(layer.circle_count(), 1);
        assert_eq!(layer.rectangle_count(), 1);

        // Stations-Popup startet geöffnet, Campus-Popup geschlossen
        assert!(layer.markers()[0].popup_open);
        assert!(!layer.markers()[1].popup_open);
        assert_eq!(layer.markers()[0].popup_text, "Brussels Central Station");

        // Der statische Kreis referenziert die Stil-Klasse, ohne den
        // Stil selbst zu registrieren
        assert_eq!(
            layer.circles()[0].style_class.as_deref(),
            Some("fading-style")
        );
        assert!(!layer.fading_style_installed());
    }
}
