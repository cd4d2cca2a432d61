//! Overlay-Loader: lädt den Open-Data-Datensatz und rendert jeden
//! gültigen Eintrag als Marker+Highlight-Kreis-Paar auf die
//! Annotations-Ebene.
//!
//! Der Ablauf ist eine einzelne Fortsetzungskette: Abruf → Parsen →
//! Rendern pro Datensatz. Fehler werden am oberen Ende der Kette
//! gefangen und geloggt; es gibt keinen Retry und keine Frist.

use thiserror::Error;

use crate::core::annotations::{AnimationStyle, AnnotationLayer, HighlightCircle, Icon};
use crate::core::geo::LatLon;
use crate::core::record::DatasetResponse;
use crate::core::SharedAnnotations;
use crate::shared::options::{
    FADING_STYLE_ID, HIGHLIGHT_RADIUS_M, OVERLAY_CIRCLE_COLOR, OVERLAY_CIRCLE_FILL,
};
use crate::shared::ViewerOptions;

/// Fehler beim Laden der Overlay-Daten.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// Die API hat mit einem Nicht-Erfolgs-Status geantwortet.
    #[error("API-Anfrage fehlgeschlagen mit Status {status}")]
    Request {
        /// HTTP-Statuscode der Antwort
        status: u16,
    },
    /// Der Antwort-Body ist kein gültiges JSON.
    #[error("ungültige API-Antwort: {0}")]
    Parse(#[from] serde_json::Error),
    /// Transport- oder Verbindungsfehler.
    #[error("Netzwerkfehler: {0}")]
    Http(#[from] reqwest::Error),
}

/// Ergebnis eines abgeschlossenen Overlay-Ladevorgangs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlaySummary {
    /// Anzahl gerenderter Marker+Kreis-Paare
    pub rendered: usize,
    /// Anzahl übersprungener Datensätze ohne verwertbare Koordinaten
    pub skipped: usize,
}

/// Lädt den Open-Data-Datensatz und rendert alle gültigen Einträge.
///
/// Erwartet eine bereits initialisierte Annotations-Ebene. Ein
/// Nicht-Erfolgs-Status bricht ohne Render-Seiteneffekt ab; eine leere
/// Antwort ist ein gültiges Ergebnis mit null Renderings.
pub fn load_overlay_data(annotations: &SharedAnnotations) -> Result<OverlaySummary, OverlayError> {
    let url = ViewerOptions::dataset_url();
    log::info!("Lade Overlay-Daten von {}", url);

    // Keine Frist: der Abruf läuft bis zum Erfolg oder Fehler
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("Brussels-OpenData-Map/", env!("CARGO_PKG_VERSION")))
        .timeout(None)
        .build()?;
    let response = client.get(&url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(OverlayError::Request {
            status: status.as_u16(),
        });
    }

    let body = response.text()?;
    ingest_response(&body, annotations)
}

/// Parst einen Antwort-Body und rendert jeden gültigen Datensatz.
///
/// Datensätze ohne verwertbares Koordinatenpaar werden still
/// übersprungen (Datenqualitäts-Skip, kein Fehler).
pub fn ingest_response(
    body: &str,
    annotations: &SharedAnnotations,
) -> Result<OverlaySummary, OverlayError> {
    let data: DatasetResponse = serde_json::from_str(body)?;

    if data.records.is_empty() {
        log::info!("Keine Overlay-Datensätze gefunden");
        return Ok(OverlaySummary::default());
    }

    let mut summary = OverlaySummary::default();
    for record in &data.records {
        match record.to_overlay_point() {
            Some(point) => {
                render_overlay_marker(annotations, point.pos, &point.label);
                log::info!("Overlay-Marker: [{}, {}]", point.pos.lat, point.pos.lon);
                summary.rendered += 1;
            }
            None => {
                log::debug!("Datensatz ohne verwertbares Koordinatenpaar übersprungen");
                summary.skipped += 1;
            }
        }
    }

    log::info!(
        "Overlay geladen: {} Marker gerendert, {} Datensätze übersprungen",
        summary.rendered,
        summary.skipped
    );
    Ok(summary)
}

/// Rendert genau ein Marker+Highlight-Kreis-Paar an einer Koordinate.
///
/// Marker und Kreis entstehen unter derselben Lock-Inhaberschaft: kein
/// Frame kann einen Marker ohne seinen Kreis beobachten.
pub fn render_overlay_marker(annotations: &SharedAnnotations, pos: LatLon, label: &str) {
    let Ok(mut layer) = annotations.lock() else {
        log::error!("Annotations-Lock fehlgeschlagen (Mutex vergiftet)");
        return;
    };

    ensure_fading_style_injected(&mut layer);

    layer.add_marker(pos, Icon::default_marker(), label);
    layer.add_circle(HighlightCircle {
        pos,
        radius_m: HIGHLIGHT_RADIUS_M,
        color: OVERLAY_CIRCLE_COLOR,
        fill_color: OVERLAY_CIRCLE_FILL,
        style_class: Some(FADING_STYLE_ID.to_string()),
    });
}

/// Registriert die Pulsier-Animation genau einmal pro Ebene.
///
/// Idempotent: das Einmal-Flag der Ebene wird vor der Registrierung
/// geprüft, wiederholte Aufrufe sind No-Ops.
pub fn ensure_fading_style_injected(layer: &mut AnnotationLayer) {
    if layer.fading_style_installed() {
        return;
    }
    layer.install_fading_style(AnimationStyle::fading());
    log::debug!("Pulsier-Stil '{}' registriert", FADING_STYLE_ID);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shared_layer;

    #[test]
    fn test_ensure_fading_style_ist_idempotent() {
        let mut layer = AnnotationLayer::new();
        ensure_fading_style_injected(&mut layer);
        ensure_fading_style_injected(&mut layer);
        ensure_fading_style_injected(&mut layer);
        assert_eq!(layer.styles().len(), 1);
        assert_eq!(layer.styles()[0].id, FADING_STYLE_ID);
    }

    #[test]
    fn test_render_overlay_marker_erzeugt_paar() {
        let annotations = shared_layer();
        render_overlay_marker(&annotations, LatLon::new(50.85, 4.35), "Testpunkt");

        let layer = annotations.lock().expect("Lock");
        assert_eq!(layer.marker_count(), 1);
        assert_eq!(layer.circle_count(), 1);
        assert_eq!(layer.markers()[0].popup_text, "Testpunkt");
        assert_eq!(layer.circles()[0].radius_m, HIGHLIGHT_RADIUS_M);
        assert!(layer.fading_style_installed());
    }

    #[test]
    fn test_request_fehler_nennt_statuscode() {
        let err = OverlayError::Request { status: 500 };
        assert!(err.to_string().contains("500"));
    }
}
