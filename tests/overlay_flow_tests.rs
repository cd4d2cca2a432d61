//! Integrationstests für den Overlay-Ladefluss:
//! - Parse → Validierung → Rendern pro Datensatz
//! - Datenqualitäts-Skips ohne Render-Seiteneffekte
//! - Einmalige Stil-Registrierung

use brussels_opendata_map::app::static_annotations;
use brussels_opendata_map::core::shared_layer;
use brussels_opendata_map::{ingest_response, LatLon, OverlayError};

/// Antwort mit genau einem gültigen Datensatz.
const SINGLE_RECORD: &str = r#"{"records":[{"fields":{"geo_point_2d":[50.85,4.35],"nom":"A"}}]}"#;

#[test]
fn test_gueltiger_datensatz_erzeugt_marker_und_kreis() {
    let annotations = shared_layer();
    let summary = ingest_response(SINGLE_RECORD, &annotations).expect("gültige Antwort");

    assert_eq!(summary.rendered, 1);
    assert_eq!(summary.skipped, 0);

    let layer = annotations.lock().expect("Lock");
    assert_eq!(layer.marker_count(), 1);
    assert_eq!(layer.circle_count(), 1);

    let marker = &layer.markers()[0];
    assert_eq!(marker.pos, LatLon::new(50.85, 4.35));
    assert_eq!(marker.popup_text, "A");

    let circle = &layer.circles()[0];
    assert_eq!(circle.pos, marker.pos);
    assert_eq!(circle.radius_m, 150.0);
}

#[test]
fn test_eins_zu_eins_zu_eins_korrespondenz() {
    // Jeder akzeptierte Datensatz erzeugt genau einen Marker und genau
    // einen Kreis; der Stil wird trotzdem nur einmal registriert
    let body = r#"{"records":[
        {"fields":{"geo_point_2d":[50.85,4.35],"nom":"A"}},
        {"fields":{"geo_point_2d":[50.86,4.36],"nom":"B"}},
        {"fields":{"geo_point_2d":[50.87,4.37],"nom":"C"}}
    ]}"#;

    let annotations = shared_layer();
    let summary = ingest_response(body, &annotations).expect("gültige Antwort");

    assert_eq!(summary.rendered, 3);
    let layer = annotations.lock().expect("Lock");
    assert_eq!(layer.marker_count(), 3);
    assert_eq!(layer.circle_count(), 3);
    assert_eq!(layer.styles().len(), 1);
}

#[test]
fn test_leere_antwort_ist_gueltig() {
    let annotations = shared_layer();
    let summary = ingest_response(r#"{"records":[]}"#, &annotations).expect("leer ist gültig");

    assert_eq!(summary.rendered, 0);
    assert_eq!(summary.skipped, 0);

    let layer = annotations.lock().expect("Lock");
    assert_eq!(layer.marker_count(), 0);
    assert_eq!(layer.circle_count(), 0);
}

#[test]
fn test_fehlendes_records_feld_ist_gueltig() {
    let annotations = shared_layer();
    let summary = ingest_response(r#"{}"#, &annotations).expect("fehlend ist gültig");
    assert_eq!(summary.rendered, 0);
}

#[test]
fn test_datensatz_ohne_koordinaten_wird_uebersprungen() {
    let body = r#"{"records":[{"fields":{"nom":"ohne Koordinaten"}}]}"#;

    let annotations = shared_layer();
    let summary = ingest_response(body, &annotations).expect("Skip ist kein Fehler");

    assert_eq!(summary.rendered, 0);
    assert_eq!(summary.skipped, 1);

    let layer = annotations.lock().expect("Lock");
    assert_eq!(layer.marker_count(), 0);
    assert_eq!(layer.circle_count(), 0);
}

#[test]
fn test_breitengrad_null_wird_gerendert() {
    // 0.0 ist geographisch gültig und darf nicht als "fehlend" gelten
    let body = r#"{"records":[{"fields":{"geo_point_2d":[0.0,4.35]}}]}"#;

    let annotations = shared_layer();
    let summary = ingest_response(body, &annotations).expect("gültige Antwort");

    assert_eq!(summary.rendered, 1);
    let layer = annotations.lock().expect("Lock");
    assert_eq!(layer.markers()[0].pos, LatLon::new(0.0, 4.35));
}

#[test]
fn test_fehlendes_nom_ergibt_standard_popup() {
    let body = r#"{"records":[{"fields":{"geo_point_2d":[1.0,2.0]}}]}"#;

    let annotations = shared_layer();
    ingest_response(body, &annotations).expect("gültige Antwort");

    let layer = annotations.lock().expect("Lock");
    assert_eq!(layer.markers()[0].popup_text, "Public Urinal");
}

#[test]
fn test_gemischte_datensaetze() {
    let body = r#"{"records":[
        {"fields":{"geo_point_2d":[50.85,4.35],"nom":"A"}},
        {"fields":{"nom":"kaputt"}},
        {"fields":{"geo_point_2d":[4.35]}},
        {"fields":{"geo_point_2d":[50.86,4.36]}}
    ]}"#;

    let annotations = shared_layer();
    let summary = ingest_response(body, &annotations).expect("gültige Antwort");

    assert_eq!(summary.rendered, 2);
    assert_eq!(summary.skipped, 2);

    let layer = annotations.lock().expect("Lock");
    assert_eq!(layer.marker_count(), 2);
    assert_eq!(layer.circle_count(), 2);
}

#[test]
fn test_kaputter_body_ist_parse_fehler() {
    let annotations = shared_layer();
    let result = ingest_response("das ist kein JSON", &annotations);

    assert!(matches!(result, Err(OverlayError::Parse(_))));

    // Kein Render-Seiteneffekt vor dem Fehler
    let layer = annotations.lock().expect("Lock");
    assert_eq!(layer.marker_count(), 0);
}

#[test]
fn test_request_fehler_traegt_statuscode() {
    let err = OverlayError::Request { status: 500 };
    let message = err.to_string();
    assert!(message.contains("500"), "Meldung war: {}", message);
}

#[test]
fn test_overlay_ergaenzt_statische_annotationen() {
    // Statische Marker zuerst (wie beim Anwendungsstart), dann Overlay
    let annotations = shared_layer();
    static_annotations::install(&annotations);
    ingest_response(SINGLE_RECORD, &annotations).expect("gültige Antwort");

    let layer = annotations.lock().expect("Lock");
    // 2 statische Marker + 1 Overlay-Marker
    assert_eq!(layer.marker_count(), 3);
    // 1 statischer Kreis + 1 Overlay-Kreis
    assert_eq!(layer.circle_count(), 2);
    assert_eq!(layer.rectangle_count(), 1);

    // Der Stil wurde erst durch den Overlay-Marker registriert
    assert!(layer.fading_style_installed());
    assert_eq!(layer.styles().len(), 1);
}
