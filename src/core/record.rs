//! Datenmodell der Open-Data-Records-API und Datensatz-Validierung.

use serde::Deserialize;

use crate::core::geo::LatLon;
use crate::shared::options::DEFAULT_OVERLAY_LABEL;

/// Antwort des `records/1.0/search`-Endpunkts.
#[derive(Debug, Default, Deserialize)]
pub struct DatasetResponse {
    /// Gefundene Datensätze (fehlt das Feld, gilt die Antwort als leer)
    #[serde(default)]
    pub records: Vec<DatasetRecord>,
}

/// Ein roher Datensatz der Antwort.
#[derive(Debug, Default, Deserialize)]
pub struct DatasetRecord {
    /// Nutzdaten-Felder des Datensatzes
    #[serde(default)]
    pub fields: RecordFields,
}

/// Nutzdaten-Felder eines Datensatzes.
///
/// Nur Anwesenheits-Prüfung, keine Schema-Validierung: unbekannte
/// Felder werden ignoriert, fehlende mit `None` belegt.
#[derive(Debug, Default, Deserialize)]
pub struct RecordFields {
    /// Koordinatenpaar `[Breite, Länge]`
    #[serde(default)]
    pub geo_point_2d: Option<Vec<f64>>,
    /// Anzeigename
    #[serde(default)]
    pub nom: Option<String>,
}

/// Validierter Punkt eines Datensatzes, bereit zum Rendern.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPoint {
    /// Koordinate
    pub pos: LatLon,
    /// Popup-Beschriftung
    pub label: String,
}

impl DatasetRecord {
    /// Extrahiert den validierten Punkt aus dem Datensatz.
    ///
    /// `None`, wenn das Koordinatenpaar fehlt, nicht genau zwei Elemente
    /// hat oder eine Komponente nicht endlich ist. Der Wert `0.0` ist ein
    /// gültiger Breiten- bzw. Längengrad.
    pub fn to_overlay_point(&self) -> Option<OverlayPoint> {
        let coords = self.fields.geo_point_2d.as_deref()?;
        let [lat, lon] = coords else {
            return None;
        };
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }

        let label = match self.fields.nom.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_OVERLAY_LABEL.to_string(),
        };

        Some(OverlayPoint {
            pos: LatLon::new(*lat, *lon),
            label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> DatasetRecord {
        serde_json::from_str(json).expect("Testdatensatz")
    }

    #[test]
    fn test_gueltiger_datensatz() {
        let r = record(r#"{"fields":{"geo_point_2d":[50.85,4.35],"nom":"A"}}"#);
        let point = r.to_overlay_point().expect("gültig");
        assert_eq!(point.pos, LatLon::new(50.85, 4.35));
        assert_eq!(point.label, "A");
    }

    #[test]
    fn test_fehlendes_nom_ergibt_standard_label() {
        let r = record(r#"{"fields":{"geo_point_2d":[1.0,2.0]}}"#);
        let point = r.to_overlay_point().expect("gültig");
        assert_eq!(point.label, "Public Urinal");
    }

    #[test]
    fn test_leeres_nom_ergibt_standard_label() {
        let r = record(r#"{"fields":{"geo_point_2d":[1.0,2.0],"nom":""}}"#);
        let point = r.to_overlay_point().expect("gültig");
        assert_eq!(point.label, "Public Urinal");
    }

    #[test]
    fn test_breitengrad_null_ist_gueltig() {
        // 0.0 ist eine legitime Koordinate und darf nicht verworfen werden
        let r = record(r#"{"fields":{"geo_point_2d":[0.0,4.35]}}"#);
        let point = r.to_overlay_point().expect("gültig");
        assert_eq!(point.pos, LatLon::new(0.0, 4.35));
    }

    #[test]
    fn test_fehlendes_koordinatenpaar_wird_verworfen() {
        let r = record(r#"{"fields":{"nom":"ohne Koordinaten"}}"#);
        assert!(r.to_overlay_point().is_none());
    }

    #[test]
    fn test_unvollstaendiges_koordinatenpaar_wird_verworfen() {
        let r = record(r#"{"fields":{"geo_point_2d":[4.35]}}"#);
        assert!(r.to_overlay_point().is_none());
    }

    #[test]
    fn test_fehlende_fields_werden_verworfen() {
        let r = record(r#"{}"#);
        assert!(r.to_overlay_point().is_none());
    }

    #[test]
    fn test_antwort_ohne_records_feld_ist_leer() {
        let response: DatasetResponse = serde_json::from_str(r#"{}"#).expect("Antwort");
        assert!(response.records.is_empty());
    }
}
