//! WGS84-Koordinaten und Web-Mercator-Projektion (Slippy-Map-Konvention).

use glam::{DVec2, Vec2};
use std::f64::consts::PI;

/// Kachelgröße in Pixeln (Slippy-Map-Standard).
pub const TILE_SIZE: u32 = 256;

/// Erdumfang am Äquator in Metern (WGS84).
pub const EARTH_CIRCUMFERENCE_M: f64 = 40_075_016.686;

/// Geographische Koordinate in WGS84-Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    /// Breitengrad in Grad (positiv = Nord)
    pub lat: f64,
    /// Längengrad in Grad (positiv = Ost)
    pub lon: f64,
}

impl LatLon {
    /// Erstellt eine neue Koordinate.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Feste Kartenansicht: Zentrum plus Basis-Zoomlevel.
///
/// Weltkoordinaten des Viewers sind Pixel-Offsets relativ zum Zentrum
/// auf diesem Zoomlevel (X nach Ost, Y nach Süd, wie Bildschirm-Y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    /// Kartenzentrum
    pub center: LatLon,
    /// Basis-Zoomlevel (Slippy-Map)
    pub zoom: u8,
}

impl MapView {
    /// Erstellt eine neue Kartenansicht.
    pub const fn new(center: LatLon, zoom: u8) -> Self {
        Self { center, zoom }
    }

    /// Projiziert eine Koordinate in Viewer-Weltkoordinaten
    /// (Pixel relativ zum Kartenzentrum).
    pub fn world_of(&self, pos: LatLon) -> Vec2 {
        let p = project(pos, self.zoom) - project(self.center, self.zoom);
        Vec2::new(p.x as f32, p.y as f32)
    }

    /// Rückprojektion von Viewer-Weltkoordinaten nach WGS84.
    pub fn latlon_of(&self, world: Vec2) -> LatLon {
        let global = project(self.center, self.zoom) + DVec2::new(world.x as f64, world.y as f64);
        unproject(global, self.zoom)
    }

    /// Meter pro Welt-Pixel am gegebenen Breitengrad.
    pub fn meters_per_pixel(&self, lat: f64) -> f64 {
        meters_per_pixel(lat, self.zoom)
    }
}

/// Projiziert WGS84 → globale Pixelkoordinaten auf einem Zoomlevel.
///
/// X wächst nach Ost, Y nach Süd; der Wertebereich ist
/// `0..2^zoom * TILE_SIZE` in beiden Achsen.
pub fn project(pos: LatLon, zoom: u8) -> DVec2 {
    let n = map_size_px(zoom);
    let x = (pos.lon + 180.0) / 360.0 * n;
    let lat_rad = pos.lat.to_radians();
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n;
    DVec2::new(x, y)
}

/// Rückprojektion globaler Pixelkoordinaten → WGS84.
pub fn unproject(px: DVec2, zoom: u8) -> LatLon {
    let n = map_size_px(zoom);
    let lon = px.x / n * 360.0 - 180.0;
    let y = 0.5 - px.y / n;
    let lat = (PI * 2.0 * y).sinh().atan().to_degrees();
    LatLon::new(lat, lon)
}

/// Meter pro Pixel am gegebenen Breitengrad (Web-Mercator-Bodenauflösung).
pub fn meters_per_pixel(lat: f64, zoom: u8) -> f64 {
    EARTH_CIRCUMFERENCE_M * lat.to_radians().cos() / map_size_px(zoom)
}

/// Kachel-Index, der eine Koordinate auf einem Zoomlevel enthält.
pub fn tile_at(pos: LatLon, zoom: u8) -> (i64, i64) {
    let px = project(pos, zoom);
    (
        (px.x / TILE_SIZE as f64).floor() as i64,
        (px.y / TILE_SIZE as f64).floor() as i64,
    )
}

/// Interpoliert ein Kachel-URL-Template mit `{z}`, `{x}`, `{y}`.
///
/// X wird über den Antimeridian gewrappt, Y auf den gültigen Bereich
/// geklemmt. Ein `{s}`-Platzhalter (Subdomain) wird mit `a` belegt.
pub fn tile_url(template: &str, zoom: u8, x: i64, y: i64) -> String {
    let n = 1_i64 << zoom;
    let x_tile = ((x % n) + n) % n;
    let y_tile = y.clamp(0, n - 1);

    let mut url = template.to_string();
    url = url.replace("{z}", &zoom.to_string());
    url = url.replace("{x}", &x_tile.to_string());
    url = url.replace("{y}", &y_tile.to_string());
    if url.contains("{s}") {
        url = url.replace("{s}", "a");
    }
    url
}

/// Kartenbreite in Pixeln auf einem Zoomlevel.
fn map_size_px(zoom: u8) -> f64 {
    (1_u32 << zoom.min(22)) as f64 * TILE_SIZE as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const BRUSSELS: LatLon = LatLon::new(50.845748, 4.356524);

    #[test]
    fn test_project_unproject_roundtrip() {
        let px = project(BRUSSELS, 14);
        let back = unproject(px, 14);
        assert_relative_eq!(back.lat, BRUSSELS.lat, epsilon = 1e-9);
        assert_relative_eq!(back.lon, BRUSSELS.lon, epsilon = 1e-9);
    }

    #[test]
    fn test_project_aequator_nullmeridian_liegt_in_kartenmitte() {
        let px = project(LatLon::new(0.0, 0.0), 1);
        // Zoom 1: Kartenbreite 512 px, Mitte bei (256, 256)
        assert_relative_eq!(px.x, 256.0, epsilon = 1e-9);
        assert_relative_eq!(px.y, 256.0, epsilon = 1e-9);
    }

    #[test]
    fn test_tile_at_bruessel_zoom_14() {
        // Referenzwerte der Slippy-Map-Formel für Brüssel-Zentralstation
        let (x, y) = tile_at(BRUSSELS, 14);
        assert_eq!(x, 8390);
        assert_eq!(y, 5496);
    }

    #[test]
    fn test_meters_per_pixel_sinkt_mit_zoom() {
        let coarse = meters_per_pixel(50.0, 10);
        let fine = meters_per_pixel(50.0, 14);
        assert!(coarse > fine);
        // Pro Zoomlevel halbiert sich die Bodenauflösung
        assert_relative_eq!(coarse / fine, 16.0, epsilon = 1e-9);
    }

    #[test]
    fn test_tile_url_interpolation() {
        let url = tile_url("https://tile.openstreetmap.org/{z}/{x}/{y}.png", 14, 8390, 5496);
        assert_eq!(url, "https://tile.openstreetmap.org/14/8390/5496.png");
    }

    #[test]
    fn test_tile_url_wrappt_x_und_klemmt_y() {
        let url = tile_url("{z}/{x}/{y}", 2, -1, 7);
        assert_eq!(url, "2/3/3");
    }

    #[test]
    fn test_world_of_zentrum_ist_ursprung() {
        let view = MapView::new(BRUSSELS, 14);
        let world = view.world_of(BRUSSELS);
        assert_relative_eq!(world.x, 0.0);
        assert_relative_eq!(world.y, 0.0);
    }

    #[test]
    fn test_world_of_norden_ist_negativ_y() {
        let view = MapView::new(BRUSSELS, 14);
        let north = view.world_of(LatLon::new(BRUSSELS.lat + 0.01, BRUSSELS.lon));
        assert!(north.y < 0.0);
        assert_relative_eq!(north.x, 0.0, epsilon = 1e-3);
    }
}
