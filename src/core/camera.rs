//! 2D-Kamera für Pan und Zoom über der Kartenansicht.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom.
///
/// Weltkoordinaten sind Karten-Pixel relativ zum Kartenzentrum
/// (siehe `MapView`); der Zoom-Faktor ist Bildschirm-Pixel pro
/// Welt-Pixel (1.0 = Basiszoom der Kartenansicht).
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Faktor (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Erstellt eine neue Kamera im Kartenzentrum
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Faktor mit Klemmung auf den erlaubten Bereich.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Konvertiert Welt-Koordinaten zu Bildschirm-Koordinaten
    /// (relativ zur linken oberen Viewport-Ecke).
    pub fn world_to_screen(&self, world: Vec2, viewport_size: Vec2) -> Vec2 {
        (world - self.position) * self.zoom + viewport_size * 0.5
    }

    /// Konvertiert Bildschirm-Koordinaten zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen: Vec2, viewport_size: Vec2) -> Vec2 {
        (screen - viewport_size * 0.5) / self.zoom + self.position
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self) -> f32 {
        1.0 / self.zoom
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_pan() {
        let mut camera = Camera2D::new();
        camera.pan(Vec2::new(10.0, 5.0));
        assert_relative_eq!(camera.position.x, 10.0);
        assert_relative_eq!(camera.position.y, 5.0);
    }

    #[test]
    fn test_camera_zoom_klemmung() {
        let mut camera = Camera2D::new();
        camera.zoom_by_clamped(2.0, 0.125, 8.0);
        assert_relative_eq!(camera.zoom, 2.0);

        camera.zoom_by_clamped(100.0, 0.125, 8.0);
        assert_relative_eq!(camera.zoom, 8.0);

        camera.zoom_by_clamped(0.0001, 0.125, 8.0);
        assert_relative_eq!(camera.zoom, 0.125);
    }

    #[test]
    fn test_world_to_screen_zentrum() {
        let camera = Camera2D::new(); // pos=0, zoom=1
        let viewport = Vec2::new(800.0, 600.0);
        // Welt-Ursprung → Viewport-Mitte
        let screen = camera.world_to_screen(Vec2::ZERO, viewport);
        assert_relative_eq!(screen.x, 400.0);
        assert_relative_eq!(screen.y, 300.0);
    }

    #[test]
    fn test_screen_to_world_roundtrip() {
        let mut camera = Camera2D::new();
        camera.position = Vec2::new(120.0, -40.0);
        camera.zoom = 2.5;
        let viewport = Vec2::new(800.0, 600.0);

        let world = Vec2::new(33.0, -77.0);
        let screen = camera.world_to_screen(world, viewport);
        let back = camera.screen_to_world(screen, viewport);
        assert_relative_eq!(back.x, world.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, world.y, epsilon = 1e-3);
    }

    #[test]
    fn test_world_per_pixel() {
        let mut camera = Camera2D::new();
        let wpp1 = camera.world_per_pixel();
        camera.zoom = 2.0;
        let wpp2 = camera.world_per_pixel();
        // Doppelter Zoom → halb so viele Welt-Einheiten pro Pixel
        assert_relative_eq!(wpp2, wpp1 / 2.0);
    }
}
