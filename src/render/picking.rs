//! Treffer-Tests für Klicks auf Annotationen (Viewport-Koordinaten).

use egui::{pos2, Rect};
use glam::Vec2;

use crate::core::annotations::{AnnotationLayer, Marker, MarkerId};
use crate::core::{Camera2D, MapView};

/// Bildschirm-Rechteck eines Marker-Icons (relativ zum Viewport).
///
/// Icons sind pixel-fest: ihre Größe skaliert nicht mit dem Zoom, nur
/// die verankerte Koordinate wird transformiert.
pub fn marker_screen_rect(
    marker: &Marker,
    camera: &Camera2D,
    view: &MapView,
    viewport: Vec2,
) -> Rect {
    let tip = camera.world_to_screen(view.world_of(marker.pos), viewport);
    let min = pos2(
        tip.x - marker.icon.anchor[0] as f32,
        tip.y - marker.icon.anchor[1] as f32,
    );
    Rect::from_min_size(
        min,
        egui::vec2(marker.icon.size[0] as f32, marker.icon.size[1] as f32),
    )
}

/// Bildschirm-Rechteck einer Rechteck-Fläche (relativ zum Viewport).
pub fn rectangle_screen_rect(
    min: crate::core::LatLon,
    max: crate::core::LatLon,
    camera: &Camera2D,
    view: &MapView,
    viewport: Vec2,
) -> Rect {
    let a = camera.world_to_screen(view.world_of(min), viewport);
    let b = camera.world_to_screen(view.world_of(max), viewport);
    Rect::from_two_pos(pos2(a.x, a.y), pos2(b.x, b.y))
}

/// Oberster Marker unter einer Viewport-Position.
pub fn pick_marker(
    layer: &AnnotationLayer,
    camera: &Camera2D,
    view: &MapView,
    viewport: Vec2,
    screen_pos: Vec2,
) -> Option<MarkerId> {
    let pos = pos2(screen_pos.x, screen_pos.y);
    layer
        .markers()
        .iter()
        .rev()
        .find(|marker| marker_screen_rect(marker, camera, view, viewport).contains(pos))
        .map(|marker| marker.id)
}

/// Oberste Rechteck-Fläche unter einer Viewport-Position.
pub fn pick_rectangle(
    layer: &AnnotationLayer,
    camera: &Camera2D,
    view: &MapView,
    viewport: Vec2,
    screen_pos: Vec2,
) -> Option<usize> {
    let pos = pos2(screen_pos.x, screen_pos.y);
    layer
        .rectangles()
        .iter()
        .enumerate()
        .rev()
        .find(|(_, rect)| {
            rectangle_screen_rect(rect.min, rect.max, camera, view, viewport).contains(pos)
        })
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::annotations::Icon;
    use crate::core::LatLon;
    use crate::shared::options::{MAP_CENTER, MAP_ZOOM};

    #[test]
    fn test_pick_marker_trifft_icon_rechteck() {
        let mut layer = AnnotationLayer::new();
        let id = layer.add_marker(MAP_CENTER, Icon::violet(), "Station");

        let camera = Camera2D::new();
        let view = MapView::new(MAP_CENTER, MAP_ZOOM);
        let viewport = Vec2::new(800.0, 600.0);

        // Icon-Spitze liegt in der Viewport-Mitte; ein Klick knapp über
        // der Spitze trifft das Icon, einer daneben nicht
        let hit = pick_marker(&layer, &camera, &view, viewport, Vec2::new(400.0, 280.0));
        assert_eq!(hit, Some(id));

        let miss = pick_marker(&layer, &camera, &view, viewport, Vec2::new(500.0, 280.0));
        assert_eq!(miss, None);
    }

    #[test]
    fn test_pick_marker_bevorzugt_oberen_marker() {
        let mut layer = AnnotationLayer::new();
        let _unten = layer.add_marker(MAP_CENTER, Icon::violet(), "A");
        let oben = layer.add_marker(MAP_CENTER, Icon::red(), "B");

        let camera = Camera2D::new();
        let view = MapView::new(MAP_CENTER, MAP_ZOOM);
        let viewport = Vec2::new(800.0, 600.0);

        let hit = pick_marker(&layer, &camera, &view, viewport, Vec2::new(400.0, 280.0));
        assert_eq!(hit, Some(oben));
    }

    #[test]
    fn test_pick_rectangle() {
        let mut layer = AnnotationLayer::new();
        layer.add_rectangle(crate::core::annotations::AreaRectangle {
            min: LatLon::new(MAP_CENTER.lat - 0.001, MAP_CENTER.lon - 0.001),
            max: LatLon::new(MAP_CENTER.lat + 0.001, MAP_CENTER.lon + 0.001),
            color: [1.0, 0.0, 0.0, 1.0],
            weight: 2.0,
            fill_color: [1.0, 0.0, 0.2, 0.3],
            popup_text: Some("Fläche".to_string()),
            popup_open: false,
        });

        let camera = Camera2D::new();
        let view = MapView::new(MAP_CENTER, MAP_ZOOM);
        let viewport = Vec2::new(800.0, 600.0);

        let hit = pick_rectangle(&layer, &camera, &view, viewport, Vec2::new(400.0, 300.0));
        assert_eq!(hit, Some(0));

        let miss = pick_rectangle(&layer, &camera, &view, viewport, Vec2::new(10.0, 10.0));
        assert_eq!(miss, None);
    }
}
