//! Viewport-Painter: zeichnet Basiskarte, Flächen, Highlight-Kreise
//! und Marker über den egui-Painter.

use egui::{pos2, Color32, Rect, Stroke, StrokeKind};
use glam::Vec2;

use super::picking::{marker_screen_rect, rectangle_screen_rect};
use super::textures::TextureStore;
use crate::core::annotations::{AnnotationLayer, Marker};
use crate::core::basemap::BasemapImage;
use crate::core::{AnimationStyle, Camera2D, MapView};
use crate::shared::options::HIGHLIGHT_STROKE_WEIGHT;

/// UV-Rechteck für vollflächige Textur-Zeichnung.
fn full_uv() -> Rect {
    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0))
}

/// Bündelt die Zeichen-Parameter eines Frames.
pub struct PaintContext<'a> {
    /// Kamera über der Kartenansicht
    pub camera: &'a Camera2D,
    /// Feste Kartenansicht
    pub view: &'a MapView,
    /// Zu zeichnende Annotations-Ebene
    pub layer: &'a AnnotationLayer,
    /// Hochgeladene Texturen
    pub textures: &'a TextureStore,
    /// Basiskarten-Mosaik (CPU-Seite, für Welt-Geometrie)
    pub basemap: Option<&'a BasemapImage>,
    /// Basiskarte zeichnen
    pub basemap_visible: bool,
    /// Deckung der Basiskarte
    pub basemap_opacity: f32,
    /// egui-Zeit in Sekunden (für Animationen)
    pub time: f64,
    /// Pulsier-Animation abspielen
    pub animation_enabled: bool,
}

/// Zeichnet einen kompletten Karten-Frame in den Viewport `rect`.
///
/// Reihenfolge: Basiskarte, Flächen, Highlight-Kreise, Marker.
pub fn paint_map(painter: &egui::Painter, rect: Rect, ctx: &PaintContext<'_>) {
    let viewport = Vec2::new(rect.width(), rect.height());

    paint_basemap(painter, rect, ctx, viewport);
    paint_rectangles(painter, rect, ctx, viewport);
    paint_circles(painter, rect, ctx, viewport);
    paint_markers(painter, rect, ctx, viewport);
}

/// Deckungs-Verlauf der Pulsier-Animation zu einem Zeitpunkt.
///
/// Kosinus-Verlauf: Start bei `min_opacity`, Maximum nach einer halben
/// Periode, danach endlos weiter.
pub fn pulse_opacity(style: &AnimationStyle, time: f64) -> f32 {
    let phase = (time / style.period_secs as f64) * std::f64::consts::TAU;
    let wave = 0.5 - 0.5 * phase.cos();
    style.min_opacity + (style.max_opacity - style.min_opacity) * wave as f32
}

fn paint_basemap(painter: &egui::Painter, rect: Rect, ctx: &PaintContext<'_>, viewport: Vec2) {
    if !ctx.basemap_visible {
        return;
    }
    let (Some(basemap), Some(texture)) = (ctx.basemap, ctx.textures.basemap()) else {
        return;
    };

    let min = ctx.camera.world_to_screen(basemap.world_min, viewport);
    let max = ctx
        .camera
        .world_to_screen(basemap.world_min + basemap.world_size(), viewport);
    let screen = Rect::from_min_max(
        rect.min + egui::vec2(min.x, min.y),
        rect.min + egui::vec2(max.x, max.y),
    );

    let tint = Color32::WHITE.gamma_multiply(ctx.basemap_opacity.clamp(0.0, 1.0));
    painter.image(texture.id(), screen, full_uv(), tint);
}

fn paint_rectangles(painter: &egui::Painter, rect: Rect, ctx: &PaintContext<'_>, viewport: Vec2) {
    for area in ctx.layer.rectangles() {
        let local = rectangle_screen_rect(area.min, area.max, ctx.camera, ctx.view, viewport);
        let screen = local.translate(rect.min.to_vec2());
        painter.rect_filled(screen, 0.0, color32(area.fill_color, 1.0));
        painter.rect_stroke(
            screen,
            0.0,
            Stroke::new(area.weight, color32(area.color, 1.0)),
            StrokeKind::Inside,
        );
    }
}

fn paint_circles(painter: &egui::Painter, rect: Rect, ctx: &PaintContext<'_>, viewport: Vec2) {
    for circle in ctx.layer.circles() {
        let center = ctx
            .camera
            .world_to_screen(ctx.view.world_of(circle.pos), viewport);
        let center = rect.min + egui::vec2(center.x, center.y);

        // Meter-Radius in Bildschirm-Pixel am Breitengrad des Mittelpunkts
        let radius_px = (circle.radius_m / ctx.view.meters_per_pixel(circle.pos.lat)) as f32
            * ctx.camera.zoom;

        // Pulsieren nur, wenn der referenzierte Stil registriert wurde
        let alpha = circle
            .style_class
            .as_deref()
            .filter(|_| ctx.animation_enabled)
            .and_then(|class| ctx.layer.style(class))
            .map(|style| pulse_opacity(style, ctx.time))
            .unwrap_or(1.0);

        painter.circle_filled(center, radius_px, color32(circle.fill_color, alpha));
        painter.circle_stroke(
            center,
            radius_px,
            Stroke::new(HIGHLIGHT_STROKE_WEIGHT, color32(circle.color, alpha)),
        );
    }
}

fn paint_markers(painter: &egui::Painter, rect: Rect, ctx: &PaintContext<'_>, viewport: Vec2) {
    for marker in ctx.layer.markers() {
        paint_marker_shadow(painter, rect, ctx, viewport, marker);

        let local = marker_screen_rect(marker, ctx.camera, ctx.view, viewport);
        let screen = local.translate(rect.min.to_vec2());

        match ctx.textures.icon(&marker.icon.url) {
            Some(texture) => {
                painter.image(texture.id(), screen, full_uv(), Color32::WHITE);
            }
            None => paint_fallback_pin(painter, screen, marker),
        }
    }
}

/// Zeichnet den Marker-Schatten, falls dessen Textur geladen ist.
fn paint_marker_shadow(
    painter: &egui::Painter,
    rect: Rect,
    ctx: &PaintContext<'_>,
    viewport: Vec2,
    marker: &Marker,
) {
    let (Some(url), Some(size)) = (&marker.icon.shadow_url, marker.icon.shadow_size) else {
        return;
    };
    let Some(texture) = ctx.textures.icon(url) else {
        return;
    };

    // Schatten-Anker entspricht dem Icon-Anker
    let tip = ctx
        .camera
        .world_to_screen(ctx.view.world_of(marker.pos), viewport);
    let min = rect.min
        + egui::vec2(
            tip.x - marker.icon.anchor[0] as f32,
            tip.y - marker.icon.anchor[1] as f32,
        );
    let screen = Rect::from_min_size(min, egui::vec2(size[0] as f32, size[1] as f32));
    painter.image(texture.id(), screen, full_uv(), Color32::WHITE);
}

/// Vektor-Ersatz-Pin für Marker ohne geladene Icon-Textur.
fn paint_fallback_pin(painter: &egui::Painter, icon_rect: Rect, marker: &Marker) {
    let color = color32(marker.icon.fallback_color, 1.0);
    let tip = pos2(
        icon_rect.min.x + marker.icon.anchor[0] as f32,
        icon_rect.min.y + marker.icon.anchor[1] as f32,
    );
    let head = pos2(tip.x, tip.y - 16.0);

    painter.line_segment([tip, head], Stroke::new(3.0, color));
    painter.circle_filled(head, 7.5, color);
    painter.circle_filled(head, 3.0, Color32::WHITE);
}

/// Konvertiert eine RGBA-Float-Farbe in `Color32` mit Deckungs-Faktor.
fn color32(color: [f32; 4], alpha_mult: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (color[0] * 255.0).round() as u8,
        (color[1] * 255.0).round() as u8,
        (color[2] * 255.0).round() as u8,
        (color[3] * alpha_mult * 255.0).round() as u8,
    )
}
