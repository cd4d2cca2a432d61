//! Popup-Fenster offener Marker und Flächen.

use egui::{Align2, Area, Frame, Id};
use glam::Vec2;

use crate::app::{AppIntent, AppState, PopupTarget};
use crate::render::picking;

/// Zeichnet alle offenen Popups und gibt Schließen-Intents zurück.
///
/// Popup-Positionen folgen dem Popup-Anker des Icons (Marker) bzw. dem
/// Flächen-Mittelpunkt (Rechtecke).
pub fn render_popups(
    ctx: &egui::Context,
    map_rect: egui::Rect,
    state: &AppState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let viewport = Vec2::new(map_rect.width(), map_rect.height());

    // Offene Popups unter dem Lock einsammeln, danach ohne Lock zeichnen
    let mut open: Vec<(PopupTarget, egui::Pos2, String)> = Vec::new();
    {
        let Ok(layer) = state.annotations.lock() else {
            return events;
        };

        for marker in layer.markers().iter().filter(|m| m.popup_open) {
            let tip = state
                .view
                .camera
                .world_to_screen(state.view.map_view.world_of(marker.pos), viewport);
            let pos = egui::pos2(
                map_rect.min.x + tip.x + marker.icon.popup_anchor[0] as f32,
                map_rect.min.y + tip.y + marker.icon.popup_anchor[1] as f32,
            );
            open.push((
                PopupTarget::Marker(marker.id),
                pos,
                marker.popup_text.clone(),
            ));
        }

        for (index, area) in layer.rectangles().iter().enumerate() {
            if !area.popup_open {
                continue;
            }
            let Some(text) = &area.popup_text else {
                continue;
            };
            let local = picking::rectangle_screen_rect(
                area.min,
                area.max,
                &state.view.camera,
                &state.view.map_view,
                viewport,
            );
            let pos = egui::pos2(
                map_rect.min.x + local.center().x,
                map_rect.min.y + local.center().y,
            );
            open.push((PopupTarget::Rectangle(index), pos, text.clone()));
        }
    }

    for (target, pos, text) in open {
        Area::new(Id::new(("annotation_popup", target)))
            .pivot(Align2::CENTER_BOTTOM)
            .fixed_pos(pos)
            .show(ctx, |ui| {
                Frame::popup(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(&text);
                        if ui.small_button("✕").clicked() {
                            events.push(AppIntent::PopupCloseRequested { target });
                        }
                    });
                });
            });
    }

    events
}
