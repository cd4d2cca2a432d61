//! Viewport-Input-Handling: Maus-Events, Pan, Scroll-Zoom → AppIntent.

use glam::Vec2;

use crate::app::AppIntent;
use crate::core::Camera2D;
use crate::shared::ViewerOptions;

/// Verwaltet den Input-Zustand für den Karten-Viewport.
#[derive(Default)]
pub struct InputState;

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-,
    /// Scroll- und Drag-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        options: &ViewerOptions,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        self.handle_pointer_delta(ui, response, camera, &mut events);
        self.handle_scroll_zoom(ui, response, viewport_size, camera, options, &mut events);
        self.handle_click(response, &mut events);

        events
    }

    /// Kamera-Pan per Drag (jede Maustaste).
    fn handle_pointer_delta(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        camera: &Camera2D,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        let dragged = response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Middle)
            || response.dragged_by(egui::PointerButton::Secondary);
        if dragged {
            let wpp = camera.world_per_pixel();
            events.push(AppIntent::CameraPan {
                delta: Vec2::new(-pointer_delta.x * wpp, -pointer_delta.y * wpp),
            });
        }
    }

    /// Scroll-Zoom auf die aktuelle Mausposition.
    fn handle_scroll_zoom(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        options: &ViewerOptions,
        events: &mut Vec<AppIntent>,
    ) {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 || !response.hovered() {
            return;
        }

        let step = options.camera_scroll_zoom_step;
        let factor = if scroll > 0.0 { step } else { 1.0 / step };
        let focus_world = response
            .hover_pos()
            .map(|pos| screen_pos_to_world(pos, response, viewport_size, camera));
        events.push(AppIntent::CameraZoom {
            factor,
            focus_world,
        });
    }

    /// Klick (ohne Drag) → Popup-Toggle unter dem Mauszeiger.
    fn handle_click(&self, response: &egui::Response, events: &mut Vec<AppIntent>) {
        if !response.clicked() {
            return;
        }
        if let Some(pos) = response.interact_pointer_pos() {
            let local = pos - response.rect.min;
            events.push(AppIntent::MapClicked {
                screen_pos: Vec2::new(local.x, local.y),
            });
        }
    }
}

/// Konvertiert eine absolute egui-Position in Welt-Koordinaten.
fn screen_pos_to_world(
    pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> Vec2 {
    let local = pos - response.rect.min;
    camera.screen_to_world(
        Vec2::new(local.x, local.y),
        Vec2::new(viewport_size[0], viewport_size[1]),
    )
}
