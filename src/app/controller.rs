//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI- und Worker-Events auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent→Command-Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        for command in map_intent_to_commands(intent) {
            self.handle_command(state, command)?;
        }
        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Anwendung ===
            AppCommand::Exit => state.should_exit = true,

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),

            // === Basiskarte ===
            AppCommand::SetBasemap { basemap } => handlers::view::set_basemap(state, basemap),
            AppCommand::ReportBasemapFailure { reason } => {
                handlers::view::report_basemap_failure(&reason)
            }
            AppCommand::ToggleBasemap => handlers::view::toggle_basemap(state),
            AppCommand::ToggleAnimation => handlers::view::toggle_animation(state),

            // === Icons ===
            AppCommand::StoreIconImage { url, image } => {
                handlers::overlay::store_icon_image(state, url, image)
            }
            AppCommand::ReportIconFailure { url, reason } => {
                handlers::overlay::report_icon_failure(&url, &reason)
            }

            // === Overlay ===
            AppCommand::ApplyOverlaySummary { summary } => {
                handlers::overlay::apply_overlay_summary(state, summary)
            }
            AppCommand::ApplyOverlayFailure { message } => {
                handlers::overlay::apply_overlay_failure(state, message)
            }

            // === Popups ===
            AppCommand::TogglePopupAt { screen_pos } => {
                handlers::overlay::toggle_popup_at(state, screen_pos)
            }
            AppCommand::ClosePopup { target } => handlers::overlay::close_popup(state, target),
        }

        Ok(())
    }
}

/// Bildet einen Intent auf seine Commands ab.
///
/// Die Abbildung ist zustandsfrei; Intents und Commands trennen
/// Eingabe-Quellen (UI, Worker) von Mutationslogik.
fn map_intent_to_commands(intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::Exit],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::MapClicked { screen_pos } => vec![AppCommand::TogglePopupAt { screen_pos }],
        AppIntent::PopupCloseRequested { target } => vec![AppCommand::ClosePopup { target }],
        AppIntent::BasemapVisibilityToggled => vec![AppCommand::ToggleBasemap],
        AppIntent::AnimationToggled => vec![AppCommand::ToggleAnimation],
        AppIntent::BasemapLoaded { basemap } => vec![AppCommand::SetBasemap { basemap }],
        AppIntent::BasemapLoadFailed { reason } => {
            vec![AppCommand::ReportBasemapFailure { reason }]
        }
        AppIntent::IconLoaded { url, image } => vec![AppCommand::StoreIconImage { url, image }],
        AppIntent::IconLoadFailed { url, reason } => {
            vec![AppCommand::ReportIconFailure { url, reason }]
        }
        AppIntent::OverlayLoadCompleted { summary } => {
            vec![AppCommand::ApplyOverlaySummary { summary }]
        }
        AppIntent::OverlayLoadFailed { message } => {
            vec![AppCommand::ApplyOverlayFailure { message }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::OverlayStatus;
    use crate::overlay::OverlaySummary;
    use crate::shared::ViewerOptions;

    #[test]
    fn test_overlay_fehler_setzt_status() {
        let mut controller = AppController::new();
        let mut state = AppState::new(ViewerOptions::default());

        controller
            .handle_intent(
                &mut state,
                AppIntent::OverlayLoadFailed {
                    message: "API-Anfrage fehlgeschlagen mit Status 500".to_string(),
                },
            )
            .expect("Intent");

        match &state.overlay {
            OverlayStatus::Failed(message) => assert!(message.contains("500")),
            other => panic!("unerwarteter Status: {:?}", other),
        }
    }

    #[test]
    fn test_overlay_erfolg_setzt_zusammenfassung() {
        let mut controller = AppController::new();
        let mut state = AppState::new(ViewerOptions::default());

        let summary = OverlaySummary {
            rendered: 20,
            skipped: 0,
        };
        controller
            .handle_intent(&mut state, AppIntent::OverlayLoadCompleted { summary })
            .expect("Intent");

        assert_eq!(state.overlay, OverlayStatus::Loaded(summary));
    }

    #[test]
    fn test_exit_intent() {
        let mut controller = AppController::new();
        let mut state = AppState::new(ViewerOptions::default());
        controller
            .handle_intent(&mut state, AppIntent::ExitRequested)
            .expect("Intent");
        assert!(state.should_exit);
    }
}
