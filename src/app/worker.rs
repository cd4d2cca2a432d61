//! Hintergrund-Worker für alle Netzwerk-I/O.
//!
//! Ein Thread arbeitet die Jobs strikt sequenziell ab (Basiskarte →
//! Icons → Overlay-Daten) und meldet Ergebnisse als `AppIntent` über
//! einen mpsc-Kanal an den UI-Thread. Der Overlay-Ladevorgang läuft
//! genau einmal pro Anwendungsstart.

use std::sync::mpsc;
use std::thread;

use super::AppIntent;
use crate::core::basemap;
use crate::core::geo::MapView;
use crate::core::SharedAnnotations;
use crate::overlay;
use crate::shared::options::{ICON_SHADOW_URL, ICON_URL_DEFAULT, ICON_URL_RED, ICON_URL_VIOLET};

/// Bild-URLs aller verwendeten Marker-Icons.
const ICON_URLS: [&str; 4] = [
    ICON_URL_VIOLET,
    ICON_URL_RED,
    ICON_URL_DEFAULT,
    ICON_SHADOW_URL,
];

/// Startet den Netzwerk-Worker und gibt den Empfangskanal zurück.
///
/// `ctx` wird nach jedem gesendeten Ergebnis für ein Repaint geweckt.
pub fn spawn_network_worker(
    ctx: egui::Context,
    annotations: SharedAnnotations,
    view: MapView,
    viewport_px: [u32; 2],
    overlay_autoload: bool,
) -> mpsc::Receiver<AppIntent> {
    let (tx, rx) = mpsc::channel();

    let spawned = thread::Builder::new()
        .name("netzwerk-worker".into())
        .spawn(move || {
            let send = |intent: AppIntent| {
                if tx.send(intent).is_ok() {
                    ctx.request_repaint();
                }
            };

            // 1. Basiskarten-Mosaik
            match basemap::fetch_basemap(&view, viewport_px) {
                Ok(result) => send(AppIntent::BasemapLoaded { basemap: result }),
                Err(e) => send(AppIntent::BasemapLoadFailed {
                    reason: format!("{:#}", e),
                }),
            }

            // 2. Marker-Icons
            match reqwest::blocking::Client::builder()
                .user_agent(concat!("Brussels-OpenData-Map/", env!("CARGO_PKG_VERSION")))
                .build()
            {
                Ok(client) => {
                    for url in ICON_URLS {
                        match basemap::fetch_image(&client, url) {
                            Ok(image) => send(AppIntent::IconLoaded {
                                url: url.to_string(),
                                image,
                            }),
                            Err(e) => send(AppIntent::IconLoadFailed {
                                url: url.to_string(),
                                reason: format!("{:#}", e),
                            }),
                        }
                    }
                }
                Err(e) => log::error!("HTTP-Client für Icons nicht erstellbar: {}", e),
            }

            // 3. Overlay-Daten (genau einmal, kein Retry)
            if overlay_autoload {
                match overlay::load_overlay_data(&annotations) {
                    Ok(summary) => send(AppIntent::OverlayLoadCompleted { summary }),
                    Err(e) => send(AppIntent::OverlayLoadFailed {
                        message: e.to_string(),
                    }),
                }
            }
        });

    if let Err(e) = spawned {
        log::error!("Netzwerk-Worker konnte nicht gestartet werden: {}", e);
    }

    rx
}
