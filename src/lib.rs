//! Brussels OpenData Map.
//!
//! Interaktiver Stadtplan von Brüssel: statische Marker für
//! Zentralstation und Erasmus-Campus plus ein Marker-Overlay aus dem
//! Open-Data-Portal der Stadt (öffentliche Urinale).

pub mod app;
pub mod core;
pub mod overlay;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppController, AppIntent, AppState, OverlayStatus, PopupTarget, ViewState,
};
pub use core::{
    AnnotationLayer, Camera2D, LatLon, MapView, Marker, MarkerId, SharedAnnotations,
};
pub use overlay::{
    ensure_fading_style_injected, ingest_response, load_overlay_data, render_overlay_marker,
    OverlayError, OverlaySummary,
};
pub use shared::ViewerOptions;
