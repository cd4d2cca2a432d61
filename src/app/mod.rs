//! Application-Layer: Controller, State, Events und Worker.

pub mod controller;
pub mod events;
pub mod handlers;
pub mod state;
pub mod static_annotations;
pub mod worker;

pub use crate::core::Camera2D;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PopupTarget};
pub use state::{AppState, OverlayStatus, ViewState, DEFAULT_VIEWPORT};
pub use worker::spawn_network_worker;
