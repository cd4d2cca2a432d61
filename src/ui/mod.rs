//! UI-Layer: Menü, Status-Bar, Popups und Viewport-Input.

pub mod input;
pub mod menu;
pub mod popup;
pub mod status;

pub use input::InputState;
pub use menu::render_menu;
pub use popup::render_popups;
pub use status::render_status_bar;
