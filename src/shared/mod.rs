//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konstanten und Optionen, die zwischen `app`, `render` und
//! `overlay` geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;

pub use options::ViewerOptions;
pub use options::{DEFAULT_OVERLAY_LABEL, FADING_STYLE_ID, HIGHLIGHT_RADIUS_M};
