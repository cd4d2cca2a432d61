//! Render-Layer: Painter, Treffer-Tests und Textur-Verwaltung.

pub mod painter;
pub mod picking;
pub mod textures;

pub use painter::{paint_map, pulse_opacity, PaintContext};
pub use textures::TextureStore;
