//! Textur-Verwaltung: lädt CPU-Bilder (Basiskarte, Icons) in egui-Texturen.

use std::collections::HashMap;

use egui::{ColorImage, TextureHandle, TextureOptions};
use image::RgbaImage;

/// Hält alle hochgeladenen Texturen des Viewers.
#[derive(Default)]
pub struct TextureStore {
    basemap: Option<TextureHandle>,
    icons: HashMap<String, TextureHandle>,
}

impl TextureStore {
    /// Erstellt einen leeren Textur-Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt das Basiskarten-Mosaik als Textur hoch.
    pub fn upload_basemap(&mut self, ctx: &egui::Context, image: &RgbaImage) {
        self.basemap = Some(ctx.load_texture("basemap", color_image(image), TextureOptions::LINEAR));
        log::info!(
            "Basiskarte als Textur hochgeladen ({}x{})",
            image.width(),
            image.height()
        );
    }

    /// Lädt ein Icon-Bild als Textur hoch (Schlüssel = Bild-URL).
    pub fn upload_icon(&mut self, ctx: &egui::Context, url: &str, image: &RgbaImage) {
        self.icons
            .insert(url.to_string(), ctx.load_texture(url, color_image(image), TextureOptions::LINEAR));
    }

    /// Textur des Basiskarten-Mosaiks, falls hochgeladen.
    pub fn basemap(&self) -> Option<&TextureHandle> {
        self.basemap.as_ref()
    }

    /// Textur eines Icons per Bild-URL, falls hochgeladen.
    pub fn icon(&self, url: &str) -> Option<&TextureHandle> {
        self.icons.get(url)
    }
}

/// Konvertiert ein RGBA-Bild in ein egui-`ColorImage`.
fn color_image(image: &RgbaImage) -> ColorImage {
    ColorImage::from_rgba_unmultiplied(
        [image.width() as usize, image.height() as usize],
        image.as_raw(),
    )
}
