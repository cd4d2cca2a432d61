//! Basiskarten-Loader: holt ein Kachel-Mosaik des Tile-Layers und setzt
//! es zu einem einzelnen Hintergrundbild zusammen.
//!
//! Es gibt genau einen Abruf beim Start; beim Verschieben über den
//! Mosaik-Rand hinaus bleibt der Hintergrund leer.

use anyhow::{Context, Result};
use glam::{DVec2, Vec2};
use image::RgbaImage;

use crate::core::geo::{self, MapView, TILE_SIZE};
use crate::shared::options::TILE_URL_TEMPLATE;

/// Platzhalter-Grau für nicht geladene Kachelflächen.
const PLACEHOLDER_GRAY: image::Rgba<u8> = image::Rgba([221, 221, 221, 255]);

/// Zusammengesetztes Kachel-Mosaik als Hintergrundbild.
#[derive(Debug, Clone)]
pub struct BasemapImage {
    /// Bilddaten (1 Bild-Pixel = 1 Welt-Pixel auf dem Basiszoom)
    pub image: RgbaImage,
    /// Welt-Position der linken oberen Bildecke
    pub world_min: Vec2,
}

impl BasemapImage {
    /// Welt-Ausdehnung des Bildes.
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.image.width() as f32, self.image.height() as f32)
    }
}

/// Holt das Kachel-Mosaik rund um das Kartenzentrum.
///
/// Das Mosaik überdeckt den Viewport plus einen Kachel-Ring. Einzelne
/// fehlgeschlagene Kacheln bleiben als Platzhalter-Grau stehen; nur ein
/// kompletter Client-Fehler schlägt den gesamten Abruf fehl.
pub fn fetch_basemap(view: &MapView, viewport_px: [u32; 2]) -> Result<BasemapImage> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("Brussels-OpenData-Map/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("HTTP-Client konnte nicht erstellt werden")?;

    let center = geo::project(view.center, view.zoom);
    let half = DVec2::new(
        viewport_px[0] as f64 / 2.0 + TILE_SIZE as f64,
        viewport_px[1] as f64 / 2.0 + TILE_SIZE as f64,
    );

    let tile = TILE_SIZE as f64;
    let x0 = ((center.x - half.x) / tile).floor() as i64;
    let x1 = ((center.x + half.x) / tile).floor() as i64;
    let y0 = ((center.y - half.y) / tile).floor() as i64;
    let y1 = ((center.y + half.y) / tile).floor() as i64;

    let width = ((x1 - x0 + 1) as u32) * TILE_SIZE;
    let height = ((y1 - y0 + 1) as u32) * TILE_SIZE;
    let mut canvas = RgbaImage::from_pixel(width, height, PLACEHOLDER_GRAY);

    let mut fetched = 0_usize;
    let mut failed = 0_usize;
    for ty in y0..=y1 {
        for tx in x0..=x1 {
            let url = geo::tile_url(TILE_URL_TEMPLATE, view.zoom, tx, ty);
            match fetch_image(&client, &url) {
                Ok(tile_img) => {
                    let px = (tx - x0) * TILE_SIZE as i64;
                    let py = (ty - y0) * TILE_SIZE as i64;
                    image::imageops::replace(&mut canvas, &tile_img, px, py);
                    fetched += 1;
                }
                Err(e) => {
                    log::warn!("Kachel {} nicht ladbar: {:#}", url, e);
                    failed += 1;
                }
            }
        }
    }

    log::info!(
        "Basiskarten-Mosaik: {} Kacheln geladen, {} fehlgeschlagen ({}x{} px)",
        fetched,
        failed,
        width,
        height
    );

    let world_min = DVec2::new(x0 as f64 * tile, y0 as f64 * tile) - center;
    Ok(BasemapImage {
        image: canvas,
        world_min: Vec2::new(world_min.x as f32, world_min.y as f32),
    })
}

/// Holt ein einzelnes Bild per HTTP und dekodiert es als RGBA.
pub fn fetch_image(client: &reqwest::blocking::Client, url: &str) -> Result<RgbaImage> {
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Abruf von {}", url))?;
    if !response.status().is_success() {
        anyhow::bail!("Server antwortete mit Status {}", response.status());
    }
    let bytes = response
        .bytes()
        .with_context(|| format!("Lesen der Antwort von {}", url))?;
    let decoded = image::load_from_memory(&bytes)
        .with_context(|| format!("Dekodieren des Bildes von {}", url))?;
    Ok(decoded.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLon;

    #[test]
    fn test_world_size_entspricht_bilddimensionen() {
        let basemap = BasemapImage {
            image: RgbaImage::new(512, 256),
            world_min: Vec2::new(-256.0, -128.0),
        };
        assert_eq!(basemap.world_size(), Vec2::new(512.0, 256.0));
    }

    #[test]
    fn test_mosaik_ueberdeckt_viewport() {
        // Reine Bereichs-Arithmetik, kein Netzwerkzugriff:
        // Viewport 1280x720 plus ein Kachel-Ring → mindestens 7x5 Kacheln
        let view = MapView::new(LatLon::new(50.845748, 4.356524), 14);
        let center = geo::project(view.center, view.zoom);
        let half_x = 1280.0 / 2.0 + 256.0;
        let x0 = ((center.x - half_x) / 256.0).floor() as i64;
        let x1 = ((center.x + half_x) / 256.0).floor() as i64;
        assert!(x1 - x0 + 1 >= 7);
    }
}
