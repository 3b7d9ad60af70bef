//! Shared plumbing for the demo binaries: tracing setup and PNG rendering.
use std::path::Path;

use image::{Rgba, RgbaImage};
use mint::Vector2;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Rendering options for [`render_points_to_png`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Pixels per drawing unit.
    pub pixels_per_unit: f64,
    /// Dot radius in pixels.
    pub dot_radius: f64,
    /// Background color.
    pub background: Rgba<u8>,
    /// Dot color.
    pub dot: Rgba<u8>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pixels_per_unit: 4.0,
            dot_radius: 3.0,
            background: Rgba([24, 26, 33, 255]),
            dot: Rgba([235, 219, 178, 255]),
        }
    }
}

/// Raster a sample point set into a PNG file.
pub fn render_points_to_png(
    path: impl AsRef<Path>,
    extent: Vector2<f64>,
    points: &[Vector2<f64>],
    config: &RenderConfig,
) -> anyhow::Result<()> {
    let width = (extent.x * config.pixels_per_unit).ceil().max(1.0) as u32;
    let height = (extent.y * config.pixels_per_unit).ceil().max(1.0) as u32;

    let mut image = RgbaImage::from_pixel(width, height, config.background);

    for point in points {
        let cx = point.x * config.pixels_per_unit;
        let cy = point.y * config.pixels_per_unit;
        draw_dot(&mut image, cx, cy, config.dot_radius, config.dot);
    }

    image.save(path)?;
    Ok(())
}

fn draw_dot(image: &mut RgbaImage, cx: f64, cy: f64, radius: f64, color: Rgba<u8>) {
    let r = radius.max(1.0);
    let min_x = (cx - r).floor().max(0.0) as u32;
    let max_x = (((cx + r).ceil().max(0.0)) as u32).min(image.width().saturating_sub(1));
    let min_y = (cy - r).floor().max(0.0) as u32;
    let max_y = (((cy + r).ceil().max(0.0)) as u32).min(image.height().saturating_sub(1));

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = f64::from(x) + 0.5 - cx;
            let dy = f64::from(y) + 0.5 - cy;
            if dx * dx + dy * dy <= r * r {
                image.put_pixel(x, y, color);
            }
        }
    }
}
