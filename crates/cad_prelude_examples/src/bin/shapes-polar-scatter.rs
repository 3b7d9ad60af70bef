//! Scatter seeded polar arrays across a blue-noise layout, against a
//! logging stand-in for the host CAD kernel.
use std::f64::consts::PI;

use cad_prelude::prelude::*;
use cad_prelude_examples::init_tracing;
use mint::Vector2;
use tracing::info;

/// Stand-in kernel that describes shapes instead of building geometry.
struct LoggingKernel;

impl ShapeOps for LoggingKernel {
    type Shape = String;

    fn fuse(&mut self, a: String, b: String) -> Result<String> {
        Ok(format!("fuse({a}, {b})"))
    }

    fn rotated(&mut self, shape: &String, angle: f64) -> Result<String> {
        Ok(format!("rot({shape}, {:.0}deg)", angle.to_degrees()))
    }

    fn polygon(&mut self, points: &[Vector2<f64>]) -> Result<String> {
        Ok(format!("polygon[{} pts]", points.len()))
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut kernel = LoggingKernel;
    let mut rng = SeededRng::new(7);

    let anchors = rng.poisson_disc(60.0, 60.0, 12.0)?;
    info!("{} anchors placed", anchors.len());

    for anchor in &anchors {
        // Each anchor gets a small polygon, arrayed a seeded number of times.
        let sides = rng.uniform_int(3, 7);
        let ring: Vec<Vector2<f64>> = (0..sides)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / sides as f64;
                Vector2 {
                    x: anchor.x + 2.0 * angle.cos(),
                    y: anchor.y + 2.0 * angle.sin(),
                }
            })
            .collect();

        let face = polygon_through(&mut kernel, &ring)?;
        let copies = polar_array(&mut kernel, &face, rng.uniform_int(2, 6) as usize)?;
        let fused = fuse_all(&mut kernel, copies)?;
        info!("({:.1}, {:.1}): {fused}", anchor.x, anchor.y);
    }

    Ok(())
}
