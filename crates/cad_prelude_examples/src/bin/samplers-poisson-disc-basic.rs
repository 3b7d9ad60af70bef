//! Render a blue-noise point set to PNG.
use cad_prelude::prelude::*;
use cad_prelude_examples::{init_tracing, render_points_to_png, RenderConfig};
use mint::Vector2;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let extent = Vector2 { x: 200.0, y: 120.0 };
    let mut rng = SeededRng::new(42);
    let points = PoissonDiscSampling::new(6.0).generate(extent, &mut rng)?;
    info!(
        "placed {} blue-noise points over {} x {}",
        points.len(),
        extent.x,
        extent.y
    );

    let out = "samplers-poisson-disc-basic.png";
    render_points_to_png(out, extent, &points, &RenderConfig::default())?;
    info!("wrote {out}");

    Ok(())
}
