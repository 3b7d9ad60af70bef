//! Text histograms of the Gaussian and Poisson draws from one seeded generator.
use cad_prelude::prelude::*;
use cad_prelude_examples::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut rng = SeededRng::new(2024);

    let gaussian: Vec<f64> = (0..20_000).map(|_| rng.gaussian(0.0, 1.0)).collect();
    info!("gaussian(0, 1), {} samples", gaussian.len());
    print_histogram(&gaussian, -4.0, 4.0, 16);

    let poisson: Vec<f64> = (0..20_000).map(|_| rng.poisson(4.0) as f64).collect();
    info!("poisson(4), {} samples", poisson.len());
    print_histogram(&poisson, 0.0, 16.0, 16);

    Ok(())
}

fn print_histogram(samples: &[f64], min: f64, max: f64, bins: usize) {
    let mut counts = vec![0usize; bins];
    let span = max - min;
    for &sample in samples {
        if sample < min || sample >= max {
            continue;
        }
        let bin = ((sample - min) / span * bins as f64) as usize;
        counts[bin.min(bins - 1)] += 1;
    }

    let peak = counts.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in counts.iter().enumerate() {
        let lo = min + span * i as f64 / bins as f64;
        let bar = "#".repeat(count * 60 / peak);
        println!("{lo:>7.2} | {bar}");
    }
}
