//! Poisson disc (Bridson) blue-noise point sampling.
use std::f64::consts::{PI, SQRT_2};

use glam::DVec2;
use mint::Vector2;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::sampling::{rand01, rand_index, PointSampling};

/// Default number of candidate children attempted per active point.
pub const DEFAULT_ATTEMPTS: usize = 30;

/// Blue-noise sampling with a guaranteed minimum pairwise distance.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoissonDiscSampling {
    /// Minimum distance between samples in drawing units.
    pub radius: f64,
    /// Candidate children attempted per active point before it is retired.
    pub k: usize,
}

impl PoissonDiscSampling {
    /// Sampler with the given radius and the default attempt count.
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            k: DEFAULT_ATTEMPTS,
        }
    }

    /// Set the candidate attempt count (builder-style).
    pub fn with_attempts(mut self, k: usize) -> Self {
        self.k = k;
        self
    }
}

impl PointSampling for PoissonDiscSampling {
    fn generate(
        &self,
        domain_extent: Vector2<f64>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Vector2<f64>>> {
        let mut sampler = PoissonDiscSampler::new(self.radius, self.k, DVec2::from(domain_extent))?;
        Ok(sampler.generate(rng).into_iter().map(Into::into).collect())
    }
}

struct PoissonDiscSampler {
    radius: f64,
    radius_squared: f64,
    cell_size: f64,
    grid_width: usize,
    grid_height: usize,
    grid: Vec<Option<usize>>,
    active: Vec<usize>,
    points: Vec<DVec2>,
    attempts: usize,
    bounds: DVec2,
}

impl PoissonDiscSampler {
    fn new(radius: f64, attempts: usize, bounds: DVec2) -> Result<Self> {
        if !bounds.x.is_finite() || !bounds.y.is_finite() || bounds.x <= 0.0 || bounds.y <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "poisson disc extent must be positive, got {} x {}",
                bounds.x, bounds.y
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "poisson disc radius must be positive, got {radius}"
            )));
        }
        if attempts == 0 {
            return Err(Error::InvalidArgument(
                "poisson disc attempts must be > 0".into(),
            ));
        }

        // Cell diagonal equals the radius, so a cell holds at most one point.
        let cell_size = radius / SQRT_2;
        let grid_width = (bounds.x / cell_size).ceil() as usize;
        let grid_height = (bounds.y / cell_size).ceil() as usize;

        Ok(Self {
            radius,
            radius_squared: radius * radius,
            cell_size,
            grid_width,
            grid_height,
            grid: vec![None; grid_width * grid_height],
            active: Vec::new(),
            points: Vec::new(),
            attempts,
            bounds,
        })
    }

    #[inline]
    fn grid_index(&self, x: usize, y: usize) -> usize {
        y * self.grid_width + x
    }

    #[inline]
    fn point_to_grid(&self, point: DVec2) -> (usize, usize) {
        let x = ((point.x / self.cell_size) as usize).min(self.grid_width - 1);
        let y = ((point.y / self.cell_size) as usize).min(self.grid_height - 1);
        (x, y)
    }

    fn is_valid_point(&self, point: DVec2) -> bool {
        if point.x < 0.0 || point.x >= self.bounds.x || point.y < 0.0 || point.y >= self.bounds.y {
            return false;
        }

        let (gx, gy) = self.point_to_grid(point);
        let start_x = gx.saturating_sub(2);
        let end_x = (gx + 3).min(self.grid_width);
        let start_y = gy.saturating_sub(2);
        let end_y = (gy + 3).min(self.grid_height);

        for y in start_y..end_y {
            for x in start_x..end_x {
                if let Some(index) = self.grid[self.grid_index(x, y)] {
                    let existing = self.points[index];
                    let dx = point.x - existing.x;
                    let dy = point.y - existing.y;
                    if dx * dx + dy * dy < self.radius_squared {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn add_point(&mut self, point: DVec2) {
        let (gx, gy) = self.point_to_grid(point);
        let index = self.grid_index(gx, gy);
        let slot = self.points.len();
        self.grid[index] = Some(slot);
        self.active.push(slot);
        self.points.push(point);
    }

    fn generate_around_point(&self, rng: &mut dyn RngCore, point: DVec2) -> Option<DVec2> {
        for _ in 0..self.attempts {
            let angle = rand01(rng) * 2.0 * PI;
            let distance = self.radius + rand01(rng) * self.radius;

            let candidate = DVec2::new(
                point.x + angle.cos() * distance,
                point.y + angle.sin() * distance,
            );

            if self.is_valid_point(candidate) {
                return Some(candidate);
            }
        }

        None
    }

    fn generate(&mut self, rng: &mut dyn RngCore) -> Vec<DVec2> {
        let initial = DVec2::new(rand01(rng) * self.bounds.x, rand01(rng) * self.bounds.y);
        self.add_point(initial);

        while !self.active.is_empty() {
            let slot = rand_index(rng, self.active.len());
            let parent = self.points[self.active[slot]];

            match self.generate_around_point(rng, parent) {
                Some(candidate) => self.add_point(candidate),
                None => {
                    // Retired: stays in the output, spawns no further children.
                    self.active.remove(slot);
                }
            }
        }

        std::mem::take(&mut self.points)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::rng::SeededRng;

    fn extent(w: f64, h: f64) -> Vector2<f64> {
        Vector2 { x: w, y: h }
    }

    fn pairwise_min_distance(points: &[Vector2<f64>]) -> f64 {
        let mut min = f64::MAX;
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let a = DVec2::from(points[i]);
                let b = DVec2::from(points[j]);
                let dist = (a - b).length();
                if dist < min {
                    min = dist;
                }
            }
        }
        min
    }

    #[test]
    fn sampler_initializes_grid_dimensions() {
        let sampler =
            PoissonDiscSampler::new(0.5, DEFAULT_ATTEMPTS, DVec2::new(2.0, 1.0)).unwrap();
        assert_eq!(sampler.grid_width, (2.0 / sampler.cell_size).ceil() as usize);
        assert_eq!(
            sampler.grid_height,
            (1.0 / sampler.cell_size).ceil() as usize
        );
    }

    #[test]
    fn is_valid_point_rejects_close_neighbors() {
        let mut sampler =
            PoissonDiscSampler::new(1.0, DEFAULT_ATTEMPTS, DVec2::new(4.0, 4.0)).unwrap();
        sampler.add_point(DVec2::new(2.0, 2.0));

        assert!(!sampler.is_valid_point(DVec2::new(2.5, 2.0)));
        assert!(sampler.is_valid_point(DVec2::new(3.5, 3.5)));
        assert!(!sampler.is_valid_point(DVec2::new(-0.5, 2.0)));
        assert!(!sampler.is_valid_point(DVec2::new(2.0, 4.0)));
    }

    #[test]
    fn generated_points_respect_bounds_and_radius() {
        let mut rng = SeededRng::new(42);
        let points = PoissonDiscSampling::new(10.0)
            .generate(extent(100.0, 100.0), &mut rng)
            .unwrap();

        assert!(!points.is_empty());
        for p in &points {
            assert!(p.x >= 0.0 && p.x < 100.0);
            assert!(p.y >= 0.0 && p.y < 100.0);
        }
        if points.len() > 1 {
            assert!(pairwise_min_distance(&points) >= 10.0 - 1e-9);
        }
    }

    #[test]
    fn same_seed_reproduces_the_point_list() {
        let sampling = PoissonDiscSampling::new(10.0);
        let a = sampling
            .generate(extent(100.0, 100.0), &mut SeededRng::new(42))
            .unwrap();
        let b = sampling
            .generate(extent(100.0, 100.0), &mut SeededRng::new(42))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn larger_radius_never_increases_the_count() {
        let count = |radius: f64| {
            PoissonDiscSampling::new(radius)
                .generate(extent(100.0, 100.0), &mut SeededRng::new(42))
                .unwrap()
                .len()
        };
        assert!(count(5.0) >= count(10.0));
        assert!(count(10.0) >= count(15.0));
    }

    #[test]
    fn larger_area_never_decreases_the_count() {
        let sampling = PoissonDiscSampling::new(10.0);
        let base = sampling
            .generate(extent(100.0, 100.0), &mut SeededRng::new(42))
            .unwrap();
        let wide = sampling
            .generate(extent(150.0, 150.0), &mut SeededRng::new(42))
            .unwrap();
        assert!(wide.len() >= base.len());
    }

    #[test]
    fn foreign_rng_cores_drive_the_sampler() {
        let mut rng = StdRng::seed_from_u64(123);
        let points = PoissonDiscSampling::new(0.3)
            .generate(extent(1.0, 1.0), &mut rng)
            .unwrap();

        assert!(!points.is_empty());
        for p in &points {
            assert!(p.x >= 0.0 && p.x < 1.0);
            assert!(p.y >= 0.0 && p.y < 1.0);
        }
    }

    #[test]
    fn generator_method_matches_the_sampler() {
        let via_method = SeededRng::new(42).poisson_disc(80.0, 60.0, 8.0).unwrap();
        let via_struct = PoissonDiscSampling::new(8.0)
            .generate(extent(80.0, 60.0), &mut SeededRng::new(42))
            .unwrap();
        assert_eq!(via_method, via_struct);
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        let sampling = PoissonDiscSampling::new(10.0);
        let err = |result: Result<Vec<Vector2<f64>>>| {
            matches!(result, Err(Error::InvalidArgument(_)))
        };

        assert!(err(sampling.generate(extent(0.0, 100.0), &mut SeededRng::new(1))));
        assert!(err(sampling.generate(extent(100.0, -1.0), &mut SeededRng::new(1))));
        assert!(err(sampling.generate(extent(f64::NAN, 100.0), &mut SeededRng::new(1))));
        assert!(err(PoissonDiscSampling::new(0.0)
            .generate(extent(100.0, 100.0), &mut SeededRng::new(1))));
        assert!(err(PoissonDiscSampling::new(f64::INFINITY)
            .generate(extent(100.0, 100.0), &mut SeededRng::new(1))));
        assert!(err(PoissonDiscSampling::new(10.0)
            .with_attempts(0)
            .generate(extent(100.0, 100.0), &mut SeededRng::new(1))));
    }
}
