//! Deterministic seeded generator and the distributions derived from it.
//!
//! [`SeededRng`] owns a single 32-bit state word. Every draw — uniform,
//! integer, choice, Gaussian, Poisson, or blue-noise scatter — goes through
//! the same raw primitive, so a fixed seed replays the exact same sequence
//! across runs and platforms. The generator is not cryptographic and carries
//! no internal locking; share one instance per logical owner.
use std::f64::consts::PI;

use mint::Vector2;
use rand::RngCore;
use tracing::warn;

use crate::error::{Error, Result};
use crate::sampling::{PointSampling, PoissonDiscSampling};

/// Increment added to the state word before each avalanche mix.
const STATE_INCREMENT: u32 = 0x6D2B79F5;

/// Draws per [`SeededRng::poisson`] call before the sample is capped.
const POISSON_DRAW_CAP: u64 = 10_000_000;

/// Deterministic 32-bit generator with a splitmix-style avalanche mix.
///
/// Two generators built from the same seed produce identical sequences for
/// any identical series of calls. There is no rewind; restart by
/// constructing a new generator with the same seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Generator with the given 32-bit seed taken verbatim.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Generator from any real-valued seed.
    ///
    /// Negative, fractional, and out-of-32-bit seeds are accepted: the value
    /// is truncated toward zero and wrapped modulo 2^32, the same coercion
    /// the generator's 32-bit arithmetic implies. Non-finite seeds degrade
    /// to 0.
    pub fn from_f64(seed: f64) -> Self {
        if !seed.is_finite() {
            warn!("non-finite seed {seed}; falling back to 0");
            return Self { state: 0 };
        }
        let wrapped = seed.trunc().rem_euclid(4_294_967_296.0);
        Self {
            state: wrapped as u32,
        }
    }

    /// Generator seeded from ambient process entropy.
    pub fn from_entropy() -> Self {
        Self::from_entropy_source(&mut rand::rng())
    }

    /// Generator seeded from a caller-supplied entropy source.
    ///
    /// Lets hosts and test suites substitute deterministic entropy instead
    /// of relying on hidden process-wide state.
    pub fn from_entropy_source(source: &mut dyn RngCore) -> Self {
        Self {
            state: source.next_u32(),
        }
    }

    /// Advance the state and return the next raw 32-bit output.
    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STATE_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next uniform draw in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        f64::from(self.step()) / 4_294_967_296.0
    }

    /// Integer draw in `[min, max)`.
    ///
    /// Computed as `floor(uniform() * (max - min) + min)`; inverted bounds
    /// (`max <= min`) are not clamped and yield values below `min`.
    pub fn uniform_int(&mut self, min: i64, max: i64) -> i64 {
        (self.uniform() * (max - min) as f64 + min as f64).floor() as i64
    }

    /// Uniformly random element of `items`.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        if items.is_empty() {
            return Err(Error::InvalidArgument(
                "choice requires a non-empty slice".into(),
            ));
        }
        let index = self.uniform_int(0, items.len() as i64) as usize;
        Ok(&items[index])
    }

    /// Normal draw with the given mean and standard deviation.
    ///
    /// Box-Muller, cosine branch only: each call costs exactly two uniform
    /// draws and the paired sine value is discarded, keeping the draw count
    /// per call fixed.
    pub fn gaussian(&mut self, mean: f64, sd: f64) -> f64 {
        let u = 1.0 - self.uniform();
        let v = self.uniform();
        (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos() * sd + mean
    }

    /// Poisson draw with the given rate via Knuth's multiplicative method.
    ///
    /// `poisson(0.0)` is always 0. Negative rates are not validated; the
    /// unguarded math returns 0 for them.
    pub fn poisson(&mut self, lambda: f64) -> u64 {
        let l = (-lambda).exp();
        let mut k: u64 = 0;
        let mut p: f64 = 1.0;

        loop {
            k += 1;
            p *= self.uniform();
            if p <= l {
                return k - 1;
            }

            if k > POISSON_DRAW_CAP {
                warn!("poisson({lambda}) hit the draw cap; returning {}", k - 1);
                return k - 1;
            }
        }
    }

    /// Blue-noise point set over `[0, width) x [0, height)` with pairwise
    /// distance at least `radius`.
    ///
    /// Shorthand for [`PoissonDiscSampling`] with the default attempt count,
    /// driven by this generator.
    pub fn poisson_disc(
        &mut self,
        width: f64,
        height: f64,
        radius: f64,
    ) -> Result<Vec<Vector2<f64>>> {
        PoissonDiscSampling::new(radius).generate(
            Vector2 {
                x: width,
                y: height,
            },
            self,
        )
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.step());
        let high = u64::from(self.step());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
