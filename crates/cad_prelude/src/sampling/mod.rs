//! Point sampling strategies for scatter placement in a 2D drawing region.
//!
//! Strategies propose positions inside `[0, width) x [0, height)` and draw
//! all randomness through [`rand::RngCore`], so a
//! [`SeededRng`](crate::rng::SeededRng) drives them deterministically and
//! any foreign generator can stand in.
use mint::Vector2;
use rand::RngCore;

use crate::error::Result;

pub mod poisson_disc;

pub use poisson_disc::PoissonDiscSampling;

/// Trait for point sampling over a rectangular region.
pub trait PointSampling: Send + Sync {
    fn generate(
        &self,
        domain_extent: Vector2<f64>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Vector2<f64>>>;
}

/// Generate a random float in `[0, 1)`.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    f64::from(rng.next_u32()) / 4_294_967_296.0
}

/// Uniformly random index into a non-empty collection of `len` items.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, len: usize) -> usize {
    debug_assert!(len > 0);
    ((rand01(rng) * len as f64) as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRng {
        value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.value)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    #[test]
    fn rand01_returns_zero_for_zero_word() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_strictly_below_one() {
        let mut rng = FixedRng { value: u32::MAX };
        let result = rand01(&mut rng);
        assert!((0.0..1.0).contains(&result));
    }

    #[test]
    fn rand01_midpoint_word_is_half() {
        let mut rng = FixedRng {
            value: u32::MAX / 2 + 1,
        };
        assert_eq!(rand01(&mut rng), 0.5);
    }

    #[test]
    fn rand_index_never_reaches_len() {
        let mut rng = FixedRng { value: u32::MAX };
        for len in 1..64 {
            assert!(rand_index(&mut rng, len) < len);
        }
    }
}
