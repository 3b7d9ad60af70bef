//! Thin convenience wrappers over the host kernel's shape operations.
//!
//! The library never builds geometry itself. Hosts implement [`ShapeOps`]
//! with whatever shape handle their kernel uses; the wrappers here only add
//! the bookkeeping scripts repeat — folding a fuse across a list, spacing
//! polar copies, closing a polygon — plus explicit argument validation.
use std::f64::consts::PI;

use mint::Vector2;

use crate::error::{Error, Result};

/// Interface to the host kernel's shape and drawing primitives.
pub trait ShapeOps {
    /// Host-side shape handle.
    type Shape;

    /// Boolean union of two shapes.
    fn fuse(&mut self, a: Self::Shape, b: Self::Shape) -> Result<Self::Shape>;

    /// Copy of `shape` rotated by `angle` radians about the origin.
    fn rotated(&mut self, shape: &Self::Shape, angle: f64) -> Result<Self::Shape>;

    /// Closed polygon through the given points.
    fn polygon(&mut self, points: &[Vector2<f64>]) -> Result<Self::Shape>;
}

/// Fuse a list of shapes into one, left to right.
pub fn fuse_all<B: ShapeOps>(backend: &mut B, shapes: Vec<B::Shape>) -> Result<B::Shape> {
    let mut iter = shapes.into_iter();
    let Some(mut fused) = iter.next() else {
        return Err(Error::InvalidArgument(
            "fuse_all requires at least one shape".into(),
        ));
    };
    for shape in iter {
        fused = backend.fuse(fused, shape)?;
    }
    Ok(fused)
}

/// `count` copies of `shape` rotated in even steps around the origin.
pub fn polar_array<B: ShapeOps>(
    backend: &mut B,
    shape: &B::Shape,
    count: usize,
) -> Result<Vec<B::Shape>> {
    if count == 0 {
        return Err(Error::InvalidArgument(
            "polar_array requires count > 0".into(),
        ));
    }
    let step = 2.0 * PI / count as f64;
    (0..count)
        .map(|i| backend.rotated(shape, step * i as f64))
        .collect()
}

/// Closed polygon through `points`.
pub fn polygon_through<B: ShapeOps>(
    backend: &mut B,
    points: &[Vector2<f64>],
) -> Result<B::Shape> {
    if points.len() < 3 {
        return Err(Error::InvalidArgument(format!(
            "polygon requires at least 3 points, got {}",
            points.len()
        )));
    }
    backend.polygon(points)
}
