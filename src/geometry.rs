//! Spiral-of-triangles geometry.
//!
//! The [`GeometryEngine`] computes the largest equilateral triangle that fits
//! a device-sized bounding square, then derives every following triangle by
//! moving each vertex a fraction `q` along the edge towards the next vertex.
//! Everything here is pure computation over [`Triangle`] values; no state is
//! shared between calls.

use crate::error::SpiralError;
use crate::math::vec2::Vec2;

/// Default fraction of side length each vertex moves per step.
pub const DEFAULT_Q: f64 = 0.05;

/// Default number of triangles in one full spiral.
pub const DEFAULT_TRIANGLE_COUNT: usize = 50;

/// Ratio of the starting (biggest) triangle side to the bounding square side.
pub const DRAWING_TO_CANVAS_RATIO: f64 = 0.95;

/// A triangle in logical coordinates (y up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    pub const fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    pub fn vertices(&self) -> [Vec2; 3] {
        [self.a, self.b, self.c]
    }

    /// The three edges as (start, end) pairs, in drawing order A→B, B→C, C→A.
    pub fn edges(&self) -> [(Vec2, Vec2); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// The same triangle with every vertex moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.a + offset, self.b + offset, self.c + offset)
    }

    /// The same triangle expressed relative to `origin`.
    pub fn relative_to(&self, origin: Vec2) -> Self {
        Self::new(self.a - origin, self.b - origin, self.c - origin)
    }

    pub fn centroid(&self) -> Vec2 {
        (self.a + self.b + self.c) * (1.0 / 3.0)
    }

    /// Twice the signed area. Zero for collinear vertices.
    pub fn doubled_signed_area(&self) -> f64 {
        (self.b - self.a).cross(self.c - self.a)
    }

    /// Length of the longest edge.
    pub fn max_edge_length(&self) -> f64 {
        self.a
            .distance(self.b)
            .max(self.b.distance(self.c))
            .max(self.c.distance(self.a))
    }
}

/// Parameters of a spiral, fixed for the lifetime of the engine.
///
/// Invariant: `0 < q < 1` and `p == 1 - q`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralConfig {
    q: f64,
    p: f64,
    count: usize,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            q: DEFAULT_Q,
            p: 1.0 - DEFAULT_Q,
            count: DEFAULT_TRIANGLE_COUNT,
        }
    }
}

impl SpiralConfig {
    /// Creates a config with the default triangle count.
    ///
    /// # Errors
    /// Returns [`SpiralError::InvalidConfiguration`] if `q <= 0`, `q >= 1` or
    /// `q` is NaN.
    pub fn new(q: f64) -> Result<Self, SpiralError> {
        // Written as a negated range test so NaN is rejected as well.
        if !(q > 0.0 && q < 1.0) {
            return Err(SpiralError::InvalidConfiguration(q));
        }
        Ok(Self {
            q,
            p: 1.0 - q,
            count: DEFAULT_TRIANGLE_COUNT,
        })
    }

    /// Sets the number of triangles per spiral.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Per-step scale factor of the edge length for an equilateral start.
    pub fn contraction_ratio(&self) -> f64 {
        (self.p * self.p + self.q * self.q - self.p * self.q).sqrt()
    }
}

/// Computes the triangles of a spiral.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GeometryEngine {
    config: SpiralConfig,
}

impl GeometryEngine {
    pub fn new(config: SpiralConfig) -> Self {
        Self { config }
    }

    /// Shorthand for `GeometryEngine::new(SpiralConfig::new(q)?)`.
    pub fn with_q(q: f64) -> Result<Self, SpiralError> {
        Ok(Self::new(SpiralConfig::new(q)?))
    }

    pub fn config(&self) -> &SpiralConfig {
        &self.config
    }

    /// Returns the first (biggest) triangle for a surface whose largest valid
    /// device coordinates are `max_x` and `max_y`.
    ///
    /// The triangle is equilateral, centred on the surface, with two vertices
    /// on a horizontal line below the centre and the third above it (y up).
    pub fn initialize(&self, max_x: i32, max_y: i32) -> Triangle {
        let side = DRAWING_TO_CANVAS_RATIO * max_x.min(max_y) as f64;
        let side_half = 0.5 * side;
        let h = side_half * 3.0_f64.sqrt();
        // Integer halving: the centre sits on a whole pixel.
        let x_center = (max_x / 2) as f64;
        let y_center = (max_y / 2) as f64;

        let a = Vec2::new(x_center - side_half, y_center - 0.5 * h);
        let b = Vec2::new(x_center + side_half, a.y);
        let c = Vec2::new(x_center, y_center + 0.5 * h);
        Triangle::new(a, b, c)
    }

    /// Returns the next (smaller, rotated) triangle of the spiral.
    #[inline]
    pub fn next(&self, triangle: Triangle) -> Triangle {
        let SpiralConfig { p, q, .. } = self.config;
        Triangle::new(
            triangle.a.blend(triangle.b, p, q),
            triangle.b.blend(triangle.c, p, q),
            triangle.c.blend(triangle.a, p, q),
        )
    }

    /// Returns a lazy iterator over the full spiral for the given bounds.
    ///
    /// Calling this again restarts the spiral from the biggest triangle.
    pub fn spiral(&self, max_x: i32, max_y: i32) -> Spiral<'_> {
        let first = self.initialize(max_x, max_y);
        let center = first.centroid();
        Spiral {
            engine: self,
            center,
            offsets: first.relative_to(center),
            current: first,
            remaining: self.config.count,
        }
    }
}

/// Iterator over the triangles of one spiral, biggest first.
///
/// Owns the vertex state of a single pass. The recurrence runs on offsets
/// from the (fixed) centroid so that small triangles keep full precision far
/// away from the origin; each yielded triangle is translated back.
#[derive(Clone, Debug)]
pub struct Spiral<'a> {
    engine: &'a GeometryEngine,
    center: Vec2,
    offsets: Triangle,
    current: Triangle,
    remaining: usize,
}

impl Iterator for Spiral<'_> {
    type Item = Triangle;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let triangle = self.current;
        if self.remaining > 0 {
            self.offsets = self.engine.next(self.offsets);
            self.current = self.offsets.translated(self.center);
        }
        Some(triangle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Spiral<'_> {}

impl std::iter::FusedIterator for Spiral<'_> {}
