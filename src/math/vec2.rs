use std::ops::{Add, Mul, Sub};

/// A point or direction in 2D logical space (y up).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    pub fn distance(&self, other: Self) -> f64 {
        (*self - other).magnitude()
    }

    /// 2D cross product (z component of the 3D cross product).
    ///
    /// Zero when the two vectors are parallel.
    pub fn cross(&self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Weighted blend `p * self + q * other`.
    ///
    /// With `p + q == 1` the result lies on the segment between the two
    /// points, a fraction `q` of the way from `self` to `other`.
    #[inline]
    pub fn blend(&self, other: Self, p: f64, q: f64) -> Self {
        Self {
            x: p * self.x + q * other.x,
            y: p * self.y + q * other.y,
        }
    }
}

/// Component-wise addition of two vectors.
impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// Component-wise subtraction of two vectors.
impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Scalar multiplication of a vector.
impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_relative_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_cross_of_parallel_is_zero() {
        let a = Vec2::new(2.0, 1.0);
        assert_eq!(a.cross(a * 3.0), 0.0);
    }

    #[test]
    fn test_blend_moves_fraction_along_segment() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, -20.0);
        let mid = a.blend(b, 0.75, 0.25);
        assert_relative_eq!(mid.x, 2.5);
        assert_relative_eq!(mid.y, -5.0);
    }
}
