use crate::Vec4;

/// A ray in 3D space with an origin point and a direction.
///
/// Both are stored as `Vec4` with `w = 0`. Shading code expects the direction
/// to be unit length; `Ray::new` does not normalize it for you.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec4,
    pub direction: Vec4,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec4, direction: Vec4) -> Self {
        Self { origin, direction }
    }

    /// Create a ray whose origin is pushed `bias` units along `direction`.
    ///
    /// Used for secondary rays so they do not re-hit the surface they leave.
    pub fn offset(origin: Vec4, direction: Vec4, bias: f32) -> Self {
        Self::new(origin + direction * bias, direction)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec4 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec4 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec4 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec4::new(1.0, 2.0, 3.0, 0.0);
        let direction = Vec4::new(0.0, 1.0, 0.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec4::ZERO, Vec4::X);

        assert_eq!(ray.at(0.0), Vec4::ZERO);
        assert_eq!(ray.at(1.0), Vec4::X);
        assert_eq!(ray.at(2.0), Vec4::new(2.0, 0.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec4::new(-1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_offset() {
        let ray = Ray::offset(Vec4::ZERO, Vec4::Y, 0.001);

        assert_eq!(ray.direction(), Vec4::Y);
        assert!((ray.origin().y - 0.001).abs() < 1e-7);
        assert_eq!(ray.origin().x, 0.0);
    }
}
