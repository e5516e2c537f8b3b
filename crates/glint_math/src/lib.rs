// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod interval;
mod ray;
pub mod vector;

pub use interval::Interval;
pub use ray::Ray;

/// RGB color stored in the xyz lanes of a `Vec4` (w unused).
pub type Color = Vec4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec4_creation() {
        let v = Vec4::new(1.0, 2.0, 3.0, 0.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 0.0);
    }

    #[test]
    fn test_color_is_vec4() {
        let c: Color = Vec4::new(0.2, 0.4, 0.6, 0.0);
        assert_eq!(c + c, Vec4::new(0.4, 0.8, 1.2, 0.0));
    }
}
