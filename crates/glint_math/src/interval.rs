/// A closed range of ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Same interval with `max` pulled in to `x`, used to shrink the search
    /// range as closer hits are found.
    pub fn with_max(&self, x: f32) -> Interval {
        Interval::new(self.min, x)
    }

    /// Everything strictly in front of a ray origin.
    pub const FORWARD: Interval = Interval {
        min: 0.0,
        max: f32::INFINITY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));
        assert!(interval.surrounds(0.1));
        assert!(interval.surrounds(9.9));
    }

    #[test]
    fn test_forward_excludes_origin_and_behind() {
        assert!(!Interval::FORWARD.surrounds(0.0));
        assert!(!Interval::FORWARD.surrounds(-1.0));
        assert!(Interval::FORWARD.surrounds(1e-5));
        assert!(Interval::FORWARD.surrounds(1e10));
    }

    #[test]
    fn test_with_max() {
        let narrowed = Interval::FORWARD.with_max(3.0);
        assert_eq!(narrowed, Interval::new(0.0, 3.0));
        assert!(!narrowed.surrounds(3.5));
    }
}
