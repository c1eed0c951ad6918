use crate::rtweekend::INFINITY;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Hit interval used for scene queries. The lower bound keeps rays from
    /// re-hitting the surface they leave.
    pub const FORWARD: Self = Self {
        min: 0.001,
        max: INFINITY,
    };

    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    pub fn clamp(&self, x: f64) -> f64 {
        if x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }
}
