use crate::rtweekend::*;

/// A ray with an associated sample time used for motion blur.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Ray {
    pub orig: Point3,
    pub dir: Vec3,
    pub time: f64,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3, time: f64) -> Self {
        Self {
            orig: origin,
            dir: direction,
            time,
        }
    }

    pub fn point_at(&self, t: f64) -> Point3 {
        self.orig + t * self.dir
    }
}
