use crate::rtweekend::*;

/// Result of a successful ray/primitive intersection.
///
/// `normal` is unit length for spheres only; planes and triangles report
/// their raw face normal.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    pub t: f64,
    /// Complementary root along the ray, used for absorption inside dielectrics.
    pub t_far: f64,
    pub p: Point3,
    pub normal: Vec3,
    pub mat: &'a dyn Material,
}

pub trait Hittable: Send + Sync {
    /// Nearest intersection with `t` strictly inside `ray_t`.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}
