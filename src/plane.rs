use crate::rtweekend::*;

/// Rays travelling closer to parallel than this are ignored.
pub(crate) const PARALLEL_EPSILON: f64 = 1e-6;

/// Plane through `center` with an unnormalized `normal`.
///
/// `width` and `height` describe a nominal extent but intersection treats the
/// plane as infinite.
pub struct Plane {
    center: Point3,
    pub width: f64,
    pub height: f64,
    normal: Vec3,
    mat: Arc<dyn Material>,
}

impl Plane {
    pub fn new(center: Point3, width: f64, height: f64, normal: Vec3, mat: Arc<dyn Material>) -> Self {
        Self {
            center,
            width,
            height,
            normal,
            mat,
        }
    }
}

/// Parametric distance to the plane through `point` with `normal`.
///
/// Only rays whose direction has a positive component along the normal
/// above `PARALLEL_EPSILON` are considered.
pub(crate) fn plane_distance(point: Point3, normal: Vec3, r: &Ray) -> Option<f64> {
    let denominator = r.dir.dot(normal);
    if denominator <= PARALLEL_EPSILON {
        return None;
    }
    Some((point - r.orig).dot(normal) / denominator)
}

impl Hittable for Plane {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let t = plane_distance(self.center, self.normal, r)?;
        if !ray_t.surrounds(t) {
            return None;
        }
        Some(HitRecord {
            t,
            t_far: t,
            p: r.point_at(t),
            normal: self.normal,
            mat: self.mat.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(
            Point3::zero(),
            1.0,
            1.0,
            Vec3::new(0.0, -2.0, 0.0),
            Arc::new(Metal::new(Color::splat(0.5), 0.0, 0.5)),
        )
    }

    #[test]
    fn extent_is_not_enforced() {
        let plane = floor();
        let ray = Ray::new(Point3::new(50.0, 3.0, -40.0), Vec3::new(0.0, -1.0, 0.0), 0.0);
        let rec = plane.hit(&ray, Interval::FORWARD).unwrap();
        assert!((rec.t - 3.0).abs() < 1e-12);
        assert_eq!(rec.p, Point3::new(50.0, 0.0, -40.0));
        assert_eq!(rec.normal, Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(rec.t_far, rec.t);
    }

    #[test]
    fn parallel_and_opposing_rays_miss() {
        let plane = floor();
        let parallel = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 0.0);
        let opposing = Ray::new(Point3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0), 0.0);
        assert!(plane.hit(&parallel, Interval::FORWARD).is_none());
        assert!(plane.hit(&opposing, Interval::FORWARD).is_none());
    }

    #[test]
    fn plane_behind_ray_is_outside_interval() {
        let plane = floor();
        let ray = Ray::new(Point3::new(0.0, -1.0, 0.0), Vec3::new(0.0, -1.0, 0.0), 0.0);
        assert!(plane.hit(&ray, Interval::FORWARD).is_none());
    }
}
