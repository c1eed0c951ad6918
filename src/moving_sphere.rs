use crate::rtweekend::*;
use crate::sphere::solve_sphere;

/// Sphere whose center moves linearly from `center0` at `time0` to
/// `center1` at `time1`.
pub struct MovingSphere {
    center0: Point3,
    center1: Point3,
    time0: f64,
    time1: f64,
    radius: f64,
    mat: Arc<dyn Material>,
}

impl MovingSphere {
    pub fn new(
        center0: Point3,
        center1: Point3,
        time0: f64,
        time1: f64,
        radius: f64,
        mat: Arc<dyn Material>,
    ) -> Self {
        Self {
            center0,
            center1,
            time0,
            time1,
            radius,
            mat,
        }
    }

    pub fn center(&self, time: f64) -> Point3 {
        self.center0 + ((time - self.time0) / (self.time1 - self.time0)) * (self.center1 - self.center0)
    }
}

impl Hittable for MovingSphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let center = self.center(r.time);
        let (t, t_far) = solve_sphere(center, self.radius, r, ray_t)?;
        let p = r.point_at(t);
        Some(HitRecord {
            t,
            t_far,
            p,
            normal: (p - center) / self.radius,
            mat: self.mat.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving() -> MovingSphere {
        MovingSphere::new(
            Point3::new(0.0, 0.0, -2.0),
            Point3::new(2.0, 0.0, -2.0),
            0.0,
            1.0,
            0.5,
            Arc::new(Metal::new(Color::splat(0.8), 0.0, 1.0)),
        )
    }

    #[test]
    fn center_interpolates_over_shutter() {
        let s = moving();
        assert_eq!(s.center(0.0), Point3::new(0.0, 0.0, -2.0));
        assert_eq!(s.center(0.5), Point3::new(1.0, 0.0, -2.0));
        assert_eq!(s.center(1.0), Point3::new(2.0, 0.0, -2.0));
    }

    #[test]
    fn hit_depends_on_ray_time() {
        let s = moving();
        let dir = Vec3::new(0.0, 0.0, -1.0);
        let early = Ray::new(Point3::zero(), dir, 0.0);
        let late = Ray::new(Point3::zero(), dir, 1.0);

        let rec = s.hit(&early, Interval::FORWARD).unwrap();
        assert!((rec.t - 1.5).abs() < 1e-12);
        assert!(rec.t < rec.t_far);
        assert!((rec.normal.length() - 1.0).abs() < 1e-12);
        assert!(s.hit(&late, Interval::FORWARD).is_none());
    }
}
