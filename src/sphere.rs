use crate::rtweekend::*;

pub struct Sphere {
    center: Point3,
    radius: f64,
    mat: Arc<dyn Material>,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64, mat: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius,
            mat,
        }
    }
}

/// Solves `a t² + 2b t + c = 0` for a sphere and returns `(t, t_far)`.
///
/// Tangent rays (zero discriminant) are misses. The near root wins when it
/// lies inside `ray_t`; otherwise the far root is tried and `t_far` carries
/// the near one.
pub(crate) fn solve_sphere(
    center: Point3,
    radius: f64,
    r: &Ray,
    ray_t: Interval,
) -> Option<(f64, f64)> {
    let oc = r.orig - center;
    let a = r.dir.dot(r.dir);
    let b = r.dir.dot(oc);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = b * b - a * c;
    if discriminant <= 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    let near = (-b - sqrtd) / a;
    let far = (-b + sqrtd) / a;
    if ray_t.surrounds(near) {
        Some((near, far))
    } else if ray_t.surrounds(far) {
        Some((far, near))
    } else {
        None
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let (t, t_far) = solve_sphere(self.center, self.radius, r, ray_t)?;
        let p = r.point_at(t);
        Some(HitRecord {
            t,
            t_far,
            p,
            normal: (p - self.center) / self.radius,
            mat: self.mat.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey() -> Arc<dyn Material> {
        Arc::new(Lambertian::new(Arc::new(ConstantTexture::new(Color::splat(0.5)))))
    }

    #[test]
    fn ray_missing_the_sphere_reports_nothing() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, grey());
        for dir in [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, -1.0),
        ] {
            let ray = Ray::new(Point3::zero(), dir, 0.0);
            assert!(sphere.hit(&ray, Interval::FORWARD).is_none());
        }
    }

    #[test]
    fn tangent_ray_is_a_miss() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, grey());
        let ray = Ray::new(Point3::new(0.5, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0), 0.0);
        assert!(sphere.hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn ray_through_interior_hits_surface_near_then_far() {
        let center = Point3::new(0.2, -0.1, -3.0);
        let sphere = Sphere::new(center, 1.0, grey());
        for _ in 0..200 {
            let target = center + 0.9 * Vec3::random_in_unit_sphere();
            let ray = Ray::new(Point3::zero(), target * random_f64_range(0.5, 2.0), 0.0);
            let rec = sphere.hit(&ray, Interval::FORWARD).unwrap();
            assert!(rec.t < rec.t_far);
            assert!(((rec.p - center).length() - 1.0).abs() < 1e-9);
            assert!((rec.normal.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn origin_inside_uses_far_root() {
        let sphere = Sphere::new(Point3::zero(), 2.0, grey());
        let ray = Ray::new(Point3::zero(), Vec3::new(1.0, 0.0, 0.0), 0.0);
        let rec = sphere.hit(&ray, Interval::FORWARD).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-12);
        assert!(rec.t_far - rec.t < 0.0);
    }

    #[test]
    fn ground_sphere_hit_from_above() {
        let checker = CheckerTexture::new(
            Arc::new(ConstantTexture::new(Color::splat(0.3))),
            Arc::new(ConstantTexture::new(Color::splat(0.9))),
        );
        let ground = Sphere::new(
            Point3::new(0.0, -1000.0, 0.0),
            1000.0,
            Arc::new(Lambertian::new(Arc::new(checker))),
        );
        let ray = Ray::new(Point3::new(0.0, 5.0, 0.0), Vec3::new(0.001, -1.25, 0.0), 0.0);
        let rec = ground.hit(&ray, Interval::FORWARD).unwrap();
        assert!((rec.t - 4.0).abs() < 1e-3);
        assert!(rec.normal.y > 0.999);
    }

    #[test]
    fn hit_outside_interval_is_rejected() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0, grey());
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0), 0.0);
        assert!(sphere.hit(&ray, Interval::new(0.001, 3.0)).is_none());
        assert!(sphere.hit(&ray, Interval::new(0.001, 4.5)).is_some());
    }
}
