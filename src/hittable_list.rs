use crate::rtweekend::*;

/// Unordered set of primitives queried as one. The nearest hit wins.
#[derive(Default)]
pub struct HittableList {
    pub objects: Vec<Arc<dyn Hittable>>,
}

impl HittableList {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest_hitrecord: Option<HitRecord<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for object in self.objects.iter() {
            if let Some(hit_rec) = object.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = hit_rec.t;
                closest_hitrecord = Some(hit_rec);
            }
        }

        closest_hitrecord
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lambertian(c: Color) -> Arc<dyn Material> {
        Arc::new(Lambertian::new(Arc::new(ConstantTexture::new(c))))
    }

    #[test]
    fn empty_list_never_hits() {
        let world = HittableList::new();
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0), 0.0);
        assert!(world.is_empty());
        assert!(world.hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn ray_hitting_only_second_sphere_reports_its_material() {
        let red = lambertian(Color::new(1.0, 0.0, 0.0));
        let blue = lambertian(Color::new(0.0, 0.0, 1.0));
        let mut world = HittableList::new();
        world.add(Arc::new(Sphere::new(Point3::new(-3.0, 0.0, -5.0), 1.0, red)));
        world.add(Arc::new(Sphere::new(Point3::new(3.0, 0.0, -5.0), 1.0, blue.clone())));

        let ray = Ray::new(Point3::new(3.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0), 0.0);
        let rec = world.hit(&ray, Interval::FORWARD).unwrap();
        assert!((rec.t - 4.0).abs() < 1e-12);
        assert!(std::ptr::addr_eq(rec.mat, blue.as_ref()));
    }

    #[test]
    fn nearest_hit_wins_regardless_of_order() {
        let near = lambertian(Color::splat(0.1));
        let far = lambertian(Color::splat(0.9));
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0), 0.0);

        let mut forward = HittableList::new();
        forward.add(Arc::new(Sphere::new(Point3::new(0.0, 0.0, -10.0), 1.0, far.clone())));
        forward.add(Arc::new(Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0, near.clone())));

        let mut reversed = HittableList::new();
        reversed.add(Arc::new(Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0, near.clone())));
        reversed.add(Arc::new(Sphere::new(Point3::new(0.0, 0.0, -10.0), 1.0, far)));

        for world in [&forward, &reversed] {
            let rec = world.hit(&ray, Interval::FORWARD).unwrap();
            assert!((rec.t - 2.0).abs() < 1e-12);
            assert!(std::ptr::addr_eq(rec.mat, near.as_ref()));
        }
        assert_eq!(forward.len(), 2);
    }
}
