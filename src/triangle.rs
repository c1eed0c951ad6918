use crate::plane::plane_distance;
use crate::rtweekend::*;

/// Triangle with face normal `(v1 - v0) × (v2 - v0)`, left unnormalized.
pub struct Triangle {
    v0: Point3,
    v1: Point3,
    v2: Point3,
    normal: Vec3,
    mat: Arc<dyn Material>,
}

impl Triangle {
    pub fn new(v0: Point3, v1: Point3, v2: Point3, mat: Arc<dyn Material>) -> Self {
        let normal = (v1 - v0).cross(v2 - v0);
        Self {
            v0,
            v1,
            v2,
            normal,
            mat,
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Edge sign test. Points on an edge are outside.
    fn contains(&self, p: Point3) -> bool {
        [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)]
            .iter()
            .all(|&(from, to)| self.normal.dot((to - from).cross(p - from)) > 0.0)
    }
}

impl Hittable for Triangle {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let t = plane_distance(self.v0, self.normal, r)?;
        if !ray_t.surrounds(t) {
            return None;
        }
        let p = r.point_at(t);
        if !self.contains(p) {
            return None;
        }
        Some(HitRecord {
            t,
            t_far: t,
            p,
            normal: self.normal,
            mat: self.mat.as_ref(),
        })
    }
}
