use crate::rtweekend::*;

/// Jitter radius giving Lambertian surfaces a faint gloss.
const GLOSS_JITTER: f64 = 0.01;

pub trait Material: Send + Sync {
    /// Continue `r_in` from `rec`. Returns the outgoing ray and its
    /// attenuation, or `None` if the surface absorbs the ray.
    fn scatter(&self, r_in: &Ray, rec: &HitRecord, light_pos: Point3) -> Option<(Ray, Color)>;

    /// Blend between diffuse (0) and specular (1) treatment.
    fn reflect_weight(&self) -> f64;
}

/// Diffuse term of the point light at `light_pos`, unclamped above.
fn light_factor(rec: &HitRecord, light_pos: Point3) -> f64 {
    rec.normal.dot((light_pos - rec.p).normalized()).max(0.0)
}

/// Schlick's approximation of Fresnel reflectance.
pub fn schlick(cosine: f64, ref_idx: f64) -> f64 {
    let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

pub struct Lambertian {
    albedo: Arc<dyn Texture>,
    reflect_weight: f64,
}

impl Lambertian {
    pub fn new(albedo: Arc<dyn Texture>) -> Self {
        Self {
            albedo,
            reflect_weight: 0.0,
        }
    }

    pub fn with_reflect_weight(mut self, reflect_weight: f64) -> Self {
        self.reflect_weight = reflect_weight;
        self
    }
}

impl Material for Lambertian {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord, light_pos: Point3) -> Option<(Ray, Color)> {
        let reflected = Vec3::reflect(&r_in.dir.normalized(), &rec.normal);
        let mut scatter_direction = rec.normal
            + Vec3::random_in_unit_sphere()
            + reflected
            + GLOSS_JITTER * Vec3::random_in_unit_sphere();
        if scatter_direction.near_zero() {
            scatter_direction = rec.normal;
        }
        let scattered = Ray::new(rec.p, scatter_direction, r_in.time);
        let attenuation = self.albedo.value(rec.p) * light_factor(rec, light_pos);
        Some((scattered, attenuation))
    }

    fn reflect_weight(&self) -> f64 {
        self.reflect_weight
    }
}

pub struct Metal {
    albedo: Color,
    fuzz: f64,
    reflect_weight: f64,
}

impl Metal {
    pub fn new(albedo: Color, fuzz: f64, reflect_weight: f64) -> Self {
        Self {
            albedo,
            fuzz,
            reflect_weight,
        }
    }
}

impl Material for Metal {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord, light_pos: Point3) -> Option<(Ray, Color)> {
        let reflected = Vec3::reflect(&r_in.dir.normalized(), &rec.normal);
        let direction = reflected + self.fuzz * Vec3::random_in_unit_sphere();
        if direction.dot(rec.normal) <= 0.0 {
            return None;
        }
        let scattered = Ray::new(rec.p, direction, r_in.time);
        let attenuation = self.albedo * light_factor(rec, light_pos);
        Some((scattered, attenuation))
    }

    fn reflect_weight(&self) -> f64 {
        self.reflect_weight
    }
}

/// Glass-like material with Beer-Lambert absorption along the chord it
/// travels through the primitive.
pub struct Dielectric {
    albedo: Color,
    ref_idx: f64,
    absorption: Color,
    reflect_weight: f64,
}

impl Dielectric {
    pub fn new(albedo: Color, ref_idx: f64, absorption: Color) -> Self {
        Self {
            albedo,
            ref_idx,
            absorption,
            reflect_weight: 1.0,
        }
    }

    /// Clear glass: white albedo, no absorption.
    pub fn clear(ref_idx: f64) -> Self {
        Self::new(Color::ones(), ref_idx, Color::zero())
    }

    pub fn with_reflect_weight(mut self, reflect_weight: f64) -> Self {
        self.reflect_weight = reflect_weight;
        self
    }

    fn attenuation(&self, rec: &HitRecord) -> Color {
        let distance = rec.t_far - rec.t;
        if distance < 0.0 {
            return self.albedo;
        }
        self.albedo * (-self.absorption * distance).map(f64::exp)
    }
}

impl Material for Dielectric {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord, _light_pos: Point3) -> Option<(Ray, Color)> {
        let d_dot_n = r_in.dir.dot(rec.normal);
        let (outward_normal, ni_over_nt, cosine) = if d_dot_n > 0.0 {
            (
                -rec.normal,
                self.ref_idx,
                self.ref_idx * d_dot_n / r_in.dir.length(),
            )
        } else {
            (
                rec.normal,
                1.0 / self.ref_idx,
                -d_dot_n / r_in.dir.length(),
            )
        };

        let reflected = Vec3::reflect(&r_in.dir, &rec.normal);
        let direction = match Vec3::refract(&r_in.dir, &outward_normal, ni_over_nt) {
            Some(refracted) if random_f64() >= schlick(cosine, self.ref_idx) => refracted,
            _ => reflected,
        };

        Some((Ray::new(rec.p, direction, r_in.time), self.attenuation(rec)))
    }

    fn reflect_weight(&self) -> f64 {
        self.reflect_weight
    }
}
