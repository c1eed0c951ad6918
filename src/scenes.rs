//! Demo scenes for the command-line driver.

use clap::ValueEnum;
use recursive_raytracer::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SceneKind {
    /// Fully reflective metal ball on a checkered ground
    ReflectDiffuse,
    /// Tinted glass ball showing Fresnel reflection
    Fresnel,
    /// Absorbing glass balls showing Beer-Lambert tinting
    Beer,
    /// Diffuse ball casting a shadow from the point light
    SoftShadow,
    /// Four-sided pyramid of triangles
    Pyramid,
    /// Ball moving during the shutter interval
    MotionBlur,
}

pub struct Scene {
    pub world: HittableList,
    pub lookfrom: Point3,
    pub lookat: Point3,
    pub vfov: f64,
}

impl Scene {
    fn new(world: HittableList) -> Self {
        Self {
            world,
            lookfrom: Point3::new(5.0, 3.5, 3.0),
            lookat: Point3::zero(),
            vfov: 30.0,
        }
    }

    pub fn camera(&self, settings: &RenderSettings, aperture: f64) -> Camera {
        let focus_dist = (self.lookfrom - self.lookat).length();
        Camera::new(
            self.lookfrom,
            self.lookat,
            Vec3::new(0.0, 1.0, 0.0),
            self.vfov,
            settings.aspect_ratio(),
            aperture,
            focus_dist,
            0.0,
            1.0,
        )
    }
}

fn solid(color: Color) -> Arc<dyn Texture> {
    Arc::new(ConstantTexture::new(color))
}

fn checker_ground() -> Arc<dyn Hittable> {
    let checker = CheckerTexture::new(solid(Color::splat(0.3)), solid(Color::splat(0.9)));
    Arc::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(Arc::new(checker))),
    ))
}

impl SceneKind {
    pub fn build(self) -> Scene {
        let mut world = HittableList::new();
        world.add(checker_ground());

        match self {
            SceneKind::ReflectDiffuse => {
                world.add(Arc::new(Sphere::new(
                    Point3::new(0.0, 0.5, 0.0),
                    0.5,
                    Arc::new(Metal::new(Color::new(1.0, 0.2, 0.2), 0.0, 1.0)),
                )));
            }
            SceneKind::Fresnel => {
                world.add(Arc::new(Sphere::new(
                    Point3::new(0.0, 0.5, 0.0),
                    0.5,
                    Arc::new(Dielectric::new(Color::new(0.8, 0.2, 0.2), 1.125, Color::zero())),
                )));
            }
            SceneKind::Beer => {
                world.add(Arc::new(Sphere::new(
                    Point3::new(0.0, 0.5, 0.5),
                    0.5,
                    Arc::new(Dielectric::new(Color::ones(), 1.125, Color::new(18.0, 18.0, 0.3))),
                )));
                world.add(Arc::new(Sphere::new(
                    Point3::new(-2.0, 0.8, 0.0),
                    0.8,
                    Arc::new(Dielectric::new(Color::ones(), 1.5, Color::splat(0.5))),
                )));
            }
            SceneKind::SoftShadow => {
                world.add(Arc::new(Sphere::new(
                    Point3::new(0.0, 0.5, 0.0),
                    0.5,
                    Arc::new(Lambertian::new(solid(Color::new(0.9, 0.8, 0.9)))),
                )));
            }
            SceneKind::Pyramid => {
                let apex = Point3::new(0.0, 0.5, 0.0);
                let faces = [
                    (Point3::new(-0.5, 0.0, -0.5), Point3::new(0.5, 0.0, -0.5), Color::new(0.5, 0.5, 1.0)),
                    (Point3::new(0.5, 0.0, -0.5), Point3::new(0.5, 0.0, 0.5), Color::new(0.2, 1.0, 0.2)),
                    (Point3::new(0.5, 0.0, 0.5), Point3::new(-0.5, 0.0, 0.5), Color::new(0.5, 1.0, 1.0)),
                    (Point3::new(-0.5, 0.0, -0.5), Point3::new(-0.5, 0.0, 0.5), Color::new(1.0, 0.5, 1.0)),
                ];
                for (v1, v2, color) in faces {
                    world.add(Arc::new(Triangle::new(
                        apex,
                        v1,
                        v2,
                        Arc::new(Lambertian::new(solid(color))),
                    )));
                }
            }
            SceneKind::MotionBlur => {
                world.add(Arc::new(MovingSphere::new(
                    Point3::new(0.0, 0.5, 0.0),
                    Point3::new(0.0, 0.9, 0.0),
                    0.0,
                    1.0,
                    0.5,
                    Arc::new(Lambertian::new(solid(Color::new(0.2, 0.4, 0.9)))),
                )));
                world.add(Arc::new(Sphere::new(
                    Point3::new(-1.5, 0.5, -0.5),
                    0.5,
                    Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.1, 0.8)),
                )));
            }
        }

        Scene::new(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scene_sits_on_the_ground() {
        for kind in SceneKind::value_variants() {
            let scene = kind.build();
            assert!(scene.world.len() >= 2, "{kind:?}");
            let down = Ray::new(Point3::new(30.0, 5.0, 30.0), Vec3::new(0.0, -1.0, 0.0), 0.0);
            let rec = scene.world.hit(&down, Interval::FORWARD).unwrap();
            assert!(rec.p.y.abs() < 1.0, "{kind:?}");
        }
    }

    #[test]
    fn low_resolution_render_of_each_scene() {
        let settings = RenderSettings {
            width: 8,
            height: 6,
            samples_per_pixel: 2,
            mode: ShadingMode::Shadowed,
            ..RenderSettings::default()
        };
        for kind in SceneKind::value_variants() {
            let scene = kind.build();
            let camera = scene.camera(&settings, 0.0);
            let output = render(&camera, &scene.world, &settings).unwrap();
            assert_eq!(output.image.pixels.len(), 48);
            assert_eq!(output.stats.primary_rays, 96);
        }
    }
}
