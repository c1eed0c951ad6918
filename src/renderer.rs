//! Recursive shading and the parallel render loop.
//!
//! The integrator follows each camera ray through the scene until it leaves
//! to the sky, runs out of depth or is absorbed. In shadowed mode every
//! surface hit also casts shadow rays at a single point light, darkening
//! occluded points and adding a Blinn-Phong highlight to lit ones.

use crate::rtweekend::*;
use crate::tile::{Tile, generate_tiles};
use log::{debug, info};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

const SKY_WHITE: Color = Color::new(1.0, 1.0, 1.0);
const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

/// Selects how surface hits are shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// Attenuation times the continued path, nothing else.
    #[default]
    PathTraced,
    /// Shadow rays and a specular highlight from the point light.
    Shadowed,
}

/// Point light used by the material diffuse term and by shadow rays.
#[derive(Debug, Clone, Copy)]
pub struct LightSettings {
    pub position: Point3,
    /// Shadow rays per hit. More than one jitters them for soft shadows.
    pub shadow_samples: u32,
    /// Radius of the jitter applied to the light direction.
    pub jitter: f64,
    pub lit_color: Color,
    pub shadow_color: Color,
    pub specular_strength: f64,
    pub shininess: i32,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            position: Point3::new(-5.0, 3.5, 3.0),
            shadow_samples: 1,
            jitter: 0.1,
            lit_color: Color::ones(),
            shadow_color: Color::splat(0.3),
            specular_strength: 0.09,
            shininess: 16,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u32,
    /// Scatter events allowed per camera ray.
    pub max_depth: u32,
    pub tile_size: u32,
    pub mode: ShadingMode,
    pub light: LightSettings,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            samples_per_pixel: 100,
            max_depth: 4,
            tile_size: 32,
            mode: ShadingMode::default(),
            light: LightSettings::default(),
        }
    }
}

impl RenderSettings {
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidSettings(format!(
                "image size {}x{} has no pixels",
                self.width, self.height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidSettings(
                "samples per pixel must be at least 1".into(),
            ));
        }
        if self.tile_size == 0 {
            return Err(RenderError::InvalidSettings(
                "tile size must be at least 1".into(),
            ));
        }
        if self.mode == ShadingMode::Shadowed && self.light.shadow_samples == 0 {
            return Err(RenderError::InvalidSettings(
                "shadowed mode needs at least one shadow sample".into(),
            ));
        }
        Ok(())
    }
}

/// Dense grid of 8-bit RGB pixels, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl Image {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Copy a tile's row-major pixels into place.
    fn blit(&mut self, tile: &Tile, pixels: &[[u8; 3]]) {
        for (row, chunk) in pixels.chunks(tile.width as usize).enumerate() {
            let start = self.index(tile.x, tile.y + row as u32);
            self.pixels[start..start + chunk.len()].copy_from_slice(chunk);
        }
    }
}

pub struct RenderOutput {
    pub image: Image,
    pub stats: RenderStats,
}

/// Background seen by rays that leave the scene: white at the bottom,
/// pale blue at the top.
pub fn sky_color(r: &Ray) -> Color {
    let unit_direction = r.dir.normalized();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * SKY_WHITE + a * SKY_BLUE
}

pub struct Integrator<'a> {
    world: &'a dyn Hittable,
    settings: &'a RenderSettings,
    eye: Point3,
}

impl<'a> Integrator<'a> {
    pub fn new(world: &'a dyn Hittable, camera: &Camera, settings: &'a RenderSettings) -> Self {
        Self {
            world,
            settings,
            eye: camera.origin(),
        }
    }

    /// Radiance carried back along `r`.
    ///
    /// Unrolls `specular + shade * attenuation * color(scattered)` into a
    /// loop with a running throughput.
    pub fn ray_color(&self, r: &Ray, stats: &mut RenderStats) -> Color {
        let mut ray = *r;
        let mut radiance = Color::zero();
        let mut throughput = Color::ones();
        let mut depth = 0;

        loop {
            stats.scene_queries += 1;
            let Some(rec) = self.world.hit(&ray, Interval::FORWARD) else {
                return radiance + throughput * sky_color(&ray);
            };
            if depth >= self.settings.max_depth {
                return radiance;
            }

            let (shade, specular) = match self.settings.mode {
                ShadingMode::PathTraced => (Color::ones(), 0.0),
                ShadingMode::Shadowed => self.direct_light(&ray, &rec, stats),
            };

            let Some((scattered, attenuation)) =
                rec.mat.scatter(&ray, &rec, self.settings.light.position)
            else {
                return radiance;
            };
            stats.scatters += 1;

            radiance += throughput * specular;
            throughput *= shade * attenuation;
            ray = scattered;
            depth += 1;
        }
    }

    /// Shade factor and specular highlight at `rec` from the point light.
    fn direct_light(&self, r: &Ray, rec: &HitRecord, stats: &mut RenderStats) -> (Color, f64) {
        let light = &self.settings.light;
        let samples = light.shadow_samples;
        let occluded = (0..samples).filter(|_| self.in_shadow(r, rec, stats)).count() as f64;

        let fraction = occluded / samples as f64;
        let mut shade = light.lit_color - (light.lit_color - light.shadow_color) * fraction;
        // Specular surfaces show the shadows of what they reflect rather than their own.
        let weight = rec.mat.reflect_weight();
        shade = (1.0 - weight) * shade + weight * light.lit_color;

        let specular = if occluded == 0.0 {
            let view_dir = (self.eye - rec.p).normalized();
            let light_dir = (light.position - rec.p).normalized();
            let reflect_dir = Vec3::reflect(&-light_dir, &rec.normal);
            light.specular_strength * view_dir.dot(reflect_dir).max(0.0).powi(light.shininess)
        } else {
            0.0
        };
        (shade, specular)
    }

    fn in_shadow(&self, r: &Ray, rec: &HitRecord, stats: &mut RenderStats) -> bool {
        let light = &self.settings.light;
        let to_light = light.position - rec.p;
        let direction = if light.shadow_samples > 1 {
            (to_light + light.jitter * Vec3::random_in_unit_sphere()).normalized()
        } else {
            to_light.normalized()
        };
        stats.shadow_rays += 1;
        stats.scene_queries += 1;
        let shadow_ray = Ray::new(rec.p, direction, r.time);
        self.world.hit(&shadow_ray, Interval::FORWARD).is_some()
    }
}

/// Average linear color of pixel `(x, y)`, `y` counted up from the bottom row.
pub fn render_pixel(
    x: u32,
    y: u32,
    camera: &Camera,
    world: &dyn Hittable,
    settings: &RenderSettings,
    stats: &mut RenderStats,
) -> Color {
    let integrator = Integrator::new(world, camera, settings);
    let mut pixel_color = Color::zero();
    for _ in 0..settings.samples_per_pixel {
        let s = (x as f64 + random_f64()) / settings.width as f64;
        let t = (y as f64 + random_f64()) / settings.height as f64;
        let r = camera.get_ray(s, t);
        stats.primary_rays += 1;
        pixel_color += integrator.ray_color(&r, stats);
    }
    pixel_color / settings.samples_per_pixel as f64
}

fn render_tile(
    tile: &Tile,
    camera: &Camera,
    world: &dyn Hittable,
    settings: &RenderSettings,
) -> (Vec<[u8; 3]>, RenderStats) {
    let mut stats = RenderStats::default();
    let mut pixels = Vec::with_capacity(tile.pixel_count());
    for row in tile.y..tile.y + tile.height {
        let y = settings.height - 1 - row;
        for x in tile.x..tile.x + tile.width {
            let color = render_pixel(x, y, camera, world, settings, &mut stats);
            pixels.push(to_rgb8(color));
        }
    }
    (pixels, stats)
}

/// Render the whole image, one rayon task per tile.
///
/// The scene and camera are shared read-only; each task owns its tile's
/// pixels and its own counters.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    settings: &RenderSettings,
) -> RenderResult<RenderOutput> {
    settings.validate()?;

    let tiles = generate_tiles(settings.width, settings.height, settings.tile_size);
    info!(
        "Rendering {}x{} at {} spp, depth {}, {:?} shading, {} tiles",
        settings.width,
        settings.height,
        settings.samples_per_pixel,
        settings.max_depth,
        settings.mode,
        tiles.len()
    );

    let finished = AtomicUsize::new(0);
    let results: Vec<(Tile, Vec<[u8; 3]>, RenderStats)> = tiles
        .par_iter()
        .map(|tile| {
            let (pixels, stats) = render_tile(tile, camera, world, settings);
            let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
            debug!("Tile at ({}, {}) finished [{}/{}]", tile.x, tile.y, done, tiles.len());
            (*tile, pixels, stats)
        })
        .collect();

    let mut image = Image::new(settings.width, settings.height);
    for (tile, pixels, _) in &results {
        image.blit(tile, pixels);
    }
    let stats: RenderStats = results.iter().map(|(_, _, stats)| *stats).sum();

    Ok(RenderOutput { image, stats })
}
