//! Offline recursive ray tracer.
//!
//! Spheres, moving spheres, planes and triangles are intersected by linear
//! scan; Lambertian, metal and absorbing dielectric materials scatter rays
//! lit by a single point light; a thin-lens camera with a shutter interval
//! feeds a tiled, rayon-parallel renderer producing gamma-corrected 8-bit
//! pixels.

pub mod camera;
pub mod color;
pub mod error;
pub mod hittable;
pub mod hittable_list;
pub mod interval;
pub mod material;
pub mod moving_sphere;
pub mod plane;
pub mod ray;
pub mod renderer;
pub mod rtweekend;
pub mod sphere;
pub mod stats;
pub mod texture;
pub mod tile;
pub mod triangle;
pub mod vec3;

pub use rtweekend::*;
