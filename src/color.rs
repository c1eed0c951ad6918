use crate::rtweekend::*;
use std::io::{self, Write};

pub type Color = Vec3;

#[inline]
pub fn linear_to_gamma(linear_component: f64) -> f64 {
    if linear_component > 0.0 {
        linear_component.sqrt()
    } else {
        0.0
    }
}

/// Gamma-correct an averaged linear color and quantise it to 8 bits.
pub fn to_rgb8(pixel_color: Color) -> [u8; 3] {
    let intensity = Interval::new(0.0, 255.0);
    let quantize = |c: f64| intensity.clamp(255.99 * linear_to_gamma(c)) as u8;
    [
        quantize(pixel_color.x),
        quantize(pixel_color.y),
        quantize(pixel_color.z),
    ]
}

/// Write `image` as plain-text PPM (`P3`), top row first.
pub fn write_ppm<W: Write>(out: &mut W, image: &Image) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", image.width, image.height)?;
    writeln!(out, "255")?;
    for [r, g, b] in &image.pixels {
        writeln!(out, "{} {} {}", r, g, b)?;
    }
    Ok(())
}
