use crate::rtweekend::*;

pub trait Texture: Send + Sync {
    fn value(&self, p: Point3) -> Color;
}

pub struct ConstantTexture {
    color: Color,
}

impl ConstantTexture {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Texture for ConstantTexture {
    fn value(&self, _p: Point3) -> Color {
        self.color
    }
}

/// Solid 3D checker keyed on the sign of `sin(5x) sin(5y) sin(5z)` at the
/// world-space hit point.
pub struct CheckerTexture {
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
}

impl CheckerTexture {
    pub fn new(even: Arc<dyn Texture>, odd: Arc<dyn Texture>) -> Self {
        Self { even, odd }
    }
}

impl Texture for CheckerTexture {
    fn value(&self, p: Point3) -> Color {
        let sines = (5.0 * p.x).sin() * (5.0 * p.y).sin() * (5.0 * p.z).sin();
        if sines < 0.0 {
            self.odd.value(p)
        } else {
            self.even.value(p)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> CheckerTexture {
        CheckerTexture::new(
            Arc::new(ConstantTexture::new(Color::splat(0.3))),
            Arc::new(ConstantTexture::new(Color::splat(0.9))),
        )
    }

    #[test]
    fn constant_ignores_position() {
        let tex = ConstantTexture::new(Color::new(0.1, 0.2, 0.3));
        assert_eq!(tex.value(Point3::new(4.0, -2.0, 7.0)), Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn checker_alternates_on_sine_sign() {
        let tex = checker();
        let q = PI / 10.0;
        assert_eq!(tex.value(Point3::new(q, q, q)), Color::splat(0.3));
        assert_eq!(tex.value(Point3::new(-q, q, q)), Color::splat(0.9));
        assert_eq!(tex.value(Point3::new(-q, -q, q)), Color::splat(0.3));
        assert_eq!(tex.value(Point3::new(-q, -q, -q)), Color::splat(0.9));
    }

    #[test]
    fn zero_product_counts_as_even() {
        assert_eq!(checker().value(Point3::zero()), Color::splat(0.3));
    }
}
