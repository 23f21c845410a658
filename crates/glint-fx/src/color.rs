#![forbid(unsafe_code)]

//! Color utilities for the effect components.

/// An RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Interpolate between two colors.
#[must_use]
pub fn lerp_color(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    Rgb::new(
        (f64::from(a.r) + (f64::from(b.r) - f64::from(a.r)) * t).round() as u8,
        (f64::from(a.g) + (f64::from(b.g) - f64::from(a.g)) * t).round() as u8,
        (f64::from(a.b) + (f64::from(b.b) - f64::from(a.b)) * t).round() as u8,
    )
}

/// Quadratic ease-in-out: subtle S-curve, slow start and end.
#[must_use]
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        let a = Rgb::new(0, 100, 200);
        let b = Rgb::new(255, 0, 50);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint_rounds() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(255, 101, 1);
        let mid = lerp_color(a, b, 0.5);
        assert_eq!(mid, Rgb::new(128, 51, 1));
    }

    #[test]
    fn lerp_clamps_t() {
        let a = Rgb::new(10, 10, 10);
        let b = Rgb::new(20, 20, 20);
        assert_eq!(lerp_color(a, b, -1.0), a);
        assert_eq!(lerp_color(a, b, 2.0), b);
    }

    #[test]
    fn ease_fixes_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn ease_is_slow_at_the_ends() {
        assert!(ease_in_out_quad(0.1) < 0.1);
        assert!(ease_in_out_quad(0.9) > 0.9);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_in_out_quad(f64::from(i) / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }
}
