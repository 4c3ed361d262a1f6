//! Linear RGB colors used for part materials.

/// Linear RGB triple in [0, 1].
pub type Rgb = [f32; 3];

/// Neutral gray used for assembled parts.
pub const NEUTRAL_GRAY: Rgb = [0.62, 0.63, 0.65];

/// Component-wise linear interpolation between two colors.
#[inline]
#[must_use]
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_endpoints() {
        let a = [0.0, 0.5, 1.0];
        let b = [1.0, 0.5, 0.0];
        assert_eq!(lerp_rgb(a, b, 0.0), a);
        assert_eq!(lerp_rgb(a, b, 1.0), b);
        assert_eq!(lerp_rgb(a, b, 0.5), [0.5, 0.5, 0.5]);
    }
}
