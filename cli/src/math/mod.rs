pub mod bresenham;

/// Blends `color` over `base` with the given opacity.
pub fn blend([r1, g1, b1]: [u8; 3], [r2, g2, b2]: [u8; 3], alpha: f32) -> [u8; 3] {
    let mix = |a: u8, b: u8| (a as f32 * (1.0 - alpha) + b as f32 * alpha).round() as u8;
    [mix(r1, r2), mix(g1, g2), mix(b1, b2)]
}

/// Linearly maps `x` from the range `[in_min, in_max]` to `[out_min,
/// out_max]`.
pub fn remap(x: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if in_max == in_min {
        return out_min;
    }
    out_min + (x - in_min) / (in_max - in_min) * (out_max - out_min)
}
