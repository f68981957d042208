/// Clamp `v` into `[lo, hi]`. NaN maps to `lo`.
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() {
        return lo;
    }
    v.max(lo).min(hi)
}

pub fn clamp01(v: f64) -> f64 {
    clamp(v, 0.0, 1.0)
}

/// Unclamped linear interpolation: `t = 0` gives `a`, `t = 1` gives `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
