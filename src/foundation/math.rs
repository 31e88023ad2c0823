use crate::foundation::core::{Point, Size};

/// Linear interpolation; `t` is not clamped. Exact at `t == 0` and `t == 1`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

pub(crate) fn lerp_size(a: Size, b: Size, t: f64) -> Size {
    Size::new(lerp(a.width, b.width, t), lerp(a.height, b.height, t))
}

pub(crate) fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Rounds a non-negative pixel extent up to a whole pixel.
pub(crate) fn ceil_px(v: f64) -> u32 {
    if !v.is_finite() || v <= 0.0 {
        return 0;
    }
    let c = v.ceil();
    if c >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        c as u32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
