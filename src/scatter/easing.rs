use glam::Vec3;

/// Cubic ease-out in the `(time, begin, change, duration)` form used by shaders.
/// A zero duration is already complete.
pub fn ease_out_cubic(time: f32, begin: f32, change: f32, duration: f32) -> f32 {
    if !(duration > 0.0) {
        return begin + change;
    }
    let fraction = (time / duration).clamp(0.0, 1.0);
    let remaining = 1.0 - fraction;
    begin + change * (1.0 - remaining * remaining * remaining)
}

/// Quadratic ease-in-out on `[0, 1]`.
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Inverse of [`ease_in_out_quad`]: the input that eases to `y`.
pub fn ease_in_out_quad_inverse(y: f32) -> f32 {
    let y = y.clamp(0.0, 1.0);
    if y < 0.5 {
        (y / 2.0).sqrt()
    } else {
        1.0 - ((1.0 - y) / 2.0).sqrt()
    }
}

/// Quadratic ease-out on `[0, 1]`.
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Bernstein form of a cubic Bezier through `p0`, `c0`, `c1`, `p1`.
pub fn cubic_bezier(p0: Vec3, c0: Vec3, c1: Vec3, p1: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    let uu = u * u;
    let tt = t * t;
    p0 * (uu * u) + c0 * (3.0 * uu * t) + c1 * (3.0 * u * tt) + p1 * (tt * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0, 0.0, 1.0, 5.0), 0.0);
        assert_eq!(ease_out_cubic(5.0, 0.0, 1.0, 5.0), 1.0);
    }

    #[test]
    fn ease_out_cubic_is_monotonic() {
        let duration = 3.7;
        let mut previous = 0.0;
        for step in 0..=1000 {
            let time = duration * step as f32 / 1000.0;
            let eased = ease_out_cubic(time, 0.0, 1.0, duration);
            assert!(eased >= previous, "eased dropped from {previous} to {eased} at {time}");
            previous = eased;
        }
    }

    #[test]
    fn ease_out_cubic_zero_duration_is_done() {
        assert_eq!(ease_out_cubic(0.0, 0.0, 1.0, 0.0), 1.0);
    }

    #[test]
    fn ease_out_cubic_front_loaded() {
        assert!(ease_out_cubic(1.0, 0.0, 1.0, 2.0) > 0.5);
    }

    #[test]
    fn ease_in_out_quad_symmetry() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        let sum = ease_in_out_quad(0.3) + ease_in_out_quad(0.7);
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ease_in_out_quad_inverse_round_trips() {
        for step in 0..=20 {
            let t = step as f32 / 20.0;
            let back = ease_in_out_quad_inverse(ease_in_out_quad(t));
            assert!((back - t).abs() < 1e-3, "{t} came back as {back}");
        }
    }

    #[test]
    fn bezier_hits_end_points() {
        let p0 = Vec3::new(1.0, 2.0, 3.0);
        let c0 = Vec3::new(50.0, 0.0, 0.0);
        let c1 = Vec3::new(-50.0, 10.0, 0.0);
        let p1 = Vec3::new(7.0, 8.0, 9.0);
        assert_eq!(cubic_bezier(p0, c0, c1, p1, 0.0), p0);
        assert_eq!(cubic_bezier(p0, c0, c1, p1, 1.0), p1);
        let mid = cubic_bezier(Vec3::ZERO, Vec3::ZERO, Vec3::X * 4.0, Vec3::X * 4.0, 0.5);
        assert!((mid.x - 2.0).abs() < 1e-6);
    }
}
