use glam::Vec3;

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::scatter::easing::{cubic_bezier, ease_out_cubic};
use crate::scatter::FaceAnimation;

/// Eased progress of one face at the global `time`, in `[0, 1]`.
pub fn face_progress(animation: &FaceAnimation, time: f32) -> f32 {
    let local_time = (time - animation.delay).clamp(0.0, animation.duration.max(0.0));
    ease_out_cubic(local_time, 0.0, 1.0, animation.duration)
}

/// Position of a vertex at the eased face progress `t`.
///
/// The face shrinks toward its centroid while the centroid flies along the
/// Bezier path, which starts at zero offset and ends at `end_position`.
pub fn scattered_position(rest: Vec3, animation: &FaceAnimation, t: f32) -> Vec3 {
    let local = rest - animation.centroid;
    let shrunk = local * (1.0 - t) + animation.centroid;
    let scattered = cubic_bezier(
        Vec3::ZERO,
        animation.control0,
        animation.control1,
        animation.end_position,
        t,
    );
    shrunk + scattered
}

/// Position of a vertex at the global `time`.
pub fn evaluate(rest: Vec3, animation: &FaceAnimation, time: f32) -> Vec3 {
    scattered_position(rest, animation, face_progress(animation, time))
}

/// Evaluate every vertex. `animations` holds one record per face and
/// `rest` three positions per face; `out` receives one position per vertex.
pub fn evaluate_all(rest: &[Vec3], animations: &[FaceAnimation], time: f32, out: &mut [Vec3]) {
    debug_assert_eq!(rest.len(), animations.len() * 3);
    debug_assert_eq!(out.len(), rest.len());

    let evaluate_face = |(animation, (rest, out)): (&FaceAnimation, (&[Vec3], &mut [Vec3]))| {
        let t = face_progress(animation, time);
        for (position, rest) in out.iter_mut().zip(rest) {
            *position = scattered_position(*rest, animation, t);
        }
    };

    #[cfg(not(target_arch = "wasm32"))]
    animations
        .par_iter()
        .zip(rest.par_chunks(3).zip(out.par_chunks_mut(3)))
        .for_each(evaluate_face);

    #[cfg(target_arch = "wasm32")]
    animations
        .iter()
        .zip(rest.chunks(3).zip(out.chunks_mut(3)))
        .for_each(evaluate_face);
}
