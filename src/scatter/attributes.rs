use glam::Vec3;

use crate::mesh::face::Face;
use crate::random::RandomSource;
use crate::scatter::{AnimationParams, FaceAnimation};

const CONTROL0_X: (f32, f32) = (40.0, 120.0);
const CONTROL1_X: (f32, f32) = (80.0, 120.0);
const LIFT: (f32, f32) = (0.0, 12.0);
const DEPTH_SPREAD: f32 = 120.0;
const END_X_SPREAD: f32 = 120.0;
const END_Z: (f32, f32) = (-20.0, 20.0);

/// `numerator / denominator`, or nothing when the denominator has collapsed.
fn guarded_ratio(numerator: f32, denominator: f32) -> Option<f32> {
    if denominator == 0.0 {
        return None;
    }
    let ratio = numerator / denominator;
    ratio.is_finite().then_some(ratio)
}

impl FaceAnimation {
    /// Draws are taken in a fixed order so that a seeded source reproduces the
    /// same attributes: duration, stretch, control0, control1, end position.
    pub fn for_face(face: &Face, params: &AnimationParams, random: &mut impl RandomSource) -> Self {
        let AnimationParams {
            max_delay_x,
            max_delay_y,
            min_duration,
            max_duration,
            stretch,
            size,
        } = *params;
        let centroid = face.centroid();

        let delay_x = guarded_ratio(centroid.x, size.width)
            .map(|ratio| (ratio * max_delay_x).max(0.0))
            .unwrap_or(0.0);
        let delay_y = guarded_ratio(centroid.y, size.height)
            .map(|ratio| ((1.0 - ratio) * max_delay_y).max(0.0))
            .unwrap_or(0.0);
        let duration = random.uniform(min_duration, max_duration);
        let delay = delay_x + delay_y + random.uniform(0.0, stretch);

        let control0 = centroid
            + Vec3::new(
                random.uniform(CONTROL0_X.0, CONTROL0_X.1),
                size.height * random.uniform(LIFT.0, LIFT.1),
                random.spread(DEPTH_SPREAD),
            );
        let control1 = centroid
            + Vec3::new(
                -random.uniform(CONTROL1_X.0, CONTROL1_X.1),
                size.height * random.uniform(LIFT.0, LIFT.1),
                random.spread(DEPTH_SPREAD),
            );
        let end_position = centroid
            + Vec3::new(
                random.spread(END_X_SPREAD),
                size.height * random.uniform(LIFT.0, LIFT.1),
                random.uniform(END_Z.0, END_Z.1),
            );

        Self {
            delay,
            duration,
            centroid,
            control0,
            control1,
            end_position,
        }
    }
}

/// One record per face, in face order.
pub fn generate(faces: &[Face], params: &AnimationParams, random: &mut impl RandomSource) -> Vec<FaceAnimation> {
    faces
        .iter()
        .map(|face| FaceAnimation::for_face(face, params, &mut *random))
        .collect()
}

/// Repeat each face record for its three vertices.
pub fn broadcast(animations: &[FaceAnimation]) -> Vec<FaceAnimation> {
    animations
        .iter()
        .flat_map(|animation| [*animation; 3])
        .collect()
}
