//! Per-face scatter animation.
//!
//! Every face of the title gets its own delay, duration and Bezier flight path,
//! computed once. A single scalar time then moves all faces at once.

use glam::Vec3;
use serde::Serialize;

pub mod attributes;
pub mod easing;
pub mod params;
pub mod transform;
pub mod vertex;


pub use params::AnimationParams;

/// Animation attributes of one face, identical for its three vertices.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FaceAnimation {
    pub delay: f32,
    pub duration: f32,
    pub centroid: Vec3,
    pub control0: Vec3,
    pub control1: Vec3,
    pub end_position: Vec3,
}

impl FaceAnimation {
    pub fn is_finite(&self) -> bool {
        self.delay.is_finite()
            && self.duration.is_finite()
            && self.centroid.is_finite()
            && self.control0.is_finite()
            && self.control1.is_finite()
            && self.end_position.is_finite()
    }

    /// Time at which this face has fully scattered.
    pub fn finish(&self) -> f32 {
        self.delay + self.duration
    }
}
