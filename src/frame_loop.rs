use instant::Instant;

use crate::animator::FaceScatterAnimator;
use crate::units::{Seconds, IMMEDIATE};

/// Longest step a single frame may take, so a backgrounded tab does not
/// fast-forward the title on return.
const MAX_FRAME: Seconds = Seconds(0.25);

/// The one scheduler that ticks the animator. Hosts call [`FrameLoop::frame`]
/// from their redraw callback; tests call [`FrameLoop::tick`] directly.
pub struct FrameLoop {
    animator: FaceScatterAnimator,
    last_frame: Option<Instant>,
    frames: u64,
    elapsed: Seconds,
}

impl FrameLoop {
    pub fn new(animator: FaceScatterAnimator) -> Self {
        Self {
            animator,
            last_frame: None,
            frames: 0,
            elapsed: IMMEDIATE,
        }
    }

    /// Advance by the wall-clock time since the previous frame.
    pub fn frame(&mut self, now: Instant) -> f32 {
        let dt = match self.last_frame.replace(now) {
            Some(last) if now > last => Seconds(now.duration_since(last).as_secs_f32()),
            _ => IMMEDIATE,
        };
        self.tick(dt)
    }

    /// Advance by `dt` and return the time uniform for this frame.
    pub fn tick(&mut self, dt: Seconds) -> f32 {
        let dt = Seconds(dt.frame_delta().0.min(MAX_FRAME.0));
        self.animator.tick(dt);
        self.frames += 1;
        self.elapsed += dt;
        *self.animator.time()
    }

    /// Run `frames` fixed steps of `dt`, handing each frame to `visit`.
    pub fn run_fixed(&mut self, frames: u64, dt: Seconds, mut visit: impl FnMut(u64, &FaceScatterAnimator)) {
        for _ in 0..frames {
            self.tick(dt);
            visit(self.frames, &self.animator);
        }
    }

    pub fn animator(&self) -> &FaceScatterAnimator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut FaceScatterAnimator {
        &mut self.animator
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed(&self) -> Seconds {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use glam::Vec3;

    use super::*;
    use crate::config::ScatterConfig;
    use crate::mesh::TextMesh;
    use crate::random::SeededRandom;

    fn frame_loop() -> FrameLoop {
        let mesh = TextMesh::from_faces([[Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 10.0, 0.0)]]);
        let animator = FaceScatterAnimator::attach(&mesh, &ScatterConfig::default(), &mut SeededRandom::new(3)).unwrap();
        FrameLoop::new(animator)
    }

    #[test]
    fn manual_ticks_are_deterministic() {
        let mut a = frame_loop();
        let mut b = frame_loop();
        for _ in 0..120 {
            assert_eq!(a.tick(Seconds(1.0 / 60.0)), b.tick(Seconds(1.0 / 60.0)));
        }
        assert_eq!(a.frames(), 120);
        assert!((*a.elapsed() - 2.0).abs() < 1e-3);
    }

    #[test]
    fn first_frame_does_not_advance() {
        let mut frame_loop = frame_loop();
        let start = Instant::now();
        assert_eq!(frame_loop.frame(start), 0.0);
        frame_loop.frame(start + Duration::from_millis(100));
        assert!((*frame_loop.elapsed() - 0.1).abs() < 1e-4);
    }

    #[test]
    fn frame_from_the_past_does_not_advance() {
        let mut frame_loop = frame_loop();
        let start = Instant::now();
        frame_loop.frame(start + Duration::from_millis(100));
        frame_loop.frame(start);
        assert_eq!(frame_loop.elapsed(), IMMEDIATE);
        assert_eq!(frame_loop.frames(), 2);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut frame_loop = frame_loop();
        frame_loop.tick(Seconds(30.0));
        assert_eq!(frame_loop.elapsed(), MAX_FRAME);
    }

    #[test]
    fn run_fixed_visits_every_frame() {
        let mut frame_loop = frame_loop();
        let mut visited = Vec::new();
        frame_loop.run_fixed(5, Seconds(0.1), |frame, animator| visited.push((frame, animator.progress())));
        assert_eq!(visited.len(), 5);
        assert_eq!(visited[4].0, 5);
        assert!(visited.windows(2).all(|pair| pair[1].1 >= pair[0].1));
    }
}
