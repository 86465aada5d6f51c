use std::cell::RefCell;
use std::rc::Rc;

use glam::{Mat4, Vec3};
use log::{info, warn};

use crate::clock::AnimationClock;
use crate::config::ScatterConfig;
use crate::error::Result;
use crate::mesh::TextMesh;
use crate::random::RandomSource;
use crate::scatter::attributes::generate;
use crate::scatter::transform::{evaluate, evaluate_all};
use crate::scatter::vertex::ScatterVertex;
use crate::scatter::{AnimationParams, FaceAnimation};
use crate::scrubber::{PlaybackState, ScrubController};
use crate::units::Seconds;

/// What a renderer needs to draw the title: the attribute buffer, where the
/// title sits, and the single time uniform for this frame.
pub trait Renderable {
    fn vertices(&self) -> &[ScatterVertex];
    fn transform(&self) -> Mat4;
    fn time_uniform(&self) -> f32;
}

/// A title whose faces scatter and reassemble as progress moves.
///
/// Attributes are computed once in [`FaceScatterAnimator::attach`]; afterwards
/// progress is the only thing that changes.
pub struct FaceScatterAnimator {
    mesh: TextMesh,
    params: AnimationParams,
    animations: Vec<FaceAnimation>,
    vertices: Vec<ScatterVertex>,
    rest: Vec<Vec3>,
    transform: Mat4,
    clock: AnimationClock,
    controller: Rc<RefCell<ScrubController>>,
}

impl FaceScatterAnimator {
    pub fn attach(mesh: &TextMesh, config: &ScatterConfig, random: &mut impl RandomSource) -> Result<Self> {
        let params = config.params.with_size(mesh.size());
        params.validate()?;
        config.timeline.validate()?;
        config.scrubber.validate()?;
        for degeneracy in mesh.degeneracies() {
            warn!("Animating anyway, {degeneracy}: delays on that axis fall back to zero");
        }
        let animations = generate(mesh.faces(), &params, random);
        let vertices = ScatterVertex::buffer(mesh.faces(), &animations);
        let clock = AnimationClock::new(&params);
        info!(
            "Attached {} faces, {} vertices, total duration {:.2}s",
            mesh.face_count(),
            vertices.len(),
            *clock.total_duration()
        );
        let controller = ScrubController::new(config.timeline, config.scrubber);
        let mut animator = Self {
            mesh: mesh.clone(),
            params,
            animations,
            vertices,
            rest: mesh.rest_positions().collect(),
            transform: Mat4::from_translation(config.translation),
            clock,
            controller: Rc::new(RefCell::new(controller)),
        };
        animator.sync_clock();
        Ok(animator)
    }

    pub fn set_progress(&mut self, progress: f32) {
        self.clock.set_progress(progress);
        self.controller.borrow_mut().set_eased_progress(self.clock.progress());
    }

    /// Eased progress in `[0, 1]`. Drags move the linear playhead behind it,
    /// see [`ScrubController::progress`].
    pub fn progress(&self) -> f32 {
        self.clock.progress()
    }

    /// Advance autonomous playback. While scrubbing or paused only the
    /// timeline's time scale moves.
    pub fn tick(&mut self, elapsed: Seconds) {
        self.controller.borrow_mut().tick(elapsed);
        self.sync_clock();
    }

    /// Pick up progress written by the pointer since the last tick.
    pub fn sync_clock(&mut self) {
        let progress = self.controller.borrow().eased_progress();
        self.clock.set_progress(progress);
    }

    pub fn time(&self) -> Seconds {
        self.clock.time()
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn state(&self) -> PlaybackState {
        self.controller.borrow().state()
    }

    /// Shared handle for subscribing the controller to pointer input.
    pub fn controller(&self) -> Rc<RefCell<ScrubController>> {
        Rc::clone(&self.controller)
    }

    pub fn play(&mut self) {
        self.controller.borrow_mut().play();
    }

    pub fn pause(&mut self) {
        self.controller.borrow_mut().pause();
    }

    pub fn mesh(&self) -> &TextMesh {
        &self.mesh
    }

    pub fn params(&self) -> &AnimationParams {
        &self.params
    }

    pub fn animations(&self) -> &[FaceAnimation] {
        &self.animations
    }

    /// Evaluated position of one vertex at the current time.
    pub fn vertex_position(&self, face: usize, corner: usize) -> Option<Vec3> {
        let animation = self.animations.get(face)?;
        let rest = self.mesh.faces().get(face)?.vertices.get(corner)?;
        Some(evaluate(*rest, animation, *self.time()))
    }

    /// Evaluate every vertex at the current time into `out`, resizing it as needed.
    pub fn positions_into(&self, out: &mut Vec<Vec3>) {
        out.resize(self.rest.len(), Vec3::ZERO);
        evaluate_all(&self.rest, &self.animations, *self.time(), out);
    }

    pub fn positions(&self) -> Vec<Vec3> {
        let mut out = Vec::with_capacity(self.rest.len());
        self.positions_into(&mut out);
        out
    }
}

impl Renderable for FaceScatterAnimator {
    fn vertices(&self) -> &[ScatterVertex] {
        &self.vertices
    }

    fn transform(&self) -> Mat4 {
        self.transform
    }

    fn time_uniform(&self) -> f32 {
        *self.time()
    }
}
