use crate::scatter::AnimationParams;
use crate::units::Seconds;

/// Maps normalized progress onto the shader's time uniform.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationClock {
    total_duration: Seconds,
    progress: f32,
}

impl AnimationClock {
    pub fn new(params: &AnimationParams) -> Self {
        Self {
            total_duration: params.total_duration(),
            progress: 0.0,
        }
    }

    /// Stored progress always stays in `[0, 1]`. NaN is ignored.
    pub fn set_progress(&mut self, progress: f32) {
        if progress.is_nan() {
            return;
        }
        self.progress = progress.clamp(0.0, 1.0);
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn total_duration(&self) -> Seconds {
        self.total_duration
    }

    pub fn time(&self) -> Seconds {
        self.total_duration * self.progress
    }

    /// Progress at which the clock reads `time`, clamped to `[0, 1]`.
    pub fn progress_at(&self, time: Seconds) -> f32 {
        if *self.total_duration <= 0.0 {
            return 0.0;
        }
        (*time / *self.total_duration).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_always_clamped() {
        let mut clock = AnimationClock::new(&AnimationParams::default());
        let inputs = [
            0.5,
            -3.0,
            7.0,
            f32::NAN,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::MIN_POSITIVE,
            1.0 + f32::EPSILON,
            -0.0,
        ];
        for input in inputs {
            clock.set_progress(input);
            let progress = clock.progress();
            assert!((0.0..=1.0).contains(&progress), "{input} stored as {progress}");
        }
    }

    #[test]
    fn nan_keeps_previous_progress() {
        let mut clock = AnimationClock::new(&AnimationParams::default());
        clock.set_progress(0.25);
        clock.set_progress(f32::NAN);
        assert_eq!(clock.progress(), 0.25);
    }

    #[test]
    fn time_scales_with_total_duration() {
        let mut clock = AnimationClock::new(&AnimationParams::default());
        clock.set_progress(1.0);
        assert_eq!(clock.time(), Seconds(7.25));
        clock.set_progress(0.5);
        assert_eq!(clock.time(), Seconds(3.625));
        assert_eq!(clock.progress_at(Seconds(3.625)), 0.5);
    }
}
