use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{Result, ScatterError};
use crate::scatter::easing::{ease_in_out_quad, ease_in_out_quad_inverse, ease_out_quad};
use crate::units::{Seconds, IMMEDIATE};

/// Easing applied to the playhead before it reaches the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
pub enum Ease {
    Linear,
    #[default]
    QuadInOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Ease::Linear => t.clamp(0.0, 1.0),
            Ease::QuadInOut => ease_in_out_quad(t),
        }
    }

    pub fn invert(self, y: f32) -> f32 {
        match self {
            Ease::Linear => y.clamp(0.0, 1.0),
            Ease::QuadInOut => ease_in_out_quad_inverse(y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Repeat {
    #[default]
    Forever,
    /// Number of extra iterations after the first
    Times(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Length of one pass of the playhead from 0 to 1
    pub duration: Seconds,
    pub ease: Ease,
    pub repeat: Repeat,
    /// Pause at either end before the next iteration
    pub repeat_delay: Seconds,
    /// Alternate direction on every iteration
    pub yoyo: bool,
    /// How long the time scale takes to ease to a new target
    pub time_scale_duration: Seconds,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            duration: Seconds(4.0),
            ease: Ease::QuadInOut,
            repeat: Repeat::Forever,
            repeat_delay: Seconds(0.25),
            yoyo: true,
            time_scale_duration: Seconds(2.0),
        }
    }
}

impl TimelineConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() || *self.duration <= 0.0 {
            return Err(ScatterError::Config(format!(
                "timeline duration must be positive: {}",
                *self.duration
            )));
        }
        let named = [
            ("repeat_delay", self.repeat_delay),
            ("time_scale_duration", self.time_scale_duration),
        ];
        for (name, value) in named {
            if !value.is_finite() || *value < 0.0 {
                return Err(ScatterError::Config(format!("{name} must be zero or more: {}", *value)));
            }
        }
        Ok(())
    }
}

/// Most iteration boundaries one call to [`Timeline::advance`] will cross.
/// Whatever time is left after that is dropped.
const MAX_CROSSINGS: u32 = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Time scale easing toward a target value, so playback slows and resumes
/// smoothly instead of stopping dead.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeScaleTween {
    from: f32,
    to: f32,
    elapsed: Seconds,
    duration: Seconds,
}

impl TimeScaleTween {
    pub fn steady(value: f32, duration: Seconds) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: duration,
            duration,
        }
    }

    pub fn value(&self) -> f32 {
        if *self.duration <= 0.0 || self.elapsed >= self.duration {
            return self.to;
        }
        let t = ease_out_quad(*self.elapsed / *self.duration);
        self.from + (self.to - self.from) * t
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn retarget(&mut self, to: f32) {
        self.from = self.value();
        self.to = to;
        self.elapsed = IMMEDIATE;
    }

    pub fn advance(&mut self, dt: Seconds) {
        if self.elapsed < self.duration {
            self.elapsed += dt.frame_delta();
        }
    }
}

/// Autonomous playback of the playhead: ease, repeat, repeat delay and yoyo.
#[derive(Clone, Debug)]
pub struct Timeline {
    config: TimelineConfig,
    playhead: f32,
    direction: Direction,
    hold: Seconds,
    restart_pending: bool,
    iterations: u32,
    finished: bool,
    time_scale: TimeScaleTween,
}

impl Timeline {
    pub fn new(config: TimelineConfig) -> Self {
        Self {
            config,
            playhead: 0.0,
            direction: Direction::Forward,
            hold: IMMEDIATE,
            restart_pending: false,
            iterations: 0,
            finished: false,
            time_scale: TimeScaleTween::steady(1.0, config.time_scale_duration),
        }
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn playhead(&self) -> f32 {
        self.playhead
    }

    /// Jump the playhead, clamped to `[0, 1]`. NaN is ignored.
    pub fn set_playhead(&mut self, playhead: f32) {
        if playhead.is_nan() {
            return;
        }
        self.playhead = playhead.clamp(0.0, 1.0);
        self.hold = IMMEDIATE;
        self.restart_pending = false;
    }

    /// The playhead after easing; this is what the animator shows.
    pub fn eased(&self) -> f32 {
        self.config.ease.apply(self.playhead)
    }

    /// Set the playhead so that it eases to `progress`.
    pub fn set_eased(&mut self, progress: f32) {
        if progress.is_nan() {
            return;
        }
        self.set_playhead(self.config.ease.invert(progress));
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale.value()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_reversed(&self) -> bool {
        self.direction == Direction::Backward
    }

    /// Ease the time scale down to zero.
    pub fn stop(&mut self) {
        self.time_scale.retarget(0.0);
    }

    /// Ease the time scale back up to normal speed.
    pub fn resume(&mut self) {
        self.time_scale.retarget(1.0);
    }

    /// Only the time scale moves; the playhead stays put.
    pub fn advance_time_scale(&mut self, dt: Seconds) {
        self.time_scale.advance(dt);
    }

    pub fn advance(&mut self, dt: Seconds) {
        self.time_scale.advance(dt);
        let duration = *self.config.duration;
        let mut remaining = *dt.frame_delta() * self.time_scale.value();
        if duration <= 0.0 {
            self.playhead = 1.0;
            self.finished = true;
            return;
        }
        let mut crossings = 0;
        while remaining > 0.0 && !self.finished && crossings < MAX_CROSSINGS {
            if *self.hold > 0.0 {
                let used = remaining.min(*self.hold);
                self.hold = Seconds(*self.hold - used);
                remaining -= used;
                continue;
            }
            if self.restart_pending {
                self.restart_pending = false;
                self.playhead = 0.0;
            }
            let step = remaining / duration;
            let to_end = match self.direction {
                Direction::Forward => 1.0 - self.playhead,
                Direction::Backward => self.playhead,
            };
            if step < to_end {
                self.playhead += match self.direction {
                    Direction::Forward => step,
                    Direction::Backward => -step,
                };
                remaining = 0.0;
            } else {
                remaining -= to_end * duration;
                crossings += 1;
                self.playhead = match self.direction {
                    Direction::Forward => 1.0,
                    Direction::Backward => 0.0,
                };
                self.complete_iteration();
            }
        }
    }

    fn complete_iteration(&mut self) {
        if let Repeat::Times(times) = self.config.repeat {
            if self.iterations >= times {
                self.finished = true;
                return;
            }
        }
        self.iterations = self.iterations.saturating_add(1);
        self.hold = self.config.repeat_delay;
        if self.config.yoyo {
            self.direction = match self.direction {
                Direction::Forward => Direction::Backward,
                Direction::Backward => Direction::Forward,
            };
        } else {
            self.restart_pending = true;
        }
    }
}
