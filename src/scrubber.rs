use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::error::{Result, ScatterError};
use crate::pointer::{Gesture, GestureListener};
use crate::timeline::{Timeline, TimelineConfig};
use crate::units::{Pixels, Seconds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PlaybackState {
    Playing,
    Scrubbing,
    Paused,
}

/// What happens when the pointer lets go of the title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum ReleaseMode {
    #[default]
    Resume,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubberConfig {
    /// Progress gained per pixel dragged to the right
    pub seek_speed: f64,
    pub release: ReleaseMode,
}

impl Default for ScrubberConfig {
    fn default() -> Self {
        Self {
            seek_speed: 0.001,
            release: ReleaseMode::Resume,
        }
    }
}

impl ScrubberConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.seek_speed.is_finite() {
            return Err(ScatterError::Config(format!("seek_speed is not finite: {}", self.seek_speed)));
        }
        Ok(())
    }
}

/// Owns the playhead and decides who moves it: the timeline while playing,
/// the pointer while scrubbing.
pub struct ScrubController {
    timeline: Timeline,
    config: ScrubberConfig,
    state: PlaybackState,
    anchor: Option<Pixels>,
}

impl ScrubController {
    pub fn new(timeline: TimelineConfig, config: ScrubberConfig) -> Self {
        Self {
            timeline: Timeline::new(timeline),
            config,
            state: PlaybackState::Playing,
            anchor: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Linear playhead in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.timeline.playhead()
    }

    pub fn set_progress(&mut self, progress: f32) {
        self.timeline.set_playhead(progress);
    }

    /// Playhead after the timeline's ease, as shown by the animator.
    pub fn eased_progress(&self) -> f32 {
        self.timeline.eased()
    }

    pub fn set_eased_progress(&mut self, progress: f32) {
        self.timeline.set_eased(progress);
    }

    pub fn tick(&mut self, elapsed: Seconds) {
        match self.state {
            PlaybackState::Playing => self.timeline.advance(elapsed),
            PlaybackState::Scrubbing | PlaybackState::Paused => self.timeline.advance_time_scale(elapsed),
        }
    }

    pub fn play(&mut self) {
        if self.state != PlaybackState::Playing {
            self.timeline.resume();
            self.transition(PlaybackState::Playing);
        }
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.transition(PlaybackState::Paused);
        }
    }

    pub fn pointer_down(&mut self, x: Pixels) {
        self.anchor = Some(x);
        if self.state == PlaybackState::Playing {
            self.timeline.stop();
        }
        self.transition(PlaybackState::Scrubbing);
    }

    pub fn pointer_move(&mut self, x: Pixels) {
        if self.state != PlaybackState::Scrubbing {
            return;
        }
        let Some(anchor) = self.anchor.replace(x) else {
            return;
        };
        self.seek(x - anchor);
    }

    pub fn pointer_up(&mut self) {
        if self.state != PlaybackState::Scrubbing {
            return;
        }
        self.anchor = None;
        match self.config.release {
            ReleaseMode::Resume => {
                self.timeline.resume();
                self.transition(PlaybackState::Playing);
            }
            ReleaseMode::Pause => self.transition(PlaybackState::Paused),
        }
    }

    fn seek(&mut self, dx: Pixels) {
        let progress = self.timeline.playhead() as f64 + *dx * self.config.seek_speed;
        self.timeline.set_playhead(progress.clamp(0.0, 1.0) as f32);
    }

    fn transition(&mut self, state: PlaybackState) {
        if self.state != state {
            debug!("Playback {} -> {}", self.state, state);
            self.state = state;
        }
    }
}

impl GestureListener for ScrubController {
    fn gesture(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Grab(x) => self.pointer_down(x),
            Gesture::Drag(x) => self.pointer_move(x),
            Gesture::Release => self.pointer_up(),
        }
    }
}
