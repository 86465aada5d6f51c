//! Scatter animation for 3D typographic titles.
//!
//! A triangulated title is split into independent faces. Each face gets a
//! delay, a duration and a Bezier flight path once, up front; from then on a
//! single progress value, driven by a looping timeline or by dragging,
//! sweeps every face from the assembled title out to its scattered position
//! and back.

pub mod animator;
pub mod clock;
pub mod config;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod export;
pub mod frame_loop;
pub mod mesh;
pub mod pointer;
pub mod random;
pub mod scatter;
pub mod scrubber;
pub mod timeline;
pub mod units;

pub use animator::{FaceScatterAnimator, Renderable};
pub use clock::AnimationClock;
pub use config::ScatterConfig;
pub use error::{Degeneracy, Result, ScatterError};
pub use frame_loop::FrameLoop;
pub use mesh::{face::Face, Size, TextMesh};
pub use pointer::{Gesture, GestureListener, PointerEvent, PointerHandler, Subscription};
pub use random::{RandomSource, RngSource, SeededRandom};
pub use scatter::{AnimationParams, FaceAnimation};
pub use scrubber::{PlaybackState, ReleaseMode, ScrubController, ScrubberConfig};
pub use timeline::{Ease, Repeat, Timeline, TimelineConfig};
pub use units::{Pixels, Seconds};
