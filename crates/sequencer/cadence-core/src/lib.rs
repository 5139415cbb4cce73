//! Cadence Core (host-agnostic)
//!
//! Declarative step sequencing for element animations. A [`StepBuilder`] accumulates ordered
//! steps, a [`Player`] schedules each step's style mutation at its accumulated offset through a
//! [`TimerService`], and the returned [`AnimationHandle`] can stop playback or roll the element
//! back to its pre-play look. The host (browser, tests) supplies the [`Element`] and
//! [`TimerService`] capabilities; actual interpolation is left to CSS transitions.

pub mod animator;
pub mod builder;
pub mod config;
pub mod element;
pub mod error;
pub mod handle;
pub mod headless;
pub mod ids;
pub mod player;
pub mod step;
pub mod stored_sequence;
pub mod timer;
pub mod transform;

// Re-exports for consumers (adapters)
pub use animator::Animator;
pub use builder::StepBuilder;
pub use config::{Config, TransformPolicy};
pub use element::{Element, ElementRef, TargetResolver, TRANSFORM, TRANSITION_DURATION};
pub use error::SequenceError;
pub use handle::{AnimationHandle, PlaybackState};
pub use headless::{Clock, ElementRegistry, ManualTimers, MemoryElement, Mutation, Record};
pub use ids::TimerId;
pub use player::Player;
pub use step::{Effect, Step, StepKind, StepSequence, Translation};
pub use stored_sequence::{parse_sequence_json, parse_stored_sequence_json, StoredSequence};
pub use timer::{IntervalCallback, TimeoutCallback, TimerService};
pub use transform::TransformState;
