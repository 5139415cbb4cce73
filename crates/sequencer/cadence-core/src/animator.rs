//! Top-level entry point: fresh builders plus one-call convenience animations.

use crate::builder::StepBuilder;
use crate::element::ElementRef;
use crate::error::SequenceError;
use crate::handle::AnimationHandle;
use crate::player::Player;
use crate::step::Translation;

/// Wraps a [`Player`] with the common single-step and composite animations.
/// Every call builds its own sequence; nothing is shared between calls.
#[derive(Clone, Debug)]
pub struct Animator {
    player: Player,
}

impl Animator {
    pub fn new(player: Player) -> Self {
        Self { player }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// A fresh, independently owned builder.
    pub fn builder(&self) -> StepBuilder {
        StepBuilder::new()
    }

    pub fn fade_in(&self, element: ElementRef, duration_ms: f64) -> Result<AnimationHandle, SequenceError> {
        StepBuilder::new()
            .add_fade_in(duration_ms)?
            .play(&self.player, element)
    }

    pub fn fade_out(&self, element: ElementRef, duration_ms: f64) -> Result<AnimationHandle, SequenceError> {
        StepBuilder::new()
            .add_fade_out(duration_ms)?
            .play(&self.player, element)
    }

    pub fn move_by(
        &self,
        element: ElementRef,
        duration_ms: f64,
        translation: Translation,
    ) -> Result<AnimationHandle, SequenceError> {
        StepBuilder::new()
            .add_move(duration_ms, translation)?
            .play(&self.player, element)
    }

    pub fn scale(
        &self,
        element: ElementRef,
        duration_ms: f64,
        ratio: f64,
    ) -> Result<AnimationHandle, SequenceError> {
        StepBuilder::new()
            .add_scale(duration_ms, ratio)?
            .play(&self.player, element)
    }

    pub fn rotate(
        &self,
        element: ElementRef,
        duration_ms: f64,
        degrees: f64,
    ) -> Result<AnimationHandle, SequenceError> {
        StepBuilder::new()
            .add_rotate(duration_ms, degrees)?
            .play(&self.player, element)
    }

    pub fn move_and_hide(&self, element: ElementRef, duration_ms: f64) -> Result<AnimationHandle, SequenceError> {
        StepBuilder::new()
            .move_and_hide(duration_ms)?
            .play(&self.player, element)
    }

    pub fn show_and_hide(&self, element: ElementRef, duration_ms: f64) -> Result<AnimationHandle, SequenceError> {
        StepBuilder::new()
            .show_and_hide(duration_ms)?
            .play(&self.player, element)
    }

    /// Pulses until the returned handle is stopped.
    pub fn heart_beating(&self, element: ElementRef) -> Result<AnimationHandle, SequenceError> {
        StepBuilder::new()
            .heart_beating()?
            .play_cycled(&self.player, element)
    }
}
