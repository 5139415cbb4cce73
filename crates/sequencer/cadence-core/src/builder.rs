//! Chainable step builder.
//!
//! Every `add_*` consumes the builder and hands it back with one more step, so a base builder
//! can be cloned and extended independently:
//!
//! ```
//! use cadence_core::{StepBuilder, Translation};
//!
//! let worry = StepBuilder::new()
//!     .add_move(200.0, Translation::new(80.0, 0.0))?
//!     .add_move(200.0, Translation::new(0.0, 0.0))?
//!     .build();
//! assert_eq!(worry.total_duration_ms(), 400.0);
//! # Ok::<(), cadence_core::SequenceError>(())
//! ```

use crate::element::ElementRef;
use crate::error::SequenceError;
use crate::handle::AnimationHandle;
use crate::player::Player;
use crate::step::{Effect, Step, StepSequence, Translation};

/// Offset used by [`StepBuilder::move_and_hide`].
pub const MOVE_AND_HIDE_OFFSET: Translation = Translation::new(100.0, 20.0);
/// Peak ratio of [`StepBuilder::heart_beating`].
pub const HEART_BEAT_RATIO: f64 = 1.4;
/// Duration of each half of a heart beat; one beat is twice this.
pub const HEART_BEAT_HALF_MS: f64 = 500.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepBuilder {
    sequence: StepSequence,
}

impl StepBuilder {
    /// A fresh, empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue building on top of an existing sequence.
    pub fn from_sequence(sequence: StepSequence) -> Self {
        Self { sequence }
    }

    /// Append a step built from raw parts.
    pub fn add(mut self, duration_ms: f64, effect: Effect) -> Result<Self, SequenceError> {
        self.sequence.push(Step::new(duration_ms, effect)?);
        Ok(self)
    }

    pub fn add_move(self, duration_ms: f64, translation: Translation) -> Result<Self, SequenceError> {
        self.add(duration_ms, Effect::Move { translation })
    }

    pub fn add_scale(self, duration_ms: f64, ratio: f64) -> Result<Self, SequenceError> {
        self.add(duration_ms, Effect::Scale { ratio })
    }

    pub fn add_rotate(self, duration_ms: f64, degrees: f64) -> Result<Self, SequenceError> {
        self.add(duration_ms, Effect::Rotate { degrees })
    }

    pub fn add_fade_in(self, duration_ms: f64) -> Result<Self, SequenceError> {
        self.add(duration_ms, Effect::FadeIn)
    }

    pub fn add_fade_out(self, duration_ms: f64) -> Result<Self, SequenceError> {
        self.add(duration_ms, Effect::FadeOut)
    }

    /// Hold the current look for `duration_ms`.
    pub fn add_delay(self, duration_ms: f64) -> Result<Self, SequenceError> {
        self.add(duration_ms, Effect::Delay)
    }

    /// Slide away, then vanish: move for 40% of `duration_ms`, fade out for the remaining 60%.
    pub fn move_and_hide(self, duration_ms: f64) -> Result<Self, SequenceError> {
        check_total(duration_ms)?;
        self.add_move(duration_ms * 0.4, MOVE_AND_HIDE_OFFSET)?
            .add_fade_out(duration_ms * 0.6)
    }

    /// Reveal, hold, hide: three equal thirds of `duration_ms`.
    pub fn show_and_hide(self, duration_ms: f64) -> Result<Self, SequenceError> {
        check_total(duration_ms)?;
        let third = duration_ms / 3.0;
        self.add_fade_in(third)?.add_delay(third)?.add_fade_out(third)
    }

    /// One beat: scale up then back to rest. Play cycled for a 1s pulse.
    pub fn heart_beating(self) -> Result<Self, SequenceError> {
        self.add_scale(HEART_BEAT_HALF_MS, HEART_BEAT_RATIO)?
            .add_scale(HEART_BEAT_HALF_MS, 1.0)
    }

    pub fn sequence(&self) -> &StepSequence {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn build(self) -> StepSequence {
        self.sequence
    }

    /// Play the accumulated steps once.
    pub fn play(&self, player: &Player, element: ElementRef) -> Result<AnimationHandle, SequenceError> {
        player.play(element, &self.sequence, false)
    }

    pub fn play_cycled(
        &self,
        player: &Player,
        element: ElementRef,
    ) -> Result<AnimationHandle, SequenceError> {
        player.play(element, &self.sequence, true)
    }

    /// Callback for an event source: each call plays the sequence once against the element
    /// the event is bound to.
    pub fn build_handler(
        self,
        player: Player,
    ) -> impl Fn(ElementRef) -> Result<AnimationHandle, SequenceError> {
        let sequence = self.sequence;
        move |element| player.play(element, &sequence, false)
    }
}

// Errors from composites carry the caller's total, not a scaled part.
fn check_total(duration_ms: f64) -> Result<(), SequenceError> {
    crate::error::check_duration(duration_ms).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepKind;

    #[test]
    fn move_and_hide_splits_forty_sixty() {
        let seq = StepBuilder::new().move_and_hide(1000.0).unwrap().build();
        let kinds: Vec<_> = seq.iter().map(Step::kind).collect();
        assert_eq!(kinds, vec![StepKind::Move, StepKind::FadeOut]);
        assert_eq!(seq.steps()[0].duration_ms(), 400.0);
        assert_eq!(seq.steps()[1].duration_ms(), 600.0);
        assert_eq!(
            seq.steps()[0].effect(),
            &Effect::Move {
                translation: Translation::new(100.0, 20.0)
            }
        );
    }

    #[test]
    fn composite_rejects_negative_total() {
        let err = StepBuilder::new().show_and_hide(-9.0).unwrap_err();
        assert_eq!(err, SequenceError::InvalidDuration { duration_ms: -9.0 });
    }
}
