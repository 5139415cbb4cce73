//! Step data model: one timed style mutation and ordered sequences of them.

use serde::{Deserialize, Serialize};

use crate::error::{check_duration, SequenceError};

/// Pixel offsets for a move step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

impl Translation {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Discriminant of a step, without its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
    Move,
    Scale,
    Rotate,
    FadeIn,
    FadeOut,
    Delay,
}

/// Effect-specific parameters. Serialized with a `type` tag,
/// e.g. `{ "type": "scale", "ratio": 1.4 }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    Move { translation: Translation },
    Scale { ratio: f64 },
    Rotate { degrees: f64 },
    FadeIn,
    FadeOut,
    /// Holds the current look; consumes timeline space only.
    Delay,
}

impl Effect {
    pub fn kind(&self) -> StepKind {
        match self {
            Effect::Move { .. } => StepKind::Move,
            Effect::Scale { .. } => StepKind::Scale,
            Effect::Rotate { .. } => StepKind::Rotate,
            Effect::FadeIn => StepKind::FadeIn,
            Effect::FadeOut => StepKind::FadeOut,
            Effect::Delay => StepKind::Delay,
        }
    }
}

/// One scheduled unit of work. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(rename = "duration")]
    duration_ms: f64,
    #[serde(flatten)]
    effect: Effect,
}

impl Step {
    /// Build a step, rejecting negative or non-finite durations.
    pub fn new(duration_ms: f64, effect: Effect) -> Result<Self, SequenceError> {
        Ok(Self {
            duration_ms: check_duration(duration_ms)?,
            effect,
        })
    }

    #[inline]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    #[inline]
    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    #[inline]
    pub fn kind(&self) -> StepKind {
        self.effect.kind()
    }
}

/// Ordered steps. Insertion order is playback order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Length of one pass; also the repeat period when cycling.
    pub fn total_duration_ms(&self) -> f64 {
        self.steps.iter().map(Step::duration_ms).sum()
    }

    /// Start offset of every step within one pass: `[0, d0, d0 + d1, ...]`.
    pub fn offsets(&self) -> Vec<f64> {
        let mut offset = 0.0;
        self.steps
            .iter()
            .map(|step| {
                let start = offset;
                offset += step.duration_ms;
                start
            })
            .collect()
    }

    /// Re-check durations. Needed for sequences that did not come through a builder
    /// (e.g. deserialized ones).
    pub fn validate(&self) -> Result<(), SequenceError> {
        for step in &self.steps {
            check_duration(step.duration_ms)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SequenceError> {
        serde_json::to_string(self).map_err(|e| SequenceError::Parse(e.to_string()))
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
