//! CSS transform rendering for move/scale/rotate steps.
//!
//! Components render in the fixed order `translate(..) scale(..) rotate(..)`, space separated;
//! absent components are omitted rather than zeroed.

use crate::config::TransformPolicy;
use crate::step::{Effect, Translation};

/// Transform components currently applied to one element by one handle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformState {
    pub translation: Option<Translation>,
    pub ratio: Option<f64>,
    pub rotation: Option<f64>,
}

impl TransformState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.translation.is_none() && self.ratio.is_none() && self.rotation.is_none()
    }

    /// Fold a transform-affecting effect into the state and return the string to write.
    /// Returns `None` for effects that do not touch the transform.
    pub fn apply(&mut self, effect: &Effect, policy: TransformPolicy) -> Option<String> {
        let mut next = match policy {
            TransformPolicy::Compose => *self,
            TransformPolicy::Replace => TransformState::default(),
        };
        match effect {
            Effect::Move { translation } => next.translation = Some(*translation),
            Effect::Scale { ratio } => next.ratio = Some(*ratio),
            Effect::Rotate { degrees } => next.rotation = Some(*degrees),
            Effect::FadeIn | Effect::FadeOut | Effect::Delay => return None,
        }
        *self = next;
        Some(self.render())
    }

    pub fn render(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if let Some(t) = self.translation {
            parts.push(format!("translate({}px,{}px)", t.x, t.y));
        }
        if let Some(ratio) = self.ratio {
            parts.push(format!("scale({ratio})"));
        }
        if let Some(degrees) = self.rotation {
            parts.push(format!("rotate({degrees}deg)"));
        }
        parts.join(" ")
    }

    pub fn clear(&mut self) {
        *self = TransformState::default();
    }
}

/// `transition-duration` value for a step duration.
pub fn transition_duration(duration_ms: f64) -> String {
    format!("{duration_ms}ms")
}
