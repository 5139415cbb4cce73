//! JSON loading for step sequences.
//!
//! Accepted shapes:
//! - a bare array of steps: `[{ "type": "fadeIn", "duration": 300 }, ...]`
//! - a stored sequence: `{ "name": "pulse", "cycled": true, "steps": [...] }`
//!
//! Durations are milliseconds and are validated the same way builder input is.

use serde::{Deserialize, Serialize};

use crate::error::SequenceError;
use crate::step::{Step, StepSequence};

/// A named sequence plus the repeat flag it is meant to be played with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredSequence {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cycled: bool,
    pub steps: Vec<Step>,
}

impl StoredSequence {
    pub fn sequence(&self) -> StepSequence {
        let mut seq = StepSequence::new();
        for step in &self.steps {
            seq.push(step.clone());
        }
        seq
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSequence {
    Steps(Vec<Step>),
    Stored(StoredSequence),
}

/// Parse and validate a stored sequence (either accepted shape).
pub fn parse_stored_sequence_json(s: &str) -> Result<StoredSequence, SequenceError> {
    let raw: RawSequence =
        serde_json::from_str(s).map_err(|e| SequenceError::Parse(e.to_string()))?;
    let stored = match raw {
        RawSequence::Steps(steps) => StoredSequence {
            steps,
            ..StoredSequence::default()
        },
        RawSequence::Stored(stored) => stored,
    };
    stored.sequence().validate()?;
    Ok(stored)
}

/// Parse and validate just the steps.
pub fn parse_sequence_json(s: &str) -> Result<StepSequence, SequenceError> {
    parse_stored_sequence_json(s).map(|stored| stored.sequence())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepKind;

    #[test]
    fn bare_array_is_accepted() {
        let seq = parse_sequence_json(
            r#"[{ "type": "scale", "duration": 500, "ratio": 1.4 },
                { "type": "scale", "duration": 500, "ratio": 1 }]"#,
        )
        .unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.total_duration_ms(), 1000.0);
    }

    #[test]
    fn stored_shape_keeps_name_and_cycle_flag() {
        let stored = parse_stored_sequence_json(
            r#"{ "name": "pulse", "cycled": true,
                 "steps": [{ "type": "rotate", "duration": 250, "degrees": 90 }] }"#,
        )
        .unwrap();
        assert_eq!(stored.name.as_deref(), Some("pulse"));
        assert!(stored.cycled);
        assert_eq!(stored.steps[0].kind(), StepKind::Rotate);
    }

    #[test]
    fn negative_duration_is_rejected() {
        let err = parse_sequence_json(r#"[{ "type": "delay", "duration": -20 }]"#).unwrap_err();
        assert_eq!(err, SequenceError::InvalidDuration { duration_ms: -20.0 });
    }

    #[test]
    fn unknown_step_type_is_a_parse_error() {
        let err = parse_sequence_json(r#"[{ "type": "blink", "duration": 20 }]"#).unwrap_err();
        assert!(matches!(err, SequenceError::Parse(_)));
    }
}
