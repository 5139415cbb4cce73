//! Core configuration for cadence-core.

use serde::{Deserialize, Serialize};

/// How transform-affecting steps (move, scale, rotate) combine on one element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformPolicy {
    /// Each step updates its own component and the whole ordered
    /// `translate scale rotate` string is written.
    #[default]
    Compose,
    /// Each step writes only its own component, dropping whatever the
    /// previous transform step left.
    Replace,
}

/// Player configuration.
/// Class names must match the stylesheet that drives the fade transitions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Class marking an element as hidden (added by fade-out).
    pub hidden_class: String,
    /// Class marking an element as visible (added by fade-in).
    pub visible_class: String,
    pub transform_policy: TransformPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hidden_class: "hide".to_string(),
            visible_class: "show".to_string(),
            transform_policy: TransformPolicy::Compose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: Config = serde_json::from_str(r#"{ "hidden_class": "is-hidden" }"#).unwrap();
        assert_eq!(cfg.hidden_class, "is-hidden");
        assert_eq!(cfg.visible_class, "show");
        assert_eq!(cfg.transform_policy, TransformPolicy::Compose);
    }

    #[test]
    fn policy_uses_snake_case() {
        let cfg: Config = serde_json::from_str(r#"{ "transform_policy": "replace" }"#).unwrap();
        assert_eq!(cfg.transform_policy, TransformPolicy::Replace);
    }
}
