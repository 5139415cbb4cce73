//! Element capability consumed by the player.
//!
//! The core never inspects an element beyond these calls. Adapters (web, headless) implement
//! [`Element`]; DOM handles are shared and internally mutable, so every method takes `&self`.

use std::rc::Rc;

/// Style property written with each step's duration.
pub const TRANSITION_DURATION: &str = "transition-duration";
/// Style property written by move/scale/rotate steps.
pub const TRANSFORM: &str = "transform";

pub trait Element {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Write a style property, or remove it when `value` is `None`.
    fn set_style(&self, property: &str, value: Option<&str>);
}

/// Shared handle to an element; cloned into every scheduled callback.
pub type ElementRef = Rc<dyn Element>;

/// Resolves page-level keys (e.g. element ids) to elements.
/// Adapters implement this; an unresolved key fails playback with `MissingTarget`.
pub trait TargetResolver {
    fn resolve(&self, key: &str) -> Option<ElementRef>;
}

impl<F> TargetResolver for F
where
    F: Fn(&str) -> Option<ElementRef>,
{
    fn resolve(&self, key: &str) -> Option<ElementRef> {
        self(key)
    }
}
