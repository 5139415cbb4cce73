//! DOM element capability over `web_sys::HtmlElement`.

use std::rc::Rc;

use cadence_core::{Element, ElementRef, SequenceError, TargetResolver};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

pub struct DomElement {
    el: HtmlElement,
}

impl DomElement {
    pub fn new(el: HtmlElement) -> Self {
        Self { el }
    }

    /// Accept any JS value that is an `HTMLElement`; anything else is a missing target.
    pub fn from_js(value: JsValue) -> Result<Self, SequenceError> {
        if value.is_undefined() || value.is_null() {
            return Err(SequenceError::missing_target("element is null/undefined"));
        }
        value
            .dyn_into::<HtmlElement>()
            .map(Self::new)
            .map_err(|_| SequenceError::missing_target("value is not an HTMLElement"))
    }

    pub fn into_ref(self) -> ElementRef {
        Rc::new(self)
    }

    pub fn html(&self) -> &HtmlElement {
        &self.el
    }
}

impl Element for DomElement {
    fn has_class(&self, class: &str) -> bool {
        self.el.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.el.class_list().add_1(class) {
            warn!("cadence: add class '{class}' rejected: {e:?}");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.el.class_list().remove_1(class) {
            warn!("cadence: remove class '{class}' rejected: {e:?}");
        }
    }

    fn set_style(&self, property: &str, value: Option<&str>) {
        let style = self.el.style();
        let result = match value {
            Some(v) => style.set_property(property, v),
            None => style.remove_property(property).map(|_| ()),
        };
        if let Err(e) = result {
            warn!("cadence: style '{property}' write rejected: {e:?}");
        }
    }
}

/// Resolves element ids in a document.
pub struct DocumentResolver {
    document: Document,
}

impl DocumentResolver {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Resolver for the global window's document, if there is one.
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }
}

impl TargetResolver for DocumentResolver {
    fn resolve(&self, key: &str) -> Option<ElementRef> {
        let el = self.document.get_element_by_id(key)?;
        let html = el.dyn_into::<HtmlElement>().ok()?;
        Some(DomElement::new(html).into_ref())
    }
}
