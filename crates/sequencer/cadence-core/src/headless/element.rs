use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use crate::element::{Element, ElementRef, TargetResolver};

use super::timers::Clock;

/// One observed write.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    AddClass(String),
    RemoveClass(String),
    SetStyle {
        property: String,
        value: Option<String>,
    },
}

/// A mutation stamped with the virtual time it happened at.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub at_ms: f64,
    pub mutation: Mutation,
}

/// Element kept entirely in memory. Every write is applied and appended to a log.
#[derive(Debug, Default)]
pub struct MemoryElement {
    classes: RefCell<BTreeSet<String>>,
    styles: RefCell<BTreeMap<String, String>>,
    log: RefCell<Vec<Record>>,
    clock: Option<Clock>,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp recorded mutations with `clock`'s current time.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            clock: Some(clock),
            ..Self::default()
        }
    }

    /// Start out carrying `classes` (not logged).
    pub fn with_classes<I, S>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes
            .borrow_mut()
            .extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn into_ref(self) -> Rc<Self> {
        Rc::new(self)
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }

    pub fn records(&self) -> Vec<Record> {
        self.log.borrow().clone()
    }

    /// Style writes to `property`, as `(at_ms, value)`.
    pub fn style_writes(&self, property: &str) -> Vec<(f64, Option<String>)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|r| match &r.mutation {
                Mutation::SetStyle { property: p, value } if p == property => {
                    Some((r.at_ms, value.clone()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn clear_log(&self) {
        self.log.borrow_mut().clear();
    }

    fn record(&self, mutation: Mutation) {
        let at_ms = self.clock.as_ref().map_or(0.0, Clock::now_ms);
        self.log.borrow_mut().push(Record { at_ms, mutation });
    }
}

impl Element for MemoryElement {
    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
        self.record(Mutation::AddClass(class.to_string()));
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
        self.record(Mutation::RemoveClass(class.to_string()));
    }

    fn set_style(&self, property: &str, value: Option<&str>) {
        {
            let mut styles = self.styles.borrow_mut();
            match value {
                Some(v) => {
                    styles.insert(property.to_string(), v.to_string());
                }
                None => {
                    styles.remove(property);
                }
            }
        }
        self.record(Mutation::SetStyle {
            property: property.to_string(),
            value: value.map(str::to_string),
        });
    }
}

/// Keyed elements, e.g. by DOM id.
#[derive(Default, Clone)]
pub struct ElementRegistry {
    elements: HashMap<String, ElementRef>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, element: ElementRef) -> Option<ElementRef> {
        self.elements.insert(key.into(), element)
    }

    pub fn remove(&mut self, key: &str) -> Option<ElementRef> {
        self.elements.remove(key)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl TargetResolver for ElementRegistry {
    fn resolve(&self, key: &str) -> Option<ElementRef> {
        self.elements.get(key).cloned()
    }
}
