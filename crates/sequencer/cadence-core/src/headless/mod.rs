//! In-memory host: an element that records mutations, a keyed element registry, and a
//! virtual-clock timer service advanced explicitly by the caller.
//!
//! Used for non-browser hosts and for driving playback deterministically in tests.

mod element;
mod timers;

pub use element::{ElementRegistry, MemoryElement, Mutation, Record};
pub use timers::{Clock, ManualTimers};
