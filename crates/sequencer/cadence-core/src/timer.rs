//! Timer capability: the only concurrency primitive the player uses.

use crate::ids::TimerId;

/// Fired once after the delay, unless cleared first.
pub type TimeoutCallback = Box<dyn FnOnce()>;
/// Fired every period until cleared.
pub type IntervalCallback = Box<dyn FnMut()>;

/// One-shot and repeating deferred callbacks on a single event loop.
///
/// Implementations must never run a callback synchronously from inside `set_timeout`
/// or `set_interval`, even for a zero delay; the player records the returned id before
/// the callback can observe it.
pub trait TimerService {
    fn set_timeout(&self, delay_ms: f64, callback: TimeoutCallback) -> TimerId;
    fn set_interval(&self, period_ms: f64, callback: IntervalCallback) -> TimerId;
    /// Clearing an unknown or already-fired id is a no-op.
    fn clear_timeout(&self, id: TimerId);
    fn clear_interval(&self, id: TimerId);
}
