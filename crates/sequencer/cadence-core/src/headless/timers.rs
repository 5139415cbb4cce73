use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::ids::{TimerId, TimerIdAllocator};
use crate::timer::{IntervalCallback, TimeoutCallback, TimerService};

/// Shared virtual time in milliseconds.
#[derive(Clone, Debug, Default)]
pub struct Clock(Rc<Cell<f64>>);

impl Clock {
    pub fn now_ms(&self) -> f64 {
        self.0.get()
    }

    fn set(&self, t: f64) {
        self.0.set(t);
    }
}

enum Task {
    Timeout(TimeoutCallback),
    Interval {
        period_ms: f64,
        callback: IntervalCallback,
    },
}

struct Entry {
    id: TimerId,
    due_ms: f64,
    /// Creation order; breaks ties between entries due at the same time.
    seq: u64,
    task: Task,
}

/// Timer service on a virtual clock. Nothing fires until [`ManualTimers::advance`] is called;
/// due callbacks then run in due-time order, ties in creation order.
#[derive(Default)]
pub struct ManualTimers {
    clock: Clock,
    ids: RefCell<TimerIdAllocator>,
    next_seq: Cell<u64>,
    entries: RefCell<Vec<Entry>>,
    /// Interval whose callback is currently running (taken out of `entries`).
    running: Cell<Option<TimerId>>,
    running_cleared: Cell<bool>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clock(&self) -> Clock {
        self.clock.clone()
    }

    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    /// Registered timers (timeouts not yet fired plus live intervals).
    pub fn pending(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.borrow().iter().any(|e| e.id == id)
    }

    /// Move the clock forward by `ms`, firing everything that falls due on the way
    /// (including timers scheduled by callbacks fired during this advance).
    pub fn advance(&self, ms: f64) {
        let target = self.clock.now_ms() + ms.max(0.0);
        self.advance_to(target);
    }

    pub fn advance_to(&self, target_ms: f64) {
        while let Some(entry) = self.pop_due(target_ms) {
            self.clock.set(entry.due_ms.max(self.clock.now_ms()));
            match entry.task {
                Task::Timeout(callback) => callback(),
                Task::Interval {
                    period_ms,
                    mut callback,
                } => {
                    self.running.set(Some(entry.id));
                    self.running_cleared.set(false);
                    callback();
                    self.running.set(None);
                    if !self.running_cleared.get() {
                        let seq = self.bump_seq();
                        self.entries.borrow_mut().push(Entry {
                            id: entry.id,
                            due_ms: entry.due_ms + period_ms,
                            seq,
                            task: Task::Interval {
                                period_ms,
                                callback,
                            },
                        });
                    }
                }
            }
        }
        if target_ms > self.clock.now_ms() {
            self.clock.set(target_ms);
        }
    }

    fn pop_due(&self, target_ms: f64) -> Option<Entry> {
        let mut entries = self.entries.borrow_mut();
        let idx = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= target_ms)
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)))
            .map(|(i, _)| i)?;
        Some(entries.swap_remove(idx))
    }

    fn bump_seq(&self) -> u64 {
        let seq = self.next_seq.get();
        self.next_seq.set(seq.wrapping_add(1));
        seq
    }

    fn insert(&self, due_ms: f64, task: Task) -> TimerId {
        let id = self.ids.borrow_mut().alloc();
        let seq = self.bump_seq();
        self.entries.borrow_mut().push(Entry {
            id,
            due_ms,
            seq,
            task,
        });
        id
    }

    fn remove(&self, id: TimerId) {
        if self.running.get() == Some(id) {
            self.running_cleared.set(true);
            return;
        }
        // Drop the callback after releasing the borrow; it may own the last
        // references to state that touches this service.
        let removed = {
            let mut entries = self.entries.borrow_mut();
            entries
                .iter()
                .position(|e| e.id == id)
                .map(|idx| entries.swap_remove(idx))
        };
        drop(removed);
    }
}

impl TimerService for ManualTimers {
    fn set_timeout(&self, delay_ms: f64, callback: TimeoutCallback) -> TimerId {
        let due = self.clock.now_ms() + delay_ms.max(0.0);
        self.insert(due, Task::Timeout(callback))
    }

    fn set_interval(&self, period_ms: f64, callback: IntervalCallback) -> TimerId {
        // Same floor as browsers apply to non-positive periods, so an interval always advances.
        let period_ms = if period_ms > 0.0 { period_ms } else { 1.0 };
        let due = self.clock.now_ms() + period_ms;
        self.insert(
            due,
            Task::Interval {
                period_ms,
                callback,
            },
        )
    }

    fn clear_timeout(&self, id: TimerId) {
        self.remove(id);
    }

    fn clear_interval(&self, id: TimerId) {
        self.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log() -> Rc<RefCell<Vec<(f64, &'static str)>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn timeouts_fire_in_due_then_creation_order() {
        let timers = Rc::new(ManualTimers::new());
        let out = log();
        for (delay, tag) in [(20.0, "b"), (10.0, "a"), (20.0, "c")] {
            let out = Rc::clone(&out);
            let clock = timers.clock();
            timers.set_timeout(delay, Box::new(move || out.borrow_mut().push((clock.now_ms(), tag))));
        }
        timers.advance(15.0);
        assert_eq!(*out.borrow(), vec![(10.0, "a")]);
        timers.advance(100.0);
        assert_eq!(*out.borrow(), vec![(10.0, "a"), (20.0, "b"), (20.0, "c")]);
        assert_eq!(timers.now_ms(), 115.0);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn cleared_timeout_never_fires() {
        let timers = ManualTimers::new();
        let fired = Rc::new(Cell::new(false));
        let f = Rc::clone(&fired);
        let id = timers.set_timeout(5.0, Box::new(move || f.set(true)));
        timers.clear_timeout(id);
        timers.clear_timeout(id);
        timers.advance(10.0);
        assert!(!fired.get());
    }

    #[test]
    fn interval_repeats_until_cleared_from_inside() {
        let timers = Rc::new(ManualTimers::new());
        let count = Rc::new(Cell::new(0));
        let id_slot: Rc<Cell<Option<TimerId>>> = Rc::new(Cell::new(None));
        let (c, slot, t) = (Rc::clone(&count), Rc::clone(&id_slot), Rc::clone(&timers));
        let id = timers.set_interval(
            100.0,
            Box::new(move || {
                c.set(c.get() + 1);
                if c.get() == 3 {
                    if let Some(id) = slot.get() {
                        t.clear_interval(id);
                    }
                }
            }),
        );
        id_slot.set(Some(id));
        timers.advance(1000.0);
        assert_eq!(count.get(), 3);
        assert!(!timers.is_pending(id));
    }

    #[test]
    fn callbacks_may_schedule_more_work_within_the_same_advance() {
        let timers = Rc::new(ManualTimers::new());
        let out = log();
        let (t, o) = (Rc::clone(&timers), Rc::clone(&out));
        timers.set_timeout(
            10.0,
            Box::new(move || {
                let clock = t.clock();
                let o2 = Rc::clone(&o);
                t.set_timeout(0.0, Box::new(move || o2.borrow_mut().push((clock.now_ms(), "nested"))));
            }),
        );
        timers.advance(10.0);
        assert_eq!(*out.borrow(), vec![(10.0, "nested")]);
    }
}
