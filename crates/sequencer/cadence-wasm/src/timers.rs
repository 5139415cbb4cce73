//! Timer capability over `window.setTimeout` / `window.setInterval`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cadence_core::{IntervalCallback, TimeoutCallback, TimerId, TimerService};
use hashbrown::HashMap;
use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Keeps every JS-visible closure alive until its timer is cleared or, for timeouts,
/// until it has fired (collected on the next call into the service).
pub struct BrowserTimers {
    window: Window,
    timeouts: RefCell<HashMap<i32, Closure<dyn FnMut()>>>,
    intervals: RefCell<HashMap<i32, Closure<dyn FnMut()>>>,
    fired: Rc<RefCell<Vec<i32>>>,
}

impl BrowserTimers {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            timeouts: RefCell::new(HashMap::new()),
            intervals: RefCell::new(HashMap::new()),
            fired: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn from_window() -> Option<Self> {
        web_sys::window().map(Self::new)
    }

    /// Live closures held for pending timeouts and intervals.
    pub fn held(&self) -> usize {
        self.sweep();
        self.timeouts.borrow().len() + self.intervals.borrow().len()
    }

    fn sweep(&self) {
        let fired: Vec<i32> = self.fired.borrow_mut().drain(..).collect();
        if fired.is_empty() {
            return;
        }
        let dropped: Vec<_> = {
            let mut timeouts = self.timeouts.borrow_mut();
            fired.iter().filter_map(|h| timeouts.remove(h)).collect()
        };
        drop(dropped);
    }
}

// Browser delays are whole milliseconds.
fn to_delay(ms: f64) -> i32 {
    ms.max(0.0).round().min(i32::MAX as f64) as i32
}

impl TimerService for BrowserTimers {
    fn set_timeout(&self, delay_ms: f64, callback: TimeoutCallback) -> TimerId {
        self.sweep();
        let handle_slot: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let slot = Rc::clone(&handle_slot);
        let fired = Rc::clone(&self.fired);
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(cb) = callback.take() {
                cb();
            }
            if let Some(handle) = slot.get() {
                fired.borrow_mut().push(handle);
            }
        });
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                to_delay(delay_ms),
            ) {
            Ok(handle) => {
                handle_slot.set(Some(handle));
                self.timeouts.borrow_mut().insert(handle, closure);
                TimerId(handle as u32)
            }
            Err(e) => {
                error!("cadence: setTimeout failed: {e:?}");
                TimerId(0)
            }
        }
    }

    fn set_interval(&self, period_ms: f64, mut callback: IntervalCallback) -> TimerId {
        self.sweep();
        let closure = Closure::<dyn FnMut()>::new(move || callback());
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                to_delay(period_ms),
            ) {
            Ok(handle) => {
                self.intervals.borrow_mut().insert(handle, closure);
                TimerId(handle as u32)
            }
            Err(e) => {
                error!("cadence: setInterval failed: {e:?}");
                TimerId(0)
            }
        }
    }

    fn clear_timeout(&self, id: TimerId) {
        let handle = id.0 as i32;
        self.window.clear_timeout_with_handle(handle);
        let removed = self.timeouts.borrow_mut().remove(&handle);
        drop(removed);
        self.sweep();
    }

    fn clear_interval(&self, id: TimerId) {
        let handle = id.0 as i32;
        self.window.clear_interval_with_handle(handle);
        let removed = self.intervals.borrow_mut().remove(&handle);
        drop(removed);
    }
}
