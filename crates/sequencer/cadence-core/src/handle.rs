//! Per-play shared state and the handle returned to callers.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::config::Config;
use crate::element::{ElementRef, TRANSFORM, TRANSITION_DURATION};
use crate::ids::TimerId;
use crate::step::{Effect, Step};
use crate::timer::TimerService;
use crate::transform::{transition_duration, TransformState};

/// Lifecycle of an [`AnimationHandle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// Created by `play`; stays here even once every one-shot timer has fired.
    Running,
    /// Terminal: `stop` or `reset` was called.
    Stopped,
}

/// State shared between a handle and every callback it scheduled.
pub(crate) struct Playback {
    element: ElementRef,
    timers: Rc<dyn TimerService>,
    config: Rc<Config>,
    /// Hidden classification captured before the first mutation.
    initial_hidden: bool,
    /// Step timers not yet fired, across every pass issued so far.
    pending: RefCell<Vec<TimerId>>,
    interval: Cell<Option<TimerId>>,
    cycled: Cell<bool>,
    transform: RefCell<TransformState>,
    stopped: Cell<bool>,
    passes: Cell<u32>,
}

impl Playback {
    pub(crate) fn new(element: ElementRef, timers: Rc<dyn TimerService>, config: Rc<Config>) -> Self {
        let initial_hidden = element.has_class(&config.hidden_class);
        Self {
            element,
            timers,
            config,
            initial_hidden,
            pending: RefCell::new(Vec::new()),
            interval: Cell::new(None),
            cycled: Cell::new(false),
            transform: RefCell::new(TransformState::new()),
            stopped: Cell::new(false),
            passes: Cell::new(0),
        }
    }

    /// Schedule one pass: each step at the sum of the durations before it.
    pub(crate) fn schedule_pass(self: &Rc<Self>, steps: &[Step]) {
        if self.stopped.get() {
            return;
        }
        self.passes.set(self.passes.get().wrapping_add(1));
        let mut offset = 0.0;
        for step in steps {
            let slot: Rc<Cell<Option<TimerId>>> = Rc::new(Cell::new(None));
            let fired_slot = Rc::clone(&slot);
            let playback = Rc::clone(self);
            let step_owned = step.clone();
            let id = self.timers.set_timeout(
                offset,
                Box::new(move || {
                    if let Some(id) = fired_slot.get() {
                        playback.forget(id);
                    }
                    playback.apply(&step_owned);
                }),
            );
            slot.set(Some(id));
            self.pending.borrow_mut().push(id);
            offset += step.duration_ms();
        }
    }

    /// Re-run the pass every `period_ms` until stopped.
    pub(crate) fn start_cycle(self: &Rc<Self>, steps: Rc<[Step]>, period_ms: f64) {
        let playback = Rc::clone(self);
        let id = self.timers.set_interval(
            period_ms,
            Box::new(move || {
                if playback.stopped.get() {
                    return;
                }
                debug!(
                    "cadence: cycle re-entry (pass {})",
                    playback.passes.get().wrapping_add(1)
                );
                playback.schedule_pass(&steps);
            }),
        );
        self.interval.set(Some(id));
        self.cycled.set(true);
    }

    fn forget(&self, id: TimerId) {
        self.pending.borrow_mut().retain(|pending| *pending != id);
    }

    fn apply(&self, step: &Step) {
        let el = &self.element;
        let cfg = &self.config;
        match step.effect() {
            Effect::Delay => {}
            Effect::FadeIn => {
                el.set_style(TRANSITION_DURATION, Some(&transition_duration(step.duration_ms())));
                el.remove_class(&cfg.hidden_class);
                el.add_class(&cfg.visible_class);
            }
            Effect::FadeOut => {
                el.set_style(TRANSITION_DURATION, Some(&transition_duration(step.duration_ms())));
                el.remove_class(&cfg.visible_class);
                el.add_class(&cfg.hidden_class);
            }
            effect @ (Effect::Move { .. } | Effect::Scale { .. } | Effect::Rotate { .. }) => {
                let rendered = self
                    .transform
                    .borrow_mut()
                    .apply(effect, cfg.transform_policy);
                el.set_style(TRANSITION_DURATION, Some(&transition_duration(step.duration_ms())));
                if let Some(transform) = rendered {
                    el.set_style(TRANSFORM, Some(&transform));
                }
            }
        }
    }

    fn stop(&self) {
        let was_running = !self.stopped.replace(true);
        let pending: Vec<TimerId> = self.pending.borrow_mut().drain(..).collect();
        let interval = self.interval.take();
        if was_running {
            debug!(
                "cadence: stop ({} pending step timers, cycled: {})",
                pending.len(),
                interval.is_some()
            );
        }
        for id in pending {
            self.timers.clear_timeout(id);
        }
        if let Some(id) = interval {
            self.timers.clear_interval(id);
        }
    }

    fn reset(&self) {
        self.stop();
        let el = &self.element;
        let cfg = &self.config;
        el.set_style(TRANSITION_DURATION, None);
        el.set_style(TRANSFORM, None);
        self.transform.borrow_mut().clear();
        if self.initial_hidden {
            el.remove_class(&cfg.visible_class);
            el.add_class(&cfg.hidden_class);
        } else {
            el.remove_class(&cfg.hidden_class);
            el.add_class(&cfg.visible_class);
        }
        debug!("cadence: reset (initially hidden: {})", self.initial_hidden);
    }
}

/// Returned by every play call. Cloning yields another handle to the same playback.
#[derive(Clone)]
pub struct AnimationHandle {
    playback: Rc<Playback>,
}

impl AnimationHandle {
    pub(crate) fn new(playback: Rc<Playback>) -> Self {
        Self { playback }
    }

    /// Cancel every not-yet-fired step of every pass issued so far, and the repeat timer.
    /// Mutations already applied stay as they are. Safe to call repeatedly.
    pub fn stop(&self) {
        self.playback.stop();
    }

    /// Stop, clear `transition-duration` and `transform`, and restore the hidden/visible
    /// classification captured at play time. Safe to call repeatedly.
    pub fn reset(&self) {
        self.playback.reset();
    }

    pub fn state(&self) -> PlaybackState {
        if self.playback.stopped.get() {
            PlaybackState::Stopped
        } else {
            PlaybackState::Running
        }
    }

    pub fn is_cycled(&self) -> bool {
        self.playback.cycled.get()
    }

    /// Whether the element carried the hidden class when play was called.
    pub fn initially_hidden(&self) -> bool {
        self.playback.initial_hidden
    }

    /// Step timers still outstanding.
    pub fn pending_timers(&self) -> usize {
        self.playback.pending.borrow().len()
    }

    /// Passes scheduled so far (1 for one-shot playback, +1 per cycle re-entry).
    pub fn passes(&self) -> u32 {
        self.playback.passes.get()
    }
}

impl fmt::Debug for AnimationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationHandle")
            .field("state", &self.state())
            .field("cycled", &self.is_cycled())
            .field("initially_hidden", &self.initially_hidden())
            .field("pending_timers", &self.pending_timers())
            .field("passes", &self.passes())
            .finish()
    }
}
