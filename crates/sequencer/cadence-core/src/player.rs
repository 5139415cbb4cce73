//! Player: turns a step sequence into timers against one element.

use std::fmt;
use std::rc::Rc;

use log::{debug, warn};

use crate::config::Config;
use crate::element::{ElementRef, TargetResolver};
use crate::error::SequenceError;
use crate::handle::{AnimationHandle, Playback};
use crate::step::{Step, StepSequence};
use crate::timer::TimerService;

/// Schedules sequences on a [`TimerService`]. Cheap to clone; clones share the
/// timer service and configuration.
#[derive(Clone)]
pub struct Player {
    timers: Rc<dyn TimerService>,
    config: Rc<Config>,
}

impl Player {
    pub fn new(timers: Rc<dyn TimerService>, config: Config) -> Self {
        Self {
            timers,
            config: Rc::new(config),
        }
    }

    pub fn with_defaults(timers: Rc<dyn TimerService>) -> Self {
        Self::new(timers, Config::default())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Play `sequence` against `element`.
    ///
    /// The hidden classification is read once here, before anything is scheduled, and is what
    /// [`AnimationHandle::reset`] restores. With `cycled`, the pass repeats every
    /// `sequence.total_duration_ms()` until the handle is stopped.
    pub fn play(
        &self,
        element: ElementRef,
        sequence: &StepSequence,
        cycled: bool,
    ) -> Result<AnimationHandle, SequenceError> {
        sequence.validate()?;
        let steps: Rc<[Step]> = sequence.steps().into();
        let period = sequence.total_duration_ms();

        let playback = Rc::new(Playback::new(
            element,
            Rc::clone(&self.timers),
            Rc::clone(&self.config),
        ));
        debug!(
            "cadence: play {} steps over {}ms (cycled: {cycled})",
            steps.len(),
            period
        );
        playback.schedule_pass(&steps);

        if cycled {
            if period > 0.0 {
                playback.start_cycle(steps, period);
            } else {
                warn!("cadence: cycled playback of a zero-length sequence runs a single pass");
            }
        }
        Ok(AnimationHandle::new(playback))
    }

    /// Resolve `key` and play against the resolved element.
    /// Fails with `MissingTarget` before anything is scheduled when the key is unknown.
    pub fn play_target<R>(
        &self,
        resolver: &R,
        key: &str,
        sequence: &StepSequence,
        cycled: bool,
    ) -> Result<AnimationHandle, SequenceError>
    where
        R: TargetResolver + ?Sized,
    {
        let element = resolver
            .resolve(key)
            .ok_or_else(|| SequenceError::missing_target(key))?;
        self.play(element, sequence, cycled)
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
