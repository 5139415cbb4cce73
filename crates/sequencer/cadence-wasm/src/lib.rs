//! Browser bindings for Cadence.
//!
//! ```js
//! const seq = new Sequencer();
//! const worry = seq.addMove(200, { x: 80, y: 0 }).addMove(200, { x: 0, y: 0 });
//! block.addEventListener("click", worry.buildHandler());
//! const beat = seq.heartBeating(heart);
//! beat.stop();
//! ```

mod dom;
mod timers;

use std::rc::Rc;

use js_sys::{Function, JSON};
use log::error;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use cadence_core::{
    parse_sequence_json, AnimationHandle, Animator, Config, PlaybackState, Player, StepBuilder,
    Translation,
};

pub use dom::{DocumentResolver, DomElement};
pub use timers::BrowserTimers;

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn element(value: JsValue) -> Result<cadence_core::ElementRef, JsError> {
    Ok(DomElement::from_js(value)?.into_ref())
}

fn translation(value: JsValue) -> Result<Translation, JsError> {
    swb::from_value(value).map_err(|e| JsError::new(&format!("translation error: {e}")))
}

/// Step builder plus player. Every `add*` returns a new `Sequencer`; the receiver is unchanged,
/// so one base can seed several sequences.
#[wasm_bindgen]
pub struct Sequencer {
    builder: StepBuilder,
    animator: Animator,
}

impl Sequencer {
    fn with_builder(&self, builder: StepBuilder) -> Sequencer {
        Sequencer {
            builder,
            animator: self.animator.clone(),
        }
    }
}

#[wasm_bindgen]
impl Sequencer {
    /// Pass a config object (`{ hidden_class, visible_class, transform_policy }`) or
    /// undefined/null for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Sequencer, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let timers =
            BrowserTimers::from_window().ok_or_else(|| JsError::new("no global window"))?;

        Ok(Sequencer {
            builder: StepBuilder::new(),
            animator: Animator::new(Player::new(Rc::new(timers), cfg)),
        })
    }

    #[wasm_bindgen(js_name = addMove)]
    pub fn add_move(&self, duration: f64, translation_js: JsValue) -> Result<Sequencer, JsError> {
        let t = translation(translation_js)?;
        Ok(self.with_builder(self.builder.clone().add_move(duration, t)?))
    }

    #[wasm_bindgen(js_name = addScale)]
    pub fn add_scale(&self, duration: f64, ratio: f64) -> Result<Sequencer, JsError> {
        Ok(self.with_builder(self.builder.clone().add_scale(duration, ratio)?))
    }

    #[wasm_bindgen(js_name = addRotate)]
    pub fn add_rotate(&self, duration: f64, degrees: f64) -> Result<Sequencer, JsError> {
        Ok(self.with_builder(self.builder.clone().add_rotate(duration, degrees)?))
    }

    #[wasm_bindgen(js_name = addFadeIn)]
    pub fn add_fade_in(&self, duration: f64) -> Result<Sequencer, JsError> {
        Ok(self.with_builder(self.builder.clone().add_fade_in(duration)?))
    }

    #[wasm_bindgen(js_name = addFadeOut)]
    pub fn add_fade_out(&self, duration: f64) -> Result<Sequencer, JsError> {
        Ok(self.with_builder(self.builder.clone().add_fade_out(duration)?))
    }

    #[wasm_bindgen(js_name = addDelay)]
    pub fn add_delay(&self, duration: f64) -> Result<Sequencer, JsError> {
        Ok(self.with_builder(self.builder.clone().add_delay(duration)?))
    }

    #[wasm_bindgen(js_name = addMoveAndHide)]
    pub fn add_move_and_hide(&self, duration: f64) -> Result<Sequencer, JsError> {
        Ok(self.with_builder(self.builder.clone().move_and_hide(duration)?))
    }

    #[wasm_bindgen(js_name = addShowAndHide)]
    pub fn add_show_and_hide(&self, duration: f64) -> Result<Sequencer, JsError> {
        Ok(self.with_builder(self.builder.clone().show_and_hide(duration)?))
    }

    #[wasm_bindgen(js_name = addHeartBeating)]
    pub fn add_heart_beating(&self) -> Result<Sequencer, JsError> {
        Ok(self.with_builder(self.builder.clone().heart_beating()?))
    }

    /// Replace the accumulated steps with a JSON sequence (array of steps or `{ steps }`).
    #[wasm_bindgen(js_name = loadSequence)]
    pub fn load_sequence(&self, data_json: JsValue) -> Result<Sequencer, JsError> {
        if jsvalue_is_undefined_or_null(&data_json) {
            return Err(JsError::new("loadSequence: data_json is null/undefined"));
        }
        // Stringify so the core parser (and its validation) handles both shapes.
        let s = JSON::stringify(&data_json)
            .map_err(|e| JsError::new(&format!("loadSequence stringify error: {:?}", e)))?
            .as_string()
            .ok_or_else(|| JsError::new("loadSequence: stringify produced non-string"))?;
        let sequence = parse_sequence_json(&s)?;
        Ok(self.with_builder(StepBuilder::from_sequence(sequence)))
    }

    /// The accumulated steps as plain JS objects.
    pub fn steps(&self) -> Result<JsValue, JsError> {
        swb::to_value(self.builder.sequence().steps())
            .map_err(|e| JsError::new(&format!("steps error: {e}")))
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.builder.len()
    }

    #[wasm_bindgen(getter, js_name = totalDuration)]
    pub fn total_duration(&self) -> f64 {
        self.builder.sequence().total_duration_ms()
    }

    /// Play the accumulated steps on `element`; `cycled` repeats them until stopped.
    pub fn play(&self, element_js: JsValue, cycled: Option<bool>) -> Result<PlaybackHandle, JsError> {
        let el = element(element_js)?;
        let inner =
            self.animator
                .player()
                .play(el, self.builder.sequence(), cycled.unwrap_or(false))?;
        Ok(PlaybackHandle { inner })
    }

    /// Play on the element with DOM id `id`.
    #[wasm_bindgen(js_name = playById)]
    pub fn play_by_id(&self, id: &str, cycled: Option<bool>) -> Result<PlaybackHandle, JsError> {
        let resolver =
            DocumentResolver::from_window().ok_or_else(|| JsError::new("no global document"))?;
        let inner = self.animator.player().play_target(
            &resolver,
            id,
            self.builder.sequence(),
            cycled.unwrap_or(false),
        )?;
        Ok(PlaybackHandle { inner })
    }

    /// An event listener that plays the steps once on `event.currentTarget`.
    #[wasm_bindgen(js_name = buildHandler)]
    pub fn build_handler(&self) -> Function {
        let handler = self
            .builder
            .clone()
            .build_handler(self.animator.player().clone());
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let target = event
                .current_target()
                .map(JsValue::from)
                .unwrap_or(JsValue::UNDEFINED);
            let played = DomElement::from_js(target).and_then(|el| handler(el.into_ref()));
            if let Err(e) = played {
                error!("cadence: handler playback failed: {e}");
            }
        });
        closure.into_js_value().unchecked_into::<Function>()
    }

    #[wasm_bindgen(js_name = fadeIn)]
    pub fn fade_in(&self, element_js: JsValue, duration: f64) -> Result<PlaybackHandle, JsError> {
        let inner = self.animator.fade_in(element(element_js)?, duration)?;
        Ok(PlaybackHandle { inner })
    }

    #[wasm_bindgen(js_name = fadeOut)]
    pub fn fade_out(&self, element_js: JsValue, duration: f64) -> Result<PlaybackHandle, JsError> {
        let inner = self.animator.fade_out(element(element_js)?, duration)?;
        Ok(PlaybackHandle { inner })
    }

    #[wasm_bindgen(js_name = "move")]
    pub fn move_by(
        &self,
        element_js: JsValue,
        duration: f64,
        translation_js: JsValue,
    ) -> Result<PlaybackHandle, JsError> {
        let el = element(element_js)?;
        let inner = self
            .animator
            .move_by(el, duration, translation(translation_js)?)?;
        Ok(PlaybackHandle { inner })
    }

    pub fn scale(
        &self,
        element_js: JsValue,
        duration: f64,
        ratio: f64,
    ) -> Result<PlaybackHandle, JsError> {
        let inner = self.animator.scale(element(element_js)?, duration, ratio)?;
        Ok(PlaybackHandle { inner })
    }

    pub fn rotate(
        &self,
        element_js: JsValue,
        duration: f64,
        degrees: f64,
    ) -> Result<PlaybackHandle, JsError> {
        let inner = self.animator.rotate(element(element_js)?, duration, degrees)?;
        Ok(PlaybackHandle { inner })
    }

    #[wasm_bindgen(js_name = moveAndHide)]
    pub fn move_and_hide(&self, element_js: JsValue, duration: f64) -> Result<PlaybackHandle, JsError> {
        let inner = self.animator.move_and_hide(element(element_js)?, duration)?;
        Ok(PlaybackHandle { inner })
    }

    #[wasm_bindgen(js_name = showAndHide)]
    pub fn show_and_hide(&self, element_js: JsValue, duration: f64) -> Result<PlaybackHandle, JsError> {
        let inner = self.animator.show_and_hide(element(element_js)?, duration)?;
        Ok(PlaybackHandle { inner })
    }

    #[wasm_bindgen(js_name = heartBeating)]
    pub fn heart_beating(&self, element_js: JsValue) -> Result<PlaybackHandle, JsError> {
        let inner = self.animator.heart_beating(element(element_js)?)?;
        Ok(PlaybackHandle { inner })
    }
}

/// Returned by every play call.
#[wasm_bindgen]
pub struct PlaybackHandle {
    inner: AnimationHandle,
}

#[wasm_bindgen]
impl PlaybackHandle {
    /// Cancel pending steps and the repeat; the element keeps its current look.
    pub fn stop(&self) {
        self.inner.stop();
    }

    /// Stop and restore the element's pre-play look.
    pub fn reset(&self) {
        self.inner.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.inner.state() == PlaybackState::Running
    }

    #[wasm_bindgen(getter)]
    pub fn cycled(&self) -> bool {
        self.inner.is_cycled()
    }
}

/// Route `log` output to the browser console. `level` is one of
/// "error", "warn", "info", "debug", "trace" (default "info").
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) -> Result<(), JsError> {
    let level = match level.as_deref() {
        None => log::Level::Info,
        Some(s) => s
            .parse::<log::Level>()
            .map_err(|e| JsError::new(&format!("log level error: {e}")))?,
    };
    console_log::init_with_level(level).map_err(|e| JsError::new(&format!("logger init: {e}")))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
