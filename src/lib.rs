pub mod clock;
pub mod error;
pub mod geometry;
pub mod input;
pub mod note;
pub mod sim;
pub mod sound;
pub mod surface;
pub mod transpose;

use crate::error::PluckError;
use crate::input::{Key, PointerState};
use crate::sim::{InstrumentRig, RigConfig};
use crate::sound::{SoundEvent, SoundQueue};
use crate::surface::{CommandBuffer, DrawCommand};
use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the pluck-core version string.
#[wasm_bindgen(js_name = coreVersion)]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// WASM-exposed: route Rust panics to `console.error`.
#[cfg(feature = "console")]
#[wasm_bindgen(js_name = installPanicHook)]
pub fn install_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed instrument. The page calls `update` once per animation
/// frame, forwards key events, then replays `draw()` on its canvas and
/// feeds `takeSoundEvents()` to its synth.
#[wasm_bindgen]
pub struct Guitar {
    rig: InstrumentRig,
    sound: SoundQueue,
    frame: CommandBuffer,
}

impl Default for Guitar {
    fn default() -> Self {
        Guitar::with_rig(InstrumentRig::default())
    }
}

#[wasm_bindgen]
impl Guitar {
    /// Standard-tuned six-string guitar.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Guitar {
        Guitar::default()
    }

    /// Build from a JSON `RigConfig`; missing fields take their defaults.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<Guitar, JsValue> {
        Guitar::try_from_config(json).map_err(|e| JsValue::from_str(&format!("{e}")))
    }

    pub fn update(&mut self, x: f64, y: f64, down: bool, now_ms: f64) {
        let pointer = PointerState::new(x, y, down);
        self.rig.update(&pointer, now_ms, &mut self.sound);
    }

    /// `code` is a DOM `KeyboardEvent.code`.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, code: &str, now_ms: f64) {
        self.rig.key_down(Key::from_code(code), now_ms);
    }

    #[wasm_bindgen(js_name = keyUp)]
    pub fn key_up(&mut self, code: &str, now_ms: f64) {
        self.rig.key_up(Key::from_code(code), now_ms, &mut self.sound);
    }

    /// Draw commands for the current frame.
    pub fn draw(&mut self) -> Result<JsValue, JsValue> {
        self.render();
        serde_wasm_bindgen::to_value(self.frame.commands())
            .map_err(|e| JsValue::from_str(&format!("{e}")))
    }

    /// Same as `draw`, as a JSON string.
    #[wasm_bindgen(js_name = drawJson)]
    pub fn draw_json(&mut self) -> Result<String, JsValue> {
        self.frame_json()
            .map_err(|e| JsValue::from_str(&format!("{e}")))
    }

    /// Sound events queued since the last call.
    #[wasm_bindgen(js_name = takeSoundEvents)]
    pub fn take_sound_events(&mut self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.sound.drain())
            .map_err(|e| JsValue::from_str(&format!("{e}")))
    }

    #[wasm_bindgen(js_name = stringCount)]
    pub fn string_count(&self) -> usize {
        self.rig.string_count()
    }

    pub fn fret(&self) -> u8 {
        self.rig.fret()
    }
}

impl Guitar {
    pub fn with_rig(rig: InstrumentRig) -> Self {
        Guitar {
            rig,
            sound: SoundQueue::new(),
            frame: CommandBuffer::new(),
        }
    }

    pub fn try_from_config(json: &str) -> Result<Guitar, PluckError> {
        let config = RigConfig::from_json(json)?;
        Ok(Guitar::with_rig(InstrumentRig::new(config)?))
    }

    pub fn rig(&self) -> &InstrumentRig {
        &self.rig
    }

    pub fn pending_sound(&self) -> &[SoundEvent] {
        self.sound.events()
    }

    pub fn take_sound(&mut self) -> Vec<SoundEvent> {
        self.sound.drain()
    }

    pub fn frame(&mut self) -> &[DrawCommand] {
        self.render();
        self.frame.commands()
    }

    pub fn frame_json(&mut self) -> Result<String, serde_json::Error> {
        self.render();
        self.frame.to_json()
    }

    fn render(&mut self) {
        self.frame.clear();
        self.rig.draw(&mut self.frame);
    }
}
