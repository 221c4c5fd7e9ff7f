use js_sys::JSON;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use swipedeck_core::{parse_stored_deck_json, Config, Engine, GestureSample, Outputs};

/// Card-stack engine handle for a JS host. The host owns rendering, pointer
/// capture, and the spring runtime; this wrapper only moves samples in and
/// target patches out.
#[wasm_bindgen]
pub struct Swipedeck {
    core: Engine,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

#[wasm_bindgen]
impl Swipedeck {
    /// Create an engine over a stored-deck JSON object
    /// (`{ name?, cards: [{ image, title?, description? }] }`). Pass a JSON
    /// config object or undefined/null for defaults.
    /// Example:
    ///   new Swipedeck(deck, { release_velocity: 0.3 })
    #[wasm_bindgen(constructor)]
    pub fn new(deck_json: JsValue, config: JsValue) -> Result<Swipedeck, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        if jsvalue_is_undefined_or_null(&deck_json) {
            return Err(JsError::new("deck error: deck_json is null/undefined"));
        }
        // Stringify the JS object so we can reuse the core parser (expects &str)
        let s = JSON::stringify(&deck_json)
            .map_err(|e| JsError::new(&format!("deck stringify error: {:?}", e)))?
            .as_string()
            .ok_or_else(|| JsError::new("deck stringify produced non-string"))?;
        let deck = parse_stored_deck_json(&s).map_err(|e| JsError::new(&format!("{e}")))?;

        let core = Engine::new(cfg, deck).map_err(|e| JsError::new(&format!("{e}")))?;
        Ok(Swipedeck { core })
    }

    /// Number of cards in the deck.
    #[wasm_bindgen(js_name = card_count)]
    pub fn card_count(&self) -> u32 {
        self.core.card_count() as u32
    }

    /// Index of the currently active (front-most, full-scale) card.
    #[wasm_bindgen(js_name = active_index)]
    pub fn active_index(&self) -> u32 {
        self.core.active_index() as u32
    }

    /// Record the post-layout card height in pixels. Safe to call more than
    /// once; non-positive values are ignored.
    #[wasm_bindgen(js_name = set_card_height)]
    pub fn set_card_height(&mut self, height: f32) {
        self.core.set_card_height(height);
    }

    /// At-rest targets to seed the host's springs with. Returns Outputs JSON.
    #[wasm_bindgen(js_name = initial_targets)]
    pub fn initial_targets(&mut self) -> Result<JsValue, JsError> {
        let out: &Outputs = self.core.initial_targets();
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Feed one drag update (GestureSample JSON) into the engine. Returns
    /// Outputs JSON: sparse per-card `{ index, target: { offset_y?, scale? } }`
    /// patches plus any committed-transition events.
    #[wasm_bindgen(js_name = on_gesture)]
    pub fn on_gesture(&mut self, sample_json: JsValue) -> Result<JsValue, JsError> {
        let sample: GestureSample = swb::from_value(sample_json)
            .map_err(|e| JsError::new(&format!("sample error: {e}")))?;
        let out: &Outputs = self.core.on_gesture(&sample);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Vertical drag bound for the gesture layer (`{ top }` JSON).
    #[wasm_bindgen(js_name = drag_bounds)]
    pub fn drag_bounds(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.drag_bounds())
            .map_err(|e| JsError::new(&format!("bounds error: {e}")))
    }

    /// Constrain a raw vertical drag offset to the drag bounds, applying
    /// elastic overshoot past the top limit. The gesture layer calls this
    /// per pointer move before building the sample.
    #[wasm_bindgen(js_name = constrain_offset)]
    pub fn constrain_offset(&self, offset_y: f32) -> f32 {
        self.core.constrain_offset(offset_y)
    }

    /// Whether the card at `index` should cast a shadow (the active
    /// neighborhood only).
    #[wasm_bindgen(js_name = show_shadow)]
    pub fn show_shadow(&self, index: u32) -> bool {
        self.core.show_shadow(index as usize)
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
