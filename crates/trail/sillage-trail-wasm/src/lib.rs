//! wasm-bindgen surface for the Sillage trail engine.
//!
//! The host owns the DOM: it forwards pointer events and the container rect,
//! calls `update` once per animation frame, and applies the returned changes
//! (CSS transform/filter/opacity per item). The engine itself never touches
//! browser APIs, so the whole pipeline stays testable off the main thread of
//! a browser.

use js_sys::Array;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use sillage_trail_core::{
    ContainerRect, ItemId, ItemSpec, PointerInput, Size, TouchPoint, TrailConfig, TrailController,
    TrailVariant, TweenRuntime,
};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

#[wasm_bindgen]
pub struct SillageTrail {
    core: TrailController<TweenRuntime>,
}

#[wasm_bindgen]
impl SillageTrail {
    /// Create a controller. `config` is a JSON object matching TrailConfig
    /// (or undefined/null for defaults); `items` is an array of
    /// `{ source, width, height }`; `variant` is the 1-based preset index.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, items: JsValue, variant: u8) -> Result<SillageTrail, JsError> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Warn);

        let cfg: TrailConfig = if jsvalue_is_undefined_or_null(&config) {
            TrailConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let items: Vec<ItemSpec> =
            swb::from_value(items).map_err(|e| JsError::new(&format!("items error: {e}")))?;
        let variant = TrailVariant::from_index(variant)
            .map_err(|e| JsError::new(&format!("variant error: {e}")))?;

        let core = TrailController::new(cfg, items, variant, TweenRuntime::new())
            .map_err(|e| JsError::new(&format!("controller error: {e}")))?;
        Ok(SillageTrail { core })
    }

    /// Arm the controller on the container's bounding rect.
    pub fn start(&mut self, left: f32, top: f32, width: f32, height: f32) {
        self.core.start(ContainerRect::new(left, top, width, height));
    }

    /// Forward a mousemove's client coordinates.
    #[wasm_bindgen(js_name = pointer_move)]
    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.core.pointer_input(&PointerInput::Mouse { client_x, client_y });
    }

    /// Forward a touchmove. `touches` is an array of `{ clientX, clientY }`;
    /// the first contact drives the trail.
    #[wasm_bindgen(js_name = touch_move)]
    pub fn touch_move(&mut self, touches: JsValue) -> Result<(), JsError> {
        let touches: Vec<TouchPoint> =
            swb::from_value(touches).map_err(|e| JsError::new(&format!("touches error: {e}")))?;
        self.core.pointer_input(&PointerInput::Touch { touches });
        Ok(())
    }

    /// Refresh the container rect after a viewport resize.
    #[wasm_bindgen(js_name = set_container_rect)]
    pub fn set_container_rect(&mut self, left: f32, top: f32, width: f32, height: f32) {
        self.core
            .set_container_rect(ContainerRect::new(left, top, width, height));
    }

    /// Refresh one item's measured bounding box.
    #[wasm_bindgen(js_name = set_item_size)]
    pub fn set_item_size(&mut self, item: u32, width: f32, height: f32) -> Result<(), JsError> {
        self.core
            .set_item_size(ItemId(item), Size::new(width, height))
            .map_err(|e| JsError::new(&format!("resize error: {e}")))
    }

    /// Gate the animation capability, e.g. until images finish preloading.
    /// While not ready, spawns are silent no-ops.
    #[wasm_bindgen(js_name = set_ready)]
    pub fn set_ready(&mut self, ready: bool) {
        self.core.provider_mut().set_ready(ready);
    }

    /// Run one tick. Returns `{ changes: [...], events: [...] }` for the
    /// host to apply; see Outputs in the core crate.
    pub fn update(&mut self, dt: f32) -> Result<JsValue, JsError> {
        let outputs = self.core.update(dt);
        swb::to_value(outputs).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Kill every in-flight timeline and detach. Subsequent calls no-op.
    pub fn destroy(&mut self) {
        self.core.destroy();
    }

    /// Current lifecycle phase name, for host-side diagnostics.
    pub fn phase(&self) -> String {
        self.core.phase().name().to_string()
    }

    /// Number of pooled items.
    #[wasm_bindgen(js_name = pool_len)]
    pub fn pool_len(&self) -> u32 {
        self.core.pool().len() as u32
    }

    /// Item source tags in pool order; the host builds one tile per entry
    /// and indexes them by the `item` field of each change.
    pub fn sources(&self) -> Array {
        self.core
            .pool()
            .iter()
            .map(|item| JsValue::from_str(&item.source))
            .collect()
    }
}
