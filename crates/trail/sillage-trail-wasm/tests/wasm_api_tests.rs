#![cfg(target_arch = "wasm32")]
use serde_wasm_bindgen as swb;
use sillage_trail_wasm::SillageTrail;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use serde_json::json;

fn test_items() -> JsValue {
    swb::to_value(&json!([
        { "source": "a.jpg", "width": 160.0, "height": 200.0 },
        { "source": "b.jpg", "width": 160.0, "height": 200.0 },
        { "source": "c.jpg", "width": 160.0, "height": 200.0 },
        { "source": "d.jpg", "width": 160.0, "height": 200.0 }
    ]))
    .unwrap()
}

#[wasm_bindgen_test]
fn constructs_with_default_config() {
    let trail = SillageTrail::new(JsValue::UNDEFINED, test_items(), 1).unwrap();
    assert_eq!(trail.phase(), "uninitialized");
    assert_eq!(trail.pool_len(), 4);
}

#[wasm_bindgen_test]
fn rejects_unknown_variant() {
    assert!(SillageTrail::new(JsValue::UNDEFINED, test_items(), 9).is_err());
}

#[wasm_bindgen_test]
fn straight_sweep_spawns_and_emits_changes() {
    let mut trail = SillageTrail::new(JsValue::UNDEFINED, test_items(), 1).unwrap();
    trail.start(0.0, 0.0, 1200.0, 800.0);

    let mut total_changes = 0usize;
    for i in 0..=40 {
        trail.pointer_move(i as f32 * 10.0, 300.0);
        let out = trail.update(1.0 / 60.0);
        let outputs: serde_json::Value = swb::from_value(out.unwrap()).unwrap();
        total_changes += outputs["changes"].as_array().map(|a| a.len()).unwrap_or(0);
    }
    assert!(total_changes > 0);
    assert_eq!(trail.phase(), "running");

    trail.destroy();
    assert_eq!(trail.phase(), "destroyed");
}
