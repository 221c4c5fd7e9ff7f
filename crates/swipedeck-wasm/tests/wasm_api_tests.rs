#![cfg(target_arch = "wasm32")]
use serde_wasm_bindgen as swb;
use swipedeck_wasm::{abi_version, Swipedeck};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use serde_json::json;
use swipedeck_core::{CardItem, Deck, Outputs, StackEvent};

// Minimal stored-deck JSON matching the swipedeck-core schema
fn test_deck_json() -> JsValue {
    let deck = Deck::new(
        (0..3)
            .map(|i| CardItem {
                image: format!("card-{i}.png"),
                title: format!("Card {i}"),
                description: "d".into(),
            })
            .collect(),
    );
    swb::to_value(&deck).unwrap()
}

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    let sd = Swipedeck::new(test_deck_json(), JsValue::UNDEFINED);
    assert!(sd.is_ok());
}

#[wasm_bindgen_test]
fn missing_deck_is_rejected() {
    assert!(Swipedeck::new(JsValue::NULL, JsValue::UNDEFINED).is_err());
    let empty = swb::to_value(&json!({ "cards": [] })).unwrap();
    assert!(Swipedeck::new(empty, JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn initial_targets_cover_every_card() {
    let mut sd = Swipedeck::new(test_deck_json(), JsValue::NULL).unwrap();
    let out: Outputs = swb::from_value(sd.initial_targets().unwrap()).unwrap();
    assert_eq!(out.changes.len(), 3);
    assert_eq!(out.target_for(0).unwrap().scale, Some(1.0));
    assert_eq!(out.target_for(2).unwrap().scale, Some(0.9));
}

#[wasm_bindgen_test]
fn drive_a_commit_through_json() {
    let mut sd = Swipedeck::new(test_deck_json(), JsValue::NULL).unwrap();
    assert_eq!(sd.card_count(), 3);
    sd.set_card_height(800.0);

    let sample = json!({
        "card_index": 1,
        "down": false,
        "movement": [0.0, -900.0],
        "velocity": 0.5,
        "offset": [0.0, -720.0]
    });
    let out_js = sd.on_gesture(swb::to_value(&sample).unwrap()).unwrap();
    let out: Outputs = swb::from_value(out_js).unwrap();

    assert_eq!(sd.active_index(), 1);
    assert_eq!(
        out.events,
        vec![StackEvent::TransitionCommitted { from: 0, to: 1 }]
    );
    let t = out.target_for(1).expect("patch for the new active card");
    assert_eq!(t.scale, Some(1.0));
    assert_eq!(t.offset_y, Some(-800.0));
}

#[wasm_bindgen_test]
fn bounds_and_shadow_follow_the_engine() {
    let mut sd = Swipedeck::new(test_deck_json(), JsValue::NULL).unwrap();
    sd.set_card_height(800.0);

    let bounds: serde_json::Value = swb::from_value(sd.drag_bounds().unwrap()).unwrap();
    assert_eq!(bounds["top"], json!(-720.0));

    assert!(sd.show_shadow(0));
    assert!(sd.show_shadow(1));
    assert!(!sd.show_shadow(2));
}
