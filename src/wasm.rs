//! WASM bindings consumed by the Node.js package.

use wasm_bindgen::prelude::*;

/// Calculate derived golf shot values from a JSON payload.
///
/// Same contract as the native string API; failures surface as JS errors
/// carrying the engine's error message.
#[wasm_bindgen]
pub fn calculate_derived_values(json_input: &str) -> Result<String, JsValue> {
    crate::bindings::calculate_derived_values(json_input)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
