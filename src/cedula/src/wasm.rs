//! WebAssembly bindings for cedula
//!
//! Lets a browser-based scanning page parse payloads client-side.

use crate::payload::{detect_format as rust_detect_format, parse_bytes};
use crate::record::IdentityRecord as RustIdentityRecord;
use wasm_bindgen::prelude::*;

/// Parse a decoded barcode payload
///
/// # Arguments
/// * `payload` - Raw payload bytes as delivered by the scanner
///
/// # Returns
/// The parsed record. Never fails; check `isParsed` for success.
#[wasm_bindgen(js_name = parsePayload)]
pub fn parse_payload(payload: &[u8]) -> IdentityRecord {
    IdentityRecord {
        inner: parse_bytes(payload),
    }
}

/// Name of the format a payload would be parsed as
#[wasm_bindgen(js_name = detectFormat)]
pub fn detect_format(payload: &str) -> String {
    rust_detect_format(payload).to_string()
}

/// JavaScript-friendly IdentityRecord wrapper
#[wasm_bindgen]
pub struct IdentityRecord {
    inner: RustIdentityRecord,
}

#[wasm_bindgen]
impl IdentityRecord {
    #[wasm_bindgen(getter)]
    pub fn number(&self) -> String {
        self.inner.number.clone()
    }

    #[wasm_bindgen(getter, js_name = givenNames)]
    pub fn given_names(&self) -> String {
        self.inner.given_names.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn surnames(&self) -> String {
        self.inner.surnames.clone()
    }

    #[wasm_bindgen(getter, js_name = dateOfBirth)]
    pub fn date_of_birth(&self) -> String {
        self.inner.date_of_birth.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn sex(&self) -> String {
        self.inner.sex.clone()
    }

    #[wasm_bindgen(getter, js_name = placeOfIssuance)]
    pub fn place_of_issuance(&self) -> String {
        self.inner.place_of_issuance.clone()
    }

    #[wasm_bindgen(getter, js_name = isParsed)]
    pub fn is_parsed(&self) -> bool {
        self.inner.is_parsed()
    }

    /// Serialize with the storage field names (`numero`, `nombres`, ...)
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner)
            .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
    }
}
