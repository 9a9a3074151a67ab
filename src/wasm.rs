//! WebAssembly bindings for the `libgeodms` crate.
//!
//! Values cross the boundary as plain JS objects: a DMS coordinate is
//! `{lat: {orientation, degrees, minutes, seconds}, lon: {...}}` and a decimal coordinate is
//! `{latitude, longitude}`. Errors are returned as strings.

use crate::{Axis, DmsComponent, DmsCoordinate};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    JsValue::from_serde(value).map_err(|_| JsValue::from_str("Unable to convert result to JSON!"))
}

fn error_to_js<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Convert a stored decimal coordinate to DMS, to pre-fill a form.
#[wasm_bindgen]
pub fn decimal_to_dms(longitude: f64, latitude: f64) -> Result<JsValue, JsValue> {
    let dms = crate::decimal_to_dms(longitude, latitude).map_err(error_to_js)?;
    to_js(&dms)
}

/// Convert a DMS coordinate collected from a form to decimal, for storage.
#[wasm_bindgen]
pub fn dms_to_decimal(value: &JsValue) -> Result<JsValue, JsValue> {
    let dms: DmsCoordinate = value
        .into_serde()
        .map_err(|e| JsValue::from_str(&format!("Malformed DMS coordinate: {}", e)))?;
    let decimal = crate::dms_to_decimal(&dms).map_err(error_to_js)?;
    to_js(&decimal)
}

/// Check a single component entered for `axis` ("latitude" or "longitude").
#[wasm_bindgen]
pub fn validate_dms(component: &JsValue, axis: &str) -> Result<(), JsValue> {
    let axis = match axis {
        "latitude" => Axis::Latitude,
        "longitude" => Axis::Longitude,
        other => return Err(JsValue::from_str(&format!("Unknown axis {:?}", other))),
    };
    let component: DmsComponent = component
        .into_serde()
        .map_err(|e| JsValue::from_str(&format!("Malformed DMS component: {}", e)))?;
    crate::validate_dms(&component, axis).map_err(error_to_js)
}

/// Parse a single component written as text, e.g. `48°51'24"N`.
#[wasm_bindgen]
pub fn parse_dms(text: &str) -> Result<JsValue, JsValue> {
    let component = DmsComponent::from_text(text).map_err(error_to_js)?;
    to_js(&component)
}
