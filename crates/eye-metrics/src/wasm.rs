//! JavaScript bindings
//!
//! Landmarks cross the boundary as flat `Float64Array`s of 12 values
//! (x0, y0, ... x5, y5). Errors are thrown as JS exceptions carrying the
//! [`EarError`](crate::EarError) message.

use wasm_bindgen::prelude::*;

use crate::compare::{self, BinocularEar};
use crate::ear::{self, EyeLandmarkSet};

#[wasm_bindgen(js_name = "computeEar")]
pub fn compute_ear(landmarks: &[f64]) -> Result<f64, JsError> {
    Ok(ear::compute_ear_flat(landmarks)?)
}

#[wasm_bindgen(js_name = "percentageDifference")]
pub fn percentage_difference(a: f64, b: f64) -> Result<f64, JsError> {
    Ok(compare::percentage_difference(a, b)?)
}

/// Returns `{ left, right }` for the two eyes of one frame.
#[wasm_bindgen(js_name = "compareEyes")]
pub fn compare_eyes(left: &[f64], right: &[f64]) -> Result<JsValue, JsError> {
    let left = EyeLandmarkSet::from_flat(left)?;
    let right = EyeLandmarkSet::from_flat(right)?;
    let result = BinocularEar::from_landmarks(&left, &right)?;
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsError::new(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Success paths only: constructing a JsError or JsValue needs a JS host.
    #[test]
    fn bindings_forward_to_core() {
        let flat = [0.0, 0.0, 2.0, -2.0, 4.0, -2.0, 6.0, 0.0, 4.0, 2.0, 2.0, 2.0];
        let ear = compute_ear(&flat).ok().unwrap();
        assert!((ear - 8.0 / 12.0).abs() < 1e-12);

        let pct = percentage_difference(0.3, 0.2).ok().unwrap();
        assert!((pct - 40.0).abs() < 1e-9);
    }
}
