use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::api::solve_with_options;
use crate::instance::RawInstance;
use crate::solver::{Outcome, SearchOptions};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WasmOutcome {
    reachable: bool,
    expanded: usize,
    discarded: usize,
    max_stack: usize,
}

impl From<Outcome> for WasmOutcome {
    fn from(outcome: Outcome) -> Self {
        WasmOutcome {
            reachable: outcome.reachable,
            expanded: outcome.stats.expanded,
            discarded: outcome.stats.discarded,
            max_stack: outcome.stats.max_stack,
        }
    }
}

fn outcome_from_js(value: JsValue) -> Result<Outcome, JsValue> {
    let raw: RawInstance = from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Instance must be {{targetCost, targetWeight, items}}: {e}")))?;
    let instance = raw.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;
    solve_with_options(&instance, SearchOptions::default()).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = solveInstance)]
pub fn solve_instance_js(value: JsValue) -> Result<bool, JsValue> {
    outcome_from_js(value).map(|outcome| outcome.reachable)
}

#[wasm_bindgen(js_name = solveInstanceWithStats)]
pub fn solve_instance_with_stats_js(value: JsValue) -> Result<JsValue, JsValue> {
    let outcome = WasmOutcome::from(outcome_from_js(value)?);
    to_value(&outcome).map_err(|e| JsValue::from_str(&format!("Failed to serialize outcome: {e}")))
}
