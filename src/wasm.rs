use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::config::DepositConfig;
use crate::deposit::TermDeposit;
use crate::traits::CalculateBalance;

/// Initialize hooks for better debugging in WASM
#[wasm_bindgen]
pub fn init_hooks() {
    console_error_panic_hook::set_once();
}

/// Validate a deposit's inputs against the product bounds.
///
/// Adapts `TermDeposit::validate` to JS. Returns a `ValidationReport`
/// listing every failing field, so the form can flag each input.
///
/// # Arguments
/// - `config_json`: `DepositConfig` object (use `{}` for the defaults)
/// - `deposit_json`: `TermDeposit` object
#[wasm_bindgen]
pub fn validate_deposit_wasm(config_json: JsValue, deposit_json: JsValue) -> Result<JsValue, JsError> {
    let config: DepositConfig = from_value(config_json)
        .map_err(|e| JsError::new(&format!("Invalid Config JSON: {}", e)))?;
    config
        .validate()
        .map_err(|e| JsError::new(&format!("Invalid Config: {}", e)))?;

    let deposit: TermDeposit = from_value(deposit_json)
        .map_err(|e| JsError::new(&format!("Invalid Deposit JSON: {}", e)))?;

    let report = deposit.validate(&config);

    to_value(&report).map_err(|e| JsError::new(&format!("Serialization Error: {}", e)))
}

/// Project the final balance of a deposit.
///
/// Adapts `TermDeposit::calculate_balance` to JS. Fails when any input is
/// out of bounds; the error message lists the failing fields.
#[wasm_bindgen]
pub fn project_balance_wasm(config_json: JsValue, deposit_json: JsValue) -> Result<JsValue, JsError> {
    let config: DepositConfig = from_value(config_json)
        .map_err(|e| JsError::new(&format!("Invalid Config JSON: {}", e)))?;

    let deposit: TermDeposit = from_value(deposit_json)
        .map_err(|e| JsError::new(&format!("Invalid Deposit JSON: {}", e)))?;

    let details = deposit
        .calculate_balance(&config)
        .map_err(|e| JsError::new(&format!("Calculation Error: {}", e)))?;

    to_value(&details).map_err(|e| JsError::new(&format!("Serialization Error: {}", e)))
}

/// Helper: Test if WASM is alive
#[wasm_bindgen]
pub fn greet(name: &str) -> String {
    format!("Hello, {}! Term deposit WASM is ready.", name)
}
