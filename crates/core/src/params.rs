//! Helpers for reading typed values out of a JSON parameter object.
//!
//! Overrides arrive as loose JSON (CLI `--params`, a host config blob). Each
//! helper falls back to the supplied default when the key is absent or the
//! wrong type, so a partial override object is always usable.

use serde_json::Value;

/// Reads `params[name]` as f64, or `default`.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Reads `params[name]` as usize, or `default`. Rejects negatives and floats.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Reads `params[name]` as a string, or `default`.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

/// Reads `params[name]` as an optional f64: `None` when absent, JSON null,
/// or mistyped. Used for switches like the emitter probability where absence
/// means "off".
pub fn param_opt_f64(params: &Value, name: &str, default: Option<f64>) -> Option<f64> {
    match params.get(name) {
        None => default,
        Some(v) => v.as_f64(),
    }
}
