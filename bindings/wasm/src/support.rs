// Support utilities for WASM bindings
use serde::de::DeserializeOwned;

/// Parse JSON config, treating empty input as all defaults.
/// Fields missing from the JSON take their defaults via `#[serde(default)]`.
pub fn parse_config<T: DeserializeOwned + Default>(config_json: &str) -> Result<T, String> {
    if config_json.trim().is_empty() || config_json == "{}" {
        Ok(T::default())
    } else {
        serde_json::from_str::<T>(config_json).map_err(|e| format!("Invalid config JSON: {}", e))
    }
}

/// Parse JSON config, falling back to defaults when it is malformed
pub fn parse_with_defaults<T: DeserializeOwned + Default>(config_json: &str) -> T {
    parse_config(config_json).unwrap_or_default()
}
