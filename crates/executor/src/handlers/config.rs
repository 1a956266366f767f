//! Runtime configuration command handlers.

use piladb_core::Value;
use piladb_engine::Config;

use crate::bridge::validate_name;
use crate::convert::convert_result;
use crate::{Error, Output, Result};

/// Handle ConfigList command.
pub fn config_list(config: &Config) -> Result<Output> {
    Ok(Output::StacksKv(config.list()))
}

/// Handle ConfigGet command.
pub fn config_get(config: &Config, key: String) -> Result<Output> {
    match config.get(&key) {
        Some(value) => Ok(Output::Element(Some(value))),
        None => Err(Error::ConfigKeyNotSet { key }),
    }
}

/// Handle ConfigSet command.
pub fn config_set(config: &Config, key: String, value: Value) -> Result<Output> {
    validate_name("config key", &key)?;
    convert_result(config.set(&key, value.clone()))?;
    Ok(Output::Element(Some(value)))
}
