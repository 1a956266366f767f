//! Runtime configuration store backed by a `_config` database
//!
//! Each key is a stack named after it. `set` pushes a value, `get` peeks,
//! so the stack keeps the history of every value the key has held.

use std::sync::Arc;

use piladb_core::{timestamp, EvictionPolicy, Identity, PilaError, PilaResult, StackCapacity, Value};
use tracing::info;

use super::file::PilaConfig;
use super::vars;
use crate::database::Database;
use crate::status::StacksKv;

/// Name of the database holding configuration values.
pub const CONFIG_DATABASE: &str = "_config";

/// Runtime configuration.
#[derive(Debug)]
pub struct Config {
    values: Arc<Database>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create an empty store; every accessor returns its default.
    pub fn new() -> Self {
        Config {
            values: Arc::new(Database::new(CONFIG_DATABASE)),
        }
    }

    /// Create a store seeded with every key of `config`.
    pub fn from_pila_config(config: &PilaConfig) -> PilaResult<Self> {
        let store = Config::new();
        store.set(vars::MAX_STACK_SIZE, Value::Int(config.max_stack_size))?;
        store.set(vars::PUSH_WHEN_FULL, Value::Bool(config.push_when_full))?;
        store.set(vars::READ_TIMEOUT, Value::Int(config.read_timeout as i64))?;
        store.set(vars::WRITE_TIMEOUT, Value::Int(config.write_timeout as i64))?;
        store.set(
            vars::SHUTDOWN_TIMEOUT,
            Value::Int(config.shutdown_timeout as i64),
        )?;
        store.set(vars::PORT, Value::Int(config.port as i64))?;
        Ok(store)
    }

    /// The backing database.
    pub fn values(&self) -> &Arc<Database> {
        &self.values
    }

    /// Current value of `key`, `None` if never set.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.values
            .stack(&Identity::composite(CONFIG_DATABASE, key))
            .and_then(|stack| stack.peek())
    }

    /// Set `key` to `value`, creating the key if needed.
    pub fn set(&self, key: &str, value: Value) -> PilaResult<()> {
        let stack = match self.values.stack_by_name(key) {
            Some(stack) => stack,
            None => {
                // a concurrent set may create the key first
                match self.values.create_stack(key) {
                    Ok(id) => self.values.stack(&id),
                    Err(_) => self.values.stack_by_name(key),
                }
                .ok_or_else(|| PilaError::stack_not_found(key))?
            }
        };
        stack.push(value)?;
        stack.update(timestamp::now());
        info!(target: "piladb::config", key, "Config value set");
        Ok(())
    }

    /// Every key with its current value.
    pub fn list(&self) -> StacksKv {
        self.values.stacks_kv()
    }

    /// `MAX_STACK_SIZE`, unbounded unless a non-negative integer is set.
    pub fn max_stack_size(&self) -> StackCapacity {
        StackCapacity::from_config(self.int_value(vars::MAX_STACK_SIZE))
    }

    /// `PUSH_WHEN_FULL`.
    pub fn push_when_full(&self) -> bool {
        match self.get(vars::PUSH_WHEN_FULL) {
            Some(Value::Bool(b)) => b,
            Some(Value::String(s)) => s
                .parse()
                .unwrap_or(vars::default_bool(vars::PUSH_WHEN_FULL)),
            _ => vars::default_bool(vars::PUSH_WHEN_FULL),
        }
    }

    /// Policy applied to pushes: `MAX_STACK_SIZE` and `PUSH_WHEN_FULL`
    /// read together.
    pub fn eviction_policy(&self) -> EvictionPolicy {
        EvictionPolicy::new(self.max_stack_size(), self.push_when_full())
    }

    /// `READ_TIMEOUT` in seconds.
    pub fn read_timeout(&self) -> u64 {
        self.int_value(vars::READ_TIMEOUT) as u64
    }

    /// `WRITE_TIMEOUT` in seconds.
    pub fn write_timeout(&self) -> u64 {
        self.int_value(vars::WRITE_TIMEOUT) as u64
    }

    /// `SHUTDOWN_TIMEOUT` in seconds.
    pub fn shutdown_timeout(&self) -> u64 {
        self.int_value(vars::SHUTDOWN_TIMEOUT) as u64
    }

    /// `PORT`.
    pub fn port(&self) -> u16 {
        u16::try_from(self.int_value(vars::PORT)).unwrap_or(vars::PORT_DEFAULT as u16)
    }

    fn int_value(&self, key: &str) -> i64 {
        int_value(self.get(key).as_ref(), vars::default_int(key))
    }
}

/// Loose integer coercion: integers, truncated floats and numeric strings
/// are accepted; negative or anything else yields `default`.
fn int_value(value: Option<&Value>, default: i64) -> i64 {
    let coerced = match value {
        Some(Value::Int(i)) => Some(*i),
        Some(Value::Float(f)) if f.is_finite() => Some(f.trunc() as i64),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    match coerced {
        Some(i) if i >= 0 => i,
        _ => default,
    }
}
