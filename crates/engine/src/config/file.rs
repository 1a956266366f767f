//! Process configuration via `piladb.toml`
//!
//! On first start a default `piladb.toml` can be written next to the
//! process. Environment variables named `PILADB_<KEY>` take precedence
//! over the file.

use std::path::Path;

use piladb_core::{PilaError, PilaResult, StackCapacity};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::vars;

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "piladb.toml";

/// Process configuration loaded from `piladb.toml`.
///
/// # Example
///
/// ```toml
/// # Max number of elements per stack, -1 for no limit
/// max_stack_size = -1
/// # Evict the bottom element instead of rejecting pushes on full stacks
/// push_when_full = false
/// port = 1205
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PilaConfig {
    /// Max stack size, `-1` for no limit.
    #[serde(default = "default_max_stack_size")]
    pub max_stack_size: i64,
    /// Evict instead of rejecting when a stack is full.
    #[serde(default)]
    pub push_when_full: bool,
    /// Request read timeout in seconds.
    #[serde(default = "default_read_timeout")]
    pub read_timeout: u64,
    /// Response write timeout in seconds.
    #[serde(default = "default_write_timeout")]
    pub write_timeout: u64,
    /// Shutdown grace period in seconds.
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,
    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_max_stack_size() -> i64 {
    vars::MAX_STACK_SIZE_DEFAULT
}

fn default_read_timeout() -> u64 {
    vars::READ_TIMEOUT_DEFAULT as u64
}

fn default_write_timeout() -> u64 {
    vars::WRITE_TIMEOUT_DEFAULT as u64
}

fn default_shutdown_timeout() -> u64 {
    vars::SHUTDOWN_TIMEOUT_DEFAULT as u64
}

fn default_port() -> u16 {
    vars::PORT_DEFAULT as u16
}

impl Default for PilaConfig {
    fn default() -> Self {
        Self {
            max_stack_size: default_max_stack_size(),
            push_when_full: vars::PUSH_WHEN_FULL_DEFAULT,
            read_timeout: default_read_timeout(),
            write_timeout: default_write_timeout(),
            shutdown_timeout: default_shutdown_timeout(),
            port: default_port(),
        }
    }
}

impl PilaConfig {
    /// Stack capacity described by `max_stack_size`.
    pub fn capacity(&self) -> StackCapacity {
        StackCapacity::from_config(self.max_stack_size)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# piladb configuration
#
# Max number of elements per stack (default: -1, no limit)
max_stack_size = -1

# When a stack is full, evict its bottom element to make room for a push
# instead of rejecting it (default: false)
push_when_full = false

# Timeouts in seconds
read_timeout = 30
write_timeout = 45
shutdown_timeout = 15

# TCP port (default: 1205)
port = 1205
"#
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> PilaResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PilaError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            PilaError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> PilaResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                PilaError::Config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> PilaResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PilaError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            PilaError::Config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Overlay `PILADB_<KEY>` variables from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    /// Overlay variables read through `lookup`.
    ///
    /// An empty variable is ignored. A variable that does not parse sets
    /// the key back to its default.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(&vars::env(key)).filter(|v| !v.is_empty());

        if let Some(raw) = read(vars::MAX_STACK_SIZE) {
            self.max_stack_size = int_or_default(vars::MAX_STACK_SIZE, &raw);
        }
        if let Some(raw) = read(vars::READ_TIMEOUT) {
            self.read_timeout = unsigned_or_default(vars::READ_TIMEOUT, &raw, default_read_timeout());
        }
        if let Some(raw) = read(vars::WRITE_TIMEOUT) {
            self.write_timeout = unsigned_or_default(vars::WRITE_TIMEOUT, &raw, default_write_timeout());
        }
        if let Some(raw) = read(vars::SHUTDOWN_TIMEOUT) {
            self.shutdown_timeout = unsigned_or_default(vars::SHUTDOWN_TIMEOUT, &raw, default_shutdown_timeout());
        }
        if let Some(raw) = read(vars::PORT) {
            self.port = unsigned_or_default(vars::PORT, &raw, default_port());
        }
        if let Some(raw) = read(vars::PUSH_WHEN_FULL) {
            self.push_when_full = raw.parse().unwrap_or_else(|_| {
                warn!(target: "piladb::config", key = vars::PUSH_WHEN_FULL, value = %raw, "Invalid boolean, using default");
                vars::default_bool(vars::PUSH_WHEN_FULL)
            });
        }
    }
}

fn int_or_default(key: &str, raw: &str) -> i64 {
    raw.trim().parse().unwrap_or_else(|_| {
        warn!(target: "piladb::config", key, value = %raw, "Invalid integer, using default");
        vars::default_int(key)
    })
}

fn unsigned_or_default<T: TryFrom<i64>>(key: &str, raw: &str, default: T) -> T {
    T::try_from(int_or_default(key, raw)).unwrap_or_else(|_| {
        warn!(target: "piladb::config", key, value = %raw, "Out of range, using default");
        default
    })
}
