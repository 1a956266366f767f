//! piladb configuration
//!
//! Two layers:
//! - [`PilaConfig`]: process settings read from `piladb.toml` and
//!   overlaid with `PILADB_<NAME>` environment variables
//! - [`Config`]: the runtime store, a `_config` database whose stacks are
//!   configuration keys. It is seeded from a `PilaConfig` and can be
//!   changed while running.
//!
//! The engine itself only reads `MAX_STACK_SIZE` and `PUSH_WHEN_FULL`,
//! through [`Config::eviction_policy`].

mod file;
mod store;
pub mod vars;

pub use file::{PilaConfig, CONFIG_FILE_NAME};
pub use store::{Config, CONFIG_DATABASE};
