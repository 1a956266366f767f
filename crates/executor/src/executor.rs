//! The Executor - single entry point to piladb's engine.
//!
//! The Executor routes commands to the appropriate handlers and converts
//! results to outputs.

use std::sync::Arc;

use piladb_engine::{Config, Pila, PilaConfig};
use tracing::debug;

use crate::handlers::{config, database, stack};
use crate::{Command, Output, Result};

/// The command executor - single entry point to piladb's engine.
///
/// The Executor holds the Pila and the runtime configuration store but keeps
/// no state of its own.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use piladb_executor::{Command, Executor};
/// use piladb_core::Value;
///
/// let executor = Executor::default();
///
/// executor.execute(Command::CreateDatabase { name: "db".into() })?;
/// executor.execute(Command::CreateStack { database: "db".into(), name: "s".into() })?;
///
/// // Batch execution
/// let results = executor.execute_many(vec![
///     Command::Push { database: "db".into(), stack: "s".into(), element: Value::Int(1) },
///     Command::Pop { database: "db".into(), stack: "s".into() },
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Executor {
    pila: Arc<Pila>,
    config: Arc<Config>,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(Pila::new(), Arc::new(Config::new()))
    }
}

impl Executor {
    /// Create an executor over an existing Pila and configuration store.
    pub fn new(pila: Arc<Pila>, config: Arc<Config>) -> Self {
        Self { pila, config }
    }

    /// Create an executor with a fresh Pila, configured from `config`.
    pub fn from_config(config: &PilaConfig) -> Result<Self> {
        let store = crate::convert::convert_result(Config::from_pila_config(config))?;
        Ok(Self::new(Pila::new(), Arc::new(store)))
    }

    /// The Pila commands run against.
    pub fn pila(&self) -> &Arc<Pila> {
        &self.pila
    }

    /// The runtime configuration store.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        debug!(target: "piladb::executor", command = cmd.name(), "execute");
        let p = &self.pila;
        match cmd {
            Command::Ping => Ok(Output::Pong),
            Command::PilaStatus => database::pila_status(p),
            Command::CreateDatabase { name } => database::create_database(p, name),
            Command::DatabaseStatus { database } => database::database_status(p, database),
            Command::DeleteDatabase { database } => database::delete_database(p, database),

            Command::CreateStack { database, name } => stack::create_stack(p, database, name),
            Command::StacksStatus { database } => stack::stacks_status(p, database),
            Command::StacksKv { database } => stack::stacks_kv(p, database),

            Command::StackStatus { database, stack } => stack::stack_status(p, database, stack),
            Command::Peek { database, stack } => stack::peek(p, database, stack),
            Command::Size { database, stack } => stack::size(p, database, stack),
            Command::Empty { database, stack } => stack::empty(p, database, stack),
            Command::Full { database, stack } => stack::full(p, &self.config, database, stack),

            Command::Push {
                database,
                stack,
                element,
            } => stack::push(p, &self.config, database, stack, element),
            Command::Base {
                database,
                stack,
                element,
            } => stack::base(p, &self.config, database, stack, element),
            Command::Pop { database, stack } => stack::pop(p, database, stack),
            Command::Sweep { database, stack } => stack::sweep(p, database, stack),
            Command::Rotate { database, stack } => stack::rotate(p, database, stack),
            Command::Flush { database, stack } => stack::flush(p, database, stack),
            Command::Block { database, stack } => stack::block(p, database, stack),
            Command::Unblock { database, stack } => stack::unblock(p, database, stack),
            Command::DeleteStack { database, stack } => stack::delete_stack(p, database, stack),

            Command::ConfigList => config::config_list(&self.config),
            Command::ConfigGet { key } => config::config_get(&self.config, key),
            Command::ConfigSet { key, value } => config::config_set(&self.config, key, value),
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in the same order as the input commands.
    /// Execution continues even if some commands fail.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }
}
