//! Configuration key names and their defaults.

/// Maximum number of elements a stack may hold, `-1` for no limit.
pub const MAX_STACK_SIZE: &str = "MAX_STACK_SIZE";
/// Default of [`MAX_STACK_SIZE`].
pub const MAX_STACK_SIZE_DEFAULT: i64 = -1;

/// Seconds allowed to read a request.
pub const READ_TIMEOUT: &str = "READ_TIMEOUT";
/// Default of [`READ_TIMEOUT`].
pub const READ_TIMEOUT_DEFAULT: i64 = 30;

/// Seconds allowed to write a response.
pub const WRITE_TIMEOUT: &str = "WRITE_TIMEOUT";
/// Default of [`WRITE_TIMEOUT`].
pub const WRITE_TIMEOUT_DEFAULT: i64 = 45;

/// Seconds left to pending operations on shutdown.
pub const SHUTDOWN_TIMEOUT: &str = "SHUTDOWN_TIMEOUT";
/// Default of [`SHUTDOWN_TIMEOUT`].
pub const SHUTDOWN_TIMEOUT_DEFAULT: i64 = 15;

/// TCP port of the server.
pub const PORT: &str = "PORT";
/// Default of [`PORT`].
pub const PORT_DEFAULT: i64 = 1205;

/// Evict the bottom element instead of rejecting a push on a full stack.
pub const PUSH_WHEN_FULL: &str = "PUSH_WHEN_FULL";
/// Default of [`PUSH_WHEN_FULL`].
pub const PUSH_WHEN_FULL_DEFAULT: bool = false;

/// Environment variable carrying `name`, e.g. `PILADB_MAX_STACK_SIZE`.
pub fn env(name: &str) -> String {
    format!("PILADB_{}", name)
}

/// Default of an integer key, `-1` for unknown keys.
pub fn default_int(name: &str) -> i64 {
    match name {
        MAX_STACK_SIZE => MAX_STACK_SIZE_DEFAULT,
        READ_TIMEOUT => READ_TIMEOUT_DEFAULT,
        WRITE_TIMEOUT => WRITE_TIMEOUT_DEFAULT,
        SHUTDOWN_TIMEOUT => SHUTDOWN_TIMEOUT_DEFAULT,
        PORT => PORT_DEFAULT,
        _ => -1,
    }
}

/// Default of a boolean key, `false` for unknown keys.
pub fn default_bool(name: &str) -> bool {
    match name {
        PUSH_WHEN_FULL => PUSH_WHEN_FULL_DEFAULT,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_names() {
        assert_eq!(env(MAX_STACK_SIZE), "PILADB_MAX_STACK_SIZE");
        assert_eq!(env("FOO"), "PILADB_FOO");
    }

    #[test]
    fn defaults() {
        assert_eq!(default_int(MAX_STACK_SIZE), -1);
        assert_eq!(default_int(READ_TIMEOUT), 30);
        assert_eq!(default_int(WRITE_TIMEOUT), 45);
        assert_eq!(default_int(SHUTDOWN_TIMEOUT), 15);
        assert_eq!(default_int(PORT), 1205);
        assert_eq!(default_int("FOO"), -1);
        assert!(!default_bool(PUSH_WHEN_FULL));
        assert!(!default_bool("FOO"));
    }
}
