//! Builder configuration.
//!
//! Configuration is an explicit value attached to a builder rather than
//! process-wide mutable state. The defaults match the surrounding tooling:
//! debug output disabled, errors surfaced as `Result`s, and a connection
//! named `"default"`.

/// Configuration consulted by the statement builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlConfig {
    /// Emit the rendered statement and bound parameters through `tracing`
    /// when `log_query` / `log_parameters` are called.
    pub debug: bool,
    /// Hint for the execution layer: propagate database errors instead of
    /// swallowing them. The builders themselves always return `Result`s.
    pub throw_exceptions: bool,
    /// Name of the connection the execution layer should resolve.
    pub default_connection: String,
}

impl Default for SqlConfig {
    fn default() -> Self {
        Self {
            debug: false,
            throw_exceptions: false,
            default_connection: "default".to_string(),
        }
    }
}

impl SqlConfig {
    /// Create a configuration with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable debug output.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
