//! Façade configuration.

use crate::registry::CommandFactory;
use crate::value::Value;

/// Configuration consumed by [`Query::with_config`](crate::Query::with_config).
///
/// By default the façade starts on an empty SELECT and uses the built-in
/// registry unchanged.
#[derive(Debug, Clone, Default)]
pub struct QueryConfig {
    /// Target list the initial SELECT is seeded with.
    pub target: Vec<Value>,
    /// Registry overrides, merged over the built-ins in order.
    pub commands: Vec<(String, CommandFactory)>,
}

impl QueryConfig {
    /// Create a new configuration with defaults (no target, no overrides).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target of the initial SELECT.
    pub fn with_target<I, V>(mut self, target: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.target = target.into_iter().map(Into::into).collect();
        self
    }

    /// Override (or add) the factory for a command id.
    ///
    /// Overrides are applied after the built-ins, so they win on collision.
    pub fn with_command(mut self, id: impl Into<String>, factory: CommandFactory) -> Self {
        self.commands.push((id.into(), factory));
        self
    }

    /// Add several overrides at once.
    pub fn with_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = (S, CommandFactory)>,
        S: Into<String>,
    {
        self.commands
            .extend(commands.into_iter().map(|(id, factory)| (id.into(), factory)));
        self
    }
}
