//! INSERT statements.

use super::{Command, CommandKind};
use crate::value::Value;

/// Create an empty INSERT.
pub fn insert() -> Command {
    Command::new(CommandKind::Insert)
}

impl Command {
    /// Set the fields being inserted.
    pub fn fields<I, V>(&mut self, fields: I, append: bool) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.set_token("Fields", fields, append)
    }

    /// Set the INTO target. A list target keeps only its first element.
    pub fn into_target(&mut self, target: impl Into<Value>) -> &mut Self {
        let target = match target.into() {
            Value::List(items) => items.into_iter().next().unwrap_or(Value::Null),
            other => other,
        };
        self.set_value("Target", target)
    }

    /// Set the values being inserted, in field order.
    pub fn values<I, V>(&mut self, values: I, append: bool) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.set_token("Values", values, append)
    }
}
