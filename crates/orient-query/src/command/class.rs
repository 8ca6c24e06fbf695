//! CREATE/DROP/ALTER CLASS statements.

use super::{Command, CommandKind};
use crate::value::Value;

pub fn class_create(class: &str) -> Command {
    let mut command = Command::new(CommandKind::ClassCreate);
    command.set_value("Class", class);
    command
}

pub fn class_drop(class: &str) -> Command {
    let mut command = Command::new(CommandKind::ClassDrop);
    command.set_value("Class", class);
    command
}

/// Create an ALTER CLASS setting `attribute` to `value`.
pub fn class_alter(class: &str, attribute: &str, value: impl Into<Value>) -> Command {
    let mut command = Command::new(CommandKind::ClassAlter);
    command.set_value("Class", class).changing(attribute, value);
    command
}

impl Command {
    /// Set the attribute changed by an ALTER statement.
    pub fn changing(&mut self, attribute: &str, value: impl Into<Value>) -> &mut Self {
        self.set_value("Attribute", attribute).set_value("Value", value)
    }
}
