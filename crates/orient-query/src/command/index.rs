//! Index statements: DDL, entry insertion/removal, counting and lookups.

use super::{Command, CommandKind};
use crate::value::Value;

/// Create an index on `property`, optionally qualified by `class` and typed.
pub fn index_create(property: &str, class: Option<&str>, ty: Option<&str>) -> Command {
    let mut command = Command::new(CommandKind::IndexCreate);
    if let Some(class) = class {
        command.set_value("IndexClass", class);
    }
    if let Some(ty) = ty {
        command.of_type(ty);
    }
    command.set_value("Property", property);
    command
}

/// Drop the index on `property`, optionally qualified by `class`.
pub fn index_drop(property: &str, class: Option<&str>) -> Command {
    let mut command = Command::new(CommandKind::IndexDrop);
    if let Some(class) = class {
        command.set_value("IndexClass", class);
    }
    command.set_value("Property", property);
    command
}

/// Count the entries of the index `name`.
pub fn index_count(name: &str) -> Command {
    let mut command = Command::new(CommandKind::IndexCount);
    command.set_value("Name", name);
    command
}

/// Put the entry `key -> rid` into the index `name`.
pub fn index_put(name: &str, key: &str, rid: impl Into<Value>) -> Command {
    let mut command = Command::new(CommandKind::IndexPut);
    command
        .set_value("Name", name)
        .set_value("Key", key)
        .set_value("Value", rid);
    command
}

/// Remove the entries of the index `name` under `key`, or only the one
/// pointing to `rid` when given.
pub fn index_remove(name: &str, key: impl Into<Value>, rid: Option<Value>) -> Command {
    let mut command = Command::new(CommandKind::IndexRemove);
    command.set_value("Name", name).where_("key = ?", key);
    if let Some(rid) = rid {
        let rid = match rid {
            Value::Text(s) => Value::Rid(s),
            other => other,
        };
        command.and_where("rid = ?", rid);
    }
    command
}

/// Select the entries of the index `index`.
pub fn index_lookup(index: &str) -> Command {
    let mut command = Command::new(CommandKind::IndexLookup);
    command.set_value("Index", index);
    command
}

impl Command {
    /// Set the type of an index or property.
    pub fn of_type(&mut self, ty: &str) -> &mut Self {
        self.set_value("Type", ty)
    }
}
