//! CREATE/DROP/ALTER PROPERTY statements.
//!
//! The owning class is set afterwards with [`Command::on`].

use super::{Command, CommandKind};

/// Create a CREATE PROPERTY with an optional type and linked class/type.
pub fn property_create(property: &str, ty: Option<&str>, linked: Option<&str>) -> Command {
    let mut command = Command::new(CommandKind::PropertyCreate);
    command.set_value("Property", property);
    if let Some(ty) = ty {
        command.set_value("Type", ty);
    }
    if let Some(linked) = linked {
        command.set_value("Linked", linked);
    }
    command
}

pub fn property_drop(property: &str) -> Command {
    let mut command = Command::new(CommandKind::PropertyDrop);
    command.set_value("Property", property);
    command
}

/// Create an ALTER PROPERTY; set the change with [`Command::changing`].
pub fn property_alter(property: &str) -> Command {
    let mut command = Command::new(CommandKind::PropertyAlter);
    command.set_value("Property", property);
    command
}
