//! DELETE statements.

use super::{Command, CommandKind};

/// Create a DELETE over the records of `class`.
pub fn delete(class: &str) -> Command {
    let mut command = Command::new(CommandKind::Delete);
    command.set_value("Class", class);
    command
}
