//! FIND REFERENCES statements.

use super::{Command, CommandKind};
use crate::value::Value;

/// Find the records referencing `rid`.
pub fn find_references(rid: &str) -> Command {
    let mut command = Command::new(CommandKind::FindReferences);
    command.set_value("Rid", rid);
    command
}

impl Command {
    /// Restrict the statement to the given classes.
    pub fn in_classes<I, V>(&mut self, classes: I, append: bool) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.set_token("ClassList", classes, append)
    }
}
