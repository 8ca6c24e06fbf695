//! CREATE LINK statements.

use super::{Command, CommandKind};

/// Create a link named `alias` from `class.property`.
///
/// The destination is set with [`Command::link_to`]; `inverse` makes the link
/// go the other way.
pub fn link(class: &str, property: &str, alias: &str, inverse: bool) -> Command {
    let mut command = Command::new(CommandKind::Link);
    command
        .set_value("SourceClass", class)
        .set_value("SourceProperty", property)
        .set_value("Name", alias)
        .set_value("Inverse", inverse);
    command
}

impl Command {
    /// Set the destination `class.property` of a link.
    pub fn link_to(&mut self, class: &str, property: &str) -> &mut Self {
        self.set_value("DestinationClass", class)
            .set_value("DestinationProperty", property)
    }
}
