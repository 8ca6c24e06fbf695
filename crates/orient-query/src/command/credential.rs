//! GRANT and REVOKE statements.

use super::{Command, CommandKind};

/// Create a GRANT of `permission`.
pub fn grant(permission: &str) -> Command {
    permission_command(CommandKind::Grant, permission)
}

/// Create a REVOKE of `permission`.
pub fn revoke(permission: &str) -> Command {
    permission_command(CommandKind::Revoke, permission)
}

fn permission_command(kind: CommandKind, permission: &str) -> Command {
    let mut command = Command::new(kind);
    command.set_value("Permission", permission);
    command
}

impl Command {
    /// Set the ON clause: the resource of a GRANT/REVOKE, the class of a
    /// property statement.
    pub fn on(&mut self, target: &str) -> &mut Self {
        let token = match self.kind {
            CommandKind::Grant | CommandKind::Revoke => "Resource",
            _ => "Class",
        };
        self.set_value(token, target)
    }

    /// Set the role a permission is granted to or revoked from.
    pub fn to(&mut self, role: &str) -> &mut Self {
        self.set_value("Role", role)
    }
}
