//! UPDATE statements and their ADD/REMOVE/PUT forms.

use super::{Command, CommandKind};
use crate::value::Value;

/// Create an UPDATE ... SET over `class`.
pub fn update(class: &str) -> Command {
    let mut command = Command::new(CommandKind::Update);
    command.set_value("Class", class);
    command
}

/// Create an UPDATE ... ADD, appending links to link collections.
///
/// `updates` are [`Value::entry`] pairs of field and record id.
pub fn update_add<I, V>(updates: I, class: &str, append: bool) -> Command
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    rid_updates(CommandKind::UpdateAdd, updates, class, append)
}

/// Create an UPDATE ... REMOVE, removing links from link collections.
pub fn update_remove<I, V>(updates: I, class: &str, append: bool) -> Command
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    rid_updates(CommandKind::UpdateRemove, updates, class, append)
}

/// Create an UPDATE ... PUT, adding entries to link maps.
///
/// `values` are nested entries: `Value::entry(map, Value::entry(key, rid))`.
pub fn update_put<I, V>(values: I, class: &str, append: bool) -> Command
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let mut command = Command::new(CommandKind::UpdatePut);
    command
        .set_value("Class", class)
        .set_token("MapUpdates", values, append);
    command
}

fn rid_updates<I, V>(kind: CommandKind, updates: I, class: &str, append: bool) -> Command
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let mut command = Command::new(kind);
    command
        .set_value("Class", class)
        .set_token("RidUpdates", updates, append);
    command
}

impl Command {
    /// Set `field = value` pairs of an UPDATE ... SET.
    pub fn set<I, K, V>(&mut self, updates: I, append: bool) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let entries: Vec<Value> = updates
            .into_iter()
            .map(|(field, value)| Value::entry(field, value))
            .collect();
        self.set_token("Updates", entries, append)
    }
}
