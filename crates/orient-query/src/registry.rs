//! Command registry: command id -> factory.
//!
//! The [`Query`](crate::Query) façade never names a command type directly.
//! Every verb resolves its id here and builds the command from positional
//! [`Args`], so replacing a factory changes what the verb produces.

use crate::command::{self, Command, CommandKind};
use crate::error::{OrientError, OrientResult};
use crate::value::{Args, Value};
use std::collections::HashMap;

/// Builds a command from positional arguments.
pub type CommandFactory = fn(&Args) -> Command;

/// Map of command ids to factories.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    factories: HashMap<String, CommandFactory>,
}

impl Registry {
    /// Create a registry holding a factory for every built-in command kind.
    pub fn builtin() -> Self {
        let factories = CommandKind::BUILTIN
            .into_iter()
            .filter_map(|kind| builtin_factory(kind).map(|factory| (kind.id().to_string(), factory)))
            .collect();
        Self { factories }
    }

    /// Register `factory` under `id`, replacing any previous entry.
    pub fn register(&mut self, id: impl Into<String>, factory: CommandFactory) {
        self.factories.insert(id.into(), factory);
    }

    /// Merge `overrides` into the registry. On an id collision the override wins.
    pub fn merge<I, S>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (S, CommandFactory)>,
        S: Into<String>,
    {
        for (id, factory) in overrides {
            self.register(id, factory);
        }
    }

    pub fn get(&self, id: &str) -> Option<CommandFactory> {
        self.factories.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Look `id` up, failing with [`OrientError::CommandNotFound`] naming
    /// `facade` when it is not registered.
    pub fn resolve(&self, id: &str, facade: &'static str) -> OrientResult<CommandFactory> {
        self.get(id)
            .ok_or_else(|| OrientError::command_not_found(id, facade))
    }

    /// Registered ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

/// Factory used for a built-in kind; `None` for [`CommandKind::Custom`].
pub fn builtin_factory(kind: CommandKind) -> Option<CommandFactory> {
    let factory: CommandFactory = match kind {
        CommandKind::Select => select,
        CommandKind::Insert => |_| command::insert(),
        CommandKind::Delete => |args| command::delete(&text(args, 0)),
        CommandKind::Update => |args| command::update(&text(args, 0)),
        CommandKind::UpdateAdd => |args| {
            command::update_add(args.list(0), &text(args, 1), args.flag_or(2, true))
        },
        CommandKind::UpdateRemove => |args| {
            command::update_remove(args.list(0), &text(args, 1), args.flag_or(2, true))
        },
        CommandKind::UpdatePut => |args| {
            command::update_put(args.list(0), &text(args, 1), args.flag_or(2, true))
        },
        CommandKind::Grant => |args| command::grant(&text(args, 0)),
        CommandKind::Revoke => |args| command::revoke(&text(args, 0)),
        CommandKind::ClassCreate => |args| command::class_create(&text(args, 0)),
        CommandKind::ClassDrop => |args| command::class_drop(&text(args, 0)),
        CommandKind::ClassAlter => |args| {
            command::class_alter(&text(args, 0), &text(args, 1), value(args, 2))
        },
        CommandKind::PropertyCreate => |args| {
            command::property_create(
                &text(args, 0),
                args.text(1).as_deref(),
                args.text(2).as_deref(),
            )
        },
        CommandKind::PropertyDrop => |args| command::property_drop(&text(args, 0)),
        CommandKind::PropertyAlter => |args| command::property_alter(&text(args, 0)),
        CommandKind::FindReferences => |args| command::find_references(&text(args, 0)),
        CommandKind::Link => |args| {
            command::link(&text(args, 0), &text(args, 1), &text(args, 2), args.flag(3))
        },
        CommandKind::IndexCreate => |args| {
            command::index_create(
                &text(args, 0),
                args.text(1).as_deref(),
                args.text(2).as_deref(),
            )
        },
        CommandKind::IndexDrop => |args| {
            command::index_drop(&text(args, 0), args.text(1).as_deref())
        },
        CommandKind::IndexCount => |args| command::index_count(&text(args, 0)),
        CommandKind::IndexPut => |args| {
            command::index_put(&text(args, 0), &text(args, 1), value(args, 2))
        },
        CommandKind::IndexRemove => |args| {
            let rid = args.get(2).filter(|rid| !rid.is_null()).cloned();
            command::index_remove(&text(args, 0), value(args, 1), rid)
        },
        CommandKind::IndexLookup => |args| command::index_lookup(&text(args, 0)),
        CommandKind::Custom => return None,
    };
    Some(factory)
}

/// `select` takes the target list first and the projections second.
fn select(args: &Args) -> Command {
    let mut command = command::select(args.list(0));
    command.select(args.list(1), true);
    command
}

fn text(args: &Args, index: usize) -> String {
    args.text(index).unwrap_or_default()
}

fn value(args: &Args, index: usize) -> Value {
    args.get(index).cloned().unwrap_or(Value::Null)
}
