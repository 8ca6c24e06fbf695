//! Statement kinds: schema templates and formatter bindings.
//!
//! Every built-in statement is described here as data. The behaviour shared by
//! all of them (token store, WHERE accumulator, rendering) lives on
//! [`Command`](super::Command).

use crate::formatter::Formatter;

/// Bindings every command starts with.
pub(crate) const BASE_FORMATTERS: &[(&str, Formatter)] = &[
    ("Where", Formatter::Where),
    ("OrderBy", Formatter::OrderBy),
    ("Limit", Formatter::Limit),
    ("Skip", Formatter::Skip),
    ("Range", Formatter::Range),
];

/// The statement a [`Command`](super::Command) renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Select,
    Insert,
    Delete,
    Update,
    UpdateAdd,
    UpdateRemove,
    UpdatePut,
    Grant,
    Revoke,
    ClassCreate,
    ClassDrop,
    ClassAlter,
    PropertyCreate,
    PropertyDrop,
    PropertyAlter,
    FindReferences,
    Link,
    IndexCreate,
    IndexDrop,
    IndexCount,
    IndexPut,
    IndexRemove,
    IndexLookup,
    /// Caller-defined template, see [`Command::custom`](super::Command::custom).
    Custom,
}

impl CommandKind {
    /// All built-in kinds, in registry order.
    pub const BUILTIN: [CommandKind; 23] = [
        CommandKind::Select,
        CommandKind::Insert,
        CommandKind::Delete,
        CommandKind::Update,
        CommandKind::UpdateAdd,
        CommandKind::UpdateRemove,
        CommandKind::UpdatePut,
        CommandKind::Grant,
        CommandKind::Revoke,
        CommandKind::ClassCreate,
        CommandKind::ClassDrop,
        CommandKind::ClassAlter,
        CommandKind::PropertyCreate,
        CommandKind::PropertyDrop,
        CommandKind::PropertyAlter,
        CommandKind::FindReferences,
        CommandKind::Link,
        CommandKind::IndexCreate,
        CommandKind::IndexDrop,
        CommandKind::IndexCount,
        CommandKind::IndexPut,
        CommandKind::IndexRemove,
        CommandKind::IndexLookup,
    ];

    /// Registry id of the kind (`"select"`, `"update.add"`, ...).
    pub fn id(self) -> &'static str {
        match self {
            CommandKind::Select => "select",
            CommandKind::Insert => "insert",
            CommandKind::Delete => "delete",
            CommandKind::Update => "update",
            CommandKind::UpdateAdd => "update.add",
            CommandKind::UpdateRemove => "update.remove",
            CommandKind::UpdatePut => "update.put",
            CommandKind::Grant => "grant",
            CommandKind::Revoke => "revoke",
            CommandKind::ClassCreate => "class.create",
            CommandKind::ClassDrop => "class.drop",
            CommandKind::ClassAlter => "class.alter",
            CommandKind::PropertyCreate => "property.create",
            CommandKind::PropertyDrop => "property.drop",
            CommandKind::PropertyAlter => "property.alter",
            CommandKind::FindReferences => "references.find",
            CommandKind::Link => "link",
            CommandKind::IndexCreate => "index.create",
            CommandKind::IndexDrop => "index.drop",
            CommandKind::IndexCount => "index.count",
            CommandKind::IndexPut => "index.put",
            CommandKind::IndexRemove => "index.remove",
            CommandKind::IndexLookup => "index.lookup",
            CommandKind::Custom => "custom",
        }
    }

    /// Schema template of the kind. Empty for [`CommandKind::Custom`].
    pub fn schema(self) -> &'static str {
        match self {
            CommandKind::Select => {
                "SELECT :Projections FROM :Target :Where :OrderBy :Skip :Limit :Range"
            }
            CommandKind::Insert => "INSERT INTO :Target (:Fields) VALUES (:Values)",
            CommandKind::Delete => "DELETE FROM :Class :Where",
            CommandKind::Update => "UPDATE :Class SET :Updates :Where",
            CommandKind::UpdateAdd => "UPDATE :Class ADD :RidUpdates :Where",
            CommandKind::UpdateRemove => "UPDATE :Class REMOVE :RidUpdates :Where",
            CommandKind::UpdatePut => "UPDATE :Class PUT :MapUpdates :Where",
            CommandKind::Grant => "GRANT :Permission ON :Resource TO :Role",
            CommandKind::Revoke => "REVOKE :Permission ON :Resource FROM :Role",
            CommandKind::ClassCreate => "CREATE CLASS :Class",
            CommandKind::ClassDrop => "DROP CLASS :Class",
            CommandKind::ClassAlter => "ALTER CLASS :Class :Attribute :Value",
            CommandKind::PropertyCreate => "CREATE PROPERTY :Class.:Property :Type :Linked",
            CommandKind::PropertyDrop => "DROP PROPERTY :Class.:Property",
            CommandKind::PropertyAlter => "ALTER PROPERTY :Class.:Property :Attribute :Value",
            CommandKind::FindReferences => "FIND REFERENCES :Rid :ClassList",
            CommandKind::Link => {
                "CREATE LINK :Name FROM :SourceClass.:SourceProperty TO :DestinationClass.:DestinationProperty :Inverse"
            }
            CommandKind::IndexCreate => "CREATE INDEX :IndexClass:Property :Type",
            CommandKind::IndexDrop => "DROP INDEX :IndexClass:Property",
            CommandKind::IndexCount => "SELECT count(*) AS size FROM index::Name",
            CommandKind::IndexPut => r#"INSERT INTO index::Name (key,rid) values (":Key", :Value)"#,
            CommandKind::IndexRemove => "DELETE FROM index::Name :Where",
            CommandKind::IndexLookup => "SELECT FROM index::Index :Where",
            CommandKind::Custom => "",
        }
    }

    /// Bindings specific to the kind, applied over [`BASE_FORMATTERS`].
    pub fn formatters(self) -> &'static [(&'static str, Formatter)] {
        match self {
            CommandKind::Insert => &[("Values", Formatter::Values)],
            CommandKind::Update => &[("Updates", Formatter::Updates)],
            CommandKind::UpdateAdd | CommandKind::UpdateRemove => {
                &[("RidUpdates", Formatter::RidUpdates)]
            }
            CommandKind::UpdatePut => &[("MapUpdates", Formatter::MapUpdates)],
            CommandKind::FindReferences => {
                &[("Rid", Formatter::Rid), ("ClassList", Formatter::List)]
            }
            CommandKind::Link => &[("Inverse", Formatter::Inverse)],
            CommandKind::IndexCreate | CommandKind::IndexDrop => {
                &[("IndexClass", Formatter::IndexClass)]
            }
            CommandKind::IndexPut => &[
                ("Name", Formatter::Regular),
                ("Key", Formatter::Regular),
                ("Value", Formatter::EmbeddedRid),
            ],
            _ => &[],
        }
    }
}
