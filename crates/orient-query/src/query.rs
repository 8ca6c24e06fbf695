//! The [`Query`] façade.
//!
//! A `Query` owns exactly one current [`Command`]. Verb methods (`select`,
//! `insert`, `lookup`, ...) resolve a command id through the [`Registry`],
//! build a fresh command and replace the current one. Every other method
//! forwards to the current command.

use crate::command::{self, Command, CommandKind, Tokens};
use crate::config::QueryConfig;
use crate::error::OrientResult;
use crate::registry::Registry;
use crate::value::{Args, Value};
use std::any::type_name;
use std::fmt;

/// Fluent statement builder over a replaceable current command.
///
/// # Example
///
/// ```ignore
/// use orient_query::Query;
///
/// let mut query = Query::with_target(["Profile"]);
/// query.where_("name = ?", "luke").limit(10);
/// assert_eq!(query.raw(), r#"SELECT FROM Profile WHERE name = "luke" LIMIT 10"#);
///
/// query.index_count("dictionary")?;
/// assert_eq!(query.raw(), "SELECT count(*) AS size FROM index:dictionary");
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    command: Command,
    registry: Registry,
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

impl Query {
    /// Create a façade on an empty SELECT with the built-in registry.
    pub fn new() -> Self {
        Self::with_config(QueryConfig::new())
    }

    /// Create a façade on a SELECT from `target`.
    pub fn with_target<I, V>(target: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::with_config(QueryConfig::new().with_target(target))
    }

    /// Create a façade from a [`QueryConfig`].
    ///
    /// The configured overrides are merged over the built-in registry and the
    /// initial SELECT is built through the (possibly overridden) `select` id.
    pub fn with_config(config: QueryConfig) -> Self {
        let mut registry = Registry::builtin();
        registry.merge(config.commands);

        let args = Args::new().with(config.target);
        let command = match registry.get(CommandKind::Select.id()) {
            Some(factory) => factory(&args),
            None => command::select(args.list(0)),
        };

        Self { command, registry }
    }

    /// Replace the current command with the one registered under `id`.
    ///
    /// On an unknown id the current command is left as it was.
    pub fn dispatch(&mut self, id: &str, args: &Args) -> OrientResult<&mut Command> {
        let factory = match self.registry.resolve(id, type_name::<Self>()) {
            Ok(factory) => factory,
            Err(err) => {
                trace_warn!(id, error = %err, "command dispatch failed");
                return Err(err);
            }
        };

        self.command = factory(args);
        trace_debug!(id, kind = self.command.kind().id(), "dispatched command");
        Ok(&mut self.command)
    }

    // ==================== Verbs ====================

    /// Start a new SELECT of `projections`; set its target with [`from`](Self::from).
    pub fn select<I, V>(&mut self, projections: I) -> OrientResult<&mut Command>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let args = Args::new()
            .with(Vec::<Value>::new())
            .with(collect(projections));
        self.dispatch(CommandKind::Select.id(), &args)
    }

    pub fn insert(&mut self) -> OrientResult<&mut Command> {
        self.dispatch("insert", &Args::new())
    }

    pub fn delete(&mut self, class: &str) -> OrientResult<&mut Command> {
        self.dispatch("delete", &Args::new().with(class))
    }

    pub fn update(&mut self, class: &str) -> OrientResult<&mut Command> {
        self.dispatch("update", &Args::new().with(class))
    }

    /// Add record ids to link collections of `class`.
    pub fn add<I, V>(&mut self, updates: I, class: &str, append: bool) -> OrientResult<&mut Command>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.dispatch("update.add", &entry_args(updates, class, append))
    }

    /// Remove record ids from link collections of `class`.
    pub fn remove<I, V>(
        &mut self,
        updates: I,
        class: &str,
        append: bool,
    ) -> OrientResult<&mut Command>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.dispatch("update.remove", &entry_args(updates, class, append))
    }

    /// Put `key -> rid` pairs into link maps of `class`.
    pub fn put<I, V>(&mut self, values: I, class: &str, append: bool) -> OrientResult<&mut Command>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.dispatch("update.put", &entry_args(values, class, append))
    }

    pub fn grant(&mut self, permission: &str) -> OrientResult<&mut Command> {
        self.dispatch("grant", &Args::new().with(permission))
    }

    pub fn revoke(&mut self, permission: &str) -> OrientResult<&mut Command> {
        self.dispatch("revoke", &Args::new().with(permission))
    }

    /// CREATE a class, or a property of `class` when `property` is given.
    pub fn create(
        &mut self,
        class: &str,
        property: Option<&str>,
        ty: Option<&str>,
        linked: Option<&str>,
    ) -> OrientResult<&mut Command> {
        self.class_or_property("create", class, property, ty, linked)
    }

    /// DROP a class, or a property of `class` when `property` is given.
    pub fn drop(&mut self, class: &str, property: Option<&str>) -> OrientResult<&mut Command> {
        self.class_or_property("drop", class, property, None, None)
    }

    /// ALTER an attribute of a class.
    pub fn alter(
        &mut self,
        class: &str,
        attribute: &str,
        value: impl Into<Value>,
    ) -> OrientResult<&mut Command> {
        let args = Args::new().with(class).with(attribute).with(value);
        self.dispatch("class.alter", &args)
    }

    /// ALTER an attribute of `class.property`.
    pub fn alter_property(
        &mut self,
        class: &str,
        property: &str,
        attribute: &str,
        value: impl Into<Value>,
    ) -> OrientResult<&mut Command> {
        let command = self.dispatch("property.alter", &Args::new().with(property))?;
        command.on(class).changing(attribute, value);
        Ok(command)
    }

    /// CREATE INDEX on `property`, optionally qualified by `class`.
    pub fn index(
        &mut self,
        property: &str,
        class: Option<&str>,
        ty: Option<&str>,
    ) -> OrientResult<&mut Command> {
        let args = Args::new().with(property).with(class).with(ty);
        self.dispatch("index.create", &args)
    }

    pub fn index_count(&mut self, name: &str) -> OrientResult<&mut Command> {
        self.dispatch("index.count", &Args::new().with(name))
    }

    pub fn index_put(
        &mut self,
        name: &str,
        key: &str,
        rid: impl Into<Value>,
    ) -> OrientResult<&mut Command> {
        let args = Args::new().with(name).with(key).with(rid);
        self.dispatch("index.put", &args)
    }

    /// Remove `key` (and only its `rid` entry, when given) from index `name`.
    pub fn index_remove(
        &mut self,
        name: &str,
        key: impl Into<Value>,
        rid: Option<Value>,
    ) -> OrientResult<&mut Command> {
        let args = Args::new().with(name).with(key).with(rid);
        self.dispatch("index.remove", &args)
    }

    /// SELECT entries of index `index`; narrow it with [`where_`](Self::where_).
    pub fn lookup(&mut self, index: &str) -> OrientResult<&mut Command> {
        self.dispatch("index.lookup", &Args::new().with(index))
    }

    /// DROP INDEX on `property`, optionally qualified by `class`.
    pub fn unindex(&mut self, property: &str, class: Option<&str>) -> OrientResult<&mut Command> {
        self.dispatch("index.drop", &Args::new().with(property).with(class))
    }

    /// CREATE LINK `alias` from `class.property`; finish it with
    /// [`Command::link_to`].
    pub fn link(
        &mut self,
        class: &str,
        property: &str,
        alias: &str,
        inverse: bool,
    ) -> OrientResult<&mut Command> {
        let args = Args::new()
            .with(class)
            .with(property)
            .with(alias)
            .with(inverse);
        self.dispatch("link", &args)
    }

    /// FIND REFERENCES to `rid`, limited to `classes` when non-empty.
    pub fn find_references<I, V>(
        &mut self,
        rid: &str,
        classes: I,
        append: bool,
    ) -> OrientResult<&mut Command>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let command = self.dispatch("references.find", &Args::new().with(rid))?;
        command.in_classes(classes, append);
        Ok(command)
    }

    fn class_or_property(
        &mut self,
        action: &str,
        class: &str,
        property: Option<&str>,
        ty: Option<&str>,
        linked: Option<&str>,
    ) -> OrientResult<&mut Command> {
        match property {
            Some(property) => {
                let args = Args::new().with(property).with(ty).with(linked);
                let command = self.dispatch(&format!("property.{action}"), &args)?;
                command.on(class);
                Ok(command)
            }
            None => self.dispatch(&format!("class.{action}"), &Args::new().with(class)),
        }
    }

    // ==================== Delegation ====================

    pub fn where_(&mut self, condition: &str, value: impl Into<Value>) -> &mut Command {
        self.command.where_(condition, value)
    }

    pub fn and_where(&mut self, condition: &str, value: impl Into<Value>) -> &mut Command {
        self.command.and_where(condition, value)
    }

    pub fn or_where(&mut self, condition: &str, value: impl Into<Value>) -> &mut Command {
        self.command.or_where(condition, value)
    }

    pub fn reset_where(&mut self) -> &mut Command {
        self.command.reset_where()
    }

    pub fn between(
        &mut self,
        key: &str,
        left: impl Into<Value>,
        right: impl Into<Value>,
    ) -> &mut Command {
        self.command.between(key, left, right)
    }

    pub fn fields<I, V>(&mut self, fields: I, append: bool) -> &mut Command
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.command.fields(fields, append)
    }

    pub fn from<I, V>(&mut self, target: I, append: bool) -> &mut Command
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.command.from(target, append)
    }

    pub fn into_target(&mut self, target: impl Into<Value>) -> &mut Command {
        self.command.into_target(target)
    }

    pub fn values<I, V>(&mut self, values: I, append: bool) -> &mut Command
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.command.values(values, append)
    }

    pub fn limit(&mut self, limit: impl Into<Value>) -> &mut Command {
        self.command.limit(limit)
    }

    pub fn skip(&mut self, skip: impl Into<Value>) -> &mut Command {
        self.command.skip(skip)
    }

    pub fn order_by<I, V>(&mut self, order: I, append: bool, first: bool) -> &mut Command
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.command.order_by(order, append, first)
    }

    pub fn on(&mut self, target: &str) -> &mut Command {
        self.command.on(target)
    }

    pub fn to(&mut self, role: &str) -> &mut Command {
        self.command.to(role)
    }

    pub fn of_type(&mut self, ty: &str) -> &mut Command {
        self.command.of_type(ty)
    }

    pub fn range(&mut self, left: impl Into<Value>, right: impl Into<Value>) -> &mut Command {
        self.command.range(left, right)
    }

    pub fn in_classes<I, V>(&mut self, classes: I, append: bool) -> &mut Command
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.command.in_classes(classes, append)
    }

    // ==================== Readers ====================

    /// Render the current command.
    pub fn raw(&self) -> String {
        self.command.raw()
    }

    /// Raw token store of the current command.
    pub fn tokens(&self) -> &Tokens {
        self.command.tokens()
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.command, f)
    }
}

fn collect<I, V>(values: I) -> Vec<Value>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    values.into_iter().map(Into::into).collect()
}

fn entry_args<I, V>(entries: I, class: &str, append: bool) -> Args
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Args::new().with(collect(entries)).with(class).with(append)
}
