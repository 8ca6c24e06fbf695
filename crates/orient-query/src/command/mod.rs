//! Commands: one schema template, its token store and formatter bindings.
//!
//! A [`Command`] renders itself by scanning its template once, left to right,
//! and replacing every `:Name` placeholder with the formatted values of the
//! token of the same name.
//!
//! # Example
//!
//! ```ignore
//! let mut lookup = orient_query::command::index_lookup("dictionary");
//! lookup.where_("key = ?", "luke");
//! assert_eq!(lookup.raw(), r#"SELECT FROM index:dictionary WHERE key = "luke""#);
//! ```

mod class;
mod condition;
mod credential;
mod delete;
mod index;
mod insert;
mod kind;
mod link;
mod property;
mod reference;
mod select;
mod update;

pub use condition::{Condition, Connector};
pub use kind::CommandKind;

pub use class::{class_alter, class_create, class_drop};
pub use credential::{grant, revoke};
pub use delete::delete;
pub use index::{index_count, index_create, index_drop, index_lookup, index_put, index_remove};
pub use insert::insert;
pub use link::link;
pub use property::{property_alter, property_create, property_drop};
pub use reference::find_references;
pub use select::select;
pub use update::{update, update_add, update_put, update_remove};

use crate::formatter::Formatter;
use crate::sanitize::filter_unsafe;
use crate::value::Value;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Raw token state keyed by tokenized name (`:Name`).
pub type Tokens = IndexMap<String, Vec<Value>>;

/// Name of the token holding the WHERE accumulator.
pub const WHERE: &str = "Where";

/// Clause keywords dropped when a template leaves them dangling at the end.
const DANGLING_KEYWORDS: &[&str] = &["WHERE", "AND", "OR"];

fn placeholder_regex() -> &'static regex::Regex {
    static PLACEHOLDER_RE: OnceLock<regex::Regex> = OnceLock::new();
    PLACEHOLDER_RE
        .get_or_init(|| regex::Regex::new(r":\w+").expect("invalid built-in placeholder regex"))
}

/// Turn a token name into its placeholder form: `Name` -> `:Name`.
pub fn tokenize(name: &str) -> String {
    if name.starts_with(':') {
        name.to_string()
    } else {
        format!(":{name}")
    }
}

/// A statement under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    kind: CommandKind,
    schema: &'static str,
    formatters: HashMap<&'static str, Formatter>,
    tokens: Tokens,
}

impl Command {
    /// Create an empty command of a built-in kind.
    pub fn new(kind: CommandKind) -> Self {
        Self::with_schema(kind, kind.schema(), kind.formatters())
    }

    /// Create a command from a caller-supplied template.
    ///
    /// Only the base clause bindings apply; add more with
    /// [`with_formatter`](Self::with_formatter).
    pub fn custom(schema: &'static str) -> Self {
        Self::with_schema(CommandKind::Custom, schema, &[])
    }

    fn with_schema(
        kind: CommandKind,
        schema: &'static str,
        formatters: &'static [(&'static str, Formatter)],
    ) -> Self {
        let tokens = placeholder_regex()
            .find_iter(schema)
            .map(|m| (m.as_str().to_string(), Vec::new()))
            .collect();
        let formatters = kind::BASE_FORMATTERS
            .iter()
            .chain(formatters)
            .copied()
            .collect();

        Self {
            kind,
            schema,
            formatters,
            tokens,
        }
    }

    /// Bind `formatter` to `token`.
    ///
    /// Consumes the command, so bindings can only be added while building it.
    pub fn with_formatter(mut self, token: &'static str, formatter: Formatter) -> Self {
        self.formatters
            .insert(token.trim_start_matches(':'), formatter);
        self
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn schema(&self) -> &'static str {
        self.schema
    }

    /// The formatter used for `token`, [`Formatter::Regular`] if unbound.
    pub fn formatter_for(&self, token: &str) -> Formatter {
        self.formatters
            .get(token.trim_start_matches(':'))
            .copied()
            .unwrap_or_default()
    }

    // ==================== Tokens ====================

    /// Store values under `name`, appending to or replacing what is there.
    pub fn set_token<I, V>(&mut self, name: &str, values: I, append: bool) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let slot = self.tokens.entry(tokenize(name)).or_default();
        if !append {
            slot.clear();
        }
        slot.extend(values.into_iter().map(Into::into));
        self
    }

    /// Store a single value under `name`, replacing what is there.
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.set_token(name, [value.into()], false)
    }

    /// Insert values in front of the ones already stored under `name`.
    pub(crate) fn prepend_token<I, V>(&mut self, name: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let slot = self.tokens.entry(tokenize(name)).or_default();
        let tail = std::mem::take(slot);
        slot.extend(values.into_iter().map(Into::into));
        slot.extend(tail);
        self
    }

    /// Empty the token `name`, keeping its entry.
    pub fn clear_token(&mut self, name: &str) -> &mut Self {
        self.tokens.entry(tokenize(name)).or_default().clear();
        self
    }

    /// Raw (pre-formatting) values of every token.
    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    /// Raw values of one token; empty if the token does not exist.
    pub fn token(&self, name: &str) -> &[Value] {
        self.tokens
            .get(&tokenize(name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    // ==================== WHERE ====================

    /// Start a fresh WHERE clause with `condition`.
    ///
    /// Every `?` in `condition` is replaced by `value` rendered as a literal:
    /// strings are quoted, numbers, booleans and record ids are bare. With two
    /// or more `?`, a non-empty [`Value::List`] fills them with its items;
    /// otherwise the list is one value rendered as `[a, b]`.
    pub fn where_(&mut self, condition: &str, value: impl Into<Value>) -> &mut Self {
        self.reset_where();
        let values = bind(condition, value.into());
        self.push_condition(None, condition.to_string(), values)
    }

    /// Append `AND condition`; behaves like [`where_`](Self::where_) on an
    /// empty clause.
    pub fn and_where(&mut self, condition: &str, value: impl Into<Value>) -> &mut Self {
        let values = bind(condition, value.into());
        self.push_condition(Some(Connector::And), condition.to_string(), values)
    }

    /// Append `OR condition`; behaves like [`where_`](Self::where_) on an
    /// empty clause.
    pub fn or_where(&mut self, condition: &str, value: impl Into<Value>) -> &mut Self {
        let values = bind(condition, value.into());
        self.push_condition(Some(Connector::Or), condition.to_string(), values)
    }

    /// Remove every WHERE condition.
    pub fn reset_where(&mut self) -> &mut Self {
        self.clear_token(WHERE)
    }

    /// Append `key BETWEEN left AND right` to the WHERE clause.
    pub fn between(
        &mut self,
        key: &str,
        left: impl Into<Value>,
        right: impl Into<Value>,
    ) -> &mut Self {
        let text = format!("{} BETWEEN ? AND ?", filter_unsafe(key).trim());
        self.push_condition(Some(Connector::And), text, vec![left.into(), right.into()])
    }

    fn push_condition(
        &mut self,
        connector: Option<Connector>,
        text: String,
        values: Vec<Value>,
    ) -> &mut Self {
        let slot = self.tokens.entry(tokenize(WHERE)).or_default();
        let connector = if slot.is_empty() { None } else { connector };
        slot.push(Value::Condition(Condition::new(connector, text, values)));
        self
    }

    // ==================== Rendering ====================

    /// Render the statement.
    pub fn raw(&self) -> String {
        let mut out = String::with_capacity(self.schema.len() + 32);
        let mut fragments: HashMap<&str, String> = HashMap::new();
        let mut after_empty = false;
        let mut protected = 0;
        let mut last = 0;

        for placeholder in placeholder_regex().find_iter(self.schema) {
            push_literal(&mut out, &self.schema[last..placeholder.start()], &mut after_empty);
            last = placeholder.end();

            let fragment = fragments
                .entry(placeholder.as_str())
                .or_insert_with(|| self.render_token(placeholder.as_str()));
            if fragment.is_empty() {
                after_empty = true;
            } else {
                out.push_str(fragment);
                protected = out.len();
                after_empty = false;
            }
        }
        push_literal(&mut out, &self.schema[last..], &mut after_empty);

        let statement = strip_dangling(out, protected);
        trace_debug!(kind = self.kind.id(), statement = %statement, "rendered statement");
        statement
    }

    fn render_token(&self, placeholder: &str) -> String {
        let values = self.tokens.get(placeholder).map(Vec::as_slice).unwrap_or_default();
        self.formatter_for(placeholder).format(values)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw())
    }
}

/// Values bound to the `?` marks of `condition`.
///
/// A list is spread over the marks only when there are several marks and
/// something to spread; an empty list stays one value so no `?` is left bare.
fn bind(condition: &str, value: Value) -> Vec<Value> {
    match value {
        Value::List(items) if condition.matches('?').count() > 1 && !items.is_empty() => items,
        other => vec![other],
    }
}

/// Copy a literal run of the template. Right after a placeholder that
/// rendered empty, leading whitespace is dropped if the output already ends
/// in whitespace.
fn push_literal(out: &mut String, literal: &str, after_empty: &mut bool) {
    let text = if *after_empty && (out.is_empty() || out.ends_with(char::is_whitespace)) {
        literal.trim_start()
    } else {
        literal
    };
    if !text.is_empty() {
        out.push_str(text);
        *after_empty = false;
    }
}

/// Trim trailing whitespace and dangling clause keywords, never cutting into
/// the first `protected` bytes (rendered fragments).
fn strip_dangling(mut out: String, protected: usize) -> String {
    loop {
        let end = out.trim_end().len().max(protected);
        out.truncate(end);

        let dangling = DANGLING_KEYWORDS.iter().find(|keyword| {
            out.len() >= protected + keyword.len()
                && out.ends_with(*keyword)
                && out[..out.len() - keyword.len()]
                    .chars()
                    .next_back()
                    .is_none_or(char::is_whitespace)
        });
        match dangling {
            Some(keyword) => out.truncate(out.len() - keyword.len()),
            None => return out,
        }
    }
}

#[cfg(test)]
mod tests;
