//! Token formatters.
//!
//! A [`Formatter`] turns the raw values of one token into the text fragment
//! substituted for its placeholder. Formatters are pure and never fail: values
//! they cannot use are skipped, and an empty or unusable input renders as
//! empty text.

use crate::command::Condition;
use crate::sanitize::{filter_unsafe, is_rid, normalize_rid};
use crate::value::Value;

const SEPARATOR: &str = ", ";

/// Formatting strategy bound to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Formatter {
    /// Filtered scalars joined with `, `.
    #[default]
    Regular,
    /// Filtered scalars wrapped in double quotes, joined with `, `.
    Quoted,
    /// Valid record ids, as given, joined with `, `.
    Rid,
    /// First value as a `#`-prefixed record id, never quoted.
    EmbeddedRid,
    /// First value followed by `.`, used as a class qualifier.
    IndexClass,
    /// Filtered scalars as `[a, b]`.
    List,
    /// `WHERE c1 AND c2 OR c3` from accumulated conditions.
    Where,
    /// `ORDER BY a, b`
    OrderBy,
    /// `LIMIT n`
    Limit,
    /// `SKIP n`
    Skip,
    /// `RANGE #l #r`, or `RANGE #l`; nothing without a valid lower bound.
    Range,
    /// Literals joined with `, `.
    Values,
    /// `key = literal` entries.
    Updates,
    /// `key = #rid` entries.
    RidUpdates,
    /// `map = "key", #rid` entries.
    MapUpdates,
    /// `INVERSE` when the first value is `true`.
    Inverse,
}

impl Formatter {
    /// Render `values` into a text fragment.
    pub fn format(self, values: &[Value]) -> String {
        match self {
            Formatter::Regular => join(values.iter().filter_map(safe_scalar)),
            Formatter::Quoted => join(
                values
                    .iter()
                    .filter_map(Value::as_text)
                    .map(|s| quote(&s)),
            ),
            Formatter::Rid => join(
                values
                    .iter()
                    .filter_map(Value::as_text)
                    .filter(|s| is_rid(s))
                    .map(|s| s.trim().to_string()),
            ),
            Formatter::EmbeddedRid => values
                .first()
                .and_then(Value::as_text)
                .and_then(|s| normalize_rid(&s))
                .unwrap_or_default(),
            Formatter::IndexClass => match values.first().and_then(safe_scalar) {
                Some(class) => format!("{class}."),
                None => String::new(),
            },
            Formatter::List => {
                let items = join(values.iter().filter_map(safe_scalar));
                if items.is_empty() {
                    items
                } else {
                    format!("[{items}]")
                }
            }
            Formatter::Where => format_where(values),
            Formatter::OrderBy => prefixed("ORDER BY", join(values.iter().filter_map(safe_scalar))),
            Formatter::Limit => last_int(values).map_or_else(String::new, |n| format!("LIMIT {n}")),
            Formatter::Skip => last_int(values).map_or_else(String::new, |n| format!("SKIP {n}")),
            Formatter::Range => {
                let bound = |i: usize| {
                    values
                        .get(i)
                        .and_then(Value::as_text)
                        .and_then(|s| normalize_rid(&s))
                };
                // Bounds are positional: an upper bound alone is dropped.
                match (bound(0), bound(1)) {
                    (Some(left), Some(right)) => format!("RANGE {left} {right}"),
                    (Some(left), None) => format!("RANGE {left}"),
                    (None, _) => String::new(),
                }
            }
            Formatter::Values => join(values.iter().map(literal)),
            Formatter::Updates => join(entries(values).filter_map(|(key, value)| {
                let key = filter_unsafe(key);
                (!key.is_empty()).then(|| format!("{key} = {}", literal(value)))
            })),
            Formatter::RidUpdates => join(entries(values).filter_map(|(key, value)| {
                let key = filter_unsafe(key);
                let rid = value.as_text().and_then(|s| normalize_rid(&s))?;
                (!key.is_empty()).then(|| format!("{key} = {rid}"))
            })),
            Formatter::MapUpdates => join(entries(values).flat_map(|(map, nested)| {
                let map = filter_unsafe(map);
                let nested = match nested {
                    Value::List(items) => items.as_slice(),
                    other => std::slice::from_ref(other),
                };
                entries(nested)
                    .filter_map(|(key, value)| {
                        let rid = value.as_text().and_then(|s| normalize_rid(&s))?;
                        (!map.is_empty()).then(|| format!("{map} = {}, {rid}", quote(key)))
                    })
                    .collect::<Vec<_>>()
            })),
            Formatter::Inverse => match values.first().and_then(Value::as_bool) {
                Some(true) => "INVERSE".to_string(),
                _ => String::new(),
            },
        }
    }
}

/// Render a value as a literal of the query language.
///
/// Strings are quoted, numbers and booleans are bare, record ids are
/// normalized to `#c:p`.
pub fn literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::Text(s) => quote(s),
        Value::Rid(s) => normalize_rid(s).unwrap_or_default(),
        Value::List(items) => format!("[{}]", join(items.iter().map(literal))),
        Value::Entry { key, value } => format!("{} = {}", filter_unsafe(key), literal(value)),
        Value::Condition(condition) => condition.render(),
    }
}

/// Wrap a filtered string in double quotes.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", filter_unsafe(s))
}

fn safe_scalar(value: &Value) -> Option<String> {
    let filtered = filter_unsafe(value.as_text()?.trim());
    (!filtered.is_empty()).then_some(filtered)
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

fn prefixed(keyword: &str, body: String) -> String {
    if body.is_empty() {
        body
    } else {
        format!("{keyword} {body}")
    }
}

fn last_int(values: &[Value]) -> Option<i64> {
    values.iter().rev().find_map(Value::as_int)
}

fn entries(values: &[Value]) -> impl Iterator<Item = (&str, &Value)> {
    values.iter().filter_map(|value| match value {
        Value::Entry { key, value } => Some((key.as_str(), &**value)),
        _ => None,
    })
}

fn format_where(values: &[Value]) -> String {
    let mut clause = String::new();
    for condition in values.iter().filter_map(|value| match value {
        Value::Condition(condition) => Some(condition),
        _ => None,
    }) {
        let rendered = condition.render();
        if rendered.trim().is_empty() {
            continue;
        }
        let keyword = if clause.is_empty() {
            "WHERE"
        } else {
            Condition::connector_keyword(condition.connector)
        };
        if !clause.is_empty() {
            clause.push(' ');
        }
        clause.push_str(keyword);
        clause.push(' ');
        clause.push_str(rendered.trim());
    }
    clause
}
