//! WHERE accumulator entries.

use crate::formatter::literal;
use crate::value::Value;
use serde::Serialize;

/// Keyword joining a condition to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    pub fn as_str(self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

/// One condition of a WHERE clause.
///
/// `text` is written by the caller and may contain `?` placeholders; each
/// `?` is replaced, left to right, by the next bound value rendered as a
/// literal. When there are more `?` than values the last value is reused, so
/// a single value fills every placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    /// `None` for the first condition of the clause.
    pub connector: Option<Connector>,
    pub text: String,
    pub values: Vec<Value>,
}

impl Condition {
    pub fn new(connector: Option<Connector>, text: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            connector,
            text: text.into(),
            values,
        }
    }

    /// Keyword written before a non-leading condition.
    pub(crate) fn connector_keyword(connector: Option<Connector>) -> &'static str {
        connector.unwrap_or(Connector::And).as_str()
    }

    /// Render the condition text with its values substituted.
    pub fn render(&self) -> String {
        let Some(last) = self.values.len().checked_sub(1) else {
            return self.text.clone();
        };

        let mut pieces = self.text.split('?');
        let mut out = String::with_capacity(self.text.len() + 16);
        out.push_str(pieces.next().unwrap_or_default());
        for (i, piece) in pieces.enumerate() {
            out.push_str(&literal(&self.values[i.min(last)]));
            out.push_str(piece);
        }
        out
    }
}
