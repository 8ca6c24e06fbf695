//! SELECT statements.

use super::{Command, CommandKind};
use crate::value::Value;

/// Create a SELECT over `target` (classes, clusters or record ids).
///
/// # Example
/// ```ignore
/// let mut q = orient_query::command::select(["Profile"]);
/// q.select(["name", "age"], true).where_("age > ?", 18).limit(10);
/// assert_eq!(q.raw(), "SELECT name, age FROM Profile WHERE age > 18 LIMIT 10");
/// ```
pub fn select<I, V>(target: I) -> Command
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let mut command = Command::new(CommandKind::Select);
    command.set_token("Target", target, false);
    command
}

impl Command {
    /// Set the projections.
    pub fn select<I, V>(&mut self, projections: I, append: bool) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.set_token("Projections", projections, append)
    }

    /// Set the FROM target.
    pub fn from<I, V>(&mut self, target: I, append: bool) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.set_token("Target", target, append)
    }

    /// Add ORDER BY entries such as `"name ASC"`.
    ///
    /// With `first`, the entries go before the ones already set.
    pub fn order_by<I, V>(&mut self, order: I, append: bool, first: bool) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        if append && first {
            self.prepend_token("OrderBy", order)
        } else {
            self.set_token("OrderBy", order, append)
        }
    }

    /// Set LIMIT.
    pub fn limit(&mut self, limit: impl Into<Value>) -> &mut Self {
        self.set_value("Limit", limit)
    }

    /// Set SKIP.
    pub fn skip(&mut self, skip: impl Into<Value>) -> &mut Self {
        self.set_value("Skip", skip)
    }

    /// Restrict the scan to the record id range `left..right`.
    ///
    /// `right` may be `None`. Without a valid `left` the range is not rendered.
    pub fn range(&mut self, left: impl Into<Value>, right: impl Into<Value>) -> &mut Self {
        self.set_token("Range", [left.into(), right.into()], false)
    }
}
