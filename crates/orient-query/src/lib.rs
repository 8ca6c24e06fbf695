//! # orient-query
//!
//! A statement builder for the OrientDB query language.
//!
//! ## Features
//!
//! - **Template driven**: every statement is a schema template such as
//!   `DELETE FROM :Class :Where` whose placeholders are filled from a token store
//! - **Lenient rendering**: missing tokens render empty, unsafe characters are
//!   filtered, dangling clause keywords are dropped
//! - **Overridable commands**: the [`Query`] façade resolves every verb through a
//!   [`Registry`] of command factories that callers can extend or replace
//! - **Inspectable**: the raw token store serializes with serde
//!
//! ## Query façade
//!
//! ```ignore
//! use orient_query::Query;
//!
//! let mut query = Query::new();
//! query.lookup("dictionary")?.where_("key = ?", "luke");
//! assert_eq!(query.raw(), r#"SELECT FROM index:dictionary WHERE key = "luke""#);
//!
//! query.insert()?;
//! query.into_target("Profile").fields(["name"], true).values(["luke"], true);
//! assert_eq!(query.raw(), r#"INSERT INTO Profile (name) VALUES ("luke")"#);
//! ```
//!
//! ## Commands
//!
//! Commands can also be built directly, without the façade:
//!
//! ```ignore
//! use orient_query::command;
//!
//! let mut update = command::update("Profile");
//! update.set([("name", "luke")], true).where_("@rid = ?", orient_query::Value::rid("#12:0"));
//! assert_eq!(update.raw(), r#"UPDATE Profile SET name = "luke" WHERE @rid = #12:0"#);
//! ```

#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "orient.query", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! trace_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "orient.query", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_warn {
    ($($arg:tt)*) => {};
}

pub mod command;
pub mod config;
pub mod error;
pub mod formatter;
pub mod query;
pub mod registry;
pub mod sanitize;
pub mod value;

pub use command::{Command, CommandKind, Condition, Connector, Tokens};
pub use config::QueryConfig;
pub use error::{OrientError, OrientResult};
pub use formatter::Formatter;
pub use query::Query;
pub use registry::{CommandFactory, Registry};
pub use value::{Args, Value};
