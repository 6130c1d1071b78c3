/*! Defines the vocabulary of the `tracing` events emitted while parsing and substituting, and a
subscriber that writes them as JSON records. */
pub mod subscriber;

pub const DEFAULT_JSON_LOG_FILE: &str = "log.json";

// log record fields:
pub const EVENT_FIELD: &str = "event";
pub const FORMULA_FIELD: &str = "formula";
pub const VARIABLE_FIELD: &str = "variable";
pub const TERM_FIELD: &str = "term";
pub const FRESH_FIELD: &str = "fresh";

// log event types:
/// A formula was parsed.
pub const PARSE: &str = "@parse";

/// A term was substituted for a variable in a formula.
pub const SUBSTITUTE: &str = "@substitute";

/// A bound variable was renamed to avoid capturing a variable of the substituted term.
pub const RENAME: &str = "@rename";
