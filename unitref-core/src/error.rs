//! Structured errors for tool and router consumption
//!
//! Lookups in the catalog signal "not found" as `None`. These errors are
//! what the outer layers build from that absence: values with a stable
//! machine-readable code, a message and an optional hint.

use crate::InputError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INVALID_ROUTE: &str = "INVALID_ROUTE";
    pub const ARG_MISSING: &str = "ARG_MISSING";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Structured error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitrefError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl UnitrefError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }

    // ========== Common Error Constructors ==========

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
            .with_suggestion("Enter a plain decimal number such as 12.5 or 1e-3")
    }

    pub fn unknown_category(id: &str) -> Self {
        Self::new(codes::UNKNOWN_CATEGORY, format!("Unknown category: {}", id))
            .with_suggestion("Use list_categories to see the available categories")
    }

    pub fn unknown_unit(category: &str, id: &str) -> Self {
        Self::new(
            codes::UNKNOWN_UNIT,
            format!("Unknown unit '{}' in category '{}'", id, category),
        )
        .with_suggestion(format!("Use list_units with category '{}'", category))
    }

    pub fn invalid_route(path: &str) -> Self {
        Self::new(codes::INVALID_ROUTE, format!("Invalid route: {}", path))
            .with_suggestion("Expected /, /{category} or /{category}/{from}-to-{to}")
    }

    pub fn arg_missing(func: &str, arg: &str) -> Self {
        Self::new(
            codes::ARG_MISSING,
            format!("{}: missing argument '{}'", func, arg),
        )
    }

    pub fn arg_type(func: &str, arg: &str, expected: &str) -> Self {
        Self::new(
            codes::ARG_TYPE,
            format!("{}: argument '{}' must be a {}", func, arg, expected),
        )
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
    }
}

impl std::fmt::Display for UnitrefError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for UnitrefError {}

impl From<InputError> for UnitrefError {
    fn from(err: InputError) -> Self {
        Self::parse_error(err.to_string())
    }
}
