//! The fixed table of well-known errors shared by all generated handlers.
//!
//! Constructed once per run and passed by reference into emission; the
//! entries double as the source for the runtime error constructors in the
//! generated output, so the table order is the emission order.

use http::StatusCode;

/// One pre-built structured error in the generated runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellKnownError {
    /// Constructor function name in the generated output.
    pub ident: &'static str,
    pub status: StatusCode,
    pub message: &'static str,
}

/// Immutable registry of the five shared errors.
#[derive(Debug, Clone)]
pub struct ErrorRegistry {
    entries: [WellKnownError; 5],
}

impl ErrorRegistry {
    pub fn new() -> Self {
        ErrorRegistry {
            entries: [
                WellKnownError {
                    ident: "err_unknown_route",
                    status: StatusCode::NOT_FOUND,
                    message: "unknown route",
                },
                WellKnownError {
                    ident: "err_method_not_allowed",
                    status: StatusCode::NOT_ACCEPTABLE,
                    message: "method not allowed",
                },
                WellKnownError {
                    ident: "err_missing_value",
                    status: StatusCode::BAD_REQUEST,
                    message: "missing required value",
                },
                WellKnownError {
                    ident: "err_internal",
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "internal failure",
                },
                WellKnownError {
                    ident: "err_unauthorized",
                    status: StatusCode::FORBIDDEN,
                    message: "unauthorized",
                },
            ],
        }
    }

    /// Entries in emission order.
    pub fn entries(&self) -> &[WellKnownError] {
        &self.entries
    }

    pub fn unknown_route(&self) -> &WellKnownError {
        &self.entries[0]
    }

    pub fn method_not_allowed(&self) -> &WellKnownError {
        &self.entries[1]
    }

    pub fn missing_value(&self) -> &WellKnownError {
        &self.entries[2]
    }

    pub fn internal(&self) -> &WellKnownError {
        &self.entries[3]
    }

    pub fn unauthorized(&self) -> &WellKnownError {
        &self.entries[4]
    }
}

impl Default for ErrorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
