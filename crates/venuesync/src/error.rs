//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use venuesync_core::CoreError;

/// Exit codes for process termination.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PAYMENT: i32 = 5;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(venuesync::not_found),
        help("Run: venuesync {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Session ──────────────────────────────────────────────────────
    #[error("Not logged in: {action} requires an active session")]
    #[diagnostic(
        code(venuesync::not_logged_in),
        help("Log in first: venuesync session login [--role guest|host]")
    )]
    NotLoggedIn { action: String },

    // ── Payment ──────────────────────────────────────────────────────
    #[error("Payment information incomplete")]
    #[diagnostic(
        code(venuesync::payment_incomplete),
        help(
            "All card fields are required:\n\
             --card-number, --card-name, --expiry, --cvv, --billing-zip"
        )
    )]
    PaymentIncomplete,

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(venuesync::validation))]
    Validation { field: String, reason: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(venuesync::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(venuesync::config),
        help("Check the config file: venuesync config path")
    )]
    Config(#[from] venuesync_config::ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    #[diagnostic(code(venuesync::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::NotLoggedIn { .. } => exit_code::AUTH,
            Self::PaymentIncomplete => exit_code::PAYMENT,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::VenueNotFound { identifier } => CliError::NotFound {
                resource_type: "venue".into(),
                identifier,
                list_command: "venues list".into(),
            },

            CoreError::BookingNotFound { identifier } => CliError::NotFound {
                resource_type: "booking".into(),
                identifier,
                list_command: "bookings list".into(),
            },

            CoreError::InquiryNotFound { identifier } => CliError::NotFound {
                resource_type: "inquiry".into(),
                identifier,
                list_command: "inquiries list".into(),
            },

            CoreError::ConversationNotFound { identifier } => CliError::NotFound {
                resource_type: "conversation".into(),
                identifier,
                list_command: "messages list".into(),
            },

            CoreError::BlockNotFound { identifier } => CliError::NotFound {
                resource_type: "availability block".into(),
                identifier,
                list_command: "calendar list".into(),
            },

            CoreError::DateUnavailable { venue, date, reason } => CliError::Validation {
                field: "date".into(),
                reason: format!("'{venue}' is unavailable on {date}: {reason}"),
            },

            CoreError::NotLoggedIn { action } => CliError::NotLoggedIn { action },

            CoreError::PaymentIncomplete => CliError::PaymentIncomplete,

            CoreError::InvalidTime { value } => CliError::Validation {
                field: "time".into(),
                reason: format!("'{value}' is not a valid HH:MM time"),
            },

            CoreError::InvalidTimeRange { start, end } => CliError::Validation {
                field: "time range".into(),
                reason: format!("end {end} is not after start {start}"),
            },

            CoreError::Validation { field, reason } => CliError::Validation { field, reason },
        }
    }
}
