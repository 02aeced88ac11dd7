use thiserror::Error;

use crate::models::role::{Mode, Role};

/// Generic message shown when the service fails without a usable `error` field.
pub const SERVER_ERROR_MESSAGE: &str = "Server error.";
/// Generic message shown when no usable response was obtained at all.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Error during evaluation. Please try again.";

/// Local rejection of a selection before anything is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload the correct number of resumes.")]
    IncorrectResumeCount,

    #[error("Job description is required for ATS Match Check.")]
    JobDescriptionRequired,
}

impl ValidationError {
    /// Short machine-friendly reason.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::IncorrectResumeCount => "incorrect number of resumes",
            ValidationError::JobDescriptionRequired => "job description required",
        }
    }
}

/// Misuse of the selection API by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("mode '{mode}' is not available for role '{role}'")]
    ModeNotAllowed { role: Role, mode: Mode },
}

/// Every way a submit can end without results.
///
/// `Display` is the text shown to the user. Service and transport failures
/// both land the controller in the failed state; only the message differs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Non-success status with a structured message, surfaced verbatim.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// Non-success status without a parsable message.
    #[error("{}", SERVER_ERROR_MESSAGE)]
    ServiceUnlabeled { status: u16 },

    /// No usable response: network failure, timeout, or an unreadable success body.
    /// `detail` is for logs only.
    #[error("{}", TRANSPORT_ERROR_MESSAGE)]
    Transport { detail: String },
}

impl SubmissionError {
    pub fn transport(detail: impl Into<String>) -> Self {
        SubmissionError::Transport {
            detail: detail.into(),
        }
    }

    /// Whether the request actually reached the remote service.
    pub fn was_dispatched(&self) -> bool {
        !matches!(self, SubmissionError::Validation(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            SubmissionError::Service { status, .. } | SubmissionError::ServiceUnlabeled { status } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Why `begin` did not dispatch anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    /// Another submission is still running. Nothing changed.
    #[error("a submission is already in flight")]
    AlreadyInFlight,

    /// The selection failed validation; the failure is also recorded in the status.
    #[error("{0}")]
    Invalid(ValidationError),
}
