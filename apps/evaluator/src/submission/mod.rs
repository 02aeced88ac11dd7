//! Submission pipeline: validated selection → multipart request → remote
//! service → normalized results.
//!
//! All calls to the remote service go through `evaluation_client`.

pub mod controller;
pub mod normalizer;
pub mod request;

pub use controller::{PendingSubmission, SubmissionController, SubmissionPhase, SubmissionStatus};
pub use normalizer::{normalize, DisplayResult, ResultDetail};
pub use request::{build_request, EvaluationRequest};
