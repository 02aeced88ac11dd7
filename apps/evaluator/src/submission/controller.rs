//! Submission Controller — single-flight dispatch to the evaluation service.
//!
//! ```text
//! idle ──begin──▶ in-flight ──▶ succeeded | failed
//!  ▲                                 │
//!  └────────── begin (next) ◀────────┘
//! ```
//!
//! `begin` is synchronous: it checks for an in-flight submission, validates,
//! snapshots the selection into a request and flips the status to in-flight.
//! `PendingSubmission::run` is the only suspend point. No timeout is applied
//! here; if the service never answers the status stays in-flight unless the
//! client was built with one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::{SubmissionError, SubmitRejected};
use crate::evaluation_client::EvaluationService;
use crate::selection::SelectionState;
use crate::submission::normalizer::{normalize, DisplayResult};
use crate::submission::request::{build_request, EvaluationRequest};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// What the presentation layer renders: phase, error text and results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionStatus {
    pub phase: SubmissionPhase,
    pub error: Option<SubmissionError>,
    pub results: Vec<DisplayResult>,
}

impl SubmissionStatus {
    pub fn is_loading(&self) -> bool {
        self.phase == SubmissionPhase::InFlight
    }
}

#[derive(Clone)]
pub struct SubmissionController {
    service: Arc<dyn EvaluationService>,
    status: Arc<Mutex<SubmissionStatus>>,
}

impl SubmissionController {
    pub fn new(service: Arc<dyn EvaluationService>) -> Self {
        Self {
            service,
            status: Arc::new(Mutex::new(SubmissionStatus::default())),
        }
    }

    /// Snapshot of the current status.
    pub fn status(&self) -> SubmissionStatus {
        self.lock_status().clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.lock_status().is_loading()
    }

    /// Starts a submission from `selection`.
    ///
    /// While another submission is in flight this returns
    /// `SubmitRejected::AlreadyInFlight` and changes nothing. A validation
    /// failure is recorded as the failed status (earlier results stay visible,
    /// nothing is sent). Otherwise prior results and error are cleared and the
    /// returned `PendingSubmission` owns a full copy of the request.
    pub fn begin(&self, selection: &SelectionState) -> Result<PendingSubmission, SubmitRejected> {
        let mut status = self.lock_status();

        if status.is_loading() {
            debug!("Ignoring submit: a submission is already in flight");
            return Err(SubmitRejected::AlreadyInFlight);
        }

        let request = match build_request(selection) {
            Ok(request) => request,
            Err(e) => {
                debug!("Submit rejected by validation: {}", e.reason());
                status.phase = SubmissionPhase::Failed;
                status.error = Some(SubmissionError::Validation(e));
                return Err(SubmitRejected::Invalid(e));
            }
        };

        status.phase = SubmissionPhase::InFlight;
        status.error = None;
        status.results.clear();
        drop(status);

        let id = Uuid::new_v4();
        info!(
            submission_id = %id,
            role = %request.role,
            mode = %request.mode,
            files = request.resumes.len(),
            bytes = request.total_bytes(),
            "Dispatching evaluation request"
        );

        Ok(PendingSubmission {
            request,
            guard: InFlightGuard {
                id,
                started_at: Utc::now(),
                controller: self.clone(),
                finished: false,
            },
        })
    }

    fn lock_status(&self) -> MutexGuard<'_, SubmissionStatus> {
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn finish(&self, outcome: Result<Vec<DisplayResult>, SubmissionError>) {
        let mut status = self.lock_status();
        match outcome {
            Ok(results) => {
                status.phase = SubmissionPhase::Succeeded;
                status.error = None;
                status.results = results;
            }
            Err(e) => {
                status.phase = SubmissionPhase::Failed;
                status.error = Some(e);
                status.results.clear();
            }
        }
    }
}

/// A dispatched-but-unfinished submission. Runs to completion once awaited;
/// there is no cancel path. Dropping it unfinished marks the submission failed
/// so the controller does not stay in flight forever.
pub struct PendingSubmission {
    request: EvaluationRequest,
    guard: InFlightGuard,
}

/// Records a failure if the submission is dropped before `run` finishes.
struct InFlightGuard {
    id: Uuid,
    started_at: DateTime<Utc>,
    controller: SubmissionController,
    finished: bool,
}

impl PendingSubmission {
    pub fn request(&self) -> &EvaluationRequest {
        &self.request
    }

    /// Sends the request and records the outcome on the controller.
    pub async fn run(self) -> Result<Vec<DisplayResult>, SubmissionError> {
        let PendingSubmission { request, mut guard } = self;

        let outcome = guard
            .controller
            .service
            .evaluate(request)
            .await
            .map(normalize);

        let elapsed_ms = (Utc::now() - guard.started_at).num_milliseconds();
        match &outcome {
            Ok(results) => info!(
                submission_id = %guard.id,
                elapsed_ms,
                "Evaluation succeeded with {} results",
                results.len()
            ),
            Err(SubmissionError::Transport { detail }) => warn!(
                submission_id = %guard.id,
                elapsed_ms,
                "Evaluation transport failure: {detail}"
            ),
            Err(e) => warn!(
                submission_id = %guard.id,
                elapsed_ms,
                status = e.status(),
                "Evaluation service error: {e}"
            ),
        }

        guard.controller.finish(outcome.clone());
        guard.finished = true;
        outcome
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        warn!(submission_id = %self.id, "Submission dropped before completion");
        self.controller.finish(Err(SubmissionError::transport(
            "submission dropped before completion",
        )));
    }
}
