use crate::errors::ValidationError;
use crate::models::role::Role;
use crate::selection::state::SelectionState;

/// Checks whether `state` may be submitted. Rules run in order; the first failure wins:
///
/// 1. At least one resume, and exactly one for candidates.
/// 2. For `match`, a job description that is non-empty after trimming.
///
/// File type and size are not checked.
pub fn validate(state: &SelectionState) -> Result<(), ValidationError> {
    if !file_count_ok(state.role(), state.files().len()) {
        return Err(ValidationError::IncorrectResumeCount);
    }

    if state.mode().requires_job_description() && state.job_description().trim().is_empty() {
        return Err(ValidationError::JobDescriptionRequired);
    }

    Ok(())
}

fn file_count_ok(role: Role, count: usize) -> bool {
    match role {
        Role::Candidate => count == 1,
        Role::Recruiter => count >= 1,
    }
}
