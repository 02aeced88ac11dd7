//! Request Builder — turns a validated selection into the multipart form the
//! evaluation service expects.

use reqwest::multipart::{Form, Part};

use crate::errors::ValidationError;
use crate::models::resume::ResumeFile;
use crate::models::role::{Mode, Role};
use crate::selection::{validate, SelectionState};

pub const ROLE_FIELD: &str = "role";
pub const MODE_FIELD: &str = "mode";
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
/// Repeated once per uploaded file.
pub const RESUMES_FIELD: &str = "resumes";

/// A fully serialized snapshot of a selection. Owns its data, so later edits
/// to the selection never reach a request already built.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRequest {
    pub role: Role,
    pub mode: Mode,
    /// `Some` only for `match`. The field is omitted from the form otherwise,
    /// never sent empty.
    pub job_description: Option<String>,
    pub resumes: Vec<ResumeFile>,
}

/// Validates `state` and snapshots it into a request.
pub fn build_request(state: &SelectionState) -> Result<EvaluationRequest, ValidationError> {
    validate(state)?;

    let job_description = state
        .mode()
        .requires_job_description()
        .then(|| state.job_description().to_string());

    Ok(EvaluationRequest {
        role: state.role(),
        mode: state.mode(),
        job_description,
        resumes: state.files().to_vec(),
    })
}

impl EvaluationRequest {
    /// Text fields in the order they are appended to the form.
    pub fn text_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            (ROLE_FIELD, self.role.as_str()),
            (MODE_FIELD, self.mode.as_str()),
        ];
        if let Some(jd) = &self.job_description {
            fields.push((JOB_DESCRIPTION_FIELD, jd.as_str()));
        }
        fields
    }

    pub fn total_bytes(&self) -> usize {
        self.resumes.iter().map(ResumeFile::len).sum()
    }

    /// Encodes the request as multipart: text fields first, then one `resumes`
    /// part per file in list order, each with its original file name.
    pub fn into_form(self) -> reqwest::Result<Form> {
        let mut form = Form::new();
        for (name, value) in self.text_fields() {
            form = form.text(name, value.to_string());
        }

        for resume in self.resumes {
            let content_type = resume.content_type();
            let length = resume.len() as u64;
            let part = Part::stream_with_length(resume.content, length)
                .file_name(resume.name)
                .mime_str(content_type)?;
            form = form.part(RESUMES_FIELD, part);
        }

        Ok(form)
    }
}
