use crate::errors::SelectionError;
use crate::models::resume::ResumeFile;
use crate::models::role::{Mode, Role};

/// Role, mode, job description and the accumulated resume list.
///
/// The mode always belongs to the role's legal set. The file list is kept in
/// upload order and is never deduplicated or capped here; the file-count rule
/// is checked by [`validate`](super::validate) at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    role: Role,
    mode: Mode,
    job_description: String,
    files: Vec<ResumeFile>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn files(&self) -> &[ResumeFile] {
        &self.files
    }

    /// Switches role. Always resets the mode to `match` and empties the file list.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.mode = Mode::Match;
        self.files.clear();
    }

    /// Sets the mode if the current role allows it. The state is untouched otherwise.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), SelectionError> {
        if !self.role.allows(mode) {
            return Err(SelectionError::ModeNotAllowed {
                role: self.role,
                mode,
            });
        }
        self.mode = mode;
        Ok(())
    }

    /// Stored verbatim. Trimming only matters to validation.
    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    /// Appends after any existing files, in the given order.
    pub fn append_files(&mut self, files: impl IntoIterator<Item = ResumeFile>) {
        self.files.extend(files);
    }

    /// Removes the file at `index`, returning it. Out-of-range indices are a no-op.
    pub fn remove_file(&mut self, index: usize) -> Option<ResumeFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    /// The job description input is only shown for ATS matching.
    pub fn shows_job_description(&self) -> bool {
        self.mode.requires_job_description()
    }
}
