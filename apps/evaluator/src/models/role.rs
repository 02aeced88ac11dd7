//! Roles and evaluation modes, and which modes each role may request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Who is submitting resumes. Drives the file-count rule and the legal modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Candidate,
    Recruiter,
}

/// The kind of evaluation requested from the remote service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// ATS keyword match against a job description.
    #[default]
    Match,
    TechAudit,
    Improve,
}

/// A selectable mode with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeOption {
    pub label: &'static str,
    pub value: Mode,
}

const CANDIDATE_MODES: &[Mode] = &[Mode::Match, Mode::TechAudit, Mode::Improve];
const RECRUITER_MODES: &[Mode] = &[Mode::Match];

impl Role {
    pub const ALL: [Role; 2] = [Role::Candidate, Role::Recruiter];

    /// Wire value sent in the `role` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Recruiter => "recruiter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Candidate => "Candidate",
            Role::Recruiter => "Recruiter",
        }
    }

    /// Legal modes for this role, in display order.
    pub fn allowed_modes(self) -> &'static [Mode] {
        match self {
            Role::Candidate => CANDIDATE_MODES,
            Role::Recruiter => RECRUITER_MODES,
        }
    }

    pub fn allows(self, mode: Mode) -> bool {
        self.allowed_modes().contains(&mode)
    }

    /// Recruiters are locked to ATS matching, so the mode picker is disabled for them.
    pub fn mode_selectable(self) -> bool {
        self.allowed_modes().len() > 1
    }

    /// Only recruiters may pick several files in one go. Advisory: appending
    /// never enforces it, validation does.
    pub fn multi_file_picker(self) -> bool {
        matches!(self, Role::Recruiter)
    }

    pub fn upload_prompt(self) -> &'static str {
        match self {
            Role::Candidate => "Upload Your Resume",
            Role::Recruiter => "Upload Resumes (PDF)",
        }
    }
}

impl Mode {
    /// Wire value sent in the `mode` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Match => "match",
            Mode::TechAudit => "tech_audit",
            Mode::Improve => "improve",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Match => "ATS Match Check",
            Mode::TechAudit => "Tech Audit",
            Mode::Improve => "Improve Resume",
        }
    }

    /// Only ATS matching uses the job description.
    pub fn requires_job_description(self) -> bool {
        matches!(self, Mode::Match)
    }
}

/// Labelled mode options offered for `role`.
pub fn available_modes(role: Role) -> Vec<ModeOption> {
    role.allowed_modes()
        .iter()
        .map(|&value| ModeOption {
            label: value.label(),
            value,
        })
        .collect()
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{0}' (expected candidate or recruiter)")]
pub struct ParseRoleError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode '{0}' (expected match, tech_audit or improve)")]
pub struct ParseModeError(String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "candidate" => Ok(Role::Candidate),
            "recruiter" => Ok(Role::Recruiter),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "match" => Ok(Mode::Match),
            "tech_audit" => Ok(Mode::TechAudit),
            "improve" => Ok(Mode::Improve),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_gets_all_modes_in_order() {
        let options: Vec<(Mode, &str)> = available_modes(Role::Candidate)
            .into_iter()
            .map(|o| (o.value, o.label))
            .collect();
        assert_eq!(
            options,
            vec![
                (Mode::Match, "ATS Match Check"),
                (Mode::TechAudit, "Tech Audit"),
                (Mode::Improve, "Improve Resume"),
            ]
        );
    }

    #[test]
    fn test_role_labels_and_upload_prompts() {
        assert_eq!(Role::Candidate.label(), "Candidate");
        assert_eq!(Role::Recruiter.label(), "Recruiter");
        assert_eq!(Role::Candidate.upload_prompt(), "Upload Your Resume");
        assert_eq!(Role::Recruiter.upload_prompt(), "Upload Resumes (PDF)");
    }

    #[test]
    fn test_only_recruiter_picks_multiple_files() {
        assert!(!Role::Candidate.multi_file_picker());
        assert!(Role::Recruiter.multi_file_picker());
    }

    #[test]
    fn test_recruiter_only_gets_match() {
        let options = available_modes(Role::Recruiter);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, Mode::Match);
        assert_eq!(options[0].label, "ATS Match Check");
        assert!(!Role::Recruiter.mode_selectable());
        assert!(Role::Candidate.mode_selectable());
    }

    #[test]
    fn test_allows_matches_allowed_modes() {
        assert!(Role::Candidate.allows(Mode::TechAudit));
        assert!(!Role::Recruiter.allows(Mode::TechAudit));
        assert!(!Role::Recruiter.allows(Mode::Improve));
        assert!(Role::Recruiter.allows(Mode::Match));
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(Role::Candidate.as_str(), "candidate");
        assert_eq!(Role::Recruiter.as_str(), "recruiter");
        assert_eq!(Mode::Match.as_str(), "match");
        assert_eq!(Mode::TechAudit.as_str(), "tech_audit");
        assert_eq!(Mode::Improve.as_str(), "improve");
    }

    #[test]
    fn test_parse_round_trips_wire_values() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        for mode in CANDIDATE_MODES {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), *mode);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert!("admin".parse::<Role>().is_err());
        assert!("Match".parse::<Mode>().is_err());
        assert!("tech-audit".parse::<Mode>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        assert_eq!(serde_json::to_string(&Mode::TechAudit).unwrap(), r#""tech_audit""#);
        let role: Role = serde_json::from_str(r#""recruiter""#).unwrap();
        assert_eq!(role, Role::Recruiter);
    }

    #[test]
    fn test_only_match_requires_job_description() {
        assert!(Mode::Match.requires_job_description());
        assert!(!Mode::TechAudit.requires_job_description());
        assert!(!Mode::Improve.requires_job_description());
    }
}
