use std::fmt;

use shared::domain::FormField;
use thiserror::Error;

pub const FULLSET_OPTIONS_MESSAGE: &str =
    "Please select both Clasp and Star Charm Color for Fullset type";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingField(FormField),
    InvalidUrl,
    IncompleteOutlineColor,
    FullsetOptionsMissing,
}

impl ValidationIssue {
    pub fn field(self) -> Option<FormField> {
        match self {
            Self::MissingField(field) => Some(field),
            Self::InvalidUrl => Some(FormField::ReferenceImage),
            Self::IncompleteOutlineColor => Some(FormField::OutlineColor),
            Self::FullsetOptionsMissing => None,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{} is required", field.label()),
            Self::InvalidUrl => f.write_str("Reference Image must be a valid URL"),
            Self::IncompleteOutlineColor => {
                f.write_str("Outline Color must be a 6-digit hex code")
            }
            Self::FullsetOptionsMissing => f.write_str(FULLSET_OPTIONS_MESSAGE),
        }
    }
}

/// Every reason the current draft cannot be submitted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub(crate) fn push(&mut self, issue: ValidationIssue) {
        if !self.issues.contains(&issue) {
            self.issues.push(issue);
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn contains(&self, issue: ValidationIssue) -> bool {
        self.issues.contains(&issue)
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    pub fn for_field(&self, field: FormField) -> Vec<String> {
        self.issues
            .iter()
            .filter(|issue| issue.field() == Some(field))
            .map(ToString::to_string)
            .collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(ValidationReport),
    #[error("a submission is already in progress")]
    InFlight,
    #[error("this order was already submitted; start a new order first")]
    AlreadySubmitted,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("form id is empty")]
    MissingFormId,
    #[error("invalid form endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
}
