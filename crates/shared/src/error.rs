use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{domain::FormField, protocol::BackendFieldError};

/// Errors reported for one rejected submission: messages tied to a field and
/// messages about the form as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionErrors {
    pub form: Vec<String>,
    pub fields: BTreeMap<String, Vec<String>>,
}

impl SubmissionErrors {
    pub fn form_error(message: impl Into<String>) -> Self {
        Self {
            form: vec![message.into()],
            fields: BTreeMap::new(),
        }
    }

    pub fn from_backend(summary: Option<String>, errors: Vec<BackendFieldError>) -> Self {
        let mut out = Self::default();
        for error in errors {
            match error.field {
                Some(field) if !field.is_empty() => {
                    out.fields.entry(field).or_default().push(error.message);
                }
                _ => out.form.push(error.message),
            }
        }
        if out.is_empty() {
            out.form
                .push(summary.unwrap_or_else(|| "Form submission failed".to_string()));
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.form.is_empty() && self.fields.values().all(Vec::is_empty)
    }

    pub fn for_field(&self, field: FormField) -> &[String] {
        self.fields
            .get(field.key())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Messages for `field`, prefixed with its label ("Nickname is required").
    pub fn labelled_for_field(&self, field: FormField) -> Vec<String> {
        self.for_field(field)
            .iter()
            .map(|message| format!("{} {message}", field.label()))
            .collect()
    }

    /// Field errors whose key does not match a rendered input.
    pub fn unmatched_field_errors(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|(key, _)| FormField::from_key(key).is_none())
            .flat_map(|(key, messages)| messages.iter().map(move |m| format!("{key} {m}")))
            .collect()
    }
}

impl fmt::Display for SubmissionErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.form.clone();
        for (key, messages) in &self.fields {
            let label = FormField::from_key(key)
                .map(FormField::label)
                .unwrap_or(key.as_str());
            parts.extend(messages.iter().map(|m| format!("{label} {m}")));
        }
        f.write_str(&parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_error(field: Option<&str>, message: &str) -> BackendFieldError {
        BackendFieldError {
            field: field.map(str::to_string),
            code: None,
            message: message.to_string(),
        }
    }

    #[test]
    fn splits_field_and_form_messages() {
        let errors = SubmissionErrors::from_backend(
            Some("Validation errors".into()),
            vec![
                field_error(Some("nickname"), "is required"),
                field_error(None, "form is disabled"),
            ],
        );
        assert_eq!(errors.form, vec!["form is disabled".to_string()]);
        assert_eq!(
            errors.labelled_for_field(FormField::Nickname),
            vec!["Nickname is required".to_string()]
        );
        assert!(errors.for_field(FormField::HandPose).is_empty());
    }

    #[test]
    fn falls_back_to_summary_when_no_details() {
        let errors = SubmissionErrors::from_backend(Some("Form not found".into()), Vec::new());
        assert_eq!(errors.to_string(), "Form not found");
    }
}
