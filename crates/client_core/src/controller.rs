//! Order form controller: owns the draft, applies user actions, and drives the
//! submission status machine.

use shared::{
    domain::{
        CharmColor, ClaspColor, CommissionType, FormField, HighlightKind, HighlightSelection,
        HighlightSide, TextField,
    },
    error::SubmissionErrors,
    protocol::SubmissionPayload,
};
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    draft::{HighlightCapExceeded, HighlightToggle, OrderDraft},
    error::{SubmitError, ValidationIssue, ValidationReport},
    payload::build_payload,
    requirements::{required_fields, visible_fields},
    submission::{SubmissionOutcome, SubmissionService},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(SubmissionErrors),
}

/// Which of the two screens should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderView {
    Form,
    Acknowledgment,
}

#[derive(Debug, Default)]
pub struct OrderFormController {
    draft: OrderDraft,
    highlight_error: Option<String>,
    status: SubmissionStatus,
}

impl OrderFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn highlight_error(&self) -> Option<&str> {
        self.highlight_error.as_deref()
    }

    pub fn view(&self) -> OrderView {
        match self.status {
            SubmissionStatus::Succeeded => OrderView::Acknowledgment,
            _ => OrderView::Form,
        }
    }

    pub fn visible_fields(&self) -> Vec<FormField> {
        visible_fields(self.draft.commission_type)
    }

    /// Remote messages for `field` from the last rejected submission.
    pub fn field_errors(&self, field: FormField) -> Vec<String> {
        match &self.status {
            SubmissionStatus::Failed(errors) => errors.labelled_for_field(field),
            _ => Vec::new(),
        }
    }

    /// Remote messages not tied to a rendered input.
    pub fn form_errors(&self) -> Vec<String> {
        match &self.status {
            SubmissionStatus::Failed(errors) => {
                let mut messages = errors.form.clone();
                messages.extend(errors.unmatched_field_errors());
                messages
            }
            _ => Vec::new(),
        }
    }

    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        *self.draft.text_mut(field) = value.into();
    }

    pub fn set_clasp(&mut self, clasp: Option<ClaspColor>) {
        self.draft.clasp = clasp;
    }

    pub fn set_charm_color(&mut self, charm_color: Option<CharmColor>) {
        self.draft.charm_color = charm_color;
    }

    /// Always clears clasp and charm colour, even when the type is unchanged.
    pub fn set_commission_type(&mut self, commission_type: CommissionType) {
        debug!(
            from = self.draft.commission_type.wire_value(),
            to = commission_type.wire_value(),
            "commission type changed"
        );
        self.draft.commission_type = commission_type;
        self.draft.clasp = None;
        self.draft.charm_color = None;
    }

    pub fn toggle_highlight(
        &mut self,
        kind: HighlightKind,
        side: HighlightSide,
    ) -> Result<HighlightToggle, HighlightCapExceeded> {
        match self
            .draft
            .highlights
            .toggle(HighlightSelection::new(kind, side))
        {
            Ok(toggle) => {
                self.highlight_error = None;
                Ok(toggle)
            }
            Err(err) => {
                debug!(kind = kind.id(), side = side.label(), "highlight cap reached");
                self.highlight_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn set_outline_color_from_picker(&mut self, value: &str) {
        self.draft.outline_color.set_from_picker(value);
    }

    /// Returns whether the keystroke was kept.
    pub fn set_outline_color_from_text(&mut self, raw: &str) -> bool {
        self.draft.outline_color.set_from_text(raw)
    }

    pub fn validate(&self) -> Result<(), ValidationReport> {
        let draft = &self.draft;
        let mut report = ValidationReport::default();

        if draft.commission_type == CommissionType::Fullset
            && (draft.clasp.is_none() || draft.charm_color.is_none())
        {
            report.push(ValidationIssue::FullsetOptionsMissing);
        }

        for field in required_fields(draft.commission_type) {
            if report.contains(ValidationIssue::FullsetOptionsMissing)
                && matches!(field, FormField::Clasp | FormField::StarCharmColor)
            {
                continue;
            }
            let present = match field {
                FormField::Nickname => !draft.nickname.trim().is_empty(),
                FormField::Username => !draft.username.trim().is_empty(),
                FormField::CharacterName => !draft.character_name.trim().is_empty(),
                FormField::ReferenceImage => !draft.reference_image.trim().is_empty(),
                FormField::OutlineColor => !draft.outline_color.as_str().is_empty(),
                FormField::HandPose => !draft.hand_pose.trim().is_empty(),
                FormField::Clasp => draft.clasp.is_some(),
                FormField::StarCharmColor => draft.charm_color.is_some(),
                FormField::CommissionType | FormField::HairHighlights => true,
            };
            if !present {
                report.push(ValidationIssue::MissingField(field));
            }
        }

        let reference = draft.reference_image.trim();
        if !reference.is_empty() && Url::parse(reference).is_err() {
            report.push(ValidationIssue::InvalidUrl);
        }
        if !draft.outline_color.as_str().is_empty() && !draft.outline_color.is_complete() {
            report.push(ValidationIssue::IncompleteOutlineColor);
        }

        if report.is_empty() {
            Ok(())
        } else {
            Err(report)
        }
    }

    /// Validates the draft and enters `Submitting`, returning the payload to
    /// hand to a [`SubmissionService`].
    pub fn begin_submission(&mut self) -> Result<SubmissionPayload, SubmitError> {
        match self.status {
            SubmissionStatus::Submitting => return Err(SubmitError::InFlight),
            SubmissionStatus::Succeeded => return Err(SubmitError::AlreadySubmitted),
            SubmissionStatus::Idle | SubmissionStatus::Failed(_) => {}
        }

        if let Err(report) = self.validate() {
            debug!(issues = %report, "submission blocked by validation");
            return Err(SubmitError::Invalid(report));
        }

        let payload = build_payload(&self.draft);
        self.status = SubmissionStatus::Submitting;
        info!(
            commission_type = self.draft.commission_type.wire_value(),
            keys = payload.len(),
            "submitting order"
        );
        Ok(payload)
    }

    pub fn finish_submission(&mut self, outcome: SubmissionOutcome) {
        if self.status != SubmissionStatus::Submitting {
            debug!("ignoring submission result with no submission in flight");
            return;
        }
        self.status = match outcome {
            SubmissionOutcome::Accepted => {
                info!("order accepted by form backend");
                SubmissionStatus::Succeeded
            }
            SubmissionOutcome::Rejected(errors) => {
                warn!(errors = %errors, "order rejected by form backend");
                SubmissionStatus::Failed(errors)
            }
        };
    }

    pub async fn validate_and_submit<S>(
        &mut self,
        service: &S,
    ) -> Result<&SubmissionStatus, SubmitError>
    where
        S: SubmissionService + ?Sized,
    {
        let payload = self.begin_submission()?;
        let outcome = service.submit(&payload).await;
        self.finish_submission(outcome);
        Ok(&self.status)
    }

    /// Discards the draft and every status so a fresh order can begin.
    pub fn start_new_order(&mut self) {
        debug!("starting a new order");
        *self = Self::new();
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
