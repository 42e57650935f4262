//! Flattens an [`OrderDraft`] into the body the form backend receives.

use shared::{
    domain::{FormField, HighlightKind, HighlightSide},
    protocol::SubmissionPayload,
};

use crate::{
    draft::{HighlightSet, OrderDraft},
    requirements::is_visible,
};

pub const NO_HIGHLIGHTS: &str = "None";

/// `"Cross: L | Star: L, R"`, kinds in form order; `"None"` when empty.
pub fn highlights_summary(highlights: &HighlightSet) -> String {
    let parts: Vec<String> = HighlightKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let sides: Vec<&str> = highlights.sides_for(kind).map(HighlightSide::label).collect();
            if sides.is_empty() {
                None
            } else {
                Some(format!("{}: {}", kind.label(), sides.join(", ")))
            }
        })
        .collect();

    if parts.is_empty() {
        NO_HIGHLIGHTS.to_string()
    } else {
        parts.join(" | ")
    }
}

/// Only inputs rendered for the current commission type contribute a key.
pub fn build_payload(draft: &OrderDraft) -> SubmissionPayload {
    let mut payload = SubmissionPayload::new();
    for field in FormField::ALL {
        if !is_visible(field, draft.commission_type) {
            continue;
        }
        let value = match field {
            FormField::Nickname => draft.nickname.clone(),
            FormField::Username => draft.username.clone(),
            FormField::CharacterName => draft.character_name.clone(),
            FormField::ReferenceImage => draft.reference_image.clone(),
            FormField::CommissionType => draft.commission_type.wire_value().to_string(),
            FormField::OutlineColor => draft.outline_color.to_hex(),
            FormField::HandPose => draft.hand_pose.clone(),
            FormField::Clasp => draft
                .clasp
                .map(|clasp| clasp.name().to_string())
                .unwrap_or_default(),
            FormField::StarCharmColor => draft
                .charm_color
                .map(|charm| charm.name().to_string())
                .unwrap_or_default(),
            FormField::HairHighlights => highlights_summary(&draft.highlights),
        };
        payload.set(field.key(), value);
    }
    payload
}

#[cfg(test)]
#[path = "tests/payload_tests.rs"]
mod tests;
