use super::*;

use shared::domain::{CharmColor, ClaspColor, CommissionType, HighlightSelection};

fn highlights(pairs: &[(HighlightKind, HighlightSide)]) -> HighlightSet {
    let mut set = HighlightSet::default();
    for (kind, side) in pairs {
        set.toggle(HighlightSelection::new(*kind, *side))
            .expect("within cap");
    }
    set
}

#[test]
fn empty_highlights_summarize_as_none() {
    assert_eq!(highlights_summary(&HighlightSet::default()), "None");
}

#[test]
fn summary_follows_declaration_order() {
    let set = highlights(&[
        (HighlightKind::Star, HighlightSide::Right),
        (HighlightKind::Cross, HighlightSide::Left),
    ]);
    assert_eq!(highlights_summary(&set), "Cross: L | Star: R");
}

#[test]
fn summary_groups_both_sides_of_one_kind() {
    let set = highlights(&[
        (HighlightKind::Wave, HighlightSide::Left),
        (HighlightKind::Wave, HighlightSide::Right),
    ]);
    assert_eq!(highlights_summary(&set), "Wave: L, R");
}

#[test]
fn fullset_payload_carries_both_gated_keys() {
    let draft = OrderDraft {
        nickname: "Amy".into(),
        commission_type: CommissionType::Fullset,
        clasp: Some(ClaspColor::Gold),
        charm_color: Some(CharmColor::DarkBlue),
        ..OrderDraft::default()
    };
    let payload = build_payload(&draft);
    assert_eq!(payload.get("type"), Some("fullset"));
    assert_eq!(payload.get("clasp"), Some("gold"));
    assert_eq!(payload.get("starCharmColor"), Some("Dark Blue"));
    assert_eq!(payload.get("hairHighlights"), Some("None"));
}

#[test]
fn unset_type_omits_gated_keys() {
    let payload = build_payload(&OrderDraft::default());
    assert_eq!(payload.get("type"), Some(""));
    assert_eq!(payload.get("outlineColor"), Some("#"));
    assert!(!payload.contains_key("clasp"));
    assert!(!payload.contains_key("starCharmColor"));
    assert_eq!(
        payload.keys().collect::<Vec<_>>(),
        vec![
            "nickname",
            "username",
            "characterName",
            "referenceImage",
            "type",
            "outlineColor",
            "handPose",
            "hairHighlights",
        ]
    );
}
