use super::*;

fn sel(kind: HighlightKind, side: HighlightSide) -> HighlightSelection {
    HighlightSelection::new(kind, side)
}

#[test]
fn highlight_set_never_exceeds_cap() {
    let mut set = HighlightSet::default();
    let mut attempts = Vec::new();
    for kind in HighlightKind::ALL {
        for side in HighlightSide::ALL {
            attempts.push(sel(kind, side));
        }
    }
    // Walk every pair twice so adds, rejections, and removals interleave.
    for selection in attempts.iter().chain(attempts.iter()) {
        let _ = set.toggle(*selection);
        assert!(set.len() <= MAX_HIGHLIGHTS);
    }
}

#[test]
fn toggling_same_pair_twice_restores_set() {
    let mut set = HighlightSet::default();
    set.toggle(sel(HighlightKind::Swirl, HighlightSide::Left))
        .expect("first add");
    let before = set.clone();

    assert_eq!(
        set.toggle(sel(HighlightKind::Wave, HighlightSide::Right)),
        Ok(HighlightToggle::Added)
    );
    assert_eq!(
        set.toggle(sel(HighlightKind::Wave, HighlightSide::Right)),
        Ok(HighlightToggle::Removed)
    );
    assert_eq!(set, before);
}

#[test]
fn third_distinct_pair_is_rejected_without_mutation() {
    let mut set = HighlightSet::default();
    set.toggle(sel(HighlightKind::Cross, HighlightSide::Left))
        .expect("first");
    set.toggle(sel(HighlightKind::Star, HighlightSide::Right))
        .expect("second");
    let before = set.clone();

    let err = set
        .toggle(sel(HighlightKind::Sparkle, HighlightSide::Left))
        .expect_err("cap");
    assert_eq!(err.to_string(), HIGHLIGHT_CAP_MESSAGE);
    assert_eq!(set, before);
    assert!(set.is_selected(HighlightKind::Cross, HighlightSide::Left));
}

#[test]
fn sides_follow_insertion_order() {
    let mut set = HighlightSet::default();
    set.toggle(sel(HighlightKind::Star, HighlightSide::Right))
        .expect("right");
    set.toggle(sel(HighlightKind::Star, HighlightSide::Left))
        .expect("left");
    let sides: Vec<_> = set.sides_for(HighlightKind::Star).collect();
    assert_eq!(sides, vec![HighlightSide::Right, HighlightSide::Left]);
}

#[test]
fn text_input_upper_cases_hex() {
    let mut color = OutlineColor::default();
    assert!(color.set_from_text("1a2b3c"));
    assert_eq!(color.as_str(), "1A2B3C");
    assert_eq!(color.to_hex(), "#1A2B3C");
}

#[test]
fn text_input_rejects_non_hex_and_overlong() {
    let mut color = OutlineColor::default();
    assert!(color.set_from_text("#ff0"));
    assert!(!color.set_from_text("gg"));
    assert_eq!(color.as_str(), "FF0");
    assert!(!color.set_from_text("ff00aa1"));
    assert_eq!(color.as_str(), "FF0");
    assert!(color.set_from_text(""));
    assert_eq!(color.as_str(), "");
}

#[test]
fn text_input_drops_only_the_first_hash() {
    let mut color = OutlineColor::default();
    assert!(color.set_from_text("12#"));
    assert_eq!(color.as_str(), "12");
    assert!(!color.set_from_text("##34"));
    assert_eq!(color.as_str(), "12");
    assert!(color.set_from_text("#3"));
    assert_eq!(color.as_str(), "3");
}

#[test]
fn picker_value_is_stored_without_hash() {
    let mut color = OutlineColor::default();
    color.set_from_picker("#ff00aa");
    assert_eq!(color.as_str(), "ff00aa");
    assert!(color.is_complete());
}

#[test]
fn preview_pads_partial_input() {
    let mut color = OutlineColor::default();
    assert_eq!(color.preview_rgb(), [0, 0, 0]);
    color.set_from_text("FF8");
    assert_eq!(color.preview_rgb(), [0xFF, 0x80, 0x00]);
    assert!(!color.is_complete());
}

#[test]
fn draft_text_accessors_cover_every_text_field() {
    let mut draft = OrderDraft::default();
    for field in TextField::ALL {
        *draft.text_mut(field) = format!("{field:?}");
    }
    assert_eq!(draft.text(TextField::CharacterName), "CharacterName");
    assert_eq!(draft.hand_pose, "HandPose");
}
