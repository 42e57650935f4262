//! The in-memory order draft and the value types that guard its invariants.

use shared::domain::{
    CharmColor, ClaspColor, CommissionType, HighlightKind, HighlightSelection, HighlightSide,
    TextField,
};
use thiserror::Error;

pub const MAX_HIGHLIGHTS: usize = 2;
pub const HIGHLIGHT_CAP_MESSAGE: &str = "You can select at most 2 boxes.";
pub const OUTLINE_COLOR_DIGITS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", HIGHLIGHT_CAP_MESSAGE)]
pub struct HighlightCapExceeded;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightToggle {
    Added,
    Removed,
}

/// Selected hair highlights. Unique by (kind, side), never more than
/// [`MAX_HIGHLIGHTS`] entries; iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    entries: Vec<HighlightSelection>,
}

impl HighlightSet {
    pub fn contains(&self, selection: HighlightSelection) -> bool {
        self.entries.contains(&selection)
    }

    pub fn is_selected(&self, kind: HighlightKind, side: HighlightSide) -> bool {
        self.contains(HighlightSelection::new(kind, side))
    }

    pub fn toggle(
        &mut self,
        selection: HighlightSelection,
    ) -> Result<HighlightToggle, HighlightCapExceeded> {
        if let Some(index) = self.entries.iter().position(|s| *s == selection) {
            self.entries.remove(index);
            return Ok(HighlightToggle::Removed);
        }
        if self.entries.len() >= MAX_HIGHLIGHTS {
            return Err(HighlightCapExceeded);
        }
        self.entries.push(selection);
        Ok(HighlightToggle::Added)
    }

    pub fn sides_for(&self, kind: HighlightKind) -> impl Iterator<Item = HighlightSide> + '_ {
        self.entries
            .iter()
            .filter(move |s| s.kind == kind)
            .map(|s| s.side)
    }

    pub fn iter(&self) -> impl Iterator<Item = HighlightSelection> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outline colour hex digits, stored without the leading `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutlineColor(String);

impl OutlineColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value sent to the backend.
    pub fn to_hex(&self) -> String {
        format!("#{}", self.0)
    }

    pub fn is_complete(&self) -> bool {
        self.0.len() == OUTLINE_COLOR_DIGITS && self.0.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// A native colour input always reports `#rrggbb`, so nothing beyond the
    /// `#` is checked.
    pub fn set_from_picker(&mut self, value: &str) {
        self.0 = value.strip_prefix('#').unwrap_or(value).to_string();
    }

    /// Type-ahead filter: drops the first `#` wherever it sits, then keeps the
    /// prior value unless what remains is at most six upper-cased hex digits.
    pub fn set_from_text(&mut self, raw: &str) -> bool {
        let candidate = raw.replacen('#', "", 1).to_ascii_uppercase();
        let accepted = candidate.len() <= OUTLINE_COLOR_DIGITS
            && candidate.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F'));
        if accepted {
            self.0 = candidate;
        }
        accepted
    }

    /// RGB shown by the colour picker; short input is right-padded with `0`.
    pub fn preview_rgb(&self) -> [u8; 3] {
        let mut padded: String = self.0.chars().take(OUTLINE_COLOR_DIGITS).collect();
        while padded.len() < OUTLINE_COLOR_DIGITS {
            padded.push('0');
        }
        let channel = |range: std::ops::Range<usize>| {
            padded
                .get(range)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .unwrap_or(0)
        };
        [channel(0..2), channel(2..4), channel(4..6)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub nickname: String,
    pub username: String,
    pub character_name: String,
    pub reference_image: String,
    pub commission_type: CommissionType,
    pub outline_color: OutlineColor,
    pub hand_pose: String,
    pub highlights: HighlightSet,
    pub clasp: Option<ClaspColor>,
    pub charm_color: Option<CharmColor>,
}

impl OrderDraft {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Nickname => &self.nickname,
            TextField::Username => &self.username,
            TextField::CharacterName => &self.character_name,
            TextField::ReferenceImage => &self.reference_image,
            TextField::HandPose => &self.hand_pose,
        }
    }

    pub(crate) fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Nickname => &mut self.nickname,
            TextField::Username => &mut self.username,
            TextField::CharacterName => &mut self.character_name,
            TextField::ReferenceImage => &mut self.reference_image,
            TextField::HandPose => &mut self.hand_pose,
        }
    }
}

#[cfg(test)]
#[path = "tests/draft_tests.rs"]
mod tests;
