use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownOption {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Declares a closed option list whose variants map to the exact display
/// names the form backend receives.
macro_rules! option_catalog {
    ($name:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.name().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| UnknownOption::new($kind, s))
            }
        }
    };
}

option_catalog!(ClaspColor, "clasp color", {
    Brown => "brown",
    Orange => "orange",
    Pink => "pink",
    Benhur => "benhur",
    Black => "black",
    Green => "green",
    Purple => "purple",
    LightPurple => "light purple",
    White => "white",
    Blue => "blue",
    Tosca => "tosca",
    Red => "red",
    Silver => "silver",
    Gold => "gold",
    LightYellow => "light yellow",
    Yellow => "yellow",
    Peach => "peach",
    Grey => "grey",
});

option_catalog!(CharmColor, "star charm color", {
    Green => "Green",
    LightGreen => "Light green",
    Red => "Red",
    Purple => "Purple",
    Yellow => "Yellow",
    WhiteTransparent => "White (transparent)",
    LightBlue => "Light Blue",
    DarkBlue => "Dark Blue",
    Fuchsia => "Fuchsia",
    Black => "Black",
    Brown => "Brown",
    Orange => "Orange",
    Peach => "Peach",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionType {
    #[default]
    Unset,
    Fullset,
    PngOnly,
}

impl CommissionType {
    /// Value carried by the `type` key of the submission payload.
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Fullset => "fullset",
            Self::PngOnly => "png",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unset => "Not selected",
            Self::Fullset => "Fullset",
            Self::PngOnly => "PNG only",
        }
    }
}

impl FromStr for CommissionType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "unset" | "none" => Ok(Self::Unset),
            "fullset" => Ok(Self::Fullset),
            "png" | "png_only" | "png-only" => Ok(Self::PngOnly),
            _ => Err(UnknownOption::new("commission type", s)),
        }
    }
}

/// Hair highlight shapes, in the order the form lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightKind {
    Cross,
    Swirl,
    Sparkle,
    Star,
    Wave,
}

impl HighlightKind {
    pub const ALL: [HighlightKind; 5] = [
        HighlightKind::Cross,
        HighlightKind::Swirl,
        HighlightKind::Sparkle,
        HighlightKind::Star,
        HighlightKind::Wave,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Cross => "cross",
            Self::Swirl => "swirl",
            Self::Sparkle => "sparkle",
            Self::Star => "star",
            Self::Wave => "wave",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cross => "Cross",
            Self::Swirl => "Swirl",
            Self::Sparkle => "Sparkle",
            Self::Star => "Star",
            Self::Wave => "Wave",
        }
    }
}

impl FromStr for HighlightKind {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownOption::new("highlight", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightSide {
    Left,
    Right,
}

impl HighlightSide {
    pub const ALL: [HighlightSide; 2] = [HighlightSide::Left, HighlightSide::Right];

    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "L",
            Self::Right => "R",
        }
    }
}

impl FromStr for HighlightSide {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LEFT" => Ok(Self::Left),
            "R" | "RIGHT" => Ok(Self::Right),
            _ => Err(UnknownOption::new("highlight side", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighlightSelection {
    pub kind: HighlightKind,
    pub side: HighlightSide,
}

impl HighlightSelection {
    pub fn new(kind: HighlightKind, side: HighlightSide) -> Self {
        Self { kind, side }
    }
}

/// Parses the `kind:side` shorthand, e.g. `cross:L`.
impl FromStr for HighlightSelection {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, side) = s
            .split_once(':')
            .ok_or_else(|| UnknownOption::new("highlight selection", s))?;
        Ok(Self::new(kind.parse()?, side.parse()?))
    }
}

/// Every input the order form exposes, keyed the way the backend sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormField {
    Nickname,
    Username,
    CharacterName,
    ReferenceImage,
    CommissionType,
    OutlineColor,
    HandPose,
    Clasp,
    StarCharmColor,
    HairHighlights,
}

impl FormField {
    /// Document order of the rendered form.
    pub const ALL: [FormField; 10] = [
        FormField::Nickname,
        FormField::Username,
        FormField::CharacterName,
        FormField::ReferenceImage,
        FormField::CommissionType,
        FormField::OutlineColor,
        FormField::HandPose,
        FormField::Clasp,
        FormField::StarCharmColor,
        FormField::HairHighlights,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Nickname => "nickname",
            Self::Username => "username",
            Self::CharacterName => "characterName",
            Self::ReferenceImage => "referenceImage",
            Self::CommissionType => "type",
            Self::OutlineColor => "outlineColor",
            Self::HandPose => "handPose",
            Self::Clasp => "clasp",
            Self::StarCharmColor => "starCharmColor",
            Self::HairHighlights => "hairHighlights",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Nickname => "Nickname",
            Self::Username => "Username",
            Self::CharacterName => "Character Name",
            Self::ReferenceImage => "Reference Image",
            Self::CommissionType => "Type",
            Self::OutlineColor => "Outline Color",
            Self::HandPose => "Hand Pose",
            Self::Clasp => "Clasp",
            Self::StarCharmColor => "Star Charm Color",
            Self::HairHighlights => "Hair Highlights",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Free-text inputs that `set_field` may replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Nickname,
    Username,
    CharacterName,
    ReferenceImage,
    HandPose,
}

impl TextField {
    pub const ALL: [TextField; 5] = [
        TextField::Nickname,
        TextField::Username,
        TextField::CharacterName,
        TextField::ReferenceImage,
        TextField::HandPose,
    ];

    pub fn field(self) -> FormField {
        match self {
            Self::Nickname => FormField::Nickname,
            Self::Username => FormField::Username,
            Self::CharacterName => FormField::CharacterName,
            Self::ReferenceImage => FormField::ReferenceImage,
            Self::HandPose => FormField::HandPose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogues_keep_backend_names() {
        assert_eq!(ClaspColor::ALL.len(), 18);
        assert_eq!(CharmColor::ALL.len(), 13);
        assert_eq!(ClaspColor::LightPurple.name(), "light purple");
        assert_eq!(CharmColor::WhiteTransparent.name(), "White (transparent)");
    }

    #[test]
    fn parses_options_case_insensitively() {
        assert_eq!("Pink".parse::<ClaspColor>(), Ok(ClaspColor::Pink));
        assert_eq!("light blue".parse::<CharmColor>(), Ok(CharmColor::LightBlue));
        let err = "magenta".parse::<ClaspColor>().expect_err("not a clasp");
        assert_eq!(err.to_string(), "unknown clasp color 'magenta'");
    }

    #[test]
    fn parses_highlight_shorthand() {
        let selection: HighlightSelection = "star:r".parse().expect("selection");
        assert_eq!(
            selection,
            HighlightSelection::new(HighlightKind::Star, HighlightSide::Right)
        );
        assert!("star".parse::<HighlightSelection>().is_err());
        assert!("moon:L".parse::<HighlightSelection>().is_err());
    }

    #[test]
    fn commission_type_wire_values() {
        assert_eq!(CommissionType::Unset.wire_value(), "");
        assert_eq!(CommissionType::Fullset.wire_value(), "fullset");
        assert_eq!(CommissionType::PngOnly.wire_value(), "png");
        assert_eq!("png".parse::<CommissionType>(), Ok(CommissionType::PngOnly));
    }

    #[test]
    fn form_field_keys_round_trip() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_key(field.key()), Some(field));
        }
        assert_eq!(FormField::from_key("charmColor"), None);
    }
}
