//! Which inputs the form shows and requires for a given commission type.
//! Rendering and pre-submit validation both read these rules.

use shared::domain::{CommissionType, FormField};

const BASE_REQUIRED: [FormField; 6] = [
    FormField::Nickname,
    FormField::Username,
    FormField::CharacterName,
    FormField::ReferenceImage,
    FormField::OutlineColor,
    FormField::HandPose,
];

/// Inputs that exist only for some commission types.
pub fn gated_fields(commission_type: CommissionType) -> &'static [FormField] {
    match commission_type {
        CommissionType::Unset => &[],
        CommissionType::PngOnly => &[FormField::Clasp],
        CommissionType::Fullset => &[FormField::Clasp, FormField::StarCharmColor],
    }
}

pub fn is_visible(field: FormField, commission_type: CommissionType) -> bool {
    match field {
        FormField::Clasp | FormField::StarCharmColor => {
            gated_fields(commission_type).contains(&field)
        }
        _ => true,
    }
}

pub fn required_fields(commission_type: CommissionType) -> Vec<FormField> {
    BASE_REQUIRED
        .iter()
        .chain(gated_fields(commission_type))
        .copied()
        .collect()
}

pub fn visible_fields(commission_type: CommissionType) -> Vec<FormField> {
    FormField::ALL
        .into_iter()
        .filter(|field| is_visible(*field, commission_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gated_fields_follow_commission_type() {
        assert!(gated_fields(CommissionType::Unset).is_empty());
        assert_eq!(gated_fields(CommissionType::PngOnly), &[FormField::Clasp]);
        assert_eq!(
            gated_fields(CommissionType::Fullset),
            &[FormField::Clasp, FormField::StarCharmColor]
        );
    }

    #[test]
    fn png_only_hides_star_charm() {
        assert!(is_visible(FormField::Clasp, CommissionType::PngOnly));
        assert!(!is_visible(FormField::StarCharmColor, CommissionType::PngOnly));
        assert!(!is_visible(FormField::Clasp, CommissionType::Unset));
        assert!(is_visible(FormField::HairHighlights, CommissionType::Unset));
    }

    #[test]
    fn required_fields_extend_base_set() {
        let unset = required_fields(CommissionType::Unset);
        assert_eq!(unset.len(), 6);
        assert!(!unset.contains(&FormField::CommissionType));

        let fullset = required_fields(CommissionType::Fullset);
        assert_eq!(fullset.len(), 8);
        assert!(fullset.contains(&FormField::StarCharmColor));
    }
}
