//! Form sections. Each panel reads the draft, renders inputs, and routes every
//! change back through the controller.

use client_core::{requirements::is_visible, OrderFormController, ValidationReport};
use eframe::egui;
use shared::domain::{
    CharmColor, ClaspColor, CommissionType, FormField, HighlightKind, HighlightSide, TextField,
};

use crate::ui::theme;

fn show_field_messages(
    ui: &mut egui::Ui,
    form: &OrderFormController,
    local: Option<&ValidationReport>,
    field: FormField,
) {
    if let Some(report) = local {
        for message in report.for_field(field) {
            ui.label(theme::error_text(message));
        }
    }
    for message in form.field_errors(field) {
        ui.label(theme::error_text(message));
    }
}

fn caption(field: FormField) -> &'static str {
    match field {
        FormField::Username => "Username (X)",
        other => other.label(),
    }
}

fn field_label(ui: &mut egui::Ui, field: FormField) {
    ui.label(egui::RichText::new(caption(field)).strong());
    if field == FormField::Username {
        ui.small(egui::RichText::new("Please make sure your DMs are open").color(theme::ROSE_600));
    }
}

fn text_input(
    ui: &mut egui::Ui,
    form: &mut OrderFormController,
    local: Option<&ValidationReport>,
    field: TextField,
    hint: &str,
) {
    field_label(ui, field.field());
    let mut buf = form.draft().text(field).to_string();
    let edit = if field == TextField::HandPose {
        egui::TextEdit::multiline(&mut buf).desired_rows(5)
    } else {
        egui::TextEdit::singleline(&mut buf)
    };
    let response = ui.add(edit.hint_text(hint).desired_width(f32::INFINITY));
    if response.changed() {
        form.set_field(field, buf);
    }
    show_field_messages(ui, form, local, field.field());
    ui.add_space(8.0);
}

pub fn contact_card(
    ui: &mut egui::Ui,
    form: &mut OrderFormController,
    local: Option<&ValidationReport>,
) {
    theme::card().show(ui, |ui| {
        text_input(ui, form, local, TextField::Nickname, "Your nickname");
        text_input(ui, form, local, TextField::Username, "@username");
        ui.small("Please write OC if the character is an OC");
        text_input(ui, form, local, TextField::CharacterName, "Character name");
        text_input(
            ui,
            form,
            local,
            TextField::ReferenceImage,
            "Please enter a publicly accessible link",
        );
    });
}

fn commission_type_picker(
    ui: &mut egui::Ui,
    form: &mut OrderFormController,
    local: Option<&ValidationReport>,
) {
    field_label(ui, FormField::CommissionType);
    let current = form.draft().commission_type;
    ui.horizontal(|ui| {
        for option in [CommissionType::Fullset, CommissionType::PngOnly] {
            let mut checked = current == option;
            if ui.checkbox(&mut checked, option.label()).changed() {
                form.set_commission_type(if checked {
                    option
                } else {
                    CommissionType::Unset
                });
            }
        }
    });
    show_field_messages(ui, form, local, FormField::CommissionType);
    ui.add_space(8.0);
}

fn outline_color_input(
    ui: &mut egui::Ui,
    form: &mut OrderFormController,
    local: Option<&ValidationReport>,
) {
    field_label(ui, FormField::OutlineColor);
    ui.horizontal(|ui| {
        let mut rgb = form.draft().outline_color.preview_rgb();
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            let picked = format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2]);
            form.set_outline_color_from_picker(&picked);
        }
        ui.label(egui::RichText::new("#").monospace());
        let mut hex = form.draft().outline_color.as_str().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut hex)
                .hint_text("000000")
                .char_limit(7)
                .font(egui::TextStyle::Monospace)
                .desired_width(120.0),
        );
        if response.changed() {
            form.set_outline_color_from_text(&hex);
        }
    });
    show_field_messages(ui, form, local, FormField::OutlineColor);
    ui.add_space(8.0);
}

fn clasp_picker(ui: &mut egui::Ui, form: &mut OrderFormController, local: Option<&ValidationReport>) {
    field_label(ui, FormField::Clasp);
    let mut selected = form.draft().clasp;
    egui::ComboBox::from_id_salt("clasp_color")
        .selected_text(selected.map(ClaspColor::name).unwrap_or("Select clasp color"))
        .width(260.0)
        .show_ui(ui, |ui| {
            for clasp in ClaspColor::ALL {
                ui.selectable_value(&mut selected, Some(*clasp), clasp.name());
            }
        });
    if selected != form.draft().clasp {
        form.set_clasp(selected);
    }
    show_field_messages(ui, form, local, FormField::Clasp);
    ui.add_space(8.0);
}

fn charm_color_picker(
    ui: &mut egui::Ui,
    form: &mut OrderFormController,
    local: Option<&ValidationReport>,
) {
    field_label(ui, FormField::StarCharmColor);
    let mut selected = form.draft().charm_color;
    egui::ComboBox::from_id_salt("star_charm_color")
        .selected_text(
            selected
                .map(CharmColor::name)
                .unwrap_or("Select star charm color"),
        )
        .width(260.0)
        .show_ui(ui, |ui| {
            for charm in CharmColor::ALL {
                ui.selectable_value(&mut selected, Some(*charm), charm.name());
            }
        });
    if selected != form.draft().charm_color {
        form.set_charm_color(selected);
    }
    show_field_messages(ui, form, local, FormField::StarCharmColor);
    ui.add_space(8.0);
}

pub fn commission_card(
    ui: &mut egui::Ui,
    form: &mut OrderFormController,
    local: Option<&ValidationReport>,
) {
    theme::card().show(ui, |ui| {
        commission_type_picker(ui, form, local);
        outline_color_input(ui, form, local);
        text_input(
            ui,
            form,
            local,
            TextField::HandPose,
            "Describe the hand pose you want",
        );

        let commission_type = form.draft().commission_type;
        if is_visible(FormField::Clasp, commission_type) {
            clasp_picker(ui, form, local);
        }
        if is_visible(FormField::StarCharmColor, commission_type) {
            charm_color_picker(ui, form, local);
        }
    });
}

pub fn highlights_card(ui: &mut egui::Ui, form: &mut OrderFormController) {
    theme::card().show(ui, |ui| {
        ui.label(
            egui::RichText::new(FormField::HairHighlights.label())
                .strong()
                .size(18.0),
        );
        ui.small("Select up to 2 boxes total.");
        ui.add_space(6.0);

        egui::Grid::new("hair_highlights")
            .num_columns(3)
            .spacing([18.0, 8.0])
            .show(ui, |ui| {
                for kind in HighlightKind::ALL {
                    ui.label(egui::RichText::new(kind.label()).monospace());
                    for side in HighlightSide::ALL {
                        let mut checked = form.draft().highlights.is_selected(kind, side);
                        if ui.checkbox(&mut checked, side.label()).changed() {
                            // A rejected toggle is mirrored in `highlight_error`.
                            let _ = form.toggle_highlight(kind, side);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(message) = form.highlight_error() {
            ui.add_space(6.0);
            ui.label(theme::error_text(message));
        }
        for message in form.field_errors(FormField::HairHighlights) {
            ui.label(theme::error_text(message));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_caption_names_the_platform() {
        assert_eq!(caption(FormField::Username), "Username (X)");
        assert_eq!(caption(FormField::Nickname), FormField::Nickname.label());
    }
}
