//! Rose palette shared by every panel.

use eframe::egui;

pub const ROSE_50: egui::Color32 = egui::Color32::from_rgb(255, 241, 242);
pub const ROSE_200: egui::Color32 = egui::Color32::from_rgb(254, 205, 211);
pub const ROSE_500: egui::Color32 = egui::Color32::from_rgb(244, 63, 94);
pub const ROSE_600: egui::Color32 = egui::Color32::from_rgb(225, 29, 72);
pub const ROSE_900: egui::Color32 = egui::Color32::from_rgb(136, 19, 55);
pub const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(255, 250, 250);
pub const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(255, 228, 230);

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = ROSE_50;
    visuals.window_fill = CARD_FILL;
    visuals.override_text_color = Some(ROSE_900);
    visuals.selection.bg_fill = ROSE_500;
    visuals.selection.stroke = egui::Stroke::new(1.0, ROSE_900);
    visuals.hyperlink_color = ROSE_600;
    ctx.set_visuals(visuals);
}

pub fn card() -> egui::Frame {
    egui::Frame::NONE
        .fill(CARD_FILL)
        .stroke(egui::Stroke::new(2.0, ROSE_200))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(16, 14))
}

pub fn error_text(message: impl Into<String>) -> egui::RichText {
    egui::RichText::new(message).color(ROSE_600).small()
}
