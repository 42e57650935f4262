use std::time::Duration;

use chrono::{DateTime, Local};
use client_core::{
    OrderFormController, OrderView, SubmissionOutcome, SubmitError, ValidationReport,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{err_label, UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::queue_submission;
use crate::ui::{panels, theme};

#[derive(Debug, Clone)]
struct StatusBanner {
    lines: Vec<String>,
    from_validation: bool,
}

impl StatusBanner {
    fn from_report(report: &ValidationReport) -> Self {
        Self {
            lines: report.messages(),
            from_validation: true,
        }
    }

    fn from_error(err: &UiError) -> Self {
        Self {
            lines: vec![format!("{}: {}", err_label(err.category()), err.message())],
            from_validation: false,
        }
    }
}

pub struct OrderFormApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    form: OrderFormController,
    validation: Option<ValidationReport>,
    status: String,
    status_banner: Option<StatusBanner>,
    submitted_at: Option<DateTime<Local>>,
    submission_url: String,
}

impl OrderFormApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        submission_url: String,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            form: OrderFormController::new(),
            validation: None,
            status: "Starting".to_string(),
            status_banner: None,
            submitted_at: None,
            submission_url,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::SubmissionFinished(outcome) => {
                    let rejection = match &outcome {
                        SubmissionOutcome::Accepted => None,
                        SubmissionOutcome::Rejected(errors) => Some(UiError::from_message(
                            UiErrorContext::SubmitOrder,
                            errors.to_string(),
                        )),
                    };
                    self.form.finish_submission(outcome);
                    match rejection {
                        None => {
                            self.submitted_at = Some(Local::now());
                            self.status = "Order submitted".to_string();
                            self.status_banner = None;
                        }
                        Some(err) => {
                            self.status = "Submission was not accepted; review the messages below"
                                .to_string();
                            self.status_banner = Some(StatusBanner::from_error(&err));
                        }
                    }
                }
                UiEvent::Error(err) => {
                    if err.context() == UiErrorContext::BackendStartup {
                        self.status = "Submission worker unavailable".to_string();
                    }
                    tracing::warn!(context = ?err.context(), "{}", err.message());
                    self.status_banner = Some(StatusBanner::from_error(&err));
                }
            }
        }
    }

    fn try_submit(&mut self) {
        match queue_submission(&mut self.form, &self.cmd_tx, &mut self.status) {
            Ok(queue_failure) => {
                self.validation = None;
                self.status_banner = queue_failure.as_ref().map(StatusBanner::from_error);
            }
            Err(SubmitError::Invalid(report)) => {
                self.status = "Please fix the highlighted fields".to_string();
                self.status_banner = Some(StatusBanner::from_report(&report));
                self.validation = Some(report);
            }
            Err(err) => {
                self.status = err.to_string();
            }
        }
    }

    /// Once a submit attempt has failed locally, keeps the messages and the
    /// banner in step with the draft so they disappear as fields are fixed.
    fn refresh_validation(&mut self) {
        if self.validation.is_none() {
            return;
        }
        self.validation = self.form.validate().err();
        if self
            .status_banner
            .as_ref()
            .is_some_and(|banner| banner.from_validation)
        {
            self.status_banner = self.validation.as_ref().map(StatusBanner::from_report);
        }
    }

    fn start_new_order(&mut self) {
        self.form.start_new_order();
        self.validation = None;
        self.status_banner = None;
        self.submitted_at = None;
        self.status = "Ready for a new order".to_string();
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            egui::Frame::NONE
                .fill(theme::ERROR_FILL)
                .stroke(egui::Stroke::new(1.0, theme::ROSE_500))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            for line in &banner.lines {
                                ui.label(egui::RichText::new(line).color(theme::ROSE_600));
                            }
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
                });
            ui.add_space(10.0);
        }
    }

    fn show_submit_row(&mut self, ui: &mut egui::Ui) {
        for message in self.form.form_errors() {
            ui.label(theme::error_text(message));
        }

        let submitting = self.form.is_submitting();
        let label = if submitting {
            "Submitting..."
        } else {
            "Submit Order"
        };
        let button = egui::Button::new(
            egui::RichText::new(label)
                .strong()
                .size(16.0)
                .color(egui::Color32::WHITE),
        )
        .fill(theme::ROSE_500)
        .min_size(egui::vec2(ui.available_width(), 40.0));

        if ui.add_enabled(!submitting, button).clicked() {
            self.try_submit();
        }

        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            ui.small("Status:");
            ui.small(egui::RichText::new(&self.status).weak());
        });
        ui.small(egui::RichText::new(format!("Orders are sent to {}", self.submission_url)).weak());
    }

    fn show_form(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("YCH Chibi Commission Form")
                                .size(30.0)
                                .strong(),
                        );
                        ui.hyperlink_to("by yuuepye", "https://x.com/yuuepye");
                    });
                    ui.add_space(12.0);
                    self.show_status_banner(ui);

                    let local = self.validation.as_ref();
                    let form = &mut self.form;
                    ui.columns(2, |columns| {
                        panels::highlights_card(&mut columns[0], form);
                        panels::contact_card(&mut columns[1], form, local);
                        columns[1].add_space(12.0);
                        panels::commission_card(&mut columns[1], form, local);
                    });

                    ui.add_space(12.0);
                    self.show_submit_row(ui);
                });
        });
    }

    fn show_acknowledgment(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space((ui.available_height() * 0.2).clamp(24.0, 120.0));
            ui.vertical_centered(|ui| {
                ui.set_max_width(640.0);
                theme::card().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("Thank you for your order!")
                                .size(28.0)
                                .strong(),
                        );
                        ui.add_space(8.0);
                        ui.label(
                            "Your commission request has been submitted successfully. \
                             We'll contact you soon via your X DM.",
                        );
                        if let Some(at) = self.submitted_at {
                            ui.small(format!("Submitted {}", at.format("%Y-%m-%d %H:%M")));
                        }
                        ui.add_space(16.0);
                        let button = egui::Button::new(
                            egui::RichText::new("Submit Another Order")
                                .strong()
                                .color(egui::Color32::WHITE),
                        )
                        .fill(theme::ROSE_500);
                        if ui.add(button).clicked() {
                            self.start_new_order();
                        }
                    });
                });
            });
        });
    }
}

impl eframe::App for OrderFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.refresh_validation();

        match self.form.view() {
            OrderView::Form => self.show_form(ctx),
            OrderView::Acknowledgment => self.show_acknowledgment(ctx),
        }

        if self.form.is_submitting() {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crossbeam_channel::bounded;
    use shared::domain::TextField;
    use shared::error::SubmissionErrors;

    fn app() -> (OrderFormApp, Sender<UiEvent>, Receiver<BackendCommand>) {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(4);
        let app = OrderFormApp::bootstrap(cmd_tx, ui_rx, "http://127.0.0.1/f/test".to_string());
        (app, ui_tx, cmd_rx)
    }

    fn banner_lines(app: &OrderFormApp) -> Vec<String> {
        app.status_banner
            .as_ref()
            .map(|banner| banner.lines.clone())
            .unwrap_or_default()
    }

    #[test]
    fn banner_drops_fields_as_they_are_fixed() {
        let (mut app, _ui_tx, cmd_rx) = app();
        app.try_submit();
        assert!(banner_lines(&app).contains(&"Nickname is required".to_string()));
        assert!(cmd_rx.try_recv().is_err());

        app.form.set_field(TextField::Nickname, "Amy");
        app.refresh_validation();
        let lines = banner_lines(&app);
        assert!(!lines.contains(&"Nickname is required".to_string()));
        assert!(lines.contains(&"Username is required".to_string()));
    }

    #[test]
    fn error_banner_is_not_replaced_by_validation_refresh() {
        let (mut app, ui_tx, _cmd_rx) = app();
        app.try_submit();
        ui_tx
            .send(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                "form id is empty",
            )))
            .expect("queue event");
        app.process_ui_events();
        app.refresh_validation();
        assert_eq!(banner_lines(&app), vec!["Configuration: form id is empty".to_string()]);
    }

    #[test]
    fn rejected_outcome_surfaces_as_submit_error() {
        let (mut app, ui_tx, _cmd_rx) = app();
        ui_tx
            .send(UiEvent::SubmissionFinished(SubmissionOutcome::Rejected(
                SubmissionErrors::form_error(
                    "could not reach the form service: connection refused",
                ),
            )))
            .expect("queue event");
        app.process_ui_events();
        assert_eq!(
            banner_lines(&app),
            vec!["Connection: could not reach the form service: connection refused".to_string()]
        );
    }
}
