mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::OrderFormApp;

const APP_TITLE: &str = "YCH Chibi Commission Form";

#[derive(Parser, Debug)]
struct Args {
    /// Overrides the Formspree form id from order_form.toml / environment.
    #[arg(long)]
    form_id: Option<String>,
    /// Overrides the form endpoint base URL.
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(form_id) = args.form_id {
        settings.form_id = form_id;
    }
    if let Some(endpoint) = args.endpoint {
        settings.endpoint = endpoint;
    }
    let submission_url = settings
        .submission_url()
        .map(|url| url.to_string())
        .unwrap_or_else(|err| format!("<invalid: {err}>"));

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1100.0, 820.0])
            .with_min_inner_size([760.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            ui::theme::apply(&cc.egui_ctx);
            Ok(Box::new(OrderFormApp::bootstrap(
                cmd_tx,
                ui_rx,
                submission_url,
            )))
        }),
    )
}
