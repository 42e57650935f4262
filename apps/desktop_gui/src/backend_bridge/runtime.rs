//! Runtime bridge between the UI command queue and the submission worker.

use std::thread;

use client_core::{FormBackendSettings, FormspreeClient, SubmissionService};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    settings: FormBackendSettings,
) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Submission worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("failed to build submission runtime: {err}"),
                )));
                tracing::error!("failed to build submission runtime: {err}");
                return;
            }
        };

        let client = match FormspreeClient::from_settings(&settings) {
            Ok(client) => client,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    err.to_string(),
                )));
                tracing::error!("form backend settings are unusable: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!(url = %client.submission_url(), "submission worker ready");
            let _ = ui_tx.try_send(UiEvent::Info("Ready to take orders".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::SubmitOrder { payload } => {
                        let outcome = client.submit(&payload).await;
                        if ui_tx.send(UiEvent::SubmissionFinished(outcome)).is_err() {
                            tracing::warn!("ui closed; dropping submission result");
                        }
                    }
                }
            }
            tracing::debug!("command queue closed; submission worker exiting");
        });
    });
}
