//! Command orchestration helpers from UI actions to the backend command queue.

use client_core::{OrderFormController, SubmissionOutcome, SubmitError};
use crossbeam_channel::{Sender, TrySendError};
use shared::error::SubmissionErrors;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext};

/// Queues `cmd` for the backend worker. On failure `status` explains why and
/// `false` is returned so the caller can unwind any pending state.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = match &cmd {
        BackendCommand::SubmitOrder { .. } => "submit_order",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Submission worker disconnected (possible startup failure); restart the app"
                    .to_string();
            false
        }
    }
}

/// Validates the draft and queues its payload. When the queue refuses it, the
/// submission is finished as a rejection so the form stays editable, and the
/// returned error describes why.
pub fn queue_submission(
    form: &mut OrderFormController,
    cmd_tx: &Sender<BackendCommand>,
    status: &mut String,
) -> Result<Option<UiError>, SubmitError> {
    let payload = form.begin_submission()?;
    if dispatch_backend_command(cmd_tx, BackendCommand::SubmitOrder { payload }, status) {
        *status = "Submitting order...".to_string();
        return Ok(None);
    }

    form.finish_submission(SubmissionOutcome::Rejected(SubmissionErrors::form_error(
        status.clone(),
    )));
    Ok(Some(UiError::from_message(
        UiErrorContext::SubmitOrder,
        status.clone(),
    )))
}
