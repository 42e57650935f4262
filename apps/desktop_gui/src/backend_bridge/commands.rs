//! Backend commands queued from UI to backend worker.

use shared::protocol::SubmissionPayload;

pub enum BackendCommand {
    SubmitOrder { payload: SubmissionPayload },
}
