//! Commission order form core: draft state, validation rules, payload
//! shaping, and the submission client.

pub mod config;
pub mod controller;
pub mod draft;
pub mod error;
pub mod payload;
pub mod requirements;
pub mod submission;

pub use config::{load_settings, FormBackendSettings};
pub use controller::{OrderFormController, OrderView, SubmissionStatus};
pub use draft::{HighlightCapExceeded, HighlightSet, OrderDraft, OutlineColor, HIGHLIGHT_CAP_MESSAGE};
pub use error::{ConfigError, SubmitError, ValidationIssue, ValidationReport};
pub use payload::{build_payload, highlights_summary};
pub use submission::{FormspreeClient, SubmissionError, SubmissionOutcome, SubmissionService};
