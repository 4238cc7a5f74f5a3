use thiserror::Error;

/// Failures surfaced to whoever called into the countdown controller.
///
/// Both leave the controller exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountdownError {
    #[error("invalid due date {input:?}: expected YYYY-MM-DD")]
    InvalidDate { input: String },
    #[error("no due date has been set")]
    NotConfigured,
}
