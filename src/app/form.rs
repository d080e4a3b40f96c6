//! Quick-add form - owns the draft expense and the submission lifecycle

use crate::constants::SUBMIT_FAILED_ALERT;
use crate::error::SubmissionError;
use crate::messages::NetworkCommand;
use crate::models::DraftExpense;

/// Submission side of the exchange.
///
/// At most one submission is in flight per form; the busy flag gates the rest.
#[derive(Debug, Default)]
pub struct ExpenseForm {
    pub draft: DraftExpense,
    pending_request_id: Option<u64>,
    alert: Option<String>,
}

impl ExpenseForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.pending_request_id.is_some()
    }

    pub fn owns(&self, request_id: u64) -> bool {
        self.pending_request_id == Some(request_id)
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Start a submission under `request_id`.
    ///
    /// Returns `None` without side effects when busy or when the draft is not
    /// sendable (empty title, amount not a finite number).
    pub fn submit(&mut self, request_id: u64) -> Option<NetworkCommand> {
        if self.is_busy() {
            tracing::debug!("Submit ignored, previous submission still in flight");
            return None;
        }
        let expense = self.draft.to_payload()?;
        self.pending_request_id = Some(request_id);
        Some(NetworkCommand::CreateExpense {
            id: request_id,
            expense,
        })
    }

    /// Apply the backend's answer. Returns `true` when the expense was added.
    pub fn handle_response(&mut self, result: Result<(), SubmissionError>) -> bool {
        self.pending_request_id = None;
        match result {
            Ok(()) => {
                self.draft.clear();
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Could not add expense");
                self.alert = Some(SUBMIT_FAILED_ALERT.to_string());
                false
            }
        }
    }
}
