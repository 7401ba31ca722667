use shared_types::{AppError, ExchangeForm, ExchangeReceipt, FormField};
use std::collections::HashMap;

/// Per-field error messages keyed by `FormField::key`.
pub type FieldErrors = HashMap<String, String>;

/// Where the exchange page is in the submit cycle.
///
/// `Idle -> Submitting -> Submitted -> Idle` on success,
/// `Submitting -> Failed -> Submitting` on retry.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    /// The confirmation overlay is open.
    Submitted(ExchangeReceipt),
    Failed,
}

impl SubmissionPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionPhase::Submitting)
    }

    pub fn is_overlay_open(&self) -> bool {
        matches!(self, SubmissionPhase::Submitted(_))
    }

    /// Enter `Submitting`. Returns `false`, leaving the phase untouched,
    /// while a request is already in flight or the overlay is still open.
    pub fn begin(&mut self) -> bool {
        match self {
            SubmissionPhase::Idle | SubmissionPhase::Failed => {
                *self = SubmissionPhase::Submitting;
                true
            }
            SubmissionPhase::Submitting | SubmissionPhase::Submitted(_) => false,
        }
    }

    pub fn succeed(&mut self, receipt: ExchangeReceipt) {
        *self = SubmissionPhase::Submitted(receipt);
    }

    pub fn fail(&mut self) {
        *self = SubmissionPhase::Failed;
    }

    /// Overlay dismissed.
    pub fn close(&mut self) {
        if self.is_overlay_open() {
            *self = SubmissionPhase::Idle;
        }
    }

    /// Receipt shown in the overlay.
    pub fn receipt(&self) -> Option<&ExchangeReceipt> {
        match self {
            SubmissionPhase::Submitted(receipt) => Some(receipt),
            _ => None,
        }
    }
}

/// Store one edited value and drop the error shown for that field.
pub fn apply_edit(form: &mut ExchangeForm, errors: &mut FieldErrors, field: FormField, value: String) {
    form.set(field, value);
    errors.remove(field.key());
}

/// Reset button: blank every field and error.
pub fn clear_form(form: &mut ExchangeForm, errors: &mut FieldErrors) {
    form.reset();
    errors.clear();
}

/// Overlay dismissed: back to `Idle` with a blank form.
pub fn dismiss_overlay(phase: &mut SubmissionPhase, form: &mut ExchangeForm, errors: &mut FieldErrors) {
    phase.close();
    clear_form(form, errors);
}

/// What to show after a failed submit.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureFeedback {
    /// Inline messages next to the offending fields.
    Fields(FieldErrors),
    /// A toast with a single message.
    Toast(String),
}

impl FailureFeedback {
    /// Classify the text of a server function error.
    pub fn from_server_error(error: &str) -> Self {
        let fields = AppError::parse_field_errors(error);
        if fields.is_empty() {
            FailureFeedback::Toast(AppError::friendly_message(error))
        } else {
            FailureFeedback::Fields(fields)
        }
    }
}
