use crate::core::validate::{check_field, validate_inquiry, Field};
use crate::domain::model::{FieldError, InquiryReceipt, ServiceCategory};
use crate::domain::ports::InquiryTransport;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

pub const SUCCESS_NOTICE: &str = "Thank you for your message. We'll get back to you soon!";
pub const FAILURE_NOTICE: &str = "There was an error submitting the form. Please try again.";

/// How long a notice stays fully visible, and how long the fade-out runs.
pub const NOTICE_DISPLAY: Duration = Duration::from_millis(5000);
pub const NOTICE_FADE: Duration = Duration::from_millis(300);

/// Live indicator state for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    Empty,
    Valid,
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    Shown,
    Fading,
}

/// A transient banner posted after a submission attempt. Visibility is a
/// pure function of the probe instant, so callers poll instead of sleeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    posted_at: Instant,
}

impl Notice {
    fn new(kind: NoticeKind, message: &str, posted_at: Instant) -> Self {
        Self {
            kind,
            message: message.to_string(),
            posted_at,
        }
    }

    /// `Shown` for the display window, `Fading` for the fade-out tail,
    /// `None` once the notice is gone.
    pub fn phase_at(&self, probe: Instant) -> Option<NoticePhase> {
        let elapsed = probe.saturating_duration_since(self.posted_at);
        if elapsed < NOTICE_DISPLAY {
            Some(NoticePhase::Shown)
        } else if elapsed < NOTICE_DISPLAY + NOTICE_FADE {
            Some(NoticePhase::Fading)
        } else {
            None
        }
    }
}

/// Result of one `submit()` call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The server acknowledged the inquiry.
    Accepted(InquiryReceipt),
    /// Local validation failed; nothing was sent.
    Invalid(Vec<FieldError>),
    /// The transport or the server failed; field values are preserved.
    Failed(String),
    /// A submission is already in flight.
    Blocked,
}

struct FormState {
    values: HashMap<Field, String>,
    submit_errors: HashMap<Field, String>,
    submitting: bool,
    notice: Option<Notice>,
}

impl FormState {
    fn new(default_category: Option<ServiceCategory>) -> Self {
        let mut state = Self {
            values: HashMap::new(),
            submit_errors: HashMap::new(),
            submitting: false,
            notice: None,
        };
        state.apply_defaults(default_category);
        state
    }

    fn apply_defaults(&mut self, default_category: Option<ServiceCategory>) {
        if let Some(category) = default_category {
            self.values
                .insert(Field::ServiceCategory, category.slug().to_string());
        }
    }

    fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Empty fields are treated as not provided.
    fn candidate(&self) -> Value {
        let mut obj = Map::new();
        for field in Field::ALL {
            let value = self.value(field);
            if !value.is_empty() {
                obj.insert(field.wire_name().to_string(), Value::String(value.to_string()));
            }
        }
        Value::Object(obj)
    }

    fn status(&self, field: Field) -> FieldStatus {
        if let Some(message) = self.submit_errors.get(&field) {
            return FieldStatus::Invalid(message.clone());
        }
        let value = self.value(field);
        if value.is_empty() {
            return FieldStatus::Empty;
        }
        match check_field(field, value) {
            None => FieldStatus::Valid,
            Some(message) => FieldStatus::Invalid(message),
        }
    }

    fn remember_errors(&mut self, errors: &[FieldError]) {
        self.submit_errors.clear();
        for error in errors {
            if let Some(field) = Field::ALL
                .into_iter()
                .find(|f| f.wire_name() == error.field)
            {
                self.submit_errors.insert(field, error.message.clone());
            }
        }
    }

    fn reset(&mut self, default_category: Option<ServiceCategory>) {
        self.values.clear();
        self.submit_errors.clear();
        self.apply_defaults(default_category);
    }
}

/// Drives one contact form: per-field live validation, the submit state
/// machine (idle, submitting, success or failure notice), and the
/// double-submit guard. Generic over the transport port.
pub struct FormController<T: InquiryTransport> {
    transport: T,
    default_category: Option<ServiceCategory>,
    state: Mutex<FormState>,
}

impl<T: InquiryTransport> FormController<T> {
    /// `default_category` pre-selects the service field without marking it
    /// user-edited; it is restored again after a successful submission.
    pub fn new(transport: T, default_category: Option<ServiceCategory>) -> Self {
        Self {
            transport,
            default_category,
            state: Mutex::new(FormState::new(default_category)),
        }
    }

    /// Updates a field and clears any stale submit error recorded for it.
    pub async fn set_field(&self, field: Field, value: &str) {
        let mut state = self.state.lock().await;
        state.submit_errors.remove(&field);
        if value.is_empty() {
            state.values.remove(&field);
        } else {
            state.values.insert(field, value.to_string());
        }
    }

    /// On-blur check: re-evaluates the field and returns its indicator state.
    pub async fn blur_field(&self, field: Field) -> FieldStatus {
        self.state.lock().await.status(field)
    }

    pub async fn field_status(&self, field: Field) -> FieldStatus {
        self.state.lock().await.status(field)
    }

    pub async fn field_value(&self, field: Field) -> String {
        self.state.lock().await.value(field).to_string()
    }

    pub async fn is_submitting(&self) -> bool {
        self.state.lock().await.submitting
    }

    pub async fn notice(&self) -> Option<Notice> {
        self.state.lock().await.notice.clone()
    }

    /// Runs one submission attempt.
    ///
    /// Re-validates the whole candidate first; an invalid form never reaches
    /// the transport. While a previous attempt is in flight, further calls
    /// return `Blocked` without touching the transport, so a rapid
    /// double-submit performs exactly one network call.
    pub async fn submit(&self) -> SubmitOutcome {
        let inquiry = {
            let mut state = self.state.lock().await;
            if state.submitting {
                return SubmitOutcome::Blocked;
            }
            match validate_inquiry(&state.candidate()) {
                Err(errors) => {
                    state.remember_errors(&errors);
                    tracing::debug!(violations = errors.len(), "submission rejected locally");
                    return SubmitOutcome::Invalid(errors);
                }
                Ok(inquiry) => {
                    state.submitting = true;
                    inquiry
                }
            }
        };

        // Lock released while the request is in flight; concurrent submits
        // see `submitting` and return Blocked.
        let result = self.transport.submit(&inquiry).await;

        let mut state = self.state.lock().await;
        state.submitting = false;
        match result {
            Ok(receipt) => {
                state.reset(self.default_category);
                state.notice = Some(Notice::new(
                    NoticeKind::Success,
                    SUCCESS_NOTICE,
                    Instant::now(),
                ));
                tracing::info!(inquiry_id = %receipt.inquiry_id, "inquiry accepted");
                SubmitOutcome::Accepted(receipt)
            }
            Err(err) => {
                state.notice = Some(Notice::new(
                    NoticeKind::Failure,
                    FAILURE_NOTICE,
                    Instant::now(),
                ));
                tracing::warn!(error = %err, "inquiry submission failed");
                SubmitOutcome::Failed(err.to_string())
            }
        }
    }
}
