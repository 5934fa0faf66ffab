use async_trait::async_trait;
use serde::Serialize;
use strum::VariantArray;

use crate::{ContactForm, Field, FieldState, GENERIC_FAILURE, SubmissionResponse};

pub const SUCCESS_MESSAGE: &str = "Thanks for reaching out! I'll get back to you soon.";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, SubmissionState::Succeeded)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Succeeded | SubmissionState::Failed(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Issues one request carrying the form to the submission handler.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    async fn send(&self, form: &ContactForm) -> anyhow::Result<SubmissionResponse>;
}

/// Sequence number of a submission. Only the latest one may settle the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug)]
pub struct Submission {
    ticket: Ticket,
    form: ContactForm,
}

impl Submission {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: &'static str,
    pub value: String,
    pub touched: bool,
    /// Empty until the field has been touched.
    pub errors: Vec<String>,
}

impl FieldView {
    pub fn name(&self) -> &str {
        self.field.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

/// Everything the presentation layer needs to draw the form.
#[derive(Clone, Debug, Serialize)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub state: SubmissionState,
    pub submit_disabled: bool,
}

impl FormView {
    pub fn success_message(&self) -> Option<&str> {
        self.state.is_succeeded().then_some(SUCCESS_MESSAGE)
    }
}

/// Client-side owner of the contact form.
#[derive(Clone, Debug)]
pub struct FormController {
    fields: [FieldState; 4],
    state: SubmissionState,
    issued: u64,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self::from_form(ContactForm::default())
    }

    /// Untouched form holding the given values, errors already computed.
    pub fn from_form(form: ContactForm) -> Self {
        let mut errors = form.errors();
        let mut fields: [FieldState; 4] = Default::default();

        for field in Field::VARIANTS {
            let i = field.index();
            fields[i] = FieldState {
                value: form.value(*field).to_owned(),
                touched: false,
                errors: std::mem::take(&mut errors[i]),
            };
        }

        Self {
            fields,
            state: SubmissionState::Idle,
            issued: 0,
        }
    }

    pub fn field(&self, field: Field) -> &FieldState {
        &self.fields[field.index()]
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|field| field.errors.is_empty())
    }

    pub fn form(&self) -> ContactForm {
        let mut form = ContactForm::default();
        for field in Field::VARIANTS {
            form.set_value(*field, self.field(*field).value.to_owned());
        }
        form
    }

    pub fn set_field_value(&mut self, field: Field, value: impl Into<String>) {
        let state = &mut self.fields[field.index()];
        state.value = value.into();
        state.errors = validate_field(field, &state.value);
    }

    pub fn mark_touched(&mut self, field: Field) {
        self.fields[field.index()].touched = true;
    }

    pub fn touch_all(&mut self) {
        for field in self.fields.iter_mut() {
            field.touched = true;
        }
    }

    /// Gate a submission attempt.
    ///
    /// Returns `None` and reveals every error when a field is invalid; the
    /// submission state is left as it was. Otherwise the form moves to
    /// `Submitting` and the returned submission carries the values to send.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        for field in Field::VARIANTS {
            let state = &mut self.fields[field.index()];
            state.errors = validate_field(*field, &state.value);
        }

        if !self.is_valid() {
            self.touch_all();
            tracing::debug!("Contact submission blocked by invalid fields");
            return None;
        }

        self.issued += 1;
        self.state = SubmissionState::Submitting;

        Some(Submission {
            ticket: Ticket(self.issued),
            form: self.form(),
        })
    }

    /// Settle the submission identified by `ticket`.
    ///
    /// Outcomes of anything but the latest in-flight submission are dropped;
    /// returns whether the outcome was applied.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: anyhow::Result<SubmissionResponse>,
    ) -> bool {
        if ticket != Ticket(self.issued) || !self.state.is_submitting() {
            tracing::debug!(ticket = ticket.0, latest = self.issued, "Dropping stale response");
            return false;
        }

        self.state = match outcome {
            Ok(response) if response.success => {
                self.fields = Self::new().fields;
                SubmissionState::Succeeded
            }
            Ok(response) => SubmissionState::Failed(
                response
                    .error
                    .filter(|error| !error.is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE.to_owned()),
            ),
            Err(err) => {
                tracing::warn!(error = %err, "Contact submission request failed");
                SubmissionState::Failed(GENERIC_FAILURE.to_owned())
            }
        };

        true
    }

    pub async fn submit<T: SubmitTransport + ?Sized>(&mut self, transport: &T) -> &SubmissionState {
        if let Some(submission) = self.begin_submit() {
            let outcome = transport.send(submission.form()).await;
            self.complete(submission.ticket(), outcome);
        }

        &self.state
    }

    pub fn view(&self) -> FormView {
        let fields = Field::VARIANTS
            .iter()
            .map(|field| {
                let state = self.field(*field);
                FieldView {
                    field: *field,
                    label: field.label(),
                    placeholder: field.placeholder(),
                    input_type: field.input_type(),
                    value: state.value.to_owned(),
                    touched: state.touched,
                    errors: if state.touched {
                        state.errors.to_owned()
                    } else {
                        Vec::new()
                    },
                }
            })
            .collect();

        FormView {
            fields,
            state: self.state.clone(),
            submit_disabled: self.state.is_submitting(),
        }
    }
}

fn validate_field(field: Field, value: &str) -> Vec<String> {
    let mut form = ContactForm::default();
    form.set_value(field, value);
    form.field_errors(field)
}
