//! Contact form submission flow.
//!
//! DESIGN
//! ======
//! `ContactForm` is the per-form state machine:
//!
//! ```text
//! idle ──submit──▶ validating ──incomplete──▶ error
//!                      │
//!                      └──ok──▶ sending ──▶ success ──(clear delay)──▶ idle
//!                                  │
//!                                  └──transport error──▶ error
//! ```
//!
//! The page is reached only through [`FormView`], the transport only through
//! [`Submitter`], and waiting only through [`Delay`]. The shipped transport
//! is [`SimulatedSubmitter`], which waits a fixed latency and succeeds; a
//! real backend replaces it without touching the state machine.
//!
//! A submit that arrives while another is sending is ignored. Each accepted
//! submission bumps a generation counter, and the delayed status clear only
//! runs if no newer submission has started since.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::cell::Cell;

use async_trait::async_trait;

use crate::consts;
use crate::error::MarqueeError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("required fields missing: {}", .0.join(", "))]
pub struct MissingFields(pub Vec<&'static str>);

impl ContactFields {
    /// Trimmed copy, or the names of the fields left blank.
    pub fn validate(&self) -> Result<Self, MissingFields> {
        let trimmed = Self {
            name: trim_field(&self.name).to_owned(),
            email: trim_field(&self.email).to_owned(),
            message: trim_field(&self.message).to_owned(),
        };
        let missing: Vec<&'static str> = [
            ("name", &trimmed.name),
            ("email", &trimmed.email),
            ("message", &trimmed.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();
        if missing.is_empty() { Ok(trimmed) } else { Err(MissingFields(missing)) }
    }
}

/// Browsers treat a byte-order mark as blank; `str::trim` does not.
fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Validating,
    Sending,
    Success,
    Error,
}

/// Text and class for the `#form-status` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub text: &'static str,
    pub class: &'static str,
}

impl StatusLine {
    pub const CLEAR: Self = Self { text: "", class: "form-status" };
    pub const REQUIRED: Self = Self { text: consts::MSG_REQUIRED, class: "form-status error" };
    pub const SENT: Self = Self { text: consts::MSG_SENT, class: "form-status success" };
    pub const FAILED: Self = Self { text: consts::MSG_FAILED, class: "form-status error" };
}

/// State of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub label: &'static str,
}

impl SubmitControl {
    pub const SENDING: Self = Self { disabled: true, label: consts::LABEL_SENDING };
    pub const READY: Self = Self { disabled: false, label: consts::LABEL_SEND };
}

/// The form as seen by the state machine.
pub trait FormView {
    fn read_fields(&self) -> ContactFields;
    fn show_status(&self, line: StatusLine);
    /// No-op when the form has no submit button.
    fn set_submit(&self, control: SubmitControl);
    fn reset_fields(&self);
}

/// Cooperative wait; the browser implementation is a timer future.
#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, ms: u32);
}

/// Delivery of a validated message.
#[async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, fields: &ContactFields) -> Result<(), MarqueeError>;
}

/// Local stand-in for a backend: waits `latency_ms`, then succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter<D> {
    delay: D,
    latency_ms: u32,
}

impl<D> SimulatedSubmitter<D> {
    pub fn new(delay: D, latency_ms: u32) -> Self {
        Self { delay, latency_ms }
    }
}

#[async_trait(?Send)]
impl<D: Delay> Submitter for SimulatedSubmitter<D> {
    async fn submit(&self, fields: &ContactFields) -> Result<(), MarqueeError> {
        log::debug!("simulating delivery of message from {}", fields.email);
        self.delay.sleep(self.latency_ms).await;
        Ok(())
    }
}

pub struct ContactForm<S, D> {
    submitter: S,
    delay: D,
    clear_after_ms: u32,
    status: Cell<FormStatus>,
    generation: Cell<u64>,
}

impl<S: Submitter, D: Delay> ContactForm<S, D> {
    pub fn new(submitter: S, delay: D, clear_after_ms: u32) -> Self {
        Self {
            submitter,
            delay,
            clear_after_ms,
            status: Cell::new(FormStatus::Idle),
            generation: Cell::new(0),
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status.get()
    }

    /// Run one submission to completion and return the status it settled in.
    ///
    /// On success the future stays pending through the clear delay.
    pub async fn submit(&self, view: &impl FormView) -> FormStatus {
        if self.status.get() == FormStatus::Sending {
            log::debug!("submit ignored: previous message still sending");
            return FormStatus::Sending;
        }

        self.status.set(FormStatus::Validating);
        let fields = match view.read_fields().validate() {
            Ok(fields) => fields,
            Err(missing) => {
                log::debug!("{missing}");
                view.show_status(StatusLine::REQUIRED);
                self.status.set(FormStatus::Error);
                return FormStatus::Error;
            }
        };

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.status.set(FormStatus::Sending);
        view.set_submit(SubmitControl::SENDING);
        view.show_status(StatusLine::CLEAR);

        if let Err(err) = self.submitter.submit(&fields).await {
            log::warn!("{}: {err}", err.error_code());
            view.show_status(StatusLine::FAILED);
            view.set_submit(SubmitControl::READY);
            self.status.set(FormStatus::Error);
            return FormStatus::Error;
        }

        view.show_status(StatusLine::SENT);
        view.reset_fields();
        view.set_submit(SubmitControl::READY);
        self.status.set(FormStatus::Success);

        self.delay.sleep(self.clear_after_ms).await;
        if self.generation.get() == generation && self.status.get() == FormStatus::Success {
            view.show_status(StatusLine::CLEAR);
            self.status.set(FormStatus::Idle);
            return FormStatus::Idle;
        }
        FormStatus::Success
    }
}
