use std::collections::BTreeMap;

use crate::foundation::error::PixelcatResult;

/// Response surfaced by a form-submission transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormResponse {
    /// Whether the endpoint accepted the submission.
    pub ok: bool,
}

/// Transport capability for posting the contact form.
///
/// The page injects an HTTP implementation; tests inject stubs. Transport
/// failures surface as errors here and are absorbed into
/// [`SubmitStatus::NetworkError`] by [`ContactForm::submit`].
pub trait FormTransport {
    /// Post the form fields to the form's action endpoint.
    fn post(&mut self, action: &str, fields: &BTreeMap<String, String>)
    -> PixelcatResult<FormResponse>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Submission lifecycle of the contact form.
pub enum SubmitStatus {
    /// Request in flight.
    Sending,
    /// Endpoint accepted the submission.
    Sent,
    /// Endpoint rejected the submission.
    Failed,
    /// Transport-level failure before any response.
    NetworkError,
}

impl SubmitStatus {
    /// Status line shown next to the form.
    pub fn message(self) -> &'static str {
        match self {
            Self::Sending => "",
            Self::Sent => "✦ Message sent! I'll get back to you soon.",
            Self::Failed => "Oops — something went wrong. Please try again.",
            Self::NetworkError => "Network error. Please try again.",
        }
    }

    /// Label of the submit button in this state.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Sending => "Sending...",
            _ => "Send Message ✦",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// The contact form: an action endpoint plus the current field values.
pub struct ContactForm {
    /// Submission endpoint.
    pub action: String,
    /// Field name to value.
    pub fields: BTreeMap<String, String>,
}

impl ContactForm {
    /// Create a form posting to `action`.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Set one field value.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Submit through the injected transport.
    ///
    /// Never propagates an error to the page: a transport failure becomes
    /// [`SubmitStatus::NetworkError`]. Fields reset only on success.
    pub fn submit(&mut self, transport: &mut dyn FormTransport) -> SubmitStatus {
        match transport.post(&self.action, &self.fields) {
            Ok(resp) if resp.ok => {
                self.fields.clear();
                SubmitStatus::Sent
            }
            Ok(_) => SubmitStatus::Failed,
            Err(_) => SubmitStatus::NetworkError,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/form.rs"]
mod tests;
