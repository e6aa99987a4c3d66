//! Newsletter and contact form handling.
//!
//! The gateway validates user input, makes exactly one outbound call per
//! valid submission, and normalizes every outcome into a [`FormResult`]
//! the UI can show directly. Provider and configuration failures are
//! logged with full detail but surface only as the site's generic
//! "try again later" copy; nothing provider-internal reaches the user.

use crate::error::SiteError;
use indexmap::IndexMap;
use log::{debug, error};

/// Minimum lengths for contact form fields, in characters.
pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_SUBJECT_CHARS: usize = 5;
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Lifecycle of the most recent submission.
///
/// `Idle -> Validating -> (Invalid | Submitting) -> (Succeeded | Failed)`.
/// There are no retries; a failed submission goes back through the whole
/// chain only when the user acts again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

/// Uniform outcome of a form submission. Created fresh per attempt.
#[derive(Debug, Clone)]
pub struct FormResult {
    pub success: bool,
    /// Human-readable outcome; on validation failure, the first failing
    /// field's message in field order.
    pub message: String,
    /// Per-field validation messages, iterating in field order.
    /// `None` unless validation failed.
    pub errors: Option<IndexMap<String, Vec<String>>>,
}

impl FormResult {
    fn succeeded(message: &str) -> Self {
        FormResult {
            success: true,
            message: message.to_string(),
            errors: None,
        }
    }

    fn failed(message: &str) -> Self {
        FormResult {
            success: false,
            message: message.to_string(),
            errors: None,
        }
    }

    fn invalid(message: String, errors: IndexMap<String, Vec<String>>) -> Self {
        FormResult {
            success: false,
            message,
            errors: Some(errors),
        }
    }
}

/// Capability boundary to the external mail/CRM service. The production
/// implementation is [`crate::brevo::BrevoClient`]; tests substitute a
/// recording fake. Destination and sender identity are fixed at provider
/// construction, so the gateway only supplies per-submission data.
pub trait MailProvider {
    /// Add a contact to the mailing list with the given id.
    fn add_contact(&self, email: &str, list_id: u32) -> Result<(), SiteError>;

    /// Send one transactional email to the configured recipient.
    fn send_email(&self, subject: &str, html_body: &str) -> Result<(), SiteError>;
}

/// Syntactic email check: one `@` with a non-empty local part and a
/// domain containing an interior dot, no whitespace. Deliverability is
/// the provider's problem.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    // Need at least "x.y" on the domain side.
    domain.contains('.') && domain.len() >= 3
}

/// [`is_valid_email`] as a `Result`, for callers that propagate errors
/// instead of building a `FormResult`.
pub fn validate_email(email: &str) -> Result<(), SiteError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(SiteError::Validation {
            field: "email",
            message: "Invalid email address.".to_string(),
        })
    }
}

/// Validates user input and forwards it to the mail provider.
pub struct FormGateway<P: MailProvider> {
    provider: P,
    newsletter_list_id: u32,
    state: SubmissionState,
}

impl<P: MailProvider> FormGateway<P> {
    pub fn new(provider: P, newsletter_list_id: u32) -> Self {
        FormGateway {
            provider,
            newsletter_list_id,
            state: SubmissionState::Idle,
        }
    }

    /// State reached by the most recent submission.
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Subscribe an address to the newsletter list.
    ///
    /// Exactly one provider call on valid input, zero otherwise.
    pub fn subscribe(&mut self, email: &str) -> FormResult {
        self.state = SubmissionState::Validating;
        if let Err(err) = validate_email(email) {
            self.state = SubmissionState::Invalid;
            // Any rejection stops here; nothing reaches the provider.
            let message = match err {
                SiteError::Validation { message, .. } => message,
                other => other.to_string(),
            };
            let mut errors = IndexMap::new();
            errors.insert("email".to_string(), vec![message.clone()]);
            return FormResult::invalid(message, errors);
        }

        self.state = SubmissionState::Submitting;
        match self.provider.add_contact(email, self.newsletter_list_id) {
            Ok(()) => {
                debug!("Contact added to newsletter list: {}", email);
                self.state = SubmissionState::Succeeded;
                FormResult::succeeded("Successfully subscribed to the newsletter!")
            }
            Err(SiteError::Configuration(detail)) => {
                error!("Newsletter subscription unavailable: {}", detail);
                self.state = SubmissionState::Failed;
                FormResult::failed("Subscription service is currently unavailable.")
            }
            Err(err) => {
                error!("Newsletter subscription failed: {}", err);
                self.state = SubmissionState::Failed;
                FormResult::failed("Failed to subscribe. Please try again later.")
            }
        }
    }

    /// Validate and forward a contact form message.
    ///
    /// Fields are checked in order (name, email, subject, message); the
    /// result's `message` is the first violation and `errors` carries the
    /// complete per-field map.
    pub fn submit_contact(
        &mut self,
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> FormResult {
        self.state = SubmissionState::Validating;
        let errors = validate_contact(name, email, subject, message);
        if !errors.is_empty() {
            self.state = SubmissionState::Invalid;
            let first = errors
                .values()
                .next()
                .and_then(|msgs| msgs.first())
                .cloned()
                .unwrap_or_else(|| "Invalid form data.".to_string());
            return FormResult::invalid(first, errors);
        }

        self.state = SubmissionState::Submitting;
        let email_subject = format!("Contact Form: {}", subject);
        let body = contact_email_body(name, email, subject, message);
        match self.provider.send_email(&email_subject, &body) {
            Ok(()) => {
                debug!("Contact form email sent");
                self.state = SubmissionState::Succeeded;
                FormResult::succeeded("Your message has been sent successfully!")
            }
            Err(SiteError::Configuration(detail)) => {
                error!("Contact form unavailable: {}", detail);
                self.state = SubmissionState::Failed;
                FormResult::failed("Message service is currently unavailable.")
            }
            Err(err) => {
                error!("Contact form send failed: {}", err);
                self.state = SubmissionState::Failed;
                FormResult::failed("Failed to send your message. Please try again later.")
            }
        }
    }
}

/// Field checks in declared order. Lengths are in characters, not bytes.
fn validate_contact(
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> IndexMap<String, Vec<String>> {
    let mut errors: IndexMap<String, Vec<String>> = IndexMap::new();
    if name.chars().count() < MIN_NAME_CHARS {
        errors.insert(
            "name".to_string(),
            vec![format!("Name must be at least {} characters.", MIN_NAME_CHARS)],
        );
    }
    if !is_valid_email(email) {
        errors.insert(
            "email".to_string(),
            vec!["Invalid email address.".to_string()],
        );
    }
    if subject.chars().count() < MIN_SUBJECT_CHARS {
        errors.insert(
            "subject".to_string(),
            vec![format!(
                "Subject must be at least {} characters.",
                MIN_SUBJECT_CHARS
            )],
        );
    }
    if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(
            "message".to_string(),
            vec![format!(
                "Message must be at least {} characters.",
                MIN_MESSAGE_CHARS
            )],
        );
    }
    errors
}

/// HTML body for the transactional contact email. User text is escaped;
/// newlines in the message render as `<br>`.
fn contact_email_body(name: &str, email: &str, subject: &str, message: &str) -> String {
    format!(
        "<html>\n  <body>\n    <h1>New Contact Form Submission</h1>\n    \
         <p><strong>Name:</strong> {}</p>\n    \
         <p><strong>Email:</strong> {}</p>\n    \
         <p><strong>Subject:</strong> {}</p>\n    \
         <p><strong>Message:</strong></p>\n    <p>{}</p>\n  </body>\n</html>",
        escape_html(name),
        escape_html(email),
        escape_html(subject),
        escape_html(message).replace('\n', "<br>"),
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
