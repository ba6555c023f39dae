use regex_lite::Regex;
use serde::Serialize;

use crate::app::error::{AppError, Result};

/// One character before and after the `@`, a dot in the host part, no
/// whitespace anywhere. Deliberately loose; the API does its own checks.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// The JSON body POSTed to the contact endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field validation results, surfaced inline next to each field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Check the form before submission. A failed check never touches the
/// submission state machine; the caller simply shows the errors and
/// leaves the fields as they are.
pub fn validate(msg: &ContactMessage) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if msg.name.trim().is_empty() {
        errors.name = Some("Please enter your name");
    }

    let email = msg.email.trim();
    if email.is_empty() {
        errors.email = Some("Please enter your email address");
    } else if !is_valid_email(email) {
        errors.email = Some("Please enter a valid email address");
    }

    if msg.message.trim().is_empty() {
        errors.message = Some("Please enter a message");
    }

    errors
}

fn is_valid_email(email: &str) -> bool {
    Regex::new(EMAIL_PATTERN)
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

/// Submission state machine. Exactly one submission may be in flight:
/// the submit control stays disabled while `Submitting`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl SubmissionState {
    /// Whether a new submission may start from this state.
    pub fn can_submit(&self) -> bool {
        !matches!(self, Self::Submitting)
    }

    /// Terminal state for a finished request. Success clears the form;
    /// any failure keeps the field values so the visitor can resubmit.
    pub fn finish(result: std::result::Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(reason) => Self::Error(reason),
        }
    }
}

/// POST the message to `{api_base}/api/contact`. Blocking; runs on a
/// worker thread with the result reported back over the app channel.
/// Any 2xx is success, everything else is a generic submission error.
pub fn submit(api_base: &str, msg: &ContactMessage) -> Result<()> {
    let url = format!("{}/api/contact", api_base.trim_end_matches('/'));

    let response = minreq::post(url)
        .with_timeout(10)
        .with_json(msg)?
        .send()?;

    if (200..300).contains(&response.status_code) {
        Ok(())
    } else {
        Err(AppError::Contact(format!(
            "server returned status {}",
            response.status_code
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Angel".to_string(),
            email: "angel@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_all_empty_yields_three_errors() {
        let errors = validate(&ContactMessage::default());
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.message.is_some());
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let msg = ContactMessage {
            name: "   ".to_string(),
            email: "\t".to_string(),
            message: "\n".to_string(),
        };
        let errors = validate(&msg);
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.message.is_some());
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn test_bad_email_flagged() {
        for bad in ["plainaddress", "no@tld", "two@@example.com", "spa ce@example.com"] {
            let msg = ContactMessage {
                email: bad.to_string(),
                ..filled()
            };
            let errors = validate(&msg);
            assert!(errors.email.is_some(), "accepted bad email {:?}", bad);
            assert!(errors.name.is_none());
            assert!(errors.message.is_none());
        }
    }

    #[test]
    fn test_good_emails_accepted() {
        for good in ["a@b.co", "first.last@sub.example.com", "x+tag@example.org"] {
            let msg = ContactMessage {
                email: good.to_string(),
                ..filled()
            };
            assert!(validate(&msg).is_empty(), "rejected good email {:?}", good);
        }
    }

    #[test]
    fn test_submission_state_machine() {
        let state = SubmissionState::default();
        assert_eq!(state, SubmissionState::Idle);
        assert!(state.can_submit());

        assert!(!SubmissionState::Submitting.can_submit());
        assert!(SubmissionState::Success.can_submit());
        assert!(SubmissionState::Error("x".to_string()).can_submit());
    }

    #[test]
    fn test_finish_maps_results_to_terminal_states() {
        assert_eq!(SubmissionState::finish(Ok(())), SubmissionState::Success);
        assert_eq!(
            SubmissionState::finish(Err("server returned status 500".to_string())),
            SubmissionState::Error("server returned status 500".to_string())
        );
    }

    #[test]
    fn test_message_serializes_to_expected_json_keys() {
        let json = serde_json::to_string(&filled()).unwrap();
        assert!(json.contains("\"name\""));
        assert!(json.contains("\"email\""));
        assert!(json.contains("\"message\""));
    }
}
