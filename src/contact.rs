use gloo_net::http::Request;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::config;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please write a message")]
    EmptyMessage,
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Message could not be delivered (status {0})")]
    Rejected(u16),
}

/// Syntactic check only, nothing is resolved.
pub fn is_plausible_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactMessage {
    pub sender_name: String,
    pub sender_email: String,
    pub body: String,
}

impl ContactMessage {
    pub fn new(sender_name: &str, sender_email: &str, body: &str) -> Self {
        Self {
            sender_name: sender_name.trim().to_string(),
            sender_email: sender_email.trim().to_string(),
            body: body.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.sender_name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if !is_plausible_email(&self.sender_email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.body.trim().is_empty() {
            return Err(ContactError::EmptyMessage);
        }
        Ok(())
    }
}

#[derive(Serialize, Debug)]
pub struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    reply_to: &'a str,
    message: &'a str,
}

/// Body of the email relay's send endpoint.
#[derive(Serialize, Debug)]
pub struct RelayRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

impl<'a> RelayRequest<'a> {
    pub fn new(message: &'a ContactMessage) -> Self {
        Self {
            service_id: config::relay_service_id(),
            template_id: config::relay_template_id(),
            user_id: config::relay_public_key(),
            template_params: TemplateParams {
                from_name: &message.sender_name,
                from_email: &message.sender_email,
                reply_to: &message.sender_email,
                message: &message.body,
            },
        }
    }
}

/// Validates and hands the message to the relay. Not retried.
pub async fn send_message(message: &ContactMessage) -> Result<(), ContactError> {
    message.validate()?;

    let response = Request::post(config::get_relay_url())
        .json(&RelayRequest::new(message))
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    if response.ok() {
        info!("contact message from {} delivered", message.sender_email);
        Ok(())
    } else {
        Err(ContactError::Rejected(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plausible_emails() {
        assert!(is_plausible_email("someone@example.com"));
        assert!(is_plausible_email("  first.last+tag@mail.example.org "));
        assert!(!is_plausible_email("someone@example"));
        assert!(!is_plausible_email("someone.example.com"));
        assert!(!is_plausible_email("some one@example.com"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email(""));
    }

    #[test]
    fn all_fields_required() {
        assert_eq!(ContactMessage::new(" ", "a@b.co", "hi").validate(), Err(ContactError::MissingName));
        assert_eq!(ContactMessage::new("Ada", "a@b", "hi").validate(), Err(ContactError::InvalidEmail));
        assert_eq!(ContactMessage::new("Ada", "a@b.co", "\n  ").validate(), Err(ContactError::EmptyMessage));
        assert_eq!(ContactMessage::new("Ada", "a@b.co", "hi").validate(), Ok(()));
    }

    #[test]
    fn new_trims_sender_fields_but_not_body() {
        let message = ContactMessage::new("  Ada ", " a@b.co ", "  indented\n");
        assert_eq!(message.sender_name, "Ada");
        assert_eq!(message.sender_email, "a@b.co");
        assert_eq!(message.body, "  indented\n");
    }

    #[test]
    fn relay_payload_shape() {
        let message = ContactMessage::new("Ada", "ada@example.com", "Let's build something");
        let value = serde_json::to_value(RelayRequest::new(&message)).unwrap();
        assert_eq!(
            value["template_params"],
            json!({
                "from_name": "Ada",
                "from_email": "ada@example.com",
                "reply_to": "ada@example.com",
                "message": "Let's build something",
            })
        );
        assert_eq!(value["service_id"], json!(config::relay_service_id()));
        assert_eq!(value["template_id"], json!(config::relay_template_id()));
        assert!(value.get("user_id").is_some());
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(ContactError::InvalidEmail.to_string(), "Please enter a valid email address");
        assert_eq!(
            ContactError::Rejected(400).to_string(),
            "Message could not be delivered (status 400)"
        );
    }
}
