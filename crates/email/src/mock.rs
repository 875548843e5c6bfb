//! Mock Email Service Implementation
//!
//! Provides in-memory email capture for testing without external
//! dependencies. Tests can assert on submission notifications without a
//! live mail relay.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{EmailError, EmailMessage, EmailReceipt, EmailService};

/// Email captured by the mock service
#[derive(Debug, Clone)]
pub struct CapturedEmail {
    pub message: EmailMessage,
    pub receipt: EmailReceipt,
    pub captured_at: DateTime<Utc>,
}

impl CapturedEmail {
    /// Project ID from the submission-notification metadata, if present
    pub fn project_id(&self) -> Option<Uuid> {
        self.message
            .metadata
            .get("project_id")
            .and_then(|id| Uuid::parse_str(id).ok())
    }

    /// Whether this email is a project-submission notification
    pub fn is_submission_notification(&self) -> bool {
        self.message
            .metadata
            .get("email_type")
            .map(|t| t == "project_submission")
            .unwrap_or(false)
    }
}

/// Mock email service for testing
#[derive(Debug, Clone)]
pub struct MockEmailService {
    emails: Arc<Mutex<Vec<CapturedEmail>>>,
    email_by_recipient: Arc<Mutex<HashMap<String, Vec<CapturedEmail>>>>,
    enabled: bool,
    /// When set, every send fails — used to test that submission
    /// notifications never fail the user-facing request.
    fail_sends: bool,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self {
            emails: Arc::new(Mutex::new(Vec::new())),
            email_by_recipient: Arc::new(Mutex::new(HashMap::new())),
            enabled: true,
            fail_sends: false,
        }
    }

    /// Create a disabled mock email service (for testing)
    pub fn new_disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    /// Create a mock whose sends always fail
    pub fn new_failing() -> Self {
        Self {
            fail_sends: true,
            ..Self::new()
        }
    }

    /// Get all captured emails
    pub fn get_all_emails(&self) -> Vec<CapturedEmail> {
        self.emails.lock().unwrap().clone()
    }

    /// Get emails sent to a specific recipient
    pub fn get_emails_for_recipient(&self, email: &str) -> Vec<CapturedEmail> {
        self.email_by_recipient
            .lock()
            .unwrap()
            .get(email)
            .cloned()
            .unwrap_or_default()
    }

    /// Get the most recent submission notification for a recipient
    pub fn get_latest_submission_email(&self, email: &str) -> Option<CapturedEmail> {
        self.get_emails_for_recipient(email)
            .into_iter()
            .filter(|e| e.is_submission_notification())
            .max_by_key(|e| e.captured_at)
    }

    /// Check if a submission notification for a project was sent to a recipient
    pub fn was_submission_notified(&self, email: &str, project_id: Uuid) -> bool {
        self.get_emails_for_recipient(email)
            .iter()
            .any(|e| e.is_submission_notification() && e.project_id() == Some(project_id))
    }

    /// Get count of emails sent
    pub fn email_count(&self) -> usize {
        self.emails.lock().unwrap().len()
    }

    /// Clear all captured emails
    pub fn clear(&self) {
        self.emails.lock().unwrap().clear();
        self.email_by_recipient.lock().unwrap().clear();
    }

    /// Check if email sending is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EmailService for MockEmailService {
    async fn send_email(&self, message: EmailMessage) -> Result<EmailReceipt, EmailError> {
        if self.fail_sends {
            return Err(EmailError::AwsSes("Simulated send failure".to_string()));
        }

        if !self.enabled {
            tracing::warn!("Mock email service disabled, skipping send");
            return Ok(EmailReceipt {
                message_id: format!("disabled-{}", Uuid::new_v4()),
                sent_at: Utc::now(),
                provider: "mock-disabled".to_string(),
                metadata: message.metadata.clone(),
            });
        }

        tracing::info!("Mock email service capturing email to: {}", message.to);

        let receipt = EmailReceipt {
            message_id: format!("mock-{}", Uuid::new_v4()),
            sent_at: Utc::now(),
            provider: "mock".to_string(),
            metadata: message.metadata.clone(),
        };

        let captured = CapturedEmail {
            message: message.clone(),
            receipt: receipt.clone(),
            captured_at: Utc::now(),
        };

        self.emails.lock().unwrap().push(captured.clone());

        self.email_by_recipient
            .lock()
            .unwrap()
            .entry(message.to.clone())
            .or_default()
            .push(captured);

        Ok(receipt)
    }

    fn default_from(&self) -> String {
        "noreply@atelier.studio".to_string()
    }

    fn app_base_url(&self) -> &str {
        "https://atelier.studio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SubmissionDetails;
    use chrono::TimeZone;

    fn submission(project_id: Uuid) -> SubmissionDetails {
        SubmissionDetails {
            project_id: project_id.to_string(),
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone_number: "+1 555 0100".to_string(),
            company_name: None,
            project_title: "Compiler Landing Page".to_string(),
            project_details: "A single-page site.".to_string(),
            start_date: Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 2, 15, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_mock_captures_sent_email() {
        let mock = MockEmailService::new();
        let message = EmailMessage::new(
            "owner@example.com".to_string(),
            "noreply@atelier.studio".to_string(),
            "Hello".to_string(),
            "Body".to_string(),
        );

        let receipt = mock.send_email(message).await.unwrap();
        assert!(receipt.message_id.starts_with("mock-"));
        assert_eq!(mock.email_count(), 1);
        assert_eq!(mock.get_emails_for_recipient("owner@example.com").len(), 1);
    }

    #[tokio::test]
    async fn test_submission_notification_lookup() {
        let mock = MockEmailService::new();
        let project_id = Uuid::new_v4();

        mock.send_project_submission("owner@example.com", &submission(project_id))
            .await
            .unwrap();

        assert!(mock.was_submission_notified("owner@example.com", project_id));
        assert!(!mock.was_submission_notified("owner@example.com", Uuid::new_v4()));

        let latest = mock.get_latest_submission_email("owner@example.com").unwrap();
        assert_eq!(latest.project_id(), Some(project_id));
        assert!(latest.message.subject.contains("Compiler Landing Page"));
        assert!(latest.message.body_text.contains("Grace Hopper"));
    }

    #[tokio::test]
    async fn test_failing_mock_errors() {
        let mock = MockEmailService::new_failing();
        let result = mock
            .send_project_submission("owner@example.com", &submission(Uuid::new_v4()))
            .await;
        assert!(result.is_err());
        assert_eq!(mock.email_count(), 0);
    }

    #[tokio::test]
    async fn test_clear_resets_captures() {
        let mock = MockEmailService::new();
        mock.send_project_submission("owner@example.com", &submission(Uuid::new_v4()))
            .await
            .unwrap();
        assert_eq!(mock.email_count(), 1);

        mock.clear();
        assert_eq!(mock.email_count(), 0);
        assert!(mock.get_emails_for_recipient("owner@example.com").is_empty());
    }
}
