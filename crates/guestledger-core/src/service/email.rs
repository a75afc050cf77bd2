//! Confirmation email resend service.
//!
//! Composes the external render and transport collaborators; rendering is
//! pure, delivery is the only side effect.

use tracing::info;

use crate::attendee::Attendee;
use crate::settings::EventSettings;

/// Errors that can occur while delivering an email.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Email delivery failed: {0}")]
pub struct DeliveryError(pub String);

/// The email template render collaborator.
///
/// Pure: produces markup from settings, a template and one attendee, with
/// no side effects.
pub trait EmailRenderer {
    /// Renders the confirmation markup for one attendee.
    fn render(&self, settings: &EventSettings, template: &str, attendee: &Attendee) -> String;
}

/// The email delivery collaborator.
#[allow(async_fn_in_trait)]
pub trait EmailTransport {
    /// Delivers one message.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] when the message could not be
    /// delivered.
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), DeliveryError>;
}

/// Re-sends the confirmation email for one attendee.
///
/// Renders the configured template and hands the markup to the transport.
/// Not retried on failure; the caller surfaces the error and may retry
/// manually.
///
/// # Errors
///
/// Returns a [`DeliveryError`] when the attendee has no email address or
/// the transport fails.
pub async fn send_confirmation<R, T>(
    renderer: &R,
    transport: &T,
    settings: &EventSettings,
    attendee: &Attendee,
) -> Result<(), DeliveryError>
where
    R: EmailRenderer,
    T: EmailTransport,
{
    if attendee.email.trim().is_empty() {
        return Err(DeliveryError("No recipient address".into()));
    }

    let html = renderer.render(settings, &settings.email_body, attendee);
    transport
        .send(&attendee.email, &settings.email_subject, &html)
        .await?;

    info!("Confirmation email re-sent to {}", attendee.email);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::attendee;
    use tokio::sync::Mutex;

    struct PlainRenderer;

    impl EmailRenderer for PlainRenderer {
        fn render(&self, _: &EventSettings, template: &str, attendee: &Attendee) -> String {
            format!("<p>{}: {template}</p>", attendee.name)
        }
    }

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<(String, String, String)>>,
    }

    impl EmailTransport for RecordingTransport {
        async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), DeliveryError> {
            self.sent
                .lock()
                .await
                .push((to.into(), subject.into(), html.into()));
            Ok(())
        }
    }

    struct FailingTransport;

    impl EmailTransport for FailingTransport {
        async fn send(&self, _: &str, _: &str, _: &str) -> Result<(), DeliveryError> {
            Err(DeliveryError("mailbox unavailable".into()))
        }
    }

    #[tokio::test]
    async fn test_send_confirmation_renders_and_sends() {
        let transport = RecordingTransport::default();
        let settings = EventSettings {
            email_subject: "See you there".into(),
            email_body: "gala template".into(),
            ..EventSettings::default()
        };
        let a = attendee("a1");

        send_confirmation(&PlainRenderer, &transport, &settings, &a)
            .await
            .unwrap();

        let sent = transport.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "a1@example.com");
        assert_eq!(sent[0].1, "See you there");
        assert!(sent[0].2.contains("gala template"));
    }

    #[tokio::test]
    async fn test_delivery_failure_is_surfaced() {
        let a = attendee("a1");

        let result =
            send_confirmation(&PlainRenderer, &FailingTransport, &EventSettings::default(), &a)
                .await;

        assert_eq!(result, Err(DeliveryError("mailbox unavailable".into())));
    }

    #[tokio::test]
    async fn test_missing_recipient_is_rejected() {
        let mut a = attendee("a1");
        a.email = String::new();
        let transport = RecordingTransport::default();

        let result = send_confirmation(&PlainRenderer, &transport, &EventSettings::default(), &a)
            .await;

        assert!(result.is_err());
        assert!(transport.sent.lock().await.is_empty());
    }
}
