//! Event settings supplied by the settings collaborator.

use serde::{Deserialize, Serialize};

/// Per-event settings passed through to the email renderer.
///
/// Opaque to the console beyond addressing the confirmation email; branding
/// and pricing are consumed by the render collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSettings {
    /// Subject line for confirmation emails.
    pub email_subject: String,
    /// Confirmation email body template.
    pub email_body: String,
    /// Branding accent color.
    #[serde(default)]
    pub brand_color: String,
    /// Branding logo URL, when configured.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Footer text appended to rendered emails.
    #[serde(default)]
    pub footer_text: String,
    /// Ticket price shown in rendered emails.
    #[serde(default)]
    pub ticket_price: f64,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            email_subject: "Your registration is confirmed".to_string(),
            email_body: String::new(),
            brand_color: String::new(),
            logo_url: None,
            footer_text: String::new(),
            ticket_price: 0.0,
        }
    }
}
