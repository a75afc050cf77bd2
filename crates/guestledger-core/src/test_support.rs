//! Shared test fixtures.

use std::collections::HashMap;

use crate::attendee::Attendee;

/// A primary, non-test attendee with deterministic fields derived from
/// `id`.
pub fn attendee(id: &str) -> Attendee {
    Attendee {
        id: id.to_string(),
        name: format!("Attendee {id}"),
        email: format!("{id}@example.com"),
        is_test: false,
        is_primary: true,
        primary_attendee_id: None,
        form_id: "form-1".to_string(),
        form_title: "Gala".to_string(),
        ticket_type: "standard".to_string(),
        registered_at: "2024-01-01T10:00:00Z".to_string(),
        checked_in_at: None,
        payment_status: None,
        invoice_id: None,
        transaction_id: None,
        payment_amount: None,
        donated_seats: 0,
        donated_tables: 0,
        donation_type: None,
        dietary_preferences: None,
        qr_payload: format!("qr-{id}"),
        answers: HashMap::new(),
    }
}
