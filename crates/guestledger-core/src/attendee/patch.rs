//! Partial attendee updates.

use serde::{Deserialize, Serialize};

use super::model::{Attendee, PaymentStatus};

/// A partial update to one attendee, as accepted by the persistence
/// collaborator.
///
/// `None` means "leave the field untouched". Nullable fields use a double
/// `Option`: `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeePatch {
    /// New attendee name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New ticket category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    /// New dietary notes; `Some(None)` clears them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_preferences: Option<Option<String>>,
    /// New payment state; `Some(None)` clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<Option<PaymentStatus>>,
    /// New check-in timestamp; `Some(None)` marks the attendee as not
    /// checked in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_in_at: Option<Option<String>>,
}

impl AttendeePatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.ticket_type.is_none()
            && self.dietary_preferences.is_none()
            && self.payment_status.is_none()
            && self.checked_in_at.is_none()
    }

    /// A patch recording a check-in at `at` (RFC 3339).
    ///
    /// Used by the check-in side channel; the record editor produces the
    /// same field through its checked-in toggle.
    #[must_use]
    pub fn check_in(at: impl Into<String>) -> Self {
        Self {
            checked_in_at: Some(Some(at.into())),
            ..Self::default()
        }
    }
}

impl Attendee {
    /// Applies a partial patch to this record.
    pub fn apply(&mut self, patch: &AttendeePatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(email) = &patch.email {
            self.email.clone_from(email);
        }
        if let Some(ticket_type) = &patch.ticket_type {
            self.ticket_type.clone_from(ticket_type);
        }
        if let Some(dietary) = &patch.dietary_preferences {
            self.dietary_preferences.clone_from(dietary);
        }
        if let Some(status) = &patch.payment_status {
            self.payment_status = *status;
        }
        if let Some(checked_in) = &patch.checked_in_at {
            self.checked_in_at.clone_from(checked_in);
        }
    }
}
