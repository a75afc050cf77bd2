//! Attendee data models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Payment state of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// No payment was required.
    Free,
    /// Payment completed.
    Paid,
    /// Payment initiated but not confirmed.
    Pending,
}

impl PaymentStatus {
    /// Parse from the persistence string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "free" => Some(Self::Free),
            "paid" => Some(Self::Paid),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }

    /// Convert to the persistence string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Paid => "paid",
            Self::Pending => "pending",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Paid => "Paid",
            Self::Pending => "Pending",
        }
    }
}

/// What a donation purchased: loose seats or whole tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationType {
    /// Individual donated seats.
    Seat,
    /// Whole donated tables.
    Table,
}

impl DonationType {
    /// Parse from the persistence string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "seat" => Some(Self::Seat),
            "table" => Some(Self::Table),
            _ => None,
        }
    }

    /// Convert to the persistence string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Seat => "seat",
            Self::Table => "table",
        }
    }
}

/// Primary category of a record.
///
/// `Donor` and `Live` are not disjoint in the underlying data: a live
/// attendee can also be a donor. This is only the *primary* label; tab
/// membership is decided by the independent predicates on [`Attendee`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendeeClass {
    /// Test record, excluded from all non-test views.
    Test,
    /// Non-test record with donated seats or tables.
    Donor,
    /// Regular non-test registration.
    Live,
}

impl AttendeeClass {
    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Test => "Test",
            Self::Donor => "Donor",
            Self::Live => "Live",
        }
    }
}

const fn default_true() -> bool {
    true
}

/// A single registration record.
///
/// Owned by the persistence collaborator; the console treats the attendee
/// list as a read-mostly snapshot. Field names follow the collaborator's
/// camelCase JSON payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    /// Unique identifier.
    pub id: String,
    /// Attendee name.
    pub name: String,
    /// Attendee email address.
    pub email: String,
    /// Test records are excluded from all non-test views.
    #[serde(default)]
    pub is_test: bool,
    /// `false` marks a guest linked to a purchaser. Absent means primary.
    #[serde(default = "default_true")]
    pub is_primary: bool,
    /// The purchaser's id; present only for guests.
    #[serde(default)]
    pub primary_attendee_id: Option<String>,
    /// Originating form/event id.
    pub form_id: String,
    /// Originating form/event title.
    pub form_title: String,
    /// Ticket category.
    #[serde(default)]
    pub ticket_type: String,
    /// Registration timestamp (RFC 3339), immutable.
    pub registered_at: String,
    /// Check-in timestamp (RFC 3339); `None` = not checked in.
    #[serde(default)]
    pub checked_in_at: Option<String>,
    /// Payment state, when known.
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
    /// Invoice reference, when a payment produced one.
    #[serde(default)]
    pub invoice_id: Option<String>,
    /// Payment processor transaction reference.
    #[serde(default)]
    pub transaction_id: Option<String>,
    /// Amount paid, when known.
    #[serde(default)]
    pub payment_amount: Option<f64>,
    /// Number of donated seats.
    #[serde(default)]
    pub donated_seats: u32,
    /// Number of donated tables.
    #[serde(default)]
    pub donated_tables: u32,
    /// What the donation purchased; meaningful only when counts are > 0.
    #[serde(default)]
    pub donation_type: Option<DonationType>,
    /// Free-text dietary notes.
    #[serde(default)]
    pub dietary_preferences: Option<String>,
    /// Opaque payload used for check-in identification.
    #[serde(default)]
    pub qr_payload: String,
    /// Custom form answers, keyed by question id. Values are scalars or
    /// ordered sequences of scalars; opaque to the console.
    #[serde(default)]
    pub answers: HashMap<String, serde_json::Value>,
}

impl Attendee {
    /// Returns true if this record donated seats or tables.
    #[must_use]
    pub const fn is_donor(&self) -> bool {
        self.donated_seats > 0 || self.donated_tables > 0
    }

    /// Returns true if this record is a guest linked to a purchaser.
    #[must_use]
    pub const fn is_guest(&self) -> bool {
        !self.is_primary
    }

    /// Returns true if the attendee has been checked in.
    #[must_use]
    pub const fn is_checked_in(&self) -> bool {
        self.checked_in_at.is_some()
    }

    /// Assigns the primary category.
    ///
    /// Test wins over everything; a donor label never hides a test record.
    #[must_use]
    pub const fn classify(&self) -> AttendeeClass {
        if self.is_test {
            AttendeeClass::Test
        } else if self.is_donor() {
            AttendeeClass::Donor
        } else {
            AttendeeClass::Live
        }
    }

    /// Case-insensitive substring match over name, email and id.
    ///
    /// An empty query matches every record.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
            || self.id.to_lowercase().contains(&query)
    }

    /// Invite link a purchaser shares so their guests can register.
    ///
    /// Returns `None` for guests; the link always references the
    /// purchaser's own id.
    #[must_use]
    pub fn guest_invite_link(&self, origin: &str) -> Option<String> {
        if self.is_primary {
            Some(format!(
                "{origin}/register/{}?guestRef={}",
                self.form_id, self.id
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::attendee;

    #[test]
    fn test_classify_test_wins_over_donation() {
        let mut a = attendee("a1");
        a.is_test = true;
        a.donated_tables = 1;
        a.donation_type = Some(DonationType::Table);

        assert_eq!(a.classify(), AttendeeClass::Test);
    }

    #[test]
    fn test_classify_donor_and_live() {
        let mut donor = attendee("a1");
        donor.donated_seats = 2;
        donor.donation_type = Some(DonationType::Seat);
        assert_eq!(donor.classify(), AttendeeClass::Donor);

        let live = attendee("a2");
        assert_eq!(live.classify(), AttendeeClass::Live);
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let mut a = attendee("reg-42");
        a.name = "Ada Lovelace".into();
        a.email = "ada@example.com".into();

        assert!(a.matches_search("ADA"));
        assert!(a.matches_search("lovelace"));
        assert!(a.matches_search("REG-42"));
        assert!(a.matches_search(""));
        assert!(!a.matches_search("babbage"));
    }

    #[test]
    fn test_guest_invite_link() {
        let a = attendee("p1");
        assert_eq!(
            a.guest_invite_link("https://events.example.com"),
            Some("https://events.example.com/register/form-1?guestRef=p1".into())
        );

        let mut guest = attendee("g1");
        guest.is_primary = false;
        guest.primary_attendee_id = Some("p1".into());
        assert_eq!(guest.guest_invite_link("https://events.example.com"), None);
    }

    #[test]
    fn test_deserialize_defaults() {
        // isPrimary absent defaults to true, counts default to zero.
        let json = r#"{
            "id": "a1",
            "name": "Ada",
            "email": "ada@example.com",
            "formId": "form-1",
            "formTitle": "Gala",
            "registeredAt": "2024-01-01T10:00:00Z"
        }"#;
        let a: Attendee = serde_json::from_str(json).unwrap();

        assert!(a.is_primary);
        assert!(!a.is_test);
        assert_eq!(a.donated_seats, 0);
        assert_eq!(a.payment_status, None);
        assert_eq!(a.classify(), AttendeeClass::Live);
    }

    #[test]
    fn test_payment_status_roundtrip() {
        for status in [PaymentStatus::Free, PaymentStatus::Paid, PaymentStatus::Pending] {
            assert_eq!(PaymentStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(PaymentStatus::parse("refunded"), None);
    }
}
