//! Roster tabs and filtering.

use crate::attendee::{Attendee, PaymentStatus};

/// A named view filter over the attendee set.
///
/// The live tab is a superset of the donor tab: a non-test donor appears in
/// both. Membership is an independent predicate per tab, never a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterTab {
    /// All non-test attendees, donors included.
    #[default]
    Live,
    /// Test registrations only.
    Test,
    /// Non-test attendees with donated seats or tables.
    Donor,
}

impl RosterTab {
    /// Returns true if the attendee belongs to this tab.
    #[must_use]
    pub const fn contains(&self, attendee: &Attendee) -> bool {
        match self {
            Self::Live => !attendee.is_test,
            Self::Test => attendee.is_test,
            Self::Donor => !attendee.is_test && attendee.is_donor(),
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Live => "Attendees",
            Self::Test => "Test",
            Self::Donor => "Donors",
        }
    }
}

/// Check-in status predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// No status restriction.
    #[default]
    All,
    /// Only attendees with a check-in timestamp.
    CheckedIn,
    /// Only attendees not yet checked in.
    Pending,
}

impl StatusFilter {
    /// Returns true if the attendee passes this predicate.
    #[must_use]
    pub const fn matches(&self, attendee: &Attendee) -> bool {
        match self {
            Self::All => true,
            Self::CheckedIn => attendee.is_checked_in(),
            Self::Pending => !attendee.is_checked_in(),
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::All => "All statuses",
            Self::CheckedIn => "Checked in",
            Self::Pending => "Pending",
        }
    }
}

/// Payment status predicate.
///
/// A record with no recorded payment status matches only [`Self::All`];
/// absence is never treated as `free`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentFilter {
    /// No payment restriction.
    #[default]
    All,
    /// Exactly `paid`.
    Paid,
    /// Exactly `free`.
    Free,
    /// Exactly `pending`.
    Pending,
}

impl PaymentFilter {
    /// Returns true if the attendee passes this predicate.
    #[must_use]
    pub const fn matches(&self, attendee: &Attendee) -> bool {
        match self {
            Self::All => true,
            Self::Paid => matches!(attendee.payment_status, Some(PaymentStatus::Paid)),
            Self::Free => matches!(attendee.payment_status, Some(PaymentStatus::Free)),
            Self::Pending => matches!(attendee.payment_status, Some(PaymentStatus::Pending)),
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::All => "All payments",
            Self::Paid => "Paid",
            Self::Free => "Free",
            Self::Pending => "Pending",
        }
    }
}

/// Applies tab membership, search and both status predicates.
///
/// A record passes iff it matches all four (logical AND); the predicates
/// are independent, so application order never changes the result. Input
/// relative order is preserved.
#[must_use]
pub fn filter_roster<'a>(
    attendees: &'a [Attendee],
    tab: RosterTab,
    search: &str,
    status: StatusFilter,
    payment: PaymentFilter,
) -> Vec<&'a Attendee> {
    attendees
        .iter()
        .filter(|a| {
            tab.contains(a) && a.matches_search(search) && status.matches(a) && payment.matches(a)
        })
        .collect()
}

/// Per-tab badge counts over one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterCounts {
    /// Non-test attendees.
    pub live: usize,
    /// Test registrations.
    pub test: usize,
    /// Non-test donors.
    pub donor: usize,
}

/// Counts tab membership in one pass.
#[must_use]
pub fn tab_counts(attendees: &[Attendee]) -> RosterCounts {
    let mut counts = RosterCounts::default();
    for attendee in attendees {
        if attendee.is_test {
            counts.test += 1;
        } else {
            counts.live += 1;
            if attendee.is_donor() {
                counts.donor += 1;
            }
        }
    }
    counts
}
