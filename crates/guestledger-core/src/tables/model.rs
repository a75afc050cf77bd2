//! Seating table model.

use crate::attendee::Attendee;

/// A purchaser plus their linked guests, modeling one physical seating unit.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatingTable {
    /// The purchaser heading the table.
    pub primary: Attendee,
    /// Linked guests, in registration input order.
    pub guests: Vec<Attendee>,
}

impl SeatingTable {
    /// Creates a table from its head, with no guests yet.
    #[must_use]
    pub const fn new(primary: Attendee) -> Self {
        Self {
            primary,
            guests: Vec::new(),
        }
    }

    /// Total seats at the table (head included).
    ///
    /// A head with zero guests is a valid 1-seat table.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        1 + self.guests.len()
    }

    /// Returns true if the head or any guest matches the search term
    /// (case-insensitive substring over name and email).
    ///
    /// A match anywhere surfaces the whole table.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        let hits = |a: &Attendee| {
            a.name.to_lowercase().contains(&query) || a.email.to_lowercase().contains(&query)
        };
        hits(&self.primary) || self.guests.iter().any(hits)
    }
}
