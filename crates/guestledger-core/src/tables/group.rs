//! Table reconstruction from the flat attendee list.

use std::collections::HashMap;

use tracing::debug;

use super::model::SeatingTable;
use crate::attendee::Attendee;

/// Reconstructs purchaser/guest tables from a flat attendee list.
///
/// Operates on non-test attendees regardless of the active tab. Two passes:
/// every primary attendee becomes a table head keyed by its own id, then
/// every guest whose `primary_attendee_id` resolves to a known head is
/// appended to that head's guest list in input order. A guest whose link
/// does not resolve is an orphan: silently dropped, a data-quality
/// condition rather than a fault.
///
/// A non-empty search retains only tables where the head or any guest
/// matches (name/email, case-insensitive substring). Tables are returned
/// newest head first; lexicographic comparison of the RFC 3339
/// `registered_at` strings is chronological.
#[must_use]
pub fn group_into_tables(attendees: &[Attendee], search: &str) -> Vec<SeatingTable> {
    let mut tables: Vec<SeatingTable> = Vec::new();
    let mut heads: HashMap<&str, usize> = HashMap::new();

    for attendee in attendees.iter().filter(|a| !a.is_test) {
        if attendee.is_primary {
            heads.insert(attendee.id.as_str(), tables.len());
            tables.push(SeatingTable::new(attendee.clone()));
        }
    }

    for attendee in attendees.iter().filter(|a| !a.is_test) {
        if attendee.is_primary {
            continue;
        }
        match attendee
            .primary_attendee_id
            .as_deref()
            .and_then(|id| heads.get(id))
        {
            Some(&index) => tables[index].guests.push(attendee.clone()),
            None => {
                debug!("Dropping orphan guest {} with unresolved table link", attendee.id);
            }
        }
    }

    if !search.is_empty() {
        tables.retain(|table| table.matches_search(search));
    }

    tables.sort_by(|a, b| b.primary.registered_at.cmp(&a.primary.registered_at));
    tables
}
