//! Staged edits to one attendee.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::attendee::{Attendee, AttendeePatch, PaymentStatus};

/// A mutable draft of one attendee's editable fields.
///
/// Staged as a value copy so the canonical record is never mutated before
/// commit; discarding the draft has no side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeDraft {
    /// Id of the attendee being edited.
    pub attendee_id: String,
    /// Edited name.
    pub name: String,
    /// Edited email address.
    pub email: String,
    /// Edited ticket category.
    pub ticket_type: String,
    /// Edited dietary notes; empty clears them.
    pub dietary_preferences: String,
    /// Edited payment state.
    pub payment_status: Option<PaymentStatus>,
    /// Checked-in toggle. The only field whose edit encodes a side
    /// computation: enabling stamps the commit time, disabling clears it.
    pub checked_in: bool,
}

impl AttendeeDraft {
    /// Stages a draft from the current record.
    #[must_use]
    pub fn stage(attendee: &Attendee) -> Self {
        Self {
            attendee_id: attendee.id.clone(),
            name: attendee.name.clone(),
            email: attendee.email.clone(),
            ticket_type: attendee.ticket_type.clone(),
            dietary_preferences: attendee.dietary_preferences.clone().unwrap_or_default(),
            payment_status: attendee.payment_status,
            checked_in: attendee.is_checked_in(),
        }
    }

    /// Returns true if the draft differs from the record it was staged
    /// from.
    #[must_use]
    pub fn is_dirty(&self, original: &Attendee) -> bool {
        self.name != original.name
            || self.email != original.email
            || self.ticket_type != original.ticket_type
            || self.dietary_preferences
                != original.dietary_preferences.clone().unwrap_or_default()
            || self.payment_status != original.payment_status
            || self.checked_in != original.is_checked_in()
    }

    /// Diffs the draft against the record into a partial patch.
    ///
    /// Only changed fields are emitted. Enabling the checked-in toggle
    /// stamps `now`; disabling it clears the stored timestamp. An
    /// unchanged draft yields an empty patch.
    #[must_use]
    pub fn to_patch(&self, original: &Attendee, now: DateTime<Utc>) -> AttendeePatch {
        let mut patch = AttendeePatch::default();

        if self.name != original.name {
            patch.name = Some(self.name.clone());
        }
        if self.email != original.email {
            patch.email = Some(self.email.clone());
        }
        if self.ticket_type != original.ticket_type {
            patch.ticket_type = Some(self.ticket_type.clone());
        }
        let original_dietary = original.dietary_preferences.clone().unwrap_or_default();
        if self.dietary_preferences != original_dietary {
            patch.dietary_preferences = Some(if self.dietary_preferences.is_empty() {
                None
            } else {
                Some(self.dietary_preferences.clone())
            });
        }
        if self.payment_status != original.payment_status {
            patch.payment_status = Some(self.payment_status);
        }
        if self.checked_in != original.is_checked_in() {
            patch.checked_in_at = Some(
                self.checked_in
                    .then(|| now.to_rfc3339_opts(SecondsFormat::Secs, true)),
            );
        }

        patch
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::test_support::attendee;

    fn commit_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_unchanged_draft_yields_empty_patch() {
        let a = attendee("a1");
        let draft = AttendeeDraft::stage(&a);

        assert!(!draft.is_dirty(&a));
        assert!(draft.to_patch(&a, commit_time()).is_empty());
    }

    #[test]
    fn test_check_in_toggle_stamps_commit_time() {
        let a = attendee("a1");
        let mut draft = AttendeeDraft::stage(&a);
        draft.checked_in = true;

        let patch = draft.to_patch(&a, commit_time());
        assert_eq!(
            patch.checked_in_at,
            Some(Some("2024-02-01T12:00:00Z".into()))
        );

        let mut committed = a.clone();
        committed.apply(&patch);
        assert!(committed.is_checked_in());
    }

    #[test]
    fn test_check_in_toggle_off_clears_timestamp() {
        let mut a = attendee("a1");
        a.checked_in_at = Some("2024-01-01T11:00:00Z".into());

        let mut draft = AttendeeDraft::stage(&a);
        draft.checked_in = false;

        let patch = draft.to_patch(&a, commit_time());
        assert_eq!(patch.checked_in_at, Some(None));
    }

    #[test]
    fn test_only_changed_fields_are_emitted() {
        let a = attendee("a1");
        let mut draft = AttendeeDraft::stage(&a);
        draft.name = "Renamed".into();

        let patch = draft.to_patch(&a, commit_time());
        assert_eq!(patch.name.as_deref(), Some("Renamed"));
        assert_eq!(patch.email, None);
        assert_eq!(patch.checked_in_at, None);
    }

    #[test]
    fn test_clearing_dietary_notes_emits_null() {
        let mut a = attendee("a1");
        a.dietary_preferences = Some("vegetarian".into());

        let mut draft = AttendeeDraft::stage(&a);
        draft.dietary_preferences.clear();

        let patch = draft.to_patch(&a, commit_time());
        assert_eq!(patch.dietary_preferences, Some(None));
    }

    #[test]
    fn test_draft_does_not_alias_the_record() {
        let a = attendee("a1");
        let mut draft = AttendeeDraft::stage(&a);
        draft.name = "Changed".into();

        // The canonical record is untouched until a patch is applied.
        assert_eq!(a.name, "Attendee a1");
    }
}
