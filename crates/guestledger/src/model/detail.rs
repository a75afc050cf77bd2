//! Detail pane state for one selected attendee.

use guestledger_core::{AttendeeDraft, AttendeePatch};

/// Resend gate for the confirmation email.
///
/// A second resend request is prevented while one is outstanding; this is
/// a gate, not a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResendState {
    /// No resend outstanding; requests are accepted.
    #[default]
    Idle,
    /// A resend is outstanding; further requests are ignored.
    InFlight,
}

/// State for the attendee detail pane.
///
/// Holds at most one staged draft; opening a different attendee replaces
/// the whole detail state, discarding any prior draft.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    /// Id of the selected attendee.
    pub attendee_id: String,
    /// Staged edits, when editing.
    pub draft: Option<AttendeeDraft>,
    /// Patch sent with an outstanding commit, applied locally on success.
    pub pending_patch: Option<AttendeePatch>,
    /// Whether a commit is outstanding.
    pub is_committing: bool,
    /// Error message from the last commit attempt.
    pub commit_error: Option<String>,
    /// Whether a delete is outstanding.
    pub is_deleting: bool,
    /// Error message from the last delete attempt.
    pub delete_error: Option<String>,
    /// Resend gate.
    pub resend: ResendState,
    /// Error message from the last resend attempt.
    pub resend_error: Option<String>,
}

impl DetailState {
    /// Creates a fresh detail state for one attendee.
    #[must_use]
    pub fn new(attendee_id: impl Into<String>) -> Self {
        Self {
            attendee_id: attendee_id.into(),
            ..Self::default()
        }
    }

    /// Returns true while any side effect for this attendee is
    /// outstanding.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.is_committing || self.is_deleting || matches!(self.resend, ResendState::InFlight)
    }
}
