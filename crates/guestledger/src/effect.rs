//! Side effects requested by the console.
//!
//! The console never performs collaborator calls itself; it returns an
//! effect and the embedding application runs it, feeding the result back
//! as a completion event.

use guestledger_core::{Attendee, AttendeePatch};

/// A requested side effect.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Render and deliver the confirmation email for this attendee, then
    /// report back with [`crate::Event::ResendFinished`].
    SendConfirmation(Attendee),
    /// Apply a partial patch through the persistence collaborator, then
    /// report back with [`crate::Event::CommitFinished`].
    CommitUpdate {
        /// Target record id.
        id: String,
        /// Changed fields only.
        patch: AttendeePatch,
    },
    /// Delete a record through the persistence collaborator, then report
    /// back with [`crate::Event::DeleteFinished`].
    DeleteAttendee {
        /// Target record id.
        id: String,
    },
}
