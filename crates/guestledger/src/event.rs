//! Event types for console state changes.
//!
//! In the Elm architecture, events trigger state changes; completion
//! variants carry the result of an effect the embedding application ran.

use guestledger_core::{Attendee, PaymentFilter, PaymentStatus, RosterTab, StatusFilter};

use crate::model::RosterView;

/// Console events.
#[derive(Debug, Clone)]
pub enum Event {
    // Roster navigation
    /// Switch the active tab.
    SelectTab(RosterTab),
    /// Switch between the flat list and the table view.
    SelectView(RosterView),
    /// Search query changed.
    SearchChanged(String),
    /// Check-in status filter changed.
    StatusFilterChanged(StatusFilter),
    /// Payment filter changed.
    PaymentFilterChanged(PaymentFilter),
    /// Jump to a page (1-based; clamped to the current view).
    SelectPage(usize),
    /// Change the page size.
    PageSizeChanged(usize),

    // Snapshot
    /// A fresh snapshot arrived from the persistence collaborator.
    SnapshotLoaded(Vec<Attendee>),

    // Detail / editing
    /// Open the detail pane for an attendee.
    OpenDetail(String),
    /// Close the detail pane.
    CloseDetail,
    /// Stage an edit draft for the selected attendee.
    BeginEdit,
    /// Edit form events.
    Edit(DraftEvent),
    /// Discard the staged draft without side effects.
    DiscardEdit,
    /// Commit the staged draft.
    CommitEdit,
    /// Commit result.
    CommitFinished(Result<(), String>),
    /// Delete the selected attendee.
    RequestDelete,
    /// Delete result.
    DeleteFinished(Result<(), String>),

    // Email
    /// Re-send the confirmation email for the selected attendee.
    RequestResend,
    /// Resend result.
    ResendFinished(Result<(), String>),
}

/// Events for the edit form.
#[derive(Debug, Clone)]
pub enum DraftEvent {
    /// Name changed.
    NameChanged(String),
    /// Email changed.
    EmailChanged(String),
    /// Ticket category changed.
    TicketTypeChanged(String),
    /// Dietary notes changed.
    DietaryChanged(String),
    /// Payment status changed.
    PaymentStatusChanged(Option<PaymentStatus>),
    /// Checked-in toggle flipped.
    CheckedInToggled(bool),
}
