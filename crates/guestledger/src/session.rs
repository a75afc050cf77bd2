//! Console session state machine.

use chrono::{DateTime, Local, Utc};
use tracing::{debug, info};

use guestledger_core::{
    Attendee, AttendeeDraft, CsvExport, ExportError, ExportMask, PaymentFilter, RosterCounts,
    RosterTab, SeatingTable, StatusFilter, export_filename, filter_roster, group_into_tables,
    paginate, project_csv, tab_counts, validate_draft,
};

use crate::effect::Effect;
use crate::event::{DraftEvent, Event};
use crate::model::{DetailState, PageView, ResendState, RosterView};

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The attendee console session.
///
/// All roster views are derived fresh from the snapshot on every query;
/// the session holds no persistent state beyond the snapshot and the
/// current navigation/detail selections. Side effects are returned as
/// [`Effect`] values for the embedding application to run.
#[derive(Debug, Clone)]
pub struct Console {
    /// Read-mostly snapshot of the attendee records.
    attendees: Vec<Attendee>,
    /// Active tab.
    tab: RosterTab,
    /// Active view mode.
    view: RosterView,
    /// Search query.
    search: String,
    /// Check-in status filter.
    status_filter: StatusFilter,
    /// Payment filter.
    payment_filter: PaymentFilter,
    /// Current page, 1-based. Shared between the flat and table views.
    page: usize,
    /// Records per page.
    page_size: usize,
    /// Detail pane state, when an attendee is selected.
    detail: Option<DetailState>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Console {
    /// Creates a session over an initial snapshot.
    #[must_use]
    pub fn new(attendees: Vec<Attendee>) -> Self {
        Self {
            attendees,
            tab: RosterTab::default(),
            view: RosterView::default(),
            search: String::new(),
            status_filter: StatusFilter::default(),
            payment_filter: PaymentFilter::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            detail: None,
        }
    }

    /// Update state based on an event, optionally requesting an effect.
    #[allow(clippy::too_many_lines)] // Large match is idiomatic for Elm architecture
    #[must_use]
    pub fn update(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::SelectTab(tab) => {
                if self.tab != tab {
                    self.tab = tab;
                    self.page = 1;
                }
            }
            Event::SelectView(view) => {
                // The page is shared between views and deliberately not
                // reset here; callers may clamp against page_count().
                self.view = view;
            }
            Event::SearchChanged(query) => {
                self.search = query;
                self.page = 1;
            }
            Event::StatusFilterChanged(filter) => {
                self.status_filter = filter;
                self.page = 1;
            }
            Event::PaymentFilterChanged(filter) => {
                self.payment_filter = filter;
                self.page = 1;
            }
            Event::SelectPage(page) => {
                self.page = page.clamp(1, self.page_count().max(1));
            }
            Event::PageSizeChanged(size) => {
                self.page_size = size.max(1);
                self.page = 1;
            }
            Event::SnapshotLoaded(attendees) => {
                debug!("Snapshot refreshed with {} attendees", attendees.len());
                self.attendees = attendees;
                self.clamp_page();
                // Drop the detail pane if its record vanished.
                let vanished = self.detail.as_ref().is_some_and(|detail| {
                    !self.attendees.iter().any(|a| a.id == detail.attendee_id)
                });
                if vanished {
                    self.detail = None;
                }
            }
            Event::OpenDetail(id) => {
                // Re-opening the same attendee keeps any staged draft;
                // opening a different one discards it.
                if self.detail.as_ref().is_none_or(|d| d.attendee_id != id)
                    && self.attendees.iter().any(|a| a.id == id)
                {
                    self.detail = Some(DetailState::new(id));
                }
            }
            Event::CloseDetail => {
                self.detail = None;
            }
            Event::BeginEdit => {
                if let Some(detail) = self.detail.as_mut()
                    && detail.draft.is_none()
                    && let Some(attendee) =
                        self.attendees.iter().find(|a| a.id == detail.attendee_id)
                {
                    detail.draft = Some(AttendeeDraft::stage(attendee));
                }
            }
            Event::Edit(event) => {
                if let Some(draft) = self.detail.as_mut().and_then(|d| d.draft.as_mut()) {
                    apply_draft_event(draft, event);
                }
            }
            Event::DiscardEdit => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.draft = None;
                    detail.commit_error = None;
                }
            }
            Event::CommitEdit => return self.commit_edit(),
            Event::CommitFinished(result) => {
                let detail = self.detail.as_mut()?;
                detail.is_committing = false;
                match result {
                    Ok(()) => {
                        if let Some(patch) = detail.pending_patch.take()
                            && let Some(attendee) =
                                self.attendees.iter_mut().find(|a| a.id == detail.attendee_id)
                        {
                            attendee.apply(&patch);
                        }
                        detail.draft = None;
                        detail.commit_error = None;
                    }
                    Err(error) => {
                        // The draft is preserved so changes are not lost.
                        detail.pending_patch = None;
                        detail.commit_error = Some(error);
                    }
                }
            }
            Event::RequestDelete => {
                let detail = self.detail.as_mut()?;
                if detail.is_deleting {
                    return None;
                }
                detail.is_deleting = true;
                detail.delete_error = None;
                info!("Deleting attendee {}", detail.attendee_id);
                return Some(Effect::DeleteAttendee {
                    id: detail.attendee_id.clone(),
                });
            }
            Event::DeleteFinished(result) => match result {
                Ok(()) => {
                    if let Some(detail) = self.detail.take() {
                        self.attendees.retain(|a| a.id != detail.attendee_id);
                    }
                    self.clamp_page();
                }
                Err(error) => {
                    // The detail view stays open so the user can retry.
                    if let Some(detail) = self.detail.as_mut() {
                        detail.is_deleting = false;
                        detail.delete_error = Some(error);
                    }
                }
            },
            Event::RequestResend => {
                let detail = self.detail.as_mut()?;
                if detail.resend == ResendState::InFlight {
                    debug!("Ignoring resend request while one is in flight");
                    return None;
                }
                let attendee = self
                    .attendees
                    .iter()
                    .find(|a| a.id == detail.attendee_id)?;
                detail.resend = ResendState::InFlight;
                detail.resend_error = None;
                info!("Re-sending confirmation email to {}", attendee.email);
                return Some(Effect::SendConfirmation(attendee.clone()));
            }
            Event::ResendFinished(result) => {
                let detail = self.detail.as_mut()?;
                // The gate clears on both outcomes so the user may retry
                // manually; there is no automatic retry.
                detail.resend = ResendState::Idle;
                detail.resend_error = result.err();
            }
        }
        None
    }

    fn commit_edit(&mut self) -> Option<Effect> {
        let detail = self.detail.as_mut()?;
        if detail.is_committing {
            return None;
        }
        let draft = detail.draft.as_ref()?;
        let original = self
            .attendees
            .iter()
            .find(|a| a.id == detail.attendee_id)?;

        if let Err(errors) = validate_draft(draft) {
            detail.commit_error = Some(
                errors
                    .iter()
                    .map(guestledger_core::ValidationError::message)
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            return None;
        }

        let patch = draft.to_patch(original, Utc::now());
        if patch.is_empty() {
            // Nothing changed; close the edit without a store round-trip.
            detail.draft = None;
            detail.commit_error = None;
            return None;
        }

        detail.is_committing = true;
        detail.commit_error = None;
        detail.pending_patch = Some(patch.clone());
        Some(Effect::CommitUpdate {
            id: detail.attendee_id.clone(),
            patch,
        })
    }

    fn clamp_page(&mut self) {
        let max_page = self.page_count().max(1);
        if self.page > max_page {
            self.page = max_page;
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    /// Active tab.
    #[must_use]
    pub const fn tab(&self) -> RosterTab {
        self.tab
    }

    /// Active view mode.
    #[must_use]
    pub const fn view(&self) -> RosterView {
        self.view
    }

    /// Current search query.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current page, 1-based.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Records per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Detail pane state, when an attendee is selected.
    #[must_use]
    pub const fn detail(&self) -> Option<&DetailState> {
        self.detail.as_ref()
    }

    /// The selected attendee's current record.
    #[must_use]
    pub fn selected_attendee(&self) -> Option<&Attendee> {
        let detail = self.detail.as_ref()?;
        self.attendees.iter().find(|a| a.id == detail.attendee_id)
    }

    /// The filtered flat sequence for the active tab and filters.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Attendee> {
        filter_roster(
            &self.attendees,
            self.tab,
            &self.search,
            self.status_filter,
            self.payment_filter,
        )
    }

    /// Per-tab badge counts over the snapshot.
    #[must_use]
    pub fn counts(&self) -> RosterCounts {
        tab_counts(&self.attendees)
    }

    /// Page count of the active view.
    #[must_use]
    pub fn page_count(&self) -> usize {
        let len = match self.view {
            RosterView::Flat => self.filtered().len(),
            RosterView::Tables => group_into_tables(&self.attendees, &self.search).len(),
        };
        len.div_ceil(self.page_size)
    }

    /// The current page of the flat view.
    #[must_use]
    pub fn flat_page(&self) -> PageView<Attendee> {
        let filtered = self.filtered();
        let page = paginate(&filtered, self.page, self.page_size);
        PageView {
            items: page.items.iter().map(|a| (*a).clone()).collect(),
            total_pages: page.total_pages,
            start_index: page.start_index,
        }
    }

    /// The current page of the table view.
    ///
    /// Grouping ignores the tab and both status filters; only the search
    /// term applies.
    #[must_use]
    pub fn table_page(&self) -> PageView<SeatingTable> {
        let tables = group_into_tables(&self.attendees, &self.search);
        let page = paginate(&tables, self.page, self.page_size);
        PageView {
            items: page.items.to_vec(),
            total_pages: page.total_pages,
            start_index: page.start_index,
        }
    }

    /// Exports the filtered set (all pages) as CSV.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NoFieldsSelected`] when the mask selects
    /// nothing; no partial file is produced and no other state changes.
    pub fn export_csv(
        &self,
        mask: &ExportMask,
        at: DateTime<Local>,
    ) -> Result<CsvExport, ExportError> {
        let content = project_csv(&self.filtered(), mask)?;
        Ok(CsvExport {
            filename: export_filename(at),
            content,
        })
    }

    /// Invite link for the selected purchaser's guests.
    #[must_use]
    pub fn guest_invite_link(&self, origin: &str) -> Option<String> {
        self.selected_attendee()
            .and_then(|a| a.guest_invite_link(origin))
    }
}

fn apply_draft_event(draft: &mut AttendeeDraft, event: DraftEvent) {
    match event {
        DraftEvent::NameChanged(name) => draft.name = name,
        DraftEvent::EmailChanged(email) => draft.email = email,
        DraftEvent::TicketTypeChanged(ticket_type) => draft.ticket_type = ticket_type,
        DraftEvent::DietaryChanged(dietary) => draft.dietary_preferences = dietary,
        DraftEvent::PaymentStatusChanged(status) => draft.payment_status = status,
        DraftEvent::CheckedInToggled(checked_in) => draft.checked_in = checked_in,
    }
}
