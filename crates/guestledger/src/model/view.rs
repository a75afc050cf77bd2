//! Roster view modes and derived page values.

/// View mode for the roster list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterView {
    /// Show attendees in a flat list (default).
    #[default]
    Flat,
    /// Show attendees grouped into seating tables.
    Tables,
}

impl RosterView {
    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Flat => "List",
            Self::Tables => "Tables",
        }
    }
}

/// One derived page of a roster view.
///
/// Recomputed from the snapshot on every query; holds no live borrows.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<T> {
    /// Records on this page, in view order.
    pub items: Vec<T>,
    /// Total number of pages; 0 when the view is empty.
    pub total_pages: usize,
    /// Zero-based index of the first item on this page.
    pub start_index: usize,
}
