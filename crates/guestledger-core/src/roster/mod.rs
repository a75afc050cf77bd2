//! Roster views: tab membership, filtering and pagination.

mod filter;
mod paginate;

pub use filter::{
    PaymentFilter, RosterCounts, RosterTab, StatusFilter, filter_roster, tab_counts,
};
pub use paginate::{Page, paginate};
