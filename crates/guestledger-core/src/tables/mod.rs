//! Seating tables reconstructed from purchaser/guest links.

mod group;
mod model;

pub use group::group_into_tables;
pub use model::SeatingTable;
