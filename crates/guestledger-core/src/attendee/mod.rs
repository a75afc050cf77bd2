//! Attendee records and classification.
//!
//! Provides the attendee model, the primary-category classifier and
//! partial-update patches.

mod model;
mod patch;

pub use model::{Attendee, AttendeeClass, DonationType, PaymentStatus};
pub use patch::AttendeePatch;
