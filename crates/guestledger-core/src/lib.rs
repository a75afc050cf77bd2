//! # guestledger-core
//!
//! Core roster logic for the `GuestLedger` attendee console.
//!
//! This crate provides:
//! - Attendee records and classification
//! - Roster filtering and pagination
//! - **Seating Tables** - purchaser/guest table reconstruction
//! - **CSV Export** - field-mask driven export projection
//! - **Record Editing** - staged drafts, validation and partial patches
//! - Collaborator boundaries for persistence and email delivery

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod attendee;
pub mod editor;
mod error;
pub mod export;
pub mod roster;
pub mod service;
pub mod settings;
pub mod store;
pub mod tables;

#[cfg(test)]
mod test_support;

pub use attendee::{Attendee, AttendeeClass, AttendeePatch, DonationType, PaymentStatus};
pub use editor::{AttendeeDraft, ValidationError, ValidationResult, validate_draft};
pub use error::{Error, Result};
pub use export::{
    CsvExport, ExportError, ExportField, ExportMask, export_filename, project_csv,
};
pub use roster::{
    Page, PaymentFilter, RosterCounts, RosterTab, StatusFilter, filter_roster, paginate,
    tab_counts,
};
pub use service::{DeliveryError, EmailRenderer, EmailTransport, send_confirmation};
pub use settings::EventSettings;
pub use store::{AttendeeStore, MemoryStore, StoreError};
pub use tables::{SeatingTable, group_into_tables};
