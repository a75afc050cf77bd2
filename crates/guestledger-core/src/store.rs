//! Persistence collaborator boundary.

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

use crate::attendee::{Attendee, AttendeePatch};

/// Errors from the persistence collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given id.
    #[error("Attendee not found: {0}")]
    NotFound(String),
    /// The backing store failed.
    #[error("Storage error: {0}")]
    Backend(String),
}

/// The persistence collaborator owning the attendee records.
///
/// Updates and deletes are assumed eventually consistent with the next
/// snapshot fetch.
#[allow(async_fn_in_trait)]
pub trait AttendeeStore {
    /// Fetches a fresh snapshot of every attendee record.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backing store fails.
    async fn fetch_attendees(&self) -> Result<Vec<Attendee>, StoreError>;

    /// Applies a partial patch to one record.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the record is missing or the backing
    /// store fails.
    async fn update_attendee(&self, id: &str, patch: AttendeePatch) -> Result<(), StoreError>;

    /// Deletes one record.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the record is missing or the backing
    /// store fails.
    async fn delete_attendee(&self, id: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and embedding without a backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    attendees: Mutex<Vec<Attendee>>,
}

impl MemoryStore {
    /// Creates a store seeded with the given records.
    #[must_use]
    pub fn new(attendees: Vec<Attendee>) -> Self {
        Self {
            attendees: Mutex::new(attendees),
        }
    }
}

impl AttendeeStore for MemoryStore {
    async fn fetch_attendees(&self) -> Result<Vec<Attendee>, StoreError> {
        Ok(self.attendees.lock().await.clone())
    }

    async fn update_attendee(&self, id: &str, patch: AttendeePatch) -> Result<(), StoreError> {
        let mut attendees = self.attendees.lock().await;
        let attendee = attendees
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        attendee.apply(&patch);
        debug!("Updated attendee {id}");
        Ok(())
    }

    async fn delete_attendee(&self, id: &str) -> Result<(), StoreError> {
        let mut attendees = self.attendees.lock().await;
        let before = attendees.len();
        attendees.retain(|a| a.id != id);
        if attendees.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        debug!("Deleted attendee {id}");
        Ok(())
    }
}
