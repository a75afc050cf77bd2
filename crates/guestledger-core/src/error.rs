//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Export projection failed.
    #[error("Export error: {0}")]
    Export(#[from] crate::export::ExportError),

    /// Email delivery failed.
    #[error("Delivery error: {0}")]
    Delivery(#[from] crate::service::DeliveryError),

    /// The persistence collaborator failed.
    #[error("Storage error: {0}")]
    Store(#[from] crate::store::StoreError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
