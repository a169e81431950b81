//! Error types for Porta.
//!
//! Registries never invent "not found" errors of their own. Lookups that
//! find nothing return `None`, an empty `Vec`, or whatever the caller's
//! factory produced. The two errors below are the only ones a registry
//! creates itself:
//!
//! - [`RegistryError::InvalidArgument`] - a required plugin was missing
//! - [`RegistryError::Comparator`] - ordering failed during construction

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors created by registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A required plugin could not be found; carries the diagnostic message.
    #[error("{0}")]
    InvalidArgument(String),

    /// The comparator failed while ordering plugins; the registry was not built.
    #[error("comparator failed while ordering plugins")]
    Comparator(#[source] BoxError),
}

impl RegistryError {
    /// Returns `true` for [`RegistryError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RegistryError::InvalidArgument(_))
    }
}
