//! Error types for the airport service core
//!
//! This module defines error types for each layer:
//! - `StoreError`: failures reported by repository adapters
//! - `ServiceError`: what service callers see (validation or wrapped persistence failures)
//! - `LoadError`: schedule document loading errors

use thiserror::Error;

/// Repository adapter errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Which kind of failure a `ServiceError` represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    FlightPersistence,
    DestinationPersistence,
    StewardPersistence,
    AirplanePersistence,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "invalid_argument"),
            ErrorKind::FlightPersistence => write!(f, "flight_persistence"),
            ErrorKind::DestinationPersistence => write!(f, "destination_persistence"),
            ErrorKind::StewardPersistence => write!(f, "steward_persistence"),
            ErrorKind::AirplanePersistence => write!(f, "airplane_persistence"),
        }
    }
}

/// Service layer errors
///
/// Persistence variants always carry the store failure that caused them, so
/// callers can inspect it through [`ServiceError::store_error`] instead of
/// walking a cause chain.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Flight persistence error: {message}")]
    FlightPersistence {
        message: String,
        #[source]
        source: StoreError,
    },

    #[error("Destination persistence error: {message}")]
    DestinationPersistence {
        message: String,
        #[source]
        source: StoreError,
    },

    #[error("Steward persistence error: {message}")]
    StewardPersistence {
        message: String,
        #[source]
        source: StoreError,
    },

    #[error("Airplane persistence error: {message}")]
    AirplanePersistence {
        message: String,
        #[source]
        source: StoreError,
    },
}

impl ServiceError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ServiceError::InvalidArgument(message.into())
    }

    pub fn flight(message: impl Into<String>, source: StoreError) -> Self {
        let message = message.into();
        tracing::error!(error = %source, "{}", message);
        ServiceError::FlightPersistence { message, source }
    }

    pub fn destination(message: impl Into<String>, source: StoreError) -> Self {
        let message = message.into();
        tracing::error!(error = %source, "{}", message);
        ServiceError::DestinationPersistence { message, source }
    }

    pub fn steward(message: impl Into<String>, source: StoreError) -> Self {
        let message = message.into();
        tracing::error!(error = %source, "{}", message);
        ServiceError::StewardPersistence { message, source }
    }

    pub fn airplane(message: impl Into<String>, source: StoreError) -> Self {
        let message = message.into();
        tracing::error!(error = %source, "{}", message);
        ServiceError::AirplanePersistence { message, source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ServiceError::FlightPersistence { .. } => ErrorKind::FlightPersistence,
            ServiceError::DestinationPersistence { .. } => ErrorKind::DestinationPersistence,
            ServiceError::StewardPersistence { .. } => ErrorKind::StewardPersistence,
            ServiceError::AirplanePersistence { .. } => ErrorKind::AirplanePersistence,
        }
    }

    /// The store failure behind a persistence error, if any
    pub fn store_error(&self) -> Option<&StoreError> {
        match self {
            ServiceError::InvalidArgument(_) => None,
            ServiceError::FlightPersistence { source, .. }
            | ServiceError::DestinationPersistence { source, .. }
            | ServiceError::StewardPersistence { source, .. }
            | ServiceError::AirplanePersistence { source, .. } => Some(source),
        }
    }

    /// True when the store reported that the target entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self.store_error(), Some(StoreError::NotFound(_)))
    }
}

/// Schedule loading errors
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read schedule: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse schedule: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Service(#[from] ServiceError),
}
