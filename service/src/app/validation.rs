//! Input checks shared by the services
//!
//! Every check fails with `ServiceError::InvalidArgument` and runs before any
//! store access.

use chrono::{DateTime, Utc};

use crate::domain::entities::{duplicate_steward, StewardId};
use crate::error::ServiceError;

/// Reject empty or whitespace-only text fields
pub fn require_non_blank(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::invalid(format!("{} must not be blank", field)));
    }
    Ok(())
}

/// Departure must not be after arrival
pub fn require_interval(
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
) -> Result<(), ServiceError> {
    if departure > arrival {
        return Err(ServiceError::invalid(format!(
            "departure time {} is after arrival time {}",
            departure, arrival
        )));
    }
    Ok(())
}

/// A time range must not end before it starts
pub fn require_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), ServiceError> {
    if start > end {
        return Err(ServiceError::invalid(format!(
            "range start {} is after range end {}",
            start, end
        )));
    }
    Ok(())
}

/// Each steward may be assigned to a flight once
pub fn require_unique_stewards(stewards: &[StewardId]) -> Result<(), ServiceError> {
    match duplicate_steward(stewards) {
        Some(id) => Err(ServiceError::invalid(format!(
            "steward {} is assigned more than once",
            id
        ))),
        None => Ok(()),
    }
}
