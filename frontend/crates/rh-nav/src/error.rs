use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("Invalid route pattern '{pattern}': {message} {location}")]
    InvalidPattern {
        pattern: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Duplicate route pattern '{pattern}' {location}")]
    DuplicateRoute {
        pattern: String,
        location: ErrorLocation,
    },
}

impl NavError {
    /// Creates InvalidPattern error at caller location.
    #[track_caller]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates DuplicateRoute error at caller location.
    #[track_caller]
    pub fn duplicate_route(pattern: impl Into<String>) -> Self {
        Self::DuplicateRoute {
            pattern: pattern.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
