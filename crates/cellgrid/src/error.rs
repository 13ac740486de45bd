//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Variants cover configuration failures only: a grid either builds fully or
//! fails with one of these, and query misses after construction are `None`,
//! never errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("ambiguous dimensions: {axis} given with no items and no other axis to resolve against")]
    AmbiguousDimensions { axis: &'static str },

    #[error("insufficient items: {supplied} supplied for a capacity of {capacity} and no filler configured")]
    InsufficientItems { supplied: usize, capacity: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_counts() {
        let err = Error::InsufficientItems {
            supplied: 4,
            capacity: 9,
        };
        assert_eq!(
            err.to_string(),
            "insufficient items: 4 supplied for a capacity of 9 and no filler configured"
        );
    }

    #[test]
    fn ambiguous_dimensions_names_the_axis() {
        let err = Error::AmbiguousDimensions { axis: "columns" };
        assert!(err.to_string().contains("columns"));
    }
}
