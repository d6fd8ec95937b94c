//! Error types for the masonry layout engine.

use thiserror::Error;

/// Result alias used across the masonry crates.
pub type Result<T> = std::result::Result<T, MasonryError>;

/// Errors rejected at the engine and coordinator API boundary.
///
/// None of these are fatal: a rejected call leaves the previous layout
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MasonryError {
    /// Column count below one.
    #[error("Invalid column count: {0} (must be at least 1)")]
    InvalidColumnCount(usize),

    /// Index that does not address a presented item.
    #[error("Invalid item index: {0}")]
    InvalidIndex(String),

    /// The measurement observer failed for a single subscription.
    #[error("Observer failed for item {index}: {reason}")]
    Observer {
        /// Item the subscription belonged to.
        index: usize,
        /// Observer-provided description.
        reason: String,
    },

    /// Configuration could not be parsed or failed validation.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl MasonryError {
    /// Build an [`MasonryError::InvalidIndex`] for an out-of-range index.
    pub fn index_out_of_range(index: usize, item_count: usize) -> Self {
        Self::InvalidIndex(format!("{index} (item count is {item_count})"))
    }
}

impl From<toml::de::Error> for MasonryError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Parse an item index reported as a raw attribute value.
///
/// Observation callbacks from markup-driven hosts carry the index as text.
/// Accepts a non-negative base-10 integer, optionally surrounded by
/// whitespace. Signs, fractions and exponents are rejected.
pub fn parse_index(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MasonryError::InvalidIndex(raw.to_string()));
    }
    trimmed
        .parse::<usize>()
        .map_err(|_| MasonryError::InvalidIndex(raw.to_string()))
}

/// Convert a numeric index coming from a dynamically typed host.
///
/// Negative, fractional and non-finite values are rejected.
pub fn index_from_f64(value: f64) -> Result<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= usize::MAX as f64 {
        return Err(MasonryError::InvalidIndex(value.to_string()));
    }
    Ok(value as usize)
}
