// Crate-wide error taxonomy

use std::fmt;

/// Errors raised by the site core.
///
/// User-facing paths (the form gateway) never surface these directly; they
/// resolve to a `FormResult` with a generic message while the detail here
/// goes to the log. Controller errors (`InvalidPageSize`, `OutOfRange`)
/// indicate caller bugs and are returned eagerly.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteError {
    /// Carousel constructed with a page size of zero.
    InvalidPageSize(usize),
    /// Gallery `select` with an index outside `[0, len)`.
    OutOfRange { index: usize, len: usize },
    /// User input rejected by a field validator.
    Validation { field: &'static str, message: String },
    /// Missing or blank provider credential.
    Configuration(String),
    /// The external mail/CRM call failed.
    Provider(String),
    /// games.json was parseable but structurally invalid, or not parseable.
    Catalog(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SiteError::InvalidPageSize(size) => {
                write!(f, "Invalid carousel page size: {} (must be at least 1)", size)
            }
            SiteError::OutOfRange { index, len } => {
                write!(f, "Media index {} out of range for gallery of {} items", index, len)
            }
            SiteError::Validation { field, message } => {
                write!(f, "Validation failed for '{}': {}", field, message)
            }
            SiteError::Configuration(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            SiteError::Provider(msg) => {
                write!(f, "Provider error: {}", msg)
            }
            SiteError::Catalog(msg) => {
                write!(f, "Catalog error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SiteError {}
