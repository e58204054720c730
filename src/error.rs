//! Error types for tailprint operations.

use thiserror::Error;

/// Errors that can occur during extraction or output serialization.
///
/// The core pipeline recovers from almost everything by degrading: a missing
/// defaults provider yields an empty baseline, unknown CSS values fall back
/// to arbitrary-value tokens, and annotator mismatches simply omit the
/// optional field. The only named extraction failure is a root element that
/// is not visible.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("root element is not visible")]
    RootNotVisible,

    #[error("no such element: {0}")]
    ElementNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
