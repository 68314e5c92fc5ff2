//! Dom facade errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("Invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },
}
