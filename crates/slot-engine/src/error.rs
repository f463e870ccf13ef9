//! Error types for store-backed resolution.
//!
//! Expected rejections (conflicts, blocked dates, and the rest of the
//! [`crate::validate::RejectReason`] taxonomy) are NOT errors — they are
//! ordinary return values. Only infrastructure failures surface here, and
//! they propagate unchanged to the caller.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("persistence store unavailable: {0}")]
    Unavailable(String),

    #[error("malformed record from store: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
