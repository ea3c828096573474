//! Error types for key-management provider operations

use thiserror::Error;

/// Errors that can occur when talking to the key-management provider
#[derive(Error, Debug)]
pub enum KmsClientError {
    #[error("Failed to list keys: {0}")]
    ListKeys(String),

    #[error("Failed to describe key {key_id}: {message}")]
    DescribeKey { key_id: String, message: String },

    #[error("Failed to get rotation status for key {key_id}: {message}")]
    RotationStatus { key_id: String, message: String },

    #[error("Malformed provider response for key {key_id}: {message}")]
    MalformedResponse { key_id: String, message: String },
}

pub type Result<T> = std::result::Result<T, KmsClientError>;
