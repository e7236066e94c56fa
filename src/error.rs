//! Error types for Zookeepr
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ZooError
pub type Result<T> = std::result::Result<T, ZooError>;

/// Unified error type for Zookeepr operations
#[derive(Debug, Error)]
pub enum ZooError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Animal not found")]
    AnimalNotFound,

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    #[error("The animal is not properly formatted.")]
    InvalidAnimal,

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),
}

impl ZooError {
    /// Whether the error was caused by the client rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ZooError::AnimalNotFound | ZooError::InvalidAnimal | ZooError::MalformedBody(_)
        )
    }
}
