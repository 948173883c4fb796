//! Trait abstraction for image verification to enable mocking in tests

use async_trait::async_trait;
use thiserror::Error;

/// Why a preview image could not be loaded
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("image request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("image service answered with status {0}")]
    Status(u16),

    #[error("image service returned non-image content: {0}")]
    NotAnImage(String),
}

/// Checks that a URL resolves to a displayable image
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageProbe: Send + Sync {
    async fn probe(&self, url: &str) -> Result<(), ProbeError>;
}
