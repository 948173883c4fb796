//! HTTP image probe
//!
//! Fetches the generated OpenGraph URL the way an `<img>` tag would and
//! reports whether an image came back.

use super::traits::{ImageProbe, ProbeError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("ghcard-tui/", env!("CARGO_PKG_VERSION"));

/// Probe backed by a shared reqwest client
pub struct HttpImageProbe {
    client: reqwest::Client,
}

impl HttpImageProbe {
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageProbe for HttpImageProbe {
    async fn probe(&self, url: &str) -> Result<(), ProbeError> {
        debug!(%url, "probing preview image");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        check_response(status.as_u16(), content_type.as_deref())
    }
}

/// Accept only successful responses carrying an image body
fn check_response(status: u16, content_type: Option<&str>) -> Result<(), ProbeError> {
    if !(200..300).contains(&status) {
        return Err(ProbeError::Status(status));
    }
    match content_type {
        Some(ct) if ct.trim().to_ascii_lowercase().starts_with("image/") => Ok(()),
        Some(ct) => Err(ProbeError::NotAnImage(ct.to_string())),
        None => Err(ProbeError::NotAnImage("missing content type".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_image_response() {
        assert!(check_response(200, Some("image/png")).is_ok());
        assert!(check_response(200, Some("Image/PNG; charset=binary")).is_ok());
    }

    #[test]
    fn test_rejects_error_status() {
        assert!(matches!(
            check_response(404, Some("image/png")),
            Err(ProbeError::Status(404))
        ));
    }

    #[test]
    fn test_rejects_html_body() {
        assert!(matches!(
            check_response(200, Some("text/html")),
            Err(ProbeError::NotAnImage(_))
        ));
        assert!(matches!(
            check_response(200, None),
            Err(ProbeError::NotAnImage(_))
        ));
    }

    #[test]
    fn test_client_builds() {
        assert!(HttpImageProbe::new(Duration::from_secs(5)).is_ok());
    }
}
