//! Preview image verification
//!
//! Each regeneration fires one probe task. The task reports back through a
//! channel that the event loop drains; nothing waits on it.

mod client;
mod traits;

pub use client::HttpImageProbe;
pub use traits::{ImageProbe, ProbeError};

#[cfg(test)]
pub use traits::MockImageProbe;

use crate::state::ProbeRequest;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

/// Completion signal of one probe
#[derive(Debug)]
pub struct PreviewEvent {
    pub generation: u64,
    pub result: Result<(), ProbeError>,
}

/// Run a probe in the background and send its result on `tx`
pub fn spawn_probe(
    probe: Arc<dyn ImageProbe>,
    request: ProbeRequest,
    tx: UnboundedSender<PreviewEvent>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let result = probe.probe(&request.url).await;
        let event = PreviewEvent {
            generation: request.generation,
            result,
        };
        if tx.send(event).is_err() {
            warn!(generation = request.generation, "preview receiver dropped");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[tokio::test]
    async fn test_spawn_probe_reports_success() {
        let mut mock = MockImageProbe::new();
        mock.expect_probe()
            .withf(|url| url.starts_with("https://img.example/a"))
            .times(1)
            .returning(|_| Ok(()));

        let (tx, mut rx) = unbounded_channel();
        let request = ProbeRequest {
            generation: 3,
            url: "https://img.example/a".to_string(),
        };
        spawn_probe(Arc::new(mock), request, tx).await.unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.generation, 3);
        assert!(event.result.is_ok());
    }

    #[tokio::test]
    async fn test_spawn_probe_reports_failure() {
        let mut mock = MockImageProbe::new();
        mock.expect_probe()
            .returning(|_| Err(ProbeError::Status(404)));

        let (tx, mut rx) = unbounded_channel();
        let request = ProbeRequest {
            generation: 1,
            url: "https://img.example/missing".to_string(),
        };
        spawn_probe(Arc::new(mock), request, tx).await.unwrap();

        let event = rx.recv().await.unwrap();
        assert!(matches!(event.result, Err(ProbeError::Status(404))));
    }

    #[test]
    fn test_mock_probe_blocking() {
        let mut mock = MockImageProbe::new();
        mock.expect_probe().returning(|_| Ok(()));
        assert!(tokio_test::block_on(mock.probe("https://img.example/b")).is_ok());
    }
}
