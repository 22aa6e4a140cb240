use std::sync::Arc;

use serde::Serialize;

use crate::prober::AudioProber;

/// Result of resolving a label against the audio collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioHit {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl AudioHit {
    pub fn found(filename: String) -> Self {
        Self {
            exists: true,
            filename: Some(filename),
        }
    }

    pub fn missing() -> Self {
        Self {
            exists: false,
            filename: None,
        }
    }
}

/// Finds the first audio file recorded for a label.
///
/// Candidates are probed one at a time in configured extension order,
/// stopping at the first hit, so a label with both an mp3 and a wav
/// always resolves to the mp3.
pub struct AudioResolver {
    extensions: Vec<String>,
    prober: Arc<dyn AudioProber>,
}

impl AudioResolver {
    pub fn new(extensions: Vec<String>, prober: Arc<dyn AudioProber>) -> Self {
        Self { extensions, prober }
    }

    pub async fn resolve(&self, label: &str) -> AudioHit {
        if label.is_empty() || label.contains(['/', '\\']) || label.contains("..") {
            return AudioHit::missing();
        }

        for ext in &self.extensions {
            let filename = format!("{label}{ext}");
            if self.prober.probe(&filename).await {
                tracing::debug!("Resolved audio for {}: {}", label, filename);
                return AudioHit::found(filename);
            }
        }

        tracing::debug!("No audio recorded for {}", label);
        AudioHit::missing()
    }
}
