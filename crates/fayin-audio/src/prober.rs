use std::path::PathBuf;

use async_trait::async_trait;

/// Checks whether one audio candidate exists.
#[async_trait]
pub trait AudioProber: Send + Sync {
    /// True when the named file is present and servable.
    async fn probe(&self, filename: &str) -> bool;
}

/// Probes files under a local audio directory.
pub struct FsProber {
    root: PathBuf,
}

impl FsProber {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AudioProber for FsProber {
    async fn probe(&self, filename: &str) -> bool {
        match tokio::fs::metadata(self.root.join(filename)).await {
            Ok(metadata) => metadata.is_file(),
            Err(_) => false,
        }
    }
}

/// Probes a remote audio base with HEAD requests.
pub struct HttpProber {
    client: reqwest::Client,
    base: String,
}

impl HttpProber {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    fn url_for(&self, filename: &str) -> String {
        format!("{}/{}", self.base.trim_end_matches('/'), filename)
    }
}

#[async_trait]
impl AudioProber for HttpProber {
    async fn probe(&self, filename: &str) -> bool {
        match self.client.head(self.url_for(filename)).send().await {
            Ok(response) => response.status().is_success(),
            // A failed request reads the same as an absent file.
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fs_prober_sees_files_and_misses_directories() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("汝.mp3"), b"riff")
            .await
            .unwrap();
        tokio::fs::create_dir(dir.path().join("ru2.mp3"))
            .await
            .unwrap();

        let prober = FsProber::new(dir.path());
        assert!(prober.probe("汝.mp3").await);
        assert!(!prober.probe("ru2.mp3").await);
        assert!(!prober.probe("absent.mp3").await);
    }

    #[test]
    fn http_prober_joins_base_and_filename() {
        let prober = HttpProber::new("https://cdn.example.com/audio/");
        assert_eq!(
            prober.url_for("汝.mp3"),
            "https://cdn.example.com/audio/汝.mp3"
        );

        let bare = HttpProber::new("https://cdn.example.com/audio");
        assert_eq!(bare.url_for("汝.mp3"), "https://cdn.example.com/audio/汝.mp3");
    }
}
