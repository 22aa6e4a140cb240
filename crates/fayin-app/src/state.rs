use std::sync::Arc;
use std::time::Duration;

use fayin_audio::{AudioResolver, FsProber, HttpProber};
use fayin_config::Config;
use fayin_dictionary::{DatasetSource, DatasetStore};
use tokio_util::sync::CancellationToken;

/// Shared handles passed to every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub store: Arc<DatasetStore>,
    pub resolver: Arc<AudioResolver>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let resolver = Arc::new(build_resolver(&config));
        Self {
            config: Arc::new(config),
            store: Arc::new(DatasetStore::new()),
            resolver,
        }
    }

    /// Kick off the dataset load without blocking startup. The task runs
    /// until the load settles or the token is cancelled.
    pub fn spawn_load(&self, cancel: CancellationToken) {
        let store = self.store.clone();
        let source = DatasetSource::parse(&self.config.dataset.source);
        tokio::spawn(async move {
            tokio::select! {
                result = store.load(&source) => {
                    if let Err(e) = result {
                        tracing::error!("Dataset load from {} failed: {}", source, e);
                    }
                }
                _ = cancel.cancelled() => {
                    tracing::info!("Dataset load cancelled");
                }
            }
        });
    }

    /// How long a results view waits for the dataset to settle.
    pub fn load_timeout(&self) -> Duration {
        Duration::from_secs(self.config.dataset.load_timeout_secs)
    }
}

/// A local directory probes the filesystem; an http(s) base probes with
/// HEAD requests.
fn build_resolver(config: &Config) -> AudioResolver {
    let base = config.audio.base.as_str();
    let extensions = config.audio.extensions.clone();
    if base.starts_with("http://") || base.starts_with("https://") {
        AudioResolver::new(extensions, Arc::new(HttpProber::new(base)))
    } else {
        AudioResolver::new(extensions, Arc::new(FsProber::new(base)))
    }
}
