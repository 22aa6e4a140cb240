use std::env;

use serde::{Deserialize, Serialize};

fn default_source() -> String {
    "data/rucheng_data.json".to_string()
}

fn default_load_timeout_secs() -> u64 {
    10
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path or http(s) URL of the dataset JSON document
    #[serde(default = "default_source")]
    pub source: String,
    /// Upper bound on how long a results view waits for the dataset
    #[serde(default = "default_load_timeout_secs")]
    pub load_timeout_secs: u64,
}

impl DatasetConfig {
    pub fn new() -> Self {
        let source = env::var("DATASET_SOURCE").unwrap_or_else(|_| default_source());

        let load_timeout_secs = env::var("LOAD_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_load_timeout_secs); // 10 seconds default

        Self {
            source,
            load_timeout_secs,
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            load_timeout_secs: default_load_timeout_secs(),
        }
    }
}
