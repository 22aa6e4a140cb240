use std::env;

use serde::{Deserialize, Serialize};

fn default_base() -> String {
    "static/audio".to_string()
}

fn default_extensions() -> Vec<String> {
    [".mp3", ".wav", ".ogg", ".m4a"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AudioConfig {
    /// Directory or http(s) URL the audio assets live under
    #[serde(default = "default_base")]
    pub base: String,
    /// Candidate extensions, probed in order
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl AudioConfig {
    pub fn new() -> Self {
        let base = env::var("AUDIO_BASE").unwrap_or_else(|_| default_base());

        Self {
            base,
            extensions: default_extensions(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            extensions: default_extensions(),
        }
    }
}
