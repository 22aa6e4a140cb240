use serde::{Deserialize, Serialize};

use self::audio::AudioConfig;
use self::dataset::DatasetConfig;
use self::server::ServerConfig;
use self::ui::UiConfig;

pub mod audio;
pub mod dataset;
pub mod server;
pub mod ui;

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    pub audio: AudioConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            server: ServerConfig::new(),
            dataset: DatasetConfig::new(),
            audio: AudioConfig::new(),
            ui: UiConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig::default(),
            dataset: DatasetConfig::default(),
            audio: AudioConfig::default(),
            ui: UiConfig::default(),
        }
    }
}
