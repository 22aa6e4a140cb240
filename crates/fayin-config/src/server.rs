use std::env;

use serde::{Deserialize, Serialize};

fn default_listen() -> String {
    "127.0.0.1:8030".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Directory served under /static (audio lives in its audio/ subdir)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl ServerConfig {
    pub fn new() -> Self {
        let listen = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| default_static_dir());

        Self { listen, static_dir }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            static_dir: default_static_dir(),
        }
    }
}
