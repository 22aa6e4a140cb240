use serde::{Deserialize, Serialize};

fn default_site_title() -> String {
    "汝城话发音字典".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_site_title")]
    pub site_title: String,
}

impl UiConfig {
    pub fn new() -> Self {
        Self {
            site_title: default_site_title(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            site_title: default_site_title(),
        }
    }
}
