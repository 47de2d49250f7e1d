use chrono::Offset;
use crate::image_classifier::models::model_config::ModelConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierConfig {
    Tract(ModelConfig),
    Fake,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub classifier: ClassifierConfig,
    pub photo_library_dir: PathBuf,
    pub camera_enabled: bool,
    pub logger_utc_offset_secs: i32,
    pub window_size: [f32; 2],
    pub preview_max_side: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::Tract(ModelConfig::default()),
            photo_library_dir: PathBuf::from("./photos"),
            camera_enabled: false,
            logger_utc_offset_secs: 0,
            window_size: [480.0, 640.0],
            preview_max_side: 512,
        }
    }
}

impl Config {
    /// Reads a JSON config. A missing file means defaults, a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?;

        Ok(config)
    }

    pub fn logger_timezone(&self) -> chrono::FixedOffset {
        chrono::FixedOffset::east_opt(self.logger_utc_offset_secs).unwrap_or(chrono::Utc.fix())
    }
}
