use crate::source_image::SourceImage;
use std::path::{Path, PathBuf};

pub trait PhotoLibrary {
    fn list(&self) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>>;
    fn load(&self, path: &Path) -> Result<SourceImage, Box<dyn std::error::Error + Send + Sync>>;
}
