use crate::library::logger::interface::Logger;
use crate::photo_library::interface::PhotoLibrary;
use crate::source_image::SourceImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "bmp", "gif", "webp", "tif", "tiff"];

pub struct PhotoLibraryDirectory {
    dir: PathBuf,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PhotoLibraryDirectory {
    pub fn new(dir: PathBuf, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            dir,
            logger: logger.with_namespace("photo_library"),
        }
    }
}

fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

impl PhotoLibrary for PhotoLibraryDirectory {
    fn list(&self) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        let entries = std::fs::read_dir(&self.dir)
            .map_err(|e| format!("Cannot open photo library {}: {}", self.dir.display(), e))?;

        let mut photos = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && is_image_path(&path) {
                photos.push(path);
            }
        }
        photos.sort();

        self.logger.info(&format!(
            "Found {} photos in {}",
            photos.len(),
            self.dir.display()
        ))?;

        Ok(photos)
    }

    fn load(&self, path: &Path) -> Result<SourceImage, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("Loading {}", path.display()))?;
        SourceImage::open(path).map_err(|e| format!("{}: {}", path.display(), e).into())
    }
}
