use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader, RgbaImage};
use std::path::Path;
use std::sync::Arc;

/// Pixels as stored in the file, plus the EXIF orientation needed to show them upright.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    pub name: String,
    pub pixels: DynamicImage,
    pub orientation: Orientation,
}

impl SourceImage {
    pub fn new(name: impl Into<String>, pixels: DynamicImage, orientation: Orientation) -> Self {
        Self {
            name: name.into(),
            pixels,
            orientation,
        }
    }

    pub fn open(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut decoder = ImageReader::open(path)?
            .with_guessed_format()?
            .into_decoder()?;
        let orientation = decoder.orientation()?;
        let pixels = DynamicImage::from_decoder(decoder)?;

        Ok(Self {
            name,
            pixels,
            orientation,
        })
    }

    pub fn upright(&self) -> DynamicImage {
        let mut image = self.pixels.clone();
        image.apply_orientation(self.orientation);
        image
    }
}

/// An acquired photo with a small upright preview, built off the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub source: Arc<SourceImage>,
    pub preview: Arc<RgbaImage>,
}

impl Photo {
    pub fn new(source: SourceImage, preview_max_side: u32) -> Self {
        let preview = source
            .upright()
            .thumbnail(preview_max_side, preview_max_side)
            .to_rgba8();

        Self {
            source: Arc::new(source),
            preview: Arc::new(preview),
        }
    }
}
