use crate::source_image::SourceImage;

pub trait DeviceCamera {
    fn is_available(&self) -> bool;
    fn capture_frame(&self) -> Result<SourceImage, Box<dyn std::error::Error + Send + Sync>>;
}
