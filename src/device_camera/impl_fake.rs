use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use crate::source_image::SourceImage;
use chrono::Utc;
use image::metadata::Orientation;
use image::{DynamicImage, Rgb, RgbImage};
use rand::Rng;
use std::sync::Arc;

const FRAME_WIDTH: u32 = 640;
const FRAME_HEIGHT: u32 = 480;

pub struct DeviceCameraFake {
    available: bool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, available: bool) -> Self {
        Self {
            available,
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn is_available(&self) -> bool {
        self.available
    }

    fn capture_frame(&self) -> Result<SourceImage, Box<dyn std::error::Error + Send + Sync>> {
        if !self.available {
            return Err("Camera is not available".into());
        }

        self.logger.info("Capturing frame...")?;

        let mut rng = rand::rng();
        let frame = RgbImage::from_fn(FRAME_WIDTH, FRAME_HEIGHT, |_, _| {
            Rgb([rng.random(), rng.random(), rng.random()])
        });

        self.logger.info("Frame captured")?;

        Ok(SourceImage::new(
            format!("camera-{}", Utc::now().format("%Y%m%d-%H%M%S")),
            DynamicImage::ImageRgb8(frame),
            Orientation::NoTransforms,
        ))
    }
}
