use crate::classify_screen::core::{Effect, Event};
use crate::device_camera::interface::DeviceCamera;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::photo_library::interface::PhotoLibrary;
use crate::source_image::Photo;
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    photo_library: Arc<dyn PhotoLibrary + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    event_sender: Sender<Event>,
    request_repaint: Arc<dyn Fn() + Send + Sync>,
    preview_max_side: u32,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        photo_library: Arc<dyn PhotoLibrary + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        event_sender: Sender<Event>,
        request_repaint: Arc<dyn Fn() + Send + Sync>,
        preview_max_side: u32,
    ) -> Self {
        Self {
            logger: logger.with_namespace("effect"),
            device_camera,
            photo_library,
            image_classifier,
            event_sender,
            request_repaint,
            preview_max_side,
        }
    }

    /// Blocks until the effect finishes. Call from a worker thread.
    pub fn run_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        let event = match effect {
            Effect::CaptureFromCamera => {
                let photo = self
                    .device_camera
                    .capture_frame()
                    .map(|source| Photo::new(source, self.preview_max_side))
                    .map_err(|e| e.to_string());
                Event::ImageAcquired(photo)
            }
            Effect::ListLibrary => {
                Event::LibraryListed(self.photo_library.list().map_err(|e| e.to_string()))
            }
            Effect::LoadFromLibrary { path } => {
                let photo = self
                    .photo_library
                    .load(&path)
                    .map(|source| Photo::new(source, self.preview_max_side))
                    .map_err(|e| e.to_string());
                Event::ImageAcquired(photo)
            }
            Effect::ClassifyImage { request_id, image } => {
                let upright = image.upright();
                let result = self
                    .image_classifier
                    .classify(&upright)
                    .map_err(|e| e.to_string());
                Event::ClassifyDone { request_id, result }
            }
        };

        if let Some(message) = failure_message(&event) {
            let _ = self.logger.error(message);
        }

        if self.event_sender.send(event).is_err() {
            let _ = self.logger.error("Screen is gone, dropping effect result");
            return;
        }

        (self.request_repaint)();
    }
}

fn failure_message(event: &Event) -> Option<&str> {
    match event {
        Event::ImageAcquired(Err(e))
        | Event::LibraryListed(Err(e))
        | Event::ClassifyDone { result: Err(e), .. } => Some(e.as_str()),
        _ => None,
    }
}
