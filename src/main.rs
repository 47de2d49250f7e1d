use classify_screen::main::ClassifyScreen;
use classify_screen::run_effect::RunEffect;
use config::{ClassifierConfig, Config};
use device_camera::{impl_fake::DeviceCameraFake, interface::DeviceCamera};
use eframe::egui;
use image_classifier::{
    impl_fake::ImageClassifierFake, impl_tract_onnx::ImageClassifierTractOnnx,
    interface::ImageClassifier,
};
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use photo_library::{impl_directory::PhotoLibraryDirectory, interface::PhotoLibrary};
use std::path::PathBuf;
use std::sync::Arc;

mod classify_screen;
mod config;
mod device_camera;
mod image_classifier;
mod library;
mod photo_library;
mod source_image;

const DEFAULT_CONFIG_PATH: &str = "classifier.json";

fn build_classifier(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<dyn ImageClassifier + Send + Sync>, Box<dyn std::error::Error + Send + Sync>> {
    match &config.classifier {
        ClassifierConfig::Tract(model_config) => Ok(Arc::new(ImageClassifierTractOnnx::new(
            model_config.clone(),
            logger,
        )?)),
        ClassifierConfig::Fake => Ok(Arc::new(ImageClassifierFake::new(logger))),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = Config::load(&config_path)?;

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone()));

    logger.info(&format!("Using config {}", config_path.display()))?;

    // Without a model there is nothing to show.
    let image_classifier = match build_classifier(&config, logger.clone()) {
        Ok(image_classifier) => image_classifier,
        Err(e) => {
            logger.error(&format!("Failed to load classifier: {}", e))?;
            return Err(e);
        }
    };

    let device_camera: Arc<dyn DeviceCamera + Send + Sync> =
        Arc::new(DeviceCameraFake::new(logger.clone(), config.camera_enabled));

    let photo_library: Arc<dyn PhotoLibrary + Send + Sync> = Arc::new(
        PhotoLibraryDirectory::new(config.photo_library_dir.clone(), logger.clone()),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Image Classifier")
            .with_inner_size(config.window_size)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let preview_max_side = config.preview_max_side;

    eframe::run_native(
        "Image Classifier",
        options,
        Box::new(move |cc| {
            let egui_ctx = cc.egui_ctx.clone();
            let camera_available = device_camera.is_available();

            let screen = ClassifyScreen::new(camera_available, logger.clone(), |event_sender| {
                RunEffect::new(
                    logger.clone(),
                    device_camera,
                    photo_library,
                    image_classifier,
                    event_sender,
                    Arc::new(move || egui_ctx.request_repaint()),
                    preview_max_side,
                )
            });

            Box::new(screen)
        }),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
