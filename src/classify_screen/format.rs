use crate::classify_screen::core::Status;
use crate::image_classifier::interface::{rank, Classification};

pub const MAX_DISPLAYED: usize = 2;

pub fn top_classifications(classifications: Vec<Classification>) -> Vec<Classification> {
    let mut ranked = rank(classifications);
    ranked.truncate(MAX_DISPLAYED);
    ranked
}

/// `(0.37) horse`
pub fn format_classification(classification: &Classification) -> String {
    format!("({:.2}) {}", classification.confidence, classification.label)
}

pub fn status_text(status: &Status) -> String {
    match status {
        Status::Waiting => "Choose a photo to classify.".to_string(),
        Status::Classifying { .. } => "Classifying...".to_string(),
        Status::Classified(classifications) => {
            let lines: Vec<String> = classifications
                .iter()
                .take(MAX_DISPLAYED)
                .map(format_classification)
                .collect();
            format!("Classification:\n{}", lines.join("\n"))
        }
        Status::NothingRecognized => "Nothing recognized.".to_string(),
        Status::LoadFailed(message) => format!("Unable to load image.\n{}", message),
        Status::ClassifyFailed(message) => format!("Unable to classify image.\n{}", message),
    }
}
