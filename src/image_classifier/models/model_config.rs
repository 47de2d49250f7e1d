use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub onnx_model_path: String,
    /// One label per line, in output index order. Empty means `class {index}`.
    pub labels_path: String,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub mean: [f32; 3],
    pub std: [f32; 3],
    /// Set for models whose output is raw logits.
    pub apply_softmax: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: "./models/mobilenetv2-7.onnx".to_string(),
            labels_path: "./models/imagenet_labels.txt".to_string(),
            input_shape: (224, 224),
            mean: [0.485, 0.456, 0.406],
            std: [0.229, 0.224, 0.225],
            apply_softmax: true,
        }
    }
}
