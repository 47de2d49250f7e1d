use crate::image_classifier::interface::{rank, Classification, ImageClassifier};
use crate::image_classifier::labels::{label_for, load_labels};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::{preprocess_image, Normalization};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    labels: Vec<String>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger.with_namespace("image_classifier").with_namespace("tract");
        let (height, width) = config.input_shape;

        logger.info(&format!("Loading model {}", config.onnx_model_path))?;

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .map_err(|e| format!("Failed to load model {}: {}", config.onnx_model_path, e))?
            .with_input_fact(0, f32::fact([1, 3, height as usize, width as usize]).into())?
            .into_optimized()?
            .into_runnable()?;

        let labels = if config.labels_path.is_empty() {
            Vec::new()
        } else {
            load_labels(Path::new(&config.labels_path))?
        };

        logger.info(&format!("Model ready with {} labels", labels.len()))?;

        Ok(Self {
            model,
            labels,
            config,
            logger,
        })
    }
}

fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f32 = exps.iter().sum();
    exps.iter().map(|e| e / total).collect()
}

/// Turns a flat score vector into labelled, ranked classifications.
pub fn postprocess(scores: &[f32], labels: &[String], apply_softmax: bool) -> Vec<Classification> {
    let probabilities = if apply_softmax {
        softmax(scores)
    } else {
        scores.to_vec()
    };

    let classifications = probabilities
        .into_iter()
        .enumerate()
        .map(|(index, confidence)| Classification {
            label: label_for(labels, index),
            confidence,
        })
        .collect();

    rank(classifications)
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let started = Instant::now();
        let (height, width) = self.config.input_shape;

        let input = preprocess_image(
            image,
            width,
            height,
            Normalization {
                mean: self.config.mean,
                std: self.config.std,
            },
        )?;

        let outputs = self.model.run(tvec!(input.into_tvalue()))?;
        let output = outputs.first().ok_or("Model produced no outputs")?;
        let scores: Vec<f32> = output.to_array_view::<f32>()?.iter().copied().collect();

        if scores.is_empty() {
            return Err("Model produced an empty output".into());
        }

        let classifications = postprocess(&scores, &self.labels, self.config.apply_softmax);

        self.logger.info(&format!(
            "Classified {} scores in {:?}",
            scores.len(),
            started.elapsed()
        ))?;

        Ok(classifications)
    }
}
