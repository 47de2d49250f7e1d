use crate::image_classifier::interface::{rank, Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

enum Behavior {
    Random,
    Scripted(Vec<Classification>),
    Failing(String),
}

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    behavior: Behavior,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            behavior: Behavior::Random,
        }
    }

    #[allow(dead_code)]
    pub fn with_results(
        logger: Arc<dyn Logger + Send + Sync>,
        classifications: Vec<Classification>,
    ) -> Self {
        Self {
            behavior: Behavior::Scripted(classifications),
            ..Self::new(logger)
        }
    }

    #[allow(dead_code)]
    pub fn failing(logger: Arc<dyn Logger + Send + Sync>, message: &str) -> Self {
        Self {
            behavior: Behavior::Failing(message.to_string()),
            ..Self::new(logger)
        }
    }

    fn random_classifications(
        &self,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let objects = vec![
            "horse", "human", "dog", "cat", "bird", "tree", "bicycle", "book", "cup", "plant",
        ];

        let mut rng = rand::rng();

        let score_dist = Uniform::new(0.0f32, 1.0)?;

        let scores: Vec<f32> = objects.iter().map(|_| score_dist.sample(&mut rng)).collect();
        let total: f32 = scores.iter().sum::<f32>().max(f32::EPSILON);

        Ok(objects
            .iter()
            .zip(scores)
            .map(|(label, score)| Classification::new(*label, score / total))
            .collect())
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "Classifying {}x{} image with fake classifier...",
            image.width(),
            image.height()
        ))?;

        let classifications = match &self.behavior {
            Behavior::Random => self.random_classifications()?,
            Behavior::Scripted(classifications) => classifications.clone(),
            Behavior::Failing(message) => return Err(message.clone().into()),
        };

        Ok(rank(classifications))
    }
}
