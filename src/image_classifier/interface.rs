use image::DynamicImage;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

impl Classification {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

pub trait ImageClassifier {
    /// Every label the model scored, highest confidence first.
    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Stable descending sort. NaN confidences sink to the bottom.
pub fn rank(mut classifications: Vec<Classification>) -> Vec<Classification> {
    classifications.sort_by(|a, b| {
        match (a.confidence.is_nan(), b.confidence.is_nan()) {
            (true, true) => std::cmp::Ordering::Equal,
            (true, false) => std::cmp::Ordering::Greater,
            (false, true) => std::cmp::Ordering::Less,
            (false, false) => b.confidence.total_cmp(&a.confidence),
        }
    });
    classifications
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_descending() {
        let ranked = rank(vec![
            Classification::new("horse", 0.2),
            Classification::new("human", 0.7),
            Classification::new("cat", 0.1),
        ]);

        let labels: Vec<&str> = ranked.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["human", "horse", "cat"]);
    }

    #[test]
    fn test_rank_keeps_ties_in_model_order() {
        let ranked = rank(vec![
            Classification::new("first", 0.5),
            Classification::new("second", 0.5),
        ]);

        assert_eq!(ranked[0].label, "first");
        assert_eq!(ranked[1].label, "second");
    }

    #[test]
    fn test_rank_puts_nan_last() {
        let ranked = rank(vec![
            Classification::new("broken", f32::NAN),
            Classification::new("fine", 0.01),
        ]);

        assert_eq!(ranked[0].label, "fine");
        assert_eq!(ranked[1].label, "broken");
    }
}
