use rand::Rng;

use crate::portal::intake::complaint::Priority;

/// Assigns a priority to complaint text.
pub trait PriorityClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Priority;
}

/// Uniform pick over every priority. Ignores the text entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomClassifier;

impl PriorityClassifier for RandomClassifier {
    fn classify(&self, _text: &str) -> Priority {
        let index = rand::thread_rng().gen_range(0..Priority::ALL.len());
        Priority::ALL[index]
    }
}
