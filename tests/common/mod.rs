//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use nirakshak::portal::intake::{Priority, PriorityClassifier};
use nirakshak::portal::{Language, PortalController};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const BANNER_TIMEOUT: Duration = Duration::from_secs(5);

/// Always answers with the same priority.
pub struct FixedClassifier(pub Priority);

impl PriorityClassifier for FixedClassifier {
    fn classify(&self, _text: &str) -> Priority {
        self.0
    }
}

/// Walks through `priorities` in order, wrapping around.
pub struct SequenceClassifier {
    priorities: Vec<Priority>,
    next: AtomicUsize,
}

impl SequenceClassifier {
    pub fn new(priorities: Vec<Priority>) -> Self {
        Self {
            priorities,
            next: AtomicUsize::new(0),
        }
    }
}

impl PriorityClassifier for SequenceClassifier {
    fn classify(&self, _text: &str) -> Priority {
        let index = self.next.fetch_add(1, Ordering::SeqCst) % self.priorities.len();
        self.priorities[index]
    }
}

/// Fresh controller in the initial logged-out/login state.
pub fn controller() -> PortalController {
    PortalController::new(Language::En, BANNER_TIMEOUT)
}

/// Controller already signed in as `citizen@example.com`.
pub fn signed_in() -> PortalController {
    let mut portal = controller();
    portal
        .login("citizen@example.com", "hunter22")
        .expect("non-empty credentials are accepted");
    portal
}

pub fn signed_in_with(classifier: Box<dyn PriorityClassifier>) -> PortalController {
    let mut portal = controller().with_classifier(classifier);
    portal
        .login("citizen@example.com", "hunter22")
        .expect("non-empty credentials are accepted");
    portal
}
