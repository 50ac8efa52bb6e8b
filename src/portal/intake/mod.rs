//! Complaint intake: the dashboard draft, the newest-first complaint log and
//! the priority banner with its auto-clear timer.

mod banner;
mod classifier;
mod complaint;
mod intent;
mod reducer;
mod state;
mod timer;

pub use banner::PriorityBanner;
pub use classifier::{PriorityClassifier, RandomClassifier};
pub use complaint::{Complaint, ComplaintLog, ComplaintStatus, Priority};
pub use intent::IntakeIntent;
pub use reducer::IntakeReducer;
pub use state::IntakeState;
pub use timer::{BannerNotifier, BannerTimer, DEFAULT_BANNER_TIMEOUT};
