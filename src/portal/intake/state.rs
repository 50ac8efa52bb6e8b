use crate::portal::intake::banner::PriorityBanner;
use crate::portal::intake::complaint::ComplaintLog;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntakeState {
    /// Complaint text being typed on the dashboard.
    pub draft: String,
    pub complaints: ComplaintLog,
    pub banner: PriorityBanner,
}

impl UiState for IntakeState {}
