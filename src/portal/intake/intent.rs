use crate::portal::intake::complaint::Complaint;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum IntakeIntent {
    EditDraft { text: String },
    /// A complaint that already has its id, priority and date.
    Filed { complaint: Complaint },
    BannerExpired { generation: u64 },
    /// Session ended: drop the draft, the log and the banner.
    Reset,
}

impl Intent for IntakeIntent {}
