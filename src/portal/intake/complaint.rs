use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// Review status. Intake only ever produces `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComplaintStatus {
    #[default]
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complaint {
    pub id: u64,
    pub text: String,
    pub priority: Priority,
    pub status: ComplaintStatus,
    /// Submission date as shown in the list, e.g. `10/19/2026`.
    pub date: String,
}

/// Complaints filed this session, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComplaintLog {
    entries: VecDeque<Complaint>,
}

impl ComplaintLog {
    pub fn push_newest(&mut self, complaint: Complaint) {
        self.entries.push_front(complaint);
    }

    pub fn latest(&self) -> Option<&Complaint> {
        self.entries.front()
    }

    pub fn get(&self, index: usize) -> Option<&Complaint> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Complaint> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Id for the next complaint: the wall-clock milliseconds, bumped past
    /// the newest id when two submissions land in the same millisecond or
    /// the clock steps backwards.
    pub fn next_id(&self, now_millis: u64) -> u64 {
        match self.latest() {
            Some(newest) => now_millis.max(newest.id.saturating_add(1)),
            None => now_millis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complaint(id: u64) -> Complaint {
        Complaint {
            id,
            text: format!("complaint {id}"),
            priority: Priority::Low,
            status: ComplaintStatus::Pending,
            date: "1/1/2026".into(),
        }
    }

    #[test]
    fn newest_is_first() {
        let mut log = ComplaintLog::default();
        log.push_newest(complaint(1));
        log.push_newest(complaint(2));
        assert_eq!(log.latest().map(|c| c.id), Some(2));
        assert_eq!(log.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn next_id_never_repeats_within_a_millisecond() {
        let mut log = ComplaintLog::default();
        assert_eq!(log.next_id(1_000), 1_000);
        log.push_newest(complaint(1_000));
        assert_eq!(log.next_id(1_000), 1_001);
        assert_eq!(log.next_id(900), 1_001);
        assert_eq!(log.next_id(5_000), 5_000);
    }

    #[test]
    fn priority_labels() {
        let labels: Vec<_> = Priority::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, ["Low", "Medium", "High", "Critical"]);
    }
}
