use crate::portal::intake::complaint::Priority;

/// Transient "priority assigned" notice on the dashboard.
///
/// Every show or clear bumps `generation`. A delayed clear carries the
/// generation it was scheduled for and is dropped if that is no longer
/// current, so a stale timer cannot hide a newer banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriorityBanner {
    current: Option<Priority>,
    generation: u64,
}

impl PriorityBanner {
    pub fn current(&self) -> Option<Priority> {
        self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn show(&mut self, priority: Priority) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(priority);
        self.generation
    }

    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.current = None;
    }

    /// Returns true when the banner was showing `generation` and is now gone.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}
