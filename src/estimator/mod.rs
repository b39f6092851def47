mod external;
mod simulated;

pub use external::{BinaryLoad, ClassifierSource, ExternalEstimator};
pub use simulated::SimulatedEstimator;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::{LoadLevel, SignalState};

/// Snapshots kept for charting; eviction is FIFO once the window is full.
pub const SIGNAL_HISTORY_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReading {
    pub signals: SignalState,
    pub load: LoadLevel,
}

impl Default for LoadReading {
    fn default() -> Self {
        Self {
            signals: SignalState::default(),
            load: LoadLevel::Medium,
        }
    }
}

/// Turns answer-correctness events into signal levels and a discrete load
/// classification. Implementations are interchangeable from the controller's
/// point of view; it never sees the underlying formula or source.
pub trait LoadEstimator {
    fn update(&mut self, answered_correctly: bool) -> LoadReading;

    fn current(&self) -> LoadReading;

    fn reset(&mut self);
}

/// Bounded ring of the most recent signal snapshots.
#[derive(Debug, Clone, Default)]
pub struct SignalHistory {
    buf: VecDeque<SignalState>,
}

impl SignalHistory {
    pub fn push(&mut self, snapshot: SignalState) {
        if self.buf.len() == SIGNAL_HISTORY_LEN {
            self.buf.pop_front();
        }
        self.buf.push_back(snapshot);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SignalState> {
        self.buf.iter()
    }

    pub fn latest(&self) -> Option<&SignalState> {
        self.buf.back()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_evicts_oldest_beyond_window() {
        let mut history = SignalHistory::default();
        for i in 0..25 {
            history.push(SignalState::new(i as f64, 50.0, 50.0));
        }
        assert_eq!(history.len(), SIGNAL_HISTORY_LEN);
        // Entries 0..5 were evicted first-in first-out.
        assert_eq!(history.iter().next().unwrap().alpha, 5.0);
        assert_eq!(history.latest().unwrap().alpha, 24.0);
    }
}
