use super::{LoadEstimator, LoadReading};
use crate::error::SourceUnavailable;
use crate::types::{LoadLevel, SignalState};

/// Binary load decision delivered by an external classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryLoad {
    Low,
    High,
}

/// Boundary to whatever produces real load readings. `poll` returns
/// `Ok(None)` when the source has no fresh decision; errors are expected to
/// be transient and must not interrupt the session.
pub trait ClassifierSource {
    fn poll(&mut self) -> Result<Option<BinaryLoad>, SourceUnavailable>;
}

/// Estimator backed by an external classifier instead of the simulated
/// formula. A missing decision maps to Medium; a failed poll reuses the
/// last-known level so the controller never observes the failure.
pub struct ExternalEstimator<S: ClassifierSource> {
    source: S,
    signals: SignalState,
    load: LoadLevel,
}

impl<S: ClassifierSource> ExternalEstimator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            signals: SignalState::default(),
            load: LoadLevel::Medium,
        }
    }
}

impl<S: ClassifierSource> LoadEstimator for ExternalEstimator<S> {
    fn update(&mut self, _answered_correctly: bool) -> LoadReading {
        match self.source.poll() {
            Ok(Some(BinaryLoad::Low)) => self.load = LoadLevel::Low,
            Ok(Some(BinaryLoad::High)) => self.load = LoadLevel::High,
            Ok(None) => self.load = LoadLevel::Medium,
            Err(err) => {
                tracing::warn!(error = %err, last_known = %self.load, "reusing last load level");
            }
        }

        LoadReading {
            signals: self.signals,
            load: self.load,
        }
    }

    fn current(&self) -> LoadReading {
        LoadReading {
            signals: self.signals,
            load: self.load,
        }
    }

    fn reset(&mut self) {
        self.signals = SignalState::default();
        self.load = LoadLevel::Medium;
    }
}
