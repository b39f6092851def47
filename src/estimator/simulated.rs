use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::{LoadEstimator, LoadReading};
use crate::types::{LoadLevel, SignalState};

/// Simulated signal model. Each update applies a per-channel delta keyed on
/// answer correctness plus one shared uniform perturbation in [-10, 10] —
/// a single draw reused across all three channels, then each channel is
/// clamped back into [0, 100].
pub struct SimulatedEstimator<R: Rng> {
    signals: SignalState,
    load: LoadLevel,
    rng: R,
}

impl SimulatedEstimator<ChaCha8Rng> {
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self::new(ChaCha8Rng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        use rand::SeedableRng;
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> SimulatedEstimator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            signals: SignalState::default(),
            load: LoadLevel::Medium,
            rng,
        }
    }
}

impl<R: Rng> LoadEstimator for SimulatedEstimator<R> {
    fn update(&mut self, answered_correctly: bool) -> LoadReading {
        let perturbation = self.rng.gen_range(-10.0..=10.0);

        let (d_alpha, d_beta, d_theta) = if answered_correctly {
            (5.0, -3.0, -2.0)
        } else {
            (-5.0, 8.0, 7.0)
        };

        self.signals = SignalState::new(
            self.signals.alpha + d_alpha + perturbation,
            self.signals.beta + d_beta + perturbation,
            self.signals.theta + d_theta + perturbation,
        );
        self.load = self.signals.load_level();

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
