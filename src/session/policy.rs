use crate::config::{AdaptationConfig, PolicyKind};
use crate::types::{DifficultyLevel, LoadLevel};

/// Maps the latest load classification to the next target tier. Applied
/// after every committed answer; implementations must be pure so the
/// controller can call them at any point of the submission flow.
pub trait AdaptationPolicy {
    fn next_difficulty(
        &self,
        load: LoadLevel,
        current: DifficultyLevel,
        answered_count: usize,
    ) -> DifficultyLevel;
}

/// Default policy: the load level picks the tier outright, no hysteresis.
/// High load backs off to easy, low load pushes to hard.
pub struct DirectMapping;

impl AdaptationPolicy for DirectMapping {
    fn next_difficulty(
        &self,
        load: LoadLevel,
        _current: DifficultyLevel,
        _answered_count: usize,
    ) -> DifficultyLevel {
        match load {
            LoadLevel::High => DifficultyLevel::Easy,
            LoadLevel::Medium => DifficultyLevel::Medium,
            LoadLevel::Low => DifficultyLevel::Hard,
        }
    }
}

/// Alternative policy: nudge one step at a time, saturating at the easy and
/// hard ends. With `forced_progression` the base tier follows a fixed ramp
/// (3 easy, 4 medium, hard afterwards) and the load nudge applies on top.
pub struct Stepwise {
    pub forced_progression: bool,
}

impl AdaptationPolicy for Stepwise {
    fn next_difficulty(
        &self,
        load: LoadLevel,
        current: DifficultyLevel,
        answered_count: usize,
    ) -> DifficultyLevel {
        let base = if self.forced_progression {
            match answered_count {
                0..=2 => DifficultyLevel::Easy,
                3..=6 => DifficultyLevel::Medium,
                _ => DifficultyLevel::Hard,
            }
        } else {
            current
        };

        match load {
            LoadLevel::High => base.easier(),
            LoadLevel::Medium => base,
            LoadLevel::Low => base.harder(),
        }
    }
}

pub fn build_policy(config: &AdaptationConfig) -> Box<dyn AdaptationPolicy> {
    match config.policy {
        PolicyKind::Direct => Box::new(DirectMapping),
        PolicyKind::Stepwise => Box::new(Stepwise {
            forced_progression: config.forced_progression,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_mapping_ignores_current_tier() {
        let policy = DirectMapping;
        for current in [DifficultyLevel::Easy, DifficultyLevel::Medium, DifficultyLevel::Hard] {
            assert_eq!(
                policy.next_difficulty(LoadLevel::High, current, 0),
                DifficultyLevel::Easy
            );
            assert_eq!(
                policy.next_difficulty(LoadLevel::Low, current, 0),
                DifficultyLevel::Hard
            );
            assert_eq!(
                policy.next_difficulty(LoadLevel::Medium, current, 0),
                DifficultyLevel::Medium
            );
        }
    }

    #[test]
    fn stepwise_nudges_one_step_and_saturates() {
        let policy = Stepwise {
            forced_progression: false,
        };
        assert_eq!(
            policy.next_difficulty(LoadLevel::High, DifficultyLevel::Hard, 5),
            DifficultyLevel::Medium
        );
        assert_eq!(
            policy.next_difficulty(LoadLevel::High, DifficultyLevel::Easy, 5),
            DifficultyLevel::Easy
        );
        assert_eq!(
            policy.next_difficulty(LoadLevel::Low, DifficultyLevel::Easy, 5),
            DifficultyLevel::Medium
        );
        assert_eq!(
            policy.next_difficulty(LoadLevel::Low, DifficultyLevel::Hard, 5),
            DifficultyLevel::Hard
        );
        assert_eq!(
            policy.next_difficulty(LoadLevel::Medium, DifficultyLevel::Medium, 5),
            DifficultyLevel::Medium
        );
    }

    #[test]
    fn forced_progression_ramps_with_answer_count() {
        let policy = Stepwise {
            forced_progression: true,
        };
        assert_eq!(
            policy.next_difficulty(LoadLevel::Medium, DifficultyLevel::Hard, 0),
            DifficultyLevel::Easy
        );
        assert_eq!(
            policy.next_difficulty(LoadLevel::Medium, DifficultyLevel::Easy, 4),
            DifficultyLevel::Medium
        );
        assert_eq!(
            policy.next_difficulty(LoadLevel::Medium, DifficultyLevel::Easy, 9),
            DifficultyLevel::Hard
        );
        // The load nudge still applies on top of the ramp.
        assert_eq!(
            policy.next_difficulty(LoadLevel::High, DifficultyLevel::Easy, 9),
            DifficultyLevel::Medium
        );
    }
}
