//! Property-based tests for the estimator and controller invariants:
//! - signal channels stay inside [0, 100] for any input sequence
//! - answered-set size, record count and submission count always agree
//! - the signal history window never exceeds its bound

use proptest::prelude::*;

use neuroquiz_core::config::QuizConfig;
use neuroquiz_core::estimator::{LoadEstimator, SimulatedEstimator, SIGNAL_HISTORY_LEN};
use neuroquiz_core::session::SessionController;
use neuroquiz_core::types::{LoadLevel, SessionMode, SessionPhase, SignalState};

proptest! {
    #[test]
    fn signals_stay_bounded_for_any_sequence(
        seed in any::<u64>(),
        answers in proptest::collection::vec(any::<bool>(), 0..200),
    ) {
        let mut estimator = SimulatedEstimator::seeded(seed);
        for answered_correctly in answers {
            let reading = estimator.update(answered_correctly);
            prop_assert!(reading.signals.in_bounds());
        }
    }

    #[test]
    fn load_level_always_matches_its_signals(
        seed in any::<u64>(),
        answers in proptest::collection::vec(any::<bool>(), 1..100),
    ) {
        let mut estimator = SimulatedEstimator::seeded(seed);
        for answered_correctly in answers {
            let reading = estimator.update(answered_correctly);
            prop_assert_eq!(reading.load, reading.signals.load_level());
        }
    }

    #[test]
    fn classification_thresholds_hold_for_any_signals(
        alpha in 0.0f64..=100.0,
        beta in 0.0f64..=100.0,
        theta in 0.0f64..=100.0,
    ) {
        let signals = SignalState::new(alpha, beta, theta);
        let score = signals.load_score();
        match signals.load_level() {
            LoadLevel::Low => prop_assert!(score < 30.0),
            LoadLevel::Medium => prop_assert!((30.0..60.0).contains(&score)),
            LoadLevel::High => prop_assert!(score >= 60.0),
        }
    }

    #[test]
    fn answered_count_tracks_submissions_and_records(
        seed in any::<u64>(),
        answers in proptest::collection::vec(any::<bool>(), 1..10),
    ) {
        let config = QuizConfig {
            calibration_secs: 0,
            ..QuizConfig::default()
        };
        let mut controller = SessionController::seeded(config, seed);
        controller.start(SessionMode::Full).unwrap();

        let mut submitted = 0usize;
        for answered_correctly in answers {
            if controller.phase() != SessionPhase::Active {
                break;
            }
            let question = controller.current_question().unwrap();
            let id = question.id;
            let answer = if answered_correctly {
                question.correct_answer.clone()
            } else {
                String::from("wrong")
            };
            controller.submit_answer(id, &answer).unwrap();
            submitted += 1;

            prop_assert_eq!(controller.answered_count(), submitted);
            prop_assert_eq!(controller.records().len(), submitted);
        }
    }

    #[test]
    fn signal_history_never_exceeds_window(
        seed in any::<u64>(),
        answers in proptest::collection::vec(any::<bool>(), 0..40),
    ) {
        let config = QuizConfig {
            calibration_secs: 0,
            full_target: 50, // run until the catalog itself is exhausted
            ..QuizConfig::default()
        };
        let mut controller = SessionController::seeded(config, seed);
        controller.start(SessionMode::Full).unwrap();

        for answered_correctly in answers {
            if controller.phase() != SessionPhase::Active {
                break;
            }
            let question = controller.current_question().unwrap();
            let id = question.id;
            let answer = if answered_correctly {
                question.correct_answer.clone()
            } else {
                String::from("wrong")
            };
            controller.submit_answer(id, &answer).unwrap();
            prop_assert!(controller.signal_history().len() <= SIGNAL_HISTORY_LEN);
        }
    }
}
