use rand::Rng;
use rand_chacha::ChaCha8Rng;

use neuroquiz_core::config::QuizConfig;
use neuroquiz_core::logging;
use neuroquiz_core::session::SessionController;
use neuroquiz_core::types::{AnswerKind, SessionMode};
use neuroquiz_core::{export, SessionPhase};

/// Runs one simulated session end to end and writes the dated CSV transcript
/// to the working directory.
fn main() {
    let _ = dotenvy::dotenv();
    let config = QuizConfig::from_env();
    let _log_guard = logging::init_tracing(&config.log_level, config.log_dir.as_deref());

    let mode = std::env::args()
        .nth(1)
        .map(|arg| SessionMode::parse(&arg))
        .unwrap_or(SessionMode::Full);

    let mut controller = SessionController::simulated(config);
    let mut rng: ChaCha8Rng = {
        use rand::SeedableRng;
        ChaCha8Rng::from_entropy()
    };

    if let Err(err) = controller.start(mode) {
        tracing::error!(error = %err, "could not start session");
        return;
    }

    while controller.phase() == SessionPhase::Calibrating {
        controller.tick();
    }

    while controller.phase() == SessionPhase::Active {
        let Some(question) = controller.current_question() else {
            break;
        };
        let question_id = question.id;
        // Answer correctly 70% of the time to exercise both adaptation paths.
        let answer = if rng.gen_bool(0.7) {
            question.correct_answer.clone()
        } else {
            match question.kind {
                AnswerKind::MultipleChoice => question
                    .options
                    .iter()
                    .find(|o| **o != question.correct_answer)
                    .cloned()
                    .unwrap_or_default(),
                AnswerKind::FreeText => "unsure".to_string(),
            }
        };

        match controller.submit_answer(question_id, &answer) {
            Ok(outcome) => {
                tracing::info!(
                    question_id,
                    correct = outcome.is_correct,
                    load = %outcome.load,
                    difficulty = %controller.difficulty(),
                    answered = controller.answered_count(),
                    "answer committed"
                );
            }
            Err(err) => {
                tracing::error!(error = %err, "submission rejected");
                break;
            }
        }
    }

    match export::write_csv_file(std::path::Path::new("."), controller.records()) {
        Ok(path) => tracing::info!(path = %path.display(), "done"),
        Err(err) => tracing::error!(error = %err, "export failed"),
    }
}
