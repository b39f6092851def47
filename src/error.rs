use thiserror::Error;

use crate::types::SessionPhase;

/// Errors surfaced to the caller. Everything here leaves the session state
/// untouched; recoverable conditions (pool clipping, estimator source
/// failure, empty export) are logged warnings instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("operation is not valid while the session is {phase}")]
    InvalidState { phase: SessionPhase },

    #[error("no question is currently presented")]
    NoCurrentQuestion,

    #[error("answer targets question {submitted} but question {current} is presented")]
    QuestionMismatch { submitted: u32, current: u32 },
}

/// External load classifier could not be reached. The estimator recovers by
/// reusing the last-known level, so this never propagates out of the core.
#[derive(Debug, Clone, Error)]
#[error("load classifier unavailable: {0}")]
pub struct SourceUnavailable(pub String);
