//! Adaptive quiz session core.
//!
//! Selects questions of varying difficulty, adapts the tier from a discrete
//! cognitive load classification, records per-question outcomes and exports
//! the transcript as CSV. The [`session::SessionController`] state machine is
//! the entry point; estimators and adaptation policies plug in behind the
//! [`estimator::LoadEstimator`] and [`session::AdaptationPolicy`] traits.

pub mod config;
pub mod error;
pub mod estimator;
pub mod export;
pub mod logging;
pub mod recorder;
pub mod session;
pub mod store;
pub mod types;

pub use config::QuizConfig;
pub use error::SessionError;
pub use session::SessionController;
pub use types::{DifficultyLevel, LoadLevel, Question, SessionMode, SessionPhase, SignalState};
