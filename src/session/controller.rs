use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::config::QuizConfig;
use crate::error::SessionError;
use crate::estimator::{LoadEstimator, SignalHistory, SimulatedEstimator};
use crate::export;
use crate::recorder::{format_timestamp, ResultRecord, ResultRecorder};
use crate::session::policy::{build_policy, AdaptationPolicy};
use crate::session::timer::Countdown;
use crate::store::{QuestionStore, SampleSelector};
use crate::types::{
    DifficultyLevel, LoadLevel, Question, SessionMode, SessionPhase, SignalState,
};

/// What the caller gets back from one answer submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub signals: SignalState,
    pub load: LoadLevel,
    pub phase: SessionPhase,
}

struct PendingAdjustment {
    tier: DifficultyLevel,
    remaining_ticks: u32,
}

/// The adaptive session state machine: NotStarted -> Calibrating -> Active
/// -> Complete. All transitions are synchronous reactions to three external
/// events: `start`, `tick` and `submit_answer`. The controller exclusively
/// owns the session state; queries are non-mutating.
pub struct SessionController {
    config: QuizConfig,
    store: QuestionStore,
    sampler: SampleSelector,
    estimator: Box<dyn LoadEstimator>,
    policy: Box<dyn AdaptationPolicy>,
    rng: ChaCha8Rng,

    phase: SessionPhase,
    mode: SessionMode,
    difficulty: DifficultyLevel,
    current: Option<u32>,
    answered: Vec<u32>,
    history: SignalHistory,
    recorder: ResultRecorder,

    calibration: Countdown,
    time_limit: Countdown,
    pending: Option<PendingAdjustment>,
    question_shown_at: Option<Instant>,
}

impl SessionController {
    pub fn new(
        config: QuizConfig,
        store: QuestionStore,
        sampler: SampleSelector,
        estimator: Box<dyn LoadEstimator>,
    ) -> Self {
        let policy = build_policy(&config.adaptation);
        Self {
            config,
            store,
            sampler,
            estimator,
            policy,
            rng: ChaCha8Rng::from_entropy(),
            phase: SessionPhase::NotStarted,
            mode: SessionMode::Full,
            difficulty: DifficultyLevel::Medium,
            current: None,
            answered: Vec::new(),
            history: SignalHistory::default(),
            recorder: ResultRecorder::new(),
            calibration: Countdown::idle(),
            time_limit: Countdown::idle(),
            pending: None,
            question_shown_at: None,
        }
    }

    /// Controller over the built-in catalog with the simulated estimator.
    pub fn simulated(config: QuizConfig) -> Self {
        Self::new(
            config,
            QuestionStore::default_catalog(),
            SampleSelector::default_pools(),
            Box::new(SimulatedEstimator::from_entropy()),
        )
    }

    /// Deterministic variant for tests and replays: both the estimator
    /// perturbation and the sample draw derive from `seed`.
    pub fn seeded(config: QuizConfig, seed: u64) -> Self {
        let mut controller = Self::new(
            config,
            QuestionStore::default_catalog(),
            SampleSelector::default_pools(),
            Box::new(SimulatedEstimator::seeded(seed)),
        );
        controller.rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
        controller
    }

    pub fn with_policy(mut self, policy: Box<dyn AdaptationPolicy>) -> Self {
        self.policy = policy;
        self
    }

    // --- external events ---------------------------------------------------

    /// Begins a session. Valid from NotStarted and from Complete (which
    /// discards the previous transcript).
    pub fn start(&mut self, mode: SessionMode) -> Result<SessionPhase, SessionError> {
        match self.phase {
            SessionPhase::NotStarted | SessionPhase::Complete => {
                self.begin(mode);
                Ok(self.phase)
            }
            phase => Err(SessionError::InvalidState { phase }),
        }
    }

    /// Complete -> Calibrating: resets answered set, transcript, signal
    /// history and the cached sample selection, then re-enters calibration.
    pub fn start_new_session(&mut self, mode: SessionMode) -> Result<SessionPhase, SessionError> {
        self.start(mode)
    }

    /// One timer wake-up. Drives the calibration countdown, the sample-mode
    /// time limit and any deferred difficulty adjustment; a no-op in phases
    /// with no running timer.
    pub fn tick(&mut self) {
        match self.phase {
            SessionPhase::Calibrating => {
                if self.calibration.tick() {
                    self.activate();
                }
            }
            SessionPhase::Active => {
                let mut due: Option<DifficultyLevel> = None;
                if let Some(pending) = self.pending.as_mut() {
                    pending.remaining_ticks -= 1;
                    if pending.remaining_ticks == 0 {
                        due = Some(pending.tier);
                    }
                }
                if let Some(tier) = due {
                    self.difficulty = tier;
                    self.pending = None;
                    tracing::debug!(tier = %tier, "deferred difficulty adjustment applied");
                }
                if self.time_limit.tick() {
                    tracing::info!(answered = self.answered.len(), "time limit reached, ending session");
                    self.complete();
                }
            }
            SessionPhase::NotStarted | SessionPhase::Complete => {}
        }
    }

    /// Commits one answer: classifies it, updates the estimator, appends a
    /// transcript record, then either completes the session or adapts the
    /// difficulty and presents the next question. Errors leave every piece
    /// of state untouched.
    pub fn submit_answer(
        &mut self,
        question_id: u32,
        answer: &str,
    ) -> Result<AnswerOutcome, SessionError> {
        if self.phase != SessionPhase::Active {
            return Err(SessionError::InvalidState { phase: self.phase });
        }
        let current_id = self.current.ok_or(SessionError::NoCurrentQuestion)?;
        if question_id != current_id {
            return Err(SessionError::QuestionMismatch {
                submitted: question_id,
                current: current_id,
            });
        }

        let question = self
            .question_by_id(current_id)
            .ok_or(SessionError::NoCurrentQuestion)?
            .clone();

        let is_correct = question.is_correct(answer);
        let reading = self.estimator.update(is_correct);
        self.history.push(reading.signals);

        let time_spent = self
            .question_shown_at
            .map(|shown| shown.elapsed().as_secs_f64())
            .unwrap_or(0.0);

        self.recorder.record(ResultRecord {
            question_id: question.id,
            question: question.text.clone(),
            difficulty: question.difficulty,
            is_correct,
            user_answer: answer.to_string(),
            correct_answer: question.correct_answer.clone(),
            time_spent,
            signals: reading.signals,
            cognitive_load: reading.load,
            timestamp: format_timestamp(chrono::Local::now()),
        });

        self.answered.push(question.id);
        self.current = None;

        if self.answered.len() >= self.target() {
            self.complete();
        } else {
            if self.mode == SessionMode::Full {
                self.adapt_difficulty(reading.load);
            }
            self.present_next_question();
        }

        Ok(AnswerOutcome {
            is_correct,
            signals: reading.signals,
            load: reading.load,
            phase: self.phase,
        })
    }

    /// Renders the transcript accumulated so far as CSV.
    pub fn export_csv(&self) -> String {
        export::to_csv(self.recorder.all())
    }

    /// Renders the transcript accumulated so far as JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        export::to_json(self.recorder.all())
    }

    // --- queries -----------------------------------------------------------

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current.and_then(|id| self.question_by_id(id))
    }

    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    pub fn target(&self) -> usize {
        self.config.target_for(self.mode)
    }

    pub fn records(&self) -> &[ResultRecord] {
        self.recorder.all()
    }

    pub fn signal_history(&self) -> &SignalHistory {
        &self.history
    }

    pub fn calibration_remaining(&self) -> u32 {
        self.calibration.remaining()
    }

    /// Seconds left on the session time limit; None outside a timed session.
    pub fn time_remaining(&self) -> Option<u32> {
        if self.mode == SessionMode::Sample && self.time_limit.is_running() {
            Some(self.time_limit.remaining())
        } else {
            None
        }
    }

    // --- internals ---------------------------------------------------------

    fn begin(&mut self, mode: SessionMode) {
        self.mode = mode;
        self.answered.clear();
        self.recorder.clear();
        self.history.clear();
        self.estimator.reset();
        self.sampler.reset_selection();
        self.pending = None;
        self.calibration.cancel();
        self.time_limit.cancel();
        self.question_shown_at = None;
        self.difficulty = DifficultyLevel::Medium;

        match mode {
            SessionMode::Sample => {
                self.sampler.select(
                    self.config.sample.easy_count,
                    self.config.sample.hard_count,
                    &mut self.rng,
                );
                let first = self.sampler.question_at(0).map(|q| (q.id, q.difficulty));
                if let Some((id, tier)) = first {
                    self.current = Some(id);
                    self.difficulty = tier;
                } else {
                    self.current = None;
                }
            }
            SessionMode::Full => match self.next_unanswered(DifficultyLevel::Medium) {
                Some((id, tier)) => {
                    self.current = Some(id);
                    self.difficulty = tier;
                }
                None => self.current = None,
            },
        }

        if self.config.calibration_secs <= 0 {
            self.phase = SessionPhase::Calibrating;
            self.activate();
        } else {
            self.phase = SessionPhase::Calibrating;
            self.calibration.start(self.config.calibration_secs as u32);
            tracing::info!(mode = %mode, secs = self.config.calibration_secs, "calibration started");
        }
    }

    fn activate(&mut self) {
        self.calibration.cancel();
        if self.current.is_none() {
            // Nothing to ask; an empty store ends the session immediately.
            self.complete();
            return;
        }
        self.phase = SessionPhase::Active;
        self.question_shown_at = Some(Instant::now());
        if self.mode == SessionMode::Sample {
            self.time_limit.start(self.config.sample.time_limit_secs);
        }
        tracing::info!(mode = %self.mode, target = self.target(), "session active");
    }

    fn complete(&mut self) {
        self.phase = SessionPhase::Complete;
        self.current = None;
        self.pending = None;
        self.calibration.cancel();
        self.time_limit.cancel();
        self.question_shown_at = None;
        tracing::info!(answered = self.answered.len(), "session complete");
    }

    fn adapt_difficulty(&mut self, load: LoadLevel) {
        let tier = self
            .policy
            .next_difficulty(load, self.difficulty, self.answered.len());
        if self.config.adaptation.delay_secs == 0 {
            self.difficulty = tier;
        } else if tier != self.difficulty {
            self.pending = Some(PendingAdjustment {
                tier,
                remaining_ticks: self.config.adaptation.delay_secs,
            });
        }
    }

    fn present_next_question(&mut self) {
        let next = match self.mode {
            SessionMode::Sample => self
                .sampler
                .question_at(self.answered.len())
                .map(|q| (q.id, q.difficulty)),
            SessionMode::Full => self.next_unanswered(self.difficulty),
        };

        match next {
            Some((id, tier)) => {
                self.current = Some(id);
                self.difficulty = tier;
                self.question_shown_at = Some(Instant::now());
            }
            None => self.complete(),
        }
    }

    /// First unanswered question of `tier`, falling back through the cyclic
    /// tier order when the preferred tier is exhausted.
    fn next_unanswered(&self, tier: DifficultyLevel) -> Option<(u32, DifficultyLevel)> {
        let mut tiers = vec![tier];
        tiers.extend(tier.fallback_order());

        for candidate_tier in tiers {
            if let Some(question) = self
                .store
                .questions_by_difficulty(candidate_tier)
                .iter()
                .find(|q| !self.answered.contains(&q.id))
            {
                return Some((question.id, candidate_tier));
            }
        }
        None
    }

    fn question_by_id(&self, id: u32) -> Option<&Question> {
        match self.mode {
            SessionMode::Sample => self.sampler.find(id),
            SessionMode::Full => self.store.find(id),
        }
    }
}
