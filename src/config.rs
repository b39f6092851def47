use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::SessionMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum PolicyKind {
    #[default]
    Direct,
    Stepwise,
}

impl PolicyKind {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "stepwise" => Self::Stepwise,
            _ => Self::Direct,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptationConfig {
    pub policy: PolicyKind,
    /// Ticks to wait before a load-driven tier change takes effect.
    /// Zero applies the change before the next question is selected.
    pub delay_secs: u32,
    /// Stepwise only: force easy for the first 3 questions, medium for the
    /// next 4, hard afterwards, with the load nudge applied on top.
    pub forced_progression: bool,
}

impl Default for AdaptationConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Direct,
            delay_secs: 0,
            forced_progression: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    pub easy_count: usize,
    pub hard_count: usize,
    pub time_limit_secs: u32,
}

impl SampleConfig {
    pub fn target(&self) -> usize {
        self.easy_count + self.hard_count
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            easy_count: 10,
            hard_count: 5,
            time_limit_secs: 480,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Interaction-free countdown before questioning begins. Zero or
    /// negative skips calibration entirely.
    pub calibration_secs: i64,
    pub full_target: usize,
    pub sample: SampleConfig,
    pub adaptation: AdaptationConfig,
    pub log_level: String,
    /// Directory for rolling log files; None keeps logging on stdout only.
    pub log_dir: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            calibration_secs: 30,
            full_target: 10,
            sample: SampleConfig::default(),
            adaptation: AdaptationConfig::default(),
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl QuizConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let calibration_secs = env_parse("QUIZ_CALIBRATION_SECS", defaults.calibration_secs);
        let full_target = env_parse("QUIZ_FULL_TARGET", defaults.full_target);

        let sample = SampleConfig {
            easy_count: env_parse("QUIZ_SAMPLE_EASY_COUNT", defaults.sample.easy_count),
            hard_count: env_parse("QUIZ_SAMPLE_HARD_COUNT", defaults.sample.hard_count),
            time_limit_secs: env_parse("QUIZ_SAMPLE_TIME_LIMIT_SECS", defaults.sample.time_limit_secs),
        };

        let adaptation = AdaptationConfig {
            policy: std::env::var("QUIZ_ADAPTATION_POLICY")
                .map(|v| PolicyKind::parse(&v))
                .unwrap_or(defaults.adaptation.policy),
            delay_secs: env_parse("QUIZ_ADAPTATION_DELAY_SECS", defaults.adaptation.delay_secs),
            forced_progression: std::env::var("QUIZ_FORCED_PROGRESSION")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.adaptation.forced_progression),
        };

        let log_level = std::env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_dir = std::env::var("ENABLE_FILE_LOGS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false)
            .then(|| {
                std::env::var("LOG_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("./logs"))
            });

        Self {
            calibration_secs,
            full_target,
            sample,
            adaptation,
            log_level,
            log_dir,
        }
    }

    /// Total questions a session of the given mode aims to answer.
    pub fn target_for(&self, mode: SessionMode) -> usize {
        match mode {
            SessionMode::Full => self.full_target,
            SessionMode::Sample => self.sample.target(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_canonical_session_shape() {
        let config = QuizConfig::default();
        assert_eq!(config.full_target, 10);
        assert_eq!(config.sample.target(), 15);
        assert_eq!(config.target_for(SessionMode::Sample), 15);
        assert_eq!(config.adaptation.policy, PolicyKind::Direct);
        assert_eq!(config.adaptation.delay_secs, 0);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn policy_kind_parse_falls_back_to_direct() {
        assert_eq!(PolicyKind::parse("stepwise"), PolicyKind::Stepwise);
        assert_eq!(PolicyKind::parse("STEPWISE"), PolicyKind::Stepwise);
        assert_eq!(PolicyKind::parse("banana"), PolicyKind::Direct);
    }
}
