use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum DifficultyLevel {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn harder(&self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            _ => Self::Hard,
        }
    }

    pub fn easier(&self) -> Self {
        match self {
            Self::Hard => Self::Medium,
            _ => Self::Easy,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            _ => Self::Medium,
        }
    }

    /// Tier search order when a preferred tier runs out of questions:
    /// easy -> medium -> hard, cyclic, starting just after `self`.
    pub fn fallback_order(&self) -> [Self; 2] {
        match self {
            Self::Easy => [Self::Medium, Self::Hard],
            Self::Medium => [Self::Hard, Self::Easy],
            Self::Hard => [Self::Easy, Self::Medium],
        }
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
pub enum LoadLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl LoadLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Classification thresholds: score < 30 is Low, [30, 60) is Medium,
    /// >= 60 is High.
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            Self::Low
        } else if score < 60.0 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl std::fmt::Display for LoadLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three bounded channels acting as physiological proxies. Each value is
/// kept inside [0, 100]; estimators are the only mutators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalState {
    pub alpha: f64,
    pub beta: f64,
    pub theta: f64,
}

impl SignalState {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn new(alpha: f64, beta: f64, theta: f64) -> Self {
        Self {
            alpha: alpha.clamp(Self::MIN, Self::MAX),
            beta: beta.clamp(Self::MIN, Self::MAX),
            theta: theta.clamp(Self::MIN, Self::MAX),
        }
    }

    /// Weighted load score over the post-clamp channel values.
    pub fn load_score(&self) -> f64 {
        self.beta * 0.6 + self.theta * 0.3 - self.alpha * 0.4
    }

    pub fn load_level(&self) -> LoadLevel {
        LoadLevel::from_score(self.load_score())
    }

    pub fn in_bounds(&self) -> bool {
        let ok = |v: f64| (Self::MIN..=Self::MAX).contains(&v);
        ok(self.alpha) && ok(self.beta) && ok(self.theta)
    }
}

impl Default for SignalState {
    fn default() -> Self {
        Self {
            alpha: 50.0,
            beta: 50.0,
            theta: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerKind {
    #[serde(rename = "multiple-choice")]
    MultipleChoice,
    #[serde(rename = "text-input")]
    FreeText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub kind: AnswerKind,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: String,
    pub difficulty: DifficultyLevel,
}

impl Question {
    pub fn multiple_choice(
        id: u32,
        text: &str,
        options: &[&str],
        correct_answer: &str,
        difficulty: DifficultyLevel,
    ) -> Self {
        Self {
            id,
            text: text.to_string(),
            kind: AnswerKind::MultipleChoice,
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct_answer.to_string(),
            difficulty,
        }
    }

    pub fn free_text(id: u32, text: &str, correct_answer: &str, difficulty: DifficultyLevel) -> Self {
        Self {
            id,
            text: text.to_string(),
            kind: AnswerKind::FreeText,
            options: Vec::new(),
            correct_answer: correct_answer.to_string(),
            difficulty,
        }
    }

    /// Correctness is exact string equality against the canonical answer.
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[derive(Default)]
pub enum SessionPhase {
    #[default]
    NotStarted,
    Calibrating,
    Active,
    Complete,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "notStarted",
            Self::Calibrating => "calibrating",
            Self::Active => "active",
            Self::Complete => "complete",
        }
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum SessionMode {
    #[default]
    Full,
    Sample,
}

impl SessionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Sample => "sample",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sample" => Self::Sample,
            _ => Self::Full,
        }
    }
}

impl std::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
