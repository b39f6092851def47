use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::types::{DifficultyLevel, LoadLevel, SignalState};

/// One answered question. Question text and signals are captured at answer
/// time and never touched again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub question_id: u32,
    pub question: String,
    pub difficulty: DifficultyLevel,
    pub is_correct: bool,
    pub user_answer: String,
    pub correct_answer: String,
    /// Wall-clock seconds between question display and submission.
    pub time_spent: f64,
    pub signals: SignalState,
    pub cognitive_load: LoadLevel,
    pub timestamp: String,
}

/// Timestamp format used in the exported transcript: `DD/MM/YYYY, HH:mm:ss`.
pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// Append-only transcript of the current session. No deduplication happens
/// here; the controller's answered-set is what prevents double submissions.
#[derive(Debug, Clone, Default)]
pub struct ResultRecorder {
    records: Vec<ResultRecord>,
}

impl ResultRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: ResultRecord) {
        self.records.push(entry);
    }

    pub fn all(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
