use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::recorder::ResultRecord;

const HEADERS: [&str; 12] = [
    "Question ID",
    "Question",
    "Difficulty",
    "Correct",
    "User Answer",
    "Correct Answer",
    "Time Spent (s)",
    "Alpha",
    "Beta",
    "Theta",
    "Cognitive Load",
    "Timestamp",
];

/// UTF-8 byte-order mark, kept for spreadsheet compatibility.
const BOM: &str = "\u{FEFF}";

/// Fields holding a comma, double-quote or newline are wrapped in quotes
/// with internal quotes doubled.
fn escape_csv(value: &str) -> Cow<'_, str> {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Renders the transcript as CSV: fixed column order, CRLF row terminators,
/// BOM prefix, header always present. Zero records yields a header-only
/// document and a logged warning rather than an error.
pub fn to_csv(records: &[ResultRecord]) -> String {
    if records.is_empty() {
        tracing::warn!("export requested with zero records, producing header-only CSV");
    }

    let mut out = String::from(BOM);
    out.push_str(&HEADERS.join(","));
    out.push_str("\r\n");

    for record in records {
        let fields = [
            record.question_id.to_string(),
            record.question.clone(),
            record.difficulty.as_str().to_string(),
            if record.is_correct { "Yes" } else { "No" }.to_string(),
            record.user_answer.clone(),
            record.correct_answer.clone(),
            format!("{:.2}", record.time_spent),
            format!("{:.2}", record.signals.alpha),
            format!("{:.2}", record.signals.beta),
            format!("{:.2}", record.signals.theta),
            record.cognitive_load.as_str().to_string(),
            record.timestamp.clone(),
        ];
        let row: Vec<String> = fields.iter().map(|f| escape_csv(f).into_owned()).collect();
        out.push_str(&row.join(","));
        out.push_str("\r\n");
    }

    out
}

/// Renders the transcript as pretty-printed JSON, camelCase keys.
pub fn to_json(records: &[ResultRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("cognitive-test-results-{}.csv", date.format("%Y-%m-%d"))
}

/// Writes the transcript under `dir` using the dated filename and returns
/// the full path.
pub fn write_csv_file(dir: &Path, records: &[ResultRecord]) -> std::io::Result<PathBuf> {
    let path = dir.join(export_filename(chrono::Local::now().date_naive()));
    let mut file = std::fs::File::create(&path)?;
    file.write_all(to_csv(records).as_bytes())?;
    tracing::info!(path = %path.display(), records = records.len(), "transcript exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DifficultyLevel, LoadLevel, SignalState};

    fn record_with_text(text: &str) -> ResultRecord {
        ResultRecord {
            question_id: 5,
            question: text.to_string(),
            difficulty: DifficultyLevel::Medium,
            is_correct: false,
            user_answer: "6".to_string(),
            correct_answer: "7".to_string(),
            time_spent: 4.5,
            signals: SignalState::new(52.25, 47.5, 50.0),
            cognitive_load: LoadLevel::Medium,
            timestamp: "02/02/2025, 10:00:00".to_string(),
        }
    }

    #[test]
    fn empty_export_is_bom_header_crlf_only() {
        let csv = to_csv(&[]);
        assert!(csv.starts_with('\u{FEFF}'));
        let body = csv.trim_start_matches('\u{FEFF}');
        assert_eq!(body, format!("{}\r\n", HEADERS.join(",")));
    }

    #[test]
    fn comma_and_quote_fields_round_trip() {
        let record = record_with_text("What is 5, \"the\" answer?");
        let csv = to_csv(&[record]);
        let data_row = csv.lines().nth(1).unwrap();

        assert!(data_row.contains("\"What is 5, \"\"the\"\" answer?\""));

        // A naive split on "," must recover the original field.
        let quoted: &str = data_row
            .split("\",")
            .next()
            .unwrap()
            .split(",\"")
            .nth(1)
            .unwrap();
        assert_eq!(quoted.replace("\"\"", "\""), "What is 5, \"the\" answer?");
    }

    #[test]
    fn numeric_fields_use_two_decimal_places() {
        let csv = to_csv(&[record_with_text("plain")]);
        let data_row = csv.lines().nth(1).unwrap();
        assert!(data_row.contains("4.50,52.25,47.50,50.00"));
    }

    #[test]
    fn correctness_renders_yes_no() {
        let mut record = record_with_text("plain");
        record.is_correct = true;
        let csv = to_csv(&[record]);
        assert!(csv.lines().nth(1).unwrap().contains(",Yes,"));
    }

    #[test]
    fn json_export_uses_camel_case_keys() {
        let json = to_json(&[record_with_text("plain")]).unwrap();
        assert!(json.contains("\"questionId\": 5"));
        assert!(json.contains("\"cognitiveLoad\": \"Medium\""));
        assert!(json.contains("\"isCorrect\": false"));
    }

    #[test]
    fn filename_embeds_the_date() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 26).unwrap();
        assert_eq!(export_filename(date), "cognitive-test-results-2025-08-26.csv");
    }

    #[test]
    fn rows_terminate_with_crlf() {
        let csv = to_csv(&[record_with_text("plain")]);
        assert!(csv.ends_with("\r\n"));
        assert_eq!(csv.matches("\r\n").count(), 2);
    }
}
