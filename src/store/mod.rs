mod sample;

pub use sample::SampleSelector;

use crate::types::{DifficultyLevel, Question};

/// Static question catalog partitioned by difficulty tier. Seeded once at
/// construction; lookups return the same stable order on every call.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    easy: Vec<Question>,
    medium: Vec<Question>,
    hard: Vec<Question>,
}

impl QuestionStore {
    pub fn new(questions: Vec<Question>) -> Self {
        let mut store = Self {
            easy: Vec::new(),
            medium: Vec::new(),
            hard: Vec::new(),
        };
        for question in questions {
            match question.difficulty {
                DifficultyLevel::Easy => store.easy.push(question),
                DifficultyLevel::Medium => store.medium.push(question),
                DifficultyLevel::Hard => store.hard.push(question),
            }
        }
        store
    }

    pub fn questions_by_difficulty(&self, tier: DifficultyLevel) -> &[Question] {
        match tier {
            DifficultyLevel::Easy => &self.easy,
            DifficultyLevel::Medium => &self.medium,
            DifficultyLevel::Hard => &self.hard,
        }
    }

    pub fn total_count(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }

    pub fn find(&self, id: u32) -> Option<&Question> {
        self.easy
            .iter()
            .chain(self.medium.iter())
            .chain(self.hard.iter())
            .find(|q| q.id == id)
    }

    /// The built-in arithmetic catalog used by the full assessment:
    /// four questions per tier.
    pub fn default_catalog() -> Self {
        use DifficultyLevel::{Easy, Hard, Medium};

        Self::new(vec![
            Question::multiple_choice(1, "What is 5 + 3?", &["7", "8", "9", "10"], "8", Easy),
            Question::multiple_choice(2, "What is 12 - 4?", &["6", "7", "8", "9"], "8", Easy),
            Question::multiple_choice(3, "What is 9 × 3?", &["18", "21", "24", "27"], "27", Easy),
            Question::multiple_choice(4, "What is 36 ÷ 6?", &["4", "5", "6", "7"], "6", Easy),
            Question::multiple_choice(
                5,
                "If x + 8 = 15, what is x?",
                &["5", "6", "7", "8"],
                "7",
                Medium,
            ),
            Question::multiple_choice(
                6,
                "Solve for y: 3y - 7 = 14",
                &["5", "6", "7", "8"],
                "7",
                Medium,
            ),
            Question::multiple_choice(
                7,
                "What is the value of 3² + 4²?",
                &["25", "24", "23", "22"],
                "25",
                Medium,
            ),
            Question::multiple_choice(
                8,
                "Calculate: (8 × 5) + (7 × 2)",
                &["49", "50", "51", "54"],
                "54",
                Medium,
            ),
            Question::multiple_choice(
                9,
                "Solve for x: 2x² - 5x - 3 = 0",
                &[
                    "x = 3, x = -0.5",
                    "x = 3, x = -1",
                    "x = 2, x = -0.5",
                    "x = 2, x = -1",
                ],
                "x = 3, x = -0.5",
                Hard,
            ),
            Question::multiple_choice(
                10,
                "Find the derivative of f(x) = x³ - 2x² + 4x - 1",
                &[
                    "f'(x) = 3x² - 4x + 4",
                    "f'(x) = 3x² - 4x",
                    "f'(x) = 2x - 2",
                    "f'(x) = 3x - 4",
                ],
                "f'(x) = 3x² - 4x + 4",
                Hard,
            ),
            Question::multiple_choice(
                11,
                "Evaluate ∫(2x - 3)dx from x=1 to x=4",
                &["6.5", "7.5", "8.5", "9.5"],
                "7.5",
                Hard,
            ),
            Question::multiple_choice(
                12,
                "A quadratic function has roots at x = 2 and x = -3, and passes through the point (1, 12). Find the function.",
                &[
                    "f(x) = 2x² + 2x - 12",
                    "f(x) = 2x² + 2x - 6",
                    "f(x) = -2x² - 2x + 12",
                    "f(x) = -2x² - 2x + 6",
                ],
                "f(x) = 2x² + 2x - 12",
                Hard,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_partitions_by_tier() {
        let store = QuestionStore::default_catalog();
        assert_eq!(store.total_count(), 12);
        assert_eq!(store.questions_by_difficulty(DifficultyLevel::Easy).len(), 4);
        assert_eq!(store.questions_by_difficulty(DifficultyLevel::Medium).len(), 4);
        assert_eq!(store.questions_by_difficulty(DifficultyLevel::Hard).len(), 4);
    }

    #[test]
    fn lookup_order_is_stable() {
        let store = QuestionStore::default_catalog();
        let first: Vec<u32> = store
            .questions_by_difficulty(DifficultyLevel::Medium)
            .iter()
            .map(|q| q.id)
            .collect();
        let second: Vec<u32> = store
            .questions_by_difficulty(DifficultyLevel::Medium)
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![5, 6, 7, 8]);
    }

    #[test]
    fn find_locates_any_tier() {
        let store = QuestionStore::default_catalog();
        assert_eq!(store.find(1).map(|q| q.difficulty), Some(DifficultyLevel::Easy));
        assert_eq!(store.find(12).map(|q| q.difficulty), Some(DifficultyLevel::Hard));
        assert!(store.find(999).is_none());
    }
}
