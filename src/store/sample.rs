use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{DifficultyLevel, Question};

/// Draws a fixed mix of easy and hard questions for the sample session.
/// The draw is uniform without replacement and cached until
/// [`reset_selection`](Self::reset_selection), so index lookups stay stable
/// for the lifetime of one session.
#[derive(Debug, Clone)]
pub struct SampleSelector {
    easy_pool: Vec<Question>,
    hard_pool: Vec<Question>,
    selection: Option<Vec<Question>>,
}

impl SampleSelector {
    pub fn new(easy_pool: Vec<Question>, hard_pool: Vec<Question>) -> Self {
        Self {
            easy_pool,
            hard_pool,
            selection: None,
        }
    }

    /// Draws `easy_count` + `hard_count` questions, easy block first. A count
    /// larger than its pool clips to the pool size and logs a warning.
    pub fn select<R: Rng>(&mut self, easy_count: usize, hard_count: usize, rng: &mut R) {
        let mut picked = Vec::with_capacity(easy_count + hard_count);
        picked.extend(draw(&self.easy_pool, easy_count, rng));
        picked.extend(draw(&self.hard_pool, hard_count, rng));
        self.selection = Some(picked);
    }

    /// Stable index lookup into the cached selection.
    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.selection.as_ref().and_then(|s| s.get(index))
    }

    pub fn find(&self, id: u32) -> Option<&Question> {
        self.selection
            .as_ref()
            .and_then(|s| s.iter().find(|q| q.id == id))
    }

    pub fn selected_count(&self) -> usize {
        self.selection.as_ref().map(|s| s.len()).unwrap_or(0)
    }

    pub fn reset_selection(&mut self) {
        self.selection = None;
    }

    /// The built-in sample pools: ten easy questions and sixteen hard ones,
    /// mixing multiple-choice and free-text entries.
    pub fn default_pools() -> Self {
        use DifficultyLevel::{Easy, Hard};

        let easy_pool = vec![
            Question::multiple_choice(101, "What is 15 + 27?", &["42", "32", "52", "22"], "42", Easy),
            Question::multiple_choice(102, "What is 8 × 7?", &["56", "54", "58", "52"], "56", Easy),
            Question::multiple_choice(103, "What is 144 ÷ 12?", &["12", "14", "10", "16"], "12", Easy),
            Question::free_text(104, "What is 25% of 200?", "50", Easy),
            Question::multiple_choice(
                105,
                "What is the square root of 81?",
                &["9", "8", "7", "10"],
                "9",
                Easy,
            ),
            Question::free_text(106, "What is 37 × 9?", "333", Easy),
            Question::multiple_choice(107, "What is 3² + 4²?", &["25", "24", "23", "22"], "25", Easy),
            Question::free_text(108, "What is 1000 - 567?", "433", Easy),
            Question::multiple_choice(109, "What is 12 × 12?", &["144", "124", "134", "154"], "144", Easy),
            Question::free_text(110, "What is 75% of 80?", "60", Easy),
        ];

        let hard_pool = vec![
            Question::free_text(201, "Evaluate: ∫ sin²(x) dx", "x/2 - sin(2x)/4 + C", Hard),
            Question::free_text(202, "Solve: d²y/dx² - 2dy/dx + y = 0", "y = c₁eˣ + c₂xeˣ", Hard),
            Question::free_text(203, "Evaluate the limit: limₓ→∞ (ln x)/x", "0", Hard),
            Question::free_text(
                204,
                "What are the eigenvalues of [[3, 1,2], [0, 2, 3],[1, 5, 6]]?",
                "1,4,6",
                Hard,
            ),
            Question::free_text(205, "Find the sum: ∑ (1/n³) from n=1 to ∞", "1.202", Hard),
            Question::free_text(206, "Evaluate: ∫ e^(-x²) dx from -∞ to ∞", "√π", Hard),
            Question::free_text(207, "Use L'Hôpital's Rule: limₓ→0 (sin x)/x", "1", Hard),
            Question::free_text(208, "Find the modulus of (7 - 24i)", "25", Hard),
            Question::free_text(
                209,
                "If A = {x ∈ z | x² < 20}, B = {x ∈ z | x is odd}, find A ∩ B",
                "{-3,-1,1,3}",
                Hard,
            ),
            Question::free_text(210, "Evaluate: ∫ x·e^x dx", "x·e^x - e^x + C", Hard),
            Question::free_text(211, "Find det of matrix [[1,2,3],[4,5,6],[7,8,9]]", "0", Hard),
            Question::free_text(
                212,
                "Find inverse of [[2,1,0],[1,1,1],[0,1,2]]",
                "[[1,-2,1],[-2,4,-2],[1,-2,1]]",
                Hard,
            ),
            Question::free_text(213, "Evaluate: 421 x 317", "133457", Hard),
            Question::free_text(214, "Solve: ∫ (ln x)/x dx", "(ln x)²/2 + C", Hard),
            Question::free_text(215, "Evaluate: limₓ→0 (1 - cos x)/x²", "1/2", Hard),
            Question::free_text(
                216,
                "Calculate rref of [[1, 2.5, 3.5],[1.3, 2.4, 5.7], [4.5, 2.5, 3.7]]",
                "[[1,0,0],[0,1,0],[0,0,1]]",
                Hard,
            ),
        ];

        Self::new(easy_pool, hard_pool)
    }
}

fn draw<R: Rng>(pool: &[Question], count: usize, rng: &mut R) -> Vec<Question> {
    let clipped = if count > pool.len() {
        tracing::warn!(
            requested = count,
            available = pool.len(),
            "sample pool exhausted, clipping selection"
        );
        pool.len()
    } else {
        count
    };
    pool.choose_multiple(rng, clipped).cloned().collect()
}
