// Quiz domain types: questions, a scored session, and the end-of-run report.
// Everything here is pure state and arithmetic; the console shell in `ui`
// drives these types and owns all printing.

use std::fmt;

use serde::Deserialize;

/// A single multiple-choice question as stored in a quiz file.
///
/// Invariants (`options.len() >= 2`, `correct_index` in range) are enforced
/// by the catalog loader before a `Question` reaches a session.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl Question {
    /// Check whether the selected 0-based option is the correct one.
    pub fn is_correct(&self, selected_index: usize) -> bool {
        selected_index == self.correct_index
    }

    /// Text of the correct option, shown when the player answers wrong.
    pub fn correct_text(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// Outcome of submitting one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong { correct_answer: String },
}

/// One loaded category's questions plus the running score of a playthrough.
#[derive(Debug, Clone)]
pub struct QuizSession {
    category: String,
    questions: Vec<Question>,
    score: u32,
}

impl QuizSession {
    pub fn new(category: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            category: category.into(),
            questions,
            score: 0,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Zero the score so the session can be replayed within one process.
    /// Called at the start of every run.
    pub fn reset(&mut self) {
        self.score = 0;
    }

    /// Grade the selected 0-based option for the given question, updating
    /// the score. A wrong answer carries the correct option's text so the
    /// caller can reveal it.
    pub fn submit(&mut self, question_index: usize, selected_index: usize) -> Verdict {
        let question = &self.questions[question_index];
        if question.is_correct(selected_index) {
            self.score += 1;
            Verdict::Correct
        } else {
            Verdict::Wrong {
                correct_answer: question.correct_text().to_string(),
            }
        }
    }

    /// Snapshot of the current run for reporting.
    pub fn report(&self) -> SessionReport {
        SessionReport {
            category: self.category.clone(),
            score: self.score,
            total: self.questions.len(),
        }
    }
}

/// Final results of a quiz run.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub category: String,
    pub score: u32,
    pub total: usize,
}

impl SessionReport {
    /// Score as a percentage. A session with no questions reports 0.0
    /// rather than dividing by zero.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f64 / self.total as f64 * 100.0
    }

    pub fn feedback(&self) -> Feedback {
        Feedback::from_percentage(self.percentage())
    }
}

/// Qualitative feedback bucket derived from the final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Excellent,
    GoodJob,
    FairEffort,
    TryAgain,
}

impl Feedback {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Feedback::Excellent
        } else if percentage >= 70.0 {
            Feedback::GoodJob
        } else if percentage >= 50.0 {
            Feedback::FairEffort
        } else {
            Feedback::TryAgain
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Feedback::Excellent => "Excellent!",
            Feedback::GoodJob => "Good job!",
            Feedback::FairEffort => "Fair effort!",
            Feedback::TryAgain => "Try again!",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct_index: usize) -> Question {
        Question {
            text: "What is 2 + 2?".to_string(),
            options: vec![
                "3".to_string(),
                "4".to_string(),
                "5".to_string(),
                "6".to_string(),
            ],
            correct_index,
        }
    }

    fn session(correct_indices: &[usize]) -> QuizSession {
        let questions = correct_indices.iter().map(|&i| question(i)).collect();
        QuizSession::new("math", questions)
    }

    #[test]
    fn is_correct_holds_exactly_on_correct_index() {
        let q = question(1);
        for selected in 0..q.options.len() {
            assert_eq!(q.is_correct(selected), selected == 1);
        }
    }

    #[test]
    fn submit_scores_correct_answers() {
        let mut s = session(&[1, 2]);
        assert_eq!(s.submit(0, 1), Verdict::Correct);
        assert_eq!(s.score(), 1);
        assert_eq!(
            s.submit(1, 0),
            Verdict::Wrong {
                correct_answer: "5".to_string()
            }
        );
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn reset_zeroes_score_between_runs() {
        let mut s = session(&[1]);
        s.submit(0, 1);
        assert_eq!(s.score(), 1);

        s.reset();
        assert_eq!(s.score(), 0);
        s.submit(0, 1);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn report_percentage_and_feedback_tiers() {
        let cases = [
            (3, 4, 75.0, Feedback::GoodJob),
            (4, 4, 100.0, Feedback::Excellent),
            (1, 4, 25.0, Feedback::TryAgain),
            (2, 4, 50.0, Feedback::FairEffort),
        ];
        for (score, total, percentage, feedback) in cases {
            let report = SessionReport {
                category: "math".to_string(),
                score,
                total,
            };
            assert_eq!(report.percentage(), percentage);
            assert_eq!(report.feedback(), feedback);
            assert_eq!(
                format!("{:.1}%", report.percentage()),
                format!("{percentage:.1}%")
            );
        }
    }

    #[test]
    fn feedback_tier_boundaries() {
        assert_eq!(Feedback::from_percentage(90.0), Feedback::Excellent);
        assert_eq!(Feedback::from_percentage(89.9), Feedback::GoodJob);
        assert_eq!(Feedback::from_percentage(70.0), Feedback::GoodJob);
        assert_eq!(Feedback::from_percentage(69.9), Feedback::FairEffort);
        assert_eq!(Feedback::from_percentage(50.0), Feedback::FairEffort);
        assert_eq!(Feedback::from_percentage(49.9), Feedback::TryAgain);
    }

    #[test]
    fn empty_session_reports_zero_percent() {
        let report = QuizSession::new("empty", Vec::new()).report();
        assert_eq!(report.percentage(), 0.0);
        assert_eq!(report.feedback(), Feedback::TryAgain);
    }

    #[test]
    fn feedback_display_matches_tier_text() {
        assert_eq!(Feedback::Excellent.to_string(), "Excellent!");
        assert_eq!(Feedback::GoodJob.to_string(), "Good job!");
        assert_eq!(Feedback::FairEffort.to_string(), "Fair effort!");
        assert_eq!(Feedback::TryAgain.to_string(), "Try again!");
    }
}
