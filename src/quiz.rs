use regex::Regex;

/// A generated quiz never holds more than this many questions.
pub const MAX_QUESTIONS: usize = 3;

/// Stored as the reference answer when the lookup for a question fails.
pub const ANSWER_SENTINEL: &str = "N/A";

/// Per-quiz state. The three vectors are positionally aligned and always kept
/// the same length; `evaluated` gates the graded results view.
#[derive(Debug, Default)]
pub struct QuizState {
    pub questions: Vec<String>,
    pub reference_answers: Vec<String>,
    pub user_answers: Vec<String>,
    pub evaluated: bool,
    pub current: usize,
    pub cursor: usize,
}

impl QuizState {
    /// Builds a fresh quiz from generated questions and their reference
    /// answers. Missing reference answers are padded with the sentinel and
    /// extras dropped, so the length invariant holds no matter what the
    /// generation step produced.
    pub fn from_generated(questions: Vec<String>, mut reference_answers: Vec<String>) -> Self {
        reference_answers.resize(questions.len(), ANSWER_SENTINEL.to_string());
        let user_answers = vec![String::new(); questions.len()];
        QuizState {
            questions,
            reference_answers,
            user_answers,
            evaluated: false,
            current: 0,
            cursor: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Per-question pass/fail, aligned with `questions`.
    pub fn grades(&self) -> Vec<bool> {
        self.user_answers
            .iter()
            .zip(&self.reference_answers)
            .map(|(user, reference)| grade(user, reference))
            .collect()
    }
}

/// Exact, case-insensitive, whitespace-trimmed equality. No partial credit.
pub fn grade(user_answer: &str, reference_answer: &str) -> bool {
    user_answer.trim().to_lowercase() == reference_answer.trim().to_lowercase()
}

/// Splits free-text model output into sentence-like units. Lines are treated
/// as hard boundaries; within a line, units end at `.`, `!` or `?`. Empty
/// units are discarded, everything else is kept as-is.
pub fn split_sentences(text: &str) -> Vec<String> {
    let unit_re = Regex::new(r"[^.!?]*[.!?]+|[^.!?]+$").unwrap();
    let mut units = Vec::new();

    for line in text.lines() {
        for m in unit_re.find_iter(line) {
            let unit = m.as_str().trim();
            if !unit.is_empty() {
                units.push(unit.to_string());
            }
        }
    }

    units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_exact_match() {
        assert!(grade("Paris", "Paris"));
    }

    #[test]
    fn test_grade_case_and_whitespace_insensitive() {
        assert!(grade(" paris ", "Paris"));
        assert!(grade("PARIS", "paris"));
    }

    #[test]
    fn test_grade_rejects_different_answers() {
        assert!(!grade("London", "Paris"));
    }

    #[test]
    fn test_grade_no_partial_credit() {
        assert!(!grade("Paris, France", "Paris"));
    }

    #[test]
    fn test_grade_empty_against_sentinel() {
        assert!(!grade("", ANSWER_SENTINEL));
    }

    #[test]
    fn test_split_sentences_basic() {
        let units = split_sentences("What is MANET? Name one routing protocol. Explain why.");
        assert_eq!(
            units,
            vec![
                "What is MANET?",
                "Name one routing protocol.",
                "Explain why."
            ]
        );
    }

    #[test]
    fn test_split_sentences_newlines_are_boundaries() {
        let units = split_sentences("First question\nSecond question?\nThird");
        assert_eq!(units, vec!["First question", "Second question?", "Third"]);
    }

    #[test]
    fn test_split_sentences_trailing_fragment_kept() {
        let units = split_sentences("A full sentence. And a trailing fragment");
        assert_eq!(units, vec!["A full sentence.", "And a trailing fragment"]);
    }

    #[test]
    fn test_split_sentences_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\n  ").is_empty());
    }

    #[test]
    fn test_quiz_sequences_equal_length() {
        let quiz = QuizState::from_generated(
            vec!["Q1?".into(), "Q2?".into(), "Q3?".into()],
            vec!["A1".into(), "A2".into(), "A3".into()],
        );
        assert_eq!(quiz.questions.len(), quiz.reference_answers.len());
        assert_eq!(quiz.questions.len(), quiz.user_answers.len());
        assert!(!quiz.evaluated);
    }

    #[test]
    fn test_quiz_pads_missing_reference_answers() {
        let quiz = QuizState::from_generated(vec!["Q1?".into(), "Q2?".into()], vec!["A1".into()]);
        assert_eq!(quiz.reference_answers, vec!["A1", ANSWER_SENTINEL]);
        assert_eq!(quiz.user_answers.len(), 2);
    }

    #[test]
    fn test_quiz_shorter_than_three_is_fine() {
        let quiz = QuizState::from_generated(vec!["Only one?".into()], vec!["yes".into()]);
        assert_eq!(quiz.len(), 1);
        assert!(!quiz.is_empty());
    }

    #[test]
    fn test_quiz_grades_align_with_questions() {
        let mut quiz = QuizState::from_generated(
            vec!["Capital of France?".into(), "Capital of Italy?".into()],
            vec!["Paris".into(), "Rome".into()],
        );
        quiz.user_answers[0] = " paris ".into();
        quiz.user_answers[1] = "Milan".into();

        assert_eq!(quiz.grades(), vec![true, false]);
    }

    #[test]
    fn test_empty_quiz_grades_empty() {
        let quiz = QuizState::default();
        assert!(quiz.grades().is_empty());
        assert!(quiz.is_empty());
    }
}
