use crate::model::QuizQuestion;

/// Result of grading a submitted quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
    pub passed: bool,
}

/// Answer sheet for the test phase: one slot per question, empty until
/// answered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizSession {
    answers: Vec<Option<usize>>,
    submitted: bool,
    score: Option<usize>,
}

impl QuizSession {
    pub fn new(question_count: usize) -> Self {
        Self {
            answers: vec![None; question_count],
            submitted: false,
            score: None,
        }
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Defined only once the quiz has been submitted.
    pub fn score(&self) -> Option<usize> {
        self.score
    }

    /// Overwrites the slot for `question`. Returns `false` when the indices
    /// do not exist or the sheet is already submitted.
    pub fn record_answer(
        &mut self,
        questions: &[QuizQuestion],
        question: usize,
        option: usize,
    ) -> bool {
        if self.submitted {
            log::warn!("answer to question {question} ignored: quiz already submitted");
            return false;
        }
        let valid = questions
            .get(question)
            .map(|q| option < q.options.len())
            .unwrap_or(false);
        let Some(slot) = self.answers.get_mut(question).filter(|_| valid) else {
            log::warn!("ignoring answer {option} for unknown question {question}");
            return false;
        };
        *slot = Some(option);
        true
    }

    /// Grades the sheet. Unanswered slots count as wrong. Submitting twice
    /// returns the first result.
    pub fn submit(&mut self, questions: &[QuizQuestion], threshold: Option<usize>) -> QuizOutcome {
        let score = match self.score {
            Some(score) if self.submitted => score,
            _ => score_answers(questions, &self.answers),
        };
        self.submitted = true;
        self.score = Some(score);
        QuizOutcome {
            score,
            total: self.answers.len(),
            passed: passes(score, threshold),
        }
    }

    /// Correctness of one answered slot, for feedback after submission.
    pub fn is_correct(&self, questions: &[QuizQuestion], question: usize) -> Option<bool> {
        let chosen = self.answer(question)?;
        let q = questions.get(question)?;
        Some(q.correct_index() == Some(chosen))
    }

    pub fn retry(&mut self) {
        self.answers.iter_mut().for_each(|a| *a = None);
        self.submitted = false;
        self.score = None;
    }
}

/// Number of slots whose chosen option is the question's correct option.
pub fn score_answers(questions: &[QuizQuestion], answers: &[Option<usize>]) -> usize {
    questions
        .iter()
        .zip(answers)
        .filter(|(q, a)| a.is_some() && **a == q.correct_index())
        .count()
}

pub fn passes(score: usize, threshold: Option<usize>) -> bool {
    threshold.is_none_or(|t| score >= t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizOption;

    fn question(correct: usize) -> QuizQuestion {
        QuizQuestion {
            prompt: "?".into(),
            options: (0..4)
                .map(|i| QuizOption {
                    text: format!("option {i}"),
                    correct: i == correct,
                })
                .collect(),
            explanation: String::new(),
        }
    }

    fn bank() -> Vec<QuizQuestion> {
        (0..10).map(|i| question(i % 4)).collect()
    }

    #[test]
    fn score_is_undefined_until_submit() {
        let questions = bank();
        let mut quiz = QuizSession::new(questions.len());
        assert!(quiz.record_answer(&questions, 0, 0));
        assert_eq!(quiz.score(), None);
        quiz.submit(&questions, None);
        assert_eq!(quiz.score(), Some(1));
    }

    #[test]
    fn empty_sheet_scores_zero() {
        let questions = bank();
        let mut quiz = QuizSession::new(questions.len());
        let outcome = quiz.submit(&questions, Some(7));
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.total, 10);
        assert!(!outcome.passed);
    }

    #[test]
    fn all_correct_scores_question_count() {
        let questions = bank();
        let mut quiz = QuizSession::new(questions.len());
        for (i, q) in questions.iter().enumerate() {
            quiz.record_answer(&questions, i, q.correct_index().expect("one correct"));
        }
        assert!(quiz.is_complete());
        let outcome = quiz.submit(&questions, Some(8));
        assert_eq!(outcome.score, 10);
        assert!(outcome.passed);
    }

    #[test]
    fn score_counts_only_matching_slots() {
        let questions = bank();
        let mut quiz = QuizSession::new(questions.len());
        // correct for even questions, wrong for odd ones
        for (i, q) in questions.iter().enumerate() {
            let right = q.correct_index().expect("one correct");
            let choice = if i % 2 == 0 { right } else { (right + 1) % 4 };
            quiz.record_answer(&questions, i, choice);
        }
        assert_eq!(quiz.submit(&questions, None).score, 5);
        assert_eq!(quiz.is_correct(&questions, 0), Some(true));
        assert_eq!(quiz.is_correct(&questions, 1), Some(false));
    }

    #[test]
    fn answers_overwrite_and_reject_bad_indices() {
        let questions = bank();
        let mut quiz = QuizSession::new(questions.len());
        quiz.record_answer(&questions, 2, 1);
        quiz.record_answer(&questions, 2, 2);
        assert_eq!(quiz.answer(2), Some(2));
        assert!(!quiz.record_answer(&questions, 10, 0));
        assert!(!quiz.record_answer(&questions, 0, 4));
        assert_eq!(quiz.answered_count(), 1);
    }

    #[test]
    fn submitted_sheet_is_locked_until_retry() {
        let questions = bank();
        let mut quiz = QuizSession::new(questions.len());
        quiz.submit(&questions, None);
        assert!(!quiz.record_answer(&questions, 0, 0));

        quiz.retry();
        assert!(!quiz.is_submitted());
        assert_eq!(quiz.score(), None);
        assert_eq!(quiz.answered_count(), 0);
        assert_eq!(quiz.answers().len(), 10);
        assert!(quiz.record_answer(&questions, 0, 0));
    }

    #[test]
    fn no_threshold_passes_any_submission() {
        assert!(passes(0, None));
        assert!(passes(7, Some(7)));
        assert!(!passes(6, Some(7)));
    }
}
