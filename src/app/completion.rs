use super::*;
use crate::quiz::passes;

/// Why `next_phase` refuses to leave the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    ApplicationsPending { remaining: usize },
    QuizNotSubmitted,
    ScoreBelowThreshold { score: usize, threshold: usize },
}

impl Gate {
    pub fn message(&self) -> String {
        match self {
            Gate::ApplicationsPending { remaining: 1 } => {
                "Explore the last application to continue".to_owned()
            }
            Gate::ApplicationsPending { remaining } => {
                format!("Explore {remaining} more applications to continue")
            }
            Gate::QuizNotSubmitted => "Submit the quiz to continue".to_owned(),
            Gate::ScoreBelowThreshold { score, threshold } => {
                format!("{score} correct, {threshold} needed. Try again!")
            }
        }
    }
}

impl LessonShell {
    pub fn completed_application_count(&self) -> usize {
        let total = self.content.applications.len();
        self.state
            .completed_applications
            .iter()
            .filter(|i| **i < total)
            .count()
    }

    pub fn all_applications_completed(&self) -> bool {
        self.completed_application_count() == self.content.applications.len()
    }

    /// Submitted and at or above the pass threshold, when one is set.
    pub fn quiz_passed(&self) -> bool {
        match self.state.quiz.score() {
            Some(score) if self.state.quiz.is_submitted() => {
                passes(score, self.content.gating.pass_threshold)
            }
            _ => false,
        }
    }

    /// The gate guarding entry into `target` by advancing, if it is closed.
    pub fn blocking_gate(&self, target: Phase) -> Option<Gate> {
        match target {
            Phase::Test
                if self.content.gating.require_all_applications
                    && !self.all_applications_completed() =>
            {
                Some(Gate::ApplicationsPending {
                    remaining: self.content.applications.len()
                        - self.completed_application_count(),
                })
            }
            Phase::Mastery => {
                let quiz = &self.state.quiz;
                match (quiz.is_submitted(), quiz.score()) {
                    (true, Some(score)) => match self.content.gating.pass_threshold {
                        Some(threshold) if score < threshold => {
                            Some(Gate::ScoreBelowThreshold { score, threshold })
                        }
                        _ => None,
                    },
                    _ => Some(Gate::QuizNotSubmitted),
                }
            }
            _ => None,
        }
    }

    pub fn can_advance(&self) -> bool {
        self.state
            .phase
            .next()
            .is_some_and(|next| self.blocking_gate(next).is_none())
    }

    /// Reachable by advancing from the start with the learner's current
    /// progress.
    pub fn is_unlocked(&self, phase: Phase) -> bool {
        Phase::ALL[..=phase.index()]
            .iter()
            .all(|p| self.blocking_gate(*p).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_lesson;
    use crate::model::GatingPolicy;

    fn shell_at(phase: Phase) -> LessonShell {
        let mut shell = LessonShell::new(read_lesson(LessonId::ThermalExpansion).expect("content"));
        shell.go_to_phase(phase);
        shell
    }

    #[test]
    fn transfer_needs_every_application() {
        let mut shell = shell_at(Phase::Transfer);
        for i in 0..3 {
            shell.complete_application(i);
        }
        assert_eq!(
            shell.blocking_gate(Phase::Test),
            Some(Gate::ApplicationsPending { remaining: 1 })
        );
        assert!(!shell.next_phase());
        assert_eq!(shell.phase(), Phase::Transfer);

        shell.complete_application(3);
        assert!(shell.can_advance());
        assert!(shell.next_phase());
        assert_eq!(shell.phase(), Phase::Test);
    }

    #[test]
    fn mastery_needs_a_passing_submission() {
        let mut shell = shell_at(Phase::Test);
        assert_eq!(shell.blocking_gate(Phase::Mastery), Some(Gate::QuizNotSubmitted));

        shell.submit_quiz();
        assert!(matches!(
            shell.blocking_gate(Phase::Mastery),
            Some(Gate::ScoreBelowThreshold { score: 0, threshold: 7 })
        ));
        assert!(!shell.next_phase());

        shell.retry_quiz(false);
        let answers: Vec<_> = shell
            .content()
            .quiz
            .iter()
            .map(|q| q.correct_index().expect("one correct"))
            .collect();
        for (q, option) in answers.into_iter().enumerate() {
            shell.record_answer(q, option);
        }
        shell.submit_quiz();
        assert!(shell.quiz_passed());
        assert!(shell.next_phase());
        assert_eq!(shell.phase(), Phase::Mastery);
    }

    #[test]
    fn ungated_lessons_only_need_a_submission() {
        let mut content = read_lesson(LessonId::ThermalExpansion).expect("content");
        content.gating = GatingPolicy::default();
        let mut shell = LessonShell::new(content);
        shell.go_to_phase(Phase::Transfer);
        assert!(shell.next_phase());
        shell.submit_quiz();
        assert!(shell.quiz_passed());
        assert!(shell.next_phase());
    }

    #[test]
    fn unlocked_phases_follow_progress() {
        let mut shell = shell_at(Phase::Transfer);
        assert!(shell.is_unlocked(Phase::Transfer));
        assert!(!shell.is_unlocked(Phase::Test));
        for i in 0..4 {
            shell.complete_application(i);
        }
        assert!(shell.is_unlocked(Phase::Test));
        assert!(!shell.is_unlocked(Phase::Mastery));
    }

    #[test]
    fn gate_messages_read_naturally() {
        assert_eq!(
            Gate::ApplicationsPending { remaining: 2 }.message(),
            "Explore 2 more applications to continue"
        );
        assert!(Gate::ScoreBelowThreshold { score: 5, threshold: 7 }
            .message()
            .starts_with("5 correct"));
    }
}
