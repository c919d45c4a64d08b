use super::*;

impl LessonShell {
    pub fn phase_steps(&self) -> Vec<PhaseStep> {
        Phase::ALL
            .iter()
            .map(|&phase| PhaseStep {
                phase,
                number: phase.index() + 1,
                current: phase == self.state.phase,
                visited: self.has_visited(phase),
                unlocked: self.is_unlocked(phase),
            })
            .collect()
    }

    pub fn application_rows(&self) -> Vec<ApplicationRow> {
        self.content
            .applications
            .iter()
            .enumerate()
            .map(|(index, app)| ApplicationRow {
                index,
                title: app.title.clone(),
                completed: self.is_application_completed(index),
            })
            .collect()
    }

    pub fn quiz_rows(&self) -> Vec<QuizRow> {
        let quiz = &self.state.quiz;
        (0..self.content.quiz.len())
            .map(|q| QuizRow {
                number: q + 1,
                answered: quiz.answer(q).is_some(),
                correct: if quiz.is_submitted() {
                    Some(quiz.is_correct(&self.content.quiz, q).unwrap_or(false))
                } else {
                    None
                },
            })
            .collect()
    }

    pub fn score_summary(&self) -> Option<ScoreSummary> {
        let quiz = &self.state.quiz;
        if !quiz.is_submitted() {
            return None;
        }
        Some(ScoreSummary {
            score: quiz.score()?,
            total: self.content.quiz.len(),
            threshold: self.content.gating.pass_threshold,
            passed: self.quiz_passed(),
        })
    }

    /// How the learner's guess compares with the outcome of the visible
    /// stage.
    pub fn prediction_verdict(&self) -> PredictionVerdict {
        let prompt = self.prediction_prompt();
        let expected = prompt
            .option(&prompt.correct)
            .map(|o| o.text.clone())
            .unwrap_or_else(|| prompt.correct.clone());
        let chosen = self.chosen_prediction();
        PredictionVerdict {
            matched: chosen.is_some_and(|o| prompt.is_correct(&o.id)),
            chosen: chosen.map(|o| o.text.clone()),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_lesson;

    fn shell() -> LessonShell {
        LessonShell::new(read_lesson(LessonId::SolarTemperature).expect("content"))
    }

    #[test]
    fn steps_mark_current_and_locked() {
        let mut shell = shell();
        shell.go_to_phase(Phase::Transfer);
        let steps = shell.phase_steps();
        assert_eq!(steps.len(), 10);
        assert!(steps[7].current);
        assert!(steps[0].visited);
        assert!(!steps[1].visited && steps[1].unlocked);
        assert!(!steps[8].enabled());
    }

    #[test]
    fn quiz_rows_reveal_correctness_after_submit() {
        let mut shell = shell();
        let right = shell.content().quiz[0].correct_index().expect("one correct");
        shell.record_answer(0, right);
        assert_eq!(shell.quiz_rows()[0].correct, None);
        assert!(shell.score_summary().is_none());

        shell.submit_quiz();
        let rows = shell.quiz_rows();
        assert_eq!(rows[0].correct, Some(true));
        assert_eq!(rows[1].correct, Some(false));
        let summary = shell.score_summary().expect("submitted");
        assert_eq!((summary.score, summary.total), (1, 10));
        assert!(!summary.passed);
    }

    #[test]
    fn verdict_compares_with_expected_option() {
        let mut shell = shell();
        shell.predict("drops");
        shell.go_to_phase(Phase::Review);
        let verdict = shell.prediction_verdict();
        assert!(verdict.matched);
        assert_eq!(verdict.chosen.as_deref(), Some(verdict.expected.as_str()));
    }

    #[test]
    fn application_rows_track_completion() {
        let mut shell = shell();
        shell.complete_application(1);
        let rows = shell.application_rows();
        assert_eq!(rows.len(), 4);
        assert!(rows[1].completed && !rows[0].completed);
    }
}
