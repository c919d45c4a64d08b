use super::*;
use crate::model::PredictionPrompt;
use crate::quiz::QuizOutcome;

/// Everything a widget can ask the shell to do. Views collect these while
/// drawing and the frame loop applies them afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum LessonIntent {
    NextPhase,
    PreviousPhase,
    GoToPhase(Phase),
    Predict(String),
    TwistPredict(String),
    CompleteApplication(usize),
    Answer { question: usize, option: usize },
    SubmitQuiz,
    RetryQuiz { back_to_hook: bool },
    Restart,
    SetInputs(SimInputs),
    ResetInputs,
    ToggleAnimation,
}

impl LessonShell {
    pub fn dispatch(&mut self, intent: LessonIntent) {
        log::debug!("{}: {intent:?}", self.content.id);
        match intent {
            LessonIntent::NextPhase => {
                self.next_phase();
            }
            LessonIntent::PreviousPhase => {
                self.prev_phase();
            }
            LessonIntent::GoToPhase(phase) => self.go_to_phase(phase),
            LessonIntent::Predict(id) => {
                self.predict(&id);
            }
            LessonIntent::TwistPredict(id) => {
                self.twist_predict(&id);
            }
            LessonIntent::CompleteApplication(index) => {
                self.complete_application(index);
            }
            LessonIntent::Answer { question, option } => {
                self.record_answer(question, option);
            }
            LessonIntent::SubmitQuiz => {
                self.submit_quiz();
            }
            LessonIntent::RetryQuiz { back_to_hook } => self.retry_quiz(back_to_hook),
            LessonIntent::Restart => self.restart(),
            LessonIntent::SetInputs(sim) => {
                self.set_inputs(sim);
            }
            LessonIntent::ResetInputs => self.reset_inputs(),
            LessonIntent::ToggleAnimation => self.toggle_animation(),
        }
    }

    /// Records the main prediction. Choosing again replaces it.
    pub fn predict(&mut self, option_id: &str) -> bool {
        let Some(matches_outcome) = checked_choice(&self.content.predict, option_id) else {
            log::warn!("{}: unknown prediction '{option_id}'", self.content.id);
            return false;
        };
        self.state.prediction = Some(option_id.to_owned());
        self.emit(EventDetail::PredictionMade {
            option_id: option_id.to_owned(),
            matches_outcome,
        });
        true
    }

    pub fn twist_predict(&mut self, option_id: &str) -> bool {
        let Some(matches_outcome) = checked_choice(&self.content.twist_predict, option_id) else {
            log::warn!("{}: unknown twist prediction '{option_id}'", self.content.id);
            return false;
        };
        self.state.twist_prediction = Some(option_id.to_owned());
        self.emit(EventDetail::TwistPredictionMade {
            option_id: option_id.to_owned(),
            matches_outcome,
        });
        true
    }

    /// Marks an application explored. Returns `false` for an unknown index
    /// or one already explored; neither emits an event.
    pub fn complete_application(&mut self, index: usize) -> bool {
        let Some(app) = self.content.applications.get(index) else {
            log::warn!("{}: no application {index}", self.content.id);
            return false;
        };
        if !self.state.completed_applications.insert(index) {
            return false;
        }
        let title = app.title.clone();
        self.emit(EventDetail::ApplicationCompleted {
            index,
            title,
            completed: self.completed_application_count(),
            total: self.content.applications.len(),
        });
        true
    }

    pub fn record_answer(&mut self, question: usize, option: usize) -> bool {
        self.state
            .quiz
            .record_answer(&self.content.quiz, question, option)
    }

    /// Scores the sheet. Submitting again returns the same outcome and
    /// reports nothing new.
    pub fn submit_quiz(&mut self) -> QuizOutcome {
        let resubmitted = self.state.quiz.is_submitted();
        let outcome = self
            .state
            .quiz
            .submit(&self.content.quiz, self.content.gating.pass_threshold);
        if resubmitted {
            return outcome;
        }
        log::info!(
            "{}: quiz submitted {}/{} (passed: {})",
            self.content.id,
            outcome.score,
            outcome.total,
            outcome.passed
        );
        self.emit(EventDetail::QuizSubmitted {
            score: outcome.score,
            total: outcome.total,
            passed: outcome.passed,
        });
        outcome
    }

    /// Replaces the slider state. Inputs for another lesson are refused and
    /// out-of-range values are clamped.
    pub fn set_inputs(&mut self, sim: SimInputs) -> bool {
        if sim.lesson() != self.content.id {
            log::warn!(
                "{}: ignoring inputs meant for {}",
                self.content.id,
                sim.lesson()
            );
            return false;
        }
        self.state.sim = sim.clamped();
        true
    }
}

/// Whether `option_id` is the expected answer, or `None` when it is not an
/// option of the prompt.
fn checked_choice(prompt: &PredictionPrompt, option_id: &str) -> Option<bool> {
    prompt.option(option_id)?;
    Some(prompt.is_correct(option_id))
}
