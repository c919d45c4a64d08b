use super::*;

impl LessonShell {
    /// Clears the answer sheet. With `back_to_hook` the learner also returns
    /// to the first phase; everything else they did is kept.
    pub fn retry_quiz(&mut self, back_to_hook: bool) {
        self.state.quiz.retry();
        self.emit(EventDetail::QuizRetried { back_to_hook });
        if back_to_hook {
            self.go_to_phase(Phase::FIRST);
        }
    }

    /// Wipes the whole session and starts over at the hook.
    pub fn restart(&mut self) {
        let from = self.state.phase;
        self.state = LessonState::new(&self.content);
        log::info!("{}: restarted", self.content.id);
        if from != Phase::FIRST {
            self.emit(EventDetail::PhaseChanged {
                from,
                to: Phase::FIRST,
            });
        }
    }

    pub fn reset_inputs(&mut self) {
        self.stop_animation();
        self.state.sim = SimInputs::for_lesson(self.content.id);
    }
}
