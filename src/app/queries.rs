use super::*;
use crate::model::{Explanation, Instructions, PredictionOption, PredictionPrompt};
use crate::physics::Readout;

impl LessonShell {
    // Contenido de la etapa visible (principal o giro)
    pub fn prediction_prompt(&self) -> &PredictionPrompt {
        if self.state.phase.is_twist() {
            &self.content.twist_predict
        } else {
            &self.content.predict
        }
    }

    pub fn instructions(&self) -> &Instructions {
        if self.state.phase.is_twist() {
            &self.content.twist_play
        } else {
            &self.content.play
        }
    }

    pub fn explanation(&self) -> &Explanation {
        if self.state.phase.is_twist() {
            &self.content.twist_review
        } else {
            &self.content.review
        }
    }

    /// The learner's pick for the prompt of the visible stage.
    pub fn chosen_prediction(&self) -> Option<&PredictionOption> {
        let chosen = if self.state.phase.is_twist() {
            self.state.twist_prediction.as_deref()
        } else {
            self.state.prediction.as_deref()
        };
        self.prediction_prompt().option(chosen?)
    }

    pub fn readouts(&self) -> Vec<Readout> {
        self.state.sim.readouts(self.stage())
    }

    pub fn is_application_completed(&self, index: usize) -> bool {
        self.state.completed_applications.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_lesson;

    #[test]
    fn stage_content_follows_the_phase() {
        let mut shell = LessonShell::new(read_lesson(LessonId::ThermalExpansion).expect("content"));
        shell.predict("mm");
        shell.go_to_phase(Phase::Review);
        assert_eq!(shell.explanation().heading, shell.content().review.heading);
        assert_eq!(shell.chosen_prediction().map(|o| o.id.as_str()), Some("mm"));

        shell.go_to_phase(Phase::TwistReview);
        assert_eq!(
            shell.explanation().heading,
            shell.content().twist_review.heading
        );
        assert!(shell.chosen_prediction().is_none());
        assert_eq!(shell.readouts().len(), 2);
    }
}
