use super::*;

impl LessonShell {
    /// 1-based position of the current phase, e.g. `(3, 10)`.
    pub fn position(&self) -> (usize, usize) {
        (self.state.phase.index() + 1, Phase::ALL.len())
    }

    pub fn progress_fraction(&self) -> f32 {
        let (current, total) = self.position();
        current as f32 / total as f32
    }

    pub fn has_visited(&self, phase: Phase) -> bool {
        self.state.visited.contains(&phase)
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase == Phase::LAST
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_lesson;

    #[test]
    fn position_tracks_the_phase() {
        let mut shell = LessonShell::new(read_lesson(LessonId::SolarTemperature).expect("content"));
        assert_eq!(shell.position(), (1, 10));
        shell.go_to_phase(Phase::Mastery);
        assert_eq!(shell.position(), (10, 10));
        assert!((shell.progress_fraction() - 1.0).abs() < f32::EPSILON);
        assert!(shell.is_finished());
        assert!(shell.has_visited(Phase::Hook));
        assert!(!shell.has_visited(Phase::Play));
    }
}
