use super::*;

impl LessonShell {
    /// Jumps straight to `target`. Gates are not consulted here; only
    /// [`LessonShell::next_phase`] enforces them.
    pub fn go_to_phase(&mut self, target: Phase) {
        let from = self.state.phase;
        if from == target {
            return;
        }
        // la animación pertenece a la fase que se abandona
        self.stop_animation();
        self.state.phase = target;
        self.state.visited.insert(target);
        log::info!("{}: {from} -> {target}", self.content.id);
        self.emit(EventDetail::PhaseChanged { from, to: target });
    }

    /// Advances one phase when the current gate allows it. Returns whether
    /// the phase changed.
    pub fn next_phase(&mut self) -> bool {
        let Some(next) = self.state.phase.next() else {
            return false;
        };
        if let Some(gate) = self.blocking_gate(next) {
            log::debug!("{}: {} blocked: {}", self.content.id, next, gate.message());
            return false;
        }
        self.go_to_phase(next);
        true
    }

    pub fn prev_phase(&mut self) -> bool {
        let Some(prev) = self.state.phase.prev() else {
            return false;
        };
        self.go_to_phase(prev);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_lesson;
    use std::cell::RefCell;

    fn shell() -> LessonShell {
        LessonShell::new(read_lesson(LessonId::RocketTurnaround).expect("content"))
    }

    #[test]
    fn go_to_phase_is_idempotent() {
        let mut shell = shell();
        shell.go_to_phase(Phase::Review);
        let once = shell.state().clone();
        shell.go_to_phase(Phase::Review);
        assert_eq!(shell.state(), &once);
    }

    #[test]
    fn go_to_phase_ignores_gates() {
        let mut shell = shell();
        shell.go_to_phase(Phase::Mastery);
        assert_eq!(shell.phase(), Phase::Mastery);
        assert!(shell.state().visited.contains(&Phase::Mastery));
    }

    #[test]
    fn prev_and_next_stop_at_the_ends() {
        let mut shell = shell();
        assert!(!shell.prev_phase());
        assert_eq!(shell.phase(), Phase::Hook);
        shell.go_to_phase(Phase::Mastery);
        assert!(!shell.next_phase());
        assert!(shell.prev_phase());
        assert_eq!(shell.phase(), Phase::Test);
    }

    #[test]
    fn ungated_steps_advance_freely() {
        let mut shell = shell();
        for expected in &Phase::ALL[1..=Phase::Transfer.index()] {
            assert!(shell.next_phase());
            assert_eq!(shell.phase(), *expected);
        }
    }

    #[test]
    fn phase_changes_are_reported_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let seen = Rc::clone(&seen);
            move |e: &LessonEvent| {
                if let EventDetail::PhaseChanged { from, to } = e.detail {
                    seen.borrow_mut().push((from, to));
                }
            }
        };
        let mut shell = shell().with_sink(Rc::new(sink));
        shell.next_phase();
        shell.go_to_phase(Phase::Predict);
        shell.prev_phase();
        assert_eq!(
            *seen.borrow(),
            vec![(Phase::Hook, Phase::Predict), (Phase::Predict, Phase::Hook)]
        );
    }
}
