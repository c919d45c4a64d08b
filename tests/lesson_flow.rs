use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};

use physics_explainers::data::{read_catalog, read_lesson};
use physics_explainers::events::{EventDetail, EventSink, LessonEvent};
use physics_explainers::model::{LessonId, Phase};
use physics_explainers::physics::{SimInputs, Stage, rocket, solar, sound};
use physics_explainers::time::Clock;
use physics_explainers::{LessonIntent, LessonShell};

type Recorded = Rc<RefCell<Vec<LessonEvent>>>;

fn fixed_test_time() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).single().expect("valid timestamp")
}

fn recording_shell(lesson: LessonId) -> (LessonShell, Recorded) {
    let events: Recorded = Rc::new(RefCell::new(Vec::new()));
    let sink: Rc<dyn EventSink> = {
        let events = Rc::clone(&events);
        Rc::new(move |e: &LessonEvent| events.borrow_mut().push(e.clone()))
    };
    let shell = LessonShell::new(read_lesson(lesson).expect("bundled lesson"))
        .with_sink(sink)
        .with_clock(Clock::fixed(fixed_test_time()));
    (shell, events)
}

fn answer_everything_correctly(shell: &mut LessonShell) {
    let answers: Vec<usize> = shell
        .content()
        .quiz
        .iter()
        .map(|q| q.correct_index().expect("one correct option"))
        .collect();
    for (question, option) in answers.into_iter().enumerate() {
        shell.dispatch(LessonIntent::Answer { question, option });
    }
}

/// Satisfies whichever gate guards the step out of the current phase.
fn satisfy_gate(shell: &mut LessonShell) {
    match shell.phase() {
        Phase::Transfer => {
            for i in 0..shell.content().applications.len() {
                shell.dispatch(LessonIntent::CompleteApplication(i));
            }
        }
        Phase::Test => {
            answer_everything_correctly(shell);
            shell.dispatch(LessonIntent::SubmitQuiz);
        }
        _ => {}
    }
}

#[test]
fn every_lesson_reaches_mastery_in_nine_steps() {
    for lesson in LessonId::ALL {
        let (mut shell, _) = recording_shell(lesson);
        let mut steps = 0;
        while shell.phase() != Phase::Mastery {
            satisfy_gate(&mut shell);
            assert!(shell.next_phase(), "{lesson} stuck at {}", shell.phase());
            steps += 1;
        }
        assert_eq!(steps, 9, "{lesson}");
        assert!(!shell.next_phase());
    }
}

#[test]
fn transfer_unlocks_test_only_after_all_four_applications() {
    let (mut shell, _) = recording_shell(LessonId::SolarTemperature);
    shell.dispatch(LessonIntent::GoToPhase(Phase::Transfer));
    for i in 0..3 {
        shell.dispatch(LessonIntent::CompleteApplication(i));
        shell.dispatch(LessonIntent::NextPhase);
        assert_eq!(shell.phase(), Phase::Transfer);
    }
    shell.dispatch(LessonIntent::CompleteApplication(3));
    shell.dispatch(LessonIntent::NextPhase);
    assert_eq!(shell.phase(), Phase::Test);
}

#[test]
fn ten_correct_answers_pass() {
    let (mut shell, events) = recording_shell(LessonId::SpeedOfSound);
    shell.dispatch(LessonIntent::GoToPhase(Phase::Test));
    answer_everything_correctly(&mut shell);
    let outcome = shell.submit_quiz();
    assert_eq!((outcome.score, outcome.total), (10, 10));
    assert!(outcome.passed);
    assert!(shell.quiz_passed());

    let last = events.borrow().last().cloned().expect("submission event");
    assert_eq!(last.lesson, LessonId::SpeedOfSound);
    assert_eq!(last.phase, Phase::Test);
    assert_eq!(last.timestamp, fixed_test_time());
    assert_eq!(
        last.detail,
        EventDetail::QuizSubmitted {
            score: 10,
            total: 10,
            passed: true
        }
    );
}

#[test]
fn unanswered_quiz_scores_zero() {
    let (mut shell, _) = recording_shell(LessonId::ThermalExpansion);
    shell.dispatch(LessonIntent::GoToPhase(Phase::Test));
    let outcome = shell.submit_quiz();
    assert_eq!(outcome.score, 0);
    assert!(!outcome.passed);
    shell.dispatch(LessonIntent::NextPhase);
    assert_eq!(shell.phase(), Phase::Test);
}

#[test]
fn repeated_jumps_change_nothing_and_emit_once() {
    let (mut shell, events) = recording_shell(LessonId::RocketTurnaround);
    shell.dispatch(LessonIntent::GoToPhase(Phase::TwistPlay));
    let state = shell.state().clone();
    shell.dispatch(LessonIntent::GoToPhase(Phase::TwistPlay));
    assert_eq!(shell.state(), &state);
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn retry_from_results_returns_to_hook_and_reports_it() {
    let (mut shell, events) = recording_shell(LessonId::SolarTemperature);
    shell.dispatch(LessonIntent::GoToPhase(Phase::Test));
    shell.dispatch(LessonIntent::SubmitQuiz);
    shell.dispatch(LessonIntent::RetryQuiz { back_to_hook: true });
    assert_eq!(shell.phase(), Phase::Hook);
    assert_eq!(shell.state().quiz.score(), None);

    let kinds: Vec<&str> = events
        .borrow()
        .iter()
        .map(|e| e.detail.event_type())
        .collect();
    assert_eq!(
        kinds,
        vec!["phase_changed", "quiz_submitted", "quiz_retried", "phase_changed"]
    );
}

#[test]
fn echo_scenario_matches_hand_calculation() {
    let times = sound::echo_times(170.0, sound::ASSUMED_SPEED_M_S);
    assert!((times.one_way_s - 0.4956).abs() < 1e-3);
    assert!((times.round_trip_s - 0.9913).abs() < 1e-3);
}

#[test]
fn hot_panel_loses_forty_two_watts() {
    let panel = solar::PanelSpec::default();
    let loss = solar::power_loss(&panel, 55.0, solar::STC_IRRADIANCE_W_M2);
    assert!((loss - 42.0).abs() < 1e-9);
}

#[test]
fn slider_extremes_keep_outputs_sane() {
    let (mut shell, _) = recording_shell(LessonId::RocketTurnaround);
    shell.dispatch(LessonIntent::SetInputs(SimInputs::Rocket(rocket::Inputs {
        booster_cost_musd: f64::MAX,
        flights_per_booster: 0,
        turnaround_days: 0,
        fleet_size: 0,
        payload_kg: -5.0,
        ..rocket::Inputs::default()
    })));
    for stage in [Stage::Main, Stage::Twist] {
        for readout in shell.state().sim.readouts(stage) {
            assert!(readout.value.is_finite(), "{} at {stage:?}", readout.label);
        }
    }
    let SimInputs::Rocket(inputs) = shell.state().sim else {
        panic!("rocket lesson holds rocket inputs");
    };
    assert_eq!(inputs.flights_per_booster, 1);
    assert_eq!(inputs.fleet_size, 1);
    assert!(rocket::evaluate_twist(&inputs).launches_per_year > 0.0);
}

#[test]
fn solar_extremes_never_go_negative() {
    let (mut shell, _) = recording_shell(LessonId::SolarTemperature);
    for (cell, sun, air) in [(-10.0, 200.0, -10.0), (70.0, 1200.0, 45.0), (900.0, 0.0, 99.0)] {
        shell.dispatch(LessonIntent::SetInputs(SimInputs::Solar(solar::Inputs {
            cell_temp_c: cell,
            irradiance_w_m2: sun,
            ambient_temp_c: air,
            ..solar::Inputs::default()
        })));
        let SimInputs::Solar(inputs) = shell.state().sim else {
            panic!("solar lesson holds solar inputs");
        };
        assert!(solar::CELL_TEMP_RANGE_C.contains(&inputs.cell_temp_c));
        assert!(solar::IRRADIANCE_RANGE_W_M2.contains(&inputs.irradiance_w_m2));
        let main = solar::evaluate(&inputs);
        assert!(main.power_w >= 0.0 && main.open_circuit_voltage_v >= 0.0);
        assert!(solar::evaluate_twist(&inputs).power_w >= 0.0);
    }
}

#[test]
fn deep_link_to_unknown_phase_starts_at_hook() {
    let content = read_lesson(LessonId::SpeedOfSound).expect("bundled lesson");
    let shell = LessonShell::new(content).with_phase_override(Some("not-a-phase"));
    assert_eq!(shell.phase(), Phase::Hook);
}

#[test]
fn catalog_holds_four_lessons() {
    let catalog = read_catalog().expect("bundled catalog");
    let ids: Vec<LessonId> = catalog.iter().map(|c| c.id).collect();
    assert_eq!(ids, LessonId::ALL.to_vec());
}
