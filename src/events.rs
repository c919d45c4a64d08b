//! Fire-and-forget notifications to an embedding host.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{LessonId, Phase};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventDetail {
    PhaseChanged {
        from: Phase,
        to: Phase,
    },
    PredictionMade {
        option_id: String,
        matches_outcome: bool,
    },
    TwistPredictionMade {
        option_id: String,
        matches_outcome: bool,
    },
    ApplicationCompleted {
        index: usize,
        title: String,
        completed: usize,
        total: usize,
    },
    QuizSubmitted {
        score: usize,
        total: usize,
        passed: bool,
    },
    QuizRetried {
        back_to_hook: bool,
    },
}

impl EventDetail {
    pub fn event_type(&self) -> &'static str {
        match self {
            EventDetail::PhaseChanged { .. } => "phase_changed",
            EventDetail::PredictionMade { .. } => "prediction_made",
            EventDetail::TwistPredictionMade { .. } => "twist_prediction_made",
            EventDetail::ApplicationCompleted { .. } => "application_completed",
            EventDetail::QuizSubmitted { .. } => "quiz_submitted",
            EventDetail::QuizRetried { .. } => "quiz_retried",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonEvent {
    pub lesson: LessonId,
    /// Phase current after the event was applied.
    pub phase: Phase,
    #[serde(flatten)]
    pub detail: EventDetail,
    pub timestamp: DateTime<Utc>,
}

/// Receives lesson events. Any `Fn(&LessonEvent)` closure is a sink.
pub trait EventSink {
    fn emit(&self, event: &LessonEvent);
}

impl<F> EventSink for F
where
    F: Fn(&LessonEvent),
{
    fn emit(&self, event: &LessonEvent) {
        self(event)
    }
}

/// Writes every event as one JSON line through `log`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: &LessonEvent) {
        match serde_json::to_string(event) {
            Ok(json) => log::info!(target: "lesson_events", "{json}"),
            Err(e) => log::warn!("could not serialize {} event: {e}", event.detail.event_type()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_test_time;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample() -> LessonEvent {
        LessonEvent {
            lesson: LessonId::SpeedOfSound,
            phase: Phase::Test,
            detail: EventDetail::QuizSubmitted {
                score: 9,
                total: 10,
                passed: true,
            },
            timestamp: fixed_test_time(),
        }
    }

    #[test]
    fn payload_is_flat_json_with_type_tag() {
        let value = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(value["type"], "quiz_submitted");
        assert_eq!(value["lesson"], "speed-of-sound");
        assert_eq!(value["phase"], "test");
        assert_eq!(value["score"], 9);
        assert_eq!(value["timestamp"], "2023-11-14T22:13:20Z");
    }

    #[test]
    fn closures_are_sinks() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let seen = Rc::clone(&seen);
            move |e: &LessonEvent| seen.borrow_mut().push(e.detail.event_type())
        };
        sink.emit(&sample());
        LogSink.emit(&sample());
        assert_eq!(*seen.borrow(), vec!["quiz_submitted"]);
    }
}
