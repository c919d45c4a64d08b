use crate::data::read_catalog;
use crate::error::ContentError;
use crate::events::{EventDetail, EventSink, LessonEvent, LogSink};
use crate::model::{AppState, LessonContent, LessonId, Phase};
use crate::physics::SimInputs;
use crate::quiz::QuizSession;
use crate::time::Clock;
use std::collections::BTreeSet;
use std::rc::Rc;

// Submódulos
pub mod actions;
pub mod animation;
pub mod completion;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;
pub mod view_models;

pub use crate::view_models::{ApplicationRow, PhaseStep, PredictionVerdict, QuizRow, ScoreSummary};
pub use actions::LessonIntent;
pub use animation::Animation;
pub use completion::Gate;

/// Everything the learner has done in the open lesson. Values survive phase
/// changes so earlier answers stay visible when going back.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonState {
    pub phase: Phase,
    pub prediction: Option<String>,
    pub twist_prediction: Option<String>,
    pub completed_applications: BTreeSet<usize>,
    pub quiz: QuizSession,
    pub sim: SimInputs,
    pub animation: Animation,
    pub visited: BTreeSet<Phase>,
}

impl LessonState {
    pub fn new(content: &LessonContent) -> Self {
        Self {
            phase: Phase::FIRST,
            prediction: None,
            twist_prediction: None,
            completed_applications: BTreeSet::new(),
            quiz: QuizSession::new(content.quiz.len()),
            sim: SimInputs::for_lesson(content.id),
            animation: Animation::Idle,
            visited: BTreeSet::from([Phase::FIRST]),
        }
    }
}

/// The ten-phase lesson shell shared by every explainer. Widgets read
/// `state()` and `content()` and mutate only through [`LessonIntent`]s.
pub struct LessonShell {
    content: LessonContent,
    state: LessonState,
    sink: Option<Rc<dyn EventSink>>,
    clock: Clock,
}

impl LessonShell {
    pub fn new(content: LessonContent) -> Self {
        let state = LessonState::new(&content);
        Self {
            content,
            state,
            sink: None,
            clock: Clock::default(),
        }
    }

    pub fn with_sink(mut self, sink: Rc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Deep link into a phase supplied by the host. Unknown names start at
    /// the first phase. No event is emitted for the initial placement.
    pub fn with_phase_override(mut self, phase: Option<&str>) -> Self {
        if let Some(raw) = phase {
            let phase = Phase::parse_or_first(raw);
            self.state.phase = phase;
            self.state.visited.insert(phase);
        }
        self
    }

    pub fn content(&self) -> &LessonContent {
        &self.content
    }

    pub fn state(&self) -> &LessonState {
        &self.state
    }

    pub fn lesson(&self) -> LessonId {
        self.content.id
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub(crate) fn emit(&self, detail: EventDetail) {
        let Some(sink) = &self.sink else {
            return;
        };
        sink.emit(&LessonEvent {
            lesson: self.content.id,
            phase: self.state.phase,
            detail,
            timestamp: self.clock.now(),
        });
    }
}

/// Host-supplied entry point: which lesson to open and at which phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub lesson: Option<LessonId>,
    pub phase: Option<String>,
}

impl LaunchOptions {
    /// Reads `lesson` and `phase` from a URL query such as
    /// `?lesson=speed-of-sound&phase=test`. Unknown lessons are ignored.
    /// Values are passed through unchanged; see [`Self::from_query_with`].
    pub fn from_query(query: &str) -> Self {
        Self::from_query_with(query, |value| Some(value.to_owned()))
    }

    /// Like [`Self::from_query`], with each value percent-decoded by
    /// `decode` first. Values that fail to decode are skipped.
    pub fn from_query_with(query: &str, decode: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, raw)) = pair.split_once('=') else {
                continue;
            };
            if key != "lesson" && key != "phase" {
                continue;
            }
            let Some(value) = decode(raw) else {
                log::warn!("could not decode {key}={raw}");
                continue;
            };
            if key == "lesson" {
                match value.parse() {
                    Ok(id) => options.lesson = Some(id),
                    Err(e) => log::warn!("{e}"),
                }
            } else {
                options.phase = Some(value);
            }
        }
        options
    }
}

pub struct ExplainerApp {
    pub catalog: Vec<LessonContent>,
    pub state: AppState,
    pub shell: Option<LessonShell>,
    pub confirm_restart: bool,
    pub message: String,
    sink: Rc<dyn EventSink>,
}

impl ExplainerApp {
    /// Loads the bundled catalog and applies the launch options.
    pub fn new(options: LaunchOptions) -> Result<Self, ContentError> {
        let catalog = read_catalog()?;
        log::info!("loaded {} lessons", catalog.len());
        Ok(Self::with_catalog(catalog, options, Rc::new(LogSink)))
    }

    pub fn with_catalog(
        catalog: Vec<LessonContent>,
        options: LaunchOptions,
        sink: Rc<dyn EventSink>,
    ) -> Self {
        let mut app = Self {
            catalog,
            state: AppState::LessonSelect,
            shell: None,
            confirm_restart: false,
            message: String::new(),
            sink,
        };
        if let Some(id) = options.lesson {
            app.open_lesson(id, options.phase.as_deref());
        }
        app
    }

    /// Starts a fresh session of `id`.
    pub fn open_lesson(&mut self, id: LessonId, phase: Option<&str>) {
        let Some(content) = self.catalog.iter().find(|c| c.id == id).cloned() else {
            self.message = format!("Lesson {id} is not available.");
            log::warn!("{}", self.message);
            return;
        };
        log::info!("opening lesson {id}");
        self.shell = Some(
            LessonShell::new(content)
                .with_sink(Rc::clone(&self.sink))
                .with_phase_override(phase),
        );
        self.state = AppState::Lesson;
        self.confirm_restart = false;
        self.message.clear();
    }

    /// Drops the session; any running animation ends with it.
    pub fn close_lesson(&mut self) {
        if let Some(shell) = self.shell.take() {
            log::info!("closing lesson {}", shell.lesson());
        }
        self.state = AppState::LessonSelect;
        self.confirm_restart = false;
    }
}
