use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{UnknownLesson, UnknownPhase};

/// One step of the fixed ten-step lesson sequence.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Hook,
    Predict,
    Play,
    Review,
    TwistPredict,
    TwistPlay,
    TwistReview,
    Transfer,
    Test,
    Mastery,
}

impl Phase {
    pub const ALL: [Phase; 10] = [
        Phase::Hook,
        Phase::Predict,
        Phase::Play,
        Phase::Review,
        Phase::TwistPredict,
        Phase::TwistPlay,
        Phase::TwistReview,
        Phase::Transfer,
        Phase::Test,
        Phase::Mastery,
    ];

    pub const FIRST: Phase = Phase::Hook;
    pub const LAST: Phase = Phase::Mastery;

    pub fn index(self) -> usize {
        // ALL is declared in discriminant order
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Phase> {
        Phase::ALL.get(idx).copied()
    }

    /// The following phase, or `None` at `Mastery`.
    pub fn next(self) -> Option<Phase> {
        Phase::from_index(self.index() + 1)
    }

    /// The preceding phase, or `None` at `Hook`.
    pub fn prev(self) -> Option<Phase> {
        self.index().checked_sub(1).and_then(Phase::from_index)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Hook => "hook",
            Phase::Predict => "predict",
            Phase::Play => "play",
            Phase::Review => "review",
            Phase::TwistPredict => "twist_predict",
            Phase::TwistPlay => "twist_play",
            Phase::TwistReview => "twist_review",
            Phase::Transfer => "transfer",
            Phase::Test => "test",
            Phase::Mastery => "mastery",
        }
    }

    /// Short label for the progress indicator.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Hook => "Intro",
            Phase::Predict => "Predict",
            Phase::Play => "Experiment",
            Phase::Review => "Review",
            Phase::TwistPredict => "Twist",
            Phase::TwistPlay => "Twist Lab",
            Phase::TwistReview => "Twist Review",
            Phase::Transfer => "Real World",
            Phase::Test => "Test",
            Phase::Mastery => "Mastery",
        }
    }

    pub fn is_twist(self) -> bool {
        matches!(
            self,
            Phase::TwistPredict | Phase::TwistPlay | Phase::TwistReview
        )
    }

    /// Parses an externally supplied phase name, falling back to the first
    /// phase when the value is not a member of the fixed set.
    pub fn parse_or_first(raw: &str) -> Phase {
        match raw.parse() {
            Ok(phase) => phase,
            Err(err) => {
                log::warn!("{err}; starting at {}", Phase::FIRST);
                Phase::FIRST
            }
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = UnknownPhase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Phase::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownPhase(s.to_owned()))
    }
}

/// The bundled lessons.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "kebab-case")]
pub enum LessonId {
    SolarTemperature,
    ThermalExpansion,
    SpeedOfSound,
    RocketTurnaround,
}

impl LessonId {
    pub const ALL: [LessonId; 4] = [
        LessonId::SolarTemperature,
        LessonId::ThermalExpansion,
        LessonId::SpeedOfSound,
        LessonId::RocketTurnaround,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LessonId::SolarTemperature => "solar-temperature",
            LessonId::ThermalExpansion => "thermal-expansion",
            LessonId::SpeedOfSound => "speed-of-sound",
            LessonId::RocketTurnaround => "rocket-turnaround",
        }
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LessonId {
    type Err = UnknownLesson;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LessonId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownLesson(s.to_owned()))
    }
}

/// Top-level screen of the application.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    LessonSelect,
    Lesson,
}

// ---------------------------------------------------------------------------
// Lesson content, deserialized from the embedded YAML files.
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LessonContent {
    pub id: LessonId,
    pub title: String,
    pub tagline: String,
    pub hook: Hook,
    pub predict: PredictionPrompt,
    pub play: Instructions,
    pub review: Explanation,
    pub twist_predict: PredictionPrompt,
    pub twist_play: Instructions,
    pub twist_review: Explanation,
    pub applications: Vec<Application>,
    pub quiz: Vec<QuizQuestion>,
    pub mastery: Mastery,
    #[serde(default)]
    pub gating: GatingPolicy,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Hook {
    pub headline: String,
    pub body: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PredictionPrompt {
    pub prompt: String,
    pub options: Vec<PredictionOption>,
    /// Id of the option revealed as the actual outcome in the review phase.
    pub correct: String,
}

impl PredictionPrompt {
    pub fn option(&self, id: &str) -> Option<&PredictionOption> {
        self.options.iter().find(|o| o.id == id)
    }

    pub fn is_correct(&self, id: &str) -> bool {
        self.correct == id
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PredictionOption {
    pub id: String,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Instructions {
    pub heading: String,
    pub steps: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Explanation {
    pub heading: String,
    pub body: Vec<String>,
    #[serde(default)]
    pub formula: Option<String>,
}

/// A real-world scenario card shown in the transfer phase.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Application {
    pub title: String,
    pub description: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<QuizOption>,
    pub explanation: String,
}

impl QuizQuestion {
    /// Index of the designated correct option. Content validation
    /// guarantees exactly one exists for bundled lessons.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.correct)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizOption {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Mastery {
    pub headline: String,
    pub takeaways: Vec<String>,
}

/// Navigation gates applied when advancing with `next_phase`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GatingPolicy {
    /// Every transfer application must be revealed before the test.
    #[serde(default)]
    pub require_all_applications: bool,
    /// Minimum quiz score needed to reach mastery.
    #[serde(default)]
    pub pass_threshold: Option<usize>,
}
