use thiserror::Error;

use crate::model::LessonId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown phase `{0}`")]
pub struct UnknownPhase(pub String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown lesson `{0}`")]
pub struct UnknownLesson(pub String);

/// Failures while loading or validating bundled lesson content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("lesson {lesson}: invalid YAML")]
    Parse {
        lesson: LessonId,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("file for {expected} declares lesson id {found}")]
    MismatchedLesson { expected: LessonId, found: LessonId },

    #[error("lesson {lesson}: quiz is empty")]
    EmptyQuiz { lesson: LessonId },

    #[error("lesson {lesson}: question {question} has no correct option")]
    NoCorrectOption { lesson: LessonId, question: usize },

    #[error("lesson {lesson}: question {question} has {count} correct options")]
    MultipleCorrectOptions {
        lesson: LessonId,
        question: usize,
        count: usize,
    },

    #[error("lesson {lesson}: {block} answer `{correct}` is not one of its options")]
    UnknownPredictionAnswer {
        lesson: LessonId,
        block: &'static str,
        correct: String,
    },

    #[error("lesson {lesson}: {block} repeats option id `{id}`")]
    DuplicateOptionId {
        lesson: LessonId,
        block: &'static str,
        id: String,
    },

    #[error("lesson {lesson}: expected {expected} transfer applications, found {found}")]
    ApplicationCount {
        lesson: LessonId,
        expected: usize,
        found: usize,
    },

    #[error("lesson {lesson}: pass threshold {threshold} exceeds {questions} questions")]
    ThresholdTooHigh {
        lesson: LessonId,
        threshold: usize,
        questions: usize,
    },
}
