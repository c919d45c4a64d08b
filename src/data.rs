// src/data.rs

use std::collections::HashSet;

use crate::error::ContentError;
use crate::model::{LessonContent, LessonId, PredictionPrompt};

/// Every lesson ships exactly this many transfer applications.
pub const APPLICATION_COUNT: usize = 4;

fn embedded_yaml(id: LessonId) -> &'static str {
    match id {
        LessonId::SolarTemperature => include_str!("data/lessons/solar_temperature.yaml"),
        LessonId::ThermalExpansion => include_str!("data/lessons/thermal_expansion.yaml"),
        LessonId::SpeedOfSound => include_str!("data/lessons/speed_of_sound.yaml"),
        LessonId::RocketTurnaround => include_str!("data/lessons/rocket_turnaround.yaml"),
    }
}

/// Loads one bundled lesson from its embedded YAML file.
pub fn read_lesson(id: LessonId) -> Result<LessonContent, ContentError> {
    parse_lesson(id, embedded_yaml(id))
}

/// Loads every bundled lesson, in catalog order.
pub fn read_catalog() -> Result<Vec<LessonContent>, ContentError> {
    LessonId::ALL.into_iter().map(read_lesson).collect()
}

/// Parses and validates lesson content supplied as YAML.
pub fn parse_lesson(expected: LessonId, yaml: &str) -> Result<LessonContent, ContentError> {
    let content: LessonContent =
        serde_yaml::from_str(yaml).map_err(|source| ContentError::Parse {
            lesson: expected,
            source,
        })?;
    if content.id != expected {
        return Err(ContentError::MismatchedLesson {
            expected,
            found: content.id,
        });
    }
    validate(&content)?;
    log::debug!(
        "loaded lesson {} ({} questions, {} applications)",
        content.id,
        content.quiz.len(),
        content.applications.len()
    );
    Ok(content)
}

fn validate(content: &LessonContent) -> Result<(), ContentError> {
    let lesson = content.id;

    validate_prediction(lesson, "predict", &content.predict)?;
    validate_prediction(lesson, "twist_predict", &content.twist_predict)?;

    if content.applications.len() != APPLICATION_COUNT {
        return Err(ContentError::ApplicationCount {
            lesson,
            expected: APPLICATION_COUNT,
            found: content.applications.len(),
        });
    }

    if content.quiz.is_empty() {
        return Err(ContentError::EmptyQuiz { lesson });
    }
    for (question, q) in content.quiz.iter().enumerate() {
        match q.options.iter().filter(|o| o.correct).count() {
            0 => return Err(ContentError::NoCorrectOption { lesson, question }),
            1 => {}
            count => {
                return Err(ContentError::MultipleCorrectOptions {
                    lesson,
                    question,
                    count,
                });
            }
        }
    }

    if let Some(threshold) = content.gating.pass_threshold {
        if threshold > content.quiz.len() {
            return Err(ContentError::ThresholdTooHigh {
                lesson,
                threshold,
                questions: content.quiz.len(),
            });
        }
    }
    Ok(())
}

fn validate_prediction(
    lesson: LessonId,
    block: &'static str,
    prompt: &PredictionPrompt,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for option in &prompt.options {
        if !seen.insert(option.id.as_str()) {
            return Err(ContentError::DuplicateOptionId {
                lesson,
                block,
                id: option.id.clone(),
            });
        }
    }
    if prompt.option(&prompt.correct).is_none() {
        return Err(ContentError::UnknownPredictionAnswer {
            lesson,
            block,
            correct: prompt.correct.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
id: speed-of-sound
title: Echo
tagline: Sound takes time
hook: { headline: Shout, body: [Listen.] }
predict:
  prompt: How long?
  options: [{ id: a, text: Short }, { id: b, text: Long }]
  correct: a
play: { heading: Try, steps: [Drag.] }
review: { heading: Why, body: [Because.] }
twist_predict:
  prompt: In water?
  options: [{ id: x, text: Faster }, { id: y, text: Slower }]
  correct: x
twist_play: { heading: Try, steps: [Switch.] }
twist_review: { heading: Why, body: [Stiffer.], formula: "v = sqrt(K/rho)" }
applications:
  - { title: A, description: d, question: q, answer: a }
  - { title: B, description: d, question: q, answer: a }
  - { title: C, description: d, question: q, answer: a }
  - { title: D, description: d, question: q, answer: a, stats: [{ label: L, value: V }] }
quiz:
  - prompt: Speed in air?
    options: [{ text: "343 m/s", correct: true }, { text: "3 m/s" }]
    explanation: Room temperature.
mastery: { headline: Done, takeaways: [v = d/t] }
gating: { require_all_applications: true, pass_threshold: 1 }
"#;

    #[test]
    fn every_bundled_lesson_loads() {
        let catalog = read_catalog().expect("bundled content is valid");
        assert_eq!(catalog.len(), LessonId::ALL.len());
        for (content, id) in catalog.iter().zip(LessonId::ALL) {
            assert_eq!(content.id, id);
            assert_eq!(content.quiz.len(), 10);
            assert_eq!(content.applications.len(), APPLICATION_COUNT);
            assert!(content.gating.require_all_applications);
            assert!(content.gating.pass_threshold.is_some());
        }
    }

    #[test]
    fn minimal_lesson_parses() {
        let content = parse_lesson(LessonId::SpeedOfSound, MINIMAL).expect("valid");
        assert_eq!(content.quiz[0].correct_index(), Some(0));
        assert_eq!(content.gating.pass_threshold, Some(1));
        assert_eq!(content.applications[3].stats.len(), 1);
    }

    #[test]
    fn rejects_mismatched_lesson_id() {
        let err = parse_lesson(LessonId::SolarTemperature, MINIMAL).unwrap_err();
        assert!(matches!(
            err,
            ContentError::MismatchedLesson {
                expected: LessonId::SolarTemperature,
                found: LessonId::SpeedOfSound
            }
        ));
    }

    #[test]
    fn rejects_question_without_correct_option() {
        let yaml = MINIMAL.replace(r#"{ text: "343 m/s", correct: true }"#, r#"{ text: "343 m/s" }"#);
        let err = parse_lesson(LessonId::SpeedOfSound, &yaml).unwrap_err();
        assert!(matches!(err, ContentError::NoCorrectOption { question: 0, .. }));
    }

    #[test]
    fn rejects_unknown_prediction_answer() {
        let yaml = MINIMAL.replace("correct: a", "correct: c");
        let err = parse_lesson(LessonId::SpeedOfSound, &yaml).unwrap_err();
        assert!(matches!(
            err,
            ContentError::UnknownPredictionAnswer { block: "predict", .. }
        ));
    }

    #[test]
    fn rejects_threshold_above_question_count() {
        let yaml = MINIMAL.replace("pass_threshold: 1", "pass_threshold: 2");
        let err = parse_lesson(LessonId::SpeedOfSound, &yaml).unwrap_err();
        assert!(matches!(
            err,
            ContentError::ThresholdTooHigh { threshold: 2, questions: 1, .. }
        ));
    }

    #[test]
    fn rejects_missing_application() {
        let yaml = MINIMAL.replace("  - { title: C, description: d, question: q, answer: a }\n", "");
        let err = parse_lesson(LessonId::SpeedOfSound, &yaml).unwrap_err();
        assert!(matches!(
            err,
            ContentError::ApplicationCount { expected: 4, found: 3, .. }
        ));
    }

    #[test]
    fn rejects_empty_quiz() {
        let quiz = r#"quiz:
  - prompt: Speed in air?
    options: [{ text: "343 m/s", correct: true }, { text: "3 m/s" }]
    explanation: Room temperature.
"#;
        let yaml = MINIMAL.replace(quiz, "quiz: []\n");
        let err = parse_lesson(LessonId::SpeedOfSound, &yaml).unwrap_err();
        assert!(matches!(err, ContentError::EmptyQuiz { lesson: LessonId::SpeedOfSound }));
    }

    #[test]
    fn rejects_question_with_two_correct_options() {
        let yaml = MINIMAL.replace(r#"{ text: "3 m/s" }"#, r#"{ text: "3 m/s", correct: true }"#);
        let err = parse_lesson(LessonId::SpeedOfSound, &yaml).unwrap_err();
        assert!(matches!(
            err,
            ContentError::MultipleCorrectOptions { question: 0, count: 2, .. }
        ));
    }

    #[test]
    fn rejects_repeated_prediction_option_id() {
        let yaml = MINIMAL.replace("{ id: b, text: Long }", "{ id: a, text: Long }");
        let err = parse_lesson(LessonId::SpeedOfSound, &yaml).unwrap_err();
        match err {
            ContentError::DuplicateOptionId { block, id, .. } => {
                assert_eq!(block, "predict");
                assert_eq!(id, "a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reports_yaml_errors_with_lesson() {
        let err = parse_lesson(LessonId::SpeedOfSound, "id: [").unwrap_err();
        assert!(matches!(err, ContentError::Parse { lesson: LessonId::SpeedOfSound, .. }));
    }
}
