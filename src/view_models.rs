// src/view_models.rs

use crate::model::Phase;

#[derive(Clone, Debug, PartialEq)]
pub struct PhaseStep {
    pub phase: Phase,
    pub number: usize, // 1-based
    pub current: bool,
    pub visited: bool,
    pub unlocked: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApplicationRow {
    pub index: usize,
    pub title: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizRow {
    pub number: usize,
    pub answered: bool,
    /// Known only after submission.
    pub correct: Option<bool>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScoreSummary {
    pub score: usize,
    pub total: usize,
    pub threshold: Option<usize>,
    pub passed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PredictionVerdict {
    pub chosen: Option<String>,
    pub expected: String,
    pub matched: bool,
}

impl PhaseStep {
    /// Clickable in the progress strip.
    pub fn enabled(&self) -> bool {
        self.current || self.visited || self.unlocked
    }

    pub fn label(&self) -> String {
        if self.current {
            format!("{} ● {}", self.number, self.phase.label())
        } else if self.visited {
            format!("{} ✅", self.number)
        } else if self.unlocked {
            format!("{}", self.number)
        } else {
            format!("{} 🔒", self.number)
        }
    }
}

impl ApplicationRow {
    pub fn label(&self) -> String {
        if self.completed {
            format!("✅ {}", self.title)
        } else {
            format!("🔎 {}", self.title)
        }
    }
}

impl QuizRow {
    pub fn label(&self) -> String {
        match (self.answered, self.correct) {
            (_, Some(true)) => format!("Q{} ✅", self.number),
            (_, Some(false)) => format!("Q{} ❌", self.number),
            (true, None) => format!("Q{} ✏", self.number),
            (false, None) => format!("Q{} ·", self.number),
        }
    }
}

impl ScoreSummary {
    pub fn label(&self) -> String {
        match self.threshold {
            Some(t) => format!("{} / {} correct ({} to pass)", self.score, self.total, t),
            None => format!("{} / {} correct", self.score, self.total),
        }
    }
}

impl PredictionVerdict {
    pub fn headline(&self) -> String {
        match (&self.chosen, self.matched) {
            (None, _) => format!("The answer: {}", self.expected),
            (Some(_), true) => format!("You predicted it! {}", self.expected),
            (Some(chosen), false) => {
                format!("You guessed \"{chosen}\". The answer: {}", self.expected)
            }
        }
    }
}
