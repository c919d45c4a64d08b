use crate::app::{LessonIntent, LessonShell};
use crate::ui::helpers::{failure_text, success_text, two_button_row};
use crate::ui::layout::phase_frame;
use egui::{Button, Frame, Grid, RichText, Ui, Vec2};

pub fn ui_quiz(shell: &LessonShell, ui: &mut Ui, intents: &mut Vec<LessonIntent>) {
    let questions = &shell.content().quiz;
    let quiz = &shell.state().quiz;
    let submitted = quiz.is_submitted();

    phase_frame(ui, 760.0, |ui| {
        ui.heading("Check your understanding");
        ui.label(format!("{} of {} answered", quiz.answered_count(), questions.len()));
        ui.add_space(8.0);

        for (q, question) in questions.iter().enumerate() {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(format!("{}. {}", q + 1, question.prompt)).strong());
                for (o, option) in question.options.iter().enumerate() {
                    let selected = quiz.answer(q) == Some(o);
                    let mut text = RichText::new(&option.text);
                    if submitted && option.correct {
                        text = text.strong();
                    }
                    let response = ui.add_enabled(!submitted, egui::RadioButton::new(selected, text));
                    if response.clicked() && !selected {
                        intents.push(LessonIntent::Answer {
                            question: q,
                            option: o,
                        });
                    }
                }
                if submitted {
                    match quiz.is_correct(questions, q) {
                        Some(true) => ui.label(success_text("✅ Correct")),
                        Some(false) => ui.label(failure_text("❌ Not quite")),
                        None => ui.label(failure_text("❌ Not answered")),
                    };
                    ui.label(RichText::new(&question.explanation).weak());
                }
            });
            ui.add_space(6.0);
        }

        ui.add_space(8.0);
        if !submitted {
            ui.vertical_centered(|ui| {
                let button = Button::new("Submit answers").min_size(Vec2::new(240.0, 40.0));
                if ui.add_enabled(quiz.is_complete(), button).clicked() {
                    intents.push(LessonIntent::SubmitQuiz);
                }
            });
            return;
        }

        results(shell, ui, intents);
    });
}

fn results(shell: &LessonShell, ui: &mut Ui, intents: &mut Vec<LessonIntent>) {
    let Some(summary) = shell.score_summary() else {
        return;
    };
    ui.vertical_centered(|ui| {
        ui.heading(summary.label());
        if summary.passed {
            ui.label(success_text("You passed!"));
        } else {
            ui.label(failure_text("Not there yet. Review and try again."));
        }
    });

    Grid::new("quiz_results_grid")
        .striped(true)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            for row in shell.quiz_rows() {
                ui.label(row.label());
                if row.number % 5 == 0 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(10.0);
    let width = ui.available_width().min(460.0);
    let (retry, review) = two_button_row(ui, width, "⟲ Retry the quiz", "↩ Review the lesson");
    if retry {
        intents.push(LessonIntent::RetryQuiz { back_to_hook: false });
    }
    if review {
        intents.push(LessonIntent::RetryQuiz { back_to_hook: true });
    }
    if summary.passed {
        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            let button = Button::new("Mastery ▶").min_size(Vec2::new(240.0, 40.0));
            if ui.add_enabled(shell.can_advance(), button).clicked() {
                intents.push(LessonIntent::NextPhase);
            }
        });
    }
}
