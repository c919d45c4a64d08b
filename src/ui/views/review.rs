use crate::app::{LessonIntent, LessonShell};
use crate::ui::helpers::{big_list_button, failure_text, paragraphs, success_text};
use crate::ui::layout::phase_frame;
use egui::{Frame, RichText, Ui};

pub fn ui_review(shell: &LessonShell, ui: &mut Ui, intents: &mut Vec<LessonIntent>) {
    let explanation = shell.explanation();
    let verdict = shell.prediction_verdict();
    phase_frame(ui, 720.0, |ui| {
        let headline = verdict.headline();
        ui.label(if verdict.matched {
            success_text(headline)
        } else {
            failure_text(headline)
        });
        ui.add_space(10.0);
        ui.heading(&explanation.heading);
        ui.add_space(6.0);
        paragraphs(ui, &explanation.body);

        if let Some(formula) = &explanation.formula {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.label(RichText::new(formula).monospace().size(18.0));
            });
        }

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            if big_list_button(ui, "Continue ▶", 240.0, 40.0, true) {
                intents.push(LessonIntent::NextPhase);
            }
        });
    });
}
