use crate::app::{LessonIntent, LessonShell};
use crate::ui::helpers::{big_list_button, paragraphs};
use crate::ui::layout::phase_frame;
use crate::ui::scenes;
use egui::{RichText, Ui};

pub fn ui_hook(shell: &LessonShell, ui: &mut Ui, intents: &mut Vec<LessonIntent>) {
    let content = shell.content();
    phase_frame(ui, 760.0, |ui| {
        ui.label(RichText::new(&content.tagline).italics().weak());
        ui.heading(&content.hook.headline);
        ui.add_space(10.0);
        paragraphs(ui, &content.hook.body);
        ui.add_space(8.0);
        scenes::paint(ui, shell);
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            if big_list_button(ui, "Make a prediction ▶", 260.0, 40.0, true) {
                intents.push(LessonIntent::NextPhase);
            }
        });
    });
}
