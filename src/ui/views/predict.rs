use crate::app::{LessonIntent, LessonShell};
use crate::model::Phase;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::phase_frame;
use egui::{Button, RichText, Ui, Vec2};

/// Serves both the main and the twist prediction.
pub fn ui_predict(shell: &LessonShell, ui: &mut Ui, intents: &mut Vec<LessonIntent>) {
    let twist = shell.phase() == Phase::TwistPredict;
    let prompt = shell.prediction_prompt();
    let chosen = shell.chosen_prediction().map(|o| o.id.as_str());

    phase_frame(ui, 680.0, |ui| {
        if twist {
            ui.label(RichText::new("🔀 A twist").strong());
        }
        ui.heading("What do you predict?");
        ui.add_space(6.0);
        ui.label(&prompt.prompt);
        ui.add_space(12.0);

        let width = ui.available_width();
        for option in &prompt.options {
            let selected = chosen == Some(option.id.as_str());
            let button = Button::new(&option.text)
                .selected(selected)
                .min_size(Vec2::new(width, 36.0));
            if ui.add(button).clicked() && !selected {
                let id = option.id.clone();
                intents.push(if twist {
                    LessonIntent::TwistPredict(id)
                } else {
                    LessonIntent::Predict(id)
                });
            }
            ui.add_space(4.0);
        }

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            if chosen.is_none() {
                ui.label(RichText::new("Pick an answer; you can change it later.").weak());
            }
            if big_list_button(ui, "Test it ▶", 240.0, 40.0, chosen.is_some()) {
                intents.push(LessonIntent::NextPhase);
            }
        });
    });
}
