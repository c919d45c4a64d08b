use crate::app::{LessonIntent, LessonShell};
use crate::ui::helpers::{numbered_steps, readout_grid, two_button_row};
use crate::ui::layout::phase_frame;
use crate::ui::scenes;
use egui::Ui;

pub fn ui_play(shell: &LessonShell, ui: &mut Ui, intents: &mut Vec<LessonIntent>) {
    let instructions = shell.instructions();
    phase_frame(ui, 900.0, |ui| {
        ui.heading(&instructions.heading);
        ui.add_space(4.0);
        numbered_steps(ui, &instructions.steps);
        ui.add_space(8.0);

        scenes::paint(ui, shell);
        ui.add_space(8.0);

        ui.columns(2, |cols| {
            if let Some(sim) = scenes::controls(&mut cols[0], shell) {
                intents.push(LessonIntent::SetInputs(sim));
            }
            readout_grid(&mut cols[1], "play_readouts", &shell.readouts());
        });

        ui.add_space(8.0);
        let width = ui.available_width().min(420.0);
        if shell.supports_animation() {
            let label = if shell.state().animation.is_running() {
                "⏸ Stop"
            } else {
                "▶ Animate"
            };
            let (animate, reset) = two_button_row(ui, width, label, "⟲ Reset values");
            if animate {
                intents.push(LessonIntent::ToggleAnimation);
            }
            if reset {
                intents.push(LessonIntent::ResetInputs);
            }
        } else if ui.button("⟲ Reset values").clicked() {
            intents.push(LessonIntent::ResetInputs);
        }
    });
}
