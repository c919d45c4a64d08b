use crate::app::{LessonIntent, LessonShell};
use crate::ui::helpers::big_list_button;
use crate::ui::layout::phase_frame;
use egui::{CollapsingHeader, Frame, Grid, RichText, Ui};

pub fn ui_transfer(shell: &LessonShell, ui: &mut Ui, intents: &mut Vec<LessonIntent>) {
    let apps = &shell.content().applications;
    phase_frame(ui, 760.0, |ui| {
        ui.heading("In the real world");
        ui.label(format!(
            "{} / {} applications explored",
            shell.completed_application_count(),
            apps.len()
        ));
        ui.add_space(8.0);

        for (row, app) in shell.application_rows().iter().zip(apps) {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(row.label()).strong().size(16.0));
                ui.label(&app.description);
                if !app.stats.is_empty() {
                    Grid::new(("application_stats", row.index))
                        .num_columns(2)
                        .spacing([16.0, 2.0])
                        .show(ui, |ui| {
                            for stat in &app.stats {
                                ui.label(RichText::new(&stat.label).weak());
                                ui.label(&stat.value);
                                ui.end_row();
                            }
                        });
                }
                ui.add_space(4.0);
                ui.label(RichText::new(&app.question).italics());
                if row.completed {
                    CollapsingHeader::new("Answer")
                        .id_salt(("application_answer", row.index))
                        .default_open(true)
                        .show(ui, |ui| ui.label(&app.answer));
                } else if ui.button("Reveal the answer").clicked() {
                    intents.push(LessonIntent::CompleteApplication(row.index));
                }
            });
            ui.add_space(6.0);
        }

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            if big_list_button(ui, "Take the test ▶", 240.0, 40.0, shell.can_advance()) {
                intents.push(LessonIntent::NextPhase);
            }
        });
    });
}
