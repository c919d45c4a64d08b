use crate::app::{LessonIntent, LessonShell};
use crate::ui::helpers::success_text;
use crate::ui::layout::phase_frame;
use egui::{RichText, Ui};

pub fn ui_mastery(shell: &LessonShell, ui: &mut Ui, intents: &mut Vec<LessonIntent>) {
    let mastery = &shell.content().mastery;
    phase_frame(ui, 680.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("🏆").size(48.0));
            ui.heading(&mastery.headline);
            if let Some(summary) = shell.score_summary() {
                ui.label(success_text(summary.label()));
            }
        });
        ui.add_space(12.0);
        ui.label(RichText::new("What you learned").strong());
        for takeaway in &mastery.takeaways {
            ui.label(format!("• {takeaway}"));
        }
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            if ui.button("⟲ Start this lesson again").clicked() {
                intents.push(LessonIntent::Restart);
            }
        });
    });
}
