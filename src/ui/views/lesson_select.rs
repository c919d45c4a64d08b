use crate::app::ExplainerApp;
use crate::model::LessonId;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use egui::{Align, Context, RichText};

pub fn ui_lesson_select(app: &mut ExplainerApp, ctx: &Context) {
    let mut chosen: Option<LessonId> = None;
    let est_height = 140.0 + 64.0 * app.catalog.len() as f32;

    centered_panel(ctx, est_height, 560.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(crate::APP_TITLE);
            ui.label("Pick a phenomenon to explore.");
            ui.add_space(16.0);

            let btn_w = (ui.available_width() * 0.95).clamp(200.0, 520.0);
            for lesson in &app.catalog {
                let label = RichText::new(format!("{}\n{}", lesson.title, lesson.tagline));
                if big_list_button(ui, label, btn_w, 56.0, true) {
                    chosen = Some(lesson.id);
                }
                ui.add_space(6.0);
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });

    if let Some(id) = chosen {
        app.open_lesson(id, None);
    }
}
