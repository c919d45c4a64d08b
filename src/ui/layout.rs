use crate::app::{ExplainerApp, LessonIntent, LessonShell};
use egui::{Button, CentralPanel, Context, Frame, ProgressBar, RichText, Ui, Visuals};

/// What the top bar asks of the surrounding app.
#[derive(Debug, Default)]
pub struct TopAction {
    pub close_lesson: bool,
}

pub fn top_panel(shell: &LessonShell, ctx: &Context, intents: &mut Vec<LessonIntent>) -> TopAction {
    let mut action = TopAction::default();
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("📚 Lessons").clicked() {
                action.close_lesson = true;
            }
            ui.separator();
            ui.label(RichText::new(&shell.content().title).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⟲ Restart").clicked() {
                    intents.push(LessonIntent::Restart);
                }
                let (current, total) = shell.position();
                ui.label(format!("{current} / {total}"));
            });
        });
        ui.add_space(2.0);
        ui.horizontal_wrapped(|ui| {
            for step in shell.phase_steps() {
                let button = Button::new(step.label()).selected(step.current);
                let response = ui
                    .add_enabled(step.enabled(), button)
                    .on_hover_text(step.phase.label());
                if response.clicked() && !step.current {
                    intents.push(LessonIntent::GoToPhase(step.phase));
                }
            }
        });
        ui.add(ProgressBar::new(shell.progress_fraction()).desired_height(4.0));
        ui.add_space(2.0);
    });
    action
}

/// Back/Next navigation for an open lesson plus the theme buttons.
pub fn bottom_panel(ctx: &Context, shell: Option<&LessonShell>, intents: &mut Vec<LessonIntent>) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if let Some(shell) = shell {
                let phase = shell.phase();
                if ui
                    .add_enabled(phase.prev().is_some(), Button::new("◀ Back"))
                    .clicked()
                {
                    intents.push(LessonIntent::PreviousPhase);
                }
                if shell.is_finished() {
                    ui.label(RichText::new("✔ Lesson complete").strong());
                } else if let Some(next) = phase.next() {
                    let next_btn = ui.add_enabled(
                        shell.can_advance(),
                        Button::new(format!("{} ▶", next.label())),
                    );
                    if next_btn.clicked() {
                        intents.push(LessonIntent::NextPhase);
                    }
                    if let Some(gate) = shell.blocking_gate(next) {
                        ui.label(RichText::new(gate.message()).weak());
                    }
                }
            }

            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🌙 Dark").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            });
        });
        ui.add_space(4.0);
    });
}

pub fn confirm_restart(app: &mut ExplainerApp, ctx: &Context) {
    egui::Window::new("Restart lesson")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Start this lesson over? Predictions, explored applications and quiz answers are cleared.");
            ui.horizontal(|ui| {
                if ui.button("Yes, restart").clicked() {
                    if let Some(shell) = app.shell.as_mut() {
                        shell.dispatch(LessonIntent::Restart);
                    }
                    app.confirm_restart = false;
                }
                if ui.button("No").clicked() {
                    app.confirm_restart = false;
                }
            });
        });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Contenedor de ancho limitado para el contenido de cada fase.
pub fn phase_frame(ui: &mut Ui, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    ui.vertical_centered(|ui| {
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 12))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), inner);
            });
    });
}
