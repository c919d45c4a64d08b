mod helpers;
pub mod layout;
pub mod scenes;
pub mod views;

use crate::app::{ExplainerApp, LessonIntent};
use crate::model::{AppState, Phase};
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for ExplainerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        match self.state {
            AppState::LessonSelect => {
                bottom_panel(ctx, None, &mut Vec::new());
                views::lesson_select::ui_lesson_select(self, ctx);
            }
            AppState::Lesson => self.ui_lesson(ctx),
        }
    }
}

impl ExplainerApp {
    fn ui_lesson(&mut self, ctx: &Context) {
        let Some(shell) = self.shell.as_mut() else {
            // sin lección abierta, volver al selector
            self.state = AppState::LessonSelect;
            return;
        };

        let mut intents: Vec<LessonIntent> = Vec::new();
        let top = top_panel(shell, ctx, &mut intents);
        bottom_panel(ctx, Some(&*shell), &mut intents);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match shell.phase() {
                    Phase::Hook => views::hook::ui_hook(shell, ui, &mut intents),
                    Phase::Predict | Phase::TwistPredict => {
                        views::predict::ui_predict(shell, ui, &mut intents)
                    }
                    Phase::Play | Phase::TwistPlay => views::play::ui_play(shell, ui, &mut intents),
                    Phase::Review | Phase::TwistReview => {
                        views::review::ui_review(shell, ui, &mut intents)
                    }
                    Phase::Transfer => views::transfer::ui_transfer(shell, ui, &mut intents),
                    Phase::Test => views::quiz::ui_quiz(shell, ui, &mut intents),
                    Phase::Mastery => views::mastery::ui_mastery(shell, ui, &mut intents),
                });
        });

        for intent in intents {
            if intent == LessonIntent::Restart {
                self.confirm_restart = true;
            } else {
                shell.dispatch(intent);
            }
        }

        let dt = ctx.input(|i| i.stable_dt);
        if shell.tick(f64::from(dt)) {
            ctx.request_repaint();
        }

        if self.confirm_restart {
            layout::confirm_restart(self, ctx);
        }
        if top.close_lesson {
            self.close_lesson();
        }
    }
}
