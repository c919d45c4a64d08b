//! Painted experiment scenes and their slider panels, one module per lesson.
//!
//! Controls never touch the shell; they return edited inputs which the
//! caller turns into a `SetInputs` intent.

use std::ops::RangeInclusive;

use crate::app::LessonShell;
use crate::physics::SimInputs;
use egui::emath::Numeric;
use egui::{Color32, Painter, Rect, Sense, Slider, Ui, vec2};

pub mod expansion;
pub mod rocket;
pub mod solar;
pub mod sound;

const SCENE_HEIGHT: f32 = 240.0;

/// Draws the experiment of the visible stage.
pub fn paint(ui: &mut Ui, shell: &LessonShell) {
    let stage = shell.stage();
    match shell.state().sim {
        SimInputs::Solar(i) => solar::paint(ui, &i, stage),
        SimInputs::Expansion(i) => expansion::paint(ui, &i, stage),
        SimInputs::Sound(i) => sound::paint(ui, &i, stage, shell.echo_wavefront()),
        SimInputs::Rocket(i) => rocket::paint(ui, &i, stage),
    }
}

/// Sliders for the visible stage. Returns the edited inputs when any moved.
pub fn controls(ui: &mut Ui, shell: &LessonShell) -> Option<SimInputs> {
    let stage = shell.stage();
    match shell.state().sim {
        SimInputs::Solar(i) => solar::controls(ui, &i, stage).map(SimInputs::Solar),
        SimInputs::Expansion(i) => expansion::controls(ui, &i, stage).map(SimInputs::Expansion),
        SimInputs::Sound(i) => sound::controls(ui, &i, stage).map(SimInputs::Sound),
        SimInputs::Rocket(i) => rocket::controls(ui, &i, stage).map(SimInputs::Rocket),
    }
}

pub(crate) fn canvas(ui: &mut Ui) -> (Rect, Painter) {
    let size = vec2(ui.available_width(), SCENE_HEIGHT);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 6.0, ui.visuals().extreme_bg_color);
    (rect, painter)
}

pub(crate) fn slider<N: Numeric>(
    ui: &mut Ui,
    value: &mut N,
    range: RangeInclusive<N>,
    text: &str,
    suffix: &str,
) -> bool {
    ui.add(Slider::new(value, range).text(text).suffix(suffix))
        .changed()
}

/// Blue for cold, red for hot; `t` runs from 0 to 1.
pub(crate) fn heat_color(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let cold = [70.0, 130.0, 230.0];
    let hot = [230.0, 70.0, 50.0];
    let mix = |i: usize| (cold[i] + (hot[i] - cold[i]) * t) as u8;
    Color32::from_rgb(mix(0), mix(1), mix(2))
}

/// Where `value` sits inside `range`, as 0..=1.
pub(crate) fn fraction_of(value: f64, range: &RangeInclusive<f64>) -> f32 {
    let span = range.end() - range.start();
    if span <= 0.0 {
        return 0.0;
    }
    (((value - range.start()) / span) as f32).clamp(0.0, 1.0)
}
