// src/ui/helpers.rs
use crate::physics::Readout;
use egui::{Button, Color32, Grid, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: impl Into<egui::WidgetText>, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(ui: &mut Ui, panel_width: f32, left_label: &str, right_label: &str) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui.add_sized([btn_w, 36.0], Button::new(left_label)).clicked();
        clicked_right = ui.add_sized([btn_w, 36.0], Button::new(right_label)).clicked();
    });
    (clicked_left, clicked_right)
}

pub fn readout_grid(ui: &mut Ui, id: &str, readouts: &[Readout]) {
    Grid::new(id).num_columns(2).striped(true).spacing([16.0, 4.0]).show(ui, |ui| {
        for r in readouts {
            ui.label(r.label);
            ui.label(RichText::new(r.formatted()).monospace().strong());
            ui.end_row();
        }
    });
}

pub fn paragraphs(ui: &mut Ui, body: &[String]) {
    for p in body {
        ui.label(p);
        ui.add_space(6.0);
    }
}

pub fn numbered_steps(ui: &mut Ui, steps: &[String]) {
    for (i, step) in steps.iter().enumerate() {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(format!("{}.", i + 1)).strong());
            ui.label(step);
        });
    }
}

pub fn success_text(text: impl Into<String>) -> RichText {
    RichText::new(text).color(Color32::from_rgb(70, 180, 90)).strong()
}

pub fn failure_text(text: impl Into<String>) -> RichText {
    RichText::new(text).color(Color32::from_rgb(220, 90, 70)).strong()
}
