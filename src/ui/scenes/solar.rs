use super::{canvas, fraction_of, heat_color, slider};
use crate::physics::Stage;
use crate::physics::solar::{self, Inputs};
use egui::{Align2, Color32, FontId, Pos2, Shape, Stroke, Ui, pos2, vec2};

pub fn controls(ui: &mut Ui, inputs: &Inputs, stage: Stage) -> Option<Inputs> {
    let mut next = *inputs;
    let mut changed = false;
    match stage {
        Stage::Main => {
            changed |= slider(ui, &mut next.cell_temp_c, solar::CELL_TEMP_RANGE_C, "Cell temperature", " °C");
        }
        Stage::Twist => {
            changed |= slider(ui, &mut next.ambient_temp_c, solar::AMBIENT_TEMP_RANGE_C, "Air temperature", " °C");
        }
    }
    changed |= slider(ui, &mut next.irradiance_w_m2, solar::IRRADIANCE_RANGE_W_M2, "Sunlight", " W/m²");
    changed.then_some(next)
}

pub fn paint(ui: &mut Ui, inputs: &Inputs, stage: Stage) {
    let (cell_temp, power) = match stage {
        Stage::Main => (inputs.cell_temp_c, solar::evaluate(inputs).power_w),
        Stage::Twist => {
            let o = solar::evaluate_twist(inputs);
            (o.cell_temp_c, o.power_w)
        }
    };
    let (rect, painter) = canvas(ui);
    let text_color = ui.visuals().text_color();

    // sol y rayos
    let sun = pos2(rect.left() + 60.0, rect.top() + 60.0);
    let sun_yellow = Color32::from_rgb(250, 200, 60);
    painter.circle_filled(sun, 24.0, sun_yellow);
    let ray_len = 12.0 + 30.0 * fraction_of(inputs.irradiance_w_m2, &solar::IRRADIANCE_RANGE_W_M2);
    for k in 0..12 {
        let angle = k as f32 * std::f32::consts::TAU / 12.0;
        let dir = vec2(angle.cos(), angle.sin());
        painter.line_segment(
            [sun + dir * 30.0, sun + dir * (30.0 + ray_len)],
            Stroke::new(2.0, sun_yellow),
        );
    }

    // panel inclinado, coloreado por temperatura de célula
    let base = pos2(rect.center().x - 40.0, rect.bottom() - 40.0);
    let panel: Vec<Pos2> = vec![
        base,
        base + vec2(180.0, 0.0),
        base + vec2(230.0, -110.0),
        base + vec2(50.0, -110.0),
    ];
    let heat = fraction_of(cell_temp, &solar::CELL_TEMP_RANGE_C);
    painter.add(Shape::convex_polygon(
        panel,
        heat_color(heat),
        Stroke::new(2.0, Color32::from_gray(40)),
    ));
    painter.text(
        base + vec2(115.0, -55.0),
        Align2::CENTER_CENTER,
        format!("{cell_temp:.0} °C"),
        FontId::proportional(18.0),
        Color32::WHITE,
    );
    if stage == Stage::Twist {
        painter.text(
            pos2(rect.left() + 20.0, rect.bottom() - 20.0),
            Align2::LEFT_CENTER,
            format!("air {:.0} °C", inputs.ambient_temp_c),
            FontId::proportional(14.0),
            text_color,
        );
    }

    // barra de potencia con referencia a la potencia nominal
    let full_scale = inputs.panel.rated_power_w * 1.3;
    let bar_max = rect.height() - 50.0;
    let bar_h = (power / full_scale).clamp(0.0, 1.0) as f32 * bar_max;
    let bar_x = rect.right() - 70.0;
    let bar_bottom = rect.bottom() - 25.0;
    painter.rect_filled(
        egui::Rect::from_min_max(pos2(bar_x, bar_bottom - bar_h), pos2(bar_x + 30.0, bar_bottom)),
        3.0,
        Color32::from_rgb(80, 170, 100),
    );
    let rated_y = bar_bottom - (inputs.panel.rated_power_w / full_scale) as f32 * bar_max;
    painter.line_segment(
        [pos2(bar_x - 8.0, rated_y), pos2(bar_x + 38.0, rated_y)],
        Stroke::new(1.0, text_color),
    );
    painter.text(
        pos2(bar_x + 15.0, rect.top() + 12.0),
        Align2::CENTER_TOP,
        format!("{power:.0} W"),
        FontId::proportional(16.0),
        text_color,
    );
}
