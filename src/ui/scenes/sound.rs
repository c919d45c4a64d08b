use super::{canvas, slider};
use crate::physics::Stage;
use crate::physics::sound::{self, Inputs, Medium, Wavefront};
use egui::{Align2, Color32, FontId, Pos2, Rect, Shape, Stroke, Ui, pos2, vec2};

pub fn controls(ui: &mut Ui, inputs: &Inputs, stage: Stage) -> Option<Inputs> {
    let mut next = *inputs;
    let mut changed = false;
    changed |= slider(ui, &mut next.distance_m, sound::DISTANCE_RANGE_M, "Distance to the wall", " m");
    changed |= slider(ui, &mut next.air_temp_c, sound::AIR_TEMP_RANGE_C, "Air temperature", " °C");
    if stage == Stage::Twist {
        ui.horizontal(|ui| {
            ui.label("Medium");
            for m in Medium::ALL {
                changed |= ui.selectable_value(&mut next.medium, m, m.name()).changed();
            }
        });
    }
    changed.then_some(next)
}

fn medium_tint(medium: Medium) -> Option<Color32> {
    match medium {
        Medium::Air => None,
        Medium::Water => Some(Color32::from_rgba_unmultiplied(60, 120, 200, 50)),
        Medium::Steel => Some(Color32::from_rgba_unmultiplied(150, 150, 160, 60)),
    }
}

pub fn paint(ui: &mut Ui, inputs: &Inputs, stage: Stage, wave: Option<Wavefront>) {
    let (rect, painter) = canvas(ui);
    let text_color = ui.visuals().text_color();
    let medium = match stage {
        Stage::Main => Medium::Air,
        Stage::Twist => inputs.medium,
    };
    let speed = medium.speed_m_s(inputs.air_temp_c);

    let ground_y = rect.bottom() - 30.0;
    let source_x = rect.left() + 50.0;
    let wall_x = rect.right() - 70.0;
    let span = wall_x - source_x;

    if let Some(tint) = medium_tint(medium) {
        painter.rect_filled(
            Rect::from_min_max(pos2(source_x, rect.top() + 40.0), pos2(wall_x, ground_y)),
            0.0,
            tint,
        );
    }

    painter.line_segment(
        [pos2(rect.left(), ground_y), pos2(rect.right(), ground_y)],
        Stroke::new(2.0, text_color),
    );

    // persona que da la palmada
    let head = pos2(source_x, ground_y - 58.0);
    painter.circle_filled(head, 8.0, text_color);
    painter.line_segment([head + vec2(0.0, 8.0), pos2(source_x, ground_y - 20.0)], Stroke::new(3.0, text_color));
    painter.line_segment([pos2(source_x, ground_y - 20.0), pos2(source_x - 8.0, ground_y)], Stroke::new(3.0, text_color));
    painter.line_segment([pos2(source_x, ground_y - 20.0), pos2(source_x + 8.0, ground_y)], Stroke::new(3.0, text_color));

    // pared
    painter.rect_filled(
        Rect::from_min_max(pos2(wall_x, rect.top() + 30.0), pos2(wall_x + 40.0, ground_y)),
        2.0,
        Color32::from_rgb(130, 110, 90),
    );

    if let Some(wave) = wave.filter(|w| !w.finished) {
        let x = source_x + (wave.position_m / inputs.distance_m) as f32 * span;
        let center_y = ground_y - 50.0;
        // frente de onda como arco abierto hacia donde viaja
        let (from, to) = if wave.returning { (2.4_f32, 3.9_f32) } else { (-0.75_f32, 0.75_f32) };
        let radius = 28.0;
        let arc_center = if wave.returning { pos2(x + radius, center_y) } else { pos2(x - radius, center_y) };
        let points: Vec<Pos2> = (0..=16)
            .map(|k| {
                let a = from + (to - from) * k as f32 / 16.0;
                arc_center + vec2(a.cos(), a.sin()) * radius
            })
            .collect();
        painter.add(Shape::line(points, Stroke::new(3.0, Color32::from_rgb(90, 160, 240))));
    }

    let echo = sound::echo_times(inputs.distance_m, speed);
    painter.text(
        pos2(rect.center().x, rect.top() + 12.0),
        Align2::CENTER_TOP,
        format!(
            "{:.0} m in {}: {speed:.0} m/s, echo after {:.3} s",
            inputs.distance_m,
            medium.name().to_lowercase(),
            echo.round_trip_s
        ),
        FontId::proportional(15.0),
        text_color,
    );
}
