use super::{canvas, fraction_of, heat_color, slider};
use crate::physics::Stage;
use crate::physics::expansion::{self, BendDirection, Inputs, Material};
use egui::{Align2, Color32, FontId, Pos2, Rect, Shape, Stroke, Ui, pos2, vec2};

/// Real expansion is far too small to see; the bar is drawn this much
/// longer than life.
const BAR_EXAGGERATION: f64 = 200.0;
const STRIP_EXAGGERATION: f64 = 5.0;

fn material_color(material: Material) -> Color32 {
    match material {
        Material::Steel => Color32::from_rgb(150, 155, 165),
        Material::Aluminium => Color32::from_rgb(205, 210, 220),
        Material::Copper => Color32::from_rgb(200, 115, 65),
        Material::Concrete => Color32::from_rgb(170, 160, 140),
        Material::Glass => Color32::from_rgb(140, 200, 215),
        Material::Invar => Color32::from_rgb(95, 100, 115),
    }
}

/// Material colour pulled a third of the way toward the heat colour.
fn tinted(material: Material, heat: Color32) -> Color32 {
    let base = material_color(material);
    let mix = |a: u8, b: u8| ((2 * u16::from(a) + u16::from(b)) / 3) as u8;
    Color32::from_rgb(mix(base.r(), heat.r()), mix(base.g(), heat.g()), mix(base.b(), heat.b()))
}

fn material_combo(ui: &mut Ui, label: &str, value: &mut Material) -> bool {
    let mut changed = false;
    egui::ComboBox::from_label(label)
        .selected_text(value.name())
        .show_ui(ui, |ui| {
            for m in Material::ALL {
                changed |= ui.selectable_value(value, m, m.name()).changed();
            }
        });
    changed
}

pub fn controls(ui: &mut Ui, inputs: &Inputs, stage: Stage) -> Option<Inputs> {
    let mut next = *inputs;
    let mut changed = false;
    match stage {
        Stage::Main => {
            changed |= material_combo(ui, "Material", &mut next.material);
            changed |= slider(ui, &mut next.length_m, expansion::LENGTH_RANGE_M, "Length", " m");
        }
        Stage::Twist => {
            changed |= material_combo(ui, "Top layer", &mut next.strip_top);
            changed |= material_combo(ui, "Bottom layer", &mut next.strip_bottom);
            changed |= slider(ui, &mut next.strip_length_mm, expansion::STRIP_LENGTH_RANGE_MM, "Strip length", " mm");
            changed |= slider(ui, &mut next.strip_thickness_mm, expansion::STRIP_THICKNESS_RANGE_MM, "Thickness", " mm");
        }
    }
    changed |= slider(ui, &mut next.delta_t_c, expansion::DELTA_T_RANGE_C, "Temperature change", " °C");
    changed.then_some(next)
}

pub fn paint(ui: &mut Ui, inputs: &Inputs, stage: Stage) {
    let (rect, painter) = canvas(ui);
    let text_color = ui.visuals().text_color();
    let heat = heat_color(fraction_of(inputs.delta_t_c, &expansion::DELTA_T_RANGE_C));
    match stage {
        Stage::Main => paint_bar(&painter, rect, inputs, tinted(inputs.material, heat), text_color),
        Stage::Twist => paint_strip(&painter, rect, inputs, heat, text_color),
    }
}

fn paint_bar(painter: &egui::Painter, rect: Rect, inputs: &Inputs, fill: Color32, text: Color32) {
    let out = expansion::evaluate(inputs);
    let base_len = rect.width() * 0.6;
    let left = rect.left() + rect.width() * 0.15;
    let mid_y = rect.center().y - 10.0;

    let strain = out.delta_length_mm / (inputs.length_m * 1000.0);
    let extra = (strain * BAR_EXAGGERATION) as f32 * base_len;
    let extra = extra.clamp(-0.3 * base_len, 0.3 * base_len);

    let bar = Rect::from_min_max(pos2(left, mid_y - 18.0), pos2(left + base_len + extra, mid_y + 18.0));
    painter.rect_filled(bar, 2.0, fill);

    // contorno original
    let outline = Stroke::new(1.5, text);
    let right = left + base_len;
    painter.extend(Shape::dashed_line(
        &[pos2(right, mid_y - 28.0), pos2(right, mid_y + 28.0)],
        outline,
        5.0,
        4.0,
    ));

    // regla
    let ruler_y = mid_y + 45.0;
    painter.line_segment([pos2(left, ruler_y), pos2(left + base_len * 1.3, ruler_y)], outline);
    for k in 0..=13 {
        let x = left + base_len * k as f32 / 10.0;
        let h = if k % 5 == 0 { 10.0 } else { 5.0 };
        painter.line_segment([pos2(x, ruler_y), pos2(x, ruler_y + h)], outline);
    }

    painter.text(
        pos2(rect.center().x, rect.top() + 16.0),
        Align2::CENTER_TOP,
        format!(
            "{} bar, {:.1} m: ΔL = {:+.2} mm (drawn ×{BAR_EXAGGERATION:.0})",
            inputs.material.name(),
            inputs.length_m,
            out.delta_length_mm
        ),
        FontId::proportional(15.0),
        text,
    );
}

fn paint_strip(painter: &egui::Painter, rect: Rect, inputs: &Inputs, heat: Color32, text: Color32) {
    let out = expansion::evaluate_twist(inputs);
    let len_px = rect.width() * 0.7;
    let clamp_x = rect.left() + rect.width() * 0.12;
    let mid_y = rect.center().y;

    // desviación relativa exagerada para que se vea la curva
    let ratio = (out.tip_deflection_mm / inputs.strip_length_mm * STRIP_EXAGGERATION).min(0.8) as f32;
    let sign = match out.bend {
        BendDirection::TowardBottom => 1.0,
        BendDirection::TowardTop => -1.0,
        BendDirection::Straight => 0.0,
    };
    let kappa = 2.0 * ratio / len_px;
    let centerline: Vec<Pos2> = (0..=40)
        .map(|k| {
            let s = len_px * k as f32 / 40.0;
            if kappa < 1e-6 {
                pos2(clamp_x + s, mid_y)
            } else {
                let theta = kappa * s;
                pos2(clamp_x + theta.sin() / kappa, mid_y + sign * (1.0 - theta.cos()) / kappa)
            }
        })
        .collect();

    let layer = 6.0;
    let offset = |dy: f32| -> Vec<Pos2> { centerline.iter().map(|p| *p + vec2(0.0, dy)).collect() };
    painter.add(Shape::line(offset(-layer / 2.0), Stroke::new(layer, tinted(inputs.strip_top, heat))));
    painter.add(Shape::line(offset(layer / 2.0), Stroke::new(layer, tinted(inputs.strip_bottom, heat))));

    painter.rect_filled(
        Rect::from_center_size(pos2(clamp_x - 10.0, mid_y), vec2(20.0, 50.0)),
        2.0,
        Color32::from_gray(90),
    );

    let caption = match out.bend {
        BendDirection::Straight => "straight".to_owned(),
        BendDirection::TowardBottom => format!("bends toward the {} side", inputs.strip_bottom.name()),
        BendDirection::TowardTop => format!("bends toward the {} side", inputs.strip_top.name()),
    };
    painter.text(
        pos2(rect.center().x, rect.top() + 16.0),
        Align2::CENTER_TOP,
        format!(
            "{} over {}: tip moves {:.2} mm, {caption}",
            inputs.strip_top.name(),
            inputs.strip_bottom.name(),
            out.tip_deflection_mm
        ),
        FontId::proportional(15.0),
        text,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_material_has_its_own_colour() {
        let heat = heat_color(0.5);
        for (i, a) in Material::ALL.into_iter().enumerate() {
            for b in Material::ALL.into_iter().skip(i + 1) {
                assert_ne!(tinted(a, heat), tinted(b, heat), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn heat_shifts_the_tint() {
        let cold = tinted(Material::Copper, heat_color(0.0));
        let hot = tinted(Material::Copper, heat_color(1.0));
        assert!(hot.r() > cold.r());
        assert!(hot.b() < cold.b());
    }
}
