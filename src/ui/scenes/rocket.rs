use super::{canvas, slider};
use crate::physics::Stage;
use crate::physics::rocket::{self, Inputs};
use egui::{Align2, Color32, FontId, Painter, Rect, Stroke, Ui, pos2};

const BOOSTER: Color32 = Color32::from_rgb(70, 130, 230);
const REFURB: Color32 = Color32::from_rgb(240, 160, 60);
const UPPER: Color32 = Color32::from_rgb(150, 150, 160);
const PROPELLANT: Color32 = Color32::from_rgb(90, 180, 100);

pub fn controls(ui: &mut Ui, inputs: &Inputs, stage: Stage) -> Option<Inputs> {
    let mut next = *inputs;
    let mut changed = false;
    match stage {
        Stage::Main => {
            changed |= slider(ui, &mut next.booster_cost_musd, rocket::BOOSTER_COST_RANGE_MUSD, "Booster build cost", " M$");
            changed |= slider(ui, &mut next.flights_per_booster, rocket::FLIGHTS_RANGE, "Flights per booster", "");
            changed |= slider(ui, &mut next.refurbishment_musd, rocket::REFURBISHMENT_RANGE_MUSD, "Refurbishment", " M$");
            changed |= slider(ui, &mut next.upper_stage_musd, rocket::UPPER_STAGE_RANGE_MUSD, "Upper stage", " M$");
            changed |= slider(ui, &mut next.propellant_musd, rocket::PROPELLANT_RANGE_MUSD, "Propellant", " M$");
            changed |= slider(ui, &mut next.payload_kg, rocket::PAYLOAD_RANGE_KG, "Payload", " kg");
        }
        Stage::Twist => {
            changed |= slider(ui, &mut next.turnaround_days, rocket::TURNAROUND_RANGE_DAYS, "Turnaround", " days");
            changed |= slider(ui, &mut next.fleet_size, rocket::FLEET_RANGE, "Boosters in the fleet", "");
            changed |= slider(ui, &mut next.target_launches_per_year, rocket::TARGET_CADENCE_RANGE, "Target launches per year", "");
        }
    }
    changed.then_some(next)
}

pub fn paint(ui: &mut Ui, inputs: &Inputs, stage: Stage) {
    let (rect, painter) = canvas(ui);
    let text_color = ui.visuals().text_color();
    match stage {
        Stage::Main => paint_costs(&painter, rect, inputs, text_color),
        Stage::Twist => paint_calendar(&painter, rect, inputs, text_color),
    }
}

/// Stacked cost of one reusable launch beside one expendable launch.
fn paint_costs(painter: &Painter, rect: Rect, inputs: &Inputs, text: Color32) {
    let out = rocket::evaluate(inputs);
    let left = rect.left() + 130.0;
    let width = rect.right() - 30.0 - left;
    let scale = width / out.expendable_cost_musd.max(out.cost_per_launch_musd) as f32;

    let row = |y: f32, label: &str, parts: &[(f64, Color32)]| {
        painter.text(pos2(rect.left() + 16.0, y + 14.0), Align2::LEFT_CENTER, label, FontId::proportional(14.0), text);
        let mut x = left;
        for (value, color) in parts {
            let w = *value as f32 * scale;
            painter.rect_filled(Rect::from_min_max(pos2(x, y), pos2(x + w, y + 28.0)), 0.0, *color);
            x += w;
        }
    };

    let top = rect.top() + 50.0;
    row(
        top,
        "Reused",
        &[
            (out.amortized_booster_musd, BOOSTER),
            (inputs.refurbishment_musd, REFURB),
            (inputs.upper_stage_musd, UPPER),
            (inputs.propellant_musd, PROPELLANT),
        ],
    );
    row(
        top + 50.0,
        "Expendable",
        &[
            (inputs.booster_cost_musd, BOOSTER),
            (inputs.upper_stage_musd, UPPER),
            (inputs.propellant_musd, PROPELLANT),
        ],
    );

    let legend_y = top + 110.0;
    let legend = [("booster", BOOSTER), ("refurbishment", REFURB), ("upper stage", UPPER), ("propellant", PROPELLANT)];
    let mut x = left;
    for (name, color) in legend {
        painter.rect_filled(Rect::from_min_max(pos2(x, legend_y), pos2(x + 12.0, legend_y + 12.0)), 2.0, color);
        painter.text(pos2(x + 16.0, legend_y + 6.0), Align2::LEFT_CENTER, name, FontId::proportional(13.0), text);
        x += 120.0;
    }

    painter.text(
        pos2(rect.center().x, rect.top() + 14.0),
        Align2::CENTER_TOP,
        format!(
            "{:.1} M$ per launch vs {:.1} M$ expendable ({:+.0} %)",
            out.cost_per_launch_musd, out.expendable_cost_musd, -out.savings_pct
        ),
        FontId::proportional(15.0),
        text,
    );
}

/// One year of launches, one row per booster.
fn paint_calendar(painter: &Painter, rect: Rect, inputs: &Inputs, text: Color32) {
    let out = rocket::evaluate_twist(inputs);
    let i = inputs.clamped();
    let left = rect.left() + 40.0;
    let right = rect.right() - 20.0;
    let top = rect.top() + 50.0;
    let row_h = ((rect.bottom() - 20.0 - top) / i.fleet_size as f32).min(24.0);
    let day_x = |day: f64| left + (day / 365.0) as f32 * (right - left);
    let stagger = f64::from(i.turnaround_days) / f64::from(i.fleet_size);

    for b in 0..i.fleet_size {
        let y = top + row_h * b as f32 + row_h / 2.0;
        painter.line_segment([pos2(left, y), pos2(right, y)], Stroke::new(1.0, text.gamma_multiply(0.3)));
        painter.text(pos2(rect.left() + 12.0, y), Align2::LEFT_CENTER, format!("B{}", b + 1), FontId::proportional(12.0), text);
        let mut day = stagger * f64::from(b);
        while day < 365.0 {
            let x = day_x(day);
            painter.line_segment([pos2(x, y - row_h * 0.35), pos2(x, y + row_h * 0.35)], Stroke::new(2.0, BOOSTER));
            day += f64::from(i.turnaround_days);
        }
    }

    let verdict = if out.meets_target {
        format!("meets {} per year", i.target_launches_per_year)
    } else {
        format!("short of {}, needs {} boosters", i.target_launches_per_year, out.fleet_needed)
    };
    painter.text(
        pos2(rect.center().x, rect.top() + 14.0),
        Align2::CENTER_TOP,
        format!("{:.1} launches per year, {verdict}", out.launches_per_year),
        FontId::proportional(15.0),
        text,
    );
}
