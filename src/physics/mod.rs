//! Closed-form formula evaluators, one module per lesson.
//!
//! Every evaluator is a pure function of clamped inputs. [`SimInputs`] holds
//! the slider state of whichever lesson is open and turns it into the
//! readouts shown beside the scene.

use std::ops::RangeInclusive;

use crate::model::LessonId;

pub mod expansion;
pub mod rocket;
pub mod solar;
pub mod sound;

/// Clamps `value` into `range`; NaN maps to the lower bound.
pub(crate) fn clamp_to(value: f64, range: &RangeInclusive<f64>) -> f64 {
    if value.is_nan() {
        *range.start()
    } else {
        value.clamp(*range.start(), *range.end())
    }
}

/// Which experiment of the lesson is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Main,
    Twist,
}

/// A labelled derived value.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub decimals: usize,
}

impl Readout {
    fn new(label: &'static str, value: f64, unit: &'static str, decimals: usize) -> Self {
        Self {
            label,
            value,
            unit,
            decimals,
        }
    }

    pub fn formatted(&self) -> String {
        if self.unit.is_empty() {
            format!("{:.*}", self.decimals, self.value)
        } else {
            format!("{:.*} {}", self.decimals, self.value, self.unit)
        }
    }
}

/// Slider state of the open lesson.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimInputs {
    Solar(solar::Inputs),
    Expansion(expansion::Inputs),
    Sound(sound::Inputs),
    Rocket(rocket::Inputs),
}

impl SimInputs {
    pub fn for_lesson(lesson: LessonId) -> Self {
        match lesson {
            LessonId::SolarTemperature => SimInputs::Solar(solar::Inputs::default()),
            LessonId::ThermalExpansion => SimInputs::Expansion(expansion::Inputs::default()),
            LessonId::SpeedOfSound => SimInputs::Sound(sound::Inputs::default()),
            LessonId::RocketTurnaround => SimInputs::Rocket(rocket::Inputs::default()),
        }
    }

    pub fn lesson(&self) -> LessonId {
        match self {
            SimInputs::Solar(_) => LessonId::SolarTemperature,
            SimInputs::Expansion(_) => LessonId::ThermalExpansion,
            SimInputs::Sound(_) => LessonId::SpeedOfSound,
            SimInputs::Rocket(_) => LessonId::RocketTurnaround,
        }
    }

    pub fn clamped(self) -> Self {
        match self {
            SimInputs::Solar(i) => SimInputs::Solar(i.clamped()),
            SimInputs::Expansion(i) => SimInputs::Expansion(i.clamped()),
            SimInputs::Sound(i) => SimInputs::Sound(i.clamped()),
            SimInputs::Rocket(i) => SimInputs::Rocket(i.clamped()),
        }
    }

    pub fn readouts(&self, stage: Stage) -> Vec<Readout> {
        match (self, stage) {
            (SimInputs::Solar(i), Stage::Main) => {
                let o = solar::evaluate(i);
                vec![
                    Readout::new("Power", o.power_w, "W", 1),
                    Readout::new("Loss vs 25 °C", o.power_loss_w, "W", 1),
                    Readout::new("Change", o.power_change_pct, "%", 1),
                    Readout::new("Open-circuit voltage", o.open_circuit_voltage_v, "V", 2),
                    Readout::new("Efficiency", o.efficiency_pct, "%", 1),
                ]
            }
            (SimInputs::Solar(i), Stage::Twist) => {
                let o = solar::evaluate_twist(i);
                vec![
                    Readout::new("Cell temperature", o.cell_temp_c, "°C", 1),
                    Readout::new("Power", o.power_w, "W", 1),
                    Readout::new("Of rated power", o.power_vs_rating_pct, "%", 1),
                ]
            }
            (SimInputs::Expansion(i), Stage::Main) => {
                let o = expansion::evaluate(i);
                vec![
                    Readout::new("ΔL", o.delta_length_mm, "mm", 2),
                    Readout::new("Final length", o.final_length_m, "m", 4),
                    Readout::new("Strain", o.strain_ppm, "ppm", 0),
                ]
            }
            (SimInputs::Expansion(i), Stage::Twist) => {
                let o = expansion::evaluate_twist(i);
                vec![
                    Readout::new("Curvature", o.curvature_per_m, "1/m", 3),
                    Readout::new("Tip deflection", o.tip_deflection_mm, "mm", 2),
                ]
            }
            (SimInputs::Sound(i), Stage::Main) => {
                let o = sound::evaluate(&sound::Inputs {
                    medium: sound::Medium::Air,
                    ..*i
                });
                vec![
                    Readout::new("Speed", o.speed_m_s, "m/s", 1),
                    Readout::new("One way", o.one_way_s, "s", 3),
                    Readout::new("Round trip", o.round_trip_s, "s", 3),
                    Readout::new("At 343 m/s", o.assumed_round_trip_s, "s", 3),
                ]
            }
            (SimInputs::Sound(i), Stage::Twist) => {
                let o = sound::evaluate(i);
                vec![
                    Readout::new("Speed", o.speed_m_s, "m/s", 1),
                    Readout::new("Round trip", o.round_trip_s * 1000.0, "ms", 1),
                ]
            }
            (SimInputs::Rocket(i), Stage::Main) => {
                let o = rocket::evaluate(i);
                let mut out = vec![
                    Readout::new("Booster share", o.amortized_booster_musd, "M$", 2),
                    Readout::new("Cost per launch", o.cost_per_launch_musd, "M$", 2),
                    Readout::new("Expendable launch", o.expendable_cost_musd, "M$", 2),
                    Readout::new("Savings", o.savings_pct, "%", 1),
                    Readout::new("Cost per kg", o.cost_per_kg_usd, "$", 0),
                ];
                if let Some(n) = o.break_even_flights {
                    out.push(Readout::new("Break-even flights", f64::from(n), "", 0));
                }
                out
            }
            (SimInputs::Rocket(i), Stage::Twist) => {
                let o = rocket::evaluate_twist(i);
                vec![
                    Readout::new("Launches per year", o.launches_per_year, "", 1),
                    Readout::new("Days between launches", o.days_between_launches, "d", 1),
                    Readout::new("Fleet needed", f64::from(o.fleet_needed), "", 0),
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_their_lesson() {
        for id in LessonId::ALL {
            assert_eq!(SimInputs::for_lesson(id).lesson(), id);
        }
    }

    #[test]
    fn every_lesson_has_readouts_for_both_stages() {
        for id in LessonId::ALL {
            let sim = SimInputs::for_lesson(id);
            assert!(!sim.readouts(Stage::Main).is_empty());
            assert!(!sim.readouts(Stage::Twist).is_empty());
        }
    }

    #[test]
    fn sound_main_stage_always_uses_air() {
        let sim = SimInputs::Sound(sound::Inputs {
            medium: sound::Medium::Steel,
            ..sound::Inputs::default()
        });
        let readouts = sim.readouts(Stage::Main);
        assert!((readouts[0].value - sound::speed_in_air(20.0)).abs() < 1e-9);
    }

    #[test]
    fn sound_compares_against_rule_of_thumb() {
        let sim = SimInputs::Sound(sound::Inputs::default());
        let readouts = sim.readouts(Stage::Main);
        let assumed = readouts.last().expect("rule-of-thumb readout");
        assert_eq!(assumed.label, "At 343 m/s");
        assert!((assumed.value - 340.0 / sound::ASSUMED_SPEED_M_S).abs() < 1e-9);
    }

    #[test]
    fn readouts_format_with_units() {
        let r = Readout::new("Power", 308.04, "W", 1);
        assert_eq!(r.formatted(), "308.0 W");
        let bare = Readout::new("Fleet", 3.0, "", 0);
        assert_eq!(bare.formatted(), "3");
    }

    #[test]
    fn nan_clamps_to_lower_bound() {
        assert_eq!(clamp_to(f64::NAN, &(1.0..=2.0)), 1.0);
        assert_eq!(clamp_to(5.0, &(1.0..=2.0)), 2.0);
    }
}
