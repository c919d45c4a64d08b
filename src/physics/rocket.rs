//! Launch cost of partially reusable rockets. Money is in millions of USD.

use std::ops::RangeInclusive;

use super::clamp_to;

pub const BOOSTER_COST_RANGE_MUSD: RangeInclusive<f64> = 10.0..=200.0;
pub const FLIGHTS_RANGE: RangeInclusive<u32> = 1..=50;
pub const REFURBISHMENT_RANGE_MUSD: RangeInclusive<f64> = 0.0..=20.0;
pub const UPPER_STAGE_RANGE_MUSD: RangeInclusive<f64> = 0.0..=50.0;
pub const PROPELLANT_RANGE_MUSD: RangeInclusive<f64> = 0.1..=5.0;
pub const TURNAROUND_RANGE_DAYS: RangeInclusive<u32> = 1..=90;
pub const FLEET_RANGE: RangeInclusive<u32> = 1..=10;
pub const PAYLOAD_RANGE_KG: RangeInclusive<f64> = 1000.0..=25000.0;
pub const TARGET_CADENCE_RANGE: RangeInclusive<u32> = 1..=200;

const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub booster_cost_musd: f64,
    pub flights_per_booster: u32,
    pub refurbishment_musd: f64,
    pub upper_stage_musd: f64,
    pub propellant_musd: f64,
    pub turnaround_days: u32,
    pub fleet_size: u32,
    pub payload_kg: f64,
    pub target_launches_per_year: u32,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            booster_cost_musd: 50.0,
            flights_per_booster: 10,
            refurbishment_musd: 2.0,
            upper_stage_musd: 10.0,
            propellant_musd: 0.5,
            turnaround_days: 21,
            fleet_size: 3,
            payload_kg: 15000.0,
            target_launches_per_year: 52,
        }
    }
}

fn clamp_count(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

impl Inputs {
    pub fn clamped(self) -> Self {
        Self {
            booster_cost_musd: clamp_to(self.booster_cost_musd, &BOOSTER_COST_RANGE_MUSD),
            flights_per_booster: clamp_count(self.flights_per_booster, &FLIGHTS_RANGE),
            refurbishment_musd: clamp_to(self.refurbishment_musd, &REFURBISHMENT_RANGE_MUSD),
            upper_stage_musd: clamp_to(self.upper_stage_musd, &UPPER_STAGE_RANGE_MUSD),
            propellant_musd: clamp_to(self.propellant_musd, &PROPELLANT_RANGE_MUSD),
            turnaround_days: clamp_count(self.turnaround_days, &TURNAROUND_RANGE_DAYS),
            fleet_size: clamp_count(self.fleet_size, &FLEET_RANGE),
            payload_kg: clamp_to(self.payload_kg, &PAYLOAD_RANGE_KG),
            target_launches_per_year: clamp_count(
                self.target_launches_per_year,
                &TARGET_CADENCE_RANGE,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outputs {
    pub amortized_booster_musd: f64,
    pub cost_per_launch_musd: f64,
    pub expendable_cost_musd: f64,
    /// Negative when reuse costs more than throwing the booster away.
    pub savings_pct: f64,
    pub cost_per_kg_usd: f64,
    pub break_even_flights: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwistOutputs {
    pub launches_per_year: f64,
    pub days_between_launches: f64,
    pub fleet_needed: u32,
    pub meets_target: bool,
}

pub fn launches_per_year(fleet_size: u32, turnaround_days: u32) -> f64 {
    if turnaround_days == 0 {
        return 0.0;
    }
    f64::from(fleet_size) * DAYS_PER_YEAR / f64::from(turnaround_days)
}

/// Smallest fleet able to fly `target` launches a year.
pub fn fleet_needed(target_launches_per_year: u32, turnaround_days: u32) -> u32 {
    let exact = f64::from(target_launches_per_year) * f64::from(turnaround_days) / DAYS_PER_YEAR;
    // values stay far below u32::MAX for the declared input ranges
    (exact.ceil() as u32).max(1)
}

/// Fewest flights for which reuse beats building a new booster every launch.
pub fn break_even_flights(booster_cost_musd: f64, refurbishment_musd: f64) -> Option<u32> {
    if refurbishment_musd >= booster_cost_musd || booster_cost_musd <= 0.0 {
        return None;
    }
    // booster / n + refurb < booster  <=>  n > booster / (booster - refurb)
    let bound = booster_cost_musd / (booster_cost_musd - refurbishment_musd);
    Some(((bound.floor() as u32) + 1).max(2))
}

pub fn evaluate(inputs: &Inputs) -> Outputs {
    let i = inputs.clamped();
    let amortized_booster_musd = i.booster_cost_musd / f64::from(i.flights_per_booster);
    let recurring = i.upper_stage_musd + i.propellant_musd;
    let cost_per_launch_musd = amortized_booster_musd + i.refurbishment_musd + recurring;
    let expendable_cost_musd = i.booster_cost_musd + recurring;
    Outputs {
        amortized_booster_musd,
        cost_per_launch_musd,
        expendable_cost_musd,
        savings_pct: (1.0 - cost_per_launch_musd / expendable_cost_musd) * 100.0,
        cost_per_kg_usd: cost_per_launch_musd * 1e6 / i.payload_kg,
        break_even_flights: break_even_flights(i.booster_cost_musd, i.refurbishment_musd),
    }
}

pub fn evaluate_twist(inputs: &Inputs) -> TwistOutputs {
    let i = inputs.clamped();
    let per_year = launches_per_year(i.fleet_size, i.turnaround_days);
    TwistOutputs {
        launches_per_year: per_year,
        days_between_launches: DAYS_PER_YEAR / per_year,
        fleet_needed: fleet_needed(i.target_launches_per_year, i.turnaround_days),
        meets_target: per_year + 1e-9 >= f64::from(i.target_launches_per_year),
    }
}
