//! Photovoltaic output versus cell temperature.

use std::ops::RangeInclusive;

use super::clamp_to;

/// Cell temperature at Standard Test Conditions.
pub const REFERENCE_TEMP_C: f64 = 25.0;
/// Irradiance at Standard Test Conditions.
pub const STC_IRRADIANCE_W_M2: f64 = 1000.0;

pub const CELL_TEMP_RANGE_C: RangeInclusive<f64> = -10.0..=70.0;
pub const IRRADIANCE_RANGE_W_M2: RangeInclusive<f64> = 200.0..=1200.0;
pub const AMBIENT_TEMP_RANGE_C: RangeInclusive<f64> = -10.0..=45.0;

/// Degrees per second for the cosmetic temperature sweep.
pub const SWEEP_RATE_C_PER_S: f64 = 20.0;

/// Datasheet values of the simulated module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSpec {
    pub rated_power_w: f64,
    pub power_coefficient_pct_per_c: f64,
    pub voc_stc_v: f64,
    pub voc_coefficient_pct_per_c: f64,
    pub noct_c: f64,
    pub efficiency_stc_pct: f64,
}

impl Default for PanelSpec {
    fn default() -> Self {
        Self {
            rated_power_w: 350.0,
            power_coefficient_pct_per_c: -0.4,
            voc_stc_v: 41.0,
            voc_coefficient_pct_per_c: -0.28,
            noct_c: 45.0,
            efficiency_stc_pct: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub cell_temp_c: f64,
    pub irradiance_w_m2: f64,
    pub ambient_temp_c: f64,
    pub panel: PanelSpec,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            cell_temp_c: REFERENCE_TEMP_C,
            irradiance_w_m2: STC_IRRADIANCE_W_M2,
            ambient_temp_c: 20.0,
            panel: PanelSpec::default(),
        }
    }
}

impl Inputs {
    pub fn clamped(self) -> Self {
        Self {
            cell_temp_c: clamp_to(self.cell_temp_c, &CELL_TEMP_RANGE_C),
            irradiance_w_m2: clamp_to(self.irradiance_w_m2, &IRRADIANCE_RANGE_W_M2),
            ambient_temp_c: clamp_to(self.ambient_temp_c, &AMBIENT_TEMP_RANGE_C),
            panel: self.panel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outputs {
    pub power_w: f64,
    /// Power lost relative to the same panel at 25 °C; negative is a gain.
    pub power_loss_w: f64,
    pub power_change_pct: f64,
    pub open_circuit_voltage_v: f64,
    pub efficiency_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwistOutputs {
    pub cell_temp_c: f64,
    pub power_w: f64,
    pub power_vs_rating_pct: f64,
}

fn derate(coefficient_pct_per_c: f64, cell_temp_c: f64) -> f64 {
    1.0 + coefficient_pct_per_c / 100.0 * (cell_temp_c - REFERENCE_TEMP_C)
}

/// Output power, floored at zero.
pub fn power_at(panel: &PanelSpec, cell_temp_c: f64, irradiance_w_m2: f64) -> f64 {
    let sun = irradiance_w_m2 / STC_IRRADIANCE_W_M2;
    (panel.rated_power_w * sun * derate(panel.power_coefficient_pct_per_c, cell_temp_c)).max(0.0)
}

pub fn power_loss(panel: &PanelSpec, cell_temp_c: f64, irradiance_w_m2: f64) -> f64 {
    power_at(panel, REFERENCE_TEMP_C, irradiance_w_m2) - power_at(panel, cell_temp_c, irradiance_w_m2)
}

pub fn open_circuit_voltage(panel: &PanelSpec, cell_temp_c: f64) -> f64 {
    (panel.voc_stc_v * derate(panel.voc_coefficient_pct_per_c, cell_temp_c)).max(0.0)
}

/// NOCT model: cells run above air temperature in proportion to sunlight.
pub fn cell_temperature(ambient_temp_c: f64, irradiance_w_m2: f64, noct_c: f64) -> f64 {
    ambient_temp_c + (noct_c - 20.0) / 800.0 * irradiance_w_m2
}

pub fn evaluate(inputs: &Inputs) -> Outputs {
    let i = inputs.clamped();
    let panel = &i.panel;
    let power_loss_w = power_loss(panel, i.cell_temp_c, i.irradiance_w_m2);
    let reference_w = power_at(panel, REFERENCE_TEMP_C, i.irradiance_w_m2);
    let power_change_pct = if reference_w > 0.0 {
        -power_loss_w / reference_w * 100.0
    } else {
        0.0
    };
    Outputs {
        power_w: power_at(panel, i.cell_temp_c, i.irradiance_w_m2),
        power_loss_w,
        power_change_pct,
        open_circuit_voltage_v: open_circuit_voltage(panel, i.cell_temp_c),
        efficiency_pct: (panel.efficiency_stc_pct
            * derate(panel.power_coefficient_pct_per_c, i.cell_temp_c))
        .max(0.0),
    }
}

pub fn evaluate_twist(inputs: &Inputs) -> TwistOutputs {
    let i = inputs.clamped();
    let cell_temp_c = cell_temperature(i.ambient_temp_c, i.irradiance_w_m2, i.panel.noct_c);
    let power_w = power_at(&i.panel, cell_temp_c, i.irradiance_w_m2);
    TwistOutputs {
        cell_temp_c,
        power_w,
        power_vs_rating_pct: power_w / i.panel.rated_power_w * 100.0,
    }
}
