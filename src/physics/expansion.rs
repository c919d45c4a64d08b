//! Linear thermal expansion and bimetallic strips.

use std::ops::RangeInclusive;

use super::clamp_to;

pub const LENGTH_RANGE_M: RangeInclusive<f64> = 0.1..=100.0;
pub const DELTA_T_RANGE_C: RangeInclusive<f64> = -50.0..=100.0;
pub const STRIP_LENGTH_RANGE_MM: RangeInclusive<f64> = 20.0..=200.0;
pub const STRIP_THICKNESS_RANGE_MM: RangeInclusive<f64> = 0.2..=4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Material {
    #[default]
    Steel,
    Aluminium,
    Copper,
    Concrete,
    Glass,
    Invar,
}

impl Material {
    pub const ALL: [Material; 6] = [
        Material::Steel,
        Material::Aluminium,
        Material::Copper,
        Material::Concrete,
        Material::Glass,
        Material::Invar,
    ];

    /// Coefficient of linear expansion, per °C.
    pub fn alpha_per_c(self) -> f64 {
        match self {
            Material::Steel => 12e-6,
            Material::Aluminium => 23e-6,
            Material::Copper => 17e-6,
            Material::Concrete => 12e-6,
            Material::Glass => 9e-6,
            Material::Invar => 1.2e-6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Material::Steel => "Steel",
            Material::Aluminium => "Aluminium",
            Material::Copper => "Copper",
            Material::Concrete => "Concrete",
            Material::Glass => "Glass",
            Material::Invar => "Invar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub material: Material,
    pub length_m: f64,
    pub delta_t_c: f64,
    pub strip_top: Material,
    pub strip_bottom: Material,
    pub strip_length_mm: f64,
    pub strip_thickness_mm: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            material: Material::Steel,
            length_m: 10.0,
            delta_t_c: 50.0,
            strip_top: Material::Aluminium,
            strip_bottom: Material::Steel,
            strip_length_mm: 100.0,
            strip_thickness_mm: 1.0,
        }
    }
}

impl Inputs {
    pub fn clamped(self) -> Self {
        Self {
            length_m: clamp_to(self.length_m, &LENGTH_RANGE_M),
            delta_t_c: clamp_to(self.delta_t_c, &DELTA_T_RANGE_C),
            strip_length_mm: clamp_to(self.strip_length_mm, &STRIP_LENGTH_RANGE_MM),
            strip_thickness_mm: clamp_to(self.strip_thickness_mm, &STRIP_THICKNESS_RANGE_MM),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outputs {
    pub delta_length_mm: f64,
    pub final_length_m: f64,
    pub strain_ppm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BendDirection {
    TowardTop,
    TowardBottom,
    Straight,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwistOutputs {
    /// Magnitude of the curvature, 1/m.
    pub curvature_per_m: f64,
    pub radius_m: Option<f64>,
    /// Small-angle tip deflection of a strip clamped at one end.
    pub tip_deflection_mm: f64,
    pub bend: BendDirection,
}

/// ΔL = α L₀ ΔT, in the units of `length`.
pub fn linear_expansion(alpha_per_c: f64, length: f64, delta_t_c: f64) -> f64 {
    alpha_per_c * length * delta_t_c
}

/// Curvature of an equal-thickness, equal-modulus bimetallic strip.
/// Positive when the top layer grows more.
pub fn bimetal_curvature(alpha_top: f64, alpha_bottom: f64, delta_t_c: f64, thickness_m: f64) -> f64 {
    3.0 * (alpha_top - alpha_bottom) * delta_t_c / (2.0 * thickness_m)
}

pub fn evaluate(inputs: &Inputs) -> Outputs {
    let i = inputs.clamped();
    let alpha = i.material.alpha_per_c();
    let delta_m = linear_expansion(alpha, i.length_m, i.delta_t_c);
    Outputs {
        delta_length_mm: delta_m * 1000.0,
        final_length_m: (i.length_m + delta_m).max(0.0),
        strain_ppm: alpha * i.delta_t_c * 1e6,
    }
}

pub fn evaluate_twist(inputs: &Inputs) -> TwistOutputs {
    let i = inputs.clamped();
    let signed = bimetal_curvature(
        i.strip_top.alpha_per_c(),
        i.strip_bottom.alpha_per_c(),
        i.delta_t_c,
        i.strip_thickness_mm / 1000.0,
    );
    let curvature_per_m = signed.abs();
    let length_m = i.strip_length_mm / 1000.0;
    // the layer that grows more sits on the outside of the curve
    let bend = if curvature_per_m < 1e-12 {
        BendDirection::Straight
    } else if signed > 0.0 {
        BendDirection::TowardBottom
    } else {
        BendDirection::TowardTop
    };
    TwistOutputs {
        curvature_per_m,
        radius_m: (curvature_per_m >= 1e-12).then(|| 1.0 / curvature_per_m),
        tip_deflection_mm: curvature_per_m * length_m * length_m / 2.0 * 1000.0,
        bend,
    }
}
