//! Speed of sound and echo timing.

use std::ops::RangeInclusive;

use super::clamp_to;

/// Speed used when the lesson assumes room-temperature air.
pub const ASSUMED_SPEED_M_S: f64 = 343.0;

pub const DISTANCE_RANGE_M: RangeInclusive<f64> = 10.0..=500.0;
pub const AIR_TEMP_RANGE_C: RangeInclusive<f64> = -20.0..=40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Medium {
    #[default]
    Air,
    Water,
    Steel,
}

impl Medium {
    pub const ALL: [Medium; 3] = [Medium::Air, Medium::Water, Medium::Steel];

    pub fn speed_m_s(self, air_temp_c: f64) -> f64 {
        match self {
            Medium::Air => speed_in_air(air_temp_c),
            Medium::Water => 1480.0,
            Medium::Steel => 5960.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Medium::Air => "Air",
            Medium::Water => "Water",
            Medium::Steel => "Steel",
        }
    }
}

/// Linear approximation valid around everyday temperatures.
pub fn speed_in_air(temp_c: f64) -> f64 {
    331.3 + 0.606 * temp_c
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EchoTimes {
    pub one_way_s: f64,
    pub round_trip_s: f64,
}

pub fn echo_times(distance_m: f64, speed_m_s: f64) -> EchoTimes {
    if speed_m_s <= 0.0 {
        return EchoTimes {
            one_way_s: f64::INFINITY,
            round_trip_s: f64::INFINITY,
        };
    }
    let one_way_s = distance_m / speed_m_s;
    EchoTimes {
        one_way_s,
        round_trip_s: 2.0 * one_way_s,
    }
}

pub fn distance_from_echo(round_trip_s: f64, speed_m_s: f64) -> f64 {
    speed_m_s * round_trip_s / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub distance_m: f64,
    pub air_temp_c: f64,
    pub medium: Medium,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            distance_m: 170.0,
            air_temp_c: 20.0,
            medium: Medium::Air,
        }
    }
}

impl Inputs {
    pub fn clamped(self) -> Self {
        Self {
            distance_m: clamp_to(self.distance_m, &DISTANCE_RANGE_M),
            air_temp_c: clamp_to(self.air_temp_c, &AIR_TEMP_RANGE_C),
            medium: self.medium,
        }
    }

    pub fn speed_m_s(&self) -> f64 {
        let i = self.clamped();
        i.medium.speed_m_s(i.air_temp_c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outputs {
    pub speed_m_s: f64,
    pub one_way_s: f64,
    pub round_trip_s: f64,
    /// Round trip predicted by the 343 m/s rule of thumb.
    pub assumed_round_trip_s: f64,
}

pub fn evaluate(inputs: &Inputs) -> Outputs {
    let i = inputs.clamped();
    let speed_m_s = i.speed_m_s();
    let times = echo_times(i.distance_m, speed_m_s);
    Outputs {
        speed_m_s,
        one_way_s: times.one_way_s,
        round_trip_s: times.round_trip_s,
        assumed_round_trip_s: echo_times(i.distance_m, ASSUMED_SPEED_M_S).round_trip_s,
    }
}

/// Where the pulse is after `elapsed_s` of simulated time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wavefront {
    /// Distance from the source, metres.
    pub position_m: f64,
    pub returning: bool,
    pub finished: bool,
}

pub fn wavefront(distance_m: f64, speed_m_s: f64, elapsed_s: f64) -> Wavefront {
    let travelled = (speed_m_s * elapsed_s).max(0.0);
    if travelled <= distance_m {
        Wavefront {
            position_m: travelled,
            returning: false,
            finished: false,
        }
    } else if travelled <= 2.0 * distance_m {
        Wavefront {
            position_m: 2.0 * distance_m - travelled,
            returning: true,
            finished: false,
        }
    } else {
        Wavefront {
            position_m: 0.0,
            returning: true,
            finished: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_from_170_metres() {
        let t = echo_times(170.0, ASSUMED_SPEED_M_S);
        assert!((t.one_way_s - 0.495).abs() < 0.002);
        assert!((t.round_trip_s - 0.990).abs() < 0.002);
        assert!((t.round_trip_s - 2.0 * t.one_way_s).abs() < 1e-12);
    }

    #[test]
    fn distance_inverts_echo_time() {
        let t = echo_times(250.0, 1480.0);
        assert!((distance_from_echo(t.round_trip_s, 1480.0) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn warmer_air_is_faster() {
        assert!(speed_in_air(30.0) > speed_in_air(0.0));
        assert!((speed_in_air(20.0) - 343.42).abs() < 1e-9);
    }

    #[test]
    fn water_and_steel_beat_air() {
        let air = Medium::Air.speed_m_s(20.0);
        assert!(Medium::Water.speed_m_s(20.0) > 4.0 * air);
        assert!(Medium::Steel.speed_m_s(20.0) > Medium::Water.speed_m_s(20.0));
    }

    #[test]
    fn slider_extremes_keep_times_positive() {
        for d in [*DISTANCE_RANGE_M.start(), *DISTANCE_RANGE_M.end()] {
            for t in [*AIR_TEMP_RANGE_C.start(), *AIR_TEMP_RANGE_C.end()] {
                let out = evaluate(&Inputs {
                    distance_m: d,
                    air_temp_c: t,
                    medium: Medium::Air,
                });
                assert!(out.speed_m_s > 0.0);
                assert!(out.one_way_s > 0.0 && out.one_way_s.is_finite());
            }
        }
    }

    #[test]
    fn wavefront_goes_out_and_back() {
        let out = wavefront(100.0, 100.0, 0.5);
        assert_eq!(out.position_m, 50.0);
        assert!(!out.returning);

        let back = wavefront(100.0, 100.0, 1.5);
        assert_eq!(back.position_m, 50.0);
        assert!(back.returning);

        assert!(wavefront(100.0, 100.0, 2.5).finished);
    }

    #[test]
    fn zero_speed_never_returns() {
        assert!(echo_times(100.0, 0.0).round_trip_s.is_infinite());
    }
}
