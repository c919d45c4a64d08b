use super::*;
use crate::physics::{Stage, solar, sound};

/// Echo pulses play back slower than real time so they can be followed.
pub const ECHO_PLAYBACK_RATE: f64 = 0.5;

/// Purely cosmetic motion driven by frame time. Only the solar sweep and
/// the echo pulse animate; it never feeds back into grading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Animation {
    #[default]
    Idle,
    /// Cell temperature moving between the ends of its range.
    Sweep { rising: bool },
    /// Simulated seconds since the clap.
    Echo { elapsed_s: f64 },
}

impl Animation {
    pub fn is_running(&self) -> bool {
        !matches!(self, Animation::Idle)
    }
}

impl LessonShell {
    pub fn stage(&self) -> Stage {
        if self.state.phase.is_twist() {
            Stage::Twist
        } else {
            Stage::Main
        }
    }

    /// Sweep runs in the main experiment of the solar lesson, the echo in
    /// both experiments of the sound lesson.
    pub fn supports_animation(&self) -> bool {
        match (self.state.sim, self.state.phase) {
            (SimInputs::Solar(_), Phase::Play) => true,
            (SimInputs::Sound(_), Phase::Play | Phase::TwistPlay) => true,
            _ => false,
        }
    }

    pub fn start_animation(&mut self) {
        if !self.supports_animation() {
            return;
        }
        self.state.animation = match self.state.sim {
            SimInputs::Solar(_) => Animation::Sweep { rising: true },
            _ => Animation::Echo { elapsed_s: 0.0 },
        };
    }

    pub fn stop_animation(&mut self) {
        self.state.animation = Animation::Idle;
    }

    pub fn toggle_animation(&mut self) {
        if self.state.animation.is_running() {
            self.stop_animation();
        } else {
            self.start_animation();
        }
    }

    /// Speed the echo pulse travels at in the experiment on screen.
    pub fn echo_speed(&self) -> Option<f64> {
        let SimInputs::Sound(inputs) = self.state.sim else {
            return None;
        };
        Some(match self.stage() {
            Stage::Main => sound::speed_in_air(inputs.air_temp_c),
            Stage::Twist => inputs.speed_m_s(),
        })
    }

    /// Advances the running animation by `dt_s` seconds of frame time.
    /// Returns whether another frame is wanted.
    pub fn tick(&mut self, dt_s: f64) -> bool {
        let dt_s = if dt_s.is_finite() { dt_s.max(0.0) } else { 0.0 };
        match (self.state.animation, &mut self.state.sim) {
            (Animation::Idle, _) => false,
            (Animation::Sweep { rising }, SimInputs::Solar(inputs)) => {
                let (low, high) = (
                    *solar::CELL_TEMP_RANGE_C.start(),
                    *solar::CELL_TEMP_RANGE_C.end(),
                );
                let step = solar::SWEEP_RATE_C_PER_S * dt_s;
                let next = if rising {
                    inputs.cell_temp_c + step
                } else {
                    inputs.cell_temp_c - step
                };
                inputs.cell_temp_c = next.clamp(low, high);
                let rising = if next >= high {
                    false
                } else if next <= low {
                    true
                } else {
                    rising
                };
                self.state.animation = Animation::Sweep { rising };
                true
            }
            (Animation::Echo { elapsed_s }, SimInputs::Sound(inputs)) => {
                let distance = inputs.distance_m;
                let elapsed_s = elapsed_s + dt_s * ECHO_PLAYBACK_RATE;
                let finished = self
                    .echo_speed()
                    .is_none_or(|v| sound::wavefront(distance, v, elapsed_s).finished);
                self.state.animation = if finished {
                    Animation::Idle
                } else {
                    Animation::Echo { elapsed_s }
                };
                !finished
            }
            _ => {
                self.stop_animation();
                false
            }
        }
    }

    /// Position of the pulse while the echo animation runs.
    pub fn echo_wavefront(&self) -> Option<sound::Wavefront> {
        let Animation::Echo { elapsed_s } = self.state.animation else {
            return None;
        };
        let SimInputs::Sound(inputs) = self.state.sim else {
            return None;
        };
        Some(sound::wavefront(inputs.distance_m, self.echo_speed()?, elapsed_s))
    }
}
