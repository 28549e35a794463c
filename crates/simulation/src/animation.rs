//! Time-driven animation math shared by the frame loop and the sea shader.
//!
//! Both functions are absolute in time: they take the elapsed seconds since
//! startup and never accumulate per-frame deltas, so the result for a given
//! `t` is the same no matter how many frames led up to it.

use crate::config::{PARTICLE_SPIN_RATE, WAVE_AMPLITUDE, WAVE_FREQUENCY, WAVE_SPEED};

/// Parameters of the two-axis sine wave on the sea surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    pub amplitude: f32,
    pub frequency: f32,
    pub speed: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude: WAVE_AMPLITUDE,
            frequency: WAVE_FREQUENCY,
            speed: WAVE_SPEED,
        }
    }
}

impl WaveParams {
    /// Displacement along the surface normal at local surface coordinate (x, y).
    ///
    /// Mirrors the vertex stage in `shaders/sea.wgsl`.
    pub fn displacement(&self, x: f32, y: f32, t: f32) -> f32 {
        let phase = t * self.speed;
        (x * self.frequency + phase).sin() * self.amplitude
            + (y * self.frequency + phase).sin() * self.amplitude
    }
}

/// Rotation of the particle field around the vertical axis at time `t`.
#[inline]
pub fn particle_spin_angle(t: f32) -> f32 {
    t * PARTICLE_SPIN_RATE
}
