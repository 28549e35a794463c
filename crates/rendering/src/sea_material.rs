//! Custom material for the animated sea surface.
//!
//! The vertex stage (`shaders/sea.wgsl`) raises every vertex along the plane
//! normal by the same two-axis sine wave as `simulation::animation::WaveParams`;
//! the fragment stage writes a flat translucent blue.

// `#[derive(ShaderType)]` emits per-field `fn check` helpers that rustc reports as dead code.
#![allow(dead_code)]

use bevy::prelude::*;
use bevy::render::render_resource::{AsBindGroup, ShaderRef, ShaderType};

use simulation::animation::WaveParams;

const SEA_SHADER_PATH: &str = "shaders/sea.wgsl";

/// Translucent blue written by the fragment stage.
pub const SEA_COLOR: Vec4 = Vec4::new(0.0, 0.5, 1.0, 0.8);

/// Uniform block shared by both shader stages. Field order matches the WGSL
/// `SeaUniform` struct.
#[derive(Clone, Copy, Debug, ShaderType)]
pub struct SeaUniform {
    /// Seconds since startup; written every frame.
    pub time: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub speed: f32,
    pub color: Vec4,
}

impl SeaUniform {
    pub fn wave(&self) -> WaveParams {
        WaveParams {
            amplitude: self.amplitude,
            frequency: self.frequency,
            speed: self.speed,
        }
    }
}

impl Default for SeaUniform {
    fn default() -> Self {
        let wave = WaveParams::default();
        Self {
            time: 0.0,
            amplitude: wave.amplitude,
            frequency: wave.frequency,
            speed: wave.speed,
            color: SEA_COLOR,
        }
    }
}

#[derive(Asset, TypePath, AsBindGroup, Clone, Debug, Default)]
pub struct SeaMaterial {
    #[uniform(0)]
    pub uniform: SeaUniform,
}

impl Material for SeaMaterial {
    fn vertex_shader() -> ShaderRef {
        SEA_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        SEA_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }
}
