use bevy::prelude::*;

pub mod animation;
pub mod config;
pub mod layout;
pub mod season;

use layout::SceneRng;
use season::{AdvanceSeason, SeasonChanged, SeasonState};

/// Ordering of the per-frame work. Chained in this order every `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Raw window/keyboard/mouse input routed into events and camera steps.
    Input,
    /// Season requests drained and applied to materials and lights.
    Season,
    /// Time-driven uniforms and transforms.
    Animate,
    /// Damped camera update, transform write, then particle billboards.
    Camera,
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SeasonState>()
            .init_resource::<SceneRng>()
            .add_event::<AdvanceSeason>()
            .add_event::<SeasonChanged>()
            .configure_sets(
                Update,
                (
                    FrameSet::Input,
                    FrameSet::Season,
                    FrameSet::Animate,
                    FrameSet::Camera,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                season::advance_season.in_set(FrameSet::Season),
            );
    }
}
