//! Season state machine.
//!
//! `SeasonState` holds the single active season. Input never writes it
//! directly: pickers send [`AdvanceSeason`] and [`advance_season`] drains
//! those once per frame, stepping the cycle once per event and announcing
//! every step with a [`SeasonChanged`] event that the renderer turns into
//! material and light updates.

use bevy::prelude::*;

/// Hex color in `0xRRGGBB` form as an sRGB `Color`.
const fn hex(rgb: u32) -> Color {
    Color::srgb(
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    )
}

pub const SNOW_WHITE: Color = hex(0xffffff);
pub const FOREST_GREEN: Color = hex(0x228b22);
pub const AUTUMN_ORANGE: Color = hex(0xd2691e);

pub const COLD_BLUE_LIGHT: Color = hex(0xa9c8ff);
pub const NEUTRAL_LIGHT: Color = hex(0xffffff);
pub const WARM_AMBER_LIGHT: Color = hex(0xffd27f);
pub const WARM_ORANGE_LIGHT: Color = hex(0xffa500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Season {
    Winter,
    Spring,
    #[default]
    Summer,
    Fall,
}

/// The visual properties a season drives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonPalette {
    /// Color of the shared foliage material on every tree.
    pub foliage: Color,
    /// Color of the directional light.
    pub light: Color,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    /// The following season in the fixed Winter -> Spring -> Summer -> Fall cycle.
    pub fn next(self) -> Season {
        match self {
            Season::Winter => Season::Spring,
            Season::Spring => Season::Summer,
            Season::Summer => Season::Fall,
            Season::Fall => Season::Winter,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }

    pub fn palette(self) -> SeasonPalette {
        match self {
            Season::Winter => SeasonPalette {
                foliage: SNOW_WHITE,
                light: COLD_BLUE_LIGHT,
            },
            Season::Spring => SeasonPalette {
                foliage: FOREST_GREEN,
                light: NEUTRAL_LIGHT,
            },
            Season::Summer => SeasonPalette {
                foliage: FOREST_GREEN,
                light: WARM_AMBER_LIGHT,
            },
            Season::Fall => SeasonPalette {
                foliage: AUTUMN_ORANGE,
                light: WARM_ORANGE_LIGHT,
            },
        }
    }
}

/// The one active season. Starts in summer.
#[derive(Resource, Debug, Default)]
pub struct SeasonState {
    pub current: Season,
}

/// Request to move one step forward in the season cycle.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct AdvanceSeason;

/// Emitted after each step of the cycle with the season now active.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonChanged(pub Season);

/// System: drain `AdvanceSeason` requests. Every request is one step, so two
/// sun clicks in the same frame advance two seasons.
pub fn advance_season(
    mut requests: EventReader<AdvanceSeason>,
    mut state: ResMut<SeasonState>,
    mut changed: EventWriter<SeasonChanged>,
) {
    for _ in requests.read() {
        let from = state.current;
        state.current = from.next();
        info!("Season changed: {} -> {}", from.name(), state.current.name());
        changed.send(SeasonChanged(state.current));
    }
}
