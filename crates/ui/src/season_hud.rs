//! Season HUD: a small overlay naming the active season, with a hint that
//! the sun is clickable. `H` shows or hides it.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::season::{Season, SeasonState};

const HUD_KEY: KeyCode = KeyCode::KeyH;
const HINT: &str = "Click the sun to change season";

/// Whether the season HUD is drawn.
#[derive(Resource)]
pub struct SeasonHudVisible(pub bool);

impl Default for SeasonHudVisible {
    fn default() -> Self {
        Self(true)
    }
}

/// Heading shown for `season`.
pub fn season_heading(season: Season) -> String {
    format!("Season: {}", season.name())
}

pub fn hud_keybinds(keyboard: Res<ButtonInput<KeyCode>>, mut visible: ResMut<SeasonHudVisible>) {
    if keyboard.just_pressed(HUD_KEY) {
        visible.0 = !visible.0;
    }
}

/// Renders the HUD in the top-left corner.
pub fn season_hud_ui(
    mut contexts: EguiContexts,
    visible: Res<SeasonHudVisible>,
    state: Res<SeasonState>,
) {
    if !visible.0 {
        return;
    }

    egui::Area::new(egui::Id::new("season_hud"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .interactable(false)
        .show(contexts.ctx_mut(), |ui| {
            egui::Frame::window(ui.style()).show(ui, |ui| {
                ui.heading(season_heading(state.current));
                ui.label(HINT);
                ui.small("H: hide");
            });
        });
}
