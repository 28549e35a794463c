use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use simulation::FrameSet;

pub mod season_hud;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<season_hud::SeasonHudVisible>()
            .add_systems(Startup, theme::apply_cliffside_theme)
            .add_systems(
                Update,
                (
                    season_hud::hud_keybinds.in_set(FrameSet::Input),
                    season_hud::season_hud_ui.after(FrameSet::Season),
                ),
            );
    }
}
