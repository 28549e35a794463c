use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::season::{AdvanceSeason, Season, SeasonState};

/// Frames to wait before the first screenshot so textures and shaders are in.
const SCREENSHOT_WARMUP_FRAMES: u32 = 120;
/// Frames per season during the screenshot tour.
const SCREENSHOT_PERIOD: u32 = 12;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Cliffside".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            // Only read in the browser: render into the page's canvas.
            canvas: Some("canvas.webgl".to_string()),
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(Color::srgb_u8(0x0a, 0x0a, 0x0a)))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::Continuous,
    })
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // Screenshot mode: one shot per season, then exit
    if std::env::var("CLIFFSIDE_SCREENSHOTS").is_ok() {
        app.insert_resource(SeasonTour::default());
        app.add_systems(Update, drive_season_tour);
    }

    app.run();
}

#[derive(Resource, Default)]
struct SeasonTour {
    frame: u32,
    shots: usize,
}

fn drive_season_tour(
    mut commands: Commands,
    mut tour: ResMut<SeasonTour>,
    state: Res<SeasonState>,
    mut requests: EventWriter<AdvanceSeason>,
    mut exit: EventWriter<AppExit>,
) {
    tour.frame += 1;
    if tour.frame < SCREENSHOT_WARMUP_FRAMES {
        return;
    }

    if tour.shots >= Season::ALL.len() {
        // Give the last capture a few frames to land on disk
        if tour.frame > SCREENSHOT_WARMUP_FRAMES + SCREENSHOT_PERIOD * (tour.shots as u32 + 2) {
            exit.send(AppExit::Success);
        }
        return;
    }

    let phase = (tour.frame - SCREENSHOT_WARMUP_FRAMES) % SCREENSHOT_PERIOD;
    if phase == 0 && tour.shots > 0 {
        requests.send(AdvanceSeason);
    } else if phase == SCREENSHOT_PERIOD / 2 {
        let path = format!("/tmp/cliffside_{}.png", state.current.name().to_lowercase());
        info!("Capturing {}", path);
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(path));
        tour.shots += 1;
    }
}
