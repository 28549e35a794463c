//! Keeps clicks on the season HUD from reaching the sun picker.
//!
//! egui state needs mutable context access, so it is sampled once per frame
//! into `PointerOverUi` and world input systems read that instead.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

/// Whether egui owned the pointer this frame.
#[derive(Resource, Default, Debug)]
pub struct PointerOverUi(pub bool);

/// Returns `true` when egui wants the pointer, i.e. the cursor is over an
/// egui area or egui is handling a drag/click.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

/// System: sample egui pointer ownership for this frame.
pub fn track_egui_pointer(mut contexts: EguiContexts, mut over_ui: ResMut<PointerOverUi>) {
    let wants = egui_wants_pointer(&mut contexts);
    if over_ui.0 != wants {
        over_ui.0 = wants;
    }
}
