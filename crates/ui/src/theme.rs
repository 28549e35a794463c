use bevy_egui::{egui, EguiContexts};

/// Dark translucent panels so the HUD sits quietly over the night-toned scene.
pub fn apply_cliffside_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgba_unmultiplied(18, 20, 28, 200);
    let text = egui::Color32::from_rgb(225, 228, 235);

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.window_stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(60, 66, 82));
    style.visuals.override_text_color = Some(text);
    style.visuals.window_corner_radius = egui::CornerRadius::same(6);

    ctx.set_style(style);
}
