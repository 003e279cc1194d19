//! Legend listing each body's marker color and name.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::body::SOLAR_SYSTEM;
use crate::render::MarkerSettings;

/// Legend swatch radius in egui points.
const SWATCH_RADIUS: f32 = 6.0;

/// Convert a Bevy color to an egui color.
pub fn to_color32(color: Color) -> egui::Color32 {
    let c = color.to_srgba();
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(to_u8(c.red), to_u8(c.green), to_u8(c.blue), to_u8(c.alpha))
}

/// Legend in the top-right corner.
pub fn legend_system(mut contexts: EguiContexts, markers: Res<MarkerSettings>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("legend"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(egui::Color32::from_rgba_premultiplied(20, 20, 30, 200))
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    for body in &SOLAR_SYSTEM {
                        ui.horizontal(|ui| {
                            // Swatch keeps the relative marker size, capped to the row
                            let scale = body.marker_radius_points() / 7.5 * markers.size_multiplier;
                            let radius = (SWATCH_RADIUS * scale).clamp(2.0, SWATCH_RADIUS);
                            let (rect, _) = ui.allocate_exact_size(
                                egui::vec2(2.0 * SWATCH_RADIUS, 2.0 * SWATCH_RADIUS),
                                egui::Sense::hover(),
                            );
                            ui.painter()
                                .circle_filled(rect.center(), radius, to_color32(body.color));
                            ui.label(
                                egui::RichText::new(body.name)
                                    .color(egui::Color32::from_rgb(220, 220, 230)),
                            );
                        });
                    }
                });
        });
}
