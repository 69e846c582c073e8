//! Checkerboard dither overlays.
//!
//! Pressed and hovered keys are marked with a dither pattern instead of a
//! solid fill, so the key caption stays readable underneath.

use egui::{Color32, Painter, Pos2, Rect, Vec2};

/// Pixel origins of a checkerboard covering `rect`.
///
/// `density` 1 fills every other pixel, larger values spread the pattern
/// out. Only whole pixels fully inside `rect` are produced.
pub fn dither_points(rect: Rect, density: u32) -> impl Iterator<Item = Pos2> {
    let step = density.max(1) as i32;
    let x0 = rect.min.x.ceil() as i32;
    let y0 = rect.min.y.ceil() as i32;
    let x1 = rect.max.x.floor() as i32;
    let y1 = rect.max.y.floor() as i32;

    (y0..y1.max(y0)).step_by(step as usize).flat_map(move |y| {
        let row = (y - y0) / step;
        let offset = if row % 2 == 0 { 0 } else { step };
        ((x0 + offset)..x1.max(x0))
            .step_by((step * 2) as usize)
            .map(move |x| Pos2::new(x as f32, y as f32))
    })
}

pub fn draw_dither_rect(painter: &Painter, rect: Rect, color: Color32, density: u32) {
    for p in dither_points(rect, density) {
        painter.rect_filled(Rect::from_min_size(p, Vec2::splat(1.0)), 0.0, color);
    }
}

/// Dense pattern for a pressed key.
pub fn draw_dither_selection(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 1);
}

/// Sparse pattern for hover.
pub fn draw_dither_hover(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 2);
}

/// Dithered drop shadow offset 4px down-right of a window.
pub fn draw_window_shadow(ctx: &egui::Context, window_rect: Rect) {
    let shadow_rect = window_rect.translate(Vec2::splat(4.0));
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::PanelResizeLine,
        egui::Id::new("dither_shadows"),
    ));
    draw_dither_rect(&painter, shadow_rect, Color32::BLACK, 2);
}
