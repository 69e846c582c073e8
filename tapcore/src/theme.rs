//! Monochrome theme
//!
//! Black on white, square corners, 1px black outlines. Uses egui's bundled
//! fonts so the binary carries no extra font data.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The whole palette.
pub struct TapColors;

impl TapColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Theme configuration
pub struct TapTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for TapTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 20.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 6.0,
        }
    }
}

impl TapTheme {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = TapColors::WHITE;
        visuals.panel_fill = TapColors::WHITE;
        visuals.faint_bg_color = TapColors::WHITE;
        visuals.extreme_bg_color = TapColors::WHITE;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, TapColors::BLACK);

        let outline = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = TapColors::WHITE;
            ws.weak_bg_fill = TapColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, TapColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, TapColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        outline(&mut visuals.widgets.noninteractive);
        outline(&mut visuals.widgets.inactive);
        outline(&mut visuals.widgets.hovered);
        outline(&mut visuals.widgets.active);
        outline(&mut visuals.widgets.open);

        // shadows are dithered by hand
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Framed area used for the calculator display.
    pub fn display_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(TapColors::WHITE)
            .stroke(Stroke::new(1.0, TapColors::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(TapColors::WHITE)
        .stroke(Stroke::new(1.0, TapColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
}

/// Strip Tab and Cmd +/-/= so they neither cycle focus nor zoom.
/// Call at the start of `update()`, before reading keyboard input.
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| match event {
            egui::Event::Key { key: egui::Key::Tab, .. } => false,
            egui::Event::Key { key, modifiers, .. } if modifiers.command => !matches!(
                key,
                egui::Key::Plus | egui::Key::Minus | egui::Key::Equals
            ),
            _ => true,
        });
    });
}
