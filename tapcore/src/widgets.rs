//! Custom widgets

use egui::{Response, Ui, Vec2, Widget};

use crate::dither;
use crate::theme::TapColors;

/// A fixed-size keypad key: white, 1px outline, dithered while pressed.
pub struct KeypadButton<'a> {
    label: &'a str,
    size: Vec2,
    font_size: f32,
    highlighted: bool,
}

impl<'a> KeypadButton<'a> {
    pub fn new(label: &'a str, size: Vec2) -> Self {
        Self { label, size, font_size: 18.0, highlighted: false }
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Draw as if held down, e.g. for the pending operator.
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}

impl<'a> Widget for KeypadButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, TapColors::WHITE);
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, TapColors::BLACK));

            let pressed = response.is_pointer_button_down_on();
            if pressed {
                dither::draw_dither_selection(painter, rect);
            } else if self.highlighted || response.hovered() {
                dither::draw_dither_hover(painter, rect);
            }

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(self.font_size),
                if pressed { TapColors::WHITE } else { TapColors::BLACK },
            );
        }

        response
    }
}
