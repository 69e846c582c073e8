//! tapcalc window

use egui::{Context, Key};
use tapcore::theme::{menu_bar, TapColors, TapTheme};
use tapcore::widgets::KeypadButton;

use crate::engine::CalculatorEngine;
use crate::intent::{Intent, KEYPAD_COLUMNS, KEYPAD_ROWS};
use crate::settings::Settings;

/// Keys never smaller than this, however small the window.
const MIN_KEY_HEIGHT: f32 = 28.0;

pub struct TapCalcApp {
    engine: CalculatorEngine,
    settings: Settings,
    show_about: bool,
}

impl TapCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            settings,
            show_about: false,
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        tapcore::theme::consume_special_keys(ctx);

        let intents: Vec<Intent> = ctx.input(|i| {
            i.events
                .iter()
                .flat_map(|event| match event {
                    egui::Event::Text(text) => text.chars().filter_map(Intent::from_char).collect::<Vec<_>>(),
                    egui::Event::Key { key, pressed: true, .. } => key_intent(*key).into_iter().collect(),
                    _ => Vec::new(),
                })
                .collect()
        });

        for intent in intents {
            self.engine.dispatch(intent);
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        TapTheme::display_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                // keep the line height even when the trace is empty
                let trace = match self.engine.expression_trace() {
                    "" => " ",
                    t => t,
                };
                ui.label(
                    egui::RichText::new(trace)
                        .font(egui::FontId::proportional(self.settings.trace_font_size))
                        .color(TapColors::BLACK),
                );
                ui.label(
                    egui::RichText::new(self.engine.display_value())
                        .font(egui::FontId::proportional(self.settings.display_font_size))
                        .color(TapColors::BLACK)
                        .strong(),
                );
            });
        });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let spacing = ui.spacing().item_spacing;
        let cols = KEYPAD_COLUMNS as f32;
        let rows = KEYPAD_ROWS.len() as f32;
        let key_w = ((ui.available_width() - spacing.x * (cols - 1.0)) / cols).floor();
        let key_h = ((ui.available_height() - spacing.y * (rows - 1.0)) / rows)
            .floor()
            .max(MIN_KEY_HEIGHT);
        let pending = self.engine.pending_operator();
        let key_font_size = self.settings.key_font_size;

        let mut clicked = None;
        for row in KEYPAD_ROWS {
            ui.horizontal(|ui| {
                for intent in row.iter() {
                    let span = intent.span() as f32;
                    let size = egui::vec2(key_w * span + spacing.x * (span - 1.0), key_h);
                    let label = intent.label();
                    let highlighted = matches!(intent, Intent::Operator(op) if pending == Some(*op));
                    let button = KeypadButton::new(&label, size)
                        .font_size(key_font_size)
                        .highlighted(highlighted);
                    if ui.add(button).clicked() {
                        clicked = Some(*intent);
                    }
                }
            });
        }

        if let Some(intent) = clicked {
            self.engine.dispatch(intent);
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        let resp = egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(concat!("version ", env!("CARGO_PKG_VERSION")));
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("keys: 0-9 . + - * / % =");
                ui.label("Enter: equals, Esc: clear, F9: +/-");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
        if let Some(r) = &resp {
            tapcore::dither::draw_window_shadow(ctx, r.response.rect);
        }
    }
}

/// Non-text keys that map to an intent.
fn key_intent(key: Key) -> Option<Intent> {
    match key {
        Key::Enter => Some(Intent::Equals),
        Key::Escape | Key::Delete => Some(Intent::Clear),
        Key::F9 => Some(Intent::ToggleSign),
        _ => None,
    }
}

impl eframe::App for TapCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.settings.keyboard_input && !self.show_about {
            self.handle_keys(ctx);
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("edit", |ui| {
                    if ui.button("clear").clicked() {
                        self.engine.clear();
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(TapColors::WHITE).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_keypad(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_intents() {
        assert_eq!(key_intent(Key::Enter), Some(Intent::Equals));
        assert_eq!(key_intent(Key::Escape), Some(Intent::Clear));
        assert_eq!(key_intent(Key::F9), Some(Intent::ToggleSign));
        // digits arrive as text events, not keys
        assert_eq!(key_intent(Key::Num5), None);
        assert_eq!(key_intent(Key::Equals), None);
    }
}
