// ui.rs - Bridges egui input and painting to the session

use eframe::egui;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Vec2};
use life_grid::{Canvas, Input, Key, Session};

/// egui keys and the session keys they map to.
const KEYS: [(egui::Key, Key); 12] = [
    (egui::Key::Space, Key::Space),
    (egui::Key::C,     Key::C),
    (egui::Key::N,     Key::N),
    (egui::Key::Num1,  Key::Num(1)),
    (egui::Key::Num2,  Key::Num(2)),
    (egui::Key::Num3,  Key::Num(3)),
    (egui::Key::Num4,  Key::Num(4)),
    (egui::Key::Num5,  Key::Num(5)),
    (egui::Key::Num6,  Key::Num(6)),
    (egui::Key::Num7,  Key::Num(7)),
    (egui::Key::Num8,  Key::Num(8)),
    (egui::Key::Num9,  Key::Num(9)),
];

const CAPTION_FONT_SIZE: f32 = 14.0;
const CAPTION_COLOR: Color32 = Color32::from_rgb(200, 30, 30);

#[derive(Default)]
pub struct LifeApp {
    session: Session,
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;

                let input = FrameInput::capture(ctx, origin);
                self.session.update(&input);

                let mut canvas = PainterCanvas { painter: ui.painter(), origin };
                self.session.draw(&mut canvas);
            });

        // Keep the frame loop running; the cadence counts frames
        ctx.request_repaint();
    }
}

/// This frame's input, captured from egui in window pixels relative to the
/// drawing area.
struct FrameInput {
    cursor: Option<(i32, i32)>,
    pressed: bool,
    released: bool,
    keys: Vec<Key>,
}

impl FrameInput {
    fn capture(ctx: &egui::Context, origin: Pos2) -> Self {
        ctx.input(|i| Self {
            cursor: i.pointer.latest_pos().map(|pos| to_pixel(pos, origin)),
            pressed: i.pointer.primary_pressed(),
            released: i.pointer.primary_released(),
            keys: KEYS
                .iter()
                .filter(|(egui_key, _)| i.key_pressed(*egui_key))
                .map(|&(_, key)| key)
                .collect(),
        })
    }
}

impl Input for FrameInput {
    fn cursor_position(&self) -> Option<(i32, i32)> {
        self.cursor
    }

    fn is_button_just_pressed(&self) -> bool {
        self.pressed
    }

    fn is_button_just_released(&self) -> bool {
        self.released
    }

    fn is_key_just_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}

fn to_pixel(pos: Pos2, origin: Pos2) -> (i32, i32) {
    let offset = pos - origin;
    (offset.x.floor() as i32, offset.y.floor() as i32)
}

struct PainterCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl Canvas for PainterCanvas<'_> {
    fn fill(&mut self, color: Color32) {
        self.painter.rect_filled(self.painter.clip_rect(), 0.0, color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color32) {
        let rect = Rect::from_min_size(self.origin + Vec2::new(x, y), Vec2::new(width, height));
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn debug_text(&mut self, text: &str) {
        self.painter.text(
            self.origin + Vec2::splat(4.0),
            Align2::LEFT_TOP,
            text,
            FontId::monospace(CAPTION_FONT_SIZE),
            CAPTION_COLOR,
        );
    }
}
