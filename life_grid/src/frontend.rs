// frontend.rs - What the session needs from the windowing/rendering backend

use egui::Color32;

/// Keys the session reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    C,
    N,
    Num(u8),  // Digit keys 1-9
}

/// Input state for the current frame. All queries are edge-triggered: they
/// return true only on the frame the transition happened.
pub trait Input {
    /// Pointer position in window pixels, if the pointer is over the window.
    fn cursor_position(&self) -> Option<(i32, i32)>;

    fn is_button_just_pressed(&self) -> bool;

    fn is_button_just_released(&self) -> bool;

    fn is_key_just_pressed(&self, key: Key) -> bool;
}

/// Drawing primitives on the frame being built.
pub trait Canvas {
    fn fill(&mut self, color: Color32);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color32);

    fn debug_text(&mut self, text: &str);
}
