// session.rs - Per-frame driver: input handling, cadence and drawing

use crate::config::{BACKGROUND, CADENCE_DIVISOR, LIVE_CELL, Layout, PAUSED_CAPTION};
use crate::frontend::{Canvas, Input, Key};
use crate::grid::Grid;
use crate::patterns::{self, PATTERNS};

/// Everything that lives for the length of one run: the grid, the two mode
/// flags and the frame counters. Owned by the application and handed to
/// nothing else.
///
/// `drawing` and `simulating` are independent, so cells can be painted while
/// the simulation runs.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    drawing: bool,
    simulating: bool,
    frame: u32,       // Always below CADENCE_DIVISOR
    generation: u64,  // Steps since the last clear
}

impl Session {
    pub fn new(layout: Layout) -> Self {
        Self {
            grid: Grid::with_layout(layout),
            drawing: false,
            simulating: false,
            frame: 0,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn is_simulating(&self) -> bool {
        self.simulating
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply this frame's input and, on cadence, advance the simulation.
    pub fn update(&mut self, input: &impl Input) {
        if input.is_button_just_pressed() {
            self.drawing = true;
            self.paint(input);
        }

        if input.is_key_just_pressed(Key::Space) {
            self.simulating = !self.simulating;
            log::debug!("simulation {}", if self.simulating { "started" } else { "paused" });
        }

        self.handle_keys(input);

        if self.simulating && self.frame == 0 {
            self.step();
        }

        if input.is_button_just_released() {
            self.drawing = false;
        }

        if self.drawing {
            self.paint(input);
        }
    }

    /// Render the grid and count the frame.
    pub fn draw(&mut self, canvas: &mut impl Canvas) {
        canvas.fill(BACKGROUND);

        let size = self.grid.cell_size() as f32;
        for (x, y) in self.grid.alive_cells() {
            canvas.fill_rect(x as f32 * size, y as f32 * size, size, size, LIVE_CELL);
        }

        if !self.simulating {
            canvas.debug_text(&self.caption());
        }

        self.frame = (self.frame + 1) % CADENCE_DIVISOR;
    }

    pub fn step(&mut self) {
        self.grid.step();
        self.generation += 1;
        log::trace!("generation {}: {} alive", self.generation, self.grid.population());
    }

    /// Kill every cell, reset the generation count and pause.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.simulating = false;
        log::info!("grid cleared");
    }

    pub fn caption(&self) -> String {
        format!(
            "{PAUSED_CAPTION}\nGeneration: {}  Population: {}",
            self.generation,
            self.grid.population()
        )
    }

    fn handle_keys(&mut self, input: &impl Input) {
        if input.is_key_just_pressed(Key::C) {
            self.clear();
        }

        if !self.simulating && input.is_key_just_pressed(Key::N) {
            self.step();
        }

        for (n, pattern) in (1..).zip(PATTERNS) {
            if !input.is_key_just_pressed(Key::Num(n)) {
                continue;
            }

            let origin = input
                .cursor_position()
                .and_then(|(px, py)| self.grid.cell_at_pixel(px, py));

            match origin {
                Some(origin) => {
                    patterns::stamp(&mut self.grid, pattern, origin);
                }
                None => log::debug!("no cell under the pointer to stamp {} at", pattern.name),
            }
        }
    }

    fn paint(&mut self, input: &impl Input) {
        if let Some((px, py)) = input.cursor_position() {
            self.grid.toggle_cell_alive(px, py);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}
