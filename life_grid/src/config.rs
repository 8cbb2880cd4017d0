// config.rs - Compile-time window and grid configuration

use egui::Color32;

pub const SCREEN_WIDTH: u32 = 800;                    // Window width in pixels
pub const SCREEN_HEIGHT: u32 = 600;                   // Window height in pixels
pub const CELL_SIZE: u32 = 10;                        // Side of one cell in pixels
pub const GRID_WIDTH: usize = (SCREEN_WIDTH / CELL_SIZE) as usize;   // 80 columns
pub const GRID_HEIGHT: usize = (SCREEN_HEIGHT / CELL_SIZE) as usize; // 60 rows

pub const CADENCE_DIVISOR: u32 = 10;                  // Rendered frames per generation

pub const WINDOW_TITLE: &str = "Conway's Game of Life";
pub const PAUSED_CAPTION: &str = "Press SPACE to start simulation";

pub const BACKGROUND: Color32 = Color32::WHITE;
pub const LIVE_CELL: Color32 = Color32::BLACK;

/// Screen size and cell size for one session. The grid dimensions follow from
/// these and never change afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub screen_width: u32,
    pub screen_height: u32,
    pub cell_size: u32,
}

impl Layout {
    pub const fn new(screen_width: u32, screen_height: u32, cell_size: u32) -> Self {
        Self { screen_width, screen_height, cell_size }
    }

    pub const fn grid_width(&self) -> usize {
        (self.screen_width / self.cell_size) as usize
    }

    pub const fn grid_height(&self) -> usize {
        (self.screen_height / self.cell_size) as usize
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT, CELL_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_constants() {
        let layout = Layout::default();
        assert_eq!(layout.grid_width(), GRID_WIDTH);
        assert_eq!(layout.grid_height(), GRID_HEIGHT);
        assert_eq!((GRID_WIDTH, GRID_HEIGHT), (80, 60));
    }
}
