use life_grid::Grid;
use life_grid::config::CELL_SIZE;
use proptest::prelude::*;

/// Straightforward B3/S23 over a bounded grid, used as the reference.
fn next_generation(grid: &Grid) -> Vec<bool> {
    let (w, h) = (grid.width() as i64, grid.height() as i64);
    let alive = |x: i64, y: i64| {
        (0..w).contains(&x) && (0..h).contains(&y) && grid.is_alive(x as usize, y as usize)
    };

    let mut next = Vec::new();
    for y in 0..h {
        for x in 0..w {
            let mut count = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if (dx, dy) != (0, 0) && alive(x + dx, y + dy) {
                        count += 1;
                    }
                }
            }
            next.push(matches!((alive(x, y), count), (true, 2 | 3) | (false, 3)));
        }
    }
    next
}

fn cells(grid: &Grid) -> Vec<bool> {
    (0..grid.height())
        .flat_map(|y| (0..grid.width()).map(move |x| (x, y)))
        .map(|(x, y)| grid.is_alive(x, y))
        .collect()
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1..12usize, 1..12usize).prop_flat_map(|(w, h)| {
        prop::collection::vec(any::<bool>(), w * h).prop_map(move |bits| {
            let mut grid = Grid::new(w, h);
            for (i, _) in bits.iter().enumerate().filter(|&(_, &alive)| alive) {
                grid.set_alive(i % w, i / w).unwrap();
            }
            grid
        })
    })
}

proptest! {
    #[test]
    fn dead_grid_stays_dead(w in 1..40usize, h in 1..40usize) {
        let mut grid = Grid::new(w, h);
        grid.step();
        prop_assert_eq!(grid.population(), 0);
    }

    #[test]
    fn step_matches_reference(grid in arb_grid()) {
        let expected = next_generation(&grid);
        let mut grid = grid;
        grid.step();
        prop_assert_eq!(cells(&grid), expected);
    }

    #[test]
    fn step_keeps_dimensions(grid in arb_grid()) {
        let (w, h) = (grid.width(), grid.height());
        let mut grid = grid;
        grid.step();
        grid.step();
        prop_assert_eq!((grid.width(), grid.height()), (w, h));
    }

    #[test]
    fn pixel_lands_in_its_cell(x in 0..80usize, y in 0..60usize, ox in 0..CELL_SIZE, oy in 0..CELL_SIZE) {
        let mut grid = Grid::default();
        let px = (x as u32 * CELL_SIZE + ox) as i32;
        let py = (y as u32 * CELL_SIZE + oy) as i32;

        prop_assert!(grid.toggle_cell_alive(px, py));
        prop_assert!(grid.is_alive(x, y));
        prop_assert_eq!(grid.population(), 1);

        // Setting it again leaves it alive.
        prop_assert!(grid.toggle_cell_alive(px, py));
        prop_assert!(grid.is_alive(x, y));
        prop_assert_eq!(grid.population(), 1);
    }

    #[test]
    fn only_pixels_inside_hit_a_cell(px in any::<i32>(), py in any::<i32>()) {
        let mut grid = Grid::new(8, 6);
        let size = CELL_SIZE as i32;
        let inside = (0..8 * size).contains(&px) && (0..6 * size).contains(&py);

        prop_assert_eq!(grid.toggle_cell_alive(px, py), inside);
        prop_assert_eq!(grid.population(), usize::from(inside));
    }
}
