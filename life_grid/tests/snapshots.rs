use life_grid::Grid;
use life_grid::patterns::{self, PATTERNS};

#[test]
fn glider_after_two_generations() {
    let mut grid = Grid::new(5, 5);
    patterns::stamp(&mut grid, &PATTERNS[0], (1, 0));

    grid.step();
    grid.step();

    insta::assert_snapshot!(grid.to_string(), @r"
    .....
    ...o.
    .o.o.
    ..oo.
    .....
    ");
}
