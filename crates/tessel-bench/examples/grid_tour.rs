//! Walk a `Grid<i32>` through every constructor and mutator, printing the
//! grid after each step.

use std::error::Error;

use tessel_core::Grid;

fn show(label: &str, grid: &Grid<i32>) {
    println!("{label} ({} x {}):", grid.height(), grid.width());
    print!("{grid}");
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    let empty: Grid<i32> = Grid::new();
    show("Grid::new()", &empty);

    let zeros: Grid<i32> = Grid::with_size(5, 3);
    show("Grid::with_size(5, 3)", &zeros);

    let mut grid = Grid::from_elem(3, 5, 5);
    show("Grid::from_elem(3, 5, 5)", &grid);

    grid.fill(69);
    show("fill(69)", &grid);

    grid.assign(2, 2, 0);
    show("assign(2, 2, 0)", &grid);

    grid.assign(4, 4, 3);
    show("assign(4, 4, 3)", &grid);

    grid.resize(3, 3);
    show("resize(3, 3)", &grid);

    grid.resize(4, 4);
    show("resize(4, 4)", &grid);

    Ok(())
}
