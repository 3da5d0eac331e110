use grid_astar::{find_path, Cell, Grid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid = Grid::new(3, 3);
    grid.set_blocked(&Cell::new(1, 1)).unwrap();
    println!("{}", grid);
    let start = Cell::new(0, 0);
    let end = Cell::new(2, 2);
    let path = find_path(&grid, start, end).unwrap().unwrap();
    println!("Path:");
    for p in &path {
        println!("{}", p);
    }
    print!("{}", grid.overlay(start, end, &path));
}
