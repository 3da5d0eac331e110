use grid_astar::{AstarSolver, Cell, Grid, GridSolver, SearchContext};

// The heuristic_factor can be set to scale the heuristic, causing nodes that are closer to the goal (ignoring obstacles)
// to be evaluated quicker than in normal operation. This is called Weighted A* and it can speed up the algorithm in certain scenarios.

fn main() {
    const N: i32 = 30;
    let mut grid = Grid::new(N as usize, N as usize);
    for row in 3..N - 3 {
        grid.set_blocked(&Cell::new(row, N / 2)).unwrap();
    }
    for col in 0..N / 2 - 4 {
        grid.set_blocked(&Cell::new(N - 6, col)).unwrap();
    }
    grid.update();
    let start = Cell::new(N - 1, 0);
    let end = Cell::new(0, N - 1);
    let mut ct = SearchContext::new();
    for heuristic_factor in [1.0, 1.3, 2.0] {
        let solver = AstarSolver { heuristic_factor };
        let path = solver
            .find_path_with_context(&grid, start, end, &mut ct)
            .unwrap()
            .unwrap();
        println!(
            "factor {heuristic_factor}: {} moves, {} expansions",
            path.len() - 1,
            ct.expanded()
        );
        print!("{}", grid.overlay(start, end, &path));
        println!();
    }
}
