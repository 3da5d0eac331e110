//! Fuzzes the search by checking for many random grids that a path is found exactly when the goal
//! is reachable by being part of the same connected component, that every path found is valid
//! and that A* paths are as short as those of an uninformed search.
use grid_astar::{is_valid_path, path_cost, AstarSolver, Cell, DijkstraSolver, Grid, GridSolver};
use rand::prelude::*;

fn random_grid(n: usize, rng: &mut StdRng, start: Cell, goal: Cell) -> Grid {
    Grid::generate_random(n, n, start, goal, 0.4, rng).unwrap()
}

fn visualize_grid(grid: &Grid, start: &Cell, end: &Cell) {
    print!("{}", grid.overlay(*start, *end, &[]));
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 10000;
    let mut rng = StdRng::seed_from_u64(0);
    let solver = AstarSolver::new();
    let start = Cell::new(N as i32 - 1, 0);
    let end = Cell::new(0, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng, start, end);
        let reachable = grid.reachable(&start, &end);
        let path = solver.find_path(&grid, start, end).unwrap();
        // Show the grid if a path is not found
        if path.is_some() != reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(path.is_some(), reachable);
        if let Some(path) = path {
            assert!(is_valid_path(&grid, &path, &start, &end));
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 5000;
    let mut rng = StdRng::seed_from_u64(0);
    let astar_solver = AstarSolver::new();
    let dijkstra_solver = DijkstraSolver;

    for _ in 0..N_GRIDS {
        let start = Cell::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Cell::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let grid = random_grid(N, &mut rng, start, end);
        let astar_path = astar_solver.find_path(&grid, start, end).unwrap();
        let dijkstra_path = dijkstra_solver.find_path(&grid, start, end).unwrap();
        match (astar_path, dijkstra_path) {
            (Some(astar_path), Some(dijkstra_path)) => {
                let astar_cost = path_cost(&astar_path);
                let dijkstra_cost = path_cost(&dijkstra_path);
                if astar_cost != dijkstra_cost {
                    println!("Astar distance: {astar_cost}; Dijkstra distance: {dijkstra_cost}");
                    println!("Astar path: {astar_path:?}\n Dijkstra path: {dijkstra_path:?}\n");
                    visualize_grid(&grid, &start, &end);
                }
                assert_eq!(astar_cost, dijkstra_cost);
                assert_eq!(astar_cost as usize, astar_path.len() - 1);
            }
            (None, None) => assert!(grid.unreachable(&start, &end)),
            _ => panic!("A* and Dijkstra disagree on reachability"),
        }
    }
}

#[test]
fn fuzz_open_grid_distance() {
    let mut rng = StdRng::seed_from_u64(42);
    let solver = AstarSolver::new();
    for _ in 0..500 {
        let rows = rng.gen_range(1..25);
        let cols = rng.gen_range(1..25);
        let grid = Grid::new(rows, cols);
        let start = Cell::new(rng.gen_range(0..rows as i32), rng.gen_range(0..cols as i32));
        let end = Cell::new(rng.gen_range(0..rows as i32), rng.gen_range(0..cols as i32));
        let path = solver.find_path(&grid, start, end).unwrap().unwrap();
        assert_eq!(path.len() as i32 - 1, start.manhattan_distance(&end));
        assert!(is_valid_path(&grid, &path, &start, &end));
    }
}

#[test]
fn fuzz_idempotent() {
    let mut rng = StdRng::seed_from_u64(3);
    let solver = AstarSolver::new();
    let start = Cell::new(19, 0);
    let end = Cell::new(0, 19);
    for _ in 0..200 {
        let grid = Grid::generate_random(20, 20, start, end, 0.3, &mut rng).unwrap();
        let first = solver.find_path(&grid, start, end).unwrap();
        let second = solver.find_path(&grid, start, end).unwrap();
        assert_eq!(first, second);
    }
}
