use grid_astar::{AstarSolver, GeneratorConfig, GridSolver, SearchContext};
use rand::{rngs::StdRng, SeedableRng};

// Generates a 20x20 grid with 30% obstacles and searches from the bottom-left to the top-right
// corner. Pass a seed as the first argument to get a different grid.

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0);
    let config = GeneratorConfig::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = config.generate(&mut rng).unwrap();
    println!("{}", grid);

    let mut ct = SearchContext::new();
    let path = AstarSolver::new()
        .find_path_with_context(&grid, config.start, config.goal, &mut ct)
        .unwrap();
    match path {
        Some(path) => {
            println!("Path found ({} moves):", path.len() - 1);
            print!("{}", grid.overlay(config.start, config.goal, &path));
        }
        None => {
            println!("No path found");
            print!("{}", grid.overlay(config.start, config.goal, &[]));
        }
    }
    let closed = ct.nodes().filter(|n| n.closed).count();
    println!("Expanded {} of {} reached cells", closed, ct.nodes().count());
}
