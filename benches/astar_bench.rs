use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{AstarSolver, Cell, DijkstraSolver, Grid, GridSolver, SearchContext};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

fn random_grids(n: usize, count: usize) -> Vec<Grid> {
    let mut rng = StdRng::seed_from_u64(0);
    let start = Cell::new(n as i32 - 1, 0);
    let goal = Cell::new(0, n as i32 - 1);
    (0..count)
        .map(|_| Grid::generate_random(n, n, start, goal, 0.3, &mut rng).unwrap())
        .collect()
}

fn bench_solver<S: GridSolver>(c: &mut Criterion, solver_name: &str, solver: S) {
    for n in [20, 100] {
        let grids = random_grids(n, 32);
        let start = Cell::new(n as i32 - 1, 0);
        let goal = Cell::new(0, n as i32 - 1);
        let mut ct = SearchContext::new();
        c.bench_function(format!("{solver_name}, {n}x{n} random").as_str(), |b| {
            b.iter(|| {
                for grid in &grids {
                    black_box(
                        solver
                            .find_path_with_context(grid, start, goal, &mut ct)
                            .unwrap(),
                    );
                }
            })
        });
    }
}

fn astar_bench(c: &mut Criterion) {
    bench_solver(c, "A*", AstarSolver::new());
    bench_solver(
        c,
        "Weighted A* (1.5)",
        AstarSolver {
            heuristic_factor: 1.5,
        },
    );
    bench_solver(c, "Dijkstra", DijkstraSolver);
}

criterion_group!(benches, astar_bench);
criterion_main!(benches);
