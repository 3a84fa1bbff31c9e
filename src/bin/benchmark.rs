use std::env;
use std::time::{Duration, Instant};

use dijkstra_oracle::graph::generators::random_graph;
use dijkstra_oracle::graph::{DirectedGraph, Graph};
use dijkstra_oracle::{AllPairs, Dijkstra, ShortestPathAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Time one all-pairs run
fn benchmark_all_pairs(
    name: &str,
    runner: &AllPairs,
    graph: &DirectedGraph<u64>,
) -> Result<Duration, dijkstra_oracle::Error> {
    let start = Instant::now();
    let results = runner.compute(graph)?;
    let duration = start.elapsed();

    let reachable: usize = results.iter().map(|r| r.reachable_count()).sum();
    println!("  - {}: {} reachable pairs in {:?}", name, reachable, duration);

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Optional positional vertex counts, e.g. `benchmark 500 1000`
    let mut graph_sizes: Vec<usize> = env::args()
        .skip(1)
        .map(|arg| arg.parse())
        .collect::<Result<_, _>>()?;
    if graph_sizes.is_empty() {
        graph_sizes = vec![100, 500, 1_000, 2_000];
    }

    // Edge factor: average number of edges per vertex
    let edge_factor = 4;
    let max_weight = 100;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: all-pairs Dijkstra, sequential vs parallel");
    println!("Edge factor: {} edges per vertex", edge_factor);
    println!("=====================================================");

    let sequential = AllPairs::new();
    let parallel = AllPairs::new().with_parallel(true);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        let graph = random_graph(size, size * edge_factor, max_weight, &mut rng);
        println!(
            "\nGraph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let dijkstra = Dijkstra::new();
        let start = Instant::now();
        if size > 0 {
            dijkstra.compute_shortest_paths(&graph, 0)?;
        }
        println!(
            "  - single source ({}): {:?}",
            ShortestPathAlgorithm::<u64, DirectedGraph<u64>>::name(&dijkstra),
            start.elapsed()
        );

        let sequential_time = benchmark_all_pairs("sequential", &sequential, &graph)?;
        let parallel_time = benchmark_all_pairs("parallel", &parallel, &graph)?;
        results.push((size, sequential_time, parallel_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<10}",
        "Vertices", "Sequential (ms)", "Parallel (ms)", "SpeedUp"
    );
    println!("-----------------------------------------------------");

    for (size, sequential_time, parallel_time) in &results {
        let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            sequential_time.as_millis(),
            parallel_time.as_millis(),
            speedup
        );
    }

    Ok(())
}
