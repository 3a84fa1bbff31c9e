use dijkstra_oracle::graph::{read_graph, DirectedGraph};
use dijkstra_oracle::FloydWarshall;
use log::error;
use std::env;
use std::io::{self, BufWriter, Write};
use std::process;

// Prints every simple path from start to end no longer than limit, one per line
fn run(start: &str, end: &str, limit: &str) -> Result<(), Box<dyn std::error::Error>> {
    let start: usize = start.parse()?;
    let end: usize = end.parse()?;
    let limit: u64 = limit.parse()?;

    let graph: DirectedGraph<u64> = read_graph(io::stdin().lock())?;
    let matrix = FloydWarshall::new().all_pairs(&graph);

    let mut out = BufWriter::new(io::stdout().lock());
    for path in matrix.paths_within(start, end, limit) {
        let hops: Vec<String> = path.iter().map(ToString::to_string).collect();
        writeln!(out, "{}", hops.join(" -> "))?;
    }
    out.flush()?;

    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        let program = args.first().map(String::as_str).unwrap_or("paths_within");
        eprintln!("usage: {} <start> <end> <limit> < graph.txt", program);
        process::exit(2);
    }

    if let Err(err) = run(&args[1], &args[2], &args[3]) {
        error!("{}", err);
        process::exit(1);
    }
}
