use dijkstra_oracle::compare::compare_files;
use log::error;
use std::env;
use std::path::Path;
use std::process;

const MAX_REPORTED: usize = 10;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        let program = args.first().map(String::as_str).unwrap_or("compare_output");
        eprintln!("usage: {} <expected> <actual>", program);
        process::exit(2);
    }

    let comparison = match compare_files(Path::new(&args[1]), Path::new(&args[2])) {
        Ok(comparison) => comparison,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    for mismatch in comparison.mismatches.iter().take(MAX_REPORTED) {
        eprintln!(
            "[mismatch] record {}: expected \"{}: {}\", actual \"{}: {}\"",
            mismatch.index,
            mismatch.expected.key,
            mismatch.expected.distance,
            mismatch.actual.key,
            mismatch.actual.distance
        );
    }

    if comparison.is_match() {
        println!("[compare] OK: all {} records match", comparison.total);
    } else {
        println!(
            "[compare] mismatches = {} / {}",
            comparison.mismatches.len(),
            comparison.total
        );
        process::exit(1);
    }
}
