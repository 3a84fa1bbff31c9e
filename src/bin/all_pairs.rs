use dijkstra_oracle::{driver, Mode, OracleConfig};
use log::error;
use std::io;
use std::process;

fn main() {
    // Logs go to stderr; RUST_LOG controls verbosity
    env_logger::init();

    let config = OracleConfig::new().with_mode(Mode::AllPairs);
    if let Err(err) = driver::run(&config, io::stdin().lock(), io::stdout().lock()) {
        error!("{}", err);
        process::exit(1);
    }
}
