// src/main.rs

use gatedag::errors::GateDagError;
use gatedag::{cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        match err.downcast_ref::<GateDagError>() {
            Some(e) if e.is_cyclic() => {
                eprintln!("ERROR: Graph has a cycle. Break cycles before proceeding.");
            }
            _ => eprintln!("gatedag error: {err:?}"),
        }
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args)?;
    Ok(())
}
