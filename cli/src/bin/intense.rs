use clap::Parser;
use color_eyre::eyre::{Report, Result};
use websudoku::args::IntenseArgs;
use websudoku::harness::{self, Harness};
use websudoku::logging;
use websudoku_providers::SolverClient;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = IntenseArgs::parse();
    logging::init(args.solver.verbose);

    let workers = args.workers.unwrap_or_else(harness::default_workers);
    let runtime = harness::runtime(workers)?;

    runtime.block_on(async {
        let solver = SolverClient::new(&args.solver.client_config())?;
        let harness = Harness::new(solver, workers)?;

        let result = harness.run(&args.puzzle, args.requests).await?;
        println!("{}", result);
        println!("{:.5} sec.", result.elapsed().as_secs_f64());
        Ok::<(), Report>(())
    })
}
