use clap::Parser;
use color_eyre::eyre::Result;
use websudoku::args::RunArgs;
use websudoku::{flow, logging};
use websudoku_providers::util::http_client;
use websudoku_providers::{SolverClient, WebSudoku};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = RunArgs::parse();
    logging::init(args.solver.verbose);

    let config = args.solver.client_config();
    // one pool for both the puzzle page and the solver
    let client = http_client(&config)?;
    let source = WebSudoku::new(client.clone(), &args.source_config())?;
    let solver = SolverClient::with_client(client, &config.solver_url);

    let mut out = std::io::stdout();
    flow::run(&source, &solver, &mut out).await?;
    Ok(())
}
