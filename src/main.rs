use clap::Parser;
use movie_watchability::config::Cli;
use movie_watchability::{HttpFetcher, JustWatchSelector, Pipeline, logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logger::init(logger::level(cli.verbose, cli.quiet));

    // Fixed for the whole run, even if it crosses midnight.
    let run_date = chrono::Local::now().date_naive();

    let fetcher = HttpFetcher::new(cli.user_agent.clone(), cli.timeout())?
        .fail_on_http_error(cli.fail_on_http_error);
    let pipeline = Pipeline::new(fetcher, JustWatchSelector::new()?, run_date);

    match pipeline
        .run(&cli.input, &cli.columns(), &cli.output_dir)
        .await
    {
        Ok(path) => {
            println!("Report saved to {}", path.display());
            Ok(())
        }
        Err(e) => {
            tracing::error!("run aborted, no report written: {e}");
            Err(e.into())
        }
    }
}
