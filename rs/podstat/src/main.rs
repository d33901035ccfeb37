use std::io::stdout;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use podstat::{
    cli::{Cli, Commands, GpuArgs, ScheduleArgs},
    error::PodstatError,
    reporter::{normalize_namespaces, Reporter},
    sampler::{ReflectorCache, Sampler},
};
use shared::{
    connector::{connect, ConnectionOptions},
    logging::setup_logging,
    signal::setup_signal_handler,
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("task exits unexpectedly: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), PodstatError> {
    setup_logging()?;
    let shutdown = setup_signal_handler();

    match cli.command {
        Commands::GetRunningGpus(args) => get_running_gpus(args, shutdown).await,
        Commands::ScheduleTest(args) => schedule_test(args, shutdown).await,
    }
}

async fn get_running_gpus(
    args: GpuArgs,
    shutdown: CancellationToken,
) -> Result<(), PodstatError> {
    let client = connect(&ConnectionOptions::from(args.connection)).await?;
    let namespaces = normalize_namespaces(args.namespaces);
    let reporter = Reporter::new(client, args.resource_name);

    info!("Starting running gpus report");
    let mut out = stdout();
    tokio::select! {
        summary = reporter.run(&namespaces, &mut out) => {
            info!("total gpus: {}", summary?.total);
        }
        _ = shutdown.cancelled() => info!("Report cancelled"),
    }
    info!("Stopping running gpus report");
    Ok(())
}

async fn schedule_test(
    args: ScheduleArgs,
    shutdown: CancellationToken,
) -> Result<(), PodstatError> {
    let client = connect(&ConnectionOptions::from(args.connection)).await?;
    let cache = ReflectorCache::start(client, &args.namespace);
    let sampler = Sampler::new(cache, Duration::from_secs(args.interval));

    sampler.run(shutdown, |stats| info!("{stats}")).await?;
    Ok(())
}
