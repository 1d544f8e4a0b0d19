//! quiesce — scale a cluster's services down to zero.
//!
//! Reads a shutdown plan (cluster name plus service names), connects to
//! the orchestration control plane, and drives every listed service's
//! desired count to zero.
//!
//! # Usage
//!
//! ```text
//! quiesce --config config.json --endpoint 127.0.0.1:8443 --strategy concurrent
//! ```
//!
//! The bearer token, if the control plane requires one, is read from the
//! `QUIESCE_TOKEN` environment variable.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};

use quiesce_client::ControlPlaneClient;
use quiesce_core::{RunResult, ShutdownPlan, ShutdownRequest};
use quiesce_driver::ExecutionStrategy;

#[derive(Parser)]
#[command(
    name = "quiesce",
    about = "Scale a cluster's services down to zero",
    version
)]
struct Cli {
    /// Shutdown plan path (JSON: cluster_name + service_names).
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Control plane address (host:port).
    #[arg(long, default_value = "127.0.0.1:8443")]
    endpoint: String,

    /// Execution strategy. `sequential` stops at the first failure and
    /// leaves the rest of the list untouched; `concurrent` attempts every
    /// service and aggregates failures.
    #[arg(long, default_value = "concurrent")]
    strategy: ExecutionStrategy,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "info,quiesce_cli=debug,quiesce_driver=debug,quiesce_client=debug"
                        .parse()
                        .unwrap()
                }),
        )
        .init();

    let cli = Cli::parse();

    // Precondition chain: plan, then client. Failure here exits non-zero
    // before any service is attempted.
    let plan = ShutdownPlan::from_file(&cli.config)?;
    plan.validate()?;
    info!(
        cluster = %plan.cluster_name,
        services = plan.service_names.len(),
        strategy = %cli.strategy,
        "shutdown plan loaded"
    );

    let token = std::env::var("QUIESCE_TOKEN").ok();
    let client = ControlPlaneClient::connect(&cli.endpoint, token).await?;

    let request = ShutdownRequest::from(plan);
    let result = quiesce_driver::run(&request, Arc::new(client), cli.strategy).await;

    report(&request, result)
}

/// Map the run's result onto the process exit contract.
///
/// Any failed or skipped service makes the run a failure: sequential
/// aborts exit non-zero, and so does a concurrent run with partial
/// failures (the reference tool only logged those; escalating them is a
/// deliberate deviation, see DESIGN.md).
fn report(request: &ShutdownRequest, result: RunResult) -> anyhow::Result<()> {
    match result {
        RunResult::AllSucceeded => {
            info!(
                cluster = %request.cluster,
                services = request.services.len(),
                "all services stopped"
            );
            Ok(())
        }
        RunResult::PartiallyFailed { failures } => {
            for failure in &failures {
                warn!(
                    service = %failure.service,
                    reason = %failure.reason,
                    "service was not stopped"
                );
            }
            anyhow::bail!(
                "{} of {} services failed to stop",
                failures.len(),
                request.services.len()
            )
        }
        RunResult::AbortedOnFirstFailure {
            failed,
            unattempted,
        } => {
            anyhow::bail!(
                "aborted: stopping {} failed ({}); {} later services never attempted",
                failed.service,
                failed.reason,
                unattempted.len()
            )
        }
    }
}
