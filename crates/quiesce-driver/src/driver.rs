//! The fan-out shutdown driver.
//!
//! Walks the request's service list and drives each service's desired
//! count to zero through the capability handle. The two strategies share
//! the per-service call path; they differ in how calls are dispatched and
//! in what one failure does to the rest of the run.

use std::sync::Arc;

use tracing::{error, info, warn};

use quiesce_core::{DesiredCountApi, RunResult, ServiceFailure, ServiceOutcome, ShutdownRequest};

use crate::strategy::ExecutionStrategy;

/// Run a shutdown request against the control plane.
///
/// Produces exactly one outcome per entry in `request.services`,
/// duplicates included, except under [`ExecutionStrategy::Sequential`]
/// where the first failure ends the run and the rest of the list is
/// returned unattempted. The request itself is never reordered or
/// mutated.
pub async fn run<A: DesiredCountApi>(
    request: &ShutdownRequest,
    api: Arc<A>,
    strategy: ExecutionStrategy,
) -> RunResult {
    info!(
        cluster = %request.cluster,
        services = request.services.len(),
        %strategy,
        "shutdown run starting"
    );

    let result = match strategy {
        ExecutionStrategy::Sequential => run_sequential(request, api).await,
        ExecutionStrategy::Concurrent => run_concurrent(request, api).await,
    };

    match &result {
        RunResult::AllSucceeded => info!("shutdown run completed"),
        RunResult::PartiallyFailed { failures } => warn!(
            failures = failures.len(),
            "shutdown run completed with failures"
        ),
        RunResult::AbortedOnFirstFailure { failed, unattempted } => error!(
            service = %failed.service,
            skipped = unattempted.len(),
            "shutdown run aborted"
        ),
    }

    result
}

/// Issue one scale-to-zero call and classify the result.
///
/// Capability errors are opaque: only their description is recorded.
async fn attempt<A: DesiredCountApi>(api: &A, cluster: &str, service: &str) -> ServiceOutcome {
    match api.set_desired_count(cluster, service, 0).await {
        Ok(()) => {
            info!(%service, "service stopped");
            ServiceOutcome::succeeded(service)
        }
        Err(e) => {
            error!(%service, error = %e, "failed to stop service");
            ServiceOutcome::failed(service, e.to_string())
        }
    }
}

async fn run_sequential<A: DesiredCountApi>(request: &ShutdownRequest, api: Arc<A>) -> RunResult {
    for (index, service) in request.services.iter().enumerate() {
        info!(%service, "stopping service");
        let outcome = attempt(api.as_ref(), &request.cluster, service).await;
        if let Err(reason) = outcome.result {
            // The first failure is authoritative; the tail is never attempted.
            return RunResult::AbortedOnFirstFailure {
                failed: ServiceFailure {
                    service: outcome.service,
                    reason,
                },
                unattempted: request.services[index + 1..].to_vec(),
            };
        }
    }
    RunResult::AllSucceeded
}

async fn run_concurrent<A: DesiredCountApi>(request: &ShutdownRequest, api: Arc<A>) -> RunResult {
    // Dispatch every service before awaiting any of them, in request
    // order. Each task owns its outcome; its join handle is the one slot
    // it writes, so no synchronization beyond the join is needed.
    let mut slots = Vec::with_capacity(request.services.len());
    for service in &request.services {
        info!(%service, "stopping service");
        let api = Arc::clone(&api);
        let cluster = request.cluster.clone();
        let task_service = service.clone();
        let handle =
            tokio::spawn(async move { attempt(api.as_ref(), &cluster, &task_service).await });
        slots.push((service.clone(), handle));
    }

    // The single join point: wait for every dispatched call to finish
    // before deciding the run's result.
    let mut failures = Vec::new();
    for (service, handle) in slots {
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            // A panicked task still owes its service an outcome.
            Err(e) => {
                error!(%service, error = %e, "service task failed");
                ServiceOutcome::failed(&service, e.to_string())
            }
        };
        if let Err(reason) = outcome.result {
            failures.push(ServiceFailure {
                service: outcome.service,
                reason,
            });
        }
    }

    if failures.is_empty() {
        RunResult::AllSucceeded
    } else {
        RunResult::PartiallyFailed { failures }
    }
}
