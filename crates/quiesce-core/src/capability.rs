//! The remote update capability.
//!
//! The single operation the shutdown driver needs from the orchestration
//! control plane. The control-plane client implements it for real runs;
//! the driver's tests implement it with in-memory doubles.

use std::future::Future;

/// Sets the desired instance count for a service in a cluster.
///
/// Callers treat failures as opaque: the driver records the error's
/// description against the service and never interprets or retries it.
/// Implementations are expected to treat setting an already-reached count
/// as a success, so re-running a shutdown is harmless.
pub trait DesiredCountApi: Send + Sync + 'static {
    fn set_desired_count(
        &self,
        cluster: &str,
        service: &str,
        target: u32,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}
