//! Shared types used across quiesce crates.

use serde::{Deserialize, Serialize};

use crate::config::ShutdownPlan;

/// The input to a single shutdown run.
///
/// Read-only for the lifetime of the run: the driver never resizes or
/// reorders `services`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShutdownRequest {
    /// Target cluster identifier. Must be non-empty.
    pub cluster: String,
    /// Services to stop, in order. May be empty; duplicates are processed
    /// independently.
    pub services: Vec<String>,
}

impl From<ShutdownPlan> for ShutdownRequest {
    fn from(plan: ShutdownPlan) -> Self {
        Self {
            cluster: plan.cluster_name,
            services: plan.service_names,
        }
    }
}

/// The outcome of one service's scale-down attempt. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOutcome {
    pub service: String,
    /// `Ok` on success, `Err` with an opaque failure description otherwise.
    pub result: Result<(), String>,
}

impl ServiceOutcome {
    pub fn succeeded(service: &str) -> Self {
        Self {
            service: service.to_string(),
            result: Ok(()),
        }
    }

    pub fn failed(service: &str, reason: impl Into<String>) -> Self {
        Self {
            service: service.to_string(),
            result: Err(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// A recorded per-service failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFailure {
    pub service: String,
    pub reason: String,
}

/// The aggregate result of a shutdown run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunResult {
    /// Every service's update call returned success.
    AllSucceeded,
    /// Every service was attempted; at least one failed. Produced only by
    /// the concurrent strategy.
    PartiallyFailed { failures: Vec<ServiceFailure> },
    /// Processing stopped at the first failure; `unattempted` holds the
    /// tail of the list, in order. Produced only by the sequential
    /// strategy.
    AbortedOnFirstFailure {
        failed: ServiceFailure,
        unattempted: Vec<String>,
    },
}

impl RunResult {
    pub fn is_success(&self) -> bool {
        matches!(self, RunResult::AllSucceeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_from_plan_keeps_order_and_duplicates() {
        let plan = ShutdownPlan {
            cluster_name: "staging".to_string(),
            service_names: vec!["b".to_string(), "a".to_string(), "b".to_string()],
        };
        let request = ShutdownRequest::from(plan);
        assert_eq!(request.cluster, "staging");
        assert_eq!(request.services, vec!["b", "a", "b"]);
    }

    #[test]
    fn outcome_constructors() {
        assert!(ServiceOutcome::succeeded("api").is_success());

        let failed = ServiceOutcome::failed("api", "service not found");
        assert!(!failed.is_success());
        assert_eq!(failed.result, Err("service not found".to_string()));
    }

    #[test]
    fn only_all_succeeded_is_a_successful_run() {
        assert!(RunResult::AllSucceeded.is_success());
        assert!(
            !RunResult::PartiallyFailed {
                failures: vec![ServiceFailure {
                    service: "api".to_string(),
                    reason: "timeout".to_string(),
                }],
            }
            .is_success()
        );
        assert!(
            !RunResult::AbortedOnFirstFailure {
                failed: ServiceFailure {
                    service: "api".to_string(),
                    reason: "timeout".to_string(),
                },
                unattempted: vec![],
            }
            .is_success()
        );
    }

    #[test]
    fn run_result_serializes_round_trip() {
        let result = RunResult::AbortedOnFirstFailure {
            failed: ServiceFailure {
                service: "worker".to_string(),
                reason: "permission denied".to_string(),
            },
            unattempted: vec!["cron".to_string()],
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: RunResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
