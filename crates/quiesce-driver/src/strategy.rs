//! Execution strategies for a shutdown run.

use serde::{Deserialize, Serialize};

/// How the driver walks the service list.
///
/// Selected at deployment time (CLI flag), never by the input data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStrategy {
    /// One service at a time, in request order. The first failure aborts
    /// the run; later services are never attempted.
    Sequential,
    /// One task per service, all dispatched before any is awaited. A
    /// failure is isolated to its own service.
    Concurrent,
}

impl Default for ExecutionStrategy {
    fn default() -> Self {
        Self::Concurrent
    }
}

impl std::str::FromStr for ExecutionStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Self::Sequential),
            "concurrent" => Ok(Self::Concurrent),
            other => anyhow::bail!("unknown strategy {other:?} (expected sequential or concurrent)"),
        }
    }
}

impl std::fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::Concurrent => f.write_str("concurrent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_concurrent() {
        assert_eq!(ExecutionStrategy::default(), ExecutionStrategy::Concurrent);
    }

    #[test]
    fn parses_both_strategies() {
        assert_eq!(
            "sequential".parse::<ExecutionStrategy>().unwrap(),
            ExecutionStrategy::Sequential
        );
        assert_eq!(
            "concurrent".parse::<ExecutionStrategy>().unwrap(),
            ExecutionStrategy::Concurrent
        );
        assert!("rolling".parse::<ExecutionStrategy>().is_err());
    }

    #[test]
    fn display_round_trips_with_from_str() {
        for strategy in [ExecutionStrategy::Sequential, ExecutionStrategy::Concurrent] {
            let parsed: ExecutionStrategy = strategy.to_string().parse().unwrap();
            assert_eq!(parsed, strategy);
        }
    }
}
