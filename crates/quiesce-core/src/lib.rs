//! quiesce-core — shared types for the quiesce toolchain.
//!
//! Holds the shutdown plan document, the per-run request and outcome
//! types, and the [`DesiredCountApi`] seam through which the driver
//! talks to the orchestration control plane.

pub mod capability;
pub mod config;
pub mod types;

pub use capability::DesiredCountApi;
pub use config::ShutdownPlan;
pub use types::*;
