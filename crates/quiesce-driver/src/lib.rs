//! quiesce-driver — the fan-out shutdown driver.
//!
//! Takes a [`ShutdownRequest`](quiesce_core::ShutdownRequest) and a
//! [`DesiredCountApi`](quiesce_core::DesiredCountApi) handle and drives
//! every listed service's desired count to zero, producing one outcome
//! per entry. Two execution strategies, selected at deployment time:
//!
//! | Strategy | Dispatch | On failure |
//! |---|---|---|
//! | `Sequential` | one at a time, request order | abort the run, skip the tail |
//! | `Concurrent` | one task per service, all at once | isolate, attempt everything |
//!
//! Failures from the capability are opaque to the driver: it records the
//! description and never retries.

pub mod driver;
pub mod strategy;

pub use driver::run;
pub use strategy::ExecutionStrategy;
