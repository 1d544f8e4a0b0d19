//! quiesce-client — control-plane client for desired-count updates.
//!
//! Implements [`quiesce_core::DesiredCountApi`] against the control
//! plane's REST API:
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/api/v1/ping` | Preflight: endpoint reachable, token accepted |
//! | POST | `/api/v1/clusters/{cluster}/services/{service}/scale` | Set desired count |

pub mod client;
pub mod error;

pub use client::ControlPlaneClient;
pub use error::{ClientError, ClientResult};
