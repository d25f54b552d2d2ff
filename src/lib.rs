//! Banking record services: accounts, customers, and transactions.
//!
//! Three peer REST services, each owning one entity type and exposing CRUD
//! plus one composite endpoint that enriches a local record with a minimal
//! projection fetched from a peer service.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server), one binary per service
//! - **Peer Calls**: reqwest with a bounded timeout, one call per request
//! - **Storage**: in-memory record tables behind a simple CRUD surface
//! - **Format**: JSON requests/responses (camelCase service contract)
//!
//! # Core behaviors
//!
//! - [`lifecycle`]: the transaction state machine gating amendments and
//!   cancellations.
//! - [`gateway`]: the composition gateway; remote failures degrade to
//!   fallback projections instead of failing the composite request.

pub mod config;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod lifecycle;
pub mod models;
pub mod services;
pub mod store;
