//! Data models and API request/response types.
//!
//! Each service owns exactly one entity. The cross-service projection types
//! (`CustomerInfo`, `AccountSummary`, `AccountInfo`) live next to the entity
//! they project and define the fixed field set a peer is allowed to see.

/// Bank account entity and projections
pub mod account;
/// Customer entity and projections
pub mod customer;
/// Transaction entity, status enumeration, and projections
pub mod transaction;
