//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers:
//! uniqueness probes, lifecycle checks, and composite view assembly.

pub mod account_service;
pub mod customer_service;
pub mod transaction_service;
