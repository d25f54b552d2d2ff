//! HTTP request handlers (route handlers).
//!
//! Each handler is a thin async function: extract request data, delegate to
//! the service layer, convert the result to a JSON response. Each module
//! also builds the router for its service.

/// Account service endpoints
pub mod accounts;
/// Customer service endpoints
pub mod customers;
/// Service health endpoint
pub mod health;
/// Transaction service endpoints
pub mod transactions;
