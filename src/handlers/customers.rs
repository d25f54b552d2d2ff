//! Customer service HTTP handlers and router.
//!
//! Endpoints:
//! - `POST /api/customers` - Register a new customer
//! - `GET /api/customers` - List all customers
//! - `GET /api/customers/{id}` - Get customer by ID
//! - `GET /api/customers/email/{email}` - Get customer by email
//! - `PUT /api/customers/{id}` - Update a customer
//! - `DELETE /api/customers/{id}` - Remove a customer
//! - `GET /api/customers/{id}/info` - Minimal projection for peer services
//! - `GET /api/customers/{id}/with-accounts` - Composite view with account summaries

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::error::AppError;
use crate::gateway::PeerClient;
use crate::handlers::health;
use crate::models::customer::{Customer, CustomerInfo, CustomerPayload, CustomerWithAccounts};
use crate::services::customer_service;
use crate::store::Table;

/// Shared state for the customers service: its own record table plus a
/// client for the accounts peer.
#[derive(Clone)]
pub struct CustomersState {
    pub customers: Arc<Table<Customer>>,
    pub accounts: PeerClient,
}

/// Build the customers service router.
pub fn router(state: CustomersState) -> Router {
    Router::new()
        .route(
            "/api/customers",
            get(list_customers).post(create_customer),
        )
        .route(
            "/api/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/api/customers/email/{email}", get(get_customer_by_email))
        .route("/api/customers/{id}/info", get(customer_info))
        .route("/api/customers/{id}/with-accounts", get(customer_with_accounts))
        .route("/health", get(|| async { health::health_response("customers-service") }))
        .with_state(state)
}

/// Register a new customer.
///
/// Returns 201 on success, 409 when the email is taken, 400 on invalid
/// fields.
pub async fn create_customer(
    State(state): State<CustomersState>,
    Json(payload): Json<CustomerPayload>,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    let customer = customer_service::create_customer(&state.customers, payload)?;
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn get_customer(
    State(state): State<CustomersState>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>, AppError> {
    let customer = customer_service::get_customer(&state.customers, id)?;
    Ok(Json(customer))
}

pub async fn get_customer_by_email(
    State(state): State<CustomersState>,
    Path(email): Path<String>,
) -> Result<Json<Customer>, AppError> {
    let customer = customer_service::get_customer_by_email(&state.customers, &email)?;
    Ok(Json(customer))
}

pub async fn list_customers(State(state): State<CustomersState>) -> Json<Vec<Customer>> {
    Json(customer_service::list_customers(&state.customers))
}

pub async fn update_customer(
    State(state): State<CustomersState>,
    Path(id): Path<i64>,
    Json(payload): Json<CustomerPayload>,
) -> Result<Json<Customer>, AppError> {
    let customer = customer_service::update_customer(&state.customers, id, payload)?;
    Ok(Json(customer))
}

pub async fn delete_customer(
    State(state): State<CustomersState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    customer_service::delete_customer(&state.customers, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Minimal projection consumed by the accounts service: id, name, email.
/// Phone and address are never exposed here.
pub async fn customer_info(
    State(state): State<CustomersState>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerInfo>, AppError> {
    let info = customer_service::customer_info(&state.customers, id)?;
    Ok(Json(info))
}

/// Composite endpoint. Responds 200 even when the accounts service is
/// down; the embedded `accounts` array is then empty.
pub async fn customer_with_accounts(
    State(state): State<CustomersState>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerWithAccounts>, AppError> {
    let view =
        customer_service::customer_with_accounts(&state.customers, &state.accounts, id).await?;
    Ok(Json(view))
}
