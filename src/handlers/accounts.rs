//! Account service HTTP handlers and router.
//!
//! Endpoints:
//! - `POST /api/accounts` - Open a new account
//! - `GET /api/accounts` - List all accounts
//! - `GET /api/accounts/{id}` - Get account by ID
//! - `GET /api/accounts/number/{accountNumber}` - Get account by number
//! - `GET /api/accounts/customer/{customerId}` - List a customer's accounts
//! - `PUT /api/accounts/{id}` - Update an account
//! - `DELETE /api/accounts/{id}` - Close an account
//! - `GET /api/accounts/{id}/with-customer` - Composite view with customer info

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
use crate::models::account::{Account, AccountPayload, AccountWithCustomer};
use crate::services::account_service;
use crate::store::Table;

/// Shared state for the accounts service: its own record table plus a
/// client for the customers peer.
#[derive(Clone)]
pub struct AccountsState {
    pub accounts: Arc<Table<Account>>,
    pub customers: PeerClient,
}

/// Build the accounts service router.
pub fn router(state: AccountsState) -> Router {
    Router::new()
        .route(
            "/api/accounts",
            get(list_accounts).post(create_account),
        )
        .route(
            "/api/accounts/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
        .route("/api/accounts/number/{account_number}", get(get_account_by_number))
        .route("/api/accounts/customer/{customer_id}", get(list_accounts_by_customer))
        .route("/api/accounts/{id}/with-customer", get(account_with_customer))
        .route("/health", get(|| async { health::health_response("accounts-service") }))
        .with_state(state)
}

/// Create a new account.
///
/// Returns 201 on success, 409 when the account number is taken, 400 on
/// invalid fields.
pub async fn create_account(
    State(state): State<AccountsState>,
    Json(payload): Json<AccountPayload>,
) -> Result<(StatusCode, Json<Account>), AppError> {
    let account = account_service::create_account(&state.accounts, payload)?;
    Ok((StatusCode::CREATED, Json(account)))
}

pub async fn get_account(
    State(state): State<AccountsState>,
    Path(id): Path<i64>,
) -> Result<Json<Account>, AppError> {
    let account = account_service::get_account(&state.accounts, id)?;
    Ok(Json(account))
}

pub async fn get_account_by_number(
    State(state): State<AccountsState>,
    Path(account_number): Path<String>,
) -> Result<Json<Account>, AppError> {
    let account = account_service::get_account_by_number(&state.accounts, &account_number)?;
    Ok(Json(account))
}

pub async fn list_accounts(State(state): State<AccountsState>) -> Json<Vec<Account>> {
    Json(account_service::list_accounts(&state.accounts))
}

/// The full-body account list peers consume; the customers service reduces
/// each entry to a summary on its side.
pub async fn list_accounts_by_customer(
    State(state): State<AccountsState>,
    Path(customer_id): Path<i64>,
) -> Json<Vec<Account>> {
    Json(account_service::list_accounts_by_customer(&state.accounts, customer_id))
}

pub async fn update_account(
    State(state): State<AccountsState>,
    Path(id): Path<i64>,
    Json(payload): Json<AccountPayload>,
) -> Result<Json<Account>, AppError> {
    let account = account_service::update_account(&state.accounts, id, payload)?;
    Ok(Json(account))
}

pub async fn delete_account(
    State(state): State<AccountsState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    account_service::delete_account(&state.accounts, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Composite endpoint. Responds 200 even when the customers service is
/// down; the embedded `customerInfo` then carries only the customer id.
pub async fn account_with_customer(
    State(state): State<AccountsState>,
    Path(id): Path<i64>,
) -> Result<Json<AccountWithCustomer>, AppError> {
    let view = account_service::account_with_customer(&state.accounts, &state.customers, id).await?;
    Ok(Json(view))
}
