//! Transaction service HTTP handlers and router.
//!
//! Endpoints:
//! - `POST /api/transactions` - Initiate a transaction
//! - `GET /api/transactions` - List all transactions
//! - `GET /api/transactions/{id}` - Get transaction by ID
//! - `GET /api/transactions/account/{accountId}` - History for an account
//! - `GET /api/transactions/status/{status}` - Filter by status
//! - `PUT /api/transactions/{id}` - Amend (PENDING/SCHEDULED only)
//! - `DELETE /api/transactions/{id}` - Cancel (status transition, no removal)
//! - `GET /api/transactions/{id}/with-account` - Composite view with account info

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
use crate::models::transaction::{
    CreateTransactionRequest, Transaction, TransactionStatus, TransactionWithAccount,
    UpdateTransactionRequest,
};
use crate::services::transaction_service;
use crate::store::Table;

/// Shared state for the transactions service: its own record table plus a
/// client for the accounts peer.
#[derive(Clone)]
pub struct TransactionsState {
    pub transactions: Arc<Table<Transaction>>,
    pub accounts: PeerClient,
}

/// Build the transactions service router.
pub fn router(state: TransactionsState) -> Router {
    Router::new()
        .route(
            "/api/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route(
            "/api/transactions/{id}",
            get(get_transaction)
                .put(amend_transaction)
                .delete(cancel_transaction),
        )
        .route("/api/transactions/account/{account_id}", get(list_by_account))
        .route("/api/transactions/status/{status}", get(list_by_status))
        .route(
            "/api/transactions/{id}/with-account",
            get(transaction_with_account),
        )
        .route("/health", get(|| async { health::health_response("transactions-service") }))
        .with_state(state)
}

/// Initiate a new transaction.
///
/// Returns 201 on success, 400 on a non-positive amount or a status
/// outside the closed enumeration.
pub async fn create_transaction(
    State(state): State<TransactionsState>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    let transaction = transaction_service::create_transaction(&state.transactions, request)?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

pub async fn get_transaction(
    State(state): State<TransactionsState>,
    Path(id): Path<i64>,
) -> Result<Json<Transaction>, AppError> {
    let transaction = transaction_service::get_transaction(&state.transactions, id)?;
    Ok(Json(transaction))
}

pub async fn list_transactions(State(state): State<TransactionsState>) -> Json<Vec<Transaction>> {
    Json(transaction_service::list_transactions(&state.transactions))
}

pub async fn list_by_account(
    State(state): State<TransactionsState>,
    Path(account_id): Path<i64>,
) -> Json<Vec<Transaction>> {
    Json(transaction_service::list_by_account(&state.transactions, account_id))
}

/// Filter by status. An unrecognized status string in the path is a 400,
/// not an empty list.
pub async fn list_by_status(
    State(state): State<TransactionsState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let status: TransactionStatus = status.parse()?;
    Ok(Json(transaction_service::list_by_status(&state.transactions, status)))
}

/// Amend a transaction. Denied with 400 unless the current status is
/// `PENDING` or `SCHEDULED`.
pub async fn amend_transaction(
    State(state): State<TransactionsState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTransactionRequest>,
) -> Result<Json<Transaction>, AppError> {
    let transaction = transaction_service::amend_transaction(&state.transactions, id, request)?;
    Ok(Json(transaction))
}

/// Cancel a transaction. Returns the cancelled record; the row is never
/// physically removed.
pub async fn cancel_transaction(
    State(state): State<TransactionsState>,
    Path(id): Path<i64>,
) -> Result<Json<Transaction>, AppError> {
    let transaction = transaction_service::cancel_transaction(&state.transactions, id)?;
    Ok(Json(transaction))
}

/// Composite endpoint. Responds 200 even when the accounts service is
/// down; the embedded `accountInfo` then carries only the account id.
pub async fn transaction_with_account(
    State(state): State<TransactionsState>,
    Path(id): Path<i64>,
) -> Result<Json<TransactionWithAccount>, AppError> {
    let view =
        transaction_service::transaction_with_account(&state.transactions, &state.accounts, id)
            .await?;
    Ok(Json(view))
}
