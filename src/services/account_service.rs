//! Account service - business logic for account operations.
//!
//! Handlers delegate here; no business logic lives in the HTTP layer.
//! The composite read calls the customers service through the composition
//! gateway and degrades to a fallback projection when the peer is down.

use chrono::Utc;

use crate::error::AppError;
use crate::gateway::PeerClient;
use crate::models::account::{Account, AccountPayload, AccountWithCustomer};
use crate::models::customer::CustomerInfo;
use crate::store::Table;

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Account not found with ID: {id}"))
}

/// Create a new account after probing account number uniqueness.
///
/// The probe is read-then-write and therefore racy under concurrent
/// creators; it exists for a fast, friendly 409. Durable uniqueness is a
/// storage concern.
pub fn create_account(accounts: &Table<Account>, payload: AccountPayload) -> Result<Account, AppError> {
    tracing::info!("creating account with number {}", payload.account_number);
    payload.validate()?;

    if accounts.any(|a| a.account_number == payload.account_number) {
        return Err(AppError::AlreadyExists(format!(
            "Account with number {} already exists",
            payload.account_number
        )));
    }

    let account = accounts.insert(|id| Account {
        id,
        account_number: payload.account_number,
        customer_id: payload.customer_id,
        kind: payload.kind,
        balance: payload.balance,
        created_at: Utc::now(),
    });
    tracing::info!("account created with ID {}", account.id);
    Ok(account)
}

pub fn get_account(accounts: &Table<Account>, id: i64) -> Result<Account, AppError> {
    tracing::debug!("fetching account {id}");
    accounts.get(id).ok_or_else(|| not_found(id))
}

pub fn get_account_by_number(accounts: &Table<Account>, number: &str) -> Result<Account, AppError> {
    tracing::debug!("fetching account by number {number}");
    accounts
        .find(|a| a.account_number == number)
        .ok_or_else(|| AppError::NotFound(format!("Account not found with number: {number}")))
}

pub fn list_accounts(accounts: &Table<Account>) -> Vec<Account> {
    tracing::debug!("fetching all accounts");
    accounts.list()
}

/// All accounts belonging to one customer. This is the projection source
/// the customers service consumes for its composite view.
pub fn list_accounts_by_customer(accounts: &Table<Account>, customer_id: i64) -> Vec<Account> {
    tracing::debug!("fetching accounts for customer {customer_id}");
    accounts.filter(|a| a.customer_id == customer_id)
}

/// Update an account, re-probing account number uniqueness when it changes.
/// The creation timestamp is preserved.
pub fn update_account(
    accounts: &Table<Account>,
    id: i64,
    payload: AccountPayload,
) -> Result<Account, AppError> {
    tracing::info!("updating account {id}");
    payload.validate()?;

    let existing = accounts.get(id).ok_or_else(|| not_found(id))?;

    if existing.account_number != payload.account_number
        && accounts.any(|a| a.account_number == payload.account_number)
    {
        return Err(AppError::AlreadyExists(format!(
            "Account with number {} already exists",
            payload.account_number
        )));
    }

    accounts
        .update(id, |account| {
            account.account_number = payload.account_number;
            account.customer_id = payload.customer_id;
            account.kind = payload.kind;
            account.balance = payload.balance;
        })
        .ok_or_else(|| not_found(id))
}

/// Close an account. Hard removal, unlike transaction cancellation.
pub fn delete_account(accounts: &Table<Account>, id: i64) -> Result<(), AppError> {
    tracing::info!("deleting account {id}");
    if !accounts.remove(id) {
        return Err(not_found(id));
    }
    Ok(())
}

/// Composite view: the account plus minimal customer info.
///
/// Local lookup must succeed before any remote call is attempted. The
/// outbound fetch is a single bounded call; on failure the view degrades to
/// a fallback projection carrying only the known customer id.
pub async fn account_with_customer(
    accounts: &Table<Account>,
    customers: &PeerClient,
    id: i64,
) -> Result<AccountWithCustomer, AppError> {
    tracing::info!("assembling account {id} with customer info");
    let account = accounts.get(id).ok_or_else(|| not_found(id))?;
    let customer_id = account.customer_id;

    let customer_info = customers
        .fetch::<CustomerInfo>(&format!("/api/customers/{customer_id}/info"))
        .await
        .unwrap_or_else(|| CustomerInfo::fallback(customer_id));

    Ok(AccountWithCustomer::new(account, customer_info))
}
