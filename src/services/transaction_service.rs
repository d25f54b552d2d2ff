//! Transaction service - business logic for transaction operations.
//!
//! All state-changing operations consult the lifecycle guard before
//! touching storage. Transactions are never physically deleted; the delete
//! path is a cancellation (status transition to `CANCELLED`).

use chrono::Utc;
use rust_decimal::Decimal;

use crate::error::AppError;
use crate::gateway::PeerClient;
use crate::lifecycle::{self, TransactionOp};
use crate::models::account::AccountInfo;
use crate::models::transaction::{
    CreateTransactionRequest, Transaction, TransactionStatus, TransactionWithAccount,
    UpdateTransactionRequest,
};
use crate::store::Table;

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Transaction not found with ID: {id}"))
}

/// Amount must be strictly positive, on creation and on any amendment,
/// independent of lifecycle state.
fn validate_amount(amount: Decimal) -> Result<(), AppError> {
    if amount <= Decimal::ZERO {
        return Err(AppError::InvalidArgument(
            "amount must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Initiate a new transaction.
///
/// Status defaults to `SUCCESS` when omitted; unrecognized status strings
/// are rejected rather than persisted. The transaction date is assigned
/// here, never taken from the caller.
pub fn create_transaction(
    transactions: &Table<Transaction>,
    request: CreateTransactionRequest,
) -> Result<Transaction, AppError> {
    tracing::info!("creating transaction for account {}", request.account_id);
    validate_amount(request.amount)?;
    let status = request.resolved_status()?;

    let transaction = transactions.insert(|id| Transaction {
        id,
        account_id: request.account_id,
        kind: request.kind,
        amount: request.amount,
        transaction_date: Utc::now(),
        status,
    });
    tracing::info!("transaction created with ID {}", transaction.id);
    Ok(transaction)
}

pub fn get_transaction(transactions: &Table<Transaction>, id: i64) -> Result<Transaction, AppError> {
    tracing::debug!("fetching transaction {id}");
    transactions.get(id).ok_or_else(|| not_found(id))
}

pub fn list_transactions(transactions: &Table<Transaction>) -> Vec<Transaction> {
    tracing::debug!("fetching all transactions");
    transactions.list()
}

/// Transaction history for one account.
pub fn list_by_account(transactions: &Table<Transaction>, account_id: i64) -> Vec<Transaction> {
    tracing::debug!("fetching transactions for account {account_id}");
    transactions.filter(|t| t.account_id == account_id)
}

pub fn list_by_status(transactions: &Table<Transaction>, status: TransactionStatus) -> Vec<Transaction> {
    tracing::debug!("fetching transactions with status {status}");
    transactions.filter(|t| t.status == status)
}

/// Amend a transaction's content: account reference, type, and amount.
///
/// Gated by the lifecycle guard (`PENDING`/`SCHEDULED` only). Status is not
/// amendable through this path. Validation failures leave the record
/// untouched.
pub fn amend_transaction(
    transactions: &Table<Transaction>,
    id: i64,
    request: UpdateTransactionRequest,
) -> Result<Transaction, AppError> {
    tracing::info!("amending transaction {id}");

    let existing = transactions.get(id).ok_or_else(|| not_found(id))?;
    lifecycle::authorize(existing.status, TransactionOp::Amend)?;
    validate_amount(request.amount)?;

    let updated = transactions
        .update(id, |transaction| {
            transaction.account_id = request.account_id;
            transaction.kind = request.kind;
            transaction.amount = request.amount;
        })
        .ok_or_else(|| not_found(id))?;
    tracing::info!("transaction {id} amended");
    Ok(updated)
}

/// Cancel a transaction, setting its status to `CANCELLED`.
///
/// Denied only for `SUCCESS` transactions. Cancelling an already-cancelled
/// transaction is an idempotent success.
pub fn cancel_transaction(
    transactions: &Table<Transaction>,
    id: i64,
) -> Result<Transaction, AppError> {
    tracing::info!("cancelling transaction {id}");

    let existing = transactions.get(id).ok_or_else(|| not_found(id))?;
    lifecycle::authorize(existing.status, TransactionOp::Cancel)?;

    let cancelled = transactions
        .update(id, |transaction| {
            transaction.status = TransactionStatus::Cancelled;
        })
        .ok_or_else(|| not_found(id))?;
    tracing::info!("transaction {id} cancelled");
    Ok(cancelled)
}

/// Composite view: the transaction plus minimal account info.
///
/// Local lookup must succeed before the remote call. The account id on the
/// embedded projection is always the locally known foreign key, whether the
/// fetch succeeded or not.
pub async fn transaction_with_account(
    transactions: &Table<Transaction>,
    accounts: &PeerClient,
    id: i64,
) -> Result<TransactionWithAccount, AppError> {
    tracing::info!("assembling transaction {id} with account info");
    let transaction = transactions.get(id).ok_or_else(|| not_found(id))?;
    let account_id = transaction.account_id;

    let mut account_info = accounts
        .fetch::<AccountInfo>(&format!("/api/accounts/{account_id}"))
        .await
        .unwrap_or_else(|| AccountInfo::fallback(account_id));
    account_info.account_id = account_id;

    Ok(TransactionWithAccount::new(transaction, account_info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn seeded(status: Option<&str>) -> (Table<Transaction>, Transaction) {
        let table = Table::new();
        let created = create_transaction(
            &table,
            CreateTransactionRequest {
                account_id: 5,
                kind: "Deposit".to_string(),
                amount: dec!(50.00),
                status: status.map(str::to_string),
            },
        )
        .expect("seed transaction");
        (table, created)
    }

    #[test]
    fn create_defaults_to_success() {
        let (_, created) = seeded(None);
        assert_eq!(created.status, TransactionStatus::Success);
    }

    #[test]
    fn create_rejects_non_positive_amount() {
        let table = Table::new();
        for amount in [dec!(0), dec!(-10.00)] {
            let result = create_transaction(
                &table,
                CreateTransactionRequest {
                    account_id: 5,
                    kind: "Deposit".to_string(),
                    amount,
                    status: Some("PENDING".to_string()),
                },
            );
            assert!(matches!(result, Err(AppError::InvalidArgument(_))));
        }
        assert!(table.list().is_empty());
    }

    #[test]
    fn amend_succeeds_for_pending_and_scheduled() {
        for status in ["PENDING", "SCHEDULED"] {
            let (table, created) = seeded(Some(status));
            let amended = amend_transaction(
                &table,
                created.id,
                UpdateTransactionRequest {
                    account_id: 6,
                    kind: "Transfer".to_string(),
                    amount: dec!(75.00),
                },
            )
            .expect("amend allowed");
            assert_eq!(amended.amount, dec!(75.00));
            assert_eq!(amended.account_id, 6);
        }
    }

    #[test]
    fn amend_fails_for_terminal_statuses() {
        for status in ["SUCCESS", "CANCELLED"] {
            let (table, created) = seeded(Some(status));
            let result = amend_transaction(
                &table,
                created.id,
                UpdateTransactionRequest {
                    account_id: 6,
                    kind: "Transfer".to_string(),
                    amount: dec!(75.00),
                },
            );
            assert!(matches!(result, Err(AppError::InvalidState(_))));
        }
    }

    #[test]
    fn amend_with_non_positive_amount_persists_nothing() {
        let (table, created) = seeded(Some("PENDING"));
        let result = amend_transaction(
            &table,
            created.id,
            UpdateTransactionRequest {
                account_id: 5,
                kind: "Deposit".to_string(),
                amount: dec!(-10.00),
            },
        );
        assert!(matches!(result, Err(AppError::InvalidArgument(_))));

        let stored = table.get(created.id).expect("still present");
        assert_eq!(stored.amount, dec!(50.00));
        assert_eq!(stored.status, TransactionStatus::Pending);
    }

    #[test]
    fn cancel_is_idempotent() {
        let (table, created) = seeded(Some("PENDING"));
        let first = cancel_transaction(&table, created.id).expect("first cancel");
        assert_eq!(first.status, TransactionStatus::Cancelled);
        let second = cancel_transaction(&table, created.id).expect("second cancel");
        assert_eq!(second.status, TransactionStatus::Cancelled);
    }

    #[test]
    fn cancel_fails_for_success() {
        let (table, created) = seeded(Some("SUCCESS"));
        let result = cancel_transaction(&table, created.id);
        assert!(matches!(result, Err(AppError::InvalidState(_))));
        assert_eq!(
            table.get(created.id).map(|t| t.status),
            Some(TransactionStatus::Success)
        );
    }

    #[test]
    fn missing_transaction_is_not_found() {
        let table = Table::new();
        assert!(matches!(
            get_transaction(&table, 99),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            cancel_transaction(&table, 99),
            Err(AppError::NotFound(_))
        ));
    }
}
