//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `TransactionStatus`: the closed status enumeration
//! - `Transaction`: the entity owned by the transactions service
//! - Request types for initiating and amending transactions
//! - `TransactionWithAccount`: composite view embedding account info

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::account::AccountInfo;

/// Lifecycle status of a transaction.
///
/// `Success` and `Cancelled` are terminal. The set is closed: any other
/// string supplied by a caller is rejected with `InvalidArgument` rather
/// than persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Scheduled,
    Success,
    Cancelled,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Scheduled => "SCHEDULED",
            TransactionStatus::Success => "SUCCESS",
            TransactionStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for status strings outside the closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transaction status: {0}")]
pub struct UnknownStatus(pub String);

impl From<UnknownStatus> for AppError {
    fn from(err: UnknownStatus) -> Self {
        AppError::InvalidArgument(err.to_string())
    }
}

impl FromStr for TransactionStatus {
    type Err = UnknownStatus;

    // Case-insensitive: status arrives both in JSON bodies and URL paths.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(TransactionStatus::Pending),
            "SCHEDULED" => Ok(TransactionStatus::Scheduled),
            "SUCCESS" => Ok(TransactionStatus::Success),
            "CANCELLED" => Ok(TransactionStatus::Cancelled),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// A transaction record.
///
/// `account_id` is an opaque reference to a record in the accounts service,
/// never validated at write time. Transactions are never physically
/// deleted; cancellation is a status transition.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "accountId": 5,
///   "type": "Deposit",
///   "amount": 50.0,
///   "transactionDate": "2026-08-26T10:00:00Z",
///   "status": "PENDING"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier for this transaction
    pub id: i64,

    /// Opaque reference to the account this transaction belongs to
    pub account_id: i64,

    /// Transaction type, e.g. "Deposit" or "Withdrawal"
    #[serde(rename = "type")]
    pub kind: String,

    /// Amount, strictly positive
    pub amount: Decimal,

    /// Timestamp assigned by the service at creation
    pub transaction_date: DateTime<Utc>,

    pub status: TransactionStatus,
}

/// Request body for initiating a transaction.
///
/// `status` is optional and defaults to `SUCCESS`. It is carried as a raw
/// string so unrecognized values can be rejected with a 400 rather than a
/// body-rejection status.
///
/// # JSON Example
///
/// ```json
/// {
///   "accountId": 5,
///   "type": "Deposit",
///   "amount": 50.0,
///   "status": "PENDING"
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub account_id: i64,

    #[serde(rename = "type")]
    pub kind: String,

    pub amount: Decimal,

    #[serde(default)]
    pub status: Option<String>,
}

impl CreateTransactionRequest {
    /// Resolve the requested status against the closed enumeration.
    ///
    /// Defaults to `SUCCESS` when the caller omits it.
    pub fn resolved_status(&self) -> Result<TransactionStatus, AppError> {
        match self.status.as_deref() {
            None => Ok(TransactionStatus::Success),
            Some(s) if s.trim().is_empty() => Ok(TransactionStatus::Success),
            Some(s) => Ok(s.parse::<TransactionStatus>()?),
        }
    }
}

/// Request body for amending a transaction.
///
/// Amendable content is the account reference, type, and amount. Status is
/// not amendable; the only status transition after creation is cancellation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    pub account_id: i64,

    #[serde(rename = "type")]
    pub kind: String,

    pub amount: Decimal,
}

/// Composite view: a transaction plus minimal account info from the
/// accounts service.
///
/// `account_info` is always present. When the accounts service is
/// unreachable it degrades to the fallback projection carrying only the
/// known account id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionWithAccount {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Decimal,
    pub transaction_date: DateTime<Utc>,
    pub status: TransactionStatus,
    pub account_info: AccountInfo,
}

impl TransactionWithAccount {
    pub fn new(transaction: Transaction, account_info: AccountInfo) -> Self {
        Self {
            id: transaction.id,
            kind: transaction.kind,
            amount: transaction.amount,
            transaction_date: transaction.transaction_date,
            status: transaction.status,
            account_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(
            "pending".parse::<TransactionStatus>().unwrap(),
            TransactionStatus::Pending
        );
        assert_eq!(
            "CANCELLED".parse::<TransactionStatus>().unwrap(),
            TransactionStatus::Cancelled
        );
    }

    #[test]
    fn status_rejects_values_outside_the_enumeration() {
        let err = "ON_HOLD".parse::<TransactionStatus>().unwrap_err();
        assert_eq!(err, UnknownStatus("ON_HOLD".to_string()));
    }

    #[test]
    fn status_serializes_as_uppercase() {
        let json = serde_json::to_string(&TransactionStatus::Scheduled).unwrap();
        assert_eq!(json, "\"SCHEDULED\"");
    }

    #[test]
    fn create_request_defaults_to_success() {
        let request = CreateTransactionRequest {
            account_id: 5,
            kind: "Deposit".to_string(),
            amount: dec!(50),
            status: None,
        };
        assert_eq!(
            request.resolved_status().unwrap(),
            TransactionStatus::Success
        );
    }

    #[test]
    fn create_request_rejects_unknown_status() {
        let request = CreateTransactionRequest {
            account_id: 5,
            kind: "Deposit".to_string(),
            amount: dec!(50),
            status: Some("REVERSED".to_string()),
        };
        assert!(matches!(
            request.resolved_status(),
            Err(AppError::InvalidArgument(_))
        ));
    }
}
