//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: the entity owned by the accounts service
//! - `AccountPayload`: request body for creating/updating accounts
//! - `AccountSummary`: the reduced shape the customers service consumes
//! - `AccountInfo`: the reduced shape the transactions service consumes
//! - `AccountWithCustomer`: composite view embedding customer info

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::customer::CustomerInfo;

/// A bank account record.
///
/// `customer_id` is an opaque reference to a record in the customers
/// service. It is never validated at write time; referential integrity is
/// discovered lazily when a composite view is assembled.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "accountNumber": "AC-1001",
///   "customerId": 1,
///   "type": "Savings",
///   "balance": 100.0,
///   "createdAt": "2026-08-26T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier for this account
    pub id: i64,

    /// Unique account number, checked read-then-write at creation
    pub account_number: String,

    /// Opaque reference to the owning customer (never validated remotely)
    pub customer_id: i64,

    /// Account type, e.g. "Savings" or "Checking"
    #[serde(rename = "type")]
    pub kind: String,

    /// Current balance, must be non-negative
    pub balance: Decimal,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or updating an account.
///
/// # JSON Example
///
/// ```json
/// {
///   "accountNumber": "AC-1001",
///   "customerId": 1,
///   "type": "Savings",
///   "balance": 100.0
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    pub account_number: String,

    pub customer_id: i64,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub balance: Decimal,
}

impl AccountPayload {
    /// Field-level validation applied before any storage write.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.account_number.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "accountNumber must not be blank".to_string(),
            ));
        }
        if self.kind.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "type must not be blank".to_string(),
            ));
        }
        if self.balance.is_sign_negative() {
            return Err(AppError::InvalidArgument(
                "balance must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Minimal account data the customers service consumes.
///
/// Deserialized from the accounts service's full account representation;
/// extra fields (id, customerId, createdAt) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub account_number: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub balance: Decimal,
}

/// Minimal account data the transactions service consumes.
///
/// `account_id` is always stamped from the locally known foreign key, never
/// taken from the remote payload. The remaining fields are `None` when the
/// accounts service could not be reached (the fallback projection).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    #[serde(default)]
    pub account_id: i64,

    #[serde(default)]
    pub account_number: Option<String>,

    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub balance: Option<Decimal>,
}

impl AccountInfo {
    /// Degraded projection carrying only the already-known account id.
    pub fn fallback(account_id: i64) -> Self {
        Self {
            account_id,
            account_number: None,
            kind: None,
            balance: None,
        }
    }
}

/// Composite view: an account plus minimal customer info from the
/// customers service.
///
/// `customer_info` is always present. When the customers service is
/// unreachable it degrades to the fallback projection carrying only the
/// known customer id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountWithCustomer {
    pub id: i64,
    pub account_number: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub customer_info: CustomerInfo,
}

impl AccountWithCustomer {
    pub fn new(account: Account, customer_info: CustomerInfo) -> Self {
        Self {
            id: account.id,
            account_number: account.account_number,
            kind: account.kind,
            balance: account.balance,
            created_at: account.created_at,
            customer_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn fallback_info_carries_only_the_key() {
        let info = AccountInfo::fallback(5);
        assert_eq!(info.account_id, 5);
        assert!(info.account_number.is_none());
        assert!(info.kind.is_none());
        assert!(info.balance.is_none());
    }

    #[test]
    fn summary_deserializes_from_full_account_body() {
        let body = serde_json::json!({
            "id": 3,
            "accountNumber": "AC-1001",
            "customerId": 1,
            "type": "Savings",
            "balance": 250.5,
            "createdAt": "2026-08-26T10:00:00Z"
        });
        let summary: AccountSummary = serde_json::from_value(body).unwrap();
        assert_eq!(summary.account_number, "AC-1001");
        assert_eq!(summary.kind, "Savings");
        assert_eq!(summary.balance, dec!(250.5));
    }

    #[test]
    fn payload_rejects_negative_balance() {
        let payload = AccountPayload {
            account_number: "AC-1".to_string(),
            customer_id: 1,
            kind: "Savings".to_string(),
            balance: dec!(-1),
        };
        assert!(matches!(
            payload.validate(),
            Err(AppError::InvalidArgument(_))
        ));
    }
}
