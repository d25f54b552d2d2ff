//! Customer data models and API request/response types.
//!
//! This module defines:
//! - `Customer`: the entity owned by the customers service
//! - `CustomerPayload`: request body for creating/updating customers
//! - `CustomerInfo`: the reduced shape the accounts service consumes
//! - `CustomerWithAccounts`: composite view embedding account summaries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::account::AccountSummary;

/// A customer record.
///
/// Full customer data stays inside the customers service. Peers only ever
/// see the [`CustomerInfo`] projection; `phone` and `address` are never
/// exposed across the service boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier for this customer
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    /// Unique email, checked read-then-write at creation
    pub email: String,

    pub phone: Option<String>,

    pub address: Option<String>,

    /// Timestamp when the customer was registered
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or updating a customer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub first_name: String,

    pub last_name: String,

    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,
}

impl CustomerPayload {
    /// Field-level validation applied before any storage write.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.first_name.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "firstName must not be blank".to_string(),
            ));
        }
        if self.last_name.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "lastName must not be blank".to_string(),
            ));
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(AppError::InvalidArgument(
                "email must be a valid address".to_string(),
            ));
        }
        Ok(())
    }
}

/// Minimal customer data for cross-service consumption.
///
/// This is the fixed field set the accounts service is allowed to see:
/// id, name, and email only. The optional fields are `None` when the
/// customers service could not be reached (the fallback projection).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub customer_id: i64,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl CustomerInfo {
    /// Degraded projection carrying only the already-known customer id.
    pub fn fallback(customer_id: i64) -> Self {
        Self {
            customer_id,
            first_name: None,
            last_name: None,
            email: None,
        }
    }
}

impl From<&Customer> for CustomerInfo {
    fn from(customer: &Customer) -> Self {
        Self {
            customer_id: customer.id,
            first_name: Some(customer.first_name.clone()),
            last_name: Some(customer.last_name.clone()),
            email: Some(customer.email.clone()),
        }
    }
}

/// Composite view: a customer plus summaries of their accounts from the
/// accounts service.
///
/// `accounts` is always present. When the accounts service is unreachable
/// it degrades to an empty list, never a placeholder item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerWithAccounts {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub accounts: Vec<AccountSummary>,
}

impl CustomerWithAccounts {
    pub fn new(customer: Customer, accounts: Vec<AccountSummary>) -> Self {
        Self {
            id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            accounts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("555-0100".to_string()),
            address: Some("12 Analytical St".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn info_projection_excludes_phone_and_address() {
        let info = CustomerInfo::from(&customer());
        let json = serde_json::to_value(&info).unwrap();
        let mut fields: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        fields.sort_unstable();
        assert_eq!(fields, vec!["customerId", "email", "firstName", "lastName"]);
    }

    #[test]
    fn fallback_info_carries_only_the_key() {
        let info = CustomerInfo::fallback(7);
        assert_eq!(info.customer_id, 7);
        assert!(info.first_name.is_none());
        assert!(info.last_name.is_none());
        assert!(info.email.is_none());
    }

    #[test]
    fn payload_rejects_blank_email() {
        let payload = CustomerPayload {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            address: None,
        };
        assert!(matches!(
            payload.validate(),
            Err(AppError::InvalidArgument(_))
        ));
    }
}
