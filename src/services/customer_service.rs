//! Customer service - business logic for customer operations.
//!
//! Also owns the `/info` minimal projection other services consume, and the
//! composite view pulling account summaries from the accounts service.

use chrono::Utc;

use crate::error::AppError;
use crate::gateway::PeerClient;
use crate::models::account::AccountSummary;
use crate::models::customer::{Customer, CustomerInfo, CustomerPayload, CustomerWithAccounts};
use crate::store::Table;

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Customer not found with ID: {id}"))
}

/// Register a new customer after probing email uniqueness.
pub fn create_customer(
    customers: &Table<Customer>,
    payload: CustomerPayload,
) -> Result<Customer, AppError> {
    tracing::info!("registering customer with email {}", payload.email);
    payload.validate()?;

    if customers.any(|c| c.email == payload.email) {
        return Err(AppError::AlreadyExists(format!(
            "Customer with email {} already exists",
            payload.email
        )));
    }

    let customer = customers.insert(|id| Customer {
        id,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        phone: payload.phone,
        address: payload.address,
        created_at: Utc::now(),
    });
    tracing::info!("customer registered with ID {}", customer.id);
    Ok(customer)
}

pub fn get_customer(customers: &Table<Customer>, id: i64) -> Result<Customer, AppError> {
    tracing::debug!("fetching customer {id}");
    customers.get(id).ok_or_else(|| not_found(id))
}

pub fn get_customer_by_email(customers: &Table<Customer>, email: &str) -> Result<Customer, AppError> {
    tracing::debug!("fetching customer by email {email}");
    customers
        .find(|c| c.email == email)
        .ok_or_else(|| AppError::NotFound(format!("Customer not found with email: {email}")))
}

pub fn list_customers(customers: &Table<Customer>) -> Vec<Customer> {
    tracing::debug!("fetching all customers");
    customers.list()
}

/// Update a customer profile, re-probing email uniqueness when it changes.
/// The creation timestamp is preserved.
pub fn update_customer(
    customers: &Table<Customer>,
    id: i64,
    payload: CustomerPayload,
) -> Result<Customer, AppError> {
    tracing::info!("updating customer {id}");
    payload.validate()?;

    let existing = customers.get(id).ok_or_else(|| not_found(id))?;

    if existing.email != payload.email && customers.any(|c| c.email == payload.email) {
        return Err(AppError::AlreadyExists(format!(
            "Customer with email {} already exists",
            payload.email
        )));
    }

    customers
        .update(id, |customer| {
            customer.first_name = payload.first_name;
            customer.last_name = payload.last_name;
            customer.email = payload.email;
            customer.phone = payload.phone;
            customer.address = payload.address;
        })
        .ok_or_else(|| not_found(id))
}

pub fn delete_customer(customers: &Table<Customer>, id: i64) -> Result<(), AppError> {
    tracing::info!("deleting customer {id}");
    if !customers.remove(id) {
        return Err(not_found(id));
    }
    Ok(())
}

/// The minimal projection peers are allowed to see: id, name, email.
/// Phone and address never cross the service boundary.
pub fn customer_info(customers: &Table<Customer>, id: i64) -> Result<CustomerInfo, AppError> {
    tracing::debug!("fetching minimal customer info for {id}");
    let customer = customers.get(id).ok_or_else(|| not_found(id))?;
    Ok(CustomerInfo::from(&customer))
}

/// Composite view: the customer plus summaries of their accounts.
///
/// One bounded call to the accounts service; when it fails the view
/// degrades to an empty account list, never a placeholder item.
pub async fn customer_with_accounts(
    customers: &Table<Customer>,
    accounts: &PeerClient,
    id: i64,
) -> Result<CustomerWithAccounts, AppError> {
    tracing::info!("assembling customer {id} with account summaries");
    let customer = customers.get(id).ok_or_else(|| not_found(id))?;

    let summaries = accounts
        .fetch::<Vec<AccountSummary>>(&format!("/api/accounts/customer/{id}"))
        .await
        .unwrap_or_else(Vec::new);

    Ok(CustomerWithAccounts::new(customer, summaries))
}
