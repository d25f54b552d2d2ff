//! Application configuration management.
//!
//! Each service binary loads its own configuration from environment
//! variables via the `envy` crate. Every field has a default matching the
//! original deployment layout (accounts :8081, customers :8082,
//! transactions :8083), so a service starts with no environment at all.

use serde::Deserialize;

/// Default per-request timeout for peer service calls, in milliseconds.
fn default_peer_timeout_ms() -> u64 {
    2000
}

fn default_accounts_port() -> u16 {
    8081
}

fn default_customers_port() -> u16 {
    8082
}

fn default_transactions_port() -> u16 {
    8083
}

fn default_accounts_url() -> String {
    "http://localhost:8081".to_string()
}

fn default_customers_url() -> String {
    "http://localhost:8082".to_string()
}

/// Accounts service configuration.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8081
/// - `CUSTOMERS_SERVICE_URL` (optional): base address of the customers peer
/// - `PEER_TIMEOUT_MS` (optional): outbound call timeout, defaults to 2000
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsConfig {
    #[serde(default = "default_accounts_port")]
    pub server_port: u16,

    #[serde(default = "default_customers_url")]
    pub customers_service_url: String,

    #[serde(default = "default_peer_timeout_ms")]
    pub peer_timeout_ms: u64,
}

/// Customers service configuration.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8082
/// - `ACCOUNTS_SERVICE_URL` (optional): base address of the accounts peer
/// - `PEER_TIMEOUT_MS` (optional): outbound call timeout, defaults to 2000
#[derive(Debug, Clone, Deserialize)]
pub struct CustomersConfig {
    #[serde(default = "default_customers_port")]
    pub server_port: u16,

    #[serde(default = "default_accounts_url")]
    pub accounts_service_url: String,

    #[serde(default = "default_peer_timeout_ms")]
    pub peer_timeout_ms: u64,
}

/// Transactions service configuration.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8083
/// - `ACCOUNTS_SERVICE_URL` (optional): base address of the accounts peer
/// - `PEER_TIMEOUT_MS` (optional): outbound call timeout, defaults to 2000
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsConfig {
    #[serde(default = "default_transactions_port")]
    pub server_port: u16,

    #[serde(default = "default_accounts_url")]
    pub accounts_service_url: String,

    #[serde(default = "default_peer_timeout_ms")]
    pub peer_timeout_ms: u64,
}

impl AccountsConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env::<Self>()
    }
}

impl CustomersConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env::<Self>()
    }
}

impl TransactionsConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env::<Self>()
    }
}
