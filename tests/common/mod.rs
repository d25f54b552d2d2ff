//! Shared helpers for integration tests: spawn each service on an
//! ephemeral port and return its base URL.

use std::sync::Arc;
use std::time::Duration;

use banking_records::gateway::PeerClient;
use banking_records::handlers::accounts::{self, AccountsState};
use banking_records::handlers::customers::{self, CustomersState};
use banking_records::handlers::transactions::{self, TransactionsState};
use banking_records::store::Table;

async fn serve(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("test server error: {e}");
        }
    });
    format!("http://{addr}")
}

fn peer(base_url: &str) -> PeerClient {
    PeerClient::new(base_url, Duration::from_millis(500)).expect("peer client")
}

/// A base URL that never answers: the socket stays bound so no test server
/// can land on the port, but nothing accepts, so calls hang until the
/// client timeout fires.
pub fn dead_peer_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind throwaway listener");
    let addr = listener.local_addr().expect("local addr");
    std::mem::forget(listener);
    format!("http://{addr}")
}

pub async fn spawn_accounts(customers_base_url: &str) -> String {
    let state = AccountsState {
        accounts: Arc::new(Table::new()),
        customers: peer(customers_base_url),
    };
    serve(accounts::router(state)).await
}

pub async fn spawn_customers(accounts_base_url: &str) -> String {
    let state = CustomersState {
        customers: Arc::new(Table::new()),
        accounts: peer(accounts_base_url),
    };
    serve(customers::router(state)).await
}

pub async fn spawn_transactions(accounts_base_url: &str) -> String {
    let state = TransactionsState {
        transactions: Arc::new(Table::new()),
        accounts: peer(accounts_base_url),
    };
    serve(transactions::router(state)).await
}
