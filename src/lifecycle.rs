//! Transaction lifecycle guard.
//!
//! A pure decision function gating which write operations are legal given a
//! transaction's current status. The guard performs no I/O and mutates
//! nothing; the caller applies the resulting status to storage.
//!
//! # Rules
//!
//! - Amend: permitted only while the transaction is `PENDING` or
//!   `SCHEDULED`.
//! - Cancel: permitted for any status except `SUCCESS`. Cancelling an
//!   already-`CANCELLED` transaction is an idempotent no-op success.

use crate::error::AppError;
use crate::models::transaction::TransactionStatus;

/// A state-changing operation submitted against an existing transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionOp {
    /// Update the account reference, type, or amount
    Amend,
    /// Transition the status to `CANCELLED`
    Cancel,
}

/// Denial reason produced by the guard.
///
/// The message names the current status so callers can surface it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateDenial {
    #[error("only PENDING or SCHEDULED transactions can be amended, current status is {0}")]
    AmendNotAllowed(TransactionStatus),

    #[error("{0} transactions cannot be cancelled")]
    CancelNotAllowed(TransactionStatus),
}

impl From<StateDenial> for AppError {
    fn from(denial: StateDenial) -> Self {
        AppError::InvalidState(denial.to_string())
    }
}

/// Decide whether `op` is permitted given the transaction's current status.
pub fn authorize(current: TransactionStatus, op: TransactionOp) -> Result<(), StateDenial> {
    match op {
        TransactionOp::Amend => match current {
            TransactionStatus::Pending | TransactionStatus::Scheduled => Ok(()),
            other => Err(StateDenial::AmendNotAllowed(other)),
        },
        TransactionOp::Cancel => match current {
            TransactionStatus::Success => Err(StateDenial::CancelNotAllowed(current)),
            _ => Ok(()),
        },
    }
}
