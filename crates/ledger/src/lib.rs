//! Ledger aggregation core (balances and supplier debts).
//!
//! This crate contains the business rules for deriving financial balances from
//! an append-only transaction log, implemented purely as deterministic domain
//! logic (no IO, no HTTP, no storage).
//!
//! Balances are never stored: every number this crate produces is recomputed
//! in full from a point-in-time snapshot of the transaction log and the
//! supplier/branch registries. Both entry points are pure functions over
//! immutable slices and are safe to call concurrently.

pub mod aggregate;
pub mod debts;
pub mod registry;
pub mod scope;
pub mod summary;
pub mod transaction;

pub use aggregate::{AggregateResult, aggregate};
pub use debts::{DebtMap, compute_debts};
pub use registry::{Branch, Supplier};
pub use scope::{BranchBucket, Scope, bucket_of};
pub use summary::{FinancialSummary, FundBalances};
pub use transaction::{FundType, Transaction, TransactionKind};
