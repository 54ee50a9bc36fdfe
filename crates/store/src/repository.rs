use std::sync::Arc;

use branchledger_core::{DomainResult, TransactionId};
use branchledger_ledger::{Branch, Supplier, Transaction};

use crate::snapshot::LedgerSnapshot;

/// Storage contract for ledger source facts.
///
/// The transaction log is append-only from the ledger's point of view;
/// registry records are upserted whole. Deletion exists on the contract
/// because the owning layer performs it, but nothing in this workspace edits
/// a stored transaction in place.
///
/// Intended usage under concurrency: a single writer serializes mutations,
/// any number of readers call `load` and compute against the returned
/// snapshot (no coordination needed once the copy is out).
pub trait LedgerRepository: Send + Sync {
    /// Point-in-time snapshot of all source facts.
    fn load(&self) -> DomainResult<LedgerSnapshot>;

    /// Append a transaction to the log. Re-appending an existing id is a
    /// conflict, not an overwrite.
    fn append(&self, tx: Transaction) -> DomainResult<()>;

    /// Remove a transaction from the log.
    fn remove_transaction(&self, id: TransactionId) -> DomainResult<()>;

    /// Insert or replace a supplier registry record.
    fn upsert_supplier(&self, supplier: Supplier) -> DomainResult<()>;

    /// Insert or replace a branch registry record.
    fn upsert_branch(&self, branch: Branch) -> DomainResult<()>;
}

impl<R> LedgerRepository for Arc<R>
where
    R: LedgerRepository + ?Sized,
{
    fn load(&self) -> DomainResult<LedgerSnapshot> {
        (**self).load()
    }

    fn append(&self, tx: Transaction) -> DomainResult<()> {
        (**self).append(tx)
    }

    fn remove_transaction(&self, id: TransactionId) -> DomainResult<()> {
        (**self).remove_transaction(id)
    }

    fn upsert_supplier(&self, supplier: Supplier) -> DomainResult<()> {
        (**self).upsert_supplier(supplier)
    }

    fn upsert_branch(&self, branch: Branch) -> DomainResult<()> {
        (**self).upsert_branch(branch)
    }
}
