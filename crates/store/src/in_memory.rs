use std::collections::BTreeMap;
use std::sync::RwLock;

use tracing::debug;

use branchledger_core::{BranchId, DomainError, DomainResult, SupplierId, TransactionId};
use branchledger_ledger::{Branch, Supplier, Transaction};

use crate::repository::LedgerRepository;
use crate::snapshot::LedgerSnapshot;

#[derive(Debug, Default)]
struct State {
    /// Append order preserved; snapshots expose the log as appended.
    transactions: Vec<Transaction>,
    suppliers: BTreeMap<SupplierId, Supplier>,
    branches: BTreeMap<BranchId, Branch>,
}

/// In-memory ledger store.
///
/// Intended for tests/dev and simple embedding. Not optimized for large logs:
/// `load` copies the full state, which is exactly the snapshot semantics the
/// readers rely on.
#[derive(Debug, Default)]
pub struct InMemoryLedgerRepository {
    state: RwLock<State>,
}

impl InMemoryLedgerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> DomainResult<std::sync::RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| DomainError::conflict("ledger store lock poisoned"))
    }

    fn write(&self) -> DomainResult<std::sync::RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| DomainError::conflict("ledger store lock poisoned"))
    }
}

impl LedgerRepository for InMemoryLedgerRepository {
    fn load(&self) -> DomainResult<LedgerSnapshot> {
        let state = self.read()?;
        Ok(LedgerSnapshot {
            transactions: state.transactions.clone(),
            suppliers: state.suppliers.values().cloned().collect(),
            branches: state.branches.values().cloned().collect(),
        })
    }

    fn append(&self, tx: Transaction) -> DomainResult<()> {
        let mut state = self.write()?;
        if state.transactions.iter().any(|existing| existing.id == tx.id) {
            return Err(DomainError::conflict(format!(
                "transaction {} already appended",
                tx.id
            )));
        }
        debug!(transaction_id = %tx.id, kind = ?tx.kind, amount = tx.amount, "append transaction");
        state.transactions.push(tx);
        Ok(())
    }

    fn remove_transaction(&self, id: TransactionId) -> DomainResult<()> {
        let mut state = self.write()?;
        let before = state.transactions.len();
        state.transactions.retain(|tx| tx.id != id);
        if state.transactions.len() == before {
            return Err(DomainError::not_found());
        }
        debug!(transaction_id = %id, "remove transaction");
        Ok(())
    }

    fn upsert_supplier(&self, supplier: Supplier) -> DomainResult<()> {
        let mut state = self.write()?;
        debug!(supplier_id = %supplier.id, "upsert supplier");
        state.suppliers.insert(supplier.id, supplier);
        Ok(())
    }

    fn upsert_branch(&self, branch: Branch) -> DomainResult<()> {
        let mut state = self.write()?;
        debug!(branch_id = %branch.id, "upsert branch");
        state.branches.insert(branch.id, branch);
        Ok(())
    }
}
