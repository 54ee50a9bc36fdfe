use serde::{Deserialize, Serialize};

use branchledger_ledger::{
    AggregateResult, Branch, DebtMap, Scope, Supplier, Transaction, aggregate, compute_debts,
};

/// A self-consistent point-in-time view of the ledger's source facts.
///
/// Everything the two derivations need travels together, so a caller holding
/// a snapshot can never mix transactions from one instant with registries
/// from another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub transactions: Vec<Transaction>,
    pub suppliers: Vec<Supplier>,
    pub branches: Vec<Branch>,
}

impl LedgerSnapshot {
    /// Balance summary for this snapshot under the given scope.
    pub fn aggregate(&self, scope: Scope) -> AggregateResult {
        aggregate(&self.transactions, &self.suppliers, &self.branches, scope)
    }

    /// Per-supplier outstanding balances for this snapshot.
    pub fn debts(&self) -> DebtMap {
        compute_debts(&self.transactions, &self.suppliers)
    }
}
