//! Per-supplier outstanding balances.

use std::collections::BTreeMap;

use branchledger_core::SupplierId;

use crate::registry::Supplier;
use crate::transaction::{Transaction, TransactionKind};

/// Supplier id to outstanding balance. Balances may be negative (overpayment);
/// the ledger never clamps. Ordered map for stable display and serialization.
pub type DebtMap = BTreeMap<SupplierId, i128>;

/// Fold supplier initial debts and debt-tagged transactions into outstanding
/// balances.
///
/// A supplier id referenced by a transaction but absent from the registry
/// snapshot gets a zero-initialized entry; an `Income`/`Expense` carrying a
/// supplier id should not occur and applies no delta.
pub fn compute_debts(transactions: &[Transaction], suppliers: &[Supplier]) -> DebtMap {
    let mut debts: DebtMap = suppliers
        .iter()
        .map(|s| (s.id, i128::from(s.initial_debt)))
        .collect();

    for tx in transactions {
        let Some(supplier_id) = tx.supplier_id else {
            continue;
        };
        let balance = debts.entry(supplier_id).or_insert(0);
        match tx.kind {
            TransactionKind::DebtPurchase => *balance += i128::from(tx.amount),
            TransactionKind::DebtRepayment => *balance -= i128::from(tx.amount),
            TransactionKind::Income | TransactionKind::Expense => {}
        }
    }

    debts
}
