use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use branchledger_core::{BranchId, Entity, SupplierId, TransactionId};

/// What a transaction does to the books.
///
/// A single closed variant: a transaction is exactly one of these, so states
/// like "both a purchase and a repayment" are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money in: increases income and the chosen fund.
    Income,
    /// Money out: increases expense and decreases the chosen fund.
    Expense,
    /// Goods received on credit: accrues payable, no cash/bank movement.
    DebtPurchase,
    /// Settling supplier debt: counts as an expense and reduces payable.
    DebtRepayment,
}

/// Which liquid fund a transaction moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundType {
    Cash,
    Bank,
}

/// An immutable fact about money movement.
///
/// `amount` is a whole currency unit (VND carries no subunits); `u64` keeps
/// negative amounts unrepresentable. All downstream accumulation widens to
/// `i128`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub amount: u64,
    pub kind: TransactionKind,
    /// Ignored for `DebtPurchase` (no fund moves until repayment).
    pub fund_type: FundType,
    pub branch_id: BranchId,
    /// Present only for `DebtPurchase` / `DebtRepayment` entries tied to a supplier.
    pub supplier_id: Option<SupplierId>,
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
