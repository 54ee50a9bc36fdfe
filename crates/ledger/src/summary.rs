//! Derived balance shapes. Never persisted; always recomputed from the
//! transaction log.

use serde::{Deserialize, Serialize};

use crate::transaction::FundType;

/// Cash/bank sub-totals for one rollup bucket.
///
/// Rollups only ever reflect fund movement (income, expense, repayment),
/// never the payable total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundBalances {
    pub cash: i128,
    pub bank: i128,
}

impl FundBalances {
    /// Apply a signed delta to the matching fund.
    pub(crate) fn apply(&mut self, fund: FundType, delta: i128) {
        match fund {
            FundType::Cash => self.cash += delta,
            FundType::Bank => self.bank += delta,
        }
    }
}

/// The full balance picture for one scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: i128,
    pub total_expense: i128,
    /// `total_income - total_expense`.
    pub balance: i128,
    pub cash_balance: i128,
    pub bank_balance: i128,
    /// Outstanding supplier debt: initial debts plus purchases minus repayments.
    pub total_payable: i128,
}
