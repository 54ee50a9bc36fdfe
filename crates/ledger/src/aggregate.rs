//! Balance aggregation: one pass over the transaction log per call.

use serde::{Deserialize, Serialize};

use crate::registry::{Branch, Supplier};
use crate::scope::{BranchBucket, Scope, bucket_of};
use crate::summary::{FinancialSummary, FundBalances};
use crate::transaction::{FundType, Transaction, TransactionKind};

/// Output of [`aggregate`]: the global summary, head-office/field-branch
/// rollups, and the scope-filtered transactions for downstream display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub global: FinancialSummary,
    pub head_office: FundBalances,
    pub branches: FundBalances,
    pub transactions: Vec<Transaction>,
}

/// Fold a transaction snapshot into balances under the given scope.
///
/// Single pass, O(n) in transaction count, stateless and re-entrant. Callers
/// re-invoke this on every mutation or scope change; there is no incremental
/// update path.
///
/// The payable seed (the sum of all suppliers' `initial_debt`) is NOT
/// scope-filtered, while debt purchase/repayment deltas ARE. Initial debt is
/// treated as a global fact independent of which branch is being viewed; the
/// asymmetry is long-standing behavior that scoped views depend on.
pub fn aggregate(
    transactions: &[Transaction],
    suppliers: &[Supplier],
    branches: &[Branch],
    scope: Scope,
) -> AggregateResult {
    let mut total_income: i128 = 0;
    let mut total_expense: i128 = 0;
    let mut cash_balance: i128 = 0;
    let mut bank_balance: i128 = 0;
    let mut head_office = FundBalances::default();
    let mut field_branches = FundBalances::default();
    let mut in_scope: Vec<Transaction> = Vec::new();

    let mut total_payable: i128 = suppliers.iter().map(|s| i128::from(s.initial_debt)).sum();

    for tx in transactions.iter().filter(|tx| scope.contains(tx)) {
        let amount = i128::from(tx.amount);

        // Signed fund delta; None for a debt purchase, which moves no money
        // until it is repaid.
        let fund_delta = match tx.kind {
            TransactionKind::DebtPurchase => {
                total_payable += amount;
                None
            }
            TransactionKind::Income => {
                total_income += amount;
                Some(amount)
            }
            TransactionKind::Expense => {
                total_expense += amount;
                Some(-amount)
            }
            TransactionKind::DebtRepayment => {
                total_payable -= amount;
                total_expense += amount;
                Some(-amount)
            }
        };

        if let Some(delta) = fund_delta {
            match tx.fund_type {
                FundType::Cash => cash_balance += delta,
                FundType::Bank => bank_balance += delta,
            }
            match bucket_of(tx.branch_id, branches) {
                BranchBucket::HeadOffice => head_office.apply(tx.fund_type, delta),
                BranchBucket::FieldBranch => field_branches.apply(tx.fund_type, delta),
            }
        }

        in_scope.push(tx.clone());
    }

    AggregateResult {
        global: FinancialSummary {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            cash_balance,
            bank_balance,
            total_payable,
        },
        head_office,
        branches: field_branches,
        transactions: in_scope,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::FundType;
    use branchledger_core::{BranchId, SupplierId, TransactionId};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn branch(name: &str, is_head_office: bool) -> Branch {
        Branch {
            id: BranchId::new(),
            name: name.to_string(),
            code: name.to_string(),
            is_head_office,
        }
    }

    fn supplier(initial_debt: u64) -> Supplier {
        Supplier {
            id: SupplierId::new(),
            name: "supplier".to_string(),
            initial_debt,
        }
    }

    fn tx(
        kind: TransactionKind,
        amount: u64,
        fund_type: FundType,
        branch_id: BranchId,
        supplier_id: Option<SupplierId>,
    ) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            date: test_date(),
            amount,
            kind,
            fund_type,
            branch_id,
            supplier_id,
        }
    }

    #[test]
    fn incomes_split_across_rollup_buckets() {
        let hq = branch("HQ", true);
        let b1 = branch("B1", false);
        let registry = vec![hq.clone(), b1.clone()];

        let log = vec![
            tx(TransactionKind::Income, 1_000_000, FundType::Bank, hq.id, None),
            tx(TransactionKind::Income, 500_000, FundType::Cash, b1.id, None),
        ];

        let result = aggregate(&log, &[], &registry, Scope::All);

        assert_eq!(result.global.total_income, 1_500_000);
        assert_eq!(result.global.balance, 1_500_000);
        assert_eq!(result.head_office.bank, 1_000_000);
        assert_eq!(result.head_office.cash, 0);
        assert_eq!(result.branches.cash, 500_000);
        assert_eq!(result.branches.bank, 0);
        assert_eq!(result.transactions.len(), 2);
    }

    #[test]
    fn debt_purchase_touches_only_payable() {
        let b1 = branch("B1", false);
        let sup = supplier(0);
        let log = vec![tx(
            TransactionKind::DebtPurchase,
            300_000,
            FundType::Cash,
            b1.id,
            Some(sup.id),
        )];

        let result = aggregate(&log, std::slice::from_ref(&sup), &[b1], Scope::All);

        assert_eq!(result.global.total_payable, 300_000);
        assert_eq!(result.global.total_income, 0);
        assert_eq!(result.global.total_expense, 0);
        assert_eq!(result.global.cash_balance, 0);
        assert_eq!(result.global.bank_balance, 0);
        assert_eq!(result.head_office, FundBalances::default());
        assert_eq!(result.branches, FundBalances::default());
    }

    #[test]
    fn repayment_is_an_expense_and_reduces_payable() {
        let b1 = branch("B1", false);
        let sup = supplier(200_000);
        let log = vec![
            tx(
                TransactionKind::DebtPurchase,
                100_000,
                FundType::Cash,
                b1.id,
                Some(sup.id),
            ),
            tx(
                TransactionKind::DebtRepayment,
                50_000,
                FundType::Cash,
                b1.id,
                Some(sup.id),
            ),
        ];

        let result = aggregate(
            &log,
            std::slice::from_ref(&sup),
            std::slice::from_ref(&b1),
            Scope::Branch(b1.id),
        );

        assert_eq!(result.global.total_payable, 250_000);
        assert_eq!(result.global.total_expense, 50_000);
        assert_eq!(result.global.cash_balance, -50_000);
        assert_eq!(result.global.balance, -50_000);
    }

    #[test]
    fn branch_scope_filters_transactions_but_not_initial_debt() {
        let hq = branch("HQ", true);
        let b1 = branch("B1", false);
        let registry = vec![hq.clone(), b1.clone()];
        let sup = supplier(200_000);

        let log = vec![
            tx(
                TransactionKind::DebtPurchase,
                100_000,
                FundType::Cash,
                hq.id,
                Some(sup.id),
            ),
            tx(TransactionKind::Income, 40_000, FundType::Cash, b1.id, None),
        ];

        // Viewing B1: the HQ purchase is out of scope, the seed is not.
        let result = aggregate(&log, std::slice::from_ref(&sup), &registry, Scope::Branch(b1.id));

        assert_eq!(result.global.total_payable, 200_000);
        assert_eq!(result.global.total_income, 40_000);
        assert_eq!(result.transactions.len(), 1);
        assert_eq!(result.transactions[0].branch_id, b1.id);
    }

    #[test]
    fn empty_snapshot_seeds_payable_from_suppliers() {
        let suppliers = vec![supplier(200_000), supplier(50_000)];
        let result = aggregate(&[], &suppliers, &[], Scope::All);
        assert_eq!(result.global, FinancialSummary {
            total_payable: 250_000,
            ..FinancialSummary::default()
        });
        assert!(result.transactions.is_empty());
    }

    #[test]
    fn maximal_amounts_widen_without_overflow() {
        let b1 = branch("B1", false);
        let log = vec![
            tx(TransactionKind::Income, u64::MAX, FundType::Cash, b1.id, None),
            tx(TransactionKind::Income, u64::MAX, FundType::Bank, b1.id, None),
            tx(TransactionKind::Expense, u64::MAX, FundType::Cash, b1.id, None),
        ];

        let result = aggregate(&log, &[], std::slice::from_ref(&b1), Scope::All);

        let max = i128::from(u64::MAX);
        assert_eq!(result.global.total_income, 2 * max);
        assert_eq!(result.global.total_expense, max);
        assert_eq!(result.global.balance, max);
        assert_eq!(result.global.cash_balance, 0);
        assert_eq!(result.global.bank_balance, max);
        assert_eq!(result.branches.cash, 0);
        assert_eq!(result.branches.bank, max);
    }

    fn arb_kind() -> impl Strategy<Value = TransactionKind> {
        prop_oneof![
            Just(TransactionKind::Income),
            Just(TransactionKind::Expense),
            Just(TransactionKind::DebtPurchase),
            Just(TransactionKind::DebtRepayment),
        ]
    }

    fn arb_fund() -> impl Strategy<Value = FundType> {
        prop_oneof![Just(FundType::Cash), Just(FundType::Bank)]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: aggregation is deterministic over an unmutated snapshot.
        #[test]
        fn aggregate_is_idempotent(
            entries in prop::collection::vec((arb_kind(), 0u64..10_000_000, arb_fund(), 0usize..3), 0..40)
        ) {
            let hq = branch("HQ", true);
            let b1 = branch("B1", false);
            let b2 = branch("B2", false);
            let registry = vec![hq.clone(), b1.clone(), b2.clone()];
            let branch_ids = [hq.id, b1.id, b2.id];

            let log: Vec<Transaction> = entries
                .into_iter()
                .map(|(kind, amount, fund, branch_idx)| {
                    tx(kind, amount, fund, branch_ids[branch_idx], None)
                })
                .collect();

            let first = aggregate(&log, &[], &registry, Scope::All);
            let second = aggregate(&log, &[], &registry, Scope::All);
            prop_assert_eq!(first, second);
        }

        /// Property: under `Scope::All`, total income equals the sum of all
        /// `Income` amounts (debt purchases never count).
        #[test]
        fn all_scope_income_is_total(
            entries in prop::collection::vec((arb_kind(), 0u64..10_000_000, arb_fund()), 0..40)
        ) {
            let b1 = branch("B1", false);
            let log: Vec<Transaction> = entries
                .iter()
                .map(|&(kind, amount, fund)| tx(kind, amount, fund, b1.id, None))
                .collect();

            let expected: i128 = entries
                .iter()
                .filter(|(kind, _, _)| *kind == TransactionKind::Income)
                .map(|&(_, amount, _)| i128::from(amount))
                .sum();

            let result = aggregate(&log, &[], std::slice::from_ref(&b1), Scope::All);
            prop_assert_eq!(result.global.total_income, expected);
        }

        /// Property: adding debt purchases changes nothing but the payable
        /// total and the filtered transaction list.
        #[test]
        fn debt_purchases_never_move_funds(
            entries in prop::collection::vec((arb_kind(), 0u64..10_000_000, arb_fund()), 0..30),
            purchases in prop::collection::vec(0u64..10_000_000, 1..10)
        ) {
            let b1 = branch("B1", false);
            let mut log: Vec<Transaction> = entries
                .iter()
                .map(|&(kind, amount, fund)| tx(kind, amount, fund, b1.id, None))
                .collect();

            let base = aggregate(&log, &[], std::slice::from_ref(&b1), Scope::All);

            let purchase_total: i128 = purchases.iter().map(|&a| i128::from(a)).sum();
            for amount in purchases {
                log.push(tx(TransactionKind::DebtPurchase, amount, FundType::Cash, b1.id, None));
            }

            let with_purchases = aggregate(&log, &[], std::slice::from_ref(&b1), Scope::All);

            prop_assert_eq!(with_purchases.global.total_income, base.global.total_income);
            prop_assert_eq!(with_purchases.global.total_expense, base.global.total_expense);
            prop_assert_eq!(with_purchases.global.cash_balance, base.global.cash_balance);
            prop_assert_eq!(with_purchases.global.bank_balance, base.global.bank_balance);
            prop_assert_eq!(with_purchases.head_office, base.head_office);
            prop_assert_eq!(with_purchases.branches, base.branches);
            prop_assert_eq!(
                with_purchases.global.total_payable,
                base.global.total_payable + purchase_total
            );
        }

        /// Property: head-office and field-branch rollups partition the global
        /// fund balances.
        #[test]
        fn rollups_sum_to_global(
            entries in prop::collection::vec((arb_kind(), 0u64..10_000_000, arb_fund(), 0usize..3), 0..40)
        ) {
            let hq = branch("HQ", true);
            let b1 = branch("B1", false);
            let b2 = branch("B2", false);
            let registry = vec![hq.clone(), b1.clone(), b2.clone()];
            let branch_ids = [hq.id, b1.id, b2.id];

            let log: Vec<Transaction> = entries
                .into_iter()
                .map(|(kind, amount, fund, branch_idx)| {
                    tx(kind, amount, fund, branch_ids[branch_idx], None)
                })
                .collect();

            let result = aggregate(&log, &[], &registry, Scope::All);

            prop_assert_eq!(
                result.head_office.cash + result.branches.cash,
                result.global.cash_balance
            );
            prop_assert_eq!(
                result.head_office.bank + result.branches.bank,
                result.global.bank_balance
            );
        }
    }
}
