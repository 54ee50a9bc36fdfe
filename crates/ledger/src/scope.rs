//! Scope resolution: which transactions count, and which rollup bucket a
//! branch belongs to.

use serde::{Deserialize, Serialize};

use branchledger_core::BranchId;

use crate::registry::Branch;
use crate::transaction::Transaction;

/// The filter under which balances are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Every branch.
    All,
    /// A single branch.
    Branch(BranchId),
}

impl Scope {
    /// Whether a transaction falls under this scope.
    pub fn contains(&self, tx: &Transaction) -> bool {
        match self {
            Scope::All => true,
            Scope::Branch(id) => tx.branch_id == *id,
        }
    }
}

/// Rollup bucket used to present sub-totals of the global summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchBucket {
    HeadOffice,
    FieldBranch,
}

/// Classify a branch by its `is_head_office` flag.
///
/// A branch id missing from the registry classifies as `FieldBranch` — not a
/// head office by default. This is a permissiveness policy, not a validation
/// boundary: with zero flagged branches everything rolls up as field-branch,
/// with several they all roll up as head office, and the resolver never fails.
pub fn bucket_of(branch_id: BranchId, branches: &[Branch]) -> BranchBucket {
    let is_head_office = branches
        .iter()
        .find(|b| b.id == branch_id)
        .is_some_and(|b| b.is_head_office);

    if is_head_office {
        BranchBucket::HeadOffice
    } else {
        BranchBucket::FieldBranch
    }
}
