//! Registry records the ledger reads but never mutates.
//!
//! Branches and suppliers are created and deleted by the persistence layer;
//! the ledger core only ever sees read-only snapshots of them.

use serde::{Deserialize, Serialize};

use branchledger_core::{BranchId, Entity, SupplierId};

/// A branch of the business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: BranchId,
    pub name: String,
    pub code: String,
    /// Exactly one branch should carry this flag; the scope resolver tolerates
    /// zero or several (see `scope::bucket_of`).
    pub is_head_office: bool,
}

impl Entity for Branch {
    type Id = BranchId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A supplier the business buys from on credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    /// Debt balance at system bootstrap. Fixed at creation, never mutated;
    /// everything after it is derived from debt transactions.
    pub initial_debt: u64,
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
