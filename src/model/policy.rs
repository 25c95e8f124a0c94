//! Workspace/policy snapshots, used for room naming and feature gating

use serde::{Deserialize, Serialize};

/// Billing plan of a workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyPlan {
    Free,
    Team,
    Corporate,
}

/// Snapshot of a workspace/policy record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub name: String,
    pub plan: PolicyPlan,
}

impl Policy {
    pub fn is_free_plan(&self) -> bool {
        self.plan == PolicyPlan::Free
    }
}
