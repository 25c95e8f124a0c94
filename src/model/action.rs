//! Report actions, consumed for archive-reason lookup and error aggregation
//!
//! The last-action store keeps one most-recent action per report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Why a workspace room was archived; carried by the closing action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ArchiveReason {
    PolicyDeleted {
        policy_name: String,
    },
    RemovedFromPolicy {
        display_name: String,
        policy_name: String,
    },
    AccountMerged {
        display_name: String,
        target_login: String,
    },
}

/// Most-recent action of a report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportAction {
    pub report_id: String,

    #[serde(default)]
    pub actor_login: String,

    pub created_at: Option<DateTime<Utc>>,

    /// Errors attached to this action, keyed by origin
    #[serde(default)]
    pub errors: BTreeMap<String, String>,

    /// Present on the action that closed an archived workspace room
    pub archive_reason: Option<ArchiveReason>,
}
