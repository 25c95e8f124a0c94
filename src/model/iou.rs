//! Outstanding-debt aggregates referenced by reports

use serde::{Deserialize, Serialize};

/// Aggregate debt record keyed by report identifier
///
/// The owner is the participant the money is owed to; everyone else on the
/// report carries the debt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IouReport {
    pub report_id: String,
    pub owner_login: String,
    /// Total owed, in minor currency units
    pub total: i64,
    pub currency: String,
}
