//! Injected read-only store context
//!
//! The subscription-populated process-wide caches of the original design
//! (current user, reports, profiles, policies, IOU aggregates, last actions,
//! granted betas) become one explicit [`Snapshot`] passed by reference into
//! every pipeline call. Nothing here is mutated during a call.

use ahash::{AHashMap, AHashSet};

use crate::model::{IouReport, PersonalDetail, Policy, Report, ReportAction};

/// SMS-backed logins carry this suffix
pub const SMS_DOMAIN: &str = "@roster.sms";

/// Internal staff accounts live on this mail domain
pub const STAFF_DOMAIN: &str = "@rosterapp.com";

/// Reserved assistant address, invitable only behind [`Beta::AssistantChat`]
pub const ASSISTANT_LOGIN: &str = "assistant@rosterapp.com";

/// Named feature gates for experimental capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Beta {
    DefaultRooms,
    PolicyRooms,
    PolicyExpenseChat,
    AssistantChat,
}

/// Keyed snapshots of every store the pipeline reads
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub current_user_login: String,

    /// Report records keyed by report id
    pub reports: AHashMap<String, Report>,

    /// Profile records keyed by login
    pub personal_details: AHashMap<String, PersonalDetail>,

    /// Workspace records keyed by policy id
    pub policies: AHashMap<String, Policy>,

    /// Debt aggregates keyed by report id
    pub iou_reports: AHashMap<String, IouReport>,

    /// One most-recent action per report id
    pub last_actions: AHashMap<String, ReportAction>,

    /// Granted feature gates
    pub betas: AHashSet<Beta>,

    /// IP-derived country calling code, used to complete bare phone numbers
    pub country_code: u16,
}

impl Snapshot {
    pub fn new(current_user_login: impl Into<String>) -> Self {
        Self {
            current_user_login: current_user_login.into(),
            reports: AHashMap::new(),
            personal_details: AHashMap::new(),
            policies: AHashMap::new(),
            iou_reports: AHashMap::new(),
            last_actions: AHashMap::new(),
            betas: AHashSet::new(),
            country_code: 1,
        }
    }

    pub fn can_use(&self, beta: Beta) -> bool {
        self.betas.contains(&beta)
    }

    /// Resolve a login, synthesizing a placeholder when no profile exists
    pub fn detail_or_placeholder(&self, login: &str) -> PersonalDetail {
        self.personal_details
            .get(login)
            .cloned()
            .unwrap_or_else(|| PersonalDetail::placeholder(login))
    }

    /// Workspace owning the report, when both sides are known
    pub fn policy_for(&self, report: &Report) -> Option<&Policy> {
        report
            .policy_id
            .as_deref()
            .and_then(|id| self.policies.get(id))
    }

    /// Outstanding IOU aggregate referenced by the report
    pub fn iou_for(&self, report: &Report) -> Option<&IouReport> {
        report
            .iou_report_id
            .as_deref()
            .and_then(|id| self.iou_reports.get(id))
    }

    /// Most-recent action of the report
    pub fn last_action(&self, report: &Report) -> Option<&ReportAction> {
        report
            .report_id
            .as_deref()
            .and_then(|id| self.last_actions.get(id))
    }

    /// The report carries a debt the current user owes someone else
    pub fn report_has_iou_debt(&self, report: &Report) -> bool {
        report.has_outstanding_iou
            && self
                .iou_for(report)
                .is_some_and(|iou| iou.owner_login != self.current_user_login)
    }

    /// Internal staff accounts bypass the default-room feature gate
    pub fn has_staff_participant(&self, report: &Report) -> bool {
        report
            .participants
            .iter()
            .any(|login| login.ends_with(STAFF_DOMAIN))
    }
}
