//! Option construction
//!
//! Projects a report (or a standalone personal detail) plus its resolved
//! participants into a single renderable record. Options are built fresh on
//! every pipeline invocation and never mutated afterwards.

mod search_text;

pub use search_text::build_search_text;

use serde::Serialize;

use crate::context::Snapshot;
use crate::icons::{Icon, IconResolver, FALLBACK_AVATAR};
use crate::locale::Localizer;
use crate::model::{ArchiveReason, PersonalDetail, Report};
use crate::search::remove_sms_domain;

/// Renderable projection combining a report and one-or-more personal details
#[derive(Debug, Clone, Serialize)]
pub struct OptionItem {
    pub text: String,
    pub alternate_text: String,
    pub icons: Vec<Icon>,

    /// Login of the counterpart; only set for single-participant options
    pub login: Option<String>,
    pub phone_number: Option<String>,
    pub payment_address: Option<String>,

    pub report_id: Option<String>,

    /// Stable identity for list rendering: report id, else login
    pub key_for_list: String,

    pub search_text: String,

    /// The report or its actions carry error payloads
    pub brick_road_indicator: bool,

    pub is_pinned: bool,
    pub is_unread: bool,
    pub has_draft: bool,

    pub has_outstanding_iou: bool,
    pub iou_report_id: Option<String>,
    /// The current user is the one owed the outstanding amount
    pub is_iou_report_owner: bool,
    /// Outstanding amount in minor currency units
    pub iou_report_amount: i64,

    pub is_chat_room: bool,
    pub is_default_room: bool,
    pub is_policy_expense_chat: bool,
    pub is_archived_room: bool,

    /// Resolved participant profiles backing this option
    pub participants: Vec<PersonalDetail>,
}

impl OptionItem {
    pub fn is_room_like(&self) -> bool {
        self.is_chat_room || self.is_policy_expense_chat
    }

    /// The current user owes on this option's outstanding IOU
    pub fn has_iou_debt(&self) -> bool {
        self.has_outstanding_iou && !self.is_iou_report_owner
    }
}

/// Presentation toggles honored while building a single option
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Prefer the last-message preview over the room subtitle / login
    pub show_chat_preview_line: bool,
    /// Suppress the preview for room-like options, showing the subtitle
    pub force_policy_name_preview: bool,
}

/// Builds [`OptionItem`]s from login lists and report snapshots
pub struct OptionBuilder<'a> {
    snapshot: &'a Snapshot,
    localizer: &'a Localizer,
    icons: &'a dyn IconResolver,
}

impl<'a> OptionBuilder<'a> {
    pub fn new(
        snapshot: &'a Snapshot,
        localizer: &'a Localizer,
        icons: &'a dyn IconResolver,
    ) -> Self {
        Self {
            snapshot,
            localizer,
            icons,
        }
    }

    /// Produce one option for the given logins and optional report
    pub fn build(&self, logins: &[String], report: Option<&Report>, opts: &BuildOptions) -> OptionItem {
        let details: Vec<PersonalDetail> = logins
            .iter()
            .map(|login| self.snapshot.detail_or_placeholder(login))
            .collect();
        let primary = details.first();

        let is_chat_room = report.is_some_and(Report::is_chat_room);
        let is_default_room = report.is_some_and(Report::is_default_room);
        let is_policy_expense_chat = report.is_some_and(Report::is_policy_expense_chat);
        let is_archived_room = report.is_some_and(Report::is_archived_room);
        let is_room_like = is_chat_room || is_policy_expense_chat;
        let has_multiple_participants = details.len() > 1 || is_room_like;

        let text = match report {
            Some(r) if r.is_room_like() => r.report_name.clone(),
            _ => {
                let names: Vec<&str> = details
                    .iter()
                    .map(PersonalDetail::display_name_or_login)
                    .collect();
                names.join(", ")
            }
        };

        let subtitle = report
            .filter(|r| r.is_room_like())
            .map(|r| self.room_subtitle(r))
            .unwrap_or_default();

        let last_message_text = report
            .map(|r| {
                if r.is_archived && r.is_policy_expense_chat() {
                    self.archive_reason_text(r)
                } else {
                    r.last_message_text.clone()
                }
            })
            .unwrap_or_default();

        let preview = match report.and_then(|r| r.last_actor_name.as_deref()) {
            Some(actor) if has_multiple_participants && !last_message_text.is_empty() => {
                format!("{}: {}", actor, last_message_text)
            }
            _ => last_message_text,
        };

        let alternate_text = if is_room_like {
            if opts.show_chat_preview_line && !opts.force_policy_name_preview && !preview.is_empty()
            {
                preview
            } else {
                subtitle.clone()
            }
        } else if opts.show_chat_preview_line && !preview.is_empty() {
            preview
        } else {
            primary
                .map(|detail| remove_sms_domain(&detail.login).to_string())
                .unwrap_or_default()
        };

        let mut is_iou_report_owner = false;
        let mut iou_report_amount = 0;
        if let Some(r) = report {
            if r.has_outstanding_iou {
                if let Some(iou) = self.snapshot.iou_for(r) {
                    is_iou_report_owner = iou.owner_login == self.snapshot.current_user_login;
                    iou_report_amount = iou.total;
                }
            }
        }

        let (login, phone_number, payment_address) = if has_multiple_participants {
            (None, None, None)
        } else {
            primary
                .map(|detail| {
                    (
                        Some(detail.login.clone()),
                        detail.phone_number.clone(),
                        detail.payment_address.clone(),
                    )
                })
                .unwrap_or((None, None, None))
        };

        let search_text = build_search_text(&details, &text, &subtitle, is_room_like);
        let icons = self
            .icons
            .icons(report, &details, &self.snapshot.policies, FALLBACK_AVATAR);

        let report_id = report.and_then(|r| r.report_id.clone());
        let key_for_list = report_id
            .clone()
            .or_else(|| login.clone())
            .unwrap_or_default();

        OptionItem {
            text,
            alternate_text,
            icons,
            login,
            phone_number,
            payment_address,
            report_id,
            key_for_list,
            search_text,
            brick_road_indicator: report.is_some_and(|r| self.report_has_errors(r)),
            is_pinned: report.is_some_and(|r| r.is_pinned),
            is_unread: report.is_some_and(|r| r.is_unread),
            has_draft: report.is_some_and(|r| r.has_draft),
            has_outstanding_iou: report.is_some_and(|r| r.has_outstanding_iou),
            iou_report_id: report.and_then(|r| r.iou_report_id.clone()),
            is_iou_report_owner,
            iou_report_amount,
            is_chat_room,
            is_default_room,
            is_policy_expense_chat,
            is_archived_room,
            participants: details,
        }
    }

    /// Room subtitle: workspace name when known, report name otherwise,
    /// with an archived marker appended for archived rooms
    fn room_subtitle(&self, report: &Report) -> String {
        let name = self
            .snapshot
            .policy_for(report)
            .map(|policy| policy.name.clone())
            .unwrap_or_else(|| report.report_name.clone());
        if report.is_archived_room() {
            format!(
                "{}{}",
                name,
                self.localizer.translate("report.archived_marker", &[])
            )
        } else {
            name
        }
    }

    /// Localized replacement for the last-message preview of an archived
    /// workspace chat, derived from the closing action
    fn archive_reason_text(&self, report: &Report) -> String {
        match self
            .snapshot
            .last_action(report)
            .and_then(|action| action.archive_reason.as_ref())
        {
            Some(ArchiveReason::PolicyDeleted { policy_name }) => self.localizer.translate(
                "report.archive_reasons.policy_deleted",
                &[("policyName", policy_name)],
            ),
            Some(ArchiveReason::RemovedFromPolicy {
                display_name,
                policy_name,
            }) => self.localizer.translate(
                "report.archive_reasons.removed_from_policy",
                &[("displayName", display_name), ("policyName", policy_name)],
            ),
            Some(ArchiveReason::AccountMerged {
                display_name,
                target_login,
            }) => self.localizer.translate(
                "report.archive_reasons.account_merged",
                &[("displayName", display_name), ("targetLogin", target_login)],
            ),
            None => self
                .localizer
                .translate("report.archive_reasons.default", &[]),
        }
    }

    /// Report-level errors, per-field errors, or last-action errors
    fn report_has_errors(&self, report: &Report) -> bool {
        !report.errors.is_empty()
            || report.error_fields.values().any(|fields| !fields.is_empty())
            || self
                .snapshot
                .last_action(report)
                .is_some_and(|action| !action.errors.is_empty())
    }
}
