//! Filter/sort pipeline
//!
//! Single-pass orchestration over snapshot data: order reports, apply
//! exclusion rules and feature gates, build candidate options, select and
//! bucket recent reports, filter personal details, synthesize an invite
//! entry, and optionally merge everything into search-rank order.

mod ordering;
mod views;

pub use views::SidebarMode;

use std::time::Instant;

use ahash::{AHashMap, AHashSet};

use crate::context::{Beta, Snapshot, ASSISTANT_LOGIN};
use crate::error::Result;
use crate::icons::{DefaultIconResolver, IconResolver};
use crate::locale::Localizer;
use crate::model::{Policy, Report};
use crate::option::{BuildOptions, OptionBuilder, OptionItem};
use crate::search::{normalize_login, participant_name_set, SearchMatcher};

/// Primary report ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportSortKey {
    /// Most recent message first
    LastMessage,
    /// Most recently visited first
    #[default]
    LastVisited,
    /// Report name, ascending
    Name,
}

/// Named toggles steering one pipeline invocation
///
/// Defaults are the least-inclusive configuration: nothing is included and
/// nothing is prioritized until a view adapter (or caller) opts in. The one
/// exception is alphabetical personal-detail ordering, which is on unless a
/// view asks for natural order.
#[derive(Debug, Clone)]
pub struct OptionsConfig {
    /// Search query; empty means no matching is applied
    pub search_value: String,

    /// Emit the recent-report section
    pub include_recent_reports: bool,
    /// Emit the personal-details section
    pub include_personal_details: bool,
    /// Keep reports that have no single-login identity (group chats, rooms)
    pub include_multiple_participant_reports: bool,
    /// Keep reports that have no messages yet
    pub show_empty_reports: bool,

    /// Cap on plain recent entries; 0 means unlimited
    pub max_recent_reports: usize,

    /// Drop chat rooms before candidate building
    pub exclude_chat_rooms: bool,
    /// Logins never offered
    pub exclude_logins: Vec<String>,
    /// Logins already chosen in a multi-select flow
    pub selected_logins: Vec<String>,

    /// Report currently open; always survives the per-report filter
    pub active_report_id: Option<String>,

    pub sort_key: ReportSortKey,
    /// Re-sort personal details alphabetically by display text
    pub sort_personal_details_alphabetically: bool,

    pub prioritize_pinned_reports: bool,
    pub prioritize_iou_debts: bool,
    pub prioritize_draft_reports: bool,
    /// During an active search, move chat rooms ahead of everything else
    pub prioritize_default_rooms_in_search: bool,

    /// Prefer last-message previews over subtitles/logins
    pub show_chat_preview_line: bool,
    /// Suppress previews on room-like options in favor of the subtitle
    pub force_policy_name_preview: bool,

    /// Drop read reports from the recent section
    pub hide_read_reports: bool,
    /// Merge personal details into recents and sort by match rank
    pub sort_by_search_rank: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            search_value: String::new(),
            include_recent_reports: false,
            include_personal_details: false,
            include_multiple_participant_reports: false,
            show_empty_reports: false,
            max_recent_reports: 0,
            exclude_chat_rooms: false,
            exclude_logins: Vec::new(),
            selected_logins: Vec::new(),
            active_report_id: None,
            sort_key: ReportSortKey::default(),
            sort_personal_details_alphabetically: true,
            prioritize_pinned_reports: false,
            prioritize_iou_debts: false,
            prioritize_draft_reports: false,
            prioritize_default_rooms_in_search: false,
            show_chat_preview_line: false,
            force_policy_name_preview: false,
            hide_read_reports: false,
            sort_by_search_rank: false,
        }
    }
}

/// Categorized pipeline output
#[derive(Debug, Default, serde::Serialize)]
pub struct OptionsResult {
    pub recent_reports: Vec<OptionItem>,
    pub personal_details: Vec<OptionItem>,
    pub user_to_invite: Option<OptionItem>,
}

impl OptionsResult {
    /// Serialize for the rendering layer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Pipeline orchestrator holding the per-process collaborators
pub struct OptionPipeline {
    localizer: Localizer,
    icons: Box<dyn IconResolver>,
    matcher: SearchMatcher,
}

impl OptionPipeline {
    pub fn new(localizer: Localizer, icons: Box<dyn IconResolver>) -> Result<Self> {
        Ok(Self {
            localizer,
            icons,
            matcher: SearchMatcher::new()?,
        })
    }

    /// Pipeline with the built-in locale table and icon resolver
    pub fn with_defaults() -> Result<Self> {
        Self::new(Localizer::default(), Box::new(DefaultIconResolver))
    }

    /// Derive the categorized option lists for one configuration
    pub fn get_options(&self, snapshot: &Snapshot, config: &OptionsConfig) -> OptionsResult {
        let started = Instant::now();
        let query = config.search_value.trim();
        let query_lower = query.to_lowercase();

        // Ordering: primary sort, then archived rooms stably to the end
        let mut ordered: Vec<&Report> = snapshot.reports.values().collect();
        ordering::sort_reports(&mut ordered, config.sort_key);
        let ordered = ordering::archived_rooms_last(ordered);

        let builder = OptionBuilder::new(snapshot, &self.localizer, self.icons.as_ref());
        let build_opts = BuildOptions {
            show_chat_preview_line: config.show_chat_preview_line,
            force_policy_name_preview: config.force_policy_name_preview,
        };

        // Per-report filter; survivors become candidates, and surviving
        // single-login direct reports are indexed for cross-referencing
        // with standalone personal details. The first report in sorted
        // order wins a contested login.
        let mut report_for_login: AHashMap<String, &Report> = AHashMap::new();
        let mut recent_candidates: Vec<OptionItem> = Vec::new();

        for report in ordered {
            if report.report_id.is_none() {
                continue;
            }
            if report.participants.is_empty() && !report.is_room_like() {
                continue;
            }

            let is_active = config.active_report_id == report.report_id;
            let has_iou_debt = snapshot.report_has_iou_debt(report);
            let hidden_when_empty = !config.show_empty_reports
                && !report.has_messages()
                && !(report.is_freshly_created
                    && (report.is_default_room() || report.is_policy_expense_chat()));
            let hidden_when_read = config.hide_read_reports && !report.is_unread;
            if !is_active
                && !report.is_pinned
                && !report.has_draft
                && !has_iou_debt
                && (hidden_when_empty || hidden_when_read)
            {
                continue;
            }

            if report.is_chat_room() && config.exclude_chat_rooms {
                continue;
            }

            if report.is_default_room() && !snapshot.can_use(Beta::DefaultRooms) {
                let free_workspace = snapshot.policy_for(report).is_some_and(Policy::is_free_plan);
                if !free_workspace && !snapshot.has_staff_participant(report) {
                    continue;
                }
            }
            if report.is_user_created_policy_room() && !snapshot.can_use(Beta::PolicyRooms) {
                continue;
            }
            if report.is_policy_expense_chat() && !snapshot.can_use(Beta::PolicyExpenseChat) {
                continue;
            }

            if report.participants.len() == 1 && !report.is_room_like() {
                let login = &report.participants[0];
                report_for_login.entry(login.clone()).or_insert(report);
            }
            recent_candidates.push(builder.build(&report.participants, Some(report), &build_opts));
        }
        tracing::trace!(candidates = recent_candidates.len(), "built report candidates");

        // Every known personal detail becomes a candidate, cross-referencing
        // any surviving single-login report
        let mut detail_candidates: Vec<OptionItem> = snapshot
            .personal_details
            .values()
            .map(|detail| {
                let report = report_for_login.get(detail.login.as_str()).copied();
                builder.build(&[detail.login.clone()], report, &build_opts)
            })
            .collect();
        if config.sort_personal_details_alphabetically {
            ordering::sort_options_by_text(&mut detail_candidates);
        } else {
            detail_candidates.sort_by(|a, b| a.login.cmp(&b.login));
        }

        // Exclusion set: selected logins, the current user, caller excludes
        let mut excluded: AHashSet<String> = AHashSet::new();
        excluded.insert(snapshot.current_user_login.to_lowercase());
        for login in config.selected_logins.iter().chain(&config.exclude_logins) {
            excluded.insert(login.to_lowercase());
        }

        // Recent-report selection and prioritization bucketing
        let mut plain: Vec<OptionItem> = Vec::new();
        let mut pinned: Vec<OptionItem> = Vec::new();
        let mut iou_debts: Vec<OptionItem> = Vec::new();
        let mut drafts: Vec<OptionItem> = Vec::new();

        if config.include_recent_reports {
            for option in recent_candidates {
                // Cap counts plain entries; prioritized buckets ride along
                if config.max_recent_reports > 0 && plain.len() == config.max_recent_reports {
                    break;
                }
                if !config.include_multiple_participant_reports && option.login.is_none() {
                    continue;
                }
                if let Some(login) = &option.login {
                    if excluded.contains(&login.to_lowercase()) {
                        continue;
                    }
                }
                if !query.is_empty() {
                    let names = participant_name_set(&option.participants);
                    if !self.matcher.is_match(
                        query,
                        &option.search_text,
                        &names,
                        option.is_room_like(),
                    ) {
                        continue;
                    }
                }

                let accepted_login = option.login.clone();
                if config.prioritize_pinned_reports
                    && option.is_pinned
                    && !(option.is_default_room && option.is_archived_room)
                {
                    pinned.push(option);
                } else if config.prioritize_iou_debts && option.has_iou_debt() {
                    iou_debts.push(option);
                } else if config.prioritize_draft_reports && option.has_draft {
                    drafts.push(option);
                } else {
                    plain.push(option);
                }
                // Personal details must not duplicate an accepted report
                if let Some(login) = accepted_login {
                    excluded.insert(login.to_lowercase());
                }
            }
        }

        // Recombination: pinned (alpha), IOU debts (amount desc), drafts
        // (alpha), then plain recents
        ordering::sort_options_by_text(&mut pinned);
        iou_debts.sort_by(|a, b| b.iou_report_amount.cmp(&a.iou_report_amount));
        ordering::sort_options_by_text(&mut drafts);

        let mut recent_reports =
            Vec::with_capacity(pinned.len() + iou_debts.len() + drafts.len() + plain.len());
        recent_reports.extend(pinned);
        recent_reports.extend(iou_debts);
        recent_reports.extend(drafts);
        recent_reports.extend(plain);

        if config.prioritize_default_rooms_in_search && !query.is_empty() {
            recent_reports = ordering::rooms_first(recent_reports);
        }

        // Personal-details selection
        let mut personal_details: Vec<OptionItem> = Vec::new();
        if config.include_personal_details {
            for option in detail_candidates {
                let Some(login) = option.login.clone() else {
                    continue;
                };
                if excluded.contains(&login.to_lowercase()) {
                    continue;
                }
                if !query.is_empty() {
                    let names = participant_name_set(&option.participants);
                    if !self
                        .matcher
                        .is_match(query, &option.search_text, &names, false)
                    {
                        continue;
                    }
                }
                personal_details.push(option);
            }
        }

        // Invite synthesis
        let user_to_invite = self.build_user_to_invite(
            snapshot,
            config,
            query,
            &query_lower,
            &recent_reports,
            &personal_details,
            &excluded,
            &builder,
            &build_opts,
        );

        // Search-mode merge: fold personal details into recents and order
        // by match rank
        if config.sort_by_search_rank && !query.is_empty() {
            recent_reports.append(&mut personal_details);
            recent_reports.sort_by_key(|option| search_rank(option, &query_lower));
        }

        tracing::debug!(
            recent = recent_reports.len(),
            details = personal_details.len(),
            invite = user_to_invite.is_some(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "derived options"
        );

        OptionsResult {
            recent_reports,
            personal_details,
            user_to_invite,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn build_user_to_invite(
        &self,
        snapshot: &Snapshot,
        config: &OptionsConfig,
        query: &str,
        query_lower: &str,
        recent_reports: &[OptionItem],
        personal_details: &[OptionItem],
        excluded: &AHashSet<String>,
        builder: &OptionBuilder<'_>,
        build_opts: &BuildOptions,
    ) -> Option<OptionItem> {
        if query.is_empty() {
            return None;
        }

        let no_results = recent_reports.is_empty() && personal_details.is_empty();
        let exact_match = recent_reports
            .iter()
            .chain(personal_details.iter())
            .any(|option| {
                option
                    .login
                    .as_deref()
                    .is_some_and(|login| login.to_lowercase() == query_lower)
            });
        if !no_results && exact_match {
            return None;
        }

        if query_lower == snapshot.current_user_login.to_lowercase() {
            return None;
        }
        if config
            .selected_logins
            .iter()
            .any(|login| login.to_lowercase() == query_lower)
        {
            return None;
        }
        if !self.matcher.is_valid_email(query) && !self.matcher.is_valid_phone(query) {
            return None;
        }

        let login = normalize_login(query, snapshot.country_code, &self.matcher);
        if excluded.contains(&login.to_lowercase()) {
            return None;
        }
        if query_lower == ASSISTANT_LOGIN && !snapshot.can_use(Beta::AssistantChat) {
            return None;
        }

        Some(builder.build(&[login], None, build_opts))
    }
}

/// Ascending search-mode rank: exact single-login matches first, rooms and
/// archived rooms last
fn search_rank(option: &OptionItem, query_lower: &str) -> u8 {
    if option.is_chat_room || option.is_archived_room {
        return 3;
    }
    match &option.login {
        None => 2,
        Some(login) if login.to_lowercase() != query_lower => 1,
        Some(_) => 0,
    }
}
