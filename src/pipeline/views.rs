//! View-specific adapters: fixed parameterizations of the pipeline

use crate::context::Snapshot;
use crate::pipeline::{OptionPipeline, OptionsConfig, OptionsResult, ReportSortKey};

/// Sidebar density modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarMode {
    /// Most-recent-first with pinned/IOU/draft prioritization
    #[default]
    Default,
    /// Compact mode: unread reports only, sorted by name
    Focus,
}

impl OptionPipeline {
    /// Global search: unlimited results merged into search-rank order,
    /// previews shown, room subtitles forced, empty reports included
    pub fn search_options(&self, snapshot: &Snapshot, query: &str) -> OptionsResult {
        self.get_options(
            snapshot,
            &OptionsConfig {
                search_value: query.to_string(),
                include_recent_reports: true,
                include_personal_details: true,
                include_multiple_participant_reports: true,
                show_empty_reports: true,
                sort_by_search_rank: true,
                show_chat_preview_line: true,
                force_policy_name_preview: true,
                prioritize_default_rooms_in_search: true,
                ..Default::default()
            },
        )
    }

    /// New-chat picker: rooms excluded, a handful of recents, personal
    /// details included
    pub fn new_chat_options(
        &self,
        snapshot: &Snapshot,
        query: &str,
        selected_logins: &[String],
    ) -> OptionsResult {
        self.get_options(
            snapshot,
            &OptionsConfig {
                search_value: query.to_string(),
                include_recent_reports: true,
                include_personal_details: true,
                max_recent_reports: 5,
                exclude_chat_rooms: true,
                selected_logins: selected_logins.to_vec(),
                ..Default::default()
            },
        )
    }

    /// Workspace member invite: personal details only, natural order
    pub fn member_invite_options(
        &self,
        snapshot: &Snapshot,
        query: &str,
        exclude_logins: &[String],
    ) -> OptionsResult {
        self.get_options(
            snapshot,
            &OptionsConfig {
                search_value: query.to_string(),
                include_personal_details: true,
                exclude_logins: exclude_logins.to_vec(),
                sort_personal_details_alphabetically: false,
                ..Default::default()
            },
        )
    }

    /// Chat sidebar, in either density mode
    pub fn sidebar_options(
        &self,
        snapshot: &Snapshot,
        active_report_id: Option<&str>,
        mode: SidebarMode,
    ) -> OptionsResult {
        let mut config = OptionsConfig {
            include_recent_reports: true,
            include_multiple_participant_reports: true,
            show_chat_preview_line: true,
            sort_key: ReportSortKey::LastMessage,
            active_report_id: active_report_id.map(str::to_string),
            ..Default::default()
        };
        match mode {
            SidebarMode::Default => {
                config.prioritize_pinned_reports = true;
                config.prioritize_iou_debts = true;
                config.prioritize_draft_reports = true;
            }
            SidebarMode::Focus => {
                config.hide_read_reports = true;
                config.sort_key = ReportSortKey::Name;
            }
        }
        self.get_options(snapshot, &config)
    }
}
