//! Report and option ordering helpers
//!
//! Snapshots arrive as keyed maps, so every sort breaks ties on a stored
//! identifier to keep the output order deterministic.

use crate::model::Report;
use crate::option::OptionItem;
use crate::pipeline::ReportSortKey;

/// Primary report sort: timestamps descending, names ascending
pub fn sort_reports(reports: &mut [&Report], key: ReportSortKey) {
    match key {
        ReportSortKey::LastMessage => reports.sort_by(|a, b| {
            b.last_message_at
                .cmp(&a.last_message_at)
                .then_with(|| a.report_id.cmp(&b.report_id))
        }),
        ReportSortKey::LastVisited => reports.sort_by(|a, b| {
            b.last_visited_at
                .cmp(&a.last_visited_at)
                .then_with(|| a.report_id.cmp(&b.report_id))
        }),
        ReportSortKey::Name => reports.sort_by(|a, b| {
            a.report_name
                .to_lowercase()
                .cmp(&b.report_name.to_lowercase())
                .then_with(|| a.report_id.cmp(&b.report_id))
        }),
    }
}

/// Stably move archived rooms behind everything else, whatever the primary
/// sort was
pub fn archived_rooms_last(reports: Vec<&Report>) -> Vec<&Report> {
    let (active, archived): (Vec<_>, Vec<_>) = reports
        .into_iter()
        .partition(|report| !report.is_archived_room());
    active.into_iter().chain(archived).collect()
}

/// Alphabetical option sort by display text, then login
pub fn sort_options_by_text(options: &mut [OptionItem]) {
    options.sort_by(|a, b| {
        a.text
            .to_lowercase()
            .cmp(&b.text.to_lowercase())
            .then_with(|| a.login.cmp(&b.login))
    });
}

/// Stable rooms-first partition applied when default rooms are prioritized
/// during an active search
pub fn rooms_first(options: Vec<OptionItem>) -> Vec<OptionItem> {
    let (rooms, rest): (Vec<_>, Vec<_>) = options
        .into_iter()
        .partition(|option| option.is_chat_room);
    rooms.into_iter().chain(rest).collect()
}
