// Integration tests for view adapters and invite synthesis
use chrono::{TimeZone, Utc};
use roster::context::{Beta, Snapshot, ASSISTANT_LOGIN};
use roster::model::{PersonalDetail, Report, RoomKind};
use roster::pipeline::{OptionPipeline, SidebarMode};

fn detail(login: &str, display_name: &str) -> PersonalDetail {
    PersonalDetail {
        login: login.to_string(),
        display_name: display_name.to_string(),
        ..Default::default()
    }
}

fn direct_report(id: &str, login: &str, ts: i64) -> Report {
    Report {
        report_id: Some(id.to_string()),
        participants: vec![login.to_string()],
        last_message_text: "hello".to_string(),
        last_message_at: Some(Utc.timestamp_opt(ts, 0).unwrap()),
        last_visited_at: Some(Utc.timestamp_opt(ts, 0).unwrap()),
        ..Default::default()
    }
}

fn insert_report(snapshot: &mut Snapshot, report: Report) {
    let id = report.report_id.clone().unwrap();
    snapshot.reports.insert(id, report);
}

fn insert_detail(snapshot: &mut Snapshot, d: PersonalDetail) {
    snapshot.personal_details.insert(d.login.clone(), d);
}

fn pipeline() -> OptionPipeline {
    OptionPipeline::with_defaults().unwrap()
}

#[test]
fn test_search_merges_and_ranks_results() {
    let mut snapshot = Snapshot::new("me@x.com");
    snapshot.betas.insert(Beta::PolicyRooms);

    // Exact login match, reachable only through the personal-details store
    insert_detail(&mut snapshot, detail("a@x.com", "Alice"));

    // Single-login report whose dotless login contains the query
    insert_report(&mut snapshot, direct_report("1", "tina@x.com", 400));
    insert_detail(&mut snapshot, detail("tina@x.com", "Tina"));

    // Group report matching through one participant's login
    let group = Report {
        report_id: Some("2".to_string()),
        participants: vec!["tina@x.com".to_string(), "b@x.com".to_string()],
        last_message_text: "hi all".to_string(),
        last_message_at: Some(Utc.timestamp_opt(300, 0).unwrap()),
        last_visited_at: Some(Utc.timestamp_opt(300, 0).unwrap()),
        ..Default::default()
    };
    insert_report(&mut snapshot, group);

    // Room whose name contains the dotless query
    let room = Report {
        report_id: Some("3".to_string()),
        report_name: "qa@xcom status".to_string(),
        room_kind: Some(RoomKind::UserCreatedRoom),
        last_message_text: "room message".to_string(),
        last_message_at: Some(Utc.timestamp_opt(200, 0).unwrap()),
        last_visited_at: Some(Utc.timestamp_opt(200, 0).unwrap()),
        ..Default::default()
    };
    insert_report(&mut snapshot, room);

    let result = pipeline().search_options(&snapshot, "a@x.com");

    // Personal details were merged into the recent list
    assert!(result.personal_details.is_empty());
    let keys: Vec<&str> = result
        .recent_reports
        .iter()
        .map(|o| o.key_for_list.as_str())
        .collect();
    assert_eq!(keys, ["a@x.com", "1", "2", "3"]);

    // An exact match exists, so nobody is synthesized for invite
    assert!(result.user_to_invite.is_none());
}

#[test]
fn test_search_includes_empty_reports() {
    let mut snapshot = Snapshot::new("me@x.com");
    let mut quiet = direct_report("1", "quiet@x.com", 100);
    quiet.last_message_text.clear();
    quiet.last_message_at = None;
    insert_report(&mut snapshot, quiet);
    insert_detail(&mut snapshot, detail("quiet@x.com", "Quinn"));

    let result = pipeline().search_options(&snapshot, "quinn");
    assert_eq!(result.recent_reports.len(), 1);
    assert_eq!(result.recent_reports[0].text, "Quinn");
}

#[test]
fn test_invite_synthesized_for_unknown_email() {
    let mut snapshot = Snapshot::new("me@x.com");
    insert_detail(&mut snapshot, detail("a@x.com", "Alice"));

    let result = pipeline().search_options(&snapshot, "new.person@example.com");
    let invite = result.user_to_invite.expect("invite expected");
    assert_eq!(invite.login.as_deref(), Some("new.person@example.com"));
    assert_eq!(invite.text, "new.person@example.com");
    assert!(invite.report_id.is_none());
}

#[test]
fn test_invite_rejects_invalid_and_domain_identifiers() {
    let snapshot = Snapshot::new("me@x.com");
    let p = pipeline();

    assert!(p.search_options(&snapshot, "not an email").user_to_invite.is_none());
    assert!(p.search_options(&snapshot, "@corp.com").user_to_invite.is_none());
    assert!(p.search_options(&snapshot, "me@x.com").user_to_invite.is_none());
}

#[test]
fn test_invite_phone_numbers_get_country_code_and_sms_domain() {
    let mut snapshot = Snapshot::new("me@x.com");
    snapshot.country_code = 44;

    let result = pipeline().search_options(&snapshot, "7700 900123");
    let invite = result.user_to_invite.expect("invite expected");
    assert_eq!(invite.login.as_deref(), Some("+447700900123@roster.sms"));

    // Numbers that already carry a prefix keep it
    let result = pipeline().search_options(&snapshot, "+14155550123");
    let invite = result.user_to_invite.expect("invite expected");
    assert_eq!(invite.login.as_deref(), Some("+14155550123@roster.sms"));
}

#[test]
fn test_invite_does_not_duplicate_excluded_sms_login() {
    let mut snapshot = Snapshot::new("me@x.com");
    // Already chatting with this number: the report excludes its login
    insert_report(
        &mut snapshot,
        direct_report("1", "+14155550123@roster.sms", 100),
    );

    let result = pipeline().search_options(&snapshot, "+1 415 555 0123");
    assert!(result.user_to_invite.is_none());
}

#[test]
fn test_assistant_login_requires_beta() {
    let mut snapshot = Snapshot::new("me@x.com");
    let p = pipeline();

    assert!(p.search_options(&snapshot, ASSISTANT_LOGIN).user_to_invite.is_none());

    snapshot.betas.insert(Beta::AssistantChat);
    let result = p.search_options(&snapshot, ASSISTANT_LOGIN);
    assert_eq!(
        result.user_to_invite.expect("invite expected").login.as_deref(),
        Some(ASSISTANT_LOGIN)
    );
}

#[test]
fn test_new_chat_options_cap_and_room_exclusion() {
    let mut snapshot = Snapshot::new("me@x.com");
    snapshot.betas.insert(Beta::PolicyRooms);
    for i in 0..7 {
        let login = format!("user{}@x.com", i);
        insert_report(&mut snapshot, direct_report(&format!("{}", i), &login, 100 + i));
        insert_detail(&mut snapshot, detail(&login, &format!("User {}", i)));
    }
    let room = Report {
        report_id: Some("room".to_string()),
        report_name: "#general".to_string(),
        room_kind: Some(RoomKind::UserCreatedRoom),
        last_message_text: "room message".to_string(),
        last_message_at: Some(Utc.timestamp_opt(999, 0).unwrap()),
        last_visited_at: Some(Utc.timestamp_opt(999, 0).unwrap()),
        ..Default::default()
    };
    insert_report(&mut snapshot, room);

    let result = pipeline().new_chat_options(&snapshot, "", &[]);
    assert_eq!(result.recent_reports.len(), 5);
    assert!(result.recent_reports.iter().all(|o| !o.is_chat_room));
    // Accepted recents never reappear as personal details
    assert_eq!(result.personal_details.len(), 2);
}

#[test]
fn test_new_chat_selected_logins_are_excluded() {
    let mut snapshot = Snapshot::new("me@x.com");
    insert_detail(&mut snapshot, detail("a@x.com", "Alice"));
    insert_detail(&mut snapshot, detail("b@x.com", "Bob"));

    let selected = vec!["a@x.com".to_string()];
    let result = pipeline().new_chat_options(&snapshot, "", &selected);
    assert_eq!(result.personal_details.len(), 1);
    assert_eq!(result.personal_details[0].text, "Bob");
}

#[test]
fn test_member_invite_options_exclude_reports_entirely() {
    let mut snapshot = Snapshot::new("me@x.com");
    insert_report(&mut snapshot, direct_report("1", "a@x.com", 100));
    insert_detail(&mut snapshot, detail("a@x.com", "Alice"));
    insert_detail(&mut snapshot, detail("b@x.com", "Bob"));

    let excluded = vec!["b@x.com".to_string()];
    let result = pipeline().member_invite_options(&snapshot, "", &excluded);

    assert!(result.recent_reports.is_empty());
    assert_eq!(result.personal_details.len(), 1);
    assert_eq!(result.personal_details[0].text, "Alice");
}

#[test]
fn test_sidebar_default_mode_prioritizes_pinned_and_drafts() {
    let mut snapshot = Snapshot::new("me@x.com");
    let mut pinned = direct_report("1", "a@x.com", 100);
    pinned.is_pinned = true;
    let mut drafted = direct_report("2", "b@x.com", 300);
    drafted.has_draft = true;
    let plain = direct_report("3", "c@x.com", 200);
    for report in [pinned, drafted, plain] {
        insert_report(&mut snapshot, report);
    }

    let result = pipeline().sidebar_options(&snapshot, None, SidebarMode::Default);
    let ids: Vec<&str> = result
        .recent_reports
        .iter()
        .map(|o| o.report_id.as_deref().unwrap())
        .collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn test_sidebar_focus_mode_hides_read_and_sorts_by_name() {
    let mut snapshot = Snapshot::new("me@x.com");
    let mut zed = direct_report("1", "z@x.com", 900);
    zed.report_name = "Zed".to_string();
    zed.is_unread = true;
    let mut amy = direct_report("2", "a@x.com", 100);
    amy.report_name = "Amy".to_string();
    amy.is_unread = true;
    let mut read = direct_report("3", "r@x.com", 500);
    read.report_name = "Ray".to_string();
    for report in [zed, amy, read] {
        insert_report(&mut snapshot, report);
    }
    insert_detail(&mut snapshot, detail("z@x.com", "Zed"));
    insert_detail(&mut snapshot, detail("a@x.com", "Amy"));
    insert_detail(&mut snapshot, detail("r@x.com", "Ray"));

    let result = pipeline().sidebar_options(&snapshot, None, SidebarMode::Focus);
    let texts: Vec<&str> = result
        .recent_reports
        .iter()
        .map(|o| o.text.as_str())
        .collect();
    assert_eq!(texts, ["Amy", "Zed"]);
}

#[test]
fn test_sidebar_keeps_active_report_even_when_read() {
    let mut snapshot = Snapshot::new("me@x.com");
    let read = direct_report("1", "a@x.com", 100);
    insert_report(&mut snapshot, read);

    let result = pipeline().sidebar_options(&snapshot, Some("1"), SidebarMode::Focus);
    assert_eq!(result.recent_reports.len(), 1);
}
