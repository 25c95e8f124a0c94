//! Report snapshots and their derived predicates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Room flavor carried by a report; absent for direct conversations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    /// Room created by a workspace member
    UserCreatedRoom,
    /// System-created room tied to a workspace (#admins, #announce)
    DefaultRoom,
    /// Workspace expense conversation
    PolicyExpenseChat,
}

/// Snapshot of a single report record
///
/// Owned by the external report store; the pipeline only reads the latest
/// value at call time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    /// Missing identifiers mark malformed records; they never become options
    pub report_id: Option<String>,

    /// Ordered participant logins, excluding the current user
    #[serde(default)]
    pub participants: Vec<String>,

    #[serde(default)]
    pub report_name: String,

    pub room_kind: Option<RoomKind>,

    /// Owning workspace, when the report belongs to one
    pub policy_id: Option<String>,

    /// Preview text of the most recent message, empty when none
    #[serde(default)]
    pub last_message_text: String,

    /// Display name of the actor behind the most recent message
    pub last_actor_name: Option<String>,

    /// Timestamp of the most recent message; `None` means no messages yet
    pub last_message_at: Option<DateTime<Utc>>,

    /// When the current user last opened this report
    pub last_visited_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub is_pinned: bool,

    #[serde(default)]
    pub is_unread: bool,

    /// The current user has an unsent draft comment in this report
    #[serde(default)]
    pub has_draft: bool,

    #[serde(default)]
    pub is_archived: bool,

    /// Set while a just-created workspace room has not received messages yet
    #[serde(default)]
    pub is_freshly_created: bool,

    #[serde(default)]
    pub has_outstanding_iou: bool,

    /// Outstanding IOU aggregate, referenced but not owned
    pub iou_report_id: Option<String>,

    /// Report-level errors keyed by origin
    #[serde(default)]
    pub errors: BTreeMap<String, String>,

    /// Per-field errors keyed by field name
    #[serde(default)]
    pub error_fields: BTreeMap<String, BTreeMap<String, String>>,
}

impl Report {
    /// User-created and default rooms; excludes expense chats
    pub fn is_chat_room(&self) -> bool {
        matches!(
            self.room_kind,
            Some(RoomKind::UserCreatedRoom | RoomKind::DefaultRoom)
        )
    }

    pub fn is_default_room(&self) -> bool {
        matches!(self.room_kind, Some(RoomKind::DefaultRoom))
    }

    pub fn is_user_created_policy_room(&self) -> bool {
        matches!(self.room_kind, Some(RoomKind::UserCreatedRoom))
    }

    pub fn is_policy_expense_chat(&self) -> bool {
        matches!(self.room_kind, Some(RoomKind::PolicyExpenseChat))
    }

    /// Chat rooms and policy expense chats share most display rules
    pub fn is_room_like(&self) -> bool {
        self.room_kind.is_some()
    }

    pub fn is_archived_room(&self) -> bool {
        self.is_room_like() && self.is_archived
    }

    pub fn has_messages(&self) -> bool {
        self.last_message_at.is_some()
    }
}
