//! Icon descriptors and the avatar/icon resolution seam
//!
//! Avatar assets are owned elsewhere; the pipeline only needs a resolver
//! that turns a report plus its participants into renderable descriptors.

use ahash::AHashMap;
use serde::Serialize;

use crate::model::{PersonalDetail, Policy, Report};

/// Asset reference used when a participant has no avatar of their own
pub const FALLBACK_AVATAR: &str = "avatars/default.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    /// A participant avatar
    Avatar,
    /// A workspace-branded room icon
    Workspace,
}

/// Renderable icon descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icon {
    pub source: String,
    pub kind: IconKind,
    /// Hover/name hint for the rendering layer
    pub name: String,
}

/// Resolution seam between the pipeline and the avatar/asset layer
pub trait IconResolver {
    fn icons(
        &self,
        report: Option<&Report>,
        details: &[PersonalDetail],
        policies: &AHashMap<String, Policy>,
        fallback: &str,
    ) -> Vec<Icon>;
}

/// Built-in resolver: workspace icon for room-like reports, participant
/// avatars (or the fallback asset) otherwise
#[derive(Debug, Default)]
pub struct DefaultIconResolver;

impl IconResolver for DefaultIconResolver {
    fn icons(
        &self,
        report: Option<&Report>,
        details: &[PersonalDetail],
        policies: &AHashMap<String, Policy>,
        fallback: &str,
    ) -> Vec<Icon> {
        if let Some(report) = report {
            if report.is_room_like() {
                let name = report
                    .policy_id
                    .as_deref()
                    .and_then(|id| policies.get(id))
                    .map(|policy| policy.name.clone())
                    .unwrap_or_else(|| report.report_name.clone());
                return vec![Icon {
                    source: format!("workspaces/{}.png", slug(&name)),
                    kind: IconKind::Workspace,
                    name,
                }];
            }
        }

        details
            .iter()
            .map(|detail| Icon {
                source: detail
                    .avatar
                    .clone()
                    .unwrap_or_else(|| fallback.to_string()),
                kind: IconKind::Avatar,
                name: detail.display_name_or_login().to_string(),
            })
            .collect()
    }
}

/// Filesystem-safe workspace slug for generated icon paths
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}
