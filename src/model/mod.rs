//! Read-only snapshot records consumed by the option pipeline
//!
//! All types here are projections of externally-owned stores (report store,
//! personal-detail store, policy store, IOU-aggregate store, last-action
//! store). The pipeline reads them and derives new structures; it never
//! mutates or persists them.

mod action;
mod iou;
mod participant;
mod policy;
mod report;

pub use action::{ArchiveReason, ReportAction};
pub use iou::IouReport;
pub use participant::PersonalDetail;
pub use policy::{Policy, PolicyPlan};
pub use report::{Report, RoomKind};
