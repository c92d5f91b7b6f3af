//! Audit logging system for SpendVista
//!
//! Records every create, update and delete with before/after snapshots, and
//! every full reset with a summary of what it cleared, in an append-only
//! JSONL log next to the data files.
//!
//! - `AuditEntry` / `Change`: one timestamped change.
//! - `AuditLogger`: appends entries to the log and reads them back.
//! - `generate_diff` / `diff_records`: human-readable field diffs for updates.

mod diff;
mod entry;
mod logger;

pub use diff::{diff_records, generate_diff};
pub use entry::{AuditEntry, Change, EntityType, Operation, RecordRef, ResetSummary};
pub use logger::AuditLogger;
