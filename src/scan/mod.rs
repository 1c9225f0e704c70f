//! Library-link scanning
//!
//! Walks a document subtree to find every component instance, audits each one
//! against the shared-library resolver, and assembles the issue report.
//! Similar in spirit to a lint pass: the locator is a pure traversal, the
//! auditor classifies asynchronously and reconnects parent/child issues
//! afterwards.

mod auditor;
mod locator;
mod models;

pub use auditor::{audit, AuditOptions};
pub use locator::locate;
pub use models::{InstanceRecord, Issue, LinkStatus, ScanResult};

use crate::models::Node;
use crate::services::ComponentResolver;

/// Scan errors surfaced across the host boundary
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("No scan root selected")]
    NoRoot,

    #[error("Cannot scan a {kind} node: select a frame, component, or component set")]
    InvalidRoot { kind: String },

    #[error("Node not found: {0}")]
    NotFound(String),
}

/// Run a full scan of the subtree under `root`
///
/// Validates the root before any traversal: only frame-like container nodes
/// are accepted. Per-instance lookup failures never fail the scan; they
/// downgrade that instance to unlinked.
pub async fn scan<R>(
    resolver: &R,
    root: &Node,
    options: &AuditOptions,
) -> Result<ScanResult, ScanError>
where
    R: ComponentResolver + ?Sized,
{
    if !root.kind.is_scan_root() {
        return Err(ScanError::InvalidRoot {
            kind: root.kind.as_str().to_string(),
        });
    }

    let records = locate(root);
    tracing::debug!(
        "Located {} instances under root '{}'",
        records.len(),
        root.name
    );

    Ok(audit(resolver, &root.name, &records, options).await)
}
