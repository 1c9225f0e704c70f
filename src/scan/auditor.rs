//! Link auditor
//!
//! Classifies located instances as linked or unlinked against the
//! shared-library resolver and assembles the final report. Lookups are
//! issued concurrently but results come back in input order, so the issue
//! sequence always matches traversal order.

use std::time::Duration;

use futures::{stream, StreamExt};

use crate::scan::{InstanceRecord, Issue, LinkStatus, ScanResult};
use crate::services::ComponentResolver;

/// Tuning knobs for the audit pass
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Upper bound on one main-component lookup; elapsed lookups classify
    /// as unlinked
    pub lookup_timeout: Duration,
    /// How many lookups may be in flight at once
    pub max_concurrent_lookups: usize,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            lookup_timeout: Duration::from_millis(5000),
            max_concurrent_lookups: 4,
        }
    }
}

/// Audit every record and assemble the scan result
///
/// A record is linked only when its main component resolves and is flagged
/// remote. Lookup errors and timeouts downgrade that one record to unlinked
/// and the audit continues. Parent reconnection runs after every status is
/// known, since a parent's own unlinked status is required information.
pub async fn audit<R>(
    resolver: &R,
    frame_name: &str,
    records: &[InstanceRecord<'_>],
    options: &AuditOptions,
) -> ScanResult
where
    R: ComponentResolver + ?Sized,
{
    // Futures are built eagerly but stay inert until polled; `buffered`
    // still caps how many run at once. Collecting first keeps the closure
    // type out of this future's captured state, which would otherwise trip
    // rustc's "implementation of `Send` is not general enough" check when
    // the enclosing future is spawned.
    let lookups: Vec<_> = records
        .iter()
        .map(|record| classify(resolver, record, options.lookup_timeout))
        .collect();
    let statuses: Vec<LinkStatus> = stream::iter(lookups)
        .buffered(options.max_concurrent_lookups.max(1))
        .collect()
        .await;

    let mut issues: Vec<Issue> = records
        .iter()
        .zip(&statuses)
        .filter(|(_, status)| **status == LinkStatus::Unlinked)
        .map(|(record, _)| Issue {
            node_id: record.node.id.clone(),
            name: record.node.name.clone(),
            level: record.level,
            parent_name: record.parent_name().map(str::to_string),
            parent_id: None,
        })
        .collect();

    reconnect_parents(&mut issues, records, &statuses);

    ScanResult {
        frame_name: frame_name.to_string(),
        total_components: records.len(),
        total_issues: issues.len(),
        issues,
    }
}

/// Classify one record's link status
async fn classify<R>(
    resolver: &R,
    record: &InstanceRecord<'_>,
    timeout: Duration,
) -> LinkStatus
where
    R: ComponentResolver + ?Sized,
{
    match tokio::time::timeout(timeout, resolver.resolve_main_component(record.node)).await {
        Ok(Ok(Some(main))) if main.remote => LinkStatus::Linked,
        Ok(Ok(Some(_))) => LinkStatus::Unlinked,
        Ok(Ok(None)) => LinkStatus::Unlinked,
        Ok(Err(e)) => {
            tracing::warn!(
                "Main-component lookup failed for '{}' ({}): {}",
                record.node.name,
                record.node.id,
                e
            );
            LinkStatus::Unlinked
        }
        Err(_) => {
            tracing::warn!(
                "Main-component lookup timed out for '{}' ({})",
                record.node.name,
                record.node.id
            );
            LinkStatus::Unlinked
        }
    }
}

/// Attach each issue to its nearest unlinked ancestor, best effort
///
/// Matches by (name, level): the first record whose node name equals the
/// issue's nearest ancestor name at a level exactly one less. The match is
/// heuristic; same-named sibling instances at the same level can attach to
/// the wrong sibling. Only a match that is itself unlinked produces a
/// parent id.
fn reconnect_parents(
    issues: &mut [Issue],
    records: &[InstanceRecord<'_>],
    statuses: &[LinkStatus],
) {
    for issue in issues.iter_mut() {
        let Some(parent_name) = issue.parent_name.as_deref() else {
            continue;
        };
        let parent = records
            .iter()
            .zip(statuses)
            .find(|(record, _)| {
                record.level + 1 == issue.level && record.node.name == parent_name
            });
        if let Some((record, status)) = parent {
            if *status == LinkStatus::Unlinked {
                issue.parent_id = Some(record.node.id.clone());
            }
        }
    }
}
