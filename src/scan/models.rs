//! Data structures for scan results

use serde::{Deserialize, Serialize};

use crate::models::Node;

/// One component instance found by the locator
///
/// Captures the traversal context at the moment the instance was entered:
/// how many instance ancestors sit strictly above it and their names from
/// outermost to innermost. Records are created in one traversal pass and
/// never mutated.
#[derive(Debug, Clone)]
pub struct InstanceRecord<'a> {
    /// The instance node itself
    pub node: &'a Node,
    /// Count of INSTANCE-typed strict ancestors (not ancestors of any type)
    pub level: usize,
    /// Ancestor instance names, outermost first
    pub ancestors: Vec<String>,
}

impl InstanceRecord<'_> {
    /// Name of the nearest ancestor instance, if any
    pub fn parent_name(&self) -> Option<&str> {
        self.ancestors.last().map(String::as_str)
    }
}

/// Outcome of auditing one instance's library link
///
/// Anything short of a confirmed remote main component is unlinked: absent
/// component, failed or timed-out lookup, or a local (non-remote) main
/// component. The bias is toward flagging, never toward hiding an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Linked,
    Unlinked,
}

/// One unlinked instance in the final report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Id of the unlinked instance node
    pub node_id: String,
    /// Display name of the instance
    pub name: String,
    /// Nesting level (instance ancestors strictly above)
    pub level: usize,
    /// Name of the nearest ancestor instance, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    /// Id of the nearest ancestor *issue*, when the (name, level) heuristic
    /// finds one that is itself unlinked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Aggregate result of one scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Display name of the scan root
    pub frame_name: String,
    /// Every instance examined, linked or not
    pub total_components: usize,
    /// Instances flagged as unlinked
    pub total_issues: usize,
    /// Issues in traversal order (depth-first, pre-order)
    pub issues: Vec<Issue>,
}
