//! Auditor classification and reconnection tests
//!
//! Cover the scan scenarios end to end: classification is linked only for a
//! confirmed remote main component, totals always add up, issue order
//! follows traversal order, and parent reconnection attaches only to
//! ancestors that are themselves unlinked.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use linklint::models::Node;
use linklint::scan::{self, AuditOptions, ScanError};
use linklint::services::{ComponentResolver, MainComponent};

/// Resolver fake keyed by instance name
///
/// Names in `remote` resolve to a remote main component, names in `fail`
/// error out, everything else resolves local. An optional per-call delay
/// exercises the concurrent lookup path.
struct FakeResolver {
    remote: HashSet<String>,
    fail: HashSet<String>,
    delay: Option<Duration>,
}

impl FakeResolver {
    fn new(remote: &[&str]) -> Self {
        Self {
            remote: remote.iter().map(|s| s.to_string()).collect(),
            fail: HashSet::new(),
            delay: None,
        }
    }

    fn failing(mut self, names: &[&str]) -> Self {
        self.fail = names.iter().map(|s| s.to_string()).collect();
        self
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl ComponentResolver for FakeResolver {
    async fn resolve_main_component(&self, node: &Node) -> anyhow::Result<Option<MainComponent>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail.contains(&node.name) {
            anyhow::bail!("resolution failed for {}", node.name);
        }
        let Some(component_id) = node.component_id.clone() else {
            return Ok(None);
        };
        Ok(Some(MainComponent {
            id: component_id,
            name: node.name.clone(),
            remote: self.remote.contains(&node.name),
        }))
    }
}

/// Frame containing Btn (level 0) which contains Icon (level 1)
fn btn_icon_root() -> Node {
    serde_json::from_str(
        r#"{
            "id": "0:1",
            "name": "Home",
            "type": "FRAME",
            "children": [
                {
                    "id": "1:1", "name": "Btn", "type": "INSTANCE", "componentId": "c-btn",
                    "children": [
                        { "id": "1:2", "name": "Icon", "type": "INSTANCE", "componentId": "c-icon" }
                    ]
                }
            ]
        }"#,
    )
    .unwrap()
}

#[tokio::test]
async fn test_unlinked_parent_and_child_reconnect() {
    let root = btn_icon_root();
    let resolver = FakeResolver::new(&[]);

    let result = scan::scan(&resolver, &root, &AuditOptions::default())
        .await
        .unwrap();

    assert_eq!(result.frame_name, "Home");
    assert_eq!(result.total_components, 2);
    assert_eq!(result.total_issues, 2);

    let btn = &result.issues[0];
    let icon = &result.issues[1];
    assert_eq!(btn.name, "Btn");
    assert_eq!(btn.parent_id, None);
    assert_eq!(icon.name, "Icon");
    assert_eq!(icon.parent_id, Some("1:1".to_string()));
}

#[tokio::test]
async fn test_linked_parent_breaks_reconnection() {
    let root = btn_icon_root();
    let resolver = FakeResolver::new(&["Btn"]);

    let result = scan::scan(&resolver, &root, &AuditOptions::default())
        .await
        .unwrap();

    assert_eq!(result.total_components, 2);
    assert_eq!(result.total_issues, 1);
    assert_eq!(result.issues[0].name, "Icon");
    // Btn is not an issue, so Icon has nothing to attach to
    assert_eq!(result.issues[0].parent_id, None);
}

#[tokio::test]
async fn test_failed_lookup_still_reported() {
    let root = btn_icon_root();
    let resolver = FakeResolver::new(&["Btn"]).failing(&["Icon"]);

    let result = scan::scan(&resolver, &root, &AuditOptions::default())
        .await
        .unwrap();

    // Icon's lookup throws; the scan completes and flags it anyway
    assert_eq!(result.total_issues, 1);
    assert_eq!(result.issues[0].name, "Icon");
}

#[tokio::test]
async fn test_totals_always_add_up() {
    let root = btn_icon_root();
    let resolver = FakeResolver::new(&["Icon"]);

    let result = scan::scan(&resolver, &root, &AuditOptions::default())
        .await
        .unwrap();

    let linked = result.total_components - result.total_issues;
    assert_eq!(result.total_components, result.total_issues + linked);
    assert_eq!(result.total_issues, 1);
}

#[tokio::test]
async fn test_scan_is_idempotent() {
    let root = btn_icon_root();
    let resolver = FakeResolver::new(&["Btn"]);

    let first = scan::scan(&resolver, &root, &AuditOptions::default())
        .await
        .unwrap();
    let second = scan::scan(&resolver, &root, &AuditOptions::default())
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_invalid_root_rejected_before_traversal() {
    let root: Node =
        serde_json::from_str(r#"{ "id": "5:1", "name": "Shape", "type": "RECTANGLE" }"#).unwrap();
    let resolver = FakeResolver::new(&[]);

    let err = scan::scan(&resolver, &root, &AuditOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ScanError::InvalidRoot { ref kind } if kind == "RECTANGLE"));
}

#[tokio::test]
async fn test_concurrent_lookups_preserve_issue_order() {
    // Wide frame of ten unlinked siblings; lookups overlap but issues must
    // come back in document order
    let children: Vec<String> = (0..10)
        .map(|i| {
            format!(
                r#"{{ "id": "1:{i}", "name": "Item{i}", "type": "INSTANCE", "componentId": "c{i}" }}"#
            )
        })
        .collect();
    let json = format!(
        r#"{{ "id": "0:1", "name": "Wide", "type": "FRAME", "children": [{}] }}"#,
        children.join(",")
    );
    let root: Node = serde_json::from_str(&json).unwrap();

    let resolver = FakeResolver::new(&[]).with_delay(Duration::from_millis(5));
    let options = AuditOptions {
        lookup_timeout: Duration::from_secs(5),
        max_concurrent_lookups: 8,
    };

    let result = scan::scan(&resolver, &root, &options).await.unwrap();
    assert_eq!(result.total_issues, 10);
    for (i, issue) in result.issues.iter().enumerate() {
        assert_eq!(issue.node_id, format!("1:{i}"));
    }
}

#[tokio::test(start_paused = true)]
async fn test_lookup_timeout_downgrades_to_unlinked() {
    let root = btn_icon_root();
    // Everything would resolve remote, but the lookups outlast the timeout
    let resolver = FakeResolver::new(&["Btn", "Icon"]).with_delay(Duration::from_secs(60));

    let options = AuditOptions {
        lookup_timeout: Duration::from_millis(100),
        max_concurrent_lookups: 2,
    };

    let result = scan::scan(&resolver, &root, &options).await.unwrap();
    assert_eq!(result.total_issues, 2);
}

#[tokio::test]
async fn test_same_name_sibling_reconnection_is_first_match() {
    // Two distinct "Tab" instances at level 0, each wrapping an unlinked
    // child. The (name, level) heuristic attaches both children to the
    // first "Tab" in traversal order; ambiguity is accepted behavior.
    let root: Node = serde_json::from_str(
        r#"{
            "id": "0:1", "name": "Tabs", "type": "FRAME",
            "children": [
                {
                    "id": "1:1", "name": "Tab", "type": "INSTANCE", "componentId": "c-tab",
                    "children": [
                        { "id": "1:2", "name": "Label", "type": "INSTANCE", "componentId": "c-label" }
                    ]
                },
                {
                    "id": "2:1", "name": "Tab", "type": "INSTANCE", "componentId": "c-tab",
                    "children": [
                        { "id": "2:2", "name": "Label", "type": "INSTANCE", "componentId": "c-label" }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let resolver = FakeResolver::new(&[]);
    let result = scan::scan(&resolver, &root, &AuditOptions::default())
        .await
        .unwrap();

    assert_eq!(result.total_issues, 4);
    let second_label = result.issues.iter().find(|i| i.node_id == "2:2").unwrap();
    assert_eq!(second_label.parent_id, Some("1:1".to_string()));
}
