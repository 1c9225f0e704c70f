//! Instance locator
//!
//! Pure depth-first traversal that finds every component instance under a
//! root node and records the ancestor-instance context it was found in.

use crate::models::Node;
use crate::scan::InstanceRecord;

/// Find every instance under `root` in depth-first pre-order
///
/// Each record captures the level and ancestor chain as they were when the
/// instance was entered, so a record for an outer instance always precedes
/// records for anything nested inside it. The root itself may be an instance
/// (recorded at level 0). The host tree is assumed acyclic.
pub fn locate(root: &Node) -> Vec<InstanceRecord<'_>> {
    let mut records = Vec::new();
    let mut chain = Vec::new();
    visit(root, 0, &mut chain, &mut records);
    records
}

fn visit<'a>(
    node: &'a Node,
    level: usize,
    chain: &mut Vec<String>,
    records: &mut Vec<InstanceRecord<'a>>,
) {
    let is_instance = node.is_instance();
    if is_instance {
        // Level and chain as they were before this instance extends them
        records.push(InstanceRecord {
            node,
            level,
            ancestors: chain.clone(),
        });
        chain.push(node.name.clone());
    }

    let child_level = if is_instance { level + 1 } else { level };
    for child in node.children() {
        visit(child, child_level, chain, records);
    }

    if is_instance {
        chain.pop();
    }
}
