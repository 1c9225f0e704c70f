//! Plain-text rendering of scan results
//!
//! The presentation layer proper is out of scope for the core; this module
//! only formats a finished ScanResult for the CLI.

use crate::scan::ScanResult;

/// Render a scan result as an indented text report
pub fn render_text(result: &ScanResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Scan of '{}' at {}\n",
        result.frame_name,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!(
        "{} instances checked, {} not linked to a library\n",
        result.total_components, result.total_issues
    ));

    if result.issues.is_empty() {
        out.push_str("\nAll instances are linked.\n");
        return out;
    }

    out.push_str("\nIssues (traversal order):\n");
    for issue in &result.issues {
        let indent = "  ".repeat(issue.level + 1);
        out.push_str(&format!(
            "{}{} (node {}, level {})",
            indent, issue.name, issue.node_id, issue.level
        ));
        if let Some(parent_name) = &issue.parent_name {
            match &issue.parent_id {
                Some(parent_id) => {
                    out.push_str(&format!(" inside '{}' [issue {}]", parent_name, parent_id))
                }
                None => out.push_str(&format!(" inside '{}'", parent_name)),
            }
        }
        out.push('\n');
    }

    out
}
