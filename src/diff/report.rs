use anyhow::{Result, Context};

use super::types::{DiffEntry, DiffNode, DiffReport};

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn write_entries(out: &mut String, heading: &str, entries: &[DiffEntry]) {
    if entries.is_empty() {
        return;
    }

    push_line(out, &format!("  {heading}:"));
    for entry in entries {
        push_line(out, &format!("    [{}] {}", entry.severity, entry.message));
    }
}

fn write_node(out: &mut String, node: &DiffNode) {
    let header = match &node.extends_name {
        Some(parent) => format!("[{}] {} extends {}", node.color_class, node.class_name, parent),
        None => format!("[{}] {}", node.color_class, node.class_name),
    };
    push_line(out, &header);

    if let Some(note) = &node.inheritance_note {
        push_line(out, &format!("  ! {}", note.message));
    }
    write_entries(out, "attributes", &node.attribute_diffs);
    write_entries(out, "methods", &node.method_diffs);
}

/// Render a report as an indented plain-text tree.
///
/// Output depends only on the report, so equal reports render identically.
pub fn render_text(report: &DiffReport) -> String {
    let mut out = String::new();
    let mismatched = report.nodes.iter().filter(|n| !n.is_match()).count();

    push_line(
        &mut out,
        &format!(
            "{} vs {}: {} classes compared, {} differ ({})",
            report.reference_label,
            report.candidate_label,
            report.nodes.len(),
            mismatched,
            report.overall()
        ),
    );

    for node in &report.nodes {
        write_node(&mut out, node);
    }

    if let Some(note) = &report.class_count_note {
        push_line(&mut out, &format!("note: {}", note.message));
    }

    out
}

/// Render a report as pretty-printed JSON
pub fn render_json(report: &DiffReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize diff report")
}
