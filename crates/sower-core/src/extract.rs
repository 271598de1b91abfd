//! Planning-document extraction: markdown stage files to ordered issue
//! records.
//!
//! The document template is fixed. Each issue lives in a `## Issue #N`
//! block with `### Title`, `### Labels` and `### Description` subsections;
//! blocks are separated by `---` rules and the document closes with a
//! `**Total Issues: N**` footer. Segmentation is an explicit line walk so
//! that a malformed block degrades (skipped title, empty labels) instead
//! of corrupting its neighbours.

use crate::record::IssueRecord;

/// Opens an issue block when followed by digits: `## Issue #12`.
const ISSUE_HEADING_PREFIX: &str = "## Issue #";

const TITLE_HEADING: &str = "### Title";
const LABELS_HEADING: &str = "### Labels";
const DESCRIPTION_HEADING: &str = "### Description";

/// Tagged lines inside the Labels subsection: kind (종류), area (영역),
/// complexity (복잡도). Extraction order is fixed to this sequence no
/// matter how the document orders them.
const LABEL_MARKERS: [&str; 3] = ["- 종류:", "- 영역:", "- 복잡도:"];

/// Horizontal rule separating blocks from each other and from the footer.
const RULE: &str = "---";

/// First line of the closing footer.
const FOOTER_PREFIX: &str = "**Total Issues:";

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Extract every issue record from one planning document, in block order.
///
/// Blocks without a usable title line yield no record. A missing Labels
/// subsection degrades to an empty label list, a missing Description to an
/// empty body.
pub fn extract_issues(content: &str) -> Vec<IssueRecord> {
    let lines: Vec<&str> = content.lines().collect();
    let headings: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_issue_heading(line))
        .map(|(i, _)| i)
        .collect();

    let mut records = Vec::new();
    for (n, &at) in headings.iter().enumerate() {
        let region_end = headings.get(n + 1).copied().unwrap_or(lines.len());
        let end = block_end(&lines, at + 1, region_end);
        if let Some(record) = parse_block(&lines[at + 1..end]) {
            records.push(record);
        }
    }
    records
}

// ---------------------------------------------------------------------------
// Segmentation
// ---------------------------------------------------------------------------

/// A heading line is exactly `## Issue #` followed by one or more digits,
/// modulo surrounding whitespace.
fn is_issue_heading(line: &str) -> bool {
    match line.trim().strip_prefix(ISSUE_HEADING_PREFIX) {
        Some(rest) => !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// End (exclusive) of the block starting at `start`, where `region_end` is
/// the next issue heading or the end of input.
///
/// A `---` rule directly before the `**Total Issues:` footer closes the
/// block early. Otherwise the block runs to `region_end`, minus the `---`
/// separator (and blank padding) that belongs to the next heading. A rule
/// in the middle of a description stays part of the body.
fn block_end(lines: &[&str], start: usize, region_end: usize) -> usize {
    for i in start..region_end {
        if lines[i].trim() == RULE && footer_follows(lines, i + 1, region_end) {
            return i;
        }
    }

    let mut end = region_end;
    if region_end < lines.len() {
        while end > start && lines[end - 1].trim().is_empty() {
            end -= 1;
        }
        if end > start && lines[end - 1].trim() == RULE {
            end -= 1;
        }
    }
    end
}

/// True when the first non-blank line in `lines[from..until]` is the
/// document footer.
fn footer_follows(lines: &[&str], from: usize, until: usize) -> bool {
    for line in &lines[from..until] {
        if line.trim().is_empty() {
            continue;
        }
        return line.trim_start().starts_with(FOOTER_PREFIX);
    }
    false
}

// ---------------------------------------------------------------------------
// Block parsing
// ---------------------------------------------------------------------------

/// Parse one block into a record. `None` when the block has no title line
/// or the title line is blank.
fn parse_block(block: &[&str]) -> Option<IssueRecord> {
    let title_at = find_heading(block, TITLE_HEADING)?;
    let title = block.get(title_at + 1)?.trim();
    if title.is_empty() {
        return None;
    }

    let description_at = find_heading(block, DESCRIPTION_HEADING);

    // Labels count only when bracketed by their own heading and the
    // Description heading, in that order.
    let labels = match (find_heading(block, LABELS_HEADING), description_at) {
        (Some(l), Some(d)) if l < d => collect_labels(&block[l + 1..d]),
        _ => Vec::new(),
    };

    let body = match description_at {
        Some(d) => block[d + 1..].join("\n").trim().to_string(),
        None => String::new(),
    };

    Some(IssueRecord {
        title: title.to_string(),
        labels,
        body,
    })
}

/// Index of the first line equal to `heading`, modulo surrounding
/// whitespace.
fn find_heading(block: &[&str], heading: &str) -> Option<usize> {
    block.iter().position(|line| line.trim() == heading)
}

/// Marker values from the Labels subsection, in fixed marker order. A
/// marker that is absent, or present with an empty value, contributes
/// nothing.
fn collect_labels(section: &[&str]) -> Vec<String> {
    let mut labels = Vec::new();
    for marker in LABEL_MARKERS {
        if let Some(value) = section.iter().find_map(|line| marker_value(line, marker)) {
            labels.push(value);
        }
    }
    labels
}

/// The trimmed value after `marker` on `line`, if the marker occurs there
/// and the value is non-empty.
fn marker_value(line: &str, marker: &str) -> Option<String> {
    let at = line.find(marker)?;
    let value = line[at + marker.len()..].trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
