use std::fmt::Write;

use crate::record::JobRecord;

/// en-US `toLocaleString` shape, e.g. `1/15/2026, 9:05:00 AM`.
const SAVED_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Render a record into the saved Markdown document. Same record, same bytes.
pub fn render(record: &JobRecord) -> String {
    let mut md = String::with_capacity(record.description.len() + 512);

    // Writing into a String cannot fail.
    let _ = writeln!(md, "# {}", record.title);
    md.push('\n');
    let _ = writeln!(md, "**Company:** {}", record.company);
    let _ = writeln!(md, "**Location:** {}", record.location);
    let _ = writeln!(md, "**Source:** [{}]({})", record.platform, record.url);
    let _ = writeln!(md, "**Saved:** {}", record.captured_at.format(SAVED_FORMAT));
    md.push('\n');
    if record.has_metadata() {
        let _ = writeln!(md, "**Additional Info:** {}", record.metadata);
    }
    md.push_str("\n---\n\n## Job Description\n\n");
    md.push_str(&record.description);
    md.push_str("\n\n---\n\n");
    let _ = writeln!(md, "**URL:** {}", record.url);
    md
}
