//! Final document assembly.
//!
//! The strings produced here are the clipboard/export surface and are pasted
//! into medical records verbatim, so the exact headers, separators, and
//! punctuation are part of the contract.

use crate::compose::{Clause, ReportSection};

/// Compact style: one line per clause.
pub fn compact(lines: &[String]) -> String {
    lines.join("\n")
}

/// Report style: upper-case headers, each on its own line with its clauses
/// beneath it, one blank line between sections, empty sections omitted.
/// Advisories are appended to the end of the impression paragraph; they
/// carry their own leading spaces and never form a section of their own.
pub fn report(clauses: &[Clause], advisories: &[String]) -> String {
    let mut blocks = Vec::new();
    for section in ReportSection::ALL {
        let mut body = clauses
            .iter()
            .filter(|clause| clause.section == section)
            .map(|clause| clause.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        if section == ReportSection::Impression && !advisories.is_empty() {
            let tail = advisories.concat();
            if body.is_empty() {
                body = tail.trim_start().to_string();
            } else {
                body.push_str(&tail);
            }
        }
        if body.is_empty() {
            continue;
        }
        blocks.push(format!("{}\n{body}", section.header()));
    }
    blocks.join("\n\n")
}
