use regex::Regex;
use std::sync::OnceLock;

use crate::ux;
use crate::wire::{ModelOutput, ModificationSet};

pub const PATH_MARKER: &str = "FILE_PATH:";
const CONTENT_MARKER: &str = "content:";

/// Parsed modifications plus anything that was dropped or overridden on the way.
#[derive(Debug, Default)]
pub struct ParseReport {
    pub modifications: ModificationSet,
    pub warnings: Vec<String>,
}

/// Parse a model reply into path -> new content. Skipped blocks and
/// conflicting duplicates are narrated; an empty set means no changes.
pub fn parse(response: &str) -> ModificationSet {
    let report = parse_with_report(response);
    for w in &report.warnings {
        ux::warn(w);
        tracing::warn!(warning = %w, "response parse");
    }
    report.modifications
}

/// Structured `{"files": [...]}` first; the `FILE_PATH:`/`CONTENT:` scan
/// handles free-text replies. Never fails: an empty set means no changes.
pub fn parse_with_report(response: &str) -> ParseReport {
    if let Some(output) = parse_structured(response) {
        tracing::debug!(records = output.files.len(), "response matched structured schema");
        let mut report = ParseReport::default();
        for change in output.files {
            insert(&mut report, change.path, change.content);
        }
        return report;
    }
    parse_markers(response)
}

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)^```(?:json)?[ \t]*\r?\n(.*?)\r?\n?```$").expect("static regex"))
}

fn parse_structured(response: &str) -> Option<ModelOutput> {
    let trimmed = response.trim();
    let body = match fence_re().captures(trimmed) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()).trim(),
        None => trimmed,
    };
    if !body.starts_with('{') {
        return None;
    }
    serde_json::from_str::<ModelOutput>(body).ok()
}

fn parse_markers(response: &str) -> ParseReport {
    let mut report = ParseReport::default();

    // Text before the first marker is preamble.
    for section in response.split(PATH_MARKER).skip(1) {
        let lines: Vec<&str> = section.trim().split('\n').collect();
        let path = lines[0].trim();
        if path.is_empty() {
            report.warnings.push("skipped a FILE_PATH block with an empty path".into());
            continue;
        }
        ux::item(&format!("Processing file: {path}"));

        let content_at = lines
            .iter()
            .position(|l| l.trim().to_lowercase().starts_with(CONTENT_MARKER));
        match content_at {
            Some(i) => {
                let content = lines[i + 1..].join("\n");
                ux::ok(&format!("Captured {} characters for {path}", content.chars().count()));
                insert(&mut report, path.to_string(), content);
            }
            None => {
                ux::warn(&format!("Could not find content section for {path}"));
                report.warnings.push(format!("no CONTENT: line for {path}; block skipped"));
            }
        }
    }
    report
}

/// Last occurrence wins; conflicting duplicates are reported.
fn insert(report: &mut ParseReport, path: String, content: String) {
    if let Some(previous) = report.modifications.get(&path) {
        if *previous != content {
            report.warnings.push(format!("{path} appeared more than once with different content; using the last block"));
        }
    }
    report.modifications.insert(path, content);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(set: &ModificationSet) -> Vec<(&str, &str)> {
        set.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    #[test]
    fn two_blocks_yield_two_entries() {
        let text = concat!("FILE_PATH: a.html\nCONTENT:\nX\n", "FILE_PATH: b.html\nCONTENT:\nY\n");
        assert_eq!(pairs(&parse(text)), vec![("a.html", "X"), ("b.html", "Y")]);
    }

    #[test]
    fn preamble_before_first_marker_is_ignored() {
        let text = "Sure! Here are the changes.\nCONTENT:\nnot a file\nFILE_PATH: a.html\nCONTENT:\nX";
        assert_eq!(pairs(&parse(text)), vec![("a.html", "X")]);
    }

    #[test]
    fn block_without_content_line_is_dropped() {
        let text = "FILE_PATH: c.html\nNO_MARKER_HERE\nFILE_PATH: d.html\nCONTENT:\nD";
        let report = parse_with_report(text);
        assert!(!report.modifications.contains_key("c.html"));
        assert_eq!(report.modifications["d.html"], "D");
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn parse_matches_report_even_with_skipped_blocks() {
        let text = "FILE_PATH: c.html\nNO_MARKER_HERE\nFILE_PATH: a.html\nCONTENT:\nX\nFILE_PATH: a.html\nCONTENT:\nZ";
        let set = parse(text);
        assert_eq!(pairs(&set), vec![("a.html", "Z")]);
        assert_eq!(set, parse_with_report(text).modifications);
    }

    #[test]
    fn duplicate_path_last_wins_and_keeps_first_position() {
        let text = "FILE_PATH: a.html\nCONTENT:\nX\nFILE_PATH: b.html\nCONTENT:\nY\nFILE_PATH: a.html\nCONTENT:\nZ";
        let report = parse_with_report(text);
        assert_eq!(pairs(&report.modifications), vec![("a.html", "Z"), ("b.html", "Y")]);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn identical_duplicates_are_not_reported() {
        let text = "FILE_PATH: a.html\nCONTENT:\nX\nFILE_PATH: a.html\nCONTENT:\nX";
        let report = parse_with_report(text);
        assert_eq!(report.modifications.len(), 1);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn empty_or_marker_free_text_is_empty_set() {
        assert!(parse("").is_empty());
        assert!(parse("I could not find anything to change.").is_empty());
        assert!(parse("FILE_PATH:").is_empty());
    }

    #[test]
    fn content_marker_is_case_insensitive_and_indent_tolerant() {
        let text = "FILE_PATH:   templates/layout/base.html  \n  Content: \n<head>\n  <title>t</title>\n</head>";
        let set = parse(text);
        assert_eq!(set["templates/layout/base.html"], "<head>\n  <title>t</title>\n</head>");
    }

    #[test]
    fn content_keeps_interior_blank_lines() {
        let text = "FILE_PATH: a.html\nCONTENT:\nline1\n\n\nline2\n\n";
        assert_eq!(parse(text)["a.html"], "line1\n\n\nline2");
    }

    #[test]
    fn structured_json_is_preferred() {
        let text = r#"{"files":[{"path":"a.html","content":"FILE_PATH: fake\nCONTENT:\nno"},{"path":"b.js","content":"B"}]}"#;
        let set = parse(text);
        assert_eq!(pairs(&set), vec![("a.html", "FILE_PATH: fake\nCONTENT:\nno"), ("b.js", "B")]);
    }

    #[test]
    fn fenced_json_is_accepted() {
        let text = "```json\n{\"files\":[{\"path\":\"a.html\",\"content\":\"X\"}]}\n```";
        assert_eq!(pairs(&parse(text)), vec![("a.html", "X")]);
    }

    #[test]
    fn json_content_in_marker_block_is_not_mistaken_for_schema() {
        let text = "FILE_PATH: config.json\nCONTENT:\n{\"files\": []}";
        assert_eq!(pairs(&parse(text)), vec![("config.json", "{\"files\": []}")]);
    }

    #[test]
    fn end_to_end_sample_body_is_exact() {
        let body = "<head><script id='bolt-tracking' src='https://connect.bolt.com/track.js'></script></head>";
        let text = format!("FILE_PATH: layout/base.html\nCONTENT:\n{body}");
        assert_eq!(pairs(&parse(&text)), vec![("layout/base.html", body)]);
    }
}
