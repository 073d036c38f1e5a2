use std::path::Path;

use roxmltree::{Document, Node as XmlNode};

use super::tree::{NodeId, NodeKind, ReportTree, StatusState};
use crate::error::ReportError;
use crate::preview::preview;

pub const ALL_TESTS: &str = "All Tests";

const PREVIEW_CHARS: usize = 500;

/// Control structures that wrap keywords; they are kept as unnamed keyword
/// containers so nested keywords and messages stay reachable.
const CONTAINER_TAGS: [&str; 7] = ["for", "iter", "if", "branch", "try", "while", "group"];

/// One `<stat>` entry of `statistics/total`, attributes kept raw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatEntry {
    pub name: Option<String>,
    pub label: Option<String>,
    pub pass: Option<String>,
    pub fail: Option<String>,
    pub skip: Option<String>,
}

impl StatEntry {
    /// Robot writes the bucket label as element text; a `name` attribute is accepted too.
    pub fn is_all_tests(&self) -> bool {
        self.name.as_deref() == Some(ALL_TESTS) || self.label.as_deref() == Some(ALL_TESTS)
    }
}

#[derive(Debug, Clone)]
pub struct ParsedReport {
    pub tree: ReportTree,
    pub totals: Vec<StatEntry>,
}

pub fn read_report(path: &Path) -> Result<ParsedReport, ReportError> {
    let bytes = std::fs::read(path).map_err(|source| ReportError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let xml = String::from_utf8(bytes)
        .map_err(|e| ReportError::malformed(path, format!("not utf-8: {e}")))?;

    tracing::debug!(
        target: "robotrun.report",
        path = %path.display(),
        bytes = xml.len(),
        sample = %preview(&xml, PREVIEW_CHARS),
        "read report"
    );

    parse_report(&xml).map_err(|reason| ReportError::malformed(path, reason))
}

/// Parses report XML; the error string describes the first schema violation.
pub fn parse_report(xml: &str) -> Result<ParsedReport, String> {
    let doc = Document::parse(xml).map_err(|e| format!("invalid xml: {e}"))?;
    let robot = doc.root_element();
    if robot.tag_name().name() != "robot" {
        return Err(format!(
            "root element is <{}>, expected <robot>",
            robot.tag_name().name()
        ));
    }

    let totals = read_totals(robot)?;
    if !totals.iter().any(StatEntry::is_all_tests) {
        return Err(format!("statistics/total has no '{ALL_TESTS}' entry"));
    }

    let mut tree = ReportTree::new();
    for suite in child_elements(robot, "suite") {
        let id = tree.push(None, NodeKind::Suite { name: attr(suite, "name") });
        append_children(&mut tree, id, suite);
    }

    Ok(ParsedReport { tree, totals })
}

fn read_totals(robot: XmlNode<'_, '_>) -> Result<Vec<StatEntry>, String> {
    let statistics = child_elements(robot, "statistics")
        .next()
        .ok_or("missing <statistics> section")?;
    let total = child_elements(statistics, "total")
        .next()
        .ok_or("missing <statistics>/<total> section")?;

    Ok(child_elements(total, "stat")
        .map(|stat| StatEntry {
            name: attr(stat, "name"),
            label: element_text(stat).map(|t| t.trim().to_string()),
            pass: attr(stat, "pass"),
            fail: attr(stat, "fail"),
            skip: attr(stat, "skip"),
        })
        .collect())
}

fn append_children(tree: &mut ReportTree, parent: NodeId, el: XmlNode<'_, '_>) {
    for child in el.children().filter(XmlNode::is_element) {
        let tag = child.tag_name().name();
        let kind = match tag {
            "suite" => NodeKind::Suite { name: attr(child, "name") },
            "test" => NodeKind::Test { name: attr(child, "name") },
            "kw" => NodeKind::Keyword { name: attr(child, "name") },
            t if CONTAINER_TAGS.contains(&t) => NodeKind::Keyword { name: None },
            "status" => NodeKind::Status {
                state: StatusState::parse(child.attribute("status").unwrap_or_default()),
                text: element_text(child),
            },
            "msg" => NodeKind::Message {
                text: element_text(child).unwrap_or_default(),
            },
            _ => continue,
        };
        let descend = !matches!(kind, NodeKind::Status { .. } | NodeKind::Message { .. });
        let id = tree.push(Some(parent), kind);
        if descend {
            append_children(tree, id, child);
        }
    }
}

fn child_elements<'a, 'input: 'a>(
    el: XmlNode<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = XmlNode<'a, 'input>> + 'a {
    el.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == tag)
}

fn attr(el: XmlNode<'_, '_>, name: &str) -> Option<String> {
    el.attribute(name).map(str::to_string)
}

/// Concatenated text content; `None` when empty.
fn element_text(el: XmlNode<'_, '_>) -> Option<String> {
    let text: String = el
        .descendants()
        .filter(XmlNode::is_text)
        .filter_map(|n| n.text())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<robot generator="Robot 6.1.1 (Python 3.11.4 on linux)">
<suite id="s1" name="Tests">
<test id="s1-t1" name="Login">
<kw name="Open Browser" library="SeleniumLibrary">
<msg timestamp="20240101 10:00:00.000" level="INFO">Opening browser 'chrome'</msg>
<status status="PASS" starttime="x" endtime="y"/>
</kw>
<for flavor="IN">
<iter>
<kw name="Log">
<msg level="INFO">inside loop</msg>
<status status="PASS"/>
</kw>
<status status="PASS"/>
</iter>
<status status="PASS"/>
</for>
<status status="PASS" starttime="x" endtime="y"/>
</test>
<status status="PASS" starttime="x" endtime="y"/>
</suite>
<statistics>
<total>
<stat pass="1" fail="0" skip="0">All Tests</stat>
</total>
<tag/>
<suite>
<stat pass="1" fail="0" skip="0" id="s1" name="Tests">Tests</stat>
</suite>
</statistics>
<errors/>
</robot>
"#;

    #[test]
    fn parses_tree_and_totals() {
        let report = parse_report(MINIMAL).unwrap();
        assert_eq!(report.totals.len(), 1);
        assert!(report.totals[0].is_all_tests());
        assert_eq!(report.totals[0].pass.as_deref(), Some("1"));

        let tree = &report.tree;
        assert_eq!(tree.roots().len(), 1);
        let test = tree.tests(tree.roots()[0]).next().unwrap();
        assert_eq!(tree.status(test).map(|(s, _)| s), Some(StatusState::Pass));

        let keywords: Vec<_> = tree.keywords(test).collect();
        assert_eq!(keywords.len(), 2);
        assert_eq!(tree.keyword_name(keywords[0]), Some("Open Browser"));
        assert_eq!(
            tree.messages(keywords[0]).collect::<Vec<_>>(),
            vec!["Opening browser 'chrome'"]
        );
    }

    #[test]
    fn control_structures_keep_nested_keywords_reachable() {
        let report = parse_report(MINIMAL).unwrap();
        let tree = &report.tree;
        let test = tree.tests(tree.roots()[0]).next().unwrap();
        let for_loop = tree.keywords(test).nth(1).unwrap();
        let iter = tree.keywords(for_loop).next().unwrap();
        let log = tree.keywords(iter).next().unwrap();
        assert_eq!(tree.messages(log).collect::<Vec<_>>(), vec!["inside loop"]);
    }

    #[test]
    fn name_attribute_also_identifies_bucket() {
        let xml = r#"<robot><statistics><total>
<stat pass="2" fail="1" name="All Tests"/>
</total></statistics></robot>"#;
        let report = parse_report(xml).unwrap();
        assert!(report.totals[0].is_all_tests());
        assert!(report.tree.is_empty());
    }

    #[test]
    fn missing_statistics_is_malformed() {
        let err = parse_report("<robot><suite name=\"x\"/></robot>").unwrap_err();
        assert!(err.contains("statistics"));
    }

    #[test]
    fn missing_all_tests_bucket_is_malformed() {
        let xml = r#"<robot><statistics><total>
<stat pass="1" fail="0">Critical Tests</stat>
</total></statistics></robot>"#;
        let err = parse_report(xml).unwrap_err();
        assert!(err.contains("All Tests"));
    }

    #[test]
    fn wrong_root_is_malformed() {
        let err = parse_report("<testsuites/>").unwrap_err();
        assert!(err.contains("<testsuites>"));
    }

    #[test]
    fn read_report_classifies_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("output.xml");
        assert!(matches!(
            read_report(&missing),
            Err(ReportError::Unavailable { .. })
        ));

        let truncated = dir.path().join("truncated.xml");
        let mut f = std::fs::File::create(&truncated).unwrap();
        f.write_all(&MINIMAL.as_bytes()[..200]).unwrap();
        assert!(matches!(
            read_report(&truncated),
            Err(ReportError::Malformed { .. })
        ));

        let ok = dir.path().join("ok.xml");
        std::fs::write(&ok, MINIMAL).unwrap();
        assert!(read_report(&ok).is_ok());
    }
}
