//! Enclosing-context lookups against real tree-sitter grammars.
//!
//! Covers the documented scenarios end to end: the outermost spanning node is
//! reported, ranges past the end of the file find nothing, and dry runs
//! distinguish a completed parse from a failed one.

use enclosure::{
    Error, Language, LineRange, OutlineTree, ParseOptions, ParserHandle, SourceParser,
    SyntaxNode, find_enclosing_context,
};
use rstest::rstest;

const PYTHON_SOURCE: &str = r#"import os

class Greeter:
    def __init__(self, name):
        self.name = name

    def greet(self):
        message = "hi " + self.name
        return message


def main():
    greeter = Greeter(os.environ.get("USER", "you"))
    print(greeter.greet())
"#;

const RUST_SOURCE: &str = r#"use std::fmt;

struct Counter {
    count: u32,
}

impl Counter {
    fn tick(&mut self) {
        self.count += 1;
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count)
    }
}
"#;

const CSHARP_SOURCE: &str = r#"using System;

namespace Demo
{
    public class Greeter
    {
        public string Greet(string name)
        {
            return "hi " + name;
        }
    }
}
"#;

fn handle(language: Language) -> ParserHandle {
    ParserHandle::new(language, ParseOptions::default()).expect("bundled grammar should load")
}

fn range(start: usize, end: usize) -> LineRange {
    LineRange::new(start, end).expect("valid range")
}

// === Selection against real trees ===

#[rstest]
#[case::python(Language::Python, PYTHON_SOURCE, "module", range(8, 9))]
#[case::rust(Language::Rust, RUST_SOURCE, "source_file", range(9, 9))]
#[case::csharp(Language::CSharp, CSHARP_SOURCE, "compilation_unit", range(7, 10))]
fn root_is_reported_for_ranges_inside_the_file(
    #[case] language: Language,
    #[case] source: &str,
    #[case] root_kind: &str,
    #[case] request: LineRange,
) {
    let parser = handle(language);
    let tree = parser.parse(source).expect("source should parse");

    let context = find_enclosing_context(&tree, request).expect("search should succeed");
    let node = context.node().expect("the root spans every line of the file");

    // The root qualifies and is larger than the function around the range.
    assert_eq!(node.kind(), root_kind);
    assert_eq!(node.start_line(), 1);
    assert!(node.start_line() <= request.line_start());
    assert!(request.line_end() <= node.end_line());
}

#[test]
fn root_wins_over_enclosing_method() {
    let parser = handle(Language::Python);
    let tree = parser.parse(PYTHON_SOURCE).unwrap();
    let root = tree.root_node();

    // Lines 8-9 sit inside `greet` (lines 7-9), which qualifies but is smaller.
    let class = root.named_child(1).expect("class definition");
    assert_eq!(class.kind(), "class_definition");
    assert!(class.spans(range(8, 9)));

    let found = find_enclosing_context(&tree, range(8, 9))
        .unwrap()
        .into_node()
        .unwrap();

    assert_eq!(found, root);
    assert!(found.row_span() > class.row_span());
}

#[rstest]
#[case::python(Language::Python, PYTHON_SOURCE)]
#[case::rust(Language::Rust, RUST_SOURCE)]
#[case::csharp(Language::CSharp, CSHARP_SOURCE)]
fn range_past_end_of_file_finds_nothing(#[case] language: Language, #[case] source: &str) {
    let parser = handle(language);
    let tree = parser.parse(source).unwrap();

    let context = find_enclosing_context(&tree, range(60, 65)).expect("absence is not an error");

    assert!(!context.is_found());
}

#[test]
fn range_straddling_end_of_file_finds_nothing() {
    let parser = handle(Language::Python);
    let tree = parser.parse(PYTHON_SOURCE).unwrap();
    let last_line = tree.root_node().end_line();

    let context = find_enclosing_context(&tree, range(12, last_line + 3)).unwrap();

    assert!(!context.is_found());
}

#[test]
fn one_line_file_has_no_enclosing_context() {
    // The whole tree sits on row 0, so every node has size 0.
    let parser = handle(Language::Python);
    let tree = parser.parse("answer = 42").unwrap();

    assert_eq!(tree.root_node().row_span(), 0);
    assert!(!find_enclosing_context(&tree, range(1, 1)).unwrap().is_found());
}

#[test]
fn snapshot_gives_same_answer_as_live_tree() {
    let parser = handle(Language::Rust);
    let tree = parser.parse(RUST_SOURCE).unwrap();
    let outline = OutlineTree::from_tree_sitter(&tree);

    for (start, end) in [(1, 1), (8, 10), (14, 16), (40, 41)] {
        let request = range(start, end);
        let live = find_enclosing_context(&tree, request).unwrap().into_node();
        let detached = find_enclosing_context(&outline, request).unwrap().into_node();

        assert_eq!(
            live.map(|n| (n.kind().to_string(), n.start_line(), n.end_line())),
            detached.map(|n| (n.kind.clone(), n.start_line(), n.end_line())),
            "lines {start}-{end}"
        );
    }
}

#[test]
fn repeated_searches_on_one_tree_agree() {
    let parser = handle(Language::CSharp);
    let tree = parser.parse(CSHARP_SOURCE).unwrap();

    let first = find_enclosing_context(&tree, range(8, 9)).unwrap();
    let second = find_enclosing_context(&tree, range(8, 9)).unwrap();

    assert_eq!(first, second);
}

// === Summaries ===

#[test]
fn summary_describes_root() {
    let parser = handle(Language::Rust);

    let summary = parser
        .enclosing_context(RUST_SOURCE, range(9, 9))
        .expect("parse should succeed")
        .expect("root spans line 9");

    assert_eq!(summary.kind, "source_file");
    assert_eq!(summary.label, None);
    assert_eq!(summary.name, None);
    assert_eq!(summary.span.start_line, 1);
    assert!(summary.size >= 16);
    assert!(summary.text.contains("fn tick(&mut self)"));
}

#[test]
fn summary_is_none_past_end_of_file() {
    let parser = handle(Language::Python);

    let summary = parser.enclosing_context(PYTHON_SOURCE, range(100, 101)).unwrap();

    assert!(summary.is_none());
}

// === Dry runs ===

#[rstest]
#[case::python(Language::Python, PYTHON_SOURCE)]
#[case::rust(Language::Rust, RUST_SOURCE)]
#[case::csharp(Language::CSharp, CSHARP_SOURCE)]
fn valid_sources_pass_dry_run(#[case] language: Language, #[case] source: &str) {
    let validity = handle(language).check_valid(source);

    assert!(validity.valid);
    assert_eq!(validity.error, "");
}

#[test]
fn dry_run_ignores_error_nodes() {
    let parser = handle(Language::Rust);
    let broken = "fn incomplete(\nstruct Orphan {\n    field: !!!,\n";

    let tree = parser.parse(broken).expect("tree-sitter recovers from syntax errors");
    assert!(tree.root_node().has_error());

    assert!(parser.check_valid(broken).valid);
}

#[test]
fn dry_run_reports_timeout_as_failure() {
    let parser = ParserHandle::new(
        Language::Python,
        ParseOptions {
            timeout_micros: Some(1),
        },
    )
    .unwrap();
    let huge: String = (0..50_000)
        .map(|i| format!("def f{i}(x):\n    return x + {i}\n"))
        .collect();

    let validity = parser.check_valid(&huge);

    assert!(!validity.valid);
    assert!(validity.error.contains("timeout"), "got: {}", validity.error);
}

#[test]
fn timed_out_parse_is_a_parse_error() {
    let parser = ParserHandle::new(
        Language::Python,
        ParseOptions {
            timeout_micros: Some(1),
        },
    )
    .unwrap();
    let huge = "x = [1, 2, 3]\n".repeat(100_000);

    let err = parser.enclosing_context(&huge, range(1, 2)).unwrap_err();

    assert!(matches!(err, Error::Parse(_)));
}
