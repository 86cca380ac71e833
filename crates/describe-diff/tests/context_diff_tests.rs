#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::collections::HashMap;

use common::{BrokenSink, SharedBuf};
use describe_core::{describe_struct, Comparator, DescribeConfig, Describer, DiffRenderer};
use describe_diff::{assert_described_eq, ContextDiff, DiffConfig};

struct Order {
    id: u32,
    items: Vec<String>,
}

describe_struct!(Order as "Order" in "shop" { pub id, pub items });

#[test]
fn test_compare_strings_writes_got_want_diff() {
    // GIVEN a comparator wired to the context diff renderer
    let sink = SharedBuf::default();
    let comparator =
        Comparator::new(Describer::default()).with_diff_sink(ContextDiff::default(), sink.clone());

    // WHEN two different strings are compared
    assert!(!comparator.compare("x", "y"));

    // THEN the sink holds a context diff headed Got / Want
    assert_eq!(
        sink.contents(),
        "*** Got\n--- Want\n***************\n*** 1 ****\n! \"x\"\n--- 1 ----\n! \"y\"\n"
    );
}

#[test]
fn test_struct_mismatch_diff_shows_changed_element() {
    let sink = SharedBuf::default();
    let comparator = Comparator::default().with_diff_sink(ContextDiff::default(), sink.clone());

    let got = Order {
        id: 7,
        items: vec!["apple".into(), "pear".into()],
    };
    let want = Order {
        id: 7,
        items: vec!["apple".into(), "plum".into()],
    };
    assert!(!comparator.compare(&got, &want));

    // Three lines of context before the change; indentation tabs come out
    // as single spaces.
    assert_eq!(
        sink.contents(),
        concat!(
            "*** Got\n",
            "--- Want\n",
            "***************\n",
            "*** 2,7 ****\n",
            "   id: uint32(7),\n",
            "   items: []string{\n",
            "    \"apple\",\n",
            "!   \"pear\",\n",
            "   },\n",
            "  }\n",
            "--- 2,7 ----\n",
            "   id: uint32(7),\n",
            "   items: []string{\n",
            "    \"apple\",\n",
            "!   \"plum\",\n",
            "   },\n",
            "  }\n",
        )
    );
}

#[test]
fn test_long_descriptions_keep_three_lines_of_context() {
    let got: Vec<isize> = (0..20).collect();
    let mut want = got.clone();
    want[10] = 100;

    let diff = ContextDiff::default().render_to_string(
        &Describer::default().describe(&got),
        &Describer::default().describe(&want),
    );

    // Line 12 holds element 10; context spans lines 9 to 15.
    assert!(diff.contains("*** 9,15 ****\n"));
    assert!(diff.contains("--- 9,15 ----\n"));
    assert!(diff.contains("!  10,\n"));
    assert!(diff.contains("!  100,\n"));
    assert_eq!(diff.matches("***************").count(), 1);
}

#[test]
fn test_custom_labels_and_context() {
    let renderer = ContextDiff::new(
        DiffConfig::default()
            .with_context(0)
            .with_labels("left", "right"),
    )
    .unwrap();
    let diff = renderer.render_to_string("a\nb\nc", "a\nB\nc");
    assert_eq!(
        diff,
        "*** left\n--- right\n***************\n*** 2 ****\n! b\n--- 2 ----\n! B\n"
    );
}

#[test]
fn test_custom_indent_passes_through_untouched() {
    let describer = Describer::new(DescribeConfig::default().with_indent("  "));
    let sink = SharedBuf::default();
    let comparator =
        Comparator::new(describer).with_diff_sink(ContextDiff::default(), sink.clone());

    let got: HashMap<String, u8> = [("k".to_string(), 1)].into_iter().collect();
    let want: HashMap<String, u8> = [("k".to_string(), 2)].into_iter().collect();
    assert!(!comparator.compare(&got, &want));
    assert!(sink.contents().contains("!   \"k\": uint8(1),\n"));
}

#[test]
fn test_renderer_surfaces_io_errors_but_compare_does_not() {
    let err = ContextDiff::default()
        .render(&mut BrokenSink, "a", "b")
        .unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);

    let comparator = Comparator::default().with_diff_sink(ContextDiff::default(), BrokenSink);
    assert!(!comparator.compare("a", "b"));
}

#[test]
fn test_assert_described_eq_passes_on_equal_descriptions() {
    let a: HashMap<u8, bool> = [(1, true), (2, false)].into_iter().collect();
    let b: HashMap<u8, bool> = [(2, false), (1, true)].into_iter().collect();
    assert_described_eq!(a, b);
}

#[test]
#[should_panic(expected = "*** Got")]
fn test_assert_described_eq_panics_with_diff() {
    assert_described_eq!(vec![1isize], vec![2isize]);
}
