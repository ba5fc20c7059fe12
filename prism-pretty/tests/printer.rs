use std::cell::OnceCell;
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use insta::assert_snapshot;
use prism_core::{Peek, reflect_struct, reflect_unit_enum};
use prism_pretty::{PrettyPrinter, REVISIT_MARKER, ReflectPretty};
use prism_testhelpers::test;

struct Config {
    name: String,
    retries: Option<u32>,
    limits: BTreeMap<String, u32>,
    tags: Vec<&'static str>,
}
reflect_struct!(Config {
    name,
    retries,
    limits,
    tags
});

fn config() -> Config {
    Config {
        name: "api".to_string(),
        retries: None,
        limits: [("b".to_string(), 2), ("a".to_string(), 1)].into(),
        tags: vec![],
    }
}

struct Note {
    body: String,
}
reflect_struct!(Note { body });

struct Node {
    value: i32,
    next: OnceCell<Rc<Node>>,
}
reflect_struct!(Node { value, next });

enum Color {
    Red,
    #[allow(dead_code)]
    Blue,
}
reflect_unit_enum!(Color { Red, Blue });

#[test]
fn struct_with_nested_containers() {
    assert_snapshot!(config().pretty().to_string(), @r#"
    Config(
      name: "api",
      retries: None,
      limits: [
        "a": 1,
        "b": 2
      ],
      tags: []
    )
    "#);
}

#[test]
fn max_depth_summarizes_nested_containers() {
    let output = PrettyPrinter::new().with_max_depth(1).format(&config());
    assert_snapshot!(output, @r#"
    Config(
      name: "api",
      retries: None,
      limits: […],
      tags: []
    )
    "#);
}

#[test]
fn short_form_stays_on_one_line() {
    let config = config();
    let output = PrettyPrinter::new().format_short(&Peek::new(&config));
    assert_snapshot!(output, @r#"Config(name: "api", retries: None, limits: ["a": 1, "b": 2], tags: [])"#);
}

#[test]
fn render_indents_every_line() {
    let output = PrettyPrinter::new().render(&Peek::new(&vec![1, 2]), Some("xs"), 4, None);
    assert_eq!(output, "    xs: [\n      [0]: 1,\n      [1]: 2\n    ]");

    let output = PrettyPrinter::new().render(&Peek::new(&vec![1, 2]), Some("xs"), 4, Some(0));
    assert_eq!(output, "    xs: […]");
}

#[test]
fn enums_show_their_case() {
    let ok: Result<i32, String> = Ok(1);
    assert_snapshot!(ok.pretty().to_string(), @r"
    Result<i32, String>.Ok(
      1
    )
    ");
    assert_snapshot!(Color::Red.pretty().to_string(), @"Color.Red");
}

#[test]
fn tuples_hide_positional_labels() {
    assert_snapshot!((1, "a").pretty().to_string(), @r#"
    (
      1,
      "a"
    )
    "#);
}

#[test]
fn sets_are_sorted() {
    let set: HashSet<i32> = [3, 1, 2].into();
    assert_snapshot!(set.pretty().to_string(), @r"
    Set([
      1,
      2,
      3
    ])
    ");
    assert_snapshot!(HashSet::<i32>::new().pretty().to_string(), @"Set([])");
    assert_snapshot!(BTreeMap::<i32, i32>::new().pretty().to_string(), @"[:]");
}

#[test]
fn multi_line_strings_are_fenced() {
    let note = Note {
        body: "a\nb".to_string(),
    };
    assert_snapshot!(note.pretty().to_string(), @r#"
    Note(
      body: """
        a
        b
      """
    )
    "#);
    assert_snapshot!("a\nb".pretty().to_string(), @r#"
    """
    a
    b
    """
    "#);
}

#[test]
fn quotes_switch_to_raw_strings() {
    assert_snapshot!("say \"hi\"".pretty().to_string(), @r##"r#"say "hi""#"##);
}

#[test]
fn proxies_and_descriptions() {
    assert_snapshot!(PathBuf::from("/tmp/x").pretty().to_string(), @r#""/tmp/x""#);
    assert_snapshot!(Duration::from_millis(1500).pretty().to_string(), @"1.5s");
}

#[test]
fn cycles_render_a_placeholder() {
    let node = Rc::new(Node {
        value: 1,
        next: OnceCell::new(),
    });
    let _ = node.next.set(node.clone());
    assert_eq!(
        node.pretty().to_string(),
        format!("Node(\n  value: 1,\n  next: Node({REVISIT_MARKER})\n)")
    );
}
