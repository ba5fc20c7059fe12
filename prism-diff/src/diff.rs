//! Structural diff of two reflected values.

use alloc::borrow::Cow;
use core::fmt::{self, Write};
use std::collections::HashSet;

use prism_core::{Child, Def, Peek, Reflect, ValueId, identical, structurally_equal};
use prism_pretty::{PrettyPrinter, REVISIT_MARKER, fence_hashes};

use crate::collapse::{Collapsed, UnchangedRun, summary_line};
use crate::format::{DiffFormat, Side};
use crate::output::Output;
use crate::sequences::{Alignment, Step};

/// Describes how `a` differs from `b`, or returns `None` when they are
/// structurally equal.
///
/// ```
/// let diff = prism_diff::diff(&vec![1, 2, 3, 4], &vec![1, 9, 3, 4]).unwrap();
/// assert_eq!(
///     diff,
///     [
///         "  [",
///         "    [0]: 1,",
///         "-   [1]: 2,",
///         "+   [1]: 9,",
///         "    … (2 unchanged)",
///         "  ]",
///     ]
///     .join("\n")
/// );
/// ```
pub fn diff<T: Reflect>(a: &T, b: &T) -> Option<String> {
    Differ::new().diff(a, b)
}

/// Like [`diff`], with custom line markers.
pub fn diff_with<T: Reflect>(a: &T, b: &T, format: &DiffFormat) -> Option<String> {
    Differ::new().with_format(format.clone()).diff(a, b)
}

/// Extension trait for reflected types to diff them against each other
pub trait ReflectDiff: Reflect {
    /// Describes how `self` differs from `other`; `None` when they are equal.
    fn diff(&self, other: &Self) -> Option<String>;
}

impl<T: Reflect> ReflectDiff for T {
    fn diff(&self, other: &Self) -> Option<String> {
        diff(self, other)
    }
}

/// Computes diffs with a given format and indentation.
#[derive(Clone, Debug, Default)]
pub struct Differ {
    format: DiffFormat,
    printer: PrettyPrinter,
}

impl Differ {
    /// A differ with the default markers and two-space indentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line markers
    pub fn with_format(mut self, format: DiffFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the indentation size, used both for nesting and for values
    /// rendered inside the diff
    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.printer = self.printer.with_indent_size(size);
        self
    }

    /// The line markers in use.
    pub fn format(&self) -> &DiffFormat {
        &self.format
    }

    /// Diff two values of the same type.
    pub fn diff<T: Reflect>(&self, a: &T, b: &T) -> Option<String> {
        self.diff_peek(&Peek::new(a), &Peek::new(b))
    }

    /// Diff two reflected values.
    pub fn diff_peek(&self, a: &Peek<'_>, b: &Peek<'_>) -> Option<String> {
        if structurally_equal(a, b) {
            trace!(shape = %a.shape(), "values are equal");
            return None;
        }
        let mut text = String::new();
        // Writing into a String cannot fail
        let _ = self.write_diff(&mut text, a, b);
        Some(text)
    }

    /// Writes the diff of `a` and `b` to `f`, without a trailing newline.
    ///
    /// Unlike [`Differ::diff_peek`] this does not check for equality first:
    /// equal values produce their summary line marked as unchanged.
    pub fn write_diff(&self, f: &mut dyn Write, a: &Peek<'_>, b: &Peek<'_>) -> fmt::Result {
        let mut run = DiffRun {
            printer: &self.printer,
            format: &self.format,
            out: Output::new(f),
            visited: HashSet::new(),
        };
        run.diff_help(a, b, None, None, "", 0)
    }
}

/// State of one diff call.
struct DiffRun<'d, 'w> {
    printer: &'d PrettyPrinter,
    format: &'d DiffFormat,
    out: Output<'w>,
    /// Objects already expanded during this call
    visited: HashSet<ValueId>,
}

/// One element of a container, with everything needed to match and show it.
struct Element<'a> {
    /// Compared under [`Equivalence::Label`]; positional labels included
    match_label: Option<Cow<'a, str>>,
    /// Shown in front of the value
    label: Option<String>,
    /// Compared under [`Equivalence::Key`]
    key: Option<Peek<'a>>,
    value: Peek<'a>,
}

impl<'a> Element<'a> {
    fn new(label: Option<String>, value: Peek<'a>) -> Self {
        Self {
            match_label: None,
            label,
            key: None,
            value,
        }
    }
}

/// When two elements of the same container count as the same element.
#[derive(Debug, Clone, Copy)]
enum Equivalence {
    Label,
    Key,
    IdentityOrValue,
}

impl Equivalence {
    fn holds(self, a: &Element<'_>, b: &Element<'_>) -> bool {
        match self {
            Self::Label => a.match_label == b.match_label,
            Self::Key => match (&a.key, &b.key) {
                (Some(a), Some(b)) => structurally_equal(a, b),
                _ => false,
            },
            Self::IdentityOrValue => {
                identical(&a.value, &b.value) || structurally_equal(&a.value, &b.value)
            }
        }
    }
}

/// How a container is framed and compared.
struct Container {
    prefix: String,
    suffix: String,
    element_indent: usize,
    /// Goes after every element but the last
    separator: &'static str,
    collapse: bool,
    /// Elements were sorted, so their neighbors carry no meaning
    sorted: bool,
    equivalence: Equivalence,
}

impl Container {
    fn record(prefix: String, element_indent: usize) -> Self {
        Self {
            prefix,
            suffix: ")".to_owned(),
            element_indent,
            separator: ",",
            collapse: false,
            sorted: false,
            equivalence: Equivalence::Label,
        }
    }

    fn list(element_indent: usize) -> Self {
        Self {
            prefix: "[".to_owned(),
            suffix: "]".to_owned(),
            element_indent,
            separator: ",",
            collapse: true,
            sorted: false,
            equivalence: Equivalence::IdentityOrValue,
        }
    }

    fn map(element_indent: usize) -> Self {
        Self {
            sorted: true,
            equivalence: Equivalence::Key,
            ..Self::list(element_indent)
        }
    }

    fn set(element_indent: usize) -> Self {
        Self {
            prefix: "Set([".to_owned(),
            suffix: "])".to_owned(),
            sorted: true,
            ..Self::list(element_indent)
        }
    }

    fn lines(hashes: &str, element_indent: usize) -> Self {
        Self {
            prefix: format!("{hashes}\"\"\""),
            suffix: format!("\"\"\"{hashes}"),
            element_indent,
            separator: "",
            collapse: false,
            sorted: false,
            equivalence: Equivalence::IdentityOrValue,
        }
    }
}

/// One line of a multi-line string, shown verbatim.
struct Line<'a>(&'a str);

impl Reflect for Line<'_> {
    fn reflect(&self) -> Def<'_> {
        Def::Description(Cow::Borrowed(self.0))
    }
}

fn fields(children: Vec<Child<'_>>) -> Vec<Element<'_>> {
    children
        .into_iter()
        .map(|child| Element {
            label: child.display_label().map(str::to_owned),
            match_label: child.label,
            key: None,
            value: child.value,
        })
        .collect()
}

fn indexed(items: Vec<Peek<'_>>) -> Vec<Element<'_>> {
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| Element::new(Some(format!("[{idx}]")), item))
        .collect()
}

fn lines(text: &str) -> Vec<Element<'_>> {
    text.split('\n')
        .map(|line| Element::new(None, Peek::owned(Line(line))))
        .collect()
}

impl DiffRun<'_, '_> {
    fn diff_help(
        &mut self,
        a: &Peek<'_>,
        b: &Peek<'_>,
        label_a: Option<&str>,
        label_b: Option<&str>,
        separator: &str,
        indent: usize,
    ) -> fmt::Result {
        if label_a == label_b && structurally_equal(a, b) {
            return self.render(Side::Both, a, label_a, indent, Some(0), separator);
        }

        let (def_a, def_b) = (a.def(), b.def());
        if let Def::Proxy(proxy) = &def_a {
            trace!(shape = %a.shape(), "proxy on the first side");
            return self.diff_help(proxy, b, label_a, label_b, separator, indent);
        }
        if let Def::Proxy(proxy) = &def_b {
            trace!(shape = %b.shape(), "proxy on the second side");
            return self.diff_help(a, proxy, label_a, label_b, separator, indent);
        }

        let shape = a.shape();
        if shape != b.shape() {
            debug!(a = %shape, b = %b.shape(), "shapes differ");
            return self.diff_everything(a, b, label_a, label_b, separator, indent);
        }

        if matches!(def_a, Def::Description(_)) || matches!(def_b, Def::Description(_)) {
            trace!(%shape, "description");
            return self.diff_everything(a, b, label_a, label_b, separator, indent);
        }
        if def_a.style() != def_b.style() {
            debug!(%shape, a = ?def_a.style(), b = ?def_b.style(), "display styles differ");
            return self.diff_everything(a, b, label_a, label_b, separator, indent);
        }
        trace!(%shape, style = ?def_a.style(), ?label_a, "dispatch");

        let indent_size = self.printer.indent_size();
        match (def_a, def_b) {
            (
                Def::Object {
                    id: id_a,
                    fields: fields_a,
                },
                Def::Object {
                    id: id_b,
                    fields: fields_b,
                },
            ) => {
                if self.visited.contains(&id_a) || self.visited.contains(&id_b) {
                    debug!(%id_a, %id_b, "object revisited");
                    let placeholder = format!("{shape}({REVISIT_MARKER})");
                    self.line(Side::First, label_a, &placeholder, indent, separator)?;
                    return self.line(Side::Second, label_b, &placeholder, indent, separator);
                }
                self.visited.insert(id_a);
                let container = Container::record(format!("{shape}("), indent_size);
                self.diff_children(
                    fields(fields_a),
                    fields(fields_b),
                    (label_a, label_b),
                    &container,
                    separator,
                    indent,
                )
            }
            (Def::Struct(fields_a), Def::Struct(fields_b)) => {
                let container = Container::record(format!("{shape}("), indent_size);
                self.diff_children(
                    fields(fields_a),
                    fields(fields_b),
                    (label_a, label_b),
                    &container,
                    separator,
                    indent,
                )
            }
            (Def::Tuple(fields_a), Def::Tuple(fields_b)) => {
                let container = Container::record("(".to_owned(), indent_size);
                self.diff_children(
                    fields(fields_a),
                    fields(fields_b),
                    (label_a, label_b),
                    &container,
                    separator,
                    indent,
                )
            }
            (
                Def::Enum {
                    variant: variant_a,
                    fields: fields_a,
                },
                Def::Enum {
                    variant: variant_b,
                    fields: fields_b,
                },
            ) => {
                if variant_a != variant_b || fields_a.is_empty() || fields_b.is_empty() {
                    debug!(%shape, variant_a, variant_b, "enum cases are not comparable");
                    return self.diff_everything(a, b, label_a, label_b, separator, indent);
                }
                let container = Container::record(format!("{shape}.{variant_a}("), indent_size);
                self.diff_children(
                    fields(fields_a),
                    fields(fields_b),
                    (label_a, label_b),
                    &container,
                    separator,
                    indent,
                )
            }
            (Def::Option(Some(inner_a)), Def::Option(Some(inner_b))) => {
                self.diff_help(&inner_a, &inner_b, label_a, label_b, separator, indent)
            }
            (Def::List(items_a), Def::List(items_b)) => {
                let (elements_a, elements_b) = (indexed(items_a), indexed(items_b));
                let container = Container::list(indent_size);
                self.diff_children(
                    elements_a,
                    elements_b,
                    (label_a, label_b),
                    &container,
                    separator,
                    indent,
                )
            }
            (Def::Map(entries_a), Def::Map(entries_b)) => {
                let elements_a = self.entries(entries_a);
                let elements_b = self.entries(entries_b);
                let container = Container::map(indent_size);
                self.diff_children(
                    elements_a,
                    elements_b,
                    (label_a, label_b),
                    &container,
                    separator,
                    indent,
                )
            }
            (Def::Set(items_a), Def::Set(items_b)) => {
                let elements_a = self.sorted_items(items_a);
                let elements_b = self.sorted_items(items_b);
                let container = Container::set(indent_size);
                self.diff_children(
                    elements_a,
                    elements_b,
                    (label_a, label_b),
                    &container,
                    separator,
                    indent,
                )
            }
            (Def::Str(text_a), Def::Str(text_b)) if text_a.contains('\n') || text_b.contains('\n') => {
                let hashes = "#".repeat(Ord::max(fence_hashes(text_a), fence_hashes(text_b)));
                let element_indent = if label_a.is_some() { indent_size } else { 0 };
                let container = Container::lines(&hashes, element_indent);
                self.diff_children(
                    lines(text_a),
                    lines(text_b),
                    (label_a, label_b),
                    &container,
                    separator,
                    indent,
                )
            }
            _ => self.diff_everything(a, b, label_a, label_b, separator, indent),
        }
    }

    /// Shows `a` as removed and `b` as inserted, both fully expanded.
    fn diff_everything(
        &mut self,
        a: &Peek<'_>,
        b: &Peek<'_>,
        label_a: Option<&str>,
        label_b: Option<&str>,
        separator: &str,
        indent: usize,
    ) -> fmt::Result {
        self.render(Side::First, a, label_a, indent, None, separator)?;
        self.render(Side::Second, b, label_b, indent, None, separator)
    }

    fn diff_children(
        &mut self,
        a: Vec<Element<'_>>,
        b: Vec<Element<'_>>,
        (label_a, label_b): (Option<&str>, Option<&str>),
        container: &Container,
        separator: &str,
        indent: usize,
    ) -> fmt::Result {
        if label_a == label_b {
            self.line(Side::Both, label_a, &container.prefix, indent, "")?;
        } else {
            // Map keys or list indices that moved: the opening line differs
            self.line(Side::First, label_a, &container.prefix, indent, "")?;
            self.line(Side::Second, label_b, &container.prefix, indent, "")?;
        }

        let steps = Alignment::compute(&a, &b, |x, y| container.equivalence.holds(x, y)).walk();
        let child_indent = indent + container.element_indent;
        let mut run = UnchangedRun::default();

        for (idx, step) in steps.iter().copied().enumerate() {
            let element_separator = if idx + 1 == steps.len() {
                ""
            } else {
                container.separator
            };

            if let Step::Matched(x, y) = step {
                if container.collapse && structurally_equal(&a[x].value, &b[y].value) {
                    run.push(y);
                    continue;
                }
            }
            self.flush(&mut run, &b, container, child_indent, container.separator)?;

            match step {
                Step::Matched(x, y) | Step::Replaced(x, y) => self.diff_help(
                    &a[x].value,
                    &b[y].value,
                    a[x].label.as_deref(),
                    b[y].label.as_deref(),
                    element_separator,
                    child_indent,
                )?,
                Step::Removal(x) => self.render(
                    Side::First,
                    &a[x].value,
                    a[x].label.as_deref(),
                    child_indent,
                    None,
                    element_separator,
                )?,
                Step::Insertion(y) => self.render(
                    Side::Second,
                    &b[y].value,
                    b[y].label.as_deref(),
                    child_indent,
                    None,
                    element_separator,
                )?,
            }
        }
        self.flush(&mut run, &b, container, child_indent, "")?;

        self.line(Side::Both, None, &container.suffix, indent, separator)
    }

    fn flush(
        &mut self,
        run: &mut UnchangedRun,
        elements: &[Element<'_>],
        container: &Container,
        indent: usize,
        separator: &str,
    ) -> fmt::Result {
        match run.flush(container.sorted) {
            Collapsed::Nothing => Ok(()),
            Collapsed::Single(idx) => {
                let element = &elements[idx];
                self.render(
                    Side::Both,
                    &element.value,
                    element.label.as_deref(),
                    indent,
                    Some(0),
                    separator,
                )
            }
            Collapsed::Summary(count) => {
                self.line(Side::Both, None, &summary_line(count), indent, separator)
            }
        }
    }

    /// Map entries labeled by their key, sorted by label.
    fn entries<'a>(&self, entries: Vec<(Peek<'a>, Peek<'a>)>) -> Vec<Element<'a>> {
        let mut elements: Vec<Element<'a>> = entries
            .into_iter()
            .map(|(key, value)| Element {
                match_label: None,
                label: Some(self.printer.format_short(&key)),
                key: Some(key),
                value,
            })
            .collect();
        elements.sort_by(|a, b| a.label.cmp(&b.label));
        elements
    }

    /// Set items, unlabeled, sorted by their single-line rendering.
    fn sorted_items<'a>(&self, items: Vec<Peek<'a>>) -> Vec<Element<'a>> {
        let mut keyed: Vec<(String, Peek<'a>)> = items
            .into_iter()
            .map(|item| (self.printer.format_short(&item), item))
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        keyed
            .into_iter()
            .map(|(_, item)| Element::new(None, item))
            .collect()
    }

    fn render(
        &mut self,
        side: Side,
        value: &Peek<'_>,
        label: Option<&str>,
        indent: usize,
        max_depth: Option<usize>,
        separator: &str,
    ) -> fmt::Result {
        let text = self.printer.render(value, label, indent, max_depth);
        self.out.block(self.format.marker(side), &text, separator)
    }

    fn line(
        &mut self,
        side: Side,
        label: Option<&str>,
        text: &str,
        indent: usize,
        separator: &str,
    ) -> fmt::Result {
        let line = match label {
            Some(label) => format!("{:indent$}{label}: {text}", ""),
            None => format!("{:indent$}{text}", ""),
        };
        self.out.block(self.format.marker(side), &line, separator)
    }
}
