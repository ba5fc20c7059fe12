//! Pretty printer implementation for reflected values

use alloc::borrow::Cow;
use core::fmt::{self, Write};
use std::collections::HashSet;

use prism_core::{Child, Def, Peek, Reflect, ValueId};

use crate::text::{fence_hashes, write_quoted};

/// Shown between the parentheses of a reference-like value that is met again
/// while it is still being rendered, as in `Node(↩︎)`.
pub const REVISIT_MARKER: &str = "\u{21a9}\u{fe0e}";

/// A formatter for pretty-printing reflected values
#[derive(Clone, Debug)]
pub struct PrettyPrinter {
    indent_size: usize,
    max_depth: Option<usize>,
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self {
            indent_size: 2,
            max_depth: None,
        }
    }
}

impl PrettyPrinter {
    /// Create a new PrettyPrinter with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation size
    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }

    /// Set the maximum depth for recursive printing
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Number of spaces added per nesting level.
    pub fn indent_size(&self) -> usize {
        self.indent_size
    }

    /// Format a value to a string
    pub fn format<T: Reflect>(&self, value: &T) -> String {
        self.format_peek(&Peek::new(value))
    }

    /// Format a value to a writer
    pub fn format_to<T: Reflect>(&self, value: &T, f: &mut dyn Write) -> fmt::Result {
        self.render_to(f, &Peek::new(value), None, 0, self.max_depth)
    }

    /// Format a value to a string
    pub fn format_peek(&self, value: &Peek<'_>) -> String {
        self.render(value, None, 0, self.max_depth)
    }

    /// Formats a value on a single line, fully expanded.
    ///
    /// This is the rendering maps and sets are sorted by.
    pub fn format_short(&self, value: &Peek<'_>) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = Render::new(self, true).value(&mut out, value, None, 0, None);
        out
    }

    /// Renders `value` with every line indented by `indent` spaces.
    ///
    /// The first line starts with `label: ` when a label is given. Containers
    /// nested deeper than `max_depth` are summarized as `Type(…)`, `[…]` and
    /// so on; `Some(0)` summarizes the value itself.
    pub fn render(
        &self,
        value: &Peek<'_>,
        label: Option<&str>,
        indent: usize,
        max_depth: Option<usize>,
    ) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.render_to(&mut out, value, label, indent, max_depth);
        out
    }

    /// Like [`PrettyPrinter::render`], writing to `f`.
    pub fn render_to(
        &self,
        f: &mut dyn Write,
        value: &Peek<'_>,
        label: Option<&str>,
        indent: usize,
        max_depth: Option<usize>,
    ) -> fmt::Result {
        write_indent(f, indent)?;
        Render::new(self, false).value(f, value, label, indent, max_depth)
    }
}

type Entry<'a> = (Option<Cow<'a, str>>, Peek<'a>);

/// State of one rendering call.
struct Render<'p> {
    printer: &'p PrettyPrinter,
    /// Everything goes on one line
    short: bool,
    /// Objects on the current path
    visited: HashSet<ValueId>,
}

impl<'p> Render<'p> {
    fn new(printer: &'p PrettyPrinter, short: bool) -> Self {
        Self {
            printer,
            short,
            visited: HashSet::new(),
        }
    }

    /// Writes `label: value`. The cursor is expected at `indent` already.
    fn value(
        &mut self,
        f: &mut dyn Write,
        value: &Peek<'_>,
        label: Option<&str>,
        indent: usize,
        depth: Option<usize>,
    ) -> fmt::Result {
        if let Some(label) = label {
            write!(f, "{label}: ")?;
        }
        self.body(f, value, label.is_some(), indent, depth)
    }

    fn body(
        &mut self,
        f: &mut dyn Write,
        value: &Peek<'_>,
        labeled: bool,
        indent: usize,
        depth: Option<usize>,
    ) -> fmt::Result {
        let shape = value.shape();
        match value.def() {
            Def::Scalar(scalar) => write!(f, "{scalar}"),
            Def::Str(text) => self.text(f, text, labeled, indent),
            Def::Description(description) => self.description(f, &description, indent),
            Def::Proxy(proxy) => self.body(f, &proxy, labeled, indent, depth),
            Def::Option(Some(inner)) => self.body(f, &inner, labeled, indent, depth),
            Def::Option(None) => f.write_str("None"),
            Def::Struct(fields) => {
                let open = format!("{shape}(");
                self.children(f, &open, ")", displayed(fields), indent, depth)
            }
            Def::Tuple(fields) => self.children(f, "(", ")", displayed(fields), indent, depth),
            Def::Enum { variant, fields } if fields.is_empty() => write!(f, "{shape}.{variant}"),
            Def::Enum { variant, fields } => {
                let open = format!("{shape}.{variant}(");
                self.children(f, &open, ")", displayed(fields), indent, depth)
            }
            Def::Object { id, fields } => {
                if !self.visited.insert(id) {
                    return write!(f, "{shape}({REVISIT_MARKER})");
                }
                let open = format!("{shape}(");
                let result = self.children(f, &open, ")", displayed(fields), indent, depth);
                self.visited.remove(&id);
                result
            }
            Def::List(items) => {
                let short = self.short;
                let entries = items
                    .into_iter()
                    .enumerate()
                    .map(|(idx, item)| {
                        let label = (!short).then(|| Cow::Owned(format!("[{idx}]")));
                        (label, item)
                    })
                    .collect();
                self.children(f, "[", "]", entries, indent, depth)
            }
            Def::Map(entries) if entries.is_empty() => f.write_str("[:]"),
            Def::Map(entries) => {
                let mut entries: Vec<Entry<'_>> = entries
                    .into_iter()
                    .map(|(key, value)| (Some(Cow::Owned(self.printer.format_short(&key))), value))
                    .collect();
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                self.children(f, "[", "]", entries, indent, depth)
            }
            Def::Set(items) => {
                let mut keyed: Vec<(String, Peek<'_>)> = items
                    .into_iter()
                    .map(|item| (self.printer.format_short(&item), item))
                    .collect();
                keyed.sort_by(|a, b| a.0.cmp(&b.0));
                let entries = keyed.into_iter().map(|(_, item)| (None, item)).collect();
                self.children(f, "Set([", "])", entries, indent, depth)
            }
        }
    }

    fn children(
        &mut self,
        f: &mut dyn Write,
        open: &str,
        close: &str,
        entries: Vec<Entry<'_>>,
        indent: usize,
        depth: Option<usize>,
    ) -> fmt::Result {
        if entries.is_empty() {
            return write!(f, "{open}{close}");
        }

        if self.short {
            f.write_str(open)?;
            for (idx, (label, value)) in entries.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                self.value(f, value, label.as_deref(), indent, None)?;
            }
            return f.write_str(close);
        }

        if depth == Some(0) {
            return write!(f, "{open}…{close}");
        }
        let depth = depth.map(|depth| depth - 1);
        let child_indent = indent + self.printer.indent_size;

        writeln!(f, "{open}")?;
        let last = entries.len() - 1;
        for (idx, (label, value)) in entries.iter().enumerate() {
            write_indent(f, child_indent)?;
            self.value(f, value, label.as_deref(), child_indent, depth)?;
            if idx < last {
                f.write_char(',')?;
            }
            writeln!(f)?;
        }
        write_indent(f, indent)?;
        f.write_str(close)
    }

    fn text(&mut self, f: &mut dyn Write, text: &str, labeled: bool, indent: usize) -> fmt::Result {
        if !text.contains('\n') {
            return write_quoted(f, text);
        }
        if self.short {
            return write!(f, "{text:?}");
        }

        let hashes = "#".repeat(fence_hashes(text));
        let line_indent = if labeled {
            indent + self.printer.indent_size
        } else {
            indent
        };
        writeln!(f, "{hashes}\"\"\"")?;
        for line in text.split('\n') {
            write_indent(f, line_indent)?;
            writeln!(f, "{line}")?;
        }
        write_indent(f, indent)?;
        write!(f, "\"\"\"{hashes}")
    }

    fn description(&mut self, f: &mut dyn Write, description: &str, indent: usize) -> fmt::Result {
        for (idx, line) in description.split('\n').enumerate() {
            if idx > 0 {
                if self.short {
                    f.write_char(' ')?;
                } else {
                    writeln!(f)?;
                    write_indent(f, indent)?;
                }
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Children with positional labels stripped.
fn displayed(fields: Vec<Child<'_>>) -> Vec<Entry<'_>> {
    fields
        .into_iter()
        .map(|child| {
            let label = if child.is_synthetic() {
                None
            } else {
                child.label
            };
            (label, child.value)
        })
        .collect()
}

fn write_indent(f: &mut dyn Write, indent: usize) -> fmt::Result {
    write!(f, "{:indent$}", "")
}
