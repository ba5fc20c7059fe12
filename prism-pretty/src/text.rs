//! Quoting rules for text values.

use core::fmt::{self, Write};

/// Number of `#` characters needed around a `"""` fence so that no line of
/// `text` can close it early.
pub fn fence_hashes(text: &str) -> usize {
    delimiter_hashes(text, "\"\"\"")
}

/// Writes `text` as a single-line string literal, switching to the raw form
/// (`r"…"`, `r#"…"#`, …) when it holds quotes or backslashes.
pub fn write_quoted(f: &mut dyn Write, text: &str) -> fmt::Result {
    if !text.contains(['"', '\\']) {
        return write!(f, "\"{text}\"");
    }
    let hashes = "#".repeat(delimiter_hashes(text, "\""));
    write!(f, "r{hashes}\"{text}\"{hashes}")
}

fn delimiter_hashes(text: &str, delimiter: &str) -> usize {
    let mut hashes = 0;
    let mut rest = text;
    while let Some(idx) = rest.find(delimiter) {
        rest = &rest[idx + delimiter.len()..];
        let trailing = rest.len() - rest.trim_start_matches('#').len();
        hashes = Ord::max(hashes, trailing + 1);
    }
    hashes
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_testhelpers::test;

    fn quoted(text: &str) -> String {
        let mut out = String::new();
        write_quoted(&mut out, text).unwrap();
        out
    }

    #[test]
    fn plain_text_is_quoted() {
        assert_eq!(quoted("hello"), r#""hello""#);
    }

    #[test]
    fn quotes_switch_to_raw_strings() {
        assert_eq!(quoted(r#"say "hi""#), r##"r#"say "hi""#"##);
        assert_eq!(quoted(r##"a"#b"##), r###"r##"a"#b"##"###);
        assert_eq!(quoted(r"C:\dir"), r#"r"C:\dir""#);
    }

    #[test]
    fn fences_grow_with_embedded_fences() {
        assert_eq!(fence_hashes("a\nb"), 0);
        assert_eq!(fence_hashes("a\n\"\"\"\nb"), 1);
        assert_eq!(fence_hashes("a\n\"\"\"##\nb"), 3);
    }
}
