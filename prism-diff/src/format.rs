//! Line markers for diff output.

use alloc::borrow::Cow;

/// The markers put in front of every line of a diff.
///
/// Each line starts with one of the three markers followed by a space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffFormat {
    /// Marker for lines that only exist in the first value (default: "-")
    pub first: Cow<'static, str>,

    /// Marker for lines that only exist in the second value (default: "+")
    pub second: Cow<'static, str>,

    /// Marker for lines shared by both values (default: " ")
    pub both: Cow<'static, str>,
}

impl Default for DiffFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl DiffFormat {
    /// ASCII markers `-`, `+` and a space, for monospaced output
    pub const DEFAULT: Self = Self {
        first: Cow::Borrowed("-"),
        second: Cow::Borrowed("+"),
        both: Cow::Borrowed(" "),
    };

    /// Minus sign, plus and figure space, which line up in proportional fonts
    pub const PROPORTIONAL: Self = Self {
        first: Cow::Borrowed("\u{2212}"), // −
        second: Cow::Borrowed("+"),
        both: Cow::Borrowed("\u{2007}"), // figure space
    };

    /// A format with custom markers.
    pub fn new(
        first: impl Into<Cow<'static, str>>,
        second: impl Into<Cow<'static, str>>,
        both: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            both: both.into(),
        }
    }

    /// The marker for lines of `side`.
    pub fn marker(&self, side: Side) -> &str {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
            Side::Both => &self.both,
        }
    }
}

/// Which of the compared values a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Only in the first value
    First,
    /// Only in the second value
    Second,
    /// In both values
    Both,
}
