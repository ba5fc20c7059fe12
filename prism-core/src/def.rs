use alloc::borrow::Cow;

use crate::{Peek, Reflect, Scalar, ValueId};

/// First character of labels that only exist to give children a stable
/// position (`.0`, `.1`, ...). Such labels take part in matching but are
/// never displayed.
pub const SYNTHETIC_LABEL_MARKER: char = '.';

/// One level of structure of a reflected value.
///
/// Each variant decides how the value is rendered and how two values of the
/// same shape are compared.
pub enum Def<'a> {
    /// An atomic value.
    Scalar(Scalar),

    /// Text. Multi-line text is compared line by line.
    Str(&'a str),

    /// A value that must be shown as this exact description and never
    /// decomposed.
    Description(Cow<'a, str>),

    /// A value that stands in for itself with a canonical proxy. Rendering
    /// and comparison happen on the proxy.
    Proxy(Peek<'a>),

    /// A record with (usually labeled) fields.
    Struct(Vec<Child<'a>>),

    /// An anonymous tuple. Elements carry positional labels.
    Tuple(Vec<Child<'a>>),

    /// An enum value: the active case and its payload.
    Enum {
        /// Name of the active case
        variant: &'a str,
        /// Associated values, empty for payload-less cases
        fields: Vec<Child<'a>>,
    },

    /// A value that may be absent. Present values are transparent.
    Option(Option<Peek<'a>>),

    /// An ordered sequence.
    List(Vec<Peek<'a>>),

    /// Key/value pairs without a meaningful order.
    Map(Vec<(Peek<'a>, Peek<'a>)>),

    /// Unique elements without a meaningful order.
    Set(Vec<Peek<'a>>),

    /// A reference-like value with an identity, shown like a struct.
    Object {
        /// Identity of the referenced value
        id: ValueId,
        /// Fields of the referenced value
        fields: Vec<Child<'a>>,
    },
}

impl Def<'_> {
    /// The display style of this definition.
    pub fn style(&self) -> DisplayStyle {
        match self {
            Def::Scalar(_) => DisplayStyle::Scalar,
            Def::Str(_) => DisplayStyle::Text,
            Def::Description(_) => DisplayStyle::Description,
            Def::Proxy(_) => DisplayStyle::Proxy,
            Def::Struct(_) => DisplayStyle::Struct,
            Def::Tuple(_) => DisplayStyle::Tuple,
            Def::Enum { .. } => DisplayStyle::Enum,
            Def::Option(_) => DisplayStyle::Option,
            Def::List(_) => DisplayStyle::List,
            Def::Map(_) => DisplayStyle::Map,
            Def::Set(_) => DisplayStyle::Set,
            Def::Object { .. } => DisplayStyle::Object,
        }
    }
}

/// The structural category of a reflected value, without its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayStyle {
    /// See [`Def::Scalar`]
    Scalar,
    /// See [`Def::Str`]
    Text,
    /// See [`Def::Description`]
    Description,
    /// See [`Def::Proxy`]
    Proxy,
    /// See [`Def::Struct`]
    Struct,
    /// See [`Def::Tuple`]
    Tuple,
    /// See [`Def::Enum`]
    Enum,
    /// See [`Def::Option`]
    Option,
    /// See [`Def::List`]
    List,
    /// See [`Def::Map`]
    Map,
    /// See [`Def::Set`]
    Set,
    /// See [`Def::Object`]
    Object,
}

/// A labeled slot inside a parent value.
#[derive(Clone)]
pub struct Child<'a> {
    /// The label. Labels starting with [`SYNTHETIC_LABEL_MARKER`] are positional.
    pub label: Option<Cow<'a, str>>,
    /// The value in the slot.
    pub value: Peek<'a>,
}

impl<'a> Child<'a> {
    /// A child with an explicit label.
    pub fn new(label: Option<Cow<'a, str>>, value: Peek<'a>) -> Self {
        Self { label, value }
    }

    /// A named field.
    pub fn named<T: Reflect>(label: &'a str, value: &'a T) -> Self {
        Self::new(Some(Cow::Borrowed(label)), Peek::new(value))
    }

    /// A positional field, labeled `.index`.
    pub fn positional<T: Reflect>(index: usize, value: &'a T) -> Self {
        Self::new(
            Some(Cow::Owned(format!("{SYNTHETIC_LABEL_MARKER}{index}"))),
            Peek::new(value),
        )
    }

    /// A child without any label.
    pub fn unlabeled<T: Reflect>(value: &'a T) -> Self {
        Self::new(None, Peek::new(value))
    }

    /// Whether the label only encodes a position.
    pub fn is_synthetic(&self) -> bool {
        self.label
            .as_deref()
            .is_some_and(|label| label.starts_with(SYNTHETIC_LABEL_MARKER))
    }

    /// The label as it should be shown, if any.
    pub fn display_label(&self) -> Option<&str> {
        if self.is_synthetic() {
            None
        } else {
            self.label.as_deref()
        }
    }
}
