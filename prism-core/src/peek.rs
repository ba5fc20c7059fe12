use alloc::rc::Rc;
use core::fmt;

use crate::{Def, DisplayStyle, Shape, ValueId, structurally_equal};

/// A type whose values can be introspected.
///
/// Implementations return one level of structure at a time; children are
/// reflected only when somebody asks for them.
pub trait Reflect {
    /// Describes the value.
    fn reflect(&self) -> Def<'_>;

    /// The runtime type tag of the value.
    fn shape(&self) -> Shape {
        Shape::of::<Self>()
    }
}

/// A read-only handle to a reflected value.
///
/// The value is either borrowed or, for proxies and values synthesized during
/// reflection, owned. Cloning a `Peek` is cheap in both cases.
#[derive(Clone)]
pub struct Peek<'a> {
    value: PeekValue<'a>,
}

#[derive(Clone)]
enum PeekValue<'a> {
    Borrowed(&'a dyn Reflect),
    Owned(Rc<dyn Reflect + 'a>),
}

impl<'a> Peek<'a> {
    /// Creates a handle borrowing `value`.
    pub fn new<T: Reflect>(value: &'a T) -> Self {
        Self {
            value: PeekValue::Borrowed(value),
        }
    }

    /// Creates a handle owning `value`.
    pub fn owned<T: Reflect + 'a>(value: T) -> Self {
        Self {
            value: PeekValue::Owned(Rc::new(value)),
        }
    }

    fn as_dyn(&self) -> &dyn Reflect {
        match &self.value {
            PeekValue::Borrowed(value) => *value,
            PeekValue::Owned(value) => value.as_ref(),
        }
    }

    /// The runtime type tag of the value.
    pub fn shape(&self) -> Shape {
        self.as_dyn().shape()
    }

    /// Reflects one level of the value.
    pub fn def(&self) -> Def<'_> {
        self.as_dyn().reflect()
    }

    /// The display style of the value.
    pub fn style(&self) -> DisplayStyle {
        self.def().style()
    }

    /// The identity of the value, if it is reference-like.
    pub fn id(&self) -> Option<ValueId> {
        match self.def() {
            Def::Object { id, .. } => Some(id),
            _ => None,
        }
    }
}

impl PartialEq for Peek<'_> {
    fn eq(&self, other: &Self) -> bool {
        structurally_equal(self, other)
    }
}

impl fmt::Debug for Peek<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Peek({:?})", self.shape())
    }
}
