use core::fmt;

/// Runtime type tag of a reflected value.
///
/// Two values can only be compared field by field when their shapes are
/// equal; anything else is a type mismatch.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shape {
    /// Fully qualified type name, as reported by [`core::any::type_name`].
    pub type_identifier: &'static str,
}

impl Shape {
    /// Returns the shape of `T`.
    pub fn of<T: ?Sized>() -> Self {
        Self {
            type_identifier: core::any::type_name::<T>(),
        }
    }

    /// Returns the type name with every module path stripped.
    ///
    /// `alloc::vec::Vec<app::model::User>` becomes `Vec<User>`.
    pub fn name(&self) -> String {
        let mut out = String::with_capacity(self.type_identifier.len());
        // Byte offset in `out` where the current path segment starts
        let mut segment_start = 0;
        let mut chars = self.type_identifier.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                ':' if chars.peek() == Some(&':') => {
                    chars.next();
                    out.truncate(segment_start);
                }
                c if c.is_alphanumeric() || c == '_' => out.push(c),
                c => {
                    out.push(c);
                    segment_start = out.len();
                }
            }
        }
        out
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_identifier)
    }
}

/// Identity token of a reference-like value.
///
/// Two values with equal ids are the same object. Ids are used to detect
/// cycles and to match elements by identity before falling back to
/// structural comparison.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueId {
    shape: Shape,
    addr: usize,
}

impl ValueId {
    /// Builds an id from an arbitrary token, such as an arena index.
    pub fn new(shape: Shape, token: usize) -> Self {
        Self { shape, addr: token }
    }

    /// Builds an id from the address a smart pointer points to.
    pub fn from_ptr<T: ?Sized>(shape: Shape, ptr: *const T) -> Self {
        Self {
            shape,
            addr: ptr.cast::<()>() as usize,
        }
    }

    /// The shape of the identified value.
    pub fn shape(&self) -> Shape {
        self.shape
    }
}

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:#x}", self.shape, self.addr)
    }
}

impl fmt::Debug for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
