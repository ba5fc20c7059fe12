use core::fmt;

/// An atomic value: something that is never decomposed further.
#[derive(Clone, Copy, Debug)]
pub enum Scalar {
    /// `()`
    Unit,
    /// `true` or `false`
    Bool(bool),
    /// A character
    Char(char),
    /// Any signed integer, widened
    Signed(i128),
    /// Any unsigned integer, widened
    Unsigned(u128),
    /// A 32-bit float
    F32(f32),
    /// A 64-bit float
    F64(f64),
}

impl PartialEq for Scalar {
    /// NaNs compare equal to NaNs of the same width, so that every value
    /// is equal to itself.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unit, Self::Unit) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Signed(a), Self::Signed(b)) => a == b,
            (Self::Unsigned(a), Self::Unsigned(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::F64(a), Self::F64(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("()"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Char(c) => write!(f, "{c:?}"),
            Self::Signed(n) => write!(f, "{n}"),
            Self::Unsigned(n) => write!(f, "{n}"),
            Self::F32(n) => write!(f, "{n:?}"),
            Self::F64(n) => write!(f, "{n:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_testhelpers::test;

    #[test]
    fn nan_equals_itself() {
        assert_eq!(Scalar::F64(f64::NAN), Scalar::F64(f64::NAN));
        assert_ne!(Scalar::F64(f64::NAN), Scalar::F32(f32::NAN));
        assert_ne!(Scalar::F64(1.0), Scalar::F64(f64::NAN));
    }

    #[test]
    fn widths_do_not_mix() {
        assert_ne!(Scalar::Signed(1), Scalar::Unsigned(1));
    }

    #[test]
    fn renders_literals() {
        assert_eq!(Scalar::Unit.to_string(), "()");
        assert_eq!(Scalar::Char('a').to_string(), "'a'");
        assert_eq!(Scalar::F64(1.0).to_string(), "1.0");
        assert_eq!(Scalar::Signed(-3).to_string(), "-3");
        assert_eq!(Scalar::Bool(true).to_string(), "true");
    }
}
