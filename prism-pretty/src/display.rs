//! Display wrappers for pretty-printing reflected values

use core::fmt::{self, Display, Formatter};

use prism_core::Reflect;

use crate::printer::PrettyPrinter;

/// Display wrapper for any type that implements [`Reflect`].
pub struct PrettyDisplay<'a, T: Reflect + ?Sized> {
    pub(crate) value: &'a T,
    pub(crate) printer: PrettyPrinter,
}

impl<T: Reflect> Display for PrettyDisplay<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.printer.format_to(self.value, f)
    }
}

/// Extension trait for reflected types to easily pretty-print them
pub trait ReflectPretty: Reflect {
    /// Get a displayable wrapper that pretty-prints this value
    fn pretty(&self) -> PrettyDisplay<'_, Self>;

    /// Get a displayable wrapper with custom printer settings
    fn pretty_with(&self, printer: PrettyPrinter) -> PrettyDisplay<'_, Self>;
}

impl<T: Reflect> ReflectPretty for T {
    fn pretty(&self) -> PrettyDisplay<'_, Self> {
        PrettyDisplay {
            value: self,
            printer: PrettyPrinter::new(),
        }
    }

    fn pretty_with(&self, printer: PrettyPrinter) -> PrettyDisplay<'_, Self> {
        PrettyDisplay {
            value: self,
            printer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_testhelpers::test;

    #[test]
    fn test_pretty_display() {
        let value = vec![1, 2];
        assert_eq!(value.pretty().to_string(), "[\n  [0]: 1,\n  [1]: 2\n]");
    }

    #[test]
    fn test_pretty_with_custom_printer() {
        let value = vec![vec![1]];
        let printer = PrettyPrinter::new().with_indent_size(4).with_max_depth(1);
        assert_eq!(
            value.pretty_with(printer).to_string(),
            "[\n    [0]: […]\n]"
        );
    }
}
